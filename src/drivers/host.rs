/// What the renderer reads from the display container it is embedded in.
///
/// Implementations are called from both the tick driver and the sample source, so
/// they must be cheap and thread safe.
pub trait ScanHost: Send + Sync {
    /// Column the scan cursor currently sits on.
    fn current_scan_pixel(&self) -> i32;
    /// Time, in ms, at which the cursor reached `current_scan_pixel`.
    fn current_scan_window_time_ms(&self) -> i64;
    /// Time the cursor takes to sweep the full inner width, in ms.
    fn scan_window_duration_ms(&self) -> f64;
    fn inner_width(&self) -> u32;
    fn inner_height(&self) -> u32;
    /// Asks the container to flush the canvas to screen.
    fn request_repaint(&self);
}
