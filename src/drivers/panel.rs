use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use crate::drivers::canvas::Canvas;
use crate::drivers::config::{AxisRange, DisplayConfig};
use crate::drivers::error::DisplayError;
use crate::drivers::host::ScanHost;
use crate::drivers::mapper::{time_to_pixel_x, value_to_pixel_y};
use crate::drivers::plot::{render_panel_png, PanelStyle};
use crate::drivers::scan::{ReferenceLines, ScanState, TickOutcome};
use crate::drivers::source::{SampleListener, SampleSource};
use crate::drivers::subscription::Subscription;
use crate::drivers::tracker::{ChannelPoint, ChannelTable, LineStep};
use crate::types::Sample;
/// Counters for what the handlers have done since the panel was built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub ticks: u64,
    pub columns_cleared: u64,
    pub wraps: u64,
    pub segments_drawn: u64,
    pub segments_suppressed: u64,
    pub samples_anchored: u64,
    pub samples_rejected: u64,
    pub geometry_resets: u64,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    /// The host has no drawable area yet (or the panel is closed).
    NoCanvas,
    Plotted { channel: usize, step: LineStep },
}
struct PanelState {
    canvas: Option<Canvas>,
    scan: ScanState,
    lines: ChannelTable,
    threshold: f64,
    stats: RenderStats,
    closed: bool,
}
impl PanelState {
    fn forget_lines(&mut self) {
        self.scan.reset();
        self.lines.reset();
    }
}
/// Incremental renderer behind one sweep panel.
///
/// The tick driver and the sample source call in from their own threads. Each
/// handler holds the state mutex for its whole run, so a band clear and a segment
/// never interleave. The host's repaint hook is called after the lock is released.
pub struct SweepRenderer {
    config: DisplayConfig,
    style: PanelStyle,
    host: Arc<dyn ScanHost>,
    state: Mutex<PanelState>,
}
impl SweepRenderer {
    pub fn new(
        config: DisplayConfig,
        style: PanelStyle,
        host: Arc<dyn ScanHost>,
    ) -> Result<Self, DisplayError> {
        config.validate()?;
        let state = PanelState {
            canvas: None,
            scan: ScanState::new(config.clear_lookahead),
            lines: ChannelTable::new(config.channels),
            threshold: config.threshold,
            stats: RenderStats::default(),
            closed: false,
        };
        Ok(Self {
            config,
            style,
            host,
            state: Mutex::new(state),
        })
    }
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
    /// The panel's west axis.
    pub fn axis(&self) -> &AxisRange {
        &self.config.axis
    }
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }
    pub fn stats(&self) -> RenderStats {
        self.lock().stats
    }
    pub fn scan_state(&self) -> ScanState {
        self.lock().scan
    }
    pub fn channel_point(&self, channel: usize) -> Option<ChannelPoint> {
        self.lock().lines.get(channel)
    }
    pub fn threshold(&self) -> f64 {
        self.lock().threshold
    }
    /// Moves the threshold line. Already drawn columns keep the old line until the
    /// cursor clears them.
    pub fn set_threshold(&self, threshold: f64) {
        self.lock().threshold = threshold;
    }
    pub fn has_canvas(&self) -> bool {
        let mut state = self.lock();
        self.sync_geometry(&mut state);
        state.canvas.is_some()
    }
    /// Runs `f` against the canvas while holding the panel lock.
    pub fn with_canvas<R>(&self, f: impl FnOnce(&Canvas) -> R) -> Option<R> {
        let mut state = self.lock();
        self.sync_geometry(&mut state);
        state.canvas.as_ref().map(f)
    }
    pub fn snapshot_png(&self) -> Result<Option<Vec<u8>>, DisplayError> {
        self.with_canvas(|canvas| render_panel_png(canvas, &self.config.axis, &self.style))
            .transpose()
    }
    /// Scan clock notification: clears ahead of the host's current cursor.
    pub fn on_tick(&self) -> TickOutcome {
        self.tick_at(self.host.current_scan_pixel())
    }
    pub fn tick_at(&self, current: i32) -> TickOutcome {
        let mut state = self.lock();
        self.sync_geometry(&mut state);
        let PanelState {
            canvas,
            scan,
            lines,
            threshold,
            stats,
            ..
        } = &mut *state;
        let Some(canvas) = canvas.as_mut() else {
            return TickOutcome::Idle;
        };
        let height = canvas.height();
        let reference = ReferenceLines {
            zero_y: value_to_pixel_y(0.0, height, &self.config.axis),
            threshold_y: value_to_pixel_y(*threshold, height, &self.config.axis),
            color: self.style.grid,
        };
        let outcome = match scan.advance(canvas, current, &reference) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("{}: scan clear at {current} failed: {err}", self.config.name);
                return TickOutcome::Idle;
            }
        };
        match outcome {
            TickOutcome::Idle => return outcome,
            TickOutcome::Wrapped { .. } => {
                lines.reset();
                stats.wraps += 1;
            }
            TickOutcome::Advanced { .. } => {}
        }
        stats.ticks += 1;
        stats.columns_cleared += outcome.cleared_columns() as u64;
        drop(state);
        self.host.request_repaint();
        outcome
    }
    /// Plots one sample, reporting why it was dropped if it was.
    pub fn try_plot(&self, sample: &Sample) -> Result<SampleOutcome, DisplayError> {
        let channel = sample.channel()?;
        if channel >= self.config.channels {
            return Err(DisplayError::ChannelOutOfRange {
                index: channel,
                capacity: self.config.channels,
            });
        }
        if !sample.value.is_finite() {
            return Err(DisplayError::NonFiniteValue(sample.value));
        }
        let mut state = self.lock();
        self.sync_geometry(&mut state);
        let PanelState {
            canvas,
            lines,
            stats,
            ..
        } = &mut *state;
        let Some(canvas) = canvas.as_mut() else {
            return Ok(SampleOutcome::NoCanvas);
        };
        let window_ms = self.host.scan_window_duration_ms();
        if !(window_ms > 0.0) {
            return Err(DisplayError::DegenerateScanWindow(window_ms));
        }
        let x = time_to_pixel_x(
            sample.timestamp_ms,
            self.host.current_scan_pixel(),
            self.host.current_scan_window_time_ms(),
            canvas.width(),
            window_ms,
        );
        let y = value_to_pixel_y(sample.value, canvas.height(), &self.config.axis);
        let color = self.style.channel_color(channel);
        let step = lines.plot(canvas, channel, ChannelPoint::new(x, y), color)?;
        match step {
            LineStep::Anchored(_) => stats.samples_anchored += 1,
            LineStep::Drawn { .. } => stats.segments_drawn += 1,
            LineStep::Suppressed { .. } => stats.segments_suppressed += 1,
        }
        drop(state);
        if matches!(step, LineStep::Drawn { .. }) {
            self.host.request_repaint();
        }
        Ok(SampleOutcome::Plotted { channel, step })
    }
    /// Geometry hook for the container: drops the canvas and line state and
    /// reallocates at the host's current inner size.
    pub fn on_resize(&self) {
        let mut state = self.lock();
        if state.closed {
            return;
        }
        state.canvas = None;
        self.sync_geometry(&mut state);
    }
    /// Blanks the canvas and forgets where every line and the cursor were.
    pub fn reset(&self) -> Result<(), DisplayError> {
        let mut state = self.lock();
        state.forget_lines();
        match state.canvas.as_mut() {
            Some(canvas) => canvas.clear(),
            None => Ok(()),
        }
    }
    /// Releases the canvas for good; later handler calls are no-ops.
    pub fn release(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.canvas = None;
        state.forget_lines();
    }
    fn lock(&self) -> MutexGuard<'_, PanelState> {
        // Handlers leave the state consistent between steps, so a poisoned lock is
        // still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
    /// Brings the canvas in line with the host's inner size. A size change means
    /// every stored coordinate is stale, so line and cursor state go with it.
    fn sync_geometry(&self, state: &mut PanelState) {
        if state.closed {
            return;
        }
        let (width, height) = (self.host.inner_width(), self.host.inner_height());
        if let Some(canvas) = &state.canvas {
            if canvas.width() == width && canvas.height() == height {
                return;
            }
        } else if width == 0 || height == 0 {
            return;
        }
        state.forget_lines();
        state.stats.geometry_resets += 1;
        state.canvas = match Canvas::new(width, height, self.style.background) {
            Ok(canvas) => {
                log::debug!("{}: canvas now {width}x{height}", self.config.name);
                Some(canvas)
            }
            Err(err) => {
                log::debug!("{}: no canvas ({err})", self.config.name);
                None
            }
        };
    }
}
impl SampleListener for SweepRenderer {
    fn name(&self) -> &str {
        &self.config.name
    }
    fn on_sample(&self, sample: &Sample) {
        if let Err(err) = self.try_plot(sample) {
            self.lock().stats.samples_rejected += 1;
            log::warn!(
                "{}: dropped sample at {} ms: {err}",
                self.config.name,
                sample.timestamp_ms
            );
        }
    }
    /// The visible sweep, so a freshly attached panel can be filled from history.
    fn required_history(&self) -> Duration {
        let window_ms = self.host.scan_window_duration_ms();
        if window_ms.is_finite() && window_ms > 0.0 {
            Duration::from_secs_f64(window_ms / 1_000.0)
        } else {
            Duration::ZERO
        }
    }
}
/// A sweep panel attached to its sample source. Dropping or closing it detaches
/// before the canvas is released.
pub struct SweepPanel {
    renderer: Arc<SweepRenderer>,
    subscription: Subscription,
}
impl SweepPanel {
    pub fn open(
        config: DisplayConfig,
        style: PanelStyle,
        host: Arc<dyn ScanHost>,
        source: Arc<dyn SampleSource>,
    ) -> Result<Self, DisplayError> {
        let renderer = Arc::new(SweepRenderer::new(config, style, host)?);
        renderer.on_resize();
        let subscription = Subscription::attach(source, renderer.clone());
        Ok(Self {
            renderer,
            subscription,
        })
    }
    pub fn renderer(&self) -> &Arc<SweepRenderer> {
        &self.renderer
    }
    pub fn on_tick(&self) -> TickOutcome {
        self.renderer.on_tick()
    }
    pub fn is_attached(&self) -> bool {
        self.subscription.is_attached()
    }
    pub fn close(mut self) {
        self.teardown();
    }
    fn teardown(&mut self) {
        if self.subscription.is_attached() {
            self.subscription.detach();
            self.renderer.release();
            log::info!("{} closed", self.renderer.config().name);
        }
    }
}
impl Drop for SweepPanel {
    fn drop(&mut self) {
        self.teardown();
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::source::SampleHub;
    use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64, AtomicUsize, Ordering};
    use std::thread;
    use plotters::style::RGBColor;
    /// 1000 px wide sweep of 10 s: one pixel per 10 ms.
    struct FakeHost {
        cursor: AtomicI32,
        cursor_time: AtomicI64,
        /// `f64` bits of the window duration in ms.
        window_ms: AtomicU64,
        width: AtomicU32,
        height: AtomicU32,
        repaints: AtomicUsize,
    }
    impl FakeHost {
        fn new(width: u32, height: u32) -> Arc<Self> {
            Arc::new(Self {
                cursor: AtomicI32::new(0),
                cursor_time: AtomicI64::new(0),
                window_ms: AtomicU64::new(10_000f64.to_bits()),
                width: AtomicU32::new(width),
                height: AtomicU32::new(height),
                repaints: AtomicUsize::new(0),
            })
        }
        fn move_cursor(&self, pixel: i32, time_ms: i64) {
            self.cursor.store(pixel, Ordering::SeqCst);
            self.cursor_time.store(time_ms, Ordering::SeqCst);
        }
        fn set_window_ms(&self, window_ms: f64) {
            self.window_ms.store(window_ms.to_bits(), Ordering::SeqCst);
        }
        fn repaints(&self) -> usize {
            self.repaints.load(Ordering::SeqCst)
        }
    }
    impl ScanHost for FakeHost {
        fn current_scan_pixel(&self) -> i32 {
            self.cursor.load(Ordering::SeqCst)
        }
        fn current_scan_window_time_ms(&self) -> i64 {
            self.cursor_time.load(Ordering::SeqCst)
        }
        fn scan_window_duration_ms(&self) -> f64 {
            f64::from_bits(self.window_ms.load(Ordering::SeqCst))
        }
        fn inner_width(&self) -> u32 {
            self.width.load(Ordering::SeqCst)
        }
        fn inner_height(&self) -> u32 {
            self.height.load(Ordering::SeqCst)
        }
        fn request_repaint(&self) {
            self.repaints.fetch_add(1, Ordering::SeqCst);
        }
    }
    fn renderer(host: &Arc<FakeHost>) -> SweepRenderer {
        SweepRenderer::new(DisplayConfig::default(), PanelStyle::default(), host.clone()).unwrap()
    }
    const GRID: RGBColor = RGBColor(90, 90, 90);
    #[test]
    fn tick_clears_band_and_redraws_reference_lines() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(50, 500);
        assert_eq!(r.on_tick(), TickOutcome::Advanced { band: Some((4, 54)) });
        assert_eq!(r.scan_state().last_clear_pixel(), 50);
        // 70 px over 35 dB: zero at row 50, threshold (6 dB) at row 38.
        r.with_canvas(|c| {
            for x in [4, 20, 53] {
                assert_eq!(c.pixel(x, 50), Some(GRID));
                assert_eq!(c.pixel(x, 38), Some(GRID));
            }
            assert!(c.is_background(3, 50));
            assert!(c.is_background(54, 50));
        })
        .unwrap();
        assert_eq!(host.repaints(), 1);
    }
    #[test]
    fn repeated_tick_is_idempotent() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(50, 500);
        r.on_tick();
        assert_eq!(r.on_tick(), TickOutcome::Idle);
        let stats = r.stats();
        assert_eq!(stats.ticks, 1);
        assert_eq!(stats.columns_cleared, 50);
        assert_eq!(host.repaints(), 1);
    }
    #[test]
    fn samples_connect_in_channel_colour() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(100, 1_000);
        let first = r.try_plot(&Sample::new(1_000, 2, 7.5)).unwrap();
        assert_eq!(
            first,
            SampleOutcome::Plotted {
                channel: 2,
                step: LineStep::Anchored(ChannelPoint::new(100, 35)),
            }
        );
        let second = r.try_plot(&Sample::new(1_200, 2, 7.5)).unwrap();
        assert!(matches!(
            second,
            SampleOutcome::Plotted {
                step: LineStep::Drawn { .. },
                ..
            }
        ));
        assert_eq!(r.channel_point(2), Some(ChannelPoint::new(120, 35)));
        let green = r.style().channel_color(2);
        r.with_canvas(|c| assert_eq!(c.pixel(110, 35), Some(green))).unwrap();
        assert_eq!(host.repaints(), 1);
    }
    #[test]
    fn wrapped_sample_draws_nothing() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(990, 9_900);
        r.try_plot(&Sample::new(9_900, 3, 0.0)).unwrap();
        host.move_cursor(5, 10_050);
        let outcome = r.try_plot(&Sample::new(10_050, 3, 0.0)).unwrap();
        assert!(matches!(
            outcome,
            SampleOutcome::Plotted {
                step: LineStep::Suppressed { .. },
                ..
            }
        ));
        assert_eq!(r.channel_point(3), Some(ChannelPoint::new(5, 50)));
        assert_eq!(r.stats().segments_suppressed, 1);
        r.with_canvas(|c| assert!(c.is_background(500, 50))).unwrap();
    }
    #[test]
    fn backward_tick_resets_lines() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(900, 9_000);
        r.on_tick();
        r.try_plot(&Sample::new(9_000, 0, 1.0)).unwrap();
        host.move_cursor(10, 10_100);
        let outcome = r.on_tick();
        assert!(matches!(outcome, TickOutcome::Wrapped { .. }));
        assert_eq!(r.channel_point(0), None);
        assert_eq!(r.stats().wraps, 1);
    }
    #[test]
    fn rejects_bad_channels() {
        let host = FakeHost::new(1000, 70);
        let config = DisplayConfig {
            channels: 4,
            ..DisplayConfig::default()
        };
        let r = SweepRenderer::new(config, PanelStyle::default(), host.clone()).unwrap();
        let multiplexed = Sample {
            timestamp_ms: 0,
            channel_map: 0b101,
            value: 0.0,
        };
        assert!(matches!(
            r.try_plot(&multiplexed),
            Err(DisplayError::AmbiguousChannel(0b101))
        ));
        assert!(matches!(
            r.try_plot(&Sample::new(0, 9, 0.0)),
            Err(DisplayError::ChannelOutOfRange { index: 9, capacity: 4 })
        ));
        r.on_sample(&Sample::new(0, 9, 0.0));
        r.on_sample(&multiplexed);
        assert_eq!(r.stats().samples_rejected, 2);
        assert_eq!(r.stats().samples_anchored, 0);
    }
    #[test]
    fn non_finite_values_are_dropped() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(100, 1_000);
        r.try_plot(&Sample::new(1_000, 0, 7.5)).unwrap();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                r.try_plot(&Sample::new(1_100, 0, value)),
                Err(DisplayError::NonFiniteValue(_))
            ));
            r.on_sample(&Sample::new(1_100, 0, value));
        }
        assert_eq!(r.channel_point(0), Some(ChannelPoint::new(100, 35)));
        let stats = r.stats();
        assert_eq!(stats.samples_rejected, 3);
        assert_eq!(stats.samples_anchored, 1);
        assert_eq!(stats.segments_drawn, 0);
        assert_eq!(host.repaints(), 0);
    }
    #[test]
    fn degenerate_window_rejects_sample() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        for window_ms in [0.0, -5.0, f64::NAN] {
            host.set_window_ms(window_ms);
            assert!(matches!(
                r.try_plot(&Sample::new(500, 1, 2.0)),
                Err(DisplayError::DegenerateScanWindow(_))
            ));
        }
        assert_eq!(r.channel_point(1), None);
        assert_eq!(r.required_history(), Duration::ZERO);
        r.on_sample(&Sample::new(500, 1, 2.0));
        assert_eq!(r.stats().samples_rejected, 1);
        host.set_window_ms(10_000.0);
        assert!(matches!(
            r.try_plot(&Sample::new(500, 1, 2.0)),
            Ok(SampleOutcome::Plotted { channel: 1, .. })
        ));
    }
    #[test]
    fn reset_blanks_canvas_and_forgets_lines() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(300, 3_000);
        r.on_tick();
        r.try_plot(&Sample::new(3_000, 0, 7.5)).unwrap();
        r.try_plot(&Sample::new(3_200, 0, 7.5)).unwrap();
        r.try_plot(&Sample::new(3_000, 5, 1.0)).unwrap();
        let blue = r.style().channel_color(0);
        r.with_canvas(|c| assert_eq!(c.pixel(310, 35), Some(blue))).unwrap();
        r.reset().unwrap();
        let background = r.style().background;
        let blank = r
            .with_canvas(|c| {
                c.buffer()
                    .chunks(3)
                    .all(|p| p == [background.0, background.1, background.2])
            })
            .unwrap();
        assert!(blank);
        assert_eq!(r.scan_state().last_clear_pixel(), 0);
        assert!((0..r.config().channels).all(|ch| r.channel_point(ch).is_none()));
        assert_eq!(r.stats().geometry_resets, 1);
        let next = r.try_plot(&Sample::new(3_300, 0, 7.5)).unwrap();
        assert!(matches!(
            next,
            SampleOutcome::Plotted {
                step: LineStep::Anchored(_),
                ..
            }
        ));
    }
    #[test]
    fn no_area_means_silent_no_op() {
        let host = FakeHost::new(0, 0);
        let r = renderer(&host);
        host.move_cursor(30, 300);
        assert_eq!(r.on_tick(), TickOutcome::Idle);
        assert_eq!(r.try_plot(&Sample::new(300, 0, 1.0)).unwrap(), SampleOutcome::NoCanvas);
        assert!(!r.has_canvas());
        assert_eq!(host.repaints(), 0);
        assert_eq!(r.scan_state().last_clear_pixel(), 0);
    }
    #[test]
    fn geometry_change_resets_state() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        host.move_cursor(200, 2_000);
        r.on_tick();
        r.try_plot(&Sample::new(2_000, 1, 3.0)).unwrap();
        host.width.store(800, Ordering::SeqCst);
        assert!(r.with_canvas(|c| c.width()) == Some(800));
        assert_eq!(r.scan_state().last_clear_pixel(), 0);
        assert_eq!(r.channel_point(1), None);
        r.on_resize();
        assert_eq!(r.stats().geometry_resets, 3);
    }
    #[test]
    fn threshold_change_applies_to_next_band() {
        let host = FakeHost::new(1000, 70);
        let r = renderer(&host);
        r.set_threshold(20.0);
        host.move_cursor(10, 100);
        r.on_tick();
        // 20 dB sits at row 10.
        r.with_canvas(|c| assert_eq!(c.pixel(8, 10), Some(GRID))).unwrap();
        assert_eq!(r.threshold(), 20.0);
    }
    #[test]
    fn required_history_is_visible_window() {
        let host = FakeHost::new(1000, 70);
        assert_eq!(renderer(&host).required_history(), Duration::from_secs(10));
    }
    #[test]
    fn panel_stops_receiving_after_close() {
        let host = FakeHost::new(1000, 70);
        let hub = Arc::new(SampleHub::new());
        let panel = SweepPanel::open(
            DisplayConfig::default(),
            PanelStyle::default(),
            host.clone(),
            hub.clone(),
        )
        .unwrap();
        let renderer = Arc::clone(panel.renderer());
        assert!(panel.is_attached());
        hub.publish(Sample::new(0, 0, 1.0));
        hub.publish(Sample::new(100, 0, 2.0));
        assert_eq!(renderer.stats().segments_drawn, 1);
        panel.close();
        assert_eq!(hub.listener_count(), 0);
        for t in 2..100 {
            hub.publish(Sample::new(t * 100, 0, 2.0));
        }
        let stats = renderer.stats();
        assert_eq!(stats.segments_drawn, 1);
        assert_eq!(stats.samples_anchored, 1);
        assert!(!renderer.has_canvas());
    }
    #[test]
    fn concurrent_ticks_and_samples_do_not_tear() {
        let host = FakeHost::new(1000, 70);
        let hub = Arc::new(SampleHub::new());
        let panel = SweepPanel::open(
            DisplayConfig::default(),
            PanelStyle::default(),
            host.clone(),
            hub.clone(),
        )
        .unwrap();
        let renderer = Arc::clone(panel.renderer());
        let publisher = {
            let hub = Arc::clone(&hub);
            thread::spawn(move || {
                for t in 0..2_000i64 {
                    hub.publish(Sample::new(t * 5, (t % 4) as usize, (t % 30) as f64 - 5.0));
                }
            })
        };
        let ticker = {
            let host = Arc::clone(&host);
            let renderer = Arc::clone(&renderer);
            thread::spawn(move || {
                for step in 0..2_000i32 {
                    host.move_cursor(step % 1000, step as i64 * 10);
                    renderer.on_tick();
                }
            })
        };
        publisher.join().unwrap();
        ticker.join().unwrap();
        let stats = renderer.stats();
        assert_eq!(stats.samples_rejected, 0);
        assert!(stats.wraps >= 1);
        panel.close();
    }
}
