//! Value and time to pixel conversions. Nothing here clamps: results outside the
//! canvas are legal and the canvas clips them.
use crate::drivers::config::AxisRange;
/// Unrounded y for `value`; `axis.max` maps to 0 and `axis.min` to `inner_height`.
pub fn value_to_y(value: f64, inner_height: u32, axis: &AxisRange) -> f64 {
    inner_height as f64 * (axis.max - value) / (axis.max - axis.min)
}
/// Pixel row for `value`, truncated toward zero.
pub fn value_to_pixel_y(value: f64, inner_height: u32, axis: &AxisRange) -> i32 {
    value_to_y(value, inner_height, axis) as i32
}
/// Pixel column of a sample taken at `sample_ms`, given that the scan cursor sat at
/// `cursor_px` at `window_ref_ms` and sweeps `inner_width` pixels per `window_ms`.
pub fn time_to_pixel_x(
    sample_ms: i64,
    cursor_px: i32,
    window_ref_ms: i64,
    inner_width: u32,
    window_ms: f64,
) -> i32 {
    let offset = (sample_ms - window_ref_ms) as f64 * inner_width as f64 / window_ms;
    (cursor_px as f64 + offset) as i32
}
