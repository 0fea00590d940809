use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use std::io::Cursor;
use crate::drivers::canvas::Canvas;
use crate::drivers::config::AxisRange;
use crate::drivers::error::DisplayError;
use crate::drivers::mapper::value_to_pixel_y;
#[derive(Clone, Debug)]
pub struct PanelStyle {
    pub background: RGBColor,
    /// Colour of the zero and threshold reference lines.
    pub grid: RGBColor,
    pub axis: RGBColor,
    pub palette: Vec<RGBColor>,
    /// Width of the axis strip in exported snapshots.
    pub axis_width: u32,
    pub tick_step: f64,
}
impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            background: RGBColor(10, 10, 10),
            grid: RGBColor(90, 90, 90),
            axis: RGBColor(200, 200, 200),
            palette: vec![BLUE, RED, GREEN, CYAN, MAGENTA, YELLOW, WHITE],
            axis_width: 40,
            tick_step: 5.0,
        }
    }
}
impl PanelStyle {
    pub fn channel_color(&self, channel: usize) -> RGBColor {
        if self.palette.is_empty() {
            return WHITE;
        }
        self.palette[channel % self.palette.len()]
    }
}
/// Composes the west axis strip and the canvas side by side into a PNG.
pub fn render_panel_png(
    canvas: &Canvas,
    axis: &AxisRange,
    style: &PanelStyle,
) -> Result<Vec<u8>, DisplayError> {
    let width = style.axis_width + canvas.width();
    let height = canvas.height();
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        let (axis_area, plot_area) = root.split_horizontally(style.axis_width);
        if style.axis_width > 0 {
            let spine = style.axis_width as i32 - 1;
            let bottom = height as i32 - 1;
            axis_area.draw(&PathElement::new(vec![(spine, 0), (spine, bottom)], &style.axis))?;
            for tick in axis.ticks(style.tick_step) {
                let y = value_to_pixel_y(tick, height, axis).clamp(0, bottom);
                let length = if tick == 0.0 { 8 } else { 4 };
                axis_area.draw(&PathElement::new(
                    vec![((spine - length).max(0), y), (spine, y)],
                    &style.axis,
                ))?;
            }
        }
        let trace = BitMapElement::with_ref((0, 0), (canvas.width(), height), canvas.buffer())
            .ok_or_else(|| DisplayError::Plot("canvas buffer does not match its size".into()))?;
        plot_area.draw(&trace)?;
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
pub(crate) fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, DisplayError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| DisplayError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
