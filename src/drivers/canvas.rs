use plotters::coord::Shift;
use plotters::prelude::*;
use crate::drivers::error::DisplayError;
use crate::drivers::plot::encode_png;
/// How far outside the canvas a coordinate may lie before it is pulled in. The
/// bitmap rasterizer clips per pixel but walks the whole span in `i32`.
const MARGIN: i32 = 1 << 16;
/// Persistent RGB raster the sweep panel draws into. Every mutation goes through a
/// plotters `BitMapBackend` opened over the buffer, so callers may pass coordinates
/// far outside it.
pub struct Canvas {
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    background: RGBColor,
}
impl Canvas {
    pub fn new(width: u32, height: u32, background: RGBColor) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::EmptyCanvas { width, height });
        }
        let mut canvas = Self {
            buffer: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
            background,
        };
        canvas.clear()?;
        Ok(canvas)
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    /// Row-major RGB bytes, three per pixel.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
    pub fn pixel(&self, x: i32, y: i32) -> Option<RGBColor> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 3;
        let [r, g, b] = [self.buffer[at], self.buffer[at + 1], self.buffer[at + 2]];
        Some(RGBColor(r, g, b))
    }
    pub fn is_background(&self, x: i32, y: i32) -> bool {
        self.pixel(x, y).is_some_and(|c| c == self.background)
    }
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        let background = self.background;
        let area = self.area();
        area.fill(&background)?;
        area.present()?;
        Ok(())
    }
    /// Clears columns `[from, to)` over the full height. Returns the clipped column
    /// range actually touched, if any.
    pub fn clear_columns(
        &mut self,
        from: i32,
        to: i32,
    ) -> Result<Option<(u32, u32)>, DisplayError> {
        let Some((start, end)) = self.clip_columns(from, to) else {
            return Ok(None);
        };
        let (background, height) = (self.background, self.height as i32);
        let area = self.area();
        // The bitmap backend fills up to, not including, the lower-right corner.
        area.draw(&Rectangle::new(
            [(start as i32, 0), (end as i32, height)],
            background.filled(),
        ))?;
        area.present()?;
        Ok(Some((start, end)))
    }
    /// Horizontal span over columns `[from, to)` on row `y`.
    pub fn hline(
        &mut self,
        from: i32,
        to: i32,
        y: i32,
        color: RGBColor,
    ) -> Result<(), DisplayError> {
        if y < 0 || y as u32 >= self.height {
            return Ok(());
        }
        let Some((start, end)) = self.clip_columns(from, to) else {
            return Ok(());
        };
        let area = self.area();
        area.draw(&PathElement::new(
            vec![(start as i32, y), (end as i32 - 1, y)],
            &color,
        ))?;
        area.present()?;
        Ok(())
    }
    /// Draws the segment `from`–`to` starting at `from`. Axis-aligned segments include
    /// both ends; diagonal ones are antialiased and may stop one pixel short of `to`.
    pub fn segment(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: RGBColor,
    ) -> Result<(), DisplayError> {
        let (from, to) = (self.bound(from), self.bound(to));
        let area = self.area();
        area.draw(&PathElement::new(vec![from, to], &color))?;
        area.present()?;
        Ok(())
    }
    pub fn to_png(&self) -> Result<Vec<u8>, DisplayError> {
        encode_png(&self.buffer, self.width, self.height)
    }
    fn area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height)).into_drawing_area()
    }
    fn bound(&self, (x, y): (i32, i32)) -> (i32, i32) {
        let far = |extent: u32| i32::try_from(extent).unwrap_or(i32::MAX).saturating_add(MARGIN);
        (x.clamp(-MARGIN, far(self.width)), y.clamp(-MARGIN, far(self.height)))
    }
    fn clip_columns(&self, from: i32, to: i32) -> Option<(u32, u32)> {
        let start = from.max(0) as i64;
        let end = (to as i64).min(self.width as i64);
        (start < end).then(|| (start as u32, end as u32))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::colors::{BLACK, RED, WHITE};
    fn canvas() -> Canvas {
        Canvas::new(100, 60, BLACK).unwrap()
    }
    #[test]
    fn empty_geometry_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, BLACK),
            Err(DisplayError::EmptyCanvas { width: 0, height: 10 })
        ));
    }
    #[test]
    fn starts_filled_with_background() {
        let c = Canvas::new(7, 3, RGBColor(10, 20, 30)).unwrap();
        assert_eq!(c.buffer().len(), 7 * 3 * 3);
        assert!(c.buffer().chunks(3).all(|p| p == [10, 20, 30]));
        assert_eq!(c.pixel(7, 0), None);
        assert_eq!(c.pixel(0, -1), None);
    }
    #[test]
    fn clear_columns_clips_to_canvas() {
        let mut c = canvas();
        c.segment((0, 5), (99, 5), WHITE).unwrap();
        assert_eq!(c.clear_columns(-20, 10).unwrap(), Some((0, 10)));
        assert!(c.is_background(9, 5));
        assert_eq!(c.pixel(10, 5), Some(WHITE));
        assert_eq!(c.clear_columns(95, 400).unwrap(), Some((95, 100)));
        assert!(c.is_background(99, 5));
        assert_eq!(c.pixel(94, 5), Some(WHITE));
        assert_eq!(c.clear_columns(120, 140).unwrap(), None);
        assert_eq!(c.clear_columns(30, 30).unwrap(), None);
        assert_eq!(c.clear_columns(i32::MIN, i32::MAX).unwrap(), Some((0, 100)));
    }
    #[test]
    fn hline_covers_half_open_span() {
        let mut c = canvas();
        c.hline(4, 8, 20, RED).unwrap();
        assert!(c.is_background(3, 20));
        assert_eq!(c.pixel(4, 20), Some(RED));
        assert_eq!(c.pixel(7, 20), Some(RED));
        assert!(c.is_background(8, 20));
        assert!(c.is_background(5, 19));
        c.hline(0, 100, 60, RED).unwrap();
        c.hline(0, 100, -1, RED).unwrap();
        assert!(c.is_background(50, 59));
        assert!(c.is_background(50, 0));
    }
    #[test]
    fn segments_start_at_first_endpoint() {
        let mut c = canvas();
        c.segment((10, 10), (30, 30), RED).unwrap();
        assert_eq!(c.pixel(10, 10), Some(RED));
        assert_eq!(c.pixel(20, 20), Some(RED));
        assert!(c.is_background(30, 10));
        c.segment((50, 40), (70, 40), WHITE).unwrap();
        assert_eq!(c.pixel(50, 40), Some(WHITE));
        assert_eq!(c.pixel(70, 40), Some(WHITE));
        assert!(c.is_background(71, 40));
        c.segment((80, 20), (80, 10), WHITE).unwrap();
        assert_eq!(c.pixel(80, 10), Some(WHITE));
        assert_eq!(c.pixel(80, 20), Some(WHITE));
    }
    #[test]
    fn wild_coordinates_are_clipped() {
        let mut c = canvas();
        c.segment((i32::MIN, i32::MIN), (i32::MAX, i32::MAX), RED).unwrap();
        c.segment((-500, 30), (500, 30), RED).unwrap();
        assert_eq!(c.pixel(0, 30), Some(RED));
        assert_eq!(c.pixel(99, 30), Some(RED));
        c.segment((-10, -10), (-5, 200), RED).unwrap();
        c.segment((i32::MIN, 45), (i32::MIN, i32::MAX), RED).unwrap();
        c.segment((10, i32::MAX), (90, i32::MAX), RED).unwrap();
        assert!(c.is_background(0, 0));
        assert!(c.is_background(0, 45));
        assert!(c.is_background(50, 59));
    }
    #[test]
    fn clear_resets_everything() {
        let mut c = canvas();
        c.segment((0, 0), (99, 59), WHITE).unwrap();
        c.hline(0, 100, 10, RED).unwrap();
        c.clear().unwrap();
        assert!(c.buffer().chunks(3).all(|p| p == [0, 0, 0]));
    }
    #[test]
    fn encodes_png() {
        let png = canvas().to_png().unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 100);
        assert_eq!(decoded.height(), 60);
    }
}
