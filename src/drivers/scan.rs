use plotters::style::RGBColor;
use crate::drivers::canvas::Canvas;
use crate::drivers::error::DisplayError;
/// Rows of the two horizontal markers restored after every clear.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceLines {
    pub zero_y: i32,
    pub threshold_y: i32,
    pub color: RGBColor,
}
impl ReferenceLines {
    fn redraw(&self, canvas: &mut Canvas, (start, end): (u32, u32)) -> Result<(), DisplayError> {
        let (start, end) = (start as i32, end as i32);
        canvas.hline(start, end, self.zero_y, self.color)?;
        canvas.hline(start, end, self.threshold_y, self.color)
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Cursor has not moved since the last tick.
    Idle,
    /// Cursor moved right; the band is `None` when it fell entirely off the canvas.
    Advanced { band: Option<(u32, u32)> },
    /// Cursor jumped back to the left edge. Line state must be dropped by the caller.
    Wrapped {
        tail: Option<(u32, u32)>,
        head: Option<(u32, u32)>,
    },
}
impl TickOutcome {
    pub fn cleared_columns(&self) -> u32 {
        let width = |band: &Option<(u32, u32)>| band.map_or(0, |(s, e)| e - s);
        match self {
            TickOutcome::Idle => 0,
            TickOutcome::Advanced { band } => width(band),
            TickOutcome::Wrapped { tail, head } => width(tail) + width(head),
        }
    }
}
/// Tracks which columns ahead of the scan cursor have been cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanState {
    last_clear_pixel: i32,
    clear_lookahead: i32,
}
impl ScanState {
    pub fn new(clear_lookahead: i32) -> Self {
        Self {
            last_clear_pixel: 0,
            clear_lookahead,
        }
    }
    pub fn last_clear_pixel(&self) -> i32 {
        self.last_clear_pixel
    }
    pub fn clear_lookahead(&self) -> i32 {
        self.clear_lookahead
    }
    pub fn reset(&mut self) {
        self.last_clear_pixel = 0;
    }
    /// Clears the band between the previous and the current cursor, both shifted by
    /// the look-ahead, and restores the reference lines inside it.
    pub fn advance(
        &mut self,
        canvas: &mut Canvas,
        current: i32,
        lines: &ReferenceLines,
    ) -> Result<TickOutcome, DisplayError> {
        let last = self.last_clear_pixel;
        if current == last {
            return Ok(TickOutcome::Idle);
        }
        let ahead = self.clear_lookahead;
        let (from, to) = (last.saturating_add(ahead), current.saturating_add(ahead));
        let outcome = if current > last {
            let band = canvas.clear_columns(from, to)?;
            if let Some(band) = band {
                lines.redraw(canvas, band)?;
            }
            TickOutcome::Advanced { band }
        } else {
            let width = canvas.width().min(i32::MAX as u32) as i32;
            let tail = canvas.clear_columns(from, width)?;
            let head = canvas.clear_columns(0, to)?;
            for band in [tail, head].into_iter().flatten() {
                lines.redraw(canvas, band)?;
            }
            TickOutcome::Wrapped { tail, head }
        };
        log::trace!("scan {last} -> {current}: {outcome:?}");
        self.last_clear_pixel = current;
        Ok(outcome)
    }
}
