use plotters::style::RGBColor;
use crate::drivers::canvas::Canvas;
use crate::drivers::error::DisplayError;
/// Last plotted pixel of one channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelPoint {
    pub x: i32,
    pub y: i32,
}
impl ChannelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
/// What plotting one sample did to its channel's line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStep {
    /// First point since the last reset. Nothing is drawn: a fresh entry holds no
    /// point at all rather than a (0,0) origin, so no segment is ever drawn from the
    /// top-left corner.
    Anchored(ChannelPoint),
    Drawn { from: ChannelPoint, to: ChannelPoint },
    /// The new point lies left of the previous one, so the sweep wrapped.
    Suppressed { from: ChannelPoint, to: ChannelPoint },
}
/// Per-channel line continuity, indexed by dense channel number.
#[derive(Clone, Debug)]
pub struct ChannelTable {
    points: Vec<Option<ChannelPoint>>,
}
impl ChannelTable {
    pub fn new(channels: usize) -> Self {
        Self {
            points: vec![None; channels],
        }
    }
    pub fn capacity(&self) -> usize {
        self.points.len()
    }
    pub fn get(&self, channel: usize) -> Option<ChannelPoint> {
        self.points.get(channel).copied().flatten()
    }
    pub fn active(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
    pub fn reset(&mut self) {
        self.points.iter_mut().for_each(|p| *p = None);
    }
    /// Connects the channel's previous point to `to` unless the sweep wrapped, then
    /// stores `to` either way.
    pub fn plot(
        &mut self,
        canvas: &mut Canvas,
        channel: usize,
        to: ChannelPoint,
        color: RGBColor,
    ) -> Result<LineStep, DisplayError> {
        let capacity = self.capacity();
        let slot = self
            .points
            .get_mut(channel)
            .ok_or(DisplayError::ChannelOutOfRange {
                index: channel,
                capacity,
            })?;
        let step = match *slot {
            None => LineStep::Anchored(to),
            Some(from) if to.x >= from.x => {
                canvas.segment((from.x, from.y), (to.x, to.y), color)?;
                LineStep::Drawn { from, to }
            }
            Some(from) => LineStep::Suppressed { from, to },
        };
        *slot = Some(to);
        Ok(step)
    }
}
