use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::drivers::error::DisplayError;
/// Channel identifiers arrive as 32-bit maps, so no panel can plot more than this.
pub const MAX_CHANNELS: usize = 32;
/// Vertical axis of the sweep panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
    /// Digits after the decimal point in tick labels.
    pub decimals: usize,
}
impl AxisRange {
    pub fn new(
        min: f64,
        max: f64,
        unit: impl Into<String>,
        decimals: usize,
    ) -> Result<Self, DisplayError> {
        let axis = Self {
            min,
            max,
            unit: unit.into(),
            decimals,
        };
        axis.validate()?;
        Ok(axis)
    }
    pub fn validate(&self) -> Result<(), DisplayError> {
        // NaN bounds fail this comparison too.
        if !(self.min < self.max) || !self.min.is_finite() || !self.max.is_finite() {
            return Err(DisplayError::InvalidAxisRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
    /// Tick values that are whole multiples of `step` inside `[min, max]`.
    pub fn ticks(&self, step: f64) -> Vec<f64> {
        if !(step > 0.0) {
            return Vec::new();
        }
        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
    /// Tick labels with the unit appended, e.g. `"-10 dB"`.
    pub fn tick_labels(&self, step: f64) -> Vec<(f64, String)> {
        self.ticks(step)
            .into_iter()
            .map(|v| (v, format!("{} {}", self.format_value(v), self.unit)))
            .collect()
    }
}
impl Default for AxisRange {
    fn default() -> Self {
        // Background noise levels, in dB.
        Self {
            min: -10.0,
            max: 25.0,
            unit: "dB".to_owned(),
            decimals: 0,
        }
    }
}
/// Everything the sweep panel used to hard-code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub name: String,
    pub axis: AxisRange,
    /// Pixels cleared ahead of the scan cursor.
    pub clear_lookahead: i32,
    /// Number of channels the panel keeps line state for.
    pub channels: usize,
    /// Level of the threshold reference line, in axis units.
    pub threshold: f64,
}
impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name: "Sweep background panel".to_owned(),
            axis: AxisRange::default(),
            clear_lookahead: 4,
            channels: MAX_CHANNELS,
            threshold: 6.0,
        }
    }
}
impl DisplayConfig {
    pub fn from_json_str(text: &str) -> Result<Self, DisplayError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DisplayError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded display config from {}", path.display());
        Ok(config)
    }
    pub fn validate(&self) -> Result<(), DisplayError> {
        self.axis.validate()?;
        if self.clear_lookahead < 0 {
            return Err(DisplayError::InvalidConfig(format!(
                "clear_lookahead must not be negative, got {}",
                self.clear_lookahead
            )));
        }
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(DisplayError::InvalidConfig(format!(
                "channels must be within 1..={MAX_CHANNELS}, got {}",
                self.channels
            )));
        }
        if !self.threshold.is_finite() {
            return Err(DisplayError::InvalidConfig("threshold must be finite".into()));
        }
        Ok(())
    }
}
