use thiserror::Error;
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("axis range is empty: min {min} must be below max {max}")]
    InvalidAxisRange { min: f64, max: f64 },
    #[error("invalid display config: {0}")]
    InvalidConfig(String),
    #[error("channel map {0:#010x} does not name exactly one channel")]
    AmbiguousChannel(u32),
    #[error("channel {index} is outside the {capacity} configured channels")]
    ChannelOutOfRange { index: usize, capacity: usize },
    #[error("sample value {0} is not finite")]
    NonFiniteValue(f64),
    #[error("scan window duration must be positive, got {0} ms")]
    DegenerateScanWindow(f64),
    #[error("canvas needs a non-empty area, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("drawing failed: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for DisplayError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        DisplayError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for DisplayError {
    fn from(value: image::ImageError) -> Self {
        DisplayError::Plot(value.to_string())
    }
}
