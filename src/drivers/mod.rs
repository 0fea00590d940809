// src/drivers/mod.rs
pub mod canvas;
pub mod config;
pub mod error;
pub mod host;
pub mod mapper;
pub mod panel;
pub mod plot;
pub mod scan;
pub mod source;
pub mod subscription;
pub mod tracker;
pub use canvas::Canvas;
pub use config::{AxisRange, DisplayConfig, MAX_CHANNELS};
pub use error::DisplayError;
pub use host::ScanHost;
pub use mapper::{time_to_pixel_x, value_to_pixel_y, value_to_y};
pub use panel::{RenderStats, SampleOutcome, SweepPanel, SweepRenderer};
pub use plot::{render_panel_png, PanelStyle};
pub use scan::{ReferenceLines, ScanState, TickOutcome};
pub use source::{ListenerId, SampleHub, SampleListener, SampleSource};
pub use subscription::Subscription;
pub use tracker::{ChannelPoint, ChannelTable, LineStep};
