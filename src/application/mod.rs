pub mod chart_config;
pub mod page_controller;

pub use chart_config::ChartConfig;
pub use page_controller::{MountOutcome, MountReport, PageComponent, PageController};
