pub mod bootstrap;
pub mod chart_js;
pub mod dom;
pub mod logging;

pub use logging::{BrowserTimeProvider, ConsoleLogger};
