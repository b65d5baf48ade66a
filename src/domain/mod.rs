pub mod attributes;
pub mod dashboard;
pub mod errors;
pub mod logging;
pub mod page;
