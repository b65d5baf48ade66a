//! Dashboard aggregate: order counters and earnings trend bound from page data.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
