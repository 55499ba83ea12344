//! Report writers
//!
//! Text forms follow the enumerated `index: value` layout the downstream
//! optimal-control tool reads; every report also serializes to JSON.

pub mod bounds;
pub mod format;
pub mod nodes;

pub use bounds::{BoundsReport, ColumnBounds};
pub use format::format_float;
pub use nodes::NodeDataReport;
