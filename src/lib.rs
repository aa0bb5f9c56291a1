// Mon Aug 24 2026 - Alex

pub mod accessors;
pub mod config;
pub mod diagram;
pub mod error;
pub mod model;
pub mod resolve;
pub mod schema;
pub mod ui;
pub mod utils;

pub use accessors::{AccessorOptions, Accessors};
pub use config::Config;
pub use diagram::{DiagramLayout, DiagramStyle};
pub use error::LayoutError;
pub use model::Field;
pub use resolve::resolve;
