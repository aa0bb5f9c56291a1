// Wed Aug 26 2026 - Alex

pub mod abbrev;
pub mod layout;
pub mod render;

pub use abbrev::abbreviate_name;
pub use layout::{layout, DescLine, DiagramLayout};
pub use render::{render, render_to_string, DiagramStyle};
