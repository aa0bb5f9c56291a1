// Mon Aug 24 2026 - Alex

pub mod align;
pub mod naming;
pub mod resolver;

pub use align::alignment_of;
pub use naming::{derive_name, is_positional_marker};
pub use resolver::resolve;
