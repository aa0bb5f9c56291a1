// Mon Aug 24 2026 - Alex

pub mod loader;
pub mod raw;

pub use loader::{load_file, load_str, SchemaError};
pub use raw::{RawBitItem, RawBitfield, RawField, RawOpaque, RawStruct, RawUnion, RawWord};
