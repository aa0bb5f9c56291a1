// Mon Aug 24 2026 - Alex

pub mod bit_range;
pub mod enum_spec;
pub mod field;
pub mod width;

pub use bit_range::BitRange;
pub use enum_spec::EnumSpec;
pub use field::{Access, Bitfield, BitfieldItem, Field, Opaque, StructField, UnionField, Word};
pub use width::WordWidth;
