// Mon Aug 24 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("{path}: declared offset is {declared} but there are {computed} bytes of other fields behind this one")]
    OffsetMismatch {
        path: String,
        declared: u64,
        computed: u64,
    },
    #[error("{path}: byte offset {offset} is not a multiple of the {bytes}-byte word width")]
    Alignment { path: String, offset: u64, bytes: u64 },
    #[error("{path}: bit field widths do not add up to word size, off by {remaining}")]
    BitfieldWidthMismatch { path: String, remaining: i64 },
    #[error("{path}: has {attribute} despite being nameless (unused)")]
    UnusedMetadata {
        path: String,
        attribute: &'static str,
    },
    #[error("{path}: nested structs are not supported")]
    NestedStructUnsupported { path: String },
    #[error("{member} of union {path}: {reason}")]
    UnionMemberConstraint {
        path: String,
        member: String,
        reason: &'static str,
    },
    #[error("{path}: union must have at least one member")]
    EmptyUnion { path: String },
    #[error("enum in {path} has {entry} = {value} which is outside [{min}, {max}]")]
    EnumRange {
        path: String,
        entry: String,
        value: i64,
        min: i128,
        max: i128,
    },
    #[error("multiple items resolve to the name {name:?}; use more distinct names or avoid anonymous bitfields")]
    DuplicateName { name: String },
    #[error("{path}: no unused abbreviation of {name:?} fits in {max_letters} letters")]
    AbbreviationExhausted {
        path: String,
        name: String,
        max_letters: usize,
    },
    #[error("{path}: bitfields over 32 bits wide are not supported")]
    BitfieldTooWide { path: String, bits: u32 },
    #[error("{path}: straddles a 32 bit boundary ({start} -> {end}), which is not supported")]
    Straddle { path: String, start: u64, end: u64 },
    #[error("{path}: not an even number of 32 bit words in size, which is not supported (width: {bits})")]
    UnalignedBlobWidth { path: String, bits: u64 },
    #[error("{path}: unsupported word width {bits}, must be 8, 16, 32 or 64")]
    UnsupportedWordWidth { path: String, bits: u32 },
    #[error("the name {name:?} collides with the internal naming scheme, please use a different name")]
    ReservedName { name: String },
    #[error("{path}: resolves to an empty fully-qualified name")]
    EmptyName { path: String },
    #[error("{path}: has a short name {short_name:?} but no name")]
    ShortNameWithoutName { path: String, short_name: String },
    #[error("{path}: bits is invalid, must be a positive whole number")]
    InvalidBitCount { path: String },
    #[error("accessor generation requires a named struct at the root, found {kind}")]
    UnsupportedRoot { kind: &'static str },
}

impl LayoutError {
    pub fn path(&self) -> Option<&str> {
        match self {
            LayoutError::OffsetMismatch { path, .. }
            | LayoutError::Alignment { path, .. }
            | LayoutError::BitfieldWidthMismatch { path, .. }
            | LayoutError::UnusedMetadata { path, .. }
            | LayoutError::NestedStructUnsupported { path }
            | LayoutError::UnionMemberConstraint { path, .. }
            | LayoutError::EmptyUnion { path }
            | LayoutError::EnumRange { path, .. }
            | LayoutError::AbbreviationExhausted { path, .. }
            | LayoutError::BitfieldTooWide { path, .. }
            | LayoutError::Straddle { path, .. }
            | LayoutError::UnalignedBlobWidth { path, .. }
            | LayoutError::UnsupportedWordWidth { path, .. }
            | LayoutError::EmptyName { path }
            | LayoutError::ShortNameWithoutName { path, .. }
            | LayoutError::InvalidBitCount { path } => Some(path),
            _ => None,
        }
    }
}
