// Mon Aug 24 2026 - Alex

use crate::model::{Access, EnumSpec};
use serde::Deserialize;

// Raw document tree as authored in YAML or JSON, before layout resolution.
// Structural validation happens here through serde's tagged decoding; the
// cross-field numeric checks live in the resolver.

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawField {
    Word(RawWord),
    Bitfield(RawBitfield),
    Struct(RawStruct),
    Union(RawUnion),
    Opaque(RawOpaque),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWord {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub offset: Option<u64>,
    pub bits: u32,
    pub signed: Option<bool>,
    pub typedef: Option<String>,
    #[serde(rename = "enum")]
    pub values: Option<EnumSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBitfield {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub offset: Option<u64>,
    pub bits: u32,
    pub fields: Vec<RawBitItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBitItem {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub bits: u32,
    #[serde(rename = "enum")]
    pub values: Option<EnumSpec>,
    pub only: Option<Access>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStruct {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub offset: Option<u64>,
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUnion {
    pub name: String,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub offset: Option<u64>,
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOpaque {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub desc: Option<String>,
    pub offset: Option<u64>,
    pub bytes: u64,
    pub decl: Option<String>,
}

impl RawField {
    pub fn name(&self) -> Option<&str> {
        match self {
            RawField::Word(f) => f.name.as_deref(),
            RawField::Bitfield(f) => f.name.as_deref(),
            RawField::Struct(f) => f.name.as_deref(),
            RawField::Union(f) => Some(&f.name),
            RawField::Opaque(f) => f.name.as_deref(),
        }
    }

    pub fn short_name(&self) -> Option<&str> {
        match self {
            RawField::Word(f) => f.short_name.as_deref(),
            RawField::Bitfield(f) => f.short_name.as_deref(),
            RawField::Struct(f) => f.short_name.as_deref(),
            RawField::Union(f) => f.short_name.as_deref(),
            RawField::Opaque(f) => f.short_name.as_deref(),
        }
    }

    pub fn offset(&self) -> Option<u64> {
        match self {
            RawField::Word(f) => f.offset,
            RawField::Bitfield(f) => f.offset,
            RawField::Struct(f) => f.offset,
            RawField::Union(f) => f.offset,
            RawField::Opaque(f) => f.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_decoding() {
        let yaml = r#"
type: struct
name: desc
fields:
  - type: word
    name: flags
    bits: 32
  - type: opaque
    bytes: 4
"#;
        let raw: RawField = serde_yaml::from_str(yaml).unwrap();
        let RawField::Struct(st) = raw else {
            panic!("expected a struct");
        };
        assert_eq!(st.name.as_deref(), Some("desc"));
        assert_eq!(st.fields.len(), 2);
        assert!(matches!(st.fields[1], RawField::Opaque(_)));
    }

    #[test]
    fn test_enum_and_only_attributes() {
        let yaml = r#"
type: bitfield
bits: 8
fields:
  - name: mode
    bits: 2
    only: read
    enum:
      off: 0
      on: 1
  - bits: 6
"#;
        let RawField::Bitfield(bf) = serde_yaml::from_str(yaml).unwrap() else {
            panic!("expected a bitfield");
        };
        assert_eq!(bf.fields[0].only, Some(Access::Read));
        let values = bf.fields[0].values.as_ref().unwrap();
        assert_eq!(values.iter().collect::<Vec<_>>(), vec![("off", 0), ("on", 1)]);
        assert!(bf.fields[1].name.is_none());
    }
}
