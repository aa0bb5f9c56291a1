// Mon Aug 24 2026 - Alex

use crate::model::{BitRange, EnumSpec, WordWidth};
use serde::{Deserialize, Serialize};

// The resolved field tree. Nodes are built once by the resolver and never
// mutated afterwards; the diagram engine and the accessor generator are
// read-only consumers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    Word(Word),
    Bitfield(Bitfield),
    Struct(StructField),
    Union(UnionField),
    Opaque(Opaque),
}

#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub width: WordWidth,
    pub signed: bool,
    pub typedef: Option<String>,
    pub values: Option<EnumSpec>,
    pub fqn: String,
    pub align: u32,
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bitfield {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub width: WordWidth,
    pub items: Vec<BitfieldItem>,
    pub fqn: String,
    pub align: u32,
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BitfieldItem {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub bits: u32,
    pub values: Option<EnumSpec>,
    pub only: Option<Access>,
    pub fqn: String,
    pub range: BitRange,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructField {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub fields: Vec<Field>,
    pub fqn: String,
    pub align: u32,
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnionField {
    pub name: String,
    pub desc: Option<String>,
    pub members: Vec<Field>,
    pub fqn: String,
    pub align: u32,
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Opaque {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub bytes: u64,
    pub decl: Option<String>,
    pub fqn: String,
    pub align: u32,
    pub offset: u64,
}

impl Field {
    pub fn name(&self) -> Option<&str> {
        match self {
            Field::Word(f) => f.name.as_deref(),
            Field::Bitfield(f) => f.name.as_deref(),
            Field::Struct(f) => f.name.as_deref(),
            Field::Union(f) => Some(&f.name),
            Field::Opaque(f) => f.name.as_deref(),
        }
    }

    pub fn desc(&self) -> Option<&str> {
        match self {
            Field::Word(f) => f.desc.as_deref(),
            Field::Bitfield(f) => f.desc.as_deref(),
            Field::Struct(f) => f.desc.as_deref(),
            Field::Union(f) => f.desc.as_deref(),
            Field::Opaque(f) => f.desc.as_deref(),
        }
    }

    pub fn fqn(&self) -> &str {
        match self {
            Field::Word(f) => &f.fqn,
            Field::Bitfield(f) => &f.fqn,
            Field::Struct(f) => &f.fqn,
            Field::Union(f) => &f.fqn,
            Field::Opaque(f) => &f.fqn,
        }
    }

    pub fn align(&self) -> u32 {
        match self {
            Field::Word(f) => f.align,
            Field::Bitfield(f) => f.align,
            Field::Struct(f) => f.align,
            Field::Union(f) => f.align,
            Field::Opaque(f) => f.align,
        }
    }

    pub fn offset(&self) -> u64 {
        match self {
            Field::Word(f) => f.offset,
            Field::Bitfield(f) => f.offset,
            Field::Struct(f) => f.offset,
            Field::Union(f) => f.offset,
            Field::Opaque(f) => f.offset,
        }
    }

    pub fn size_bits(&self) -> u64 {
        match self {
            Field::Word(f) => f.width.bits() as u64,
            Field::Bitfield(f) => f.width.bits() as u64,
            Field::Struct(f) => f.fields.iter().map(Field::size_bits).sum(),
            Field::Union(f) => f.members.iter().map(Field::size_bits).max().unwrap_or(0),
            Field::Opaque(f) => f.bytes * 8,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bits() / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(name: &str, bits: u32, offset: u64) -> Field {
        Field::Word(Word {
            name: Some(name.to_string()),
            desc: None,
            width: WordWidth::from_bits(bits).unwrap(),
            signed: false,
            typedef: None,
            values: None,
            fqn: name.to_string(),
            align: 1,
            offset,
        })
    }

    #[test]
    fn test_struct_size_is_sum_of_fields() {
        let st = Field::Struct(StructField {
            name: Some("desc".to_string()),
            desc: None,
            fields: vec![word("a", 16, 0), word("b", 16, 2), word("c", 32, 4)],
            fqn: "desc".to_string(),
            align: 64,
            offset: 0,
        });
        assert_eq!(st.size_bits(), 64);
        assert_eq!(st.size_bytes(), 8);
    }

    #[test]
    fn test_union_size_is_largest_member() {
        let un = Field::Union(UnionField {
            name: "payload".to_string(),
            desc: None,
            members: vec![
                word("narrow", 32, 0),
                Field::Opaque(Opaque {
                    name: Some("wide".to_string()),
                    desc: None,
                    bytes: 8,
                    decl: Some("u8 wide[8];".to_string()),
                    fqn: "payload_wide".to_string(),
                    align: 1,
                    offset: 0,
                }),
            ],
            fqn: "payload".to_string(),
            align: 64,
            offset: 0,
        });
        assert_eq!(un.size_bits(), 64);
    }
}
