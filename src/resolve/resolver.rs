// Wed Aug 26 2026 - Alex

use crate::error::LayoutError;
use crate::model::{
    BitRange, Bitfield, BitfieldItem, EnumSpec, Field, Opaque, StructField, UnionField, Word,
    WordWidth,
};
use crate::resolve::{alignment_of, derive_name};
use crate::schema::{RawBitItem, RawBitfield, RawField, RawOpaque, RawStruct, RawUnion, RawWord};
use std::collections::HashSet;

// Walks the raw tree once, assigning byte offsets, bit ranges, alignment
// and fully-qualified names, and returns a new immutable tree. The first
// invariant violation aborts the whole model.
pub fn resolve(raw: &RawField) -> Result<Field, LayoutError> {
    let (field, end) = resolve_field(raw, 0, &[], 0, false)?;
    log::debug!("resolved {} ({} bytes)", field.fqn(), end);

    let mut seen = HashSet::new();
    check_unique_names(&field, &mut seen)?;
    Ok(field)
}

fn resolve_field(
    raw: &RawField,
    byte_offset: u64,
    path: &[String],
    index: usize,
    in_struct: bool,
) -> Result<(Field, u64), LayoutError> {
    let (fqn, child_path) = derive_name(raw.name(), raw.short_name(), path, index)?;
    let align = alignment_of(byte_offset);

    match raw {
        RawField::Word(w) => resolve_word(w, fqn, align, byte_offset),
        RawField::Bitfield(bf) => resolve_bitfield(bf, fqn, align, byte_offset, &child_path),
        RawField::Struct(st) => {
            if in_struct {
                return Err(LayoutError::NestedStructUnsupported { path: fqn });
            }
            resolve_struct(st, fqn, align, byte_offset, &child_path)
        }
        RawField::Union(un) => resolve_union(un, fqn, align, byte_offset, &child_path),
        RawField::Opaque(op) => resolve_opaque(op, fqn, align, byte_offset),
    }
}

fn resolve_word(
    raw: &RawWord,
    fqn: String,
    align: u32,
    offset: u64,
) -> Result<(Field, u64), LayoutError> {
    let width = WordWidth::from_bits(raw.bits).ok_or(LayoutError::UnsupportedWordWidth {
        path: fqn.clone(),
        bits: raw.bits,
    })?;

    if offset % width.bytes() != 0 {
        return Err(LayoutError::Alignment {
            path: fqn,
            offset,
            bytes: width.bytes(),
        });
    }

    if raw.name.is_none() {
        // Metadata on a padding word would never be used by anything.
        let attribute = if raw.values.is_some() {
            Some("an enum")
        } else if raw.typedef.is_some() {
            Some("a typedef")
        } else if raw.signed.is_some() {
            Some("a signed attribute")
        } else {
            None
        };
        if let Some(attribute) = attribute {
            return Err(LayoutError::UnusedMetadata { path: fqn, attribute });
        }
    }

    let signed = raw.signed.unwrap_or(false);
    if let Some(values) = &raw.values {
        let (min, max) = if signed {
            let max = 1i128 << (width.bits() - 1);
            (-max, max - 1)
        } else {
            (0, (1i128 << width.bits()) - 1)
        };
        check_enum(values, min, max, &fqn)?;
    }

    let end = offset + width.bytes();
    let word = Word {
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        width,
        signed,
        typedef: raw.typedef.clone(),
        values: raw.values.clone(),
        fqn,
        align,
        offset,
    };
    Ok((Field::Word(word), end))
}

fn resolve_bitfield(
    raw: &RawBitfield,
    fqn: String,
    align: u32,
    offset: u64,
    path: &[String],
) -> Result<(Field, u64), LayoutError> {
    let width = WordWidth::from_bits(raw.bits).ok_or(LayoutError::UnsupportedWordWidth {
        path: fqn.clone(),
        bits: raw.bits,
    })?;

    // Items take the top remaining bits in declaration order; ranges are
    // materialized only after the widths are known to partition the word.
    let mut cursor = width.bits() as i64;
    let mut staged = Vec::with_capacity(raw.fields.len());
    for (i, item) in raw.fields.iter().enumerate() {
        let (item_fqn, _) = derive_name(item.name.as_deref(), item.short_name.as_deref(), path, i)?;

        if item.name.is_none() && item.values.is_some() {
            return Err(LayoutError::UnusedMetadata {
                path: item_fqn,
                attribute: "an enum",
            });
        }
        if item.bits < 1 {
            return Err(LayoutError::InvalidBitCount { path: item_fqn });
        }
        if let Some(values) = &item.values {
            let max = 1i128
                .checked_shl(item.bits)
                .map(|v| v - 1)
                .unwrap_or(i128::MAX);
            check_enum(values, 0, max, &item_fqn)?;
        }

        let lo = cursor - item.bits as i64;
        staged.push((item, item_fqn, lo, cursor - 1));
        cursor = lo;
    }

    if cursor != 0 {
        return Err(LayoutError::BitfieldWidthMismatch {
            path: fqn,
            remaining: cursor,
        });
    }

    let items = staged
        .into_iter()
        .map(|(item, item_fqn, lo, hi): (&RawBitItem, String, i64, i64)| BitfieldItem {
            name: item.name.clone(),
            desc: item.desc.clone(),
            bits: item.bits,
            values: item.values.clone(),
            only: item.only,
            fqn: item_fqn,
            range: BitRange::new(lo as u32, hi as u32),
        })
        .collect();

    let end = offset + width.bytes();
    let bitfield = Bitfield {
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        width,
        items,
        fqn,
        align,
        offset,
    };
    Ok((Field::Bitfield(bitfield), end))
}

fn resolve_struct(
    raw: &RawStruct,
    fqn: String,
    align: u32,
    offset: u64,
    path: &[String],
) -> Result<(Field, u64), LayoutError> {
    let mut fields = Vec::with_capacity(raw.fields.len());
    let mut running = offset;
    for (i, child) in raw.fields.iter().enumerate() {
        if let Some(declared) = child.offset() {
            if declared != running {
                let label = child
                    .name()
                    .map(str::to_string)
                    .unwrap_or_else(|| i.to_string());
                return Err(LayoutError::OffsetMismatch {
                    path: format!("field {} of {}", label, fqn),
                    declared,
                    computed: running,
                });
            }
        }
        let (resolved, end) = resolve_field(child, running, path, i, true)?;
        running = end;
        fields.push(resolved);
    }

    let st = StructField {
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        fields,
        fqn,
        align,
        offset,
    };
    Ok((Field::Struct(st), running))
}

fn resolve_union(
    raw: &RawUnion,
    fqn: String,
    align: u32,
    offset: u64,
    path: &[String],
) -> Result<(Field, u64), LayoutError> {
    // An empty union would resolve to a zero-bit field; later stages
    // assume every field occupies at least one bit.
    if raw.fields.is_empty() {
        return Err(LayoutError::EmptyUnion { path: fqn });
    }
    let mut members = Vec::with_capacity(raw.fields.len());
    let mut max_end = offset;
    for (i, child) in raw.fields.iter().enumerate() {
        // Every member starts at the union's own offset.
        let (resolved, end) = resolve_field(child, offset, path, i, false)?;

        if child.offset().is_some() {
            return Err(LayoutError::UnionMemberConstraint {
                path: fqn,
                member: resolved.fqn().to_string(),
                reason: "union members may not declare an explicit offset",
            });
        }
        match child {
            RawField::Opaque(op) if op.decl.is_none() => {
                return Err(LayoutError::UnionMemberConstraint {
                    path: fqn,
                    member: resolved.fqn().to_string(),
                    reason: "opaque union members must carry a 'decl' property",
                });
            }
            RawField::Opaque(_) => {}
            _ if child.name().is_none() => {
                return Err(LayoutError::UnionMemberConstraint {
                    path: fqn,
                    member: resolved.fqn().to_string(),
                    reason: "union members must carry a 'name' property",
                });
            }
            _ => {}
        }

        if end > max_end {
            max_end = end;
        }
        members.push(resolved);
    }

    let un = UnionField {
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        members,
        fqn,
        align,
        offset,
    };
    Ok((Field::Union(un), max_end))
}

fn resolve_opaque(
    raw: &RawOpaque,
    fqn: String,
    align: u32,
    offset: u64,
) -> Result<(Field, u64), LayoutError> {
    if raw.bytes == 0 {
        return Err(LayoutError::InvalidBitCount { path: fqn });
    }
    let end = offset + raw.bytes;
    let op = Opaque {
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        bytes: raw.bytes,
        decl: raw.decl.clone(),
        fqn,
        align,
        offset,
    };
    Ok((Field::Opaque(op), end))
}

fn check_enum(values: &EnumSpec, min: i128, max: i128, path: &str) -> Result<(), LayoutError> {
    for (entry, value) in values.iter() {
        if (value as i128) < min || (value as i128) > max {
            return Err(LayoutError::EnumRange {
                path: path.to_string(),
                entry: entry.to_string(),
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}

// Whole-tree pass over the resolved model: fully-qualified names and the
// enum constant names derived from them share one namespace.
fn check_unique_names(field: &Field, seen: &mut HashSet<String>) -> Result<(), LayoutError> {
    claim(seen, field.fqn())?;
    match field {
        Field::Word(w) => {
            if let Some(values) = &w.values {
                claim_enum_names(seen, &w.fqn, values)?;
            }
        }
        Field::Bitfield(bf) => {
            for item in &bf.items {
                claim(seen, &item.fqn)?;
                if let Some(values) = &item.values {
                    claim_enum_names(seen, &item.fqn, values)?;
                }
            }
        }
        Field::Struct(st) => {
            for child in &st.fields {
                check_unique_names(child, seen)?;
            }
        }
        Field::Union(un) => {
            for member in &un.members {
                check_unique_names(member, seen)?;
            }
        }
        Field::Opaque(_) => {}
    }
    Ok(())
}

fn claim_enum_names(
    seen: &mut HashSet<String>,
    fqn: &str,
    values: &EnumSpec,
) -> Result<(), LayoutError> {
    for (entry, _) in values.iter() {
        claim(seen, &format!("{}_{}", fqn, entry).to_uppercase())?;
    }
    Ok(())
}

fn claim(seen: &mut HashSet<String>, name: &str) -> Result<(), LayoutError> {
    if !seen.insert(name.to_string()) {
        return Err(LayoutError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}
