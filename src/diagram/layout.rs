// Wed Aug 26 2026 - Alex

use crate::diagram::abbrev::abbreviate_name;
use crate::error::LayoutError;
use crate::model::{Bitfield, EnumSpec, Field, Opaque, UnionField, Word};
use std::collections::HashSet;

// One entry of the field listing printed under the diagram.
#[derive(Debug, Clone)]
pub struct DescLine {
    pub brief: Option<String>,
    pub name: String,
    pub bits: String,
    pub values: Option<EnumSpec>,
    pub typedef: Option<String>,
    pub desc: Option<String>,
    pub tab: usize,
}

// Diagram cells plus the description list, ready for rendering. Each cell
// is one field: a single row for fields up to 32 bits, or rows alternating
// with boundary lines for fields spanning multiple 32 bit words.
#[derive(Debug)]
pub struct DiagramLayout {
    pub cells: Vec<Vec<String>>,
    pub lines: Vec<DescLine>,
}

struct LayoutCtx {
    cells: Vec<Vec<String>>,
    lines: Vec<DescLine>,
    used_names: HashSet<String>,
    unused_ctr: u32,
    bit_offset: u64,
    bitfield_ctr: u32,
}

// A label for an n-bit field gets 2n-1 columns, one column per bit plus
// the separators between them. Fields wider than a 32 bit word only ever
// label a single row.
fn max_letters(bits: u32) -> usize {
    (bits.min(32) * 2 - 1) as usize
}

fn blank_cell(bits: u32) -> String {
    " ".repeat(max_letters(bits))
}

fn pad_label(brief: &str, bits: u32) -> String {
    let ml = max_letters(bits);
    let mut out = brief.to_string();
    let mut i = 0;
    while out.len() < ml {
        if i % 2 == 1 {
            out.push(' ');
        } else {
            out.insert(0, ' ');
        }
        i += 1;
    }
    out
}

impl LayoutCtx {
    fn select_name(
        &mut self,
        name: Option<&str>,
        bits: u32,
        path: &str,
    ) -> Result<(String, String), LayoutError> {
        let name = match name {
            Some(n) => n.to_string(),
            None => {
                let n = format!("unused_{}", self.unused_ctr);
                self.unused_ctr += 1;
                n
            }
        };
        let budget = max_letters(bits);
        let brief = abbreviate_name(&name, budget, &self.used_names).ok_or_else(|| {
            LayoutError::AbbreviationExhausted {
                path: path.to_string(),
                name: name.clone(),
                max_letters: budget,
            }
        })?;
        self.used_names.insert(brief.clone());
        Ok((brief, name))
    }

    fn walk(&mut self, field: &Field) -> Result<(), LayoutError> {
        match field {
            Field::Struct(st) => {
                for child in &st.fields {
                    self.walk(child)?;
                }
                Ok(())
            }
            Field::Word(w) => self.push_word(w),
            Field::Bitfield(bf) => self.push_bitfield(bf),
            Field::Union(un) => self.push_union(un, field.size_bits()),
            Field::Opaque(op) => self.push_opaque(op),
        }
    }

    fn push_word(&mut self, w: &Word) -> Result<(), LayoutError> {
        let bits = w.width.bits();
        let (brief, name) = self.select_name(w.name.as_deref(), bits, &w.fqn)?;
        self.lines.push(DescLine {
            brief: Some(brief.clone()),
            name,
            bits: format!("{} bit", bits),
            values: w.values.clone(),
            typedef: w.typedef.clone(),
            desc: w.desc.clone(),
            tab: 0,
        });
        if bits == 64 {
            self.cells
                .push(vec![blank_cell(32), pad_label(&brief, 32), blank_cell(32)]);
        } else {
            self.cells.push(vec![pad_label(&brief, bits)]);
        }
        self.bit_offset += bits as u64;
        Ok(())
    }

    fn push_bitfield(&mut self, bf: &Bitfield) -> Result<(), LayoutError> {
        let width = bf.width.bits();
        if width > 32 {
            return Err(LayoutError::BitfieldTooWide {
                path: bf.fqn.clone(),
                bits: width,
            });
        }
        self.lines.push(DescLine {
            brief: None,
            name: format!("bitfield_{}", self.bitfield_ctr),
            bits: format!("{} bit", width),
            values: None,
            typedef: None,
            desc: None,
            tab: 0,
        });
        self.bitfield_ctr += 1;

        for item in &bf.items {
            let (brief, name) = self.select_name(item.name.as_deref(), item.bits, &item.fqn)?;
            self.bit_offset += item.bits as u64;
            self.cells.push(vec![pad_label(&brief, item.bits)]);
            // Absolute bit positions only make sense when the bitfield
            // fills a whole diagram row.
            let bits = if width == 32 {
                if item.range.is_single() {
                    format!("bit {}", item.range)
                } else {
                    format!("bits {}", item.range)
                }
            } else {
                format!("{} bit", item.bits)
            };
            self.lines.push(DescLine {
                brief: Some(brief),
                name,
                bits,
                values: item.values.clone(),
                typedef: None,
                desc: item.desc.clone(),
                tab: 1,
            });
        }
        Ok(())
    }

    fn push_union(&mut self, un: &UnionField, bits: u64) -> Result<(), LayoutError> {
        let (brief, name) = self.select_name(Some(un.name.as_str()), bits.min(32) as u32, &un.fqn)?;
        self.lines.push(DescLine {
            brief: Some(brief.clone()),
            name,
            bits: format!("{} bit", bits),
            values: None,
            typedef: None,
            desc: un.desc.clone(),
            tab: 0,
        });
        self.push_blob(&brief, &un.fqn, bits)
    }

    fn push_opaque(&mut self, op: &Opaque) -> Result<(), LayoutError> {
        let bits = op.bytes * 8;
        let (brief, name) = self.select_name(op.name.as_deref(), bits.min(32) as u32, &op.fqn)?;
        self.lines.push(DescLine {
            brief: Some(brief.clone()),
            name,
            bits: format!("{} bit", bits),
            values: None,
            typedef: None,
            desc: op.desc.clone(),
            tab: 0,
        });
        self.push_blob(&brief, &op.fqn, bits)
    }

    // A union or opaque blob is drawn as an unstructured box. Narrow blobs
    // must sit inside one 32 bit word; wide ones must be a whole number of
    // words and get blank filler rows around a single centered label.
    fn push_blob(&mut self, brief: &str, fqn: &str, bits: u64) -> Result<(), LayoutError> {
        if bits < 32 {
            if self.bit_offset / 32 != (self.bit_offset + bits - 1) / 32 {
                return Err(LayoutError::Straddle {
                    path: fqn.to_string(),
                    start: self.bit_offset,
                    end: self.bit_offset + bits,
                });
            }
            self.bit_offset += bits;
            self.cells.push(vec![pad_label(brief, bits as u32)]);
            return Ok(());
        }
        self.bit_offset += bits;
        if bits % 32 != 0 {
            return Err(LayoutError::UnalignedBlobWidth {
                path: fqn.to_string(),
                bits,
            });
        }
        let total_rows = (bits / 32) * 2 - 1;
        let mut above = Vec::new();
        let mut below = Vec::new();
        for i in 0..total_rows - 1 {
            if i % 2 == 1 {
                above.push(blank_cell(32));
            } else {
                below.push(blank_cell(32));
            }
        }
        let mut rows = above;
        rows.push(pad_label(brief, 32));
        rows.extend(below);
        self.cells.push(rows);
        Ok(())
    }
}

// Flattens a resolved model into diagram cells and description lines. A
// struct root contributes its fields; any other root is drawn as a single
// field.
pub fn layout(root: &Field) -> Result<DiagramLayout, LayoutError> {
    let mut ctx = LayoutCtx {
        cells: Vec::new(),
        lines: Vec::new(),
        used_names: HashSet::new(),
        unused_ctr: 0,
        bit_offset: 0,
        bitfield_ctr: 0,
    };
    ctx.walk(root)?;
    Ok(DiagramLayout {
        cells: ctx.cells,
        lines: ctx.lines,
    })
}
