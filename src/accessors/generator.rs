// Thu Aug 27 2026 - Alex

use crate::error::LayoutError;
use crate::model::{Access, Bitfield, EnumSpec, Field};
use crate::utils::StringUtils;
use std::io::{self, Write};

// Right-hand column of defines and enum values, in units of 8-column tabs.
const TAB_COL: usize = 56;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccessorOptions {
    // Honor per-item read/write restrictions by leaving out the setter of
    // a read-only item and the getter of a write-only one.
    pub honor_access: bool,
}

// C declarations and FIELD_GET/FIELD_SET helpers for a resolved model.
#[derive(Debug)]
pub struct Accessors {
    lines: Vec<String>,
}

fn tabbed(left: &str, right: &str) -> String {
    let llen = StringUtils::expand_tabs(left, 8).len();
    let tabllen = llen / 8;
    let tabs = if tabllen < TAB_COL / 8 {
        "\t".repeat(TAB_COL / 8 - tabllen)
    } else {
        " ".to_string()
    };
    format!("{}{}{}", left, tabs, right)
}

// Smallest unsigned C word type an n-bit value fits in.
fn type_for_bits(bits: u32) -> String {
    format!("u{}", bits.max(8).next_power_of_two())
}

fn print_enum(fqn: &str, values: &EnumSpec) -> Vec<String> {
    let mut out = vec![format!("enum {} {{", fqn)];
    for (name, value) in values.iter() {
        let left = format!("\t{}_{}", fqn, name).to_uppercase();
        out.push(tabbed(&left, &format!("= {},", value)));
    }
    out.push("};".to_string());
    out
}

// One declaration block per bitfield: a wrapper struct (or a comment tying
// the helpers back to the parent member), the enums and mask defines of
// its named items, and the get/set helpers. Nameless items are padding and
// get nothing.
fn bitfield_accessors(
    bf: &Bitfield,
    parent_struct: &str,
    parent_fieldname: &str,
    opts: &AccessorOptions,
) -> Vec<String> {
    let (struct_name, fieldname, mut out) = match &bf.name {
        Some(name) => (
            name.clone(),
            "word".to_string(),
            vec![format!("struct {} {{ u{} word; }};", name, bf.width.bits())],
        ),
        None => (
            parent_struct.to_string(),
            parent_fieldname.to_string(),
            vec![format!("/* {} {} */", parent_struct, parent_fieldname)],
        ),
    };

    let mut enums = Vec::new();
    let mut defines = Vec::new();
    let mut accessors = Vec::new();
    for item in &bf.items {
        if item.name.is_none() {
            continue;
        }
        if let Some(values) = &item.values {
            enums.extend(print_enum(&item.fqn, values));
        }

        let upper = item.fqn.to_uppercase();
        let (mask, isget, ty) = if item.bits == 1 {
            defines.push(tabbed(
                &format!("#define {}", upper),
                &format!("BIT({})", item.range.lo()),
            ));
            (upper, "is", "bool".to_string())
        } else {
            let mask = format!("{}_MASK", upper);
            defines.push(tabbed(
                &format!("#define {}", mask),
                &format!("GENMASK({}, {})", item.range.hi(), item.range.lo()),
            ));
            let ty = if item.values.is_some() {
                format!("enum {}", item.fqn)
            } else {
                type_for_bits(item.bits)
            };
            (mask, "get", ty)
        };

        let skip_get = opts.honor_access && item.only == Some(Access::Write);
        let skip_set = opts.honor_access && item.only == Some(Access::Read);
        if !skip_get {
            accessors.push(format!(
                "static inline {} {}_{}(struct {} *x) {{",
                ty, isget, item.fqn, struct_name
            ));
            accessors.push(format!("\treturn FIELD_GET({}, x->{});", mask, fieldname));
            accessors.push("}".to_string());
        }
        if !skip_set {
            accessors.push(format!(
                "static inline void set_{}(struct {} *x, {} v) {{",
                item.fqn, struct_name, ty
            ));
            accessors.push(format!(
                "\tx->{} = FIELD_SET(x->{}, {}, v);",
                fieldname, fieldname, mask
            ));
            accessors.push("}".to_string());
        }
    }

    if !enums.is_empty() {
        out.push(String::new());
        out.extend(enums);
    }
    if !defines.is_empty() {
        out.push(String::new());
        out.extend(defines);
    }
    if !accessors.is_empty() {
        out.push(String::new());
        out.extend(accessors);
    }
    out.push(String::new());
    out
}

// Member declarations for one struct or union body. Padding members are
// numbered per body, as are anonymous bitfields.
fn struct_body(
    struct_name: &str,
    fields: &[Field],
    tabs: &str,
    opts: &AccessorOptions,
) -> Result<(Vec<String>, Vec<String>), LayoutError> {
    let mut members = Vec::new();
    let mut accessors = Vec::new();
    let mut unused_ctr = 0;
    let mut bitfield_ctr = 0;
    for field in fields {
        match field {
            Field::Word(w) => {
                let ty = match &w.typedef {
                    Some(td) => td.clone(),
                    None => format!("{}{}", if w.signed { 's' } else { 'u' }, w.width.bits()),
                };
                let name = match &w.name {
                    Some(n) => n.clone(),
                    None => {
                        let n = format!("unused_{}", unused_ctr);
                        unused_ctr += 1;
                        n
                    }
                };
                members.push(format!("{}{} {};", tabs, ty, name));
            }
            Field::Opaque(op) => {
                let decl = match &op.decl {
                    Some(d) => d.clone(),
                    None => {
                        let d = format!("u8 unused_{}[{}];", unused_ctr, op.bytes);
                        unused_ctr += 1;
                        d
                    }
                };
                members.push(format!("{}{}", tabs, decl));
            }
            Field::Union(un) => {
                members.push(format!("{}union {{", tabs));
                let (m, a) = struct_body(&un.name, &un.members, &format!("{}\t", tabs), opts)?;
                accessors.extend(a);
                members.extend(m);
                members.push(format!("{}}} {};", tabs, un.name));
            }
            Field::Bitfield(bf) => {
                let name = match &bf.name {
                    Some(n) => n.clone(),
                    None => {
                        let n = format!("bitfield_{}", bitfield_ctr);
                        bitfield_ctr += 1;
                        n
                    }
                };
                accessors.extend(bitfield_accessors(bf, struct_name, &name, opts));
                members.push(format!("{}u{} {};", tabs, bf.width.bits(), name));
            }
            Field::Struct(st) => {
                return Err(LayoutError::NestedStructUnsupported {
                    path: st.fqn.clone(),
                });
            }
        }
    }
    Ok((members, accessors))
}

impl Accessors {
    pub fn build(root: &Field, opts: &AccessorOptions) -> Result<Self, LayoutError> {
        let st = match root {
            Field::Struct(st) => st,
            Field::Word(_) => return Err(LayoutError::UnsupportedRoot { kind: "a word" }),
            Field::Bitfield(_) => {
                return Err(LayoutError::UnsupportedRoot { kind: "a bitfield" })
            }
            Field::Union(_) => return Err(LayoutError::UnsupportedRoot { kind: "a union" }),
            Field::Opaque(_) => {
                return Err(LayoutError::UnsupportedRoot {
                    kind: "an opaque blob",
                })
            }
        };
        let name = st.name.as_deref().ok_or(LayoutError::UnsupportedRoot {
            kind: "an unnamed struct",
        })?;

        let (members, accessors) = struct_body(name, &st.fields, "\t", opts)?;
        let mut lines = vec![format!("struct {} {{", name)];
        lines.extend(members);
        lines.push("};".to_string());
        lines.push(String::new());
        if accessors.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(accessors);
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
