// Wed Aug 26 2026 - Alex

use crate::diagram::layout::{DescLine, DiagramLayout};
use crate::model::Field;
use crate::utils::StringUtils;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

const RULER_TENS: &str = " 3                     2                   1                   0";
const RULER_ONES: &str = " 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0";
const SEPARATOR: &str =
    "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+";
const PAD: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramStyle {
    Comment,
    Markdown,
}

impl DiagramStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(DiagramStyle::Comment),
            "markdown" => Some(DiagramStyle::Markdown),
            _ => None,
        }
    }
}

impl fmt::Display for DiagramStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramStyle::Comment => write!(f, "comment"),
            DiagramStyle::Markdown => write!(f, "markdown"),
        }
    }
}

// Left gutter carrying the byte offset of the word a row starts in.
fn gutter(word: u64) -> String {
    StringUtils::pad_left(&format!("{} ", word), PAD.len(), ' ')
}

// Draws the bit diagram and the field listing. Comment style wraps the
// whole thing in a kernel-doc block; markdown style fences the diagram
// and lists the fields as bullets.
pub fn render<W: Write>(
    out: &mut W,
    root: &Field,
    layout: &DiagramLayout,
    style: DiagramStyle,
) -> io::Result<()> {
    let prefix = match style {
        DiagramStyle::Comment => " * ",
        DiagramStyle::Markdown => "",
    };
    match style {
        DiagramStyle::Comment => {
            writeln!(out, "/**")?;
            let title = root.name().unwrap_or_else(|| root.fqn());
            match root.desc() {
                Some(d) => writeln!(out, " * {} - {}", title, d)?,
                None => writeln!(out, " * {}", title)?,
            }
            writeln!(out, "{}", prefix)?;
        }
        DiagramStyle::Markdown => writeln!(out, "```")?,
    }

    writeln!(out, "{}{}{}", prefix, PAD, RULER_TENS)?;
    writeln!(out, "{}{}{}", prefix, PAD, RULER_ONES)?;
    writeln!(out, "{}{}{}", prefix, PAD, SEPARATOR)?;

    let mut line = String::from("|");
    let mut word: u64 = 0;
    for cell in &layout.cells {
        if line.len() >= 65 {
            writeln!(out, "{}{}{}", prefix, gutter(word), line)?;
            writeln!(out, "{}{}{}", prefix, PAD, SEPARATOR)?;
            line = String::from("|");
            word += 4;
        }
        line.push_str(&cell[0]);
        line.push('|');
        for (i, row) in cell.iter().enumerate().skip(1) {
            if line.starts_with('+') {
                writeln!(out, "{}{}{}", prefix, PAD, line)?;
            } else {
                writeln!(out, "{}{}{}", prefix, gutter(word), line)?;
            }
            if i % 2 == 1 {
                // A field continuing across the word boundary keeps the
                // separator open.
                line = format!("+{}+", row);
            } else {
                line = format!("|{}|", row);
                word += 4;
            }
        }
    }
    writeln!(out, "{}{}{}", prefix, gutter(word), line)?;
    writeln!(out, "{}{}{}", prefix, PAD, SEPARATOR)?;
    word += 4;
    writeln!(out, "{}{}", prefix, gutter(word))?;

    if style == DiagramStyle::Markdown {
        writeln!(out, "```")?;
    }
    writeln!(out, "{}", prefix)?;
    match style {
        DiagramStyle::Comment => {
            describe_comment(out, &layout.lines)?;
            writeln!(out, " */")?;
        }
        DiagramStyle::Markdown => describe_markdown(out, &layout.lines)?,
    }
    Ok(())
}

pub fn render_to_string(
    root: &Field,
    layout: &DiagramLayout,
    style: DiagramStyle,
) -> io::Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, root, layout, style)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// Field listing in kernel-doc form, word wrapped at 80 columns with
// continuation lines aligned under the start of the description.
fn describe_comment<W: Write>(out: &mut W, lines: &[DescLine]) -> io::Result<()> {
    for d in lines {
        let mut line = format!(" * {}@{} ", "  ".repeat(d.tab), d.name);
        if let Some(brief) = &d.brief {
            if brief != &d.name {
                line.push_str(&format!("\"{}\" ", brief));
            }
        }
        line.push_str(&format!("({}):", d.bits));
        let pfx = format!(" * {}", " ".repeat(line.len() - 3));

        for word in d.desc.as_deref().unwrap_or("").split(' ') {
            let nl = format!("{} {}", line, word);
            if nl.len() > 80 {
                writeln!(out, "{}", line)?;
                line = format!("{} {}", pfx, word);
            } else {
                line = nl;
            }
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn describe_markdown<W: Write>(out: &mut W, lines: &[DescLine]) -> io::Result<()> {
    for d in lines {
        let shown = d.brief.as_deref().unwrap_or(&d.name);
        let mut line = format!("- `{}` ", shown);
        if d.brief.as_deref() != Some(d.name.as_str()) {
            line.push_str(&format!("\"`{}`\" ", d.name));
        }
        line.push_str(&format!("({}): ", d.bits));
        if let Some(td) = &d.typedef {
            line.push_str(&format!("typedef {} ", td));
        }
        if let Some(desc) = &d.desc {
            line.push_str(desc);
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::layout::layout;
    use crate::resolve::resolve;
    use crate::schema::load_str;

    fn rendered(yaml: &str, style: DiagramStyle) -> String {
        let root = resolve(&load_str(yaml).unwrap()).unwrap();
        let out = layout(&root).unwrap();
        render_to_string(&root, &out, style).unwrap()
    }

    #[test]
    fn test_markdown_two_half_words() {
        let got = rendered(
            "type: struct\nname: desc\nfields:\n\
             - { type: word, name: alpha, bits: 16 }\n\
             - { type: word, name: beta, bits: 16 }\n",
            DiagramStyle::Markdown,
        );
        let expected = [
            "```",
            "     3                     2                   1                   0",
            "     1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0",
            "    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            "  0 |             alpha             |              beta             |",
            "    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            "  4 ",
            "```",
            "",
            "- `alpha` (16 bit): ",
            "- `beta` (16 bit): ",
        ]
        .join("\n")
            + "\n";
        assert_eq!(got, expected);
    }

    #[test]
    fn test_comment_single_word_with_desc() {
        let got = rendered(
            "type: struct\nname: regs\ndesc: Control block\nfields:\n\
             - { type: word, name: control, bits: 32, desc: Main control word. }\n",
            DiagramStyle::Comment,
        );
        let expected = [
            "/**",
            " * regs - Control block",
            " * ",
            " *      3                     2                   1                   0",
            " *      1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0",
            " *     +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            " *   0 |                            control                            |",
            " *     +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            " *   4 ",
            " * ",
            " * @control (32 bit): Main control word.",
            " */",
        ]
        .join("\n")
            + "\n";
        assert_eq!(got, expected);
    }

    #[test]
    fn test_64_bit_word_keeps_separator_open() {
        let got = rendered(
            "type: struct\nname: desc\nfields:\n\
             - { type: word, name: counter, bits: 64 }\n",
            DiagramStyle::Markdown,
        );
        let expected_rows = [
            "  0 |                                                               |",
            "    +                            counter                            +",
            "  4 |                                                               |",
            "    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            "  8 ",
        ];
        for row in expected_rows {
            assert!(got.contains(row), "missing row: {row:?}\nin:\n{got}");
        }
    }

    #[test]
    fn test_row_flush_between_words() {
        let got = rendered(
            "type: struct\nname: desc\nfields:\n\
             - { type: word, name: first, bits: 32 }\n\
             - { type: word, name: second, bits: 32 }\n",
            DiagramStyle::Markdown,
        );
        assert!(got.contains(
            "  0 |                             first                             |"
        ));
        assert!(got.contains(
            "  4 |                             second                            |"
        ));
        assert!(got.contains("  8 \n"));
    }

    #[test]
    fn test_comment_descriptions_wrap_and_align() {
        let got = rendered(
            "type: struct\nname: desc\nfields:\n\
             - type: word\n  name: alpha\n  bits: 16\n\
             \x20 desc: one two three four five six seven eight nine ten eleven twelve thirteen fourteen\n\
             - { type: word, name: beta, bits: 16 }\n",
            DiagramStyle::Comment,
        );
        let lines: Vec<&str> = got.lines().collect();
        let first = lines
            .iter()
            .position(|l| l.starts_with(" * @alpha"))
            .unwrap();
        assert!(lines[first].len() <= 80);
        // Continuation is indented past the "(16 bit):" marker.
        let cont = format!(" * {} twelve thirteen fourteen", " ".repeat(16));
        assert_eq!(lines[first + 1], cont);
    }

    #[test]
    fn test_brief_shown_when_it_differs() {
        let got = rendered(
            "type: struct\nname: desc\nfields:\n\
             - type: bitfield\n  name: flags\n  bits: 8\n  fields:\n\
             \x20   - { name: enable_now, bits: 4 }\n\
             \x20   - { name: lo, bits: 4 }\n",
            DiagramStyle::Comment,
        );
        assert!(got.contains(" * @bitfield_0 (8 bit): "));
        assert!(got.contains(" *   @enable_now \"nblnw\" (4 bit): "));
    }

    #[test]
    fn test_style_names_round_trip() {
        assert_eq!(DiagramStyle::from_name("comment"), Some(DiagramStyle::Comment));
        assert_eq!(DiagramStyle::from_name("markdown"), Some(DiagramStyle::Markdown));
        assert_eq!(DiagramStyle::from_name("html"), None);
        assert_eq!(DiagramStyle::Markdown.to_string(), "markdown");
    }
}
