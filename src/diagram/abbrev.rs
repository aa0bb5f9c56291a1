// Wed Aug 26 2026 - Alex

use std::collections::HashSet;

// Lowercased abbreviations that read as padding rather than a field name.
const RESERVED: [&str; 7] = [
    "rs", "rsv", "rsvd", "rsrvd", "reserv", "reservd", "reserved",
];

const UNKNOWN: [&str; 6] = ["un", "unk", "unkn", "unkno", "unknow", "unknown"];

// Single-letter fallback pool. 'R' and 'r' are kept out so a lone letter
// can never be mistaken for a reserved marker.
const LETTER_POOL: &str = "ABCDEFGHIJKLMNOPQSTUVWXYZabcdefghijklmnopqstuvwxyz";

// 'R'/'r' read as reserved and 'u' as unknown, so they are dropped when a
// name has to be squeezed down to one letter.
fn keep_for_one_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && c != 'R' && c != 'r' && c != 'u'
}

fn strip_to_one_letter_set(s: &str) -> String {
    s.chars()
        .filter(|c| keep_for_one_letter(*c))
        .collect::<String>()
        .to_uppercase()
}

// Consonant skeleton of a name. 'Y' and 'R' count as vowels here so the
// result never collides with the reserved words.
fn strip_vowels(s: &str) -> String {
    s.chars()
        .filter(|c| "BCDFGHJKLMNPQSTVWXZbcdfghjklmnpqstvwxz".contains(*c))
        .collect()
}

fn initials(tokens: &[&str]) -> String {
    tokens
        .iter()
        .take(tokens.len().saturating_sub(1))
        .filter_map(|t| t.chars().next())
        .collect()
}

// Shortens a field name so it fits in `max_letters` columns without
// clashing with any name already on the diagram. A name that fits as-is
// is used verbatim; otherwise progressively harsher contractions are
// tried. None means every idea was already taken.
pub fn abbreviate_name(
    name: &str,
    max_letters: usize,
    existing: &HashSet<String>,
) -> Option<String> {
    if name.len() <= max_letters && !existing.contains(name) {
        return Some(name.to_string());
    }

    let tokens: Vec<&str> = name.split('_').collect();

    if max_letters == 1 {
        let last = tokens.last().copied().unwrap_or("");
        let attempts = [
            strip_to_one_letter_set(last),
            strip_to_one_letter_set(&tokens.concat()),
            LETTER_POOL.to_string(),
        ];
        for attempt in &attempts {
            for l in attempt.chars() {
                let candidate = l.to_string();
                if !existing.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }
        return None;
    }

    let test = |candidate: String| -> Option<String> {
        let candidate = candidate.to_lowercase();
        if candidate.len() > max_letters {
            return None;
        }
        if RESERVED.contains(&candidate.as_str())
            || UNKNOWN.contains(&candidate.as_str())
            || existing.contains(&candidate)
        {
            return None;
        }
        Some(candidate)
    };

    let joined = tokens.concat();
    if let Some(out) = test(joined.clone()) {
        return Some(out);
    }
    if let Some(out) = test(strip_vowels(&joined)) {
        return Some(out);
    }

    let last = tokens.last().copied().unwrap_or("");
    let acronym = initials(&tokens);
    let clip = |s: String| s.chars().take(max_letters).collect::<String>();
    if let Some(out) = test(clip(format!("{}{}", acronym, last))) {
        return Some(out);
    }
    if let Some(out) = test(clip(format!("{}{}", acronym, strip_vowels(last)))) {
        return Some(out);
    }
    if let Some(out) = test(format!("{}{}", acronym, last)) {
        return Some(out);
    }
    None
}
