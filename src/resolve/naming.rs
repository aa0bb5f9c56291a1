// Mon Aug 24 2026 - Alex

use crate::error::LayoutError;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

// Anonymous nodes get a positional marker `f<index>` spliced into their
// name path. The pattern is reserved: a user-supplied name matching it is
// rejected so fully-qualified names stay globally unique.
static POSITIONAL: Lazy<Regex> = Lazy::new(|| Regex::new("^f[0-9]+$").unwrap());

pub fn is_positional_marker(name: &str) -> bool {
    POSITIONAL.is_match(name)
}

// Derives the fully-qualified name of a node and the name path its
// children inherit. Named nodes contribute `short_name || name` and their
// fqn joins only the named components of the path; anonymous nodes
// contribute `f<index>` and keep the whole path in their fqn so that two
// anonymous siblings under differently-marked ancestors never collide.
pub fn derive_name(
    name: Option<&str>,
    short_name: Option<&str>,
    path: &[String],
    index: usize,
) -> Result<(String, Vec<String>), LayoutError> {
    match name {
        Some(name) => {
            if is_positional_marker(name) {
                return Err(LayoutError::ReservedName {
                    name: name.to_string(),
                });
            }
            let display = short_name.unwrap_or(name);
            let fqn = path
                .iter()
                .map(String::as_str)
                .filter(|n| !is_positional_marker(n))
                .chain(std::iter::once(display))
                .join("_");
            if fqn.is_empty() {
                return Err(LayoutError::EmptyName {
                    path: path.join("_"),
                });
            }
            let mut new_path = path.to_vec();
            new_path.push(display.to_string());
            Ok((fqn, new_path))
        }
        None => {
            let mut new_path = path.to_vec();
            new_path.push(format!("f{}", index));
            let fqn = new_path.join("_");
            if let Some(short_name) = short_name {
                return Err(LayoutError::ShortNameWithoutName {
                    path: fqn,
                    short_name: short_name.to_string(),
                });
            }
            Ok((fqn, new_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_named_node_joins_named_ancestors() {
        let (fqn, new_path) = derive_name(Some("status"), None, &path(&["desc"]), 3).unwrap();
        assert_eq!(fqn, "desc_status");
        assert_eq!(new_path, path(&["desc", "status"]));
    }

    #[test]
    fn test_short_name_replaces_name_in_fqn() {
        let (fqn, _) = derive_name(Some("transmit_control"), Some("txc"), &path(&["desc"]), 0).unwrap();
        assert_eq!(fqn, "desc_txc");
    }

    #[test]
    fn test_positional_markers_are_skipped_for_named_nodes() {
        let (fqn, _) = derive_name(Some("len"), None, &path(&["desc", "f2"]), 0).unwrap();
        assert_eq!(fqn, "desc_len");
    }

    #[test]
    fn test_anonymous_node_keeps_whole_path() {
        let (fqn, new_path) = derive_name(None, None, &path(&["desc", "f2"]), 1).unwrap();
        assert_eq!(fqn, "desc_f2_f1");
        assert_eq!(new_path, path(&["desc", "f2", "f1"]));
    }

    #[test]
    fn test_reserved_name_rejected() {
        let err = derive_name(Some("f3"), None, &path(&["desc"]), 0).unwrap_err();
        assert!(matches!(err, LayoutError::ReservedName { .. }));
    }

    #[test]
    fn test_short_name_without_name_rejected() {
        let err = derive_name(None, Some("sn"), &path(&["desc"]), 0).unwrap_err();
        assert!(matches!(err, LayoutError::ShortNameWithoutName { .. }));
    }

    #[test]
    fn test_marker_pattern() {
        assert!(is_positional_marker("f0"));
        assert!(is_positional_marker("f17"));
        assert!(!is_positional_marker("f"));
        assert!(!is_positional_marker("field0"));
        assert!(!is_positional_marker("f0x"));
    }
}
