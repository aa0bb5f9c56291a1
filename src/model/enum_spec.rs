// Mon Aug 24 2026 - Alex

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// Named constant table attached to a word or bitfield item. Declaration
// order is preserved because it is meaningful in the generated C enums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumSpec(IndexMap<String, i64>);

impl EnumSpec {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, name: &str, value: i64) {
        self.0.insert(name.to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, i64)> for EnumSpec {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_declaration_order() {
        let mut e = EnumSpec::new();
        e.insert("zebra", 0);
        e.insert("apple", 1);
        e.insert("mango", 2);

        let keys: Vec<&str> = e.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }
}
