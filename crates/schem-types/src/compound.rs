use std::collections::HashMap;

use crate::tag::Tag;

/// An ordered mapping from name to [`Tag`].
///
/// Entries keep the order in which they were inserted, which for a
/// decoded tree is declaration order on the wire. Region iteration order
/// and palette order both depend on this.
///
/// Names are unique. Inserting an existing name replaces the value in
/// place: the later value wins, the earlier position is kept.
///
/// Lookups go through a name index so that a compound with many entries
/// decodes in linear time.
#[derive(Clone, Debug, Default)]
pub struct Compound {
    entries: Vec<(String, Tag)>,
    index: HashMap<String, usize>,
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Compound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace `name`. Returns the replaced value, if any.
    pub fn insert(&mut self, name: impl Into<String>, tag: Tag) -> Option<Tag> {
        let name = name.into();
        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, tag));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, tag));
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(key, tag)| (key.as_str(), tag))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, Tag)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for (key, tag) in iter {
            compound.insert(key, tag);
        }
        compound
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = std::vec::IntoIter<(String, Tag)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let compound: Compound = [
            ("zeta", Tag::Int(1)),
            ("alpha", Tag::Int(2)),
            ("mid", Tag::Int(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = compound.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_insert_replaces_in_place() {
        let mut compound = Compound::new();
        compound.insert("a", Tag::Int(1));
        compound.insert("b", Tag::Int(2));
        let old = compound.insert("a", Tag::Int(3));

        assert_eq!(old, Some(Tag::Int(1)));
        assert_eq!(compound.len(), 2);
        assert_eq!(compound.get("a"), Some(&Tag::Int(3)));
        assert_eq!(compound.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn missing_key_is_none() {
        let compound = Compound::new();
        assert!(compound.get("Metadata").is_none());
        assert!(!compound.contains_key("Metadata"));
        assert!(compound.is_empty());
    }
}
