use std::collections::BTreeMap;

use crate::compound::Compound;
use crate::tag::Tag;
use crate::tag_type::TagType;

/// The result of decoding one buffer: a named root compound.
///
/// The root name is almost always empty in schematic files, but it is
/// part of the wire format and kept for display. The tree is built once
/// and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagTree {
    pub name: String,
    pub root: Compound,
}

impl TagTree {
    #[must_use]
    pub fn new(name: impl Into<String>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Count every tag in the tree by type and measure its nesting.
    ///
    /// Depth is measured the way the decoder's depth guard counts it: the
    /// root compound is depth 1 and every compound adds a level. A list adds
    /// a level only when its elements are compounds or lists.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        stats.record(TagType::Compound, Some(1));
        walk_compound(&self.root, 1, &mut stats);
        stats
    }
}

/// Shape summary of a [`TagTree`], see [`TagTree::stats`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub counts: BTreeMap<TagType, usize>,
    pub total: usize,
    pub max_depth: usize,
}

impl TreeStats {
    fn record(&mut self, tag_type: TagType, depth: Option<usize>) {
        *self.counts.entry(tag_type).or_default() += 1;
        self.total += 1;
        if let Some(depth) = depth {
            self.max_depth = self.max_depth.max(depth);
        }
    }

    #[must_use]
    pub fn count(&self, tag_type: TagType) -> usize {
        self.counts.get(&tag_type).copied().unwrap_or(0)
    }
}

fn walk_compound(compound: &Compound, depth: usize, stats: &mut TreeStats) {
    for (_, tag) in compound.iter() {
        walk_tag(tag, depth + 1, stats);
    }
}

fn walk_tag(tag: &Tag, depth: usize, stats: &mut TreeStats) {
    match tag {
        Tag::Compound(compound) => {
            stats.record(TagType::Compound, Some(depth));
            walk_compound(compound, depth, stats);
        }
        Tag::List(list) => {
            let nests = list.element_type.is_container();
            stats.record(TagType::List, nests.then_some(depth));
            for item in list.iter() {
                walk_tag(item, depth + 1, stats);
            }
        }
        other => stats.record(other.tag_type(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagList;

    #[test]
    fn stats_of_empty_root() {
        let stats = TagTree::default().stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.count(TagType::Compound), 1);
    }

    #[test]
    fn stats_count_nested_tags() {
        let entry: Compound = [("Name", Tag::String("minecraft:air".into()))]
            .into_iter()
            .collect();
        let palette = TagList::new(TagType::Compound, vec![Tag::Compound(entry)]);
        let region: Compound = [
            ("BlockStatePalette", Tag::List(palette)),
            ("BlockStates", Tag::LongArray(vec![0, 1])),
        ]
        .into_iter()
        .collect();
        let root: Compound = [("Version", Tag::Int(6)), ("Region", Tag::Compound(region))]
            .into_iter()
            .collect();

        let stats = TagTree::new("", root).stats();

        // root, Region, palette entry
        assert_eq!(stats.count(TagType::Compound), 3);
        assert_eq!(stats.count(TagType::List), 1);
        assert_eq!(stats.count(TagType::String), 1);
        assert_eq!(stats.count(TagType::LongArray), 1);
        assert_eq!(stats.count(TagType::Int), 1);
        assert_eq!(stats.total, 7);
        // root(1) → Region(2) → List(3) → entry(4)
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn scalar_list_does_not_add_depth() {
        let ints = TagList::new(TagType::Int, vec![Tag::Int(1), Tag::Int(2)]);
        let root: Compound = [("Ints", Tag::List(ints))].into_iter().collect();
        let stats = TagTree::new("", root).stats();
        assert_eq!(stats.count(TagType::List), 1);
        assert_eq!(stats.count(TagType::Int), 2);
        assert_eq!(stats.max_depth, 1);
    }
}
