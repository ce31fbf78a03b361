use schem_types::{Compound, Tag, TagList, TagTree};

/// Indented, type-annotated dump of a raw [`TagTree`].
///
/// ```text
/// Compound "": 2 entries
///   Int "Version": 6
///   Compound "Regions": 1 entry
///     Compound "Main": 2 entries
///       List "BlockStatePalette": 1 Compound
///         Compound [0]: 1 entry
///           String "Name": "minecraft:air"
///       LongArray "BlockStates": 4 longs
/// ```
///
/// Arrays are summarised by length. With a `max_depth`, containers
/// deeper than that print their header line only; the root is depth 1.
pub struct TreeRenderer;

impl TreeRenderer {
    #[must_use]
    pub fn render(tree: &TagTree, max_depth: Option<usize>) -> String {
        let mut lines = vec![format!(
            "Compound {:?}: {}",
            tree.name,
            entries(tree.root.len())
        )];
        if max_depth.is_none_or(|max| max > 1) {
            render_compound(&tree.root, 1, max_depth, &mut lines);
        }
        lines.join("\n")
    }
}

fn entries(n: usize) -> String {
    if n == 1 {
        "1 entry".to_owned()
    } else {
        format!("{n} entries")
    }
}

fn plural(n: usize, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Right-hand side of a line: scalar value or container summary.
fn summary(tag: &Tag) -> String {
    match tag {
        Tag::End => String::new(),
        Tag::Byte(v) => v.to_string(),
        Tag::Short(v) => v.to_string(),
        Tag::Int(v) => v.to_string(),
        Tag::Long(v) => v.to_string(),
        Tag::Float(v) => v.to_string(),
        Tag::Double(v) => v.to_string(),
        Tag::String(s) => format!("{s:?}"),
        Tag::ByteArray(a) => plural(a.len(), "byte"),
        Tag::IntArray(a) => plural(a.len(), "int"),
        Tag::LongArray(a) => plural(a.len(), "long"),
        Tag::List(list) => format!("{} {}", list.len(), list.element_type),
        Tag::Compound(c) => entries(c.len()),
    }
}

fn render_compound(
    compound: &Compound,
    depth: usize,
    max_depth: Option<usize>,
    lines: &mut Vec<String>,
) {
    for (name, tag) in compound.iter() {
        render_tag(&format!("{name:?}"), tag, depth + 1, max_depth, lines);
    }
}

fn render_list(list: &TagList, depth: usize, max_depth: Option<usize>, lines: &mut Vec<String>) {
    for (i, item) in list.iter().enumerate() {
        render_tag(&format!("[{i}]"), item, depth + 1, max_depth, lines);
    }
}

fn render_tag(
    label: &str,
    tag: &Tag,
    depth: usize,
    max_depth: Option<usize>,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(depth - 1);
    lines.push(format!("{indent}{} {label}: {}", tag.tag_type(), summary(tag)));

    if max_depth.is_some_and(|max| depth >= max) {
        return;
    }
    match tag {
        Tag::Compound(compound) => render_compound(compound, depth, max_depth, lines),
        Tag::List(list) => render_list(list, depth, max_depth, lines),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use schem_types::TagType;

    use super::*;

    fn sample() -> TagTree {
        let entry: Compound = [("Name", Tag::String("minecraft:air".into()))]
            .into_iter()
            .collect();
        let main: Compound = [
            (
                "BlockStatePalette",
                Tag::List(TagList::new(TagType::Compound, vec![Tag::Compound(entry)])),
            ),
            ("BlockStates", Tag::LongArray(vec![0; 4])),
        ]
        .into_iter()
        .collect();
        let regions: Compound = [("Main", Tag::Compound(main))].into_iter().collect();
        let root = [("Version", Tag::Int(6)), ("Regions", Tag::Compound(regions))]
            .into_iter()
            .collect();
        TagTree::new("", root)
    }

    #[test]
    fn full_dump() {
        insta::assert_snapshot!(TreeRenderer::render(&sample(), None), @r#"
        Compound "": 2 entries
          Int "Version": 6
          Compound "Regions": 1 entry
            Compound "Main": 2 entries
              List "BlockStatePalette": 1 Compound
                Compound [0]: 1 entry
                  String "Name": "minecraft:air"
              LongArray "BlockStates": 4 longs
        "#);
    }

    #[test]
    fn depth_limit_stops_at_container_headers() {
        insta::assert_snapshot!(TreeRenderer::render(&sample(), Some(2)), @r#"
        Compound "": 2 entries
          Int "Version": 6
          Compound "Regions": 1 entry
        "#);
    }

    #[test]
    fn depth_one_is_root_only() {
        assert_eq!(
            TreeRenderer::render(&sample(), Some(1)),
            "Compound \"\": 2 entries"
        );
    }
}
