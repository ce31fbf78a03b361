//! Fixtures for the schem integration tests and benches.
//!
//! [`TagWriter`] encodes tag values into the wire format the decoder
//! reads. It exists only to build test inputs; the production crates
//! never write tag trees.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use schem_types::{Compound, Tag, TagList, TagTree, TagType};

/// Big-endian tag-tree encoder for test fixtures.
///
/// The high-level methods write well-formed data; the low-level ones
/// (`u8`, `i32`, `name`, ...) let a test splice in malformed bytes.
#[derive(Default)]
pub struct TagWriter {
    out: Vec<u8>,
}

impl TagWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a complete tree: root type id, root name, root compound.
    #[must_use]
    pub fn encode_tree(tree: &TagTree) -> Vec<u8> {
        let mut writer = Self::new();
        writer.named(&tree.name, &Tag::Compound(tree.root.clone()));
        writer.finish()
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.out
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.out.push(value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        self.out.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.out.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.out.extend_from_slice(bytes);
        self
    }

    /// UInt16 length followed by modified UTF-8 bytes.
    ///
    /// # Panics
    ///
    /// If the encoded text is longer than `u16::MAX` bytes.
    pub fn name(&mut self, text: &str) -> &mut Self {
        let encoded = cesu8::to_java_cesu8(text);
        let len = u16::try_from(encoded.len()).expect("string too long for a u16 length");
        self.u16(len).raw(&encoded)
    }

    /// Type id, name, payload.
    pub fn named(&mut self, name: &str, tag: &Tag) -> &mut Self {
        self.u8(tag.tag_type().id()).name(name).payload(tag)
    }

    /// # Panics
    ///
    /// If an array or list is longer than `i32::MAX` elements.
    pub fn payload(&mut self, tag: &Tag) -> &mut Self {
        match tag {
            Tag::End => {}
            Tag::Byte(v) => {
                self.raw(&v.to_be_bytes());
            }
            Tag::Short(v) => {
                self.raw(&v.to_be_bytes());
            }
            Tag::Int(v) => {
                self.i32(*v);
            }
            Tag::Long(v) => {
                self.raw(&v.to_be_bytes());
            }
            Tag::Float(v) => {
                self.raw(&v.to_be_bytes());
            }
            Tag::Double(v) => {
                self.raw(&v.to_be_bytes());
            }
            Tag::ByteArray(values) => {
                self.len(values.len());
                for v in values {
                    self.raw(&v.to_be_bytes());
                }
            }
            Tag::String(text) => {
                self.name(text);
            }
            Tag::List(list) => {
                self.u8(list.element_type.id()).len(list.len());
                for item in list.iter() {
                    self.payload(item);
                }
            }
            Tag::Compound(compound) => {
                for (name, value) in compound.iter() {
                    self.named(name, value);
                }
                self.u8(TagType::End.id());
            }
            Tag::IntArray(values) => {
                self.len(values.len());
                for v in values {
                    self.i32(*v);
                }
            }
            Tag::LongArray(values) => {
                self.len(values.len());
                for v in values {
                    self.raw(&v.to_be_bytes());
                }
            }
        }
        self
    }

    fn len(&mut self, len: usize) -> &mut Self {
        self.i32(i32::try_from(len).expect("length exceeds i32::MAX"))
    }
}

/// Gzip `data` the way schematic files are stored.
///
/// # Panics
///
/// Never in practice; writing to a `Vec` cannot fail.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("write to Vec");
    encoder.finish().expect("finish gzip stream")
}

pub fn compound<'a>(entries: impl IntoIterator<Item = (&'a str, Tag)>) -> Compound {
    entries.into_iter().collect()
}

#[must_use]
pub fn vec3(x: i32, y: i32, z: i32) -> Tag {
    Tag::Compound(compound([
        ("x", Tag::Int(x)),
        ("y", Tag::Int(y)),
        ("z", Tag::Int(z)),
    ]))
}

/// A `BlockStatePalette` list. Entries after the first carry a
/// `Properties` compound, as real files do for stateful blocks.
#[must_use]
pub fn palette(names: &[&str]) -> Tag {
    let items = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut entry = compound([("Name", Tag::String((*name).to_owned()))]);
            if i > 0 {
                entry.insert(
                    "Properties",
                    Tag::Compound(compound([("facing", Tag::String("north".into()))])),
                );
            }
            Tag::Compound(entry)
        })
        .collect();
    Tag::List(TagList::new(TagType::Compound, items))
}

#[must_use]
pub fn region(position: (i32, i32, i32), size: (i32, i32, i32), names: &[&str]) -> Tag {
    Tag::Compound(compound([
        ("BlockStates", Tag::LongArray(vec![0x0123_4567_89AB_CDEF, 0])),
        ("PendingBlockTicks", Tag::List(TagList::empty())),
        ("Position", vec3(position.0, position.1, position.2)),
        ("BlockStatePalette", palette(names)),
        ("Size", vec3(size.0, size.1, size.2)),
        ("TileEntities", Tag::List(TagList::empty())),
    ]))
}

#[must_use]
pub fn metadata(region_count: Option<i32>) -> Compound {
    let mut meta = compound([
        ("EnclosingSize", vec3(5, 4, 5)),
        ("Author", Tag::String("Steve".into())),
        ("Description", Tag::String("A small house".into())),
        ("Name", Tag::String("House".into())),
        ("TimeCreated", Tag::Long(1_700_000_000_000)),
        ("TimeModified", Tag::Long(1_700_000_360_000)),
        ("TotalBlocks", Tag::Int(42)),
        ("TotalVolume", Tag::Int(100)),
    ]);
    if let Some(count) = region_count {
        meta.insert("RegionCount", Tag::Int(count));
    }
    meta
}

/// A two-region schematic with the extra fields real files carry.
#[must_use]
pub fn sample_tree() -> TagTree {
    let regions = compound([
        (
            "Main",
            region((0, 0, 0), (5, 4, -5), &["minecraft:air", "minecraft:oak_stairs"]),
        ),
        ("Roof", region((0, 4, 0), (5, 1, 5), &["minecraft:air"])),
    ]);
    let root = compound([
        ("MinecraftDataVersion", Tag::Int(3700)),
        ("Version", Tag::Int(6)),
        ("SubVersion", Tag::Int(1)),
        ("Metadata", Tag::Compound(metadata(Some(2)))),
        ("Regions", Tag::Compound(regions)),
    ]);
    TagTree::new("", root)
}

/// One root entry of every non-End tag type, in type-id order.
#[must_use]
pub fn all_types_tree() -> TagTree {
    let root = compound([
        ("byte", Tag::Byte(-128)),
        ("short", Tag::Short(-32_768)),
        ("int", Tag::Int(i32::MIN)),
        ("long", Tag::Long(i64::MAX)),
        ("float", Tag::Float(1.5)),
        ("double", Tag::Double(-0.25)),
        ("bytes", Tag::ByteArray(vec![-1, 0, 1])),
        ("string", Tag::String("minecraft:stone".into())),
        (
            "list",
            Tag::List(TagList::new(TagType::Short, vec![Tag::Short(1), Tag::Short(2)])),
        ),
        ("compound", Tag::Compound(compound([("inner", Tag::Byte(1))]))),
        ("ints", Tag::IntArray(vec![1, -2, 3])),
        ("longs", Tag::LongArray(vec![i64::MIN, 0])),
    ]);
    TagTree::new("", root)
}

/// [`sample_tree`] encoded, uncompressed.
#[must_use]
pub fn sample_bytes() -> Vec<u8> {
    TagWriter::encode_tree(&sample_tree())
}
