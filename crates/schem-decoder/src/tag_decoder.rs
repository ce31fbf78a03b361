use log::warn;
use schem_types::{Compound, Tag, TagList, TagTree, TagType};
use schem_wire::{ByteCursor, DecodedText};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::warning::DecodeWarning;

/// Parser for the tag-tree grammar.
///
/// Reads type ids and length prefixes as it meets them; nothing depends
/// on fields appearing at fixed offsets. Open Compound and List payloads
/// are kept on a heap stack rather than the call stack, and each nesting
/// level is counted against [`DecoderConfig::max_depth`] before its
/// payload is read.
///
/// ```text
///   root      := type_id(0x0A) name payload(Compound)
///   Compound  := { type_id name payload(type_id) }* 0x00
///   List      := elem_type_id count:i32 payload(elem_type)*count
///   name      := len:u16 bytes[len]            (modified UTF-8)
/// ```
pub struct TagDecoder<'a> {
    cursor: ByteCursor<'a>,
    max_depth: usize,
    depth: usize,
    warnings: Vec<DecodeWarning>,
}

impl<'a> TagDecoder<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8], config: &DecoderConfig) -> Self {
        Self {
            cursor: ByteCursor::new(buf),
            max_depth: config.max_depth,
            depth: 0,
            warnings: Vec::new(),
        }
    }

    /// Current offset into the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Hand back the warnings collected so far.
    #[must_use]
    pub fn into_warnings(self) -> Vec<DecodeWarning> {
        self.warnings
    }

    /// Read the named root tag, which must be a Compound.
    ///
    /// # Errors
    ///
    /// [`DecodeError::RootNotCompound`] for any other root type, or any
    /// error raised while reading the compound itself.
    pub fn read_root(&mut self) -> Result<TagTree, DecodeError> {
        let offset = self.cursor.position();
        let tag_type = self.read_type_id()?;
        if tag_type != TagType::Compound {
            return Err(DecodeError::RootNotCompound {
                found: tag_type,
                offset,
            });
        }
        let name = self.read_name()?;
        let root = match self.read_payload(TagType::Compound)? {
            Tag::Compound(root) => root,
            other => {
                return Err(DecodeError::RootNotCompound {
                    found: other.tag_type(),
                    offset,
                });
            }
        };
        log::debug!("decoded root {name:?} with {} entries", root.len());
        Ok(TagTree::new(name, root))
    }

    /// Read the payload of a tag whose type id has already been consumed.
    ///
    /// Containers are decoded with an explicit stack of open frames, so
    /// the call stack stays flat however deep the input nests. Only
    /// [`DecoderConfig::max_depth`] bounds the nesting.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; the cursor position is unspecified afterwards.
    pub fn read_payload(&mut self, tag_type: TagType) -> Result<Tag, DecodeError> {
        if !tag_type.is_container() {
            return self.read_leaf(tag_type);
        }

        let mut current = self.open(tag_type)?;
        let mut parents: Vec<Frame> = Vec::new();
        loop {
            let next = match &mut current {
                Frame::Compound { compound, pending } => {
                    let offset = self.cursor.position();
                    let child_type = self.read_type_id()?;
                    if child_type == TagType::End {
                        Step::Close
                    } else {
                        let name = self.read_name()?;
                        if child_type.is_container() {
                            *pending = Some((name, offset));
                            Step::Open(child_type)
                        } else {
                            let value = self.read_leaf(child_type)?;
                            self.insert(compound, name, offset, value);
                            Step::Continue
                        }
                    }
                }
                Frame::List {
                    element_type,
                    remaining,
                    items,
                    ..
                } => {
                    if *remaining == 0 {
                        Step::Close
                    } else {
                        *remaining -= 1;
                        if element_type.is_container() {
                            Step::Open(*element_type)
                        } else {
                            items.push(self.read_leaf(*element_type)?);
                            Step::Continue
                        }
                    }
                }
            };

            match next {
                Step::Continue => {}
                Step::Open(child_type) => {
                    let child = self.open(child_type)?;
                    parents.push(std::mem::replace(&mut current, child));
                }
                Step::Close => {
                    let Some(parent) = parents.pop() else {
                        return Ok(self.close(current));
                    };
                    let finished = std::mem::replace(&mut current, parent);
                    let value = self.close(finished);
                    match &mut current {
                        Frame::Compound { compound, pending } => {
                            if let Some((name, offset)) = pending.take() {
                                self.insert(compound, name, offset, value);
                            }
                        }
                        Frame::List { items, .. } => items.push(value),
                    }
                }
            }
        }
    }

    /// Scalars, strings and arrays: payloads that hold no further tags.
    fn read_leaf(&mut self, tag_type: TagType) -> Result<Tag, DecodeError> {
        let tag = match tag_type {
            TagType::End => Tag::End,
            TagType::Byte => Tag::Byte(self.cursor.read_i8()?),
            TagType::Short => Tag::Short(self.cursor.read_i16()?),
            TagType::Int => Tag::Int(self.cursor.read_i32()?),
            TagType::Long => Tag::Long(self.cursor.read_i64()?),
            TagType::Float => Tag::Float(self.cursor.read_f32()?),
            TagType::Double => Tag::Double(self.cursor.read_f64()?),
            TagType::ByteArray => {
                let len = self.cursor.read_array_len(1)?;
                let bytes = self.cursor.read_bytes(len)?;
                Tag::ByteArray(bytes.iter().map(|&b| i8::from_be_bytes([b])).collect())
            }
            TagType::String => Tag::String(self.read_text()?),
            TagType::IntArray => {
                let len = self.cursor.read_array_len(4)?;
                let mut ints = Vec::with_capacity(len);
                for _ in 0..len {
                    ints.push(self.cursor.read_i32()?);
                }
                Tag::IntArray(ints)
            }
            TagType::LongArray => {
                let len = self.cursor.read_array_len(8)?;
                let mut longs = Vec::with_capacity(len);
                for _ in 0..len {
                    longs.push(self.cursor.read_i64()?);
                }
                Tag::LongArray(longs)
            }
            TagType::List | TagType::Compound => self.read_payload(tag_type)?,
        };
        Ok(tag)
    }

    fn read_type_id(&mut self) -> Result<TagType, DecodeError> {
        let offset = self.cursor.position();
        let id = self.cursor.read_u8()?;
        TagType::from_id(id).ok_or(DecodeError::UnknownTagType { id, offset })
    }

    fn read_name(&mut self) -> Result<String, DecodeError> {
        self.read_text()
    }

    fn read_text(&mut self) -> Result<String, DecodeError> {
        let offset = self.cursor.position();
        let text = self.cursor.read_string()?;
        Ok(self.accept_text(text, offset))
    }

    fn accept_text(&mut self, text: DecodedText, offset: usize) -> String {
        if text.is_malformed() {
            let lossy = text.as_str().to_owned();
            warn!("malformed modified UTF-8 at offset {offset}");
            self.warnings
                .push(DecodeWarning::MalformedString { offset, lossy });
        }
        text.into_string()
    }

    fn insert(&mut self, compound: &mut Compound, name: String, offset: usize, value: Tag) {
        if compound.insert(name.clone(), value).is_some() {
            warn!("duplicate key {name:?} at offset {offset}");
            self.warnings
                .push(DecodeWarning::DuplicateKey { name, offset });
        }
    }

    fn enter(&mut self, offset: usize) -> Result<(), DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::DepthExceeded {
                max: self.max_depth,
                offset,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Start a Compound or List payload at the cursor.
    ///
    /// Every Compound is one nesting level. A List is one only when its
    /// elements are themselves containers; a list of scalars adds none.
    fn open(&mut self, tag_type: TagType) -> Result<Frame, DecodeError> {
        let offset = self.cursor.position();
        if tag_type == TagType::Compound {
            self.enter(offset)?;
            return Ok(Frame::Compound {
                compound: Compound::new(),
                pending: None,
            });
        }

        let element_type = self.read_type_id()?;
        let nests = element_type.is_container();
        if nests {
            self.enter(offset)?;
        }
        let count_offset = self.cursor.position();
        let count = self
            .cursor
            .read_array_len(min_payload_width(element_type))?;
        if element_type == TagType::End && count > 0 {
            return Err(DecodeError::UntypedList {
                count,
                offset: count_offset,
            });
        }
        Ok(Frame::List {
            element_type,
            remaining: count,
            items: Vec::with_capacity(count),
            nests,
        })
    }

    fn close(&mut self, frame: Frame) -> Tag {
        match frame {
            Frame::Compound { compound, .. } => {
                self.depth -= 1;
                Tag::Compound(compound)
            }
            Frame::List {
                element_type,
                items,
                nests,
                ..
            } => {
                if nests {
                    self.depth -= 1;
                }
                Tag::List(TagList::new(element_type, items))
            }
        }
    }
}

/// A container whose payload is still being read.
enum Frame {
    Compound {
        compound: Compound,
        /// Name and offset of the child container currently open above.
        pending: Option<(String, usize)>,
    },
    List {
        element_type: TagType,
        remaining: usize,
        items: Vec<Tag>,
        nests: bool,
    },
}

enum Step {
    Continue,
    Open(TagType),
    Close,
}

/// Smallest number of bytes one payload of `tag_type` can occupy.
///
/// Used to reject list counts that could not possibly fit in the bytes
/// that remain, before allocating for them.
fn min_payload_width(tag_type: TagType) -> usize {
    match tag_type {
        TagType::End => 0,
        TagType::Byte | TagType::Compound => 1,
        TagType::Short | TagType::String => 2,
        TagType::Int | TagType::Float | TagType::ByteArray | TagType::IntArray | TagType::LongArray => 4,
        TagType::List => 5,
        TagType::Long | TagType::Double => 8,
    }
}
