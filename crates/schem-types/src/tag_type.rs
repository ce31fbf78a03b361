use std::fmt;

/// The one-byte type id that prefixes every tag on the wire.
///
/// ```text
/// ┌──────┬───────────┬─────────────────────────────────────────┐
/// │ Id   │ Variant   │ Payload                                 │
/// ├──────┼───────────┼─────────────────────────────────────────┤
/// │ 0x00 │ End       │ none; closes the enclosing Compound     │
/// │ 0x01 │ Byte      │ i8                                      │
/// │ 0x02 │ Short     │ i16 BE                                  │
/// │ 0x03 │ Int       │ i32 BE                                  │
/// │ 0x04 │ Long      │ i64 BE                                  │
/// │ 0x05 │ Float     │ f32 BE                                  │
/// │ 0x06 │ Double    │ f64 BE                                  │
/// │ 0x07 │ ByteArray │ i32 len + len bytes                     │
/// │ 0x08 │ String    │ u16 len + len bytes modified UTF-8      │
/// │ 0x09 │ List      │ elem id + i32 count + count payloads    │
/// │ 0x0A │ Compound  │ named tags until End                    │
/// │ 0x0B │ IntArray  │ i32 len + len × i32                     │
/// │ 0x0C │ LongArray │ i32 len + len × i64                     │
/// └──────┴───────────┴─────────────────────────────────────────┘
/// ```
///
/// Unlike the block-type ids of an extensible container format, this set
/// is closed: an id outside 0–12 means the stream is corrupt, so there is
/// no catch-all variant and [`from_id`](Self::from_id) returns `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TagType {
    End = 0x00,
    Byte = 0x01,
    Short = 0x02,
    Int = 0x03,
    Long = 0x04,
    Float = 0x05,
    Double = 0x06,
    ByteArray = 0x07,
    String = 0x08,
    List = 0x09,
    Compound = 0x0A,
    IntArray = 0x0B,
    LongArray = 0x0C,
}

impl TagType {
    /// All type ids in wire order.
    pub const ALL: [TagType; 13] = [
        Self::End,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::ByteArray,
        Self::String,
        Self::List,
        Self::Compound,
        Self::IntArray,
        Self::LongArray,
    ];

    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Display name, e.g. `"Compound"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::End => "End",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::ByteArray => "ByteArray",
            Self::String => "String",
            Self::List => "List",
            Self::Compound => "Compound",
            Self::IntArray => "IntArray",
            Self::LongArray => "LongArray",
        }
    }

    /// Compound and List payloads contain further tags.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Compound | Self::List)
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip() {
        for (id, ty) in TagType::ALL.iter().enumerate() {
            assert_eq!(usize::from(ty.id()), id);
            assert_eq!(TagType::from_id(ty.id()), Some(*ty));
        }
    }

    #[test]
    fn out_of_range_ids_rejected() {
        assert_eq!(TagType::from_id(13), None);
        assert_eq!(TagType::from_id(0xFF), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(TagType::LongArray.to_string(), "LongArray");
    }
}
