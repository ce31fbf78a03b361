use crate::compound::Compound;
use crate::tag_type::TagType;

/// One decoded value of the tag-tree format.
///
/// The tree is a strict ownership hierarchy: a `Compound` owns its named
/// children and a `List` owns its unnamed elements, with no back
/// references. Consumers walk it top-down and match exhaustively on the
/// variants.
///
/// `End` only appears as the element type of an empty list or while a
/// compound is being read; it is never stored as a compound entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(TagList),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// A homogeneous list: every element has `element_type`.
///
/// An empty list may declare any element type, including `End`.
#[derive(Clone, Debug, PartialEq)]
pub struct TagList {
    pub element_type: TagType,
    pub items: Vec<Tag>,
}

impl TagList {
    #[must_use]
    pub fn new(element_type: TagType, items: Vec<Tag>) -> Self {
        Self {
            element_type,
            items,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(TagType::End, Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }
}

impl Tag {
    #[must_use]
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&TagList> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Tag::Byte(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Tag::Short(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Long(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Tag::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Double(n) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_types_match_variants() {
        assert_eq!(Tag::End.tag_type(), TagType::End);
        assert_eq!(Tag::Byte(0).tag_type(), TagType::Byte);
        assert_eq!(Tag::Short(0).tag_type(), TagType::Short);
        assert_eq!(Tag::Int(0).tag_type(), TagType::Int);
        assert_eq!(Tag::Long(0).tag_type(), TagType::Long);
        assert_eq!(Tag::Float(0.0).tag_type(), TagType::Float);
        assert_eq!(Tag::Double(0.0).tag_type(), TagType::Double);
        assert_eq!(Tag::ByteArray(vec![]).tag_type(), TagType::ByteArray);
        assert_eq!(Tag::String(String::new()).tag_type(), TagType::String);
        assert_eq!(Tag::List(TagList::empty()).tag_type(), TagType::List);
        assert_eq!(
            Tag::Compound(Compound::new()).tag_type(),
            TagType::Compound
        );
        assert_eq!(Tag::IntArray(vec![]).tag_type(), TagType::IntArray);
        assert_eq!(Tag::LongArray(vec![]).tag_type(), TagType::LongArray);
    }

    #[test]
    fn accessors_only_match_their_variant() {
        assert_eq!(Tag::Int(42).as_i32(), Some(42));
        assert_eq!(Tag::Int(42).as_i64(), None);
        assert_eq!(Tag::Long(7).as_i64(), Some(7));
        assert_eq!(Tag::Byte(-1).as_i8(), Some(-1));
        assert_eq!(Tag::Short(300).as_i16(), Some(300));
        assert_eq!(Tag::Float(1.5).as_f32(), Some(1.5));
        assert_eq!(Tag::Double(2.5).as_f64(), Some(2.5));
        assert_eq!(Tag::String("x".into()).as_str(), Some("x"));
        assert!(Tag::Int(0).as_str().is_none());
        assert!(Tag::Int(0).as_compound().is_none());
        assert!(Tag::Int(0).as_list().is_none());
    }

    #[test]
    fn list_reports_length() {
        let list = TagList::new(TagType::Int, vec![Tag::Int(1), Tag::Int(2)]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert!(TagList::empty().is_empty());
        assert_eq!(TagList::empty().element_type, TagType::End);
    }
}
