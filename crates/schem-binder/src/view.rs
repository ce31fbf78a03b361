use schem_types::{Compound, Tag, TagList, TagType, Vec3};

use crate::error::SchemaError;
use crate::path::FieldPath;

/// A compound paired with the path it was reached by.
///
/// Lookups go by name and expected type. Every failure names the full
/// dotted path of the field involved, so a report like
/// `Regions.Main.Size.y` points straight at the problem.
#[derive(Clone, Debug)]
pub struct CompoundView<'a> {
    compound: &'a Compound,
    path: FieldPath,
}

impl<'a> CompoundView<'a> {
    #[must_use]
    pub fn root(compound: &'a Compound) -> Self {
        Self {
            compound,
            path: FieldPath::root(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    #[must_use]
    pub fn compound(&self) -> &'a Compound {
        self.compound
    }

    /// Look up `name` and check its type.
    ///
    /// Absent is `Ok(None)`. Present with any other type is a
    /// [`SchemaError::TypeMismatch`].
    fn typed<T>(
        &self,
        name: &str,
        expected: TagType,
        extract: impl FnOnce(&'a Tag) -> Option<T>,
    ) -> Result<Option<T>, SchemaError> {
        let Some(tag) = self.compound.get(name) else {
            return Ok(None);
        };
        extract(tag).map(Some).ok_or_else(|| SchemaError::TypeMismatch {
            path: self.path.key(name),
            expected,
            found: tag.tag_type(),
        })
    }

    fn require<T>(&self, name: &str, value: Option<T>) -> Result<T, SchemaError> {
        value.ok_or_else(|| SchemaError::MissingField {
            path: self.path.key(name),
        })
    }

    pub fn optional_i32(&self, name: &str) -> Result<Option<i32>, SchemaError> {
        self.typed(name, TagType::Int, Tag::as_i32)
    }

    pub fn required_i32(&self, name: &str) -> Result<i32, SchemaError> {
        let value = self.optional_i32(name)?;
        self.require(name, value)
    }

    pub fn required_i64(&self, name: &str) -> Result<i64, SchemaError> {
        let value = self.typed(name, TagType::Long, Tag::as_i64)?;
        self.require(name, value)
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<&'a str>, SchemaError> {
        self.typed(name, TagType::String, Tag::as_str)
    }

    pub fn required_str(&self, name: &str) -> Result<&'a str, SchemaError> {
        let value = self.optional_str(name)?;
        self.require(name, value)
    }

    pub fn optional_compound(&self, name: &str) -> Result<Option<CompoundView<'a>>, SchemaError> {
        let compound = self.typed(name, TagType::Compound, Tag::as_compound)?;
        Ok(compound.map(|compound| CompoundView {
            compound,
            path: self.path.key(name),
        }))
    }

    pub fn required_compound(&self, name: &str) -> Result<CompoundView<'a>, SchemaError> {
        let value = self.optional_compound(name)?;
        self.require(name, value)
    }

    pub fn required_list(&self, name: &str) -> Result<&'a TagList, SchemaError> {
        let value = self.typed(name, TagType::List, Tag::as_list)?;
        self.require(name, value)
    }

    /// A compound holding Int fields `x`, `y` and `z`, all required.
    pub fn required_vec3(&self, name: &str) -> Result<Vec3<i32>, SchemaError> {
        let inner = self.required_compound(name)?;
        Ok(Vec3::new(
            inner.required_i32("x")?,
            inner.required_i32("y")?,
            inner.required_i32("z")?,
        ))
    }

    /// Every entry of this compound must itself be a compound.
    ///
    /// Yields `(key, view)` pairs in declaration order.
    pub fn child_compounds(&self) -> Result<Vec<(&'a str, CompoundView<'a>)>, SchemaError> {
        self.compound
            .iter()
            .map(|(key, tag)| {
                let path = self.path.key(key);
                match tag {
                    Tag::Compound(compound) => Ok((key, CompoundView { compound, path })),
                    other => Err(SchemaError::TypeMismatch {
                        path,
                        expected: TagType::Compound,
                        found: other.tag_type(),
                    }),
                }
            })
            .collect()
    }

    /// Entries of the list `name`, each of which must be a compound.
    ///
    /// An empty list is accepted whatever its declared element type,
    /// since writers commonly tag empty lists as End.
    pub fn required_compound_list(
        &self,
        name: &str,
    ) -> Result<Vec<CompoundView<'a>>, SchemaError> {
        let list = self.required_list(name)?;
        let list_path = self.path.key(name);
        if !list.is_empty() && list.element_type != TagType::Compound {
            return Err(SchemaError::TypeMismatch {
                path: list_path.index(0),
                expected: TagType::Compound,
                found: list.element_type,
            });
        }

        let mut views = Vec::with_capacity(list.len());
        for (index, item) in list.iter().enumerate() {
            let path = list_path.index(index);
            let compound = item.as_compound().ok_or_else(|| SchemaError::TypeMismatch {
                path: path.clone(),
                expected: TagType::Compound,
                found: item.tag_type(),
            })?;
            views.push(CompoundView { compound, path });
        }
        Ok(views)
    }
}
