use std::fmt;

/// A non-fatal schema finding; binding still succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindWarning {
    /// `Metadata.RegionCount` disagrees with the regions actually present.
    /// The stated value is kept in the model.
    RegionCountMismatch { stated: i32, actual: usize },
}

impl fmt::Display for BindWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionCountMismatch { stated, actual } => write!(
                f,
                "Metadata.RegionCount is {stated} but {actual} regions were found"
            ),
        }
    }
}
