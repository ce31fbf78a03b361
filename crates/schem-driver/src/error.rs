/// Errors that can occur while rendering.
///
/// Text rendering cannot fail; only serialisation to JSON can.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
