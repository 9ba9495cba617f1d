use serde::Deserialize;

/// Outcome of a document upload, decoded from the backend response body.
///
/// The backend reports either `{ "success": msg }` or `{ "error": msg }`.
/// Decoding into a tagged value keeps the two branches explicit instead of
/// probing the JSON for key presence at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The vector store was built and is ready for queries.
    Ready(String),
    /// The backend handled the request but rejected the document.
    Rejected(String),
}

impl UploadOutcome {
    /// Decode an upload response body.
    ///
    /// If both keys are present, `success` wins. A body carrying neither
    /// key is reported as [`DecodeError::MissingOutcome`] rather than
    /// falling through to an empty error message.
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        let body: UploadBody =
            serde_json::from_str(body).map_err(|e| DecodeError::Json(e.to_string()))?;
        match (body.success, body.error) {
            (Some(msg), _) => Ok(UploadOutcome::Ready(msg)),
            (None, Some(msg)) => Ok(UploadOutcome::Rejected(msg)),
            (None, None) => Err(DecodeError::MissingOutcome),
        }
    }

    /// The message the backend attached to this outcome.
    pub fn message(&self) -> &str {
        match self {
            UploadOutcome::Ready(msg) | UploadOutcome::Rejected(msg) => msg,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, UploadOutcome::Ready(_))
    }
}

/// Error decoding an upload response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The body was not valid JSON.
    Json(String),
    /// Valid JSON, but with neither `success` nor `error`.
    MissingOutcome,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Json(e) => write!(f, "invalid JSON in upload response: {}", e),
            DecodeError::MissingOutcome => {
                write!(f, "malformed upload response: neither 'success' nor 'error'")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug, Deserialize)]
struct UploadBody {
    success: Option<String>,
    error: Option<String>,
}
