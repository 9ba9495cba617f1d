use serde::{Deserialize, Serialize};

/// Request body for `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Response body for `POST /query`: the generated answer plus the
/// supporting excerpts it was grounded on, in retrieval order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub context: Vec<String>,
}
