//! Contracts for the two document Q&A endpoints (`/upload` and `/query`).

pub mod query;
pub mod upload;

pub use query::{QueryRequest, QueryResponse};
pub use upload::{DecodeError, UploadOutcome};
