//! Document Q&A page: upload a PDF, then ask questions about its contents.
//!
//! All heavy lifting (parsing, embedding, vector search, answer generation)
//! happens in the backend; this module is the thin client over its two
//! endpoints.

pub mod model;
pub mod view;
pub mod view_model;

pub use view::QaPage;
