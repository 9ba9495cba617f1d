//! Wire types shared between the frontend and the Q&A backend.

pub mod qa;
