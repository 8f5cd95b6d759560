// Resume intake: PDF text extraction, request validation, and chunking.

pub mod chunker;
pub mod pdf;
pub mod validation;
