//! Data handling around the layout engine — loading question documents,
//! building backend request payloads, and summarizing trees.

pub mod document;
pub mod request;
pub mod summary;
