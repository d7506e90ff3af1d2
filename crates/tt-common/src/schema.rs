//! Schema versioning for the catalog artifact and reference workbook.

/// Current schema version for serialized documents.
///
/// Bump on any change to field names or document structure; consumers
/// reject documents with a version they do not understand.
pub const SCHEMA_VERSION: &str = "1";
