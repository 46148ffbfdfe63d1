// SEO content engine: keyword research, outlines, content scoring, metadata, schema.
// Everything except `handlers` is synchronous and free of I/O.

pub mod analysis;
pub mod handlers;
pub mod keywords;
pub mod metadata;
pub mod outline;
pub mod schema;
pub mod templates;
pub mod text;
