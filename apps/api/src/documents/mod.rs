// Saved-resume persistence.
// Documents are stored verbatim, `_layout` included. The store never re-fits content;
// callers opt into a refit per request.

pub mod handlers;
pub mod store;

pub use store::{DocumentStore, DocumentUpdate, MemoryDocumentStore, NewDocument, PgDocumentStore};
