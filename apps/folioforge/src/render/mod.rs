// Document rendering: portfolio + theme → standalone HTML, plus the
// download path that persists the serialized document.

pub mod document;
pub mod download;
pub mod theme;

// Re-export the public API consumed by other modules (session, driver).
pub use document::render;
pub use download::{document_filename, DocumentSink, FileSink};
pub use theme::Theme;
