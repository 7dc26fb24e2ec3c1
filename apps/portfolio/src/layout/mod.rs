// CV layout: font metrics, the pagination engine, and the PDF backend.
// Layout is CPU-bound; async callers run it inside tokio::task::spawn_blocking.

pub mod engine;
pub mod font_metrics;
pub mod page;
pub mod pdf;

// Re-export the public API consumed by the CV generator and handlers.
pub use engine::render_document;
pub use page::{default_page_config, PageConfig};
pub use pdf::{DocumentInfo, PdfBackend, PdfWriterBackend, RenderError};
