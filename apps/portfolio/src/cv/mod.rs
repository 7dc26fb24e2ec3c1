//! CV generation entry point.
//!
//! `CvGenerator` runs layout + PDF encoding. A `CvLauncher` is what the rest
//! of the app calls to "open the CV": it generates, delivers the document
//! (save + open locally, or a transient download URL in the server) and
//! returns where the document can be found.
//!
//! Failures are logged, reported through a `UserAlert`, and then returned to
//! the caller unchanged.

mod local;
mod store;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info};

use crate::layout::{render_document, DocumentInfo, PageConfig, PdfBackend, RenderError};
use crate::models::Document;

pub use local::{LocalLauncher, NoViewer, SystemViewer, Viewer};
pub use store::CvStore;

/// File name used for every saved or downloaded CV.
pub const CV_FILE_NAME: &str = "Bikash_Sarraf_CV.pdf";

/// Message shown to the user when generation fails.
pub const GENERATION_ALERT: &str = "Error generating PDF. Please try again.";

#[derive(Debug, Error)]
pub enum CvError {
    #[error("failed to render CV: {0}")]
    Render(#[from] RenderError),

    #[error("failed to save CV: {0}")]
    Io(#[from] std::io::Error),

    #[error("CV generation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone)]
pub struct GeneratedCv {
    pub bytes: Bytes,
    pub page_count: usize,
}

/// Lays out the résumé and encodes it with the configured backend.
#[derive(Clone)]
pub struct CvGenerator {
    document: Arc<Document>,
    page_config: Arc<PageConfig>,
    backend: Arc<dyn PdfBackend>,
}

impl CvGenerator {
    pub fn new(
        document: Arc<Document>,
        page_config: Arc<PageConfig>,
        backend: Arc<dyn PdfBackend>,
    ) -> Self {
        Self {
            document,
            page_config,
            backend,
        }
    }

    pub fn generate_sync(&self) -> Result<GeneratedCv, CvError> {
        let pages = render_document(&self.document, &self.page_config);
        let doc_info = DocumentInfo {
            title: "Curriculum Vitae".to_string(),
            author: self.document.header.name.clone(),
            created: Utc::now(),
        };
        let bytes = self.backend.render(&pages, &doc_info)?;
        info!(
            "Generated CV: {} page(s), {} bytes",
            pages.page_count(),
            bytes.len()
        );
        Ok(GeneratedCv {
            bytes: Bytes::from(bytes),
            page_count: pages.page_count(),
        })
    }

    /// Runs `generate_sync` on the blocking pool.
    pub async fn generate(&self) -> Result<GeneratedCv, CvError> {
        let generator = self.clone();
        tokio::task::spawn_blocking(move || generator.generate_sync()).await?
    }
}

/// How a failure is surfaced to the person using the app.
pub trait UserAlert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Logs a generation failure, alerts the user, and hands the error back.
pub fn report_failure(err: CvError, alert: &dyn UserAlert) -> CvError {
    error!("Error generating PDF: {err}");
    alert.alert(GENERATION_ALERT);
    err
}

#[async_trait]
pub trait CvLauncher: Send + Sync {
    /// Generates and delivers the CV. Returns the document's location.
    async fn launch(&self) -> Result<String, CvError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;
    use crate::layout::page::PageSet;

    pub struct FailingBackend;

    impl PdfBackend for FailingBackend {
        fn render(&self, _: &PageSet, _: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::EmptyDocument)
        }
    }

    #[derive(Default)]
    pub struct RecordingAlert {
        pub messages: Mutex<Vec<String>>,
    }

    impl UserAlert for RecordingAlert {
        fn alert(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    pub fn generator_with(backend: Arc<dyn PdfBackend>) -> CvGenerator {
        CvGenerator::new(
            Arc::new(crate::content::builtin_content().resume),
            Arc::new(crate::layout::default_page_config()),
            backend,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::layout::PdfWriterBackend;

    #[test]
    fn test_generate_sync_produces_pdf_bytes() {
        let generator = generator_with(Arc::new(PdfWriterBackend));
        let cv = generator.generate_sync().unwrap();
        assert!(cv.bytes.starts_with(b"%PDF-"));
        assert!(cv.page_count >= 1);
    }

    #[tokio::test]
    async fn test_generate_runs_on_blocking_pool() {
        let generator = generator_with(Arc::new(PdfWriterBackend));
        let first = generator.generate().await.unwrap();
        let second = generator.generate().await.unwrap();
        assert_eq!(first.page_count, second.page_count);
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_as_render_error() {
        let generator = generator_with(Arc::new(FailingBackend));
        let err = generator.generate().await.unwrap_err();
        assert!(matches!(err, CvError::Render(RenderError::EmptyDocument)));
    }

    #[test]
    fn test_report_failure_alerts_once_and_returns_error() {
        let alert = RecordingAlert::default();
        let err = report_failure(CvError::Render(RenderError::EmptyDocument), &alert);
        assert!(matches!(err, CvError::Render(RenderError::EmptyDocument)));
        assert_eq!(
            *alert.messages.lock().unwrap(),
            vec![GENERATION_ALERT.to_string()]
        );
    }
}
