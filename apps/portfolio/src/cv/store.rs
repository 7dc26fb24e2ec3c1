use std::collections::VecDeque;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::{CvError, CvGenerator, CvLauncher};

/// Server-side launcher: keeps freshly generated CVs under short-lived
/// `/cv/{id}` URLs so a client can open and download the exact document the
/// terminal produced. Oldest entries are evicted once `capacity` is reached.
pub struct CvStore {
    generator: CvGenerator,
    entries: RwLock<VecDeque<(Uuid, Bytes)>>,
    capacity: usize,
}

impl CvStore {
    pub fn new(generator: CvGenerator, capacity: usize) -> Self {
        Self {
            generator,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn generator(&self) -> &CvGenerator {
        &self.generator
    }

    pub async fn get(&self, id: Uuid) -> Option<Bytes> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, bytes)| bytes.clone())
    }

    async fn insert(&self, bytes: Bytes) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.write().await;
        while entries.len() >= self.capacity {
            if let Some((evicted, _)) = entries.pop_front() {
                debug!("Evicted transient CV {evicted}");
            }
        }
        entries.push_back((id, bytes));
        id
    }
}

#[async_trait]
impl CvLauncher for CvStore {
    async fn launch(&self) -> Result<String, CvError> {
        // Logged by `AppError::into_response`.
        let cv = self.generator.generate().await?;
        let id = self.insert(cv.bytes).await;
        info!("Stored {}-page CV as {id}", cv.page_count);
        Ok(format!("/cv/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cv::test_support::{generator_with, FailingBackend};
    use crate::layout::{PdfWriterBackend, RenderError};

    fn id_from(location: &str) -> Uuid {
        location.trim_start_matches("/cv/").parse().unwrap()
    }

    #[tokio::test]
    async fn test_launch_returns_retrievable_location() {
        let store = CvStore::new(generator_with(Arc::new(PdfWriterBackend)), 4);
        let location = store.launch().await.unwrap();
        assert!(location.starts_with("/cv/"));

        let bytes = store.get(id_from(&location)).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = CvStore::new(generator_with(Arc::new(PdfWriterBackend)), 4);
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_oldest_entry_is_evicted_at_capacity() {
        let store = CvStore::new(generator_with(Arc::new(PdfWriterBackend)), 2);
        let first = id_from(&store.launch().await.unwrap());
        let second = id_from(&store.launch().await.unwrap());
        let third = id_from(&store.launch().await.unwrap());

        assert!(store.get(first).await.is_none());
        assert!(store.get(second).await.is_some());
        assert!(store.get(third).await.is_some());
    }

    #[tokio::test]
    async fn test_failure_is_returned_unchanged_and_stores_nothing() {
        let store = CvStore::new(generator_with(Arc::new(FailingBackend)), 2);
        let err = store.launch().await.unwrap_err();
        assert!(matches!(err, CvError::Render(RenderError::EmptyDocument)));
        assert!(store.entries.read().await.is_empty());
    }
}
