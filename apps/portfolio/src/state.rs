use std::sync::Arc;

use crate::config::Config;
use crate::contact::ContactClient;
use crate::content::PortfolioContent;
use crate::cv::CvStore;
use crate::terminal::CommandTable;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub content: Arc<PortfolioContent>,
    pub commands: Arc<CommandTable>,
    /// Generator plus the transient `/cv/{id}` documents.
    pub cv_store: Arc<CvStore>,
    /// `None` when `CONTACT_FORM_ENDPOINT` is unset.
    pub contact: Option<ContactClient>,
}
