//! Portfolio content table.
//!
//! All text the site shows (résumé sections, terminal answers) lives in one
//! `PortfolioContent` value. The compiled-in table is the default; a JSON file
//! with the same shape replaces it wholesale.

mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::{Document, TerminalContent};

pub use builtin::builtin_content;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid content file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content has no résumé sections")]
    EmptyResume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub resume: Document,
    pub terminal: TerminalContent,
}

impl PortfolioContent {
    /// Parses a content table from JSON and checks it is usable.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(raw)?;
        if content.resume.sections.is_empty() {
            return Err(ContentError::EmptyResume);
        }
        Ok(content)
    }
}

/// Loads the content table from `path`, or the built-in table when `None`.
pub async fn load_content(path: Option<&Path>) -> Result<PortfolioContent, ContentError> {
    match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path).await?;
            let content = PortfolioContent::from_json(&raw)?;
            info!(
                "Loaded portfolio content from {} ({} résumé sections)",
                path.display(),
                content.resume.sections.len()
            );
            Ok(content)
        }
        None => Ok(builtin_content()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_resume_has_sections_in_fixed_order() {
        let content = builtin_content();
        let titles: Vec<&str> = content
            .resume
            .sections
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "EDUCATION",
                "PROFESSIONAL EXPERIENCE",
                "SKILLS",
                "PROJECTS",
                "CERTIFICATIONS",
                "REFERENCES"
            ]
        );
    }

    #[test]
    fn test_builtin_content_survives_json_round_trip() {
        let content = builtin_content();
        let json = serde_json::to_string(&content).unwrap();
        let parsed = PortfolioContent::from_json(&json).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_from_json_rejects_empty_resume() {
        let mut content = builtin_content();
        content.resume.sections.clear();
        let json = serde_json::to_string(&content).unwrap();
        assert!(matches!(
            PortfolioContent::from_json(&json),
            Err(ContentError::EmptyResume)
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            PortfolioContent::from_json("{ not json"),
            Err(ContentError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_load_content_without_path_returns_builtin() {
        let content = load_content(None).await.unwrap();
        assert_eq!(content, builtin_content());
    }

    #[tokio::test]
    async fn test_load_content_reads_file() {
        let mut content = builtin_content();
        content.terminal.whoami = "someone else".to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&content).unwrap().as_bytes())
            .unwrap();

        let loaded = load_content(Some(file.path())).await.unwrap();
        assert_eq!(loaded.terminal.whoami, "someone else");
    }

    #[tokio::test]
    async fn test_load_content_missing_file_is_io_error() {
        let result = load_content(Some(Path::new("/definitely/not/here.json"))).await;
        assert!(matches!(result, Err(ContentError::Io(_))));
    }
}
