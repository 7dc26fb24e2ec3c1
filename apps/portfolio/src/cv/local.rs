use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use super::{report_failure, CvError, CvGenerator, CvLauncher, UserAlert, CV_FILE_NAME};

/// Displays a saved document.
#[async_trait]
pub trait Viewer: Send + Sync {
    async fn open(&self, path: &Path) -> io::Result<()>;
}

/// Hands the file to the desktop's default PDF viewer.
pub struct SystemViewer;

fn open_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command.arg(path);
    command
}

#[async_trait]
impl Viewer for SystemViewer {
    async fn open(&self, path: &Path) -> io::Result<()> {
        let status = open_command(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        if !status.success() {
            return Err(io::Error::other(format!("viewer exited with {status}")));
        }
        Ok(())
    }
}

/// Used with `--no-open`: save only.
pub struct NoViewer;

#[async_trait]
impl Viewer for NoViewer {
    async fn open(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

/// Generates the CV into `out_dir` and opens it.
pub struct LocalLauncher {
    generator: CvGenerator,
    out_dir: PathBuf,
    viewer: Arc<dyn Viewer>,
    alert: Arc<dyn UserAlert>,
}

impl LocalLauncher {
    pub fn new(
        generator: CvGenerator,
        out_dir: PathBuf,
        viewer: Arc<dyn Viewer>,
        alert: Arc<dyn UserAlert>,
    ) -> Self {
        Self {
            generator,
            out_dir,
            viewer,
            alert,
        }
    }

    async fn generate_and_save(&self) -> Result<PathBuf, CvError> {
        let cv = self.generator.generate().await?;
        tokio::fs::create_dir_all(&self.out_dir).await?;
        let path = self.out_dir.join(CV_FILE_NAME);
        tokio::fs::write(&path, &cv.bytes).await?;
        info!("Saved {}-page CV to {}", cv.page_count, path.display());
        Ok(path)
    }
}

#[async_trait]
impl CvLauncher for LocalLauncher {
    async fn launch(&self) -> Result<String, CvError> {
        let path = self
            .generate_and_save()
            .await
            .map_err(|e| report_failure(e, self.alert.as_ref()))?;

        // The file is on disk either way; a missing viewer is not a failure.
        if let Err(e) = self.viewer.open(&path).await {
            warn!("Could not open {} in a viewer: {e}", path.display());
        }
        Ok(path.display().to_string())
    }
}
