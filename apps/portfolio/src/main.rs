mod config;
mod contact;
mod content;
mod cv;
mod errors;
mod favicon;
mod layout;
mod matrix;
mod models;
mod routes;
mod site;
mod state;
mod terminal;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::ContactClient;
use crate::content::{load_content, PortfolioContent};
use crate::cv::{CvGenerator, CvLauncher, CvStore, LocalLauncher, NoViewer, SystemViewer, Viewer};
use crate::layout::{default_page_config, PdfWriterBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::terminal::{play_rain, run_console, CommandTable, ConsoleAlert};

/// Transient CVs kept for `/cv/{id}`.
const CV_STORE_CAPACITY: usize = 16;
const RAIN_INTRO: Duration = Duration::from_millis(1500);

#[derive(Parser, Debug)]
#[command(name = "portfolio", version)]
#[command(about = "Personal portfolio: site server, command terminal and CV generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the site, terminal API and CV downloads (default command)
    Serve {
        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the command terminal on this console
    Terminal {
        /// Skip the matrix rain intro
        #[arg(long)]
        no_rain: bool,
    },
    /// Generate the CV, save it and open it
    Cv {
        /// Overrides CV_OUTPUT_DIR
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Save only; do not open a viewer
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with terminal output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let content = load_content(config.content_path.as_deref())
        .await
        .context("Failed to load portfolio content")?;

    let generator = CvGenerator::new(
        Arc::new(content.resume.clone()),
        Arc::new(default_page_config()),
        Arc::new(PdfWriterBackend),
    );

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => serve(config, content, generator, port).await,
        Commands::Terminal { no_rain } => {
            let launcher = LocalLauncher::new(
                generator,
                config.cv_output_dir.clone(),
                Arc::new(SystemViewer),
                Arc::new(ConsoleAlert),
            );
            if !no_rain {
                if let Err(e) = play_rain(RAIN_INTRO).await {
                    warn!("Skipping matrix rain: {e}");
                }
            }
            let table = Arc::new(CommandTable::from_content(&content.terminal));
            run_console(
                &content.terminal,
                table,
                Arc::new(launcher),
                config.typewriter_interval,
            )
            .await
        }
        Commands::Cv { out_dir, no_open } => {
            let viewer: Arc<dyn Viewer> = if no_open {
                Arc::new(NoViewer)
            } else {
                Arc::new(SystemViewer)
            };
            let launcher = LocalLauncher::new(
                generator,
                out_dir.unwrap_or(config.cv_output_dir),
                viewer,
                Arc::new(ConsoleAlert),
            );
            let location = launcher.launch().await.context("CV generation failed")?;
            println!("{location}");
            Ok(())
        }
    }
}

async fn serve(
    config: Config,
    content: PortfolioContent,
    generator: CvGenerator,
    port: Option<u16>,
) -> Result<()> {
    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let contact = match &config.contact_form_endpoint {
        Some(endpoint) => {
            info!("Contact relay enabled ({endpoint})");
            Some(ContactClient::new(endpoint.clone()))
        }
        None => {
            warn!("CONTACT_FORM_ENDPOINT is not set; contact form disabled");
            None
        }
    };

    let port = port.unwrap_or(config.port);
    let state = AppState {
        commands: Arc::new(CommandTable::from_content(&content.terminal)),
        content: Arc::new(content),
        cv_store: Arc::new(CvStore::new(generator, CV_STORE_CAPACITY)),
        contact,
        config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
