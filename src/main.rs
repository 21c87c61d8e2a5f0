use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memobread::capture::{FixedLocator, GeoPoint, UnavailableLocator};
use memobread::server::{self, AppState};
use memobread::{
    format, render, ActiveView, App, CaptureFlow, Config, GeoLocator, HttpRecordingClient,
    PlaceholderAudio, PlaceholderScorer, RecordingApi, Services,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memobread", version, about = "Record, browse and search voice memos")]
struct Cli {
    /// Configuration file (defaults to ./memobread.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a memo and submit it for transcription
    Record {
        /// Seconds to record before stopping (Ctrl-C stops early)
        #[arg(long, default_value_t = 5)]
        seconds: u64,

        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,

        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,
    },
    /// List recordings, newest as the service orders them
    History,
    /// Recordings grouped by city
    Locations,
    /// Search memo text
    Search {
        query: String,

        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one recording as JSON
    Get { id: String },
    /// Delete a recording
    Delete { id: String },
    /// Interactive navigation between pages
    Shell,
    /// Run the in-memory development stub of the recording service
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memobread=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = Config::load(cli.config.as_deref())?;

    info!("MemoBread v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Record {
            seconds,
            latitude,
            longitude,
        } => {
            if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
                cfg.capture.latitude = Some(latitude);
                cfg.capture.longitude = Some(longitude);
            }
            record(&cfg, seconds).await
        }
        Command::History => show_page(&cfg, "/history").await,
        Command::Locations => show_page(&cfg, "/locations").await,
        Command::Search { query, limit } => {
            cfg.search.limit = limit.or(cfg.search.limit);
            search(&cfg, &query).await
        }
        Command::Get { id } => {
            let recording = client(&cfg)?.get_recording(&id).await?;
            println!("{}", serde_json::to_string_pretty(&recording)?);
            Ok(())
        }
        Command::Delete { id } => {
            client(&cfg)?.delete_recording(&id).await?;
            println!("Deleted {}", id);
            Ok(())
        }
        Command::Shell => shell(&cfg).await,
        Command::Serve => serve(&cfg).await,
    }
}

fn client(cfg: &Config) -> Result<HttpRecordingClient> {
    HttpRecordingClient::new(&cfg.api).context("Failed to create HTTP client")
}

fn services(cfg: &Config) -> Result<Services> {
    let locator: Arc<dyn GeoLocator> = match (cfg.capture.latitude, cfg.capture.longitude) {
        (Some(latitude), Some(longitude)) => {
            Arc::new(FixedLocator(GeoPoint::new(latitude, longitude)))
        }
        _ => Arc::new(UnavailableLocator),
    };

    Ok(Services {
        api: Arc::new(client(cfg)?),
        audio: Arc::new(PlaceholderAudio),
        locator,
        scorer: Arc::new(PlaceholderScorer),
    })
}

async fn record(cfg: &Config, seconds: u64) -> Result<()> {
    let services = services(cfg)?;
    let messages = cfg.ui.locale.messages();

    let mut flow = CaptureFlow::new(services.api, services.audio, cfg.capture.clone(), messages);
    flow.activate(services.locator);
    if !flow.start() {
        anyhow::bail!("Capture session could not be started");
    }

    let mut updates = flow.subscribe();
    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let session = updates.borrow_and_update().clone();
                if session.is_recording() {
                    print!("\r{}  {}%", format::elapsed(session.elapsed_secs), session.progress);
                    std::io::stdout().flush().ok();
                }
            }
        }
    }

    println!("\n{}", messages.processing);
    flow.stop().await;
    println!("{}", render::record(&flow.snapshot(), messages));

    Ok(())
}

async fn show_page(cfg: &Config, path: &str) -> Result<()> {
    let mut app = App::with_initial_path(cfg, services(cfg)?, path);
    app.settle().await;
    println!("{}", app.render());
    Ok(())
}

async fn search(cfg: &Config, query: &str) -> Result<()> {
    let mut app = App::with_initial_path(cfg, services(cfg)?, "/search");
    if let ActiveView::Search(view) = app.view_mut() {
        view.submit(query);
    }
    app.settle().await;
    println!("{}", app.render());
    Ok(())
}

const SHELL_HELP: &str = "\
/record /history /locations /search   switch page
back                                   previous page
start | stop                           record page controls
<text>                                 search (on the search page)
quit";

async fn shell(cfg: &Config) -> Result<()> {
    let mut app = App::new(cfg, services(cfg)?);
    println!("{}\n\n{}", SHELL_HELP, app.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" => break,
            "help" => {
                println!("{}", SHELL_HELP);
                continue;
            }
            "back" => {
                if app.back().is_none() {
                    println!("(no previous page)");
                }
            }
            _ if line.contains("://") => {
                warn!("External link ignored: {}", line);
                continue;
            }
            _ if line.starts_with('/') => {
                app.open(line);
            }
            _ => match app.view_mut() {
                ActiveView::Record(flow) => match line {
                    "start" => {
                        if !flow.start() {
                            println!("(a session is already active)");
                        }
                    }
                    "stop" => {
                        flow.stop().await;
                    }
                    _ => println!("(unknown command, try `help`)"),
                },
                ActiveView::Search(view) => {
                    view.submit(line);
                }
                _ => println!("(unknown command, try `help`)"),
            },
        }

        app.settle().await;
        println!("\n{}", app.render());
    }

    Ok(())
}

async fn serve(cfg: &Config) -> Result<()> {
    let addr = format!("{}:{}", cfg.server.bind, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let state = AppState::new(cfg.ui.locale.messages().unknown_location);
    server::serve(listener, state).await
}
