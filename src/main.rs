//! AISearch: terminal front end for the search client

use aisearch::{
    config::{self, RenderFormat},
    network::HttpClient,
    shell::Session,
    view::Templates,
    HttpBackend, SearchClient,
};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "aisearch", version, about = "Search AI websites and tools from the terminal")]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search backend base URL (overrides config and AISEARCH_BACKEND_URL)
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Output format: text or html
    #[arg(short, long)]
    format: Option<RenderFormat>,

    /// Run a single search, print the page and exit
    #[arg(long, value_name = "QUERY")]
    once: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the rendered page
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting AISearch v{}", aisearch::VERSION);

    let mut settings = config::load(args.config.as_deref())?;
    if let Some(url) = args.backend_url {
        settings.backend.base_url = url;
    }
    if let Some(format) = args.format {
        settings.ui.format = format;
    }
    settings.validate()?;
    info!("Using backend {}", settings.backend.base_url);

    let client = HttpClient::with_settings(&settings.backend)?;
    let backend = Arc::new(HttpBackend::new(client));
    let search = SearchClient::new(backend, settings.client.clone());
    let mut session = Session::new(search, Templates::new()?, settings.ui.clone());

    if let Some(query) = args.once {
        let page = session.search_once(&query).await?;
        println!("{}", page);
        return Ok(());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await
}
