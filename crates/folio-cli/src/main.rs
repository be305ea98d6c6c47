use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_cli::{load_snapshot, render, PortfolioClient};
use folio_core::ProjectBrowser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "folio-cli")]
#[command(about = "Browse the portfolio API from the terminal")]
struct Cli {
    /// Base URL of the running folio-server.
    #[arg(long, env = "FOLIO_API_URL", default_value = "http://127.0.0.1:3000")]
    api_url: String,

    /// Per-request timeout.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(flatten)]
    Api(ApiCommands),
    /// Apply pending database migrations (same database settings as folio-server).
    Migrate,
}

/// Commands answered by a running folio-server.
#[derive(Debug, Subcommand)]
enum ApiCommands {
    /// Profile summary and featured projects.
    Home,
    /// Filtered, paginated project listing.
    Projects {
        /// Case-insensitive match against title or description.
        #[arg(long, default_value = "")]
        search: String,
        /// Technology to filter by (see `tags`).
        #[arg(long, default_value = "")]
        tag: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Every technology tag used across projects.
    Tags,
    /// Technology records as stored.
    Technologies,
    /// Download the resume PDF.
    Resume {
        #[arg(long, default_value = "resume.pdf")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_level = std::env::var("FOLIO_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        api_url,
        timeout_secs,
        command,
    } = Cli::parse();

    match command {
        Commands::Migrate => run_migrate().await,
        Commands::Api(command) => {
            let client = PortfolioClient::new(&api_url, timeout_secs)?;
            run_api_command(&client, command).await
        }
    }
}

async fn run_migrate() -> anyhow::Result<()> {
    let config = folio_core::load_app_config()?;
    let pool = folio_db::connect_pool_from_config(&config).await?;
    let applied = folio_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

async fn run_api_command(client: &PortfolioClient, command: ApiCommands) -> anyhow::Result<()> {
    match command {
        ApiCommands::Home => {
            let snapshot = load_snapshot(client).await;
            print!("{}", render::render_home(&snapshot));
        }
        ApiCommands::Projects { search, tag, page } => {
            let snapshot = load_snapshot(client).await;
            let mut browser = ProjectBrowser::new(snapshot.projects);
            browser.set_search_term(search);
            browser.set_selected_tag(tag);
            if page != 1 && !browser.go_to_page(page) {
                anyhow::bail!(
                    "page {page} is out of range (1-{})",
                    browser.total_pages().max(1)
                );
            }
            print!("{}", render::render_listing(&browser));
        }
        ApiCommands::Tags => {
            let projects = client.fetch_projects().await?;
            let browser = ProjectBrowser::new(projects);
            print!("{}", render::render_tags(&browser.tag_vocabulary()));
        }
        ApiCommands::Technologies => {
            let technologies = client.fetch_technologies().await?;
            println!("{}", serde_json::to_string_pretty(&technologies)?);
        }
        ApiCommands::Resume { out } => {
            let bytes = client.fetch_resume().await?;
            tokio::fs::write(&out, &bytes)
                .await
                .with_context(|| format!("writing {}", out.display()))?;
            println!("saved {} bytes to {}", bytes.len(), out.display());
        }
    }

    Ok(())
}
