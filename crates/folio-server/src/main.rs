//! `folio` command line

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use folio_page::PageQuery;
use folio_server::{init_logging, open_composer, serve, SiteConfig};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", version, about = "Content-driven portfolio site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve(ConfigArgs),
    /// Compose the page once and print its HTML
    Render(RenderArgs),
    /// Print the resolved section visibility and ordinals
    Sections(SectionsArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Config file (TOML); FOLIO_* variables override it
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// UI state as a query string, e.g. `skills=Backend&projects=all`
    #[arg(long, value_name = "QUERY", default_value = "")]
    query: String,
}

#[derive(Args)]
struct SectionsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn load(args: &ConfigArgs) -> anyhow::Result<SiteConfig> {
    SiteConfig::load(args.config.as_deref()).context("loading configuration")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    match cli.command {
        Command::Serve(args) => {
            let config = load(&args)?;
            serve(config).await?;
        }
        Command::Render(args) => {
            let config = load(&args.config)?;
            let composer = open_composer(&config).await?;
            let query = PageQuery::parse(args.query.trim_start_matches('?'));
            let html = composer.render(&query, None).await;
            std::io::stdout()
                .lock()
                .write_all(html.as_bytes())
                .context("writing page")?;
        }
        Command::Sections(args) => {
            let config = load(&args.config)?;
            let composer = open_composer(&config).await?;
            let table = composer.snapshot().await.table();

            let mut out = std::io::stdout().lock();
            if args.json {
                serde_json::to_writer_pretty(&mut out, &table)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{:<14} {:<8} {:>7}", "SECTION", "STATE", "ORDINAL")?;
                for row in &table {
                    let ordinal = row
                        .ordinal
                        .map(|n| config.presentation.ordinal_format.format(n))
                        .unwrap_or_else(|| "-".to_string());
                    writeln!(
                        out,
                        "{:<14} {:<8} {:>7}",
                        row.section.key(),
                        row.state.as_str(),
                        ordinal
                    )?;
                }
            }
        }
    }
    Ok(())
}
