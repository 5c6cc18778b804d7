mod batch;
mod provider_builder;
mod select;

use clap::{Parser, Subcommand};
use polyglot_core::{config, locale, table, translate::Translator};
use std::path::Path;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "polyglot",
    version,
    about = "Bulk machine translation of i18n string tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file.
    #[arg(short, long, default_value = "polyglot.toml")]
    config: String,

    /// Directory holding `<locale>.json` tables (overrides config).
    #[arg(long)]
    source_dir: Option<String>,

    /// Locale of the base table (overrides config).
    #[arg(long)]
    source_locale: Option<String>,

    /// Menu answer: 1 = curated, 2 = all, 3 = single locale.
    #[arg(long)]
    mode: Option<String>,

    /// Locale code for mode 3.
    #[arg(long)]
    locale: Option<String>,

    /// Use only this provider instead of the configured order.
    #[arg(long)]
    provider: Option<String>,

    /// API key for google-cloud.
    #[arg(long, env = "POLYGLOT_GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate the source table (default).
    Run,
    /// List known locale codes and their backend codes.
    Locales,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.polyglot.log_level)),
        )
        .init();

    if !Path::new(&cli.config).exists() {
        info!("Config file not found at {}, using defaults", cli.config);
    }

    if let Some(dir) = cli.source_dir.clone() {
        cfg.source.dir = dir;
    }
    if let Some(l) = cli.source_locale.clone() {
        cfg.source.locale = l;
    }
    if let Some(key) = cli.api_key.clone() {
        cfg.provider.google_cloud.get_or_insert_with(Default::default).api_key = key;
    }

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Locales => {
            for (code, external) in locale::LOCALE_CODES {
                println!("{code:<8} {external}");
            }
            Ok(())
        }
        Commands::Run => run(&cli, &cfg).await,
    }
}

async fn run(cli: &Cli, cfg: &config::Config) -> anyhow::Result<()> {
    println!("🌍 polyglot — string table translation");
    println!("{}", "=".repeat(50));

    // Backend first: nothing else happens without one.
    let provider = provider_builder::select_provider(&cfg.provider, cli.provider.as_deref()).await?;

    let source_file = cfg.source.source_file();
    let source = table::load(&source_file)?;
    println!("✅ Source file: {} ({} keys)", source_file.display(), source.len());
    println!("📁 Output directory: {}", cfg.source.dir_path().display());

    let mode = select::choose_mode(cli.mode.clone(), cli.locale.clone())?;
    let targets = select::resolve_targets(&mode, &cfg.source.locale)?;

    let translator = Translator::new(provider.as_ref(), &cfg.source.locale);
    batch::run(&source, &targets, &translator, &cfg.source).await;

    Ok(())
}
