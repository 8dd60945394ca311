//! Seed the site database with default content.
//!
//! Creates the SQLite file (and schema) if missing, then writes the default
//! copy, palette and contact channels for a fresh install.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use consultorio_cms::SiteCms;

#[derive(Parser)]
#[command(
    name = "seed-defaults",
    about = "Initialize the site database with default content"
)]
struct Args {
    /// Path to the SQLite database file (created if missing)
    #[arg(long, default_value = "consultorio.db")]
    db: PathBuf,

    /// Rewrite config blobs that already exist
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Respect RUST_LOG if set; otherwise default to verbose for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("consultorio_cms=debug,info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let cms = SiteCms::open(&args.db).await?;
    let summary = cms.seed_defaults(args.force).await?;

    println!(
        "Seeded {} config keys and {} contact buttons into {}",
        summary.config_keys_written,
        summary.contact_buttons_created,
        args.db.display()
    );
    Ok(())
}
