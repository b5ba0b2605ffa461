mod db;
mod related;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "facdir-cli")]
#[command(about = "Facility directory command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Rank related facilities against the current database and print JSON
    Related(related::RelatedArgs),
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Upsert facilities from a YAML seed file
    Seed {
        /// Seed file path (defaults to `FACDIR_SEED_PATH`)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("facdir-cli: run with --help to list commands");
        return Ok(());
    };

    let config = facdir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pool_config = facdir_db::PoolConfig::from_app_config(&config);
    let pool = facdir_db::connect_pool(&config.database_url, pool_config).await?;

    match command {
        Commands::Db { command } => match command {
            DbCommands::Ping => db::run_db_ping(&pool).await?,
            DbCommands::Migrate => db::run_db_migrate(&pool).await?,
            DbCommands::Seed { file } => {
                let path = file.unwrap_or_else(|| config.seed_path.clone());
                db::run_db_seed(&pool, &path).await?;
            }
        },
        Commands::Related(args) => related::run_related(&pool, args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
