//! `db` subcommand handlers.

use std::path::Path;

pub(crate) async fn run_db_ping(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    facdir_db::health_check(pool).await?;
    println!("database ok");
    Ok(())
}

pub(crate) async fn run_db_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = facdir_db::run_migrations(pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

/// Validate the seed file, then upsert its facilities in one transaction.
///
/// # Errors
///
/// Returns an error if the file is missing or invalid, or the upsert fails.
pub(crate) async fn run_db_seed(pool: &sqlx::PgPool, path: &Path) -> anyhow::Result<()> {
    let seed = facdir_core::load_seed_file(path)?;
    let total = seed.facilities.len();
    tracing::info!(path = %path.display(), total, "seeding facilities");

    let (inserted, updated) = facdir_db::seed_facilities(pool, seed.facilities).await?;
    println!("seeded {total} facilities ({inserted} new, {updated} updated)");
    Ok(())
}
