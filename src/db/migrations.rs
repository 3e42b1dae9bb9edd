use anyhow::{bail, Context, Result};
use rusqlite::Connection;

/// Schema scripts in order; entry `n` upgrades `user_version` from `n` to `n + 1`.
const MIGRATIONS: &[(&str, &str)] = &[
    ("schema_v1.sql", include_str!("schemas/schema_v1.sql")),
    ("schema_v2.sql", include_str!("schemas/schema_v2.sql")),
];

const CURRENT_SCHEMA_VERSION: usize = MIGRATIONS.len();

fn schema_version(conn: &Connection) -> Result<usize> {
    let raw: i64 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read user_version pragma")?;
    usize::try_from(raw).with_context(|| format!("invalid user_version {raw}"))
}

/// Bring the schema up to date, refusing stores written by a newer build.
pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    migrate_to(conn, CURRENT_SCHEMA_VERSION)
}

fn migrate_to(conn: &mut Connection, target: usize) -> Result<()> {
    let current = schema_version(conn)?;
    if current > CURRENT_SCHEMA_VERSION {
        bail!(
            "database schema v{current} is newer than supported schema v{CURRENT_SCHEMA_VERSION}"
        );
    }

    let pending = MIGRATIONS
        .iter()
        .enumerate()
        .take(target)
        .skip(current);

    // All pending scripts commit together or not at all.
    let tx = conn
        .transaction()
        .context("failed to open migration transaction")?;
    let mut reached = current;
    for (index, (name, sql)) in pending {
        tx.execute_batch(sql)
            .with_context(|| format!("failed to execute {name}"))?;
        reached = index + 1;
    }

    if reached == current {
        return Ok(());
    }

    tx.pragma_update(None, "user_version", reached as i64)
        .context("failed to update user_version pragma")?;
    tx.commit().context("failed to commit migrations")?;

    Ok(())
}
