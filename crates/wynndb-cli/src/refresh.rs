//! The `refresh` command: fetch, build, persist.
//!
//! The item fetch is fatal: on failure nothing is written and any existing
//! catalog is left as it was. The place fetch only degrades enrichment.

use std::path::Path;

use anyhow::Context;
use wynndb_ingest::{build_catalog_with_stats, write_catalog, CatalogStats, WynnClient};

/// What a refresh produced.
#[derive(Debug)]
pub(crate) struct RefreshSummary {
    pub stats: CatalogStats,
    /// `false` for dry runs.
    pub written: bool,
}

/// Runs one full refresh against `client`, writing the catalog to
/// `output_path` unless `dry_run` is set.
///
/// Both sources are requested concurrently; the build starts once both have
/// completed.
///
/// # Errors
///
/// Returns an error if the item database cannot be fetched or the catalog
/// cannot be written.
pub(crate) async fn run_refresh(
    client: &WynnClient,
    output_path: &Path,
    dry_run: bool,
) -> anyhow::Result<RefreshSummary> {
    tracing::info!("starting data refresh");

    let (items, places) = tokio::join!(client.fetch_items(), client.fetch_location_source());
    let items =
        items.with_context(|| format!("failed to fetch items from {}", client.items_url()))?;

    tracing::info!(
        items = items.len(),
        places = places.locations().len(),
        "processing ingredients"
    );
    let (catalog, stats) = build_catalog_with_stats(&items, &places);

    if dry_run {
        tracing::info!(
            ingredients = stats.ingredients,
            enriched = stats.enriched,
            path = %output_path.display(),
            "dry-run: catalog not written"
        );
        return Ok(RefreshSummary {
            stats,
            written: false,
        });
    }

    write_catalog(output_path, &catalog)
        .with_context(|| format!("failed to write catalog to {}", output_path.display()))?;

    tracing::info!(
        ingredients = stats.ingredients,
        enriched = stats.enriched,
        path = %output_path.display(),
        "saved ingredient catalog"
    );

    Ok(RefreshSummary {
        stats,
        written: true,
    })
}

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;
