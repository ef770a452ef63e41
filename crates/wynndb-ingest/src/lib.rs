pub mod classify;
pub mod client;
pub mod distance;
pub mod enrich;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod store;
pub mod types;

pub use classify::is_ingredient;
pub use client::WynnClient;
pub use distance::planar_distance;
pub use enrich::find_nearest_place;
pub use error::{FetchError, StoreError};
pub use normalize::normalize_ingredient;
pub use pipeline::{build_catalog, build_catalog_with_stats, CatalogStats};
pub use store::write_catalog;
pub use types::{DropCoordinate, LocationSource, RawItem, RawItemMap, RawLocation};
