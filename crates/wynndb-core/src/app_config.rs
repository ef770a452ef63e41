use std::path::PathBuf;

pub const DEFAULT_ITEMS_URL: &str = "https://api.wynncraft.com/v3/item/database?fullResult";
pub const DEFAULT_PLACES_URL: &str =
    "https://raw.githubusercontent.com/Wynntils/Reference/main/locations/places.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./public/data/ingredients.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Item database endpoint. Must return a JSON object keyed by internal name.
    pub items_url: String,
    /// Place labels used for nearest-location enrichment. Best-effort.
    pub places_url: String,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
