pub mod app_config;
pub mod config;
pub mod ingredient;

pub use app_config::AppConfig;
pub use config::load_app_config;
pub use ingredient::{IngredientCatalog, NearestPlace, NormalizedIngredient};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
