use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use std::env;
use std::path::{Path, PathBuf};

lazy_static! {
    pub static ref ENV_FILE: Option<String> = env::var("ENV_FILE").ok();
    pub static ref LOG_LEVEL: LevelFilter = env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
}

pub fn init_logger() {
    Builder::new().filter_level(*LOG_LEVEL).init();
    info!("Starting storefront backend...");
}

/// Loads `ENV_FILE` if set, otherwise the nearest `.env`. Variables already
/// present in the process environment are not overridden.
pub fn load_environment() -> Result<Option<PathBuf>, dotenv::Error> {
    load_environment_with(ENV_FILE.as_deref())
}

/// A missing default `.env` is not an error; an explicitly named file must load.
pub fn load_environment_with(env_file: Option<&str>) -> Result<Option<PathBuf>, dotenv::Error> {
    match env_file {
        Some(path) => {
            load_environment_from(path)?;
            Ok(Some(PathBuf::from(path)))
        }
        None => Ok(dotenv::dotenv().ok()),
    }
}

pub fn load_environment_from(path: impl AsRef<Path>) -> Result<(), dotenv::Error> {
    dotenv::from_path(path.as_ref())
}
