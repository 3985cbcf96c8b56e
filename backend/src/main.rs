use anyhow::{Context, Result};
use log::{info, warn};
use storefront_backend::config::{init_logger, load_environment, ENV_FILE};
use storefront_backend::env::public_env_from_process;
use storefront_backend::models::RootData;

fn main() -> Result<()> {
    let env_file = load_environment().with_context(|| {
        format!(
            "Failed to load environment file {}",
            ENV_FILE.as_deref().unwrap_or_default()
        )
    })?;
    init_logger();

    match env_file {
        Some(path) => info!("Loaded environment from {}", path.display()),
        None => info!("No .env file loaded, using process environment"),
    }

    let public_env = public_env_from_process();
    match &public_env {
        Some(env) => info!("Exposing {} public variables", env.len()),
        None => warn!("No PUBLIC_ variables found in the environment"),
    }

    let root_data = RootData::new(public_env);
    println!("{}", serde_json::to_string_pretty(&root_data)?);

    Ok(())
}
