//! Client-side storefront helpers: product variant URLs and access to the
//! public environment shipped in the root route data.

pub mod env_variable_utils;
pub mod error;
pub mod models;
pub mod search_params;
pub mod variant_cache;
pub mod variant_url;

pub use env_variable_utils::{get_env_var, use_env, PUBLIC_ENV_KEY};
pub use error::UrlError;
pub use models::SelectedOption;
pub use search_params::SearchParams;
pub use variant_cache::VariantUrlCache;
pub use variant_url::{get_variant_url, locale_prefix};
