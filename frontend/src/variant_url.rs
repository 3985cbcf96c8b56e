use crate::error::{Result, UrlError};
use crate::models::SelectedOption;
use crate::search_params::SearchParams;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOCALE_SEGMENT: Regex =
        Regex::new(r"/[a-zA-Z]{2}-[a-zA-Z]{2}/").expect("locale pattern is valid");
}

/// Returns the first `/xx-xx/` segment of `pathname`, slashes included.
pub fn locale_prefix(pathname: &str) -> Option<&str> {
    LOCALE_SEGMENT.find(pathname).map(|m| m.as_str())
}

/// Builds the product-detail URL for `handle`, keeping the locale segment of the
/// current `pathname` and writing every selected option into `search_params`.
///
/// Options are applied with `set`, so a repeated name keeps the last value.
/// Entries already present in `search_params` are kept in the output.
/// The handle is inserted as given and is not percent-encoded.
pub fn get_variant_url(
    handle: &str,
    pathname: &str,
    search_params: &mut SearchParams,
    selected_options: &[SelectedOption],
) -> Result<String> {
    if handle.is_empty() {
        return Err(UrlError::InvalidArgument(
            "product handle must not be empty".to_string(),
        ));
    }

    let path = match locale_prefix(pathname) {
        Some(locale) => {
            log::debug!("Using locale prefix '{locale}' from '{pathname}'");
            format!("{locale}products/{handle}")
        }
        None => format!("/products/{handle}"),
    };

    for option in selected_options {
        search_params.set(&option.name, &option.value);
    }

    let search_string = search_params.to_string();
    if search_string.is_empty() {
        Ok(path)
    } else {
        Ok(format!("{path}?{search_string}"))
    }
}
