use crate::error::Result;
use crate::models::SelectedOption;
use crate::search_params::SearchParams;
use crate::variant_url::get_variant_url;
use std::collections::HashMap;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    handle: String,
    pathname: String,
    options: String,
}

impl CacheKey {
    fn new(handle: &str, pathname: &str, selected_options: &[SelectedOption]) -> Self {
        let options = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(
                selected_options
                    .iter()
                    .map(|option| (option.name.as_str(), option.value.as_str())),
            )
            .finish();

        Self {
            handle: handle.to_string(),
            pathname: pathname.to_string(),
            options,
        }
    }
}

/// Remembers variant URLs per (handle, pathname, options) so repeated renders
/// of the same selection reuse the string. Entries live until invalidated.
#[derive(Debug, Default)]
pub struct VariantUrlCache {
    entries: HashMap<CacheKey, String>,
}

impl VariantUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached URL or builds it from a fresh [`SearchParams`].
    pub fn get_or_build(
        &mut self,
        handle: &str,
        pathname: &str,
        selected_options: &[SelectedOption],
    ) -> Result<String> {
        let key = CacheKey::new(handle, pathname, selected_options);
        if let Some(url) = self.entries.get(&key) {
            log::debug!("Variant URL cache hit for '{handle}'");
            return Ok(url.clone());
        }

        let url = get_variant_url(handle, pathname, &mut SearchParams::new(), selected_options)?;
        self.entries.insert(key, url.clone());
        Ok(url)
    }

    /// Drops every cached URL for `handle`.
    pub fn invalidate(&mut self, handle: &str) {
        self.entries.retain(|key, _| key.handle != handle);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
