use std::fmt;
use url::form_urlencoded;

/// Ordered list of query parameters with the same semantics as the browser's
/// `URLSearchParams`: duplicate names are allowed, `set` collapses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` query. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Sets `name` to `value`. The first existing pair keeps its position and
    /// every later pair with the same name is removed; otherwise the pair is appended.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(key, existing)| {
            if key != name {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *existing = value.to_string();
            true
        });

        if !found {
            self.append(name, value);
        }
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    pub fn delete(&mut self, name: &str) {
        self.pairs.retain(|(key, _)| key != name);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_first_and_drops_duplicates() {
        let mut params = SearchParams::parse("a=1&b=2&a=3");
        params.set("a", "x");
        assert_eq!(params.to_string(), "a=x&b=2");
        assert_eq!(params.get_all("a"), vec!["x"]);
    }

    #[test]
    fn test_set_appends_missing_name() {
        let mut params = SearchParams::new();
        params.set("Color", "Red");
        params.set("Size", "M");
        assert_eq!(params.to_string(), "Color=Red&Size=M");
    }

    #[test]
    fn test_parse_strips_question_mark_and_decodes() {
        let params = SearchParams::parse("?Size=Extra+Large&Fit=slim%2Fcut");
        assert_eq!(params.get("Size"), Some("Extra Large"));
        assert_eq!(params.get("Fit"), Some("slim/cut"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_display_form_encodes() {
        let mut params = SearchParams::new();
        params.append("Size", "Extra Large");
        params.append("Material", "50% cotton & wool");
        assert_eq!(
            params.to_string(),
            "Size=Extra+Large&Material=50%25+cotton+%26+wool"
        );
    }

    #[test]
    fn test_delete_and_empty() {
        let mut params = SearchParams::parse("a=1&a=2");
        assert!(params.has("a"));
        params.delete("a");
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }
}
