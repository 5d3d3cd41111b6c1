use crate::encoding::{decode_component, encode_component};

/// An ordered query-string mapping.
///
/// Keys are unique: writing an existing key overwrites its value in place,
/// so insertion order is preserved and serialization is stable. Values are
/// stored decoded; rendering re-encodes them with RFC 3986 percent-encoding
/// (a space becomes `%20`, never `+`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a form-encoded query string (with or without leading `?`).
    /// `+` decodes to a space. Empty input yields an empty mapping.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query).trim();

        let mut result = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => result.set(decode_component(key), decode_component(value)),
                None => result.set(decode_component(pair), String::new()),
            }
        }
        result
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Set a key, overwriting in place when it already exists (the key keeps
    /// its original position).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        for (existing, slot) in &mut self.params {
            if *existing == key {
                *slot = value;
                return;
            }
        }
        self.params.push((key, value));
    }

    /// Remove a key; reports whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.params.len();
        self.params.retain(|(k, _)| k != key);
        before != self.params.len()
    }

    /// Get the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Render with a leading `?`, or as an empty string when there are no
    /// parameters. Use the `Display` form for the bare pair list.
    pub fn serialize(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        format!("?{self}")
    }
}

impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode_component(key), encode_component(value))?;
        }
        Ok(())
    }
}

impl From<&str> for Query {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl From<String> for Query {
    fn from(query: String) -> Self {
        Self::parse(&query)
    }
}
