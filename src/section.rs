use std::collections::HashMap;
use std::collections::hash_map;

/// A titled set of `key=value` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    entries: HashMap<String, String>,
}

impl Section {
    /// Only the parser creates sections, and only for non-empty titles.
    #[must_use]
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: HashMap::with_capacity(32),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inserts `key`, replacing any earlier value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        _ = self.entries.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key` without any trailing carriage returns.
    ///
    /// `None` means the key was never set; a key set to `""` yields `Some("")`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_raw(key).map(|value| value.trim_end_matches('\r'))
    }

    /// Returns the value exactly as it was stored.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the raw entries in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Absorbs every entry of `other`; its values win on conflicting keys.
    pub(crate) fn extend(&mut self, other: Section) {
        self.entries.extend(other.entries);
    }

    pub(crate) fn replace_entries(&mut self, other: Section) {
        self.entries = other.entries;
    }
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
