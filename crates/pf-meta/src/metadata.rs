//! Ordered metadata entries.

/// Single `key: value` pair from a front matter block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// Metadata entries in the order they appear in the document.
///
/// Keys are not unique. Lookups by name return the last matching entry, so a
/// repeated key overrides its earlier occurrences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.entries.push(MetadataEntry {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }

    /// Look up a value by key. The last occurrence wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Page title (`title` key).
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Page subtitle (`subtitle` key).
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.get("subtitle")
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = &'a MetadataEntry;
    type IntoIter = std::slice::Iter<'a, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let meta = Metadata::default();
        assert_eq!(meta.get("title"), None);
        assert_eq!(meta.subtitle(), None);
    }

    #[test]
    fn test_get_last_occurrence_wins() {
        let mut meta = Metadata::default();
        meta.push("subtitle", "one");
        meta.push("title", "T");
        meta.push("subtitle", "two");
        assert_eq!(meta.subtitle(), Some("two"));
        assert_eq!(meta.title(), Some("T"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut meta = Metadata::default();
        meta.push("b", "2");
        meta.push("a", "1");
        let keys: Vec<_> = (&meta).into_iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut meta = Metadata::default();
        meta.push("Title", "Upper");
        assert_eq!(meta.title(), None);
        assert_eq!(meta.get("Title"), Some("Upper"));
    }
}
