use super::{TableError, read_optional};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Display names for fields, keyed by the field's symbolic name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(HashMap<String, String>);

impl Labels {
    /// Parses `key=value` lines. The key ends at the first `=`; lines without
    /// one are skipped.
    pub fn parse(text: &str) -> Self {
        let labels = text
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self(labels)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn load_labels(path: impl AsRef<Path>) -> Result<Labels, TableError> {
    let path = path.as_ref();
    let labels = read_optional(path)?
        .map(|text| Labels::parse(&text))
        .unwrap_or_default();
    debug!(path = %path.display(), count = labels.len(), "Loaded labels");
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lines() {
        let labels = Labels::parse("carNameId=Car ID\n\nseatCount = Seats \n");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("carNameId"), Some("Car ID"));
        assert_eq!(labels.get("seatCount"), Some("Seats"));
    }

    #[test]
    fn value_keeps_further_separators() {
        let labels = Labels::parse("zero=a=b=c");
        assert_eq!(labels.get("zero"), Some("a=b=c"));
    }

    #[test]
    fn skips_lines_without_separator() {
        let labels = Labels::parse("just a comment\n   \nunkB=Unknown B\r\n");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("unkB"), Some("Unknown B"));
    }

    #[test]
    fn later_duplicates_win() {
        let labels = Labels::parse("enumC=First\nenumC=Second");
        assert_eq!(labels.get("enumC"), Some("Second"));
    }

    #[test]
    fn missing_file_gives_empty_table() {
        let labels = load_labels("/nonexistent/carindex/headers.txt").unwrap();
        assert!(labels.is_empty());
    }
}
