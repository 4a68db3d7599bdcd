use super::{TableError, read_optional};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// The symbols of one enum, in the order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDef {
    entries: Vec<(String, u32)>,
}

impl EnumDef {
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn value_of(&self, symbol: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == symbol)
            .map(|&(_, value)| value)
    }

    pub fn position_of(&self, value: u32) -> Option<usize> {
        self.entries.iter().position(|&(_, v)| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `symbol`, or updates it in place if it is already defined.
    fn insert(&mut self, symbol: &str, value: u32) {
        match self.entries.iter_mut().find(|(name, _)| name == symbol) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((symbol.to_string(), value)),
        }
    }
}

/// Enum definitions keyed by enum name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enums(HashMap<String, EnumDef>);

impl Enums {
    /// Parses `[name]` section headers followed by `symbol=value` lines.
    /// Values are decimal, or hexadecimal with a `0x` prefix. Lines before the
    /// first section and lines with unparsable values are skipped.
    pub fn parse(text: &str) -> Self {
        let mut enums = HashMap::new();
        let mut current: Option<String> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim().to_string();
                enums.insert(name.clone(), EnumDef::default());
                current = Some(name);
                continue;
            }

            let (Some(section), Some((symbol, value))) = (&current, line.split_once('=')) else {
                continue;
            };
            match parse_value(value.trim()) {
                Some(value) => {
                    if let Some(def) = enums.get_mut(section) {
                        def.insert(symbol.trim(), value);
                    }
                }
                None => debug!(section = %section, line, "Skipping enum value"),
            }
        }

        Self(enums)
    }

    pub fn get(&self, name: &str) -> Option<&EnumDef> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses an enum value: hexadecimal with a `0x`/`0X` prefix, else decimal.
pub fn parse_value(s: &str) -> Option<u32> {
    match s.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => u32::from_str_radix(&s[2..], 16).ok(),
        _ => s.parse().ok(),
    }
}

pub fn load_enums(path: impl AsRef<Path>) -> Result<Enums, TableError> {
    let path = path.as_ref();
    let enums = read_optional(path)?
        .map(|text| Enums::parse(&text))
        .unwrap_or_default();
    debug!(path = %path.display(), count = enums.len(), "Loaded enums");
    Ok(enums)
}
