use serde::{Deserialize, Serialize};

/// Ordered genre labels for one movie. Duplicates are kept as repeated
/// occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSequence(Vec<String>);

impl LabelSequence {
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    /// Splits a comma-separated list, trimming each label and dropping empty
    /// pieces. Duplicates survive.
    pub fn parse_csv(raw: &str) -> Self {
        let labels = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self(labels)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for LabelSequence {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Vec<&str>> for LabelSequence {
    fn from(value: Vec<&str>) -> Self {
        Self(value.into_iter().map(str::to_string).collect())
    }
}

impl FromIterator<String> for LabelSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[String]> for LabelSequence {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a LabelSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for LabelSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/labels.rs"]
mod tests;
