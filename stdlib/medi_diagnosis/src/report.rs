//! Display form of a ranking: disease identifier to percentage string,
//! e.g. `{"healthy": "99.58%", ...}`, in ranking order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::disease::Disease;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PercentageReport {
    entries: Vec<(Disease, String)>,
}

/// Two decimal places, `%` suffix: `0.123456` -> `"12.35%"`.
pub fn format_percentage(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

impl PercentageReport {
    pub fn iter(&self) -> impl Iterator<Item = (Disease, &str)> {
        self.entries
            .iter()
            .map(|(disease, pct)| (*disease, pct.as_str()))
    }

    pub fn get(&self, disease: Disease) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == disease)
            .map(|(_, pct)| pct.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<(Disease, f64)> for PercentageReport {
    fn from_iter<T: IntoIterator<Item = (Disease, f64)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(disease, p)| (disease, format_percentage(p)))
                .collect(),
        }
    }
}

impl Serialize for PercentageReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (disease, pct) in &self.entries {
            map.serialize_entry(disease.id(), pct)?;
        }
        map.end()
    }
}
