use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::symptom::Symptom;

/// Candidate diagnosis. Declaration order breaks probability ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Flu,
    Cold,
    Covid19,
    Pneumonia,
    Migraine,
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown disease identifier: {0}")]
pub struct ParseDiseaseError(pub String);

impl Disease {
    pub const COUNT: usize = 6;

    pub const ALL: [Disease; Disease::COUNT] = [
        Disease::Flu,
        Disease::Cold,
        Disease::Covid19,
        Disease::Pneumonia,
        Disease::Migraine,
        Disease::Healthy,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Disease::Flu => "flu",
            Disease::Cold => "cold",
            Disease::Covid19 => "covid19",
            Disease::Pneumonia => "pneumonia",
            Disease::Migraine => "migraine",
            Disease::Healthy => "healthy",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Disease {
    type Err = ParseDiseaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disease::ALL
            .into_iter()
            .find(|disease| disease.id() == s)
            .ok_or_else(|| ParseDiseaseError(s.to_string()))
    }
}

/// Descriptive record for a disease. Only used to explain a result; it
/// never feeds the probability computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub name: String,
    pub description: String,
    pub typical_symptoms: Vec<Symptom>,
    pub severity: String,
    pub contagious: bool,
}

impl DiseaseInfo {
    fn new(
        name: &str,
        description: &str,
        typical_symptoms: &[Symptom],
        severity: &str,
        contagious: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            typical_symptoms: typical_symptoms.to_vec(),
            severity: severity.to_string(),
            contagious,
        }
    }
}

/// Built-in metadata for every [`Disease`].
pub fn standard_metadata() -> BTreeMap<Disease, DiseaseInfo> {
    use Symptom::*;

    let mut table = BTreeMap::new();
    table.insert(
        Disease::Flu,
        DiseaseInfo::new(
            "Influenza",
            "A viral respiratory illness that can cause mild to severe illness.",
            &[Fever, Cough, Headache, Fatigue, SoreThroat],
            "Moderate",
            true,
        ),
    );
    table.insert(
        Disease::Cold,
        DiseaseInfo::new(
            "Common Cold",
            "A mild viral infection of the upper respiratory tract.",
            &[Cough, SoreThroat, Fatigue],
            "Mild",
            true,
        ),
    );
    table.insert(
        Disease::Covid19,
        DiseaseInfo::new(
            "COVID-19",
            "A respiratory illness caused by the SARS-CoV-2 virus.",
            &[Fever, Cough, ShortnessOfBreath, Fatigue],
            "Mild to Severe",
            true,
        ),
    );
    table.insert(
        Disease::Pneumonia,
        DiseaseInfo::new(
            "Pneumonia",
            "An infection that inflames air sacs in one or both lungs.",
            &[Fever, Cough, ShortnessOfBreath, ChestPain],
            "Moderate to Severe",
            false,
        ),
    );
    table.insert(
        Disease::Migraine,
        DiseaseInfo::new(
            "Migraine",
            "A type of headache disorder characterized by recurring headaches.",
            &[Headache, Nausea, Fatigue],
            "Moderate",
            false,
        ),
    );
    table.insert(
        Disease::Healthy,
        DiseaseInfo::new(
            "Healthy",
            "No significant illness detected based on symptoms.",
            &[],
            "None",
            false,
        ),
    );
    table
}
