use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary symptom observed (or not) on a patient.
///
/// Declaration order is significant: likelihoods are accumulated and
/// matching symptoms are reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Cough,
    Headache,
    Fatigue,
    SoreThroat,
    ShortnessOfBreath,
    ChestPain,
    Nausea,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symptom identifier: {0}")]
pub struct ParseSymptomError(pub String);

impl Symptom {
    pub const COUNT: usize = 8;

    pub const ALL: [Symptom; Symptom::COUNT] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Headache,
        Symptom::Fatigue,
        Symptom::SoreThroat,
        Symptom::ShortnessOfBreath,
        Symptom::ChestPain,
        Symptom::Nausea,
    ];

    /// Position of the symptom in [`Symptom::ALL`], used to index tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire identifier, e.g. `sore_throat`.
    pub fn id(self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Cough => "cough",
            Symptom::Headache => "headache",
            Symptom::Fatigue => "fatigue",
            Symptom::SoreThroat => "sore_throat",
            Symptom::ShortnessOfBreath => "shortness_of_breath",
            Symptom::ChestPain => "chest_pain",
            Symptom::Nausea => "nausea",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Headache => "Headache",
            Symptom::Fatigue => "Fatigue",
            Symptom::SoreThroat => "Sore Throat",
            Symptom::ShortnessOfBreath => "Shortness of Breath",
            Symptom::ChestPain => "Chest Pain",
            Symptom::Nausea => "Nausea",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Symptom {
    type Err = ParseSymptomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symptom::ALL
            .into_iter()
            .find(|symptom| symptom.id() == s)
            .ok_or_else(|| ParseSymptomError(s.to_string()))
    }
}
