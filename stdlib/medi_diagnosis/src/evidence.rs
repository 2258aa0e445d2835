//! Per-request symptom observations.
//!
//! Evidence follows a closed-world contract: a symptom that was never
//! recorded is scored exactly like a symptom recorded as absent. A patient
//! reporting only `fever` is therefore evaluated as having none of the other
//! symptoms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::symptom::Symptom;

/// Mapping from symptom to observed presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence {
    observations: BTreeMap<Symptom, bool>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Evidence::set`].
    pub fn with(mut self, symptom: Symptom, present: bool) -> Self {
        self.set(symptom, present);
        self
    }

    pub fn set(&mut self, symptom: Symptom, present: bool) {
        self.observations.insert(symptom, present);
    }

    /// Evidence with every listed symptom marked present.
    pub fn present<I>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = Symptom>,
    {
        symptoms
            .into_iter()
            .fold(Self::new(), |ev, symptom| ev.with(symptom, true))
    }

    /// Marks each recognised identifier present. Unrecognised identifiers
    /// are dropped.
    pub fn from_identifiers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut evidence = Self::new();
        for id in ids {
            match id.as_ref().parse::<Symptom>() {
                Ok(symptom) => evidence.set(symptom, true),
                Err(err) => log::debug!("dropping symptom identifier: {err}"),
            }
        }
        evidence
    }

    /// Recorded value for the symptom, `None` if it was never recorded.
    pub fn get(&self, symptom: Symptom) -> Option<bool> {
        self.observations.get(&symptom).copied()
    }

    /// Whether the symptom counts as present. Unrecorded means absent.
    pub fn is_present(&self, symptom: Symptom) -> bool {
        self.get(symptom).unwrap_or(false)
    }

    /// Symptoms marked present, in declaration order.
    pub fn present_symptoms(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.observations
            .iter()
            .filter(|&(_, &present)| present)
            .map(|(&symptom, _)| symptom)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<(Symptom, bool)> for Evidence {
    fn from_iter<T: IntoIterator<Item = (Symptom, bool)>>(iter: T) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecorded_symptom_is_absent() {
        let ev = Evidence::new().with(Symptom::Fever, true);
        assert!(ev.is_present(Symptom::Fever));
        assert!(!ev.is_present(Symptom::Cough));
        assert_eq!(ev.get(Symptom::Cough), None);
    }

    #[test]
    fn present_symptoms_skip_explicit_negatives() {
        let ev = Evidence::new()
            .with(Symptom::Nausea, true)
            .with(Symptom::Cough, false)
            .with(Symptom::Fever, true);
        let present: Vec<_> = ev.present_symptoms().collect();
        assert_eq!(present, vec![Symptom::Fever, Symptom::Nausea]);
    }

    #[test]
    fn deserializes_from_json_object() {
        let ev: Evidence = serde_json::from_str(r#"{"headache": true, "nausea": false}"#).unwrap();
        assert_eq!(ev.get(Symptom::Headache), Some(true));
        assert_eq!(ev.get(Symptom::Nausea), Some(false));
        assert_eq!(ev.len(), 2);
    }
}
