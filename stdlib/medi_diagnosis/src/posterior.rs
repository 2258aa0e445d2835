//! Naive-Bayes posterior over the closed disease set.
//!
//! For a disease `d` and evidence `e`:
//!
//! ```text
//! P(d | e) ∝ P(d) · Π_s [ P(s | d)      if s present in e
//!                         1 − P(s | d)  otherwise ]
//! ```
//!
//! The product runs over every known symptom. Symptoms missing from the
//! evidence take the "absent" factor (closed world).

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::disease::{standard_metadata, Disease, DiseaseInfo};
use crate::evidence::Evidence;
use crate::explain::{Explanation, SymptomContribution};
use crate::report::PercentageReport;
use crate::symptom::Symptom;
use crate::tables::ProbabilityTables;

lazy_static! {
    static ref STANDARD: PosteriorCalculator = PosteriorCalculator::new(
        ProbabilityTables::from_spec(&ProbabilityTables::standard().to_spec())
            .expect("built-in probability tables must validate"),
    );
}

/// One row of a [`DiseaseRanking`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RankedDisease {
    pub disease: Disease,
    pub probability: f64,
}

/// Diseases ordered by descending posterior probability. Ties keep
/// [`Disease::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseRanking {
    entries: Vec<RankedDisease>,
    normalized: bool,
}

impl DiseaseRanking {
    pub fn iter(&self) -> impl Iterator<Item = &RankedDisease> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedDisease] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest ranked disease.
    pub fn top(&self) -> Option<RankedDisease> {
        self.entries.first().copied()
    }

    pub fn probability(&self, disease: Disease) -> f64 {
        self.entries
            .iter()
            .find(|entry| entry.disease == disease)
            .map_or(0.0, |entry| entry.probability)
    }

    /// Diseases in ranking order.
    pub fn diseases(&self) -> Vec<Disease> {
        self.entries.iter().map(|entry| entry.disease).collect()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.probability).sum()
    }

    /// False only when every unnormalized posterior was zero and the raw
    /// values were returned as-is.
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn to_percentages(&self) -> PercentageReport {
        self.entries
            .iter()
            .map(|entry| (entry.disease, entry.probability))
            .collect()
    }
}

impl Serialize for DiseaseRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.disease.id(), &entry.probability)?;
        }
        map.end()
    }
}

/// Owns the probability tables and disease metadata. Immutable after
/// construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct PosteriorCalculator {
    tables: ProbabilityTables,
    metadata: BTreeMap<Disease, DiseaseInfo>,
}

impl Default for PosteriorCalculator {
    fn default() -> Self {
        Self::new(ProbabilityTables::standard())
    }
}

impl PosteriorCalculator {
    pub fn new(tables: ProbabilityTables) -> Self {
        Self {
            tables,
            metadata: standard_metadata(),
        }
    }

    /// Process-wide calculator over the built-in tables.
    pub fn standard() -> &'static PosteriorCalculator {
        &STANDARD
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<Disease, DiseaseInfo>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn tables(&self) -> &ProbabilityTables {
        &self.tables
    }

    /// P(evidence | disease) under the closed-world reading of `evidence`.
    pub fn compute_likelihood(&self, disease: Disease, evidence: &Evidence) -> f64 {
        Symptom::ALL
            .into_iter()
            .map(|symptom| self.symptom_factor(disease, symptom, evidence.is_present(symptom)))
            .fold(1.0, |acc, factor| acc * factor)
    }

    fn symptom_factor(&self, disease: Disease, symptom: Symptom, present: bool) -> f64 {
        let p = self.tables.conditional(disease, symptom);
        if present {
            p
        } else {
            1.0 - p
        }
    }

    pub fn predict_diseases(&self, evidence: &Evidence) -> DiseaseRanking {
        let mut entries: Vec<RankedDisease> = Disease::ALL
            .into_iter()
            .map(|disease| RankedDisease {
                disease,
                probability: self.compute_likelihood(disease, evidence)
                    * self.tables.prior(disease),
            })
            .collect();

        let total: f64 = entries.iter().map(|entry| entry.probability).sum();
        let normalized = total > 0.0;
        if normalized {
            for entry in &mut entries {
                entry.probability /= total;
            }
        } else {
            log::warn!("all unnormalized posteriors are zero, returning raw values");
        }

        // stable: equal probabilities keep declaration order
        entries.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        if let Some(top) = entries.first() {
            log::debug!(
                "predicted {} ({:.4}) from {} reported symptoms",
                top.disease,
                top.probability,
                evidence.present_symptoms().count()
            );
        }

        DiseaseRanking {
            entries,
            normalized,
        }
    }

    /// Metadata for `disease`, or an empty record when the table has none.
    pub fn disease_info(&self, disease: Disease) -> DiseaseInfo {
        self.metadata.get(&disease).cloned().unwrap_or_default()
    }

    /// Like [`disease_info`](Self::disease_info) for a wire identifier.
    pub fn disease_info_by_id(&self, id: &str) -> DiseaseInfo {
        id.parse::<Disease>()
            .map(|disease| self.disease_info(disease))
            .unwrap_or_default()
    }

    pub fn explain_reasoning(&self, evidence: &Evidence, top_disease: Disease) -> Explanation {
        let info = self.disease_info(top_disease);
        let probability = self.predict_diseases(evidence).probability(top_disease);

        let matching_symptoms = evidence
            .present_symptoms()
            .filter(|symptom| info.typical_symptoms.contains(symptom))
            .collect();

        let contributions = Symptom::ALL
            .into_iter()
            .map(|symptom| {
                let present = evidence.is_present(symptom);
                SymptomContribution {
                    symptom,
                    present,
                    conditional: self.tables.conditional(top_disease, symptom),
                    factor: self.symptom_factor(top_disease, symptom, present),
                }
            })
            .collect();

        Explanation {
            reasoning: format!(
                "Based on the symptoms provided, {} has the highest probability.",
                info.name
            ),
            disease: info.name,
            probability,
            matching_symptoms,
            severity: info.severity,
            contagious: info.contagious,
            contributions,
        }
    }
}
