//! Prior and conditional probability tables.
//!
//! Tables are authored as a [`TableSpec`] (keyed maps, JSON friendly) and
//! validated once into [`ProbabilityTables`], a pair of fixed-size arrays
//! indexed by [`Disease`] and [`Symptom`]. Validation guarantees:
//!
//! - every disease has a prior and the priors sum to 1 within
//!   [`PRIOR_SUM_TOLERANCE`];
//! - every (disease, symptom) pair has a conditional probability;
//! - every value lies in `[0, 1]`.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::disease::Disease;
use crate::symptom::Symptom;

pub const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("missing prior for disease '{0}'")]
    MissingPrior(Disease),
    #[error("missing P({symptom} | {disease})")]
    MissingConditional { disease: Disease, symptom: Symptom },
    #[error("{entry} = {value} is outside [0, 1]")]
    ProbabilityOutOfRange { entry: String, value: f64 },
    #[error("disease priors sum to {sum}, expected 1 within {tolerance}")]
    PriorSum { sum: f64, tolerance: f64 },
    #[error("failed to read probability tables: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse probability tables: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Unvalidated, serialisable form of the tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub priors: BTreeMap<Disease, f64>,
    pub conditionals: BTreeMap<Disease, BTreeMap<Symptom, f64>>,
}

/// Validated tables. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTables {
    priors: [f64; Disease::COUNT],
    conditionals: [[f64; Symptom::COUNT]; Disease::COUNT],
}

impl ProbabilityTables {
    /// The hand-authored reference tables.
    pub fn standard() -> Self {
        Self {
            priors: [0.05, 0.15, 0.03, 0.01, 0.08, 0.68],
            // fever, cough, headache, fatigue, sore_throat,
            // shortness_of_breath, chest_pain, nausea
            conditionals: [
                [0.9, 0.7, 0.6, 0.8, 0.5, 0.2, 0.1, 0.3],
                [0.3, 0.8, 0.4, 0.5, 0.7, 0.1, 0.05, 0.1],
                [0.85, 0.75, 0.65, 0.8, 0.4, 0.6, 0.3, 0.2],
                [0.85, 0.9, 0.3, 0.7, 0.2, 0.8, 0.6, 0.2],
                [0.1, 0.05, 0.95, 0.6, 0.05, 0.1, 0.1, 0.7],
                [0.02, 0.05, 0.1, 0.15, 0.03, 0.02, 0.01, 0.05],
            ],
        }
    }

    pub fn from_spec(spec: &TableSpec) -> Result<Self, TableError> {
        let mut priors = [0.0; Disease::COUNT];
        let mut conditionals = [[0.0; Symptom::COUNT]; Disease::COUNT];

        for disease in Disease::ALL {
            let prior = *spec
                .priors
                .get(&disease)
                .ok_or(TableError::MissingPrior(disease))?;
            check_range(format!("P({disease})"), prior)?;
            priors[disease.index()] = prior;

            let row = spec.conditionals.get(&disease);
            for symptom in Symptom::ALL {
                let p = row
                    .and_then(|r| r.get(&symptom))
                    .copied()
                    .ok_or(TableError::MissingConditional { disease, symptom })?;
                check_range(format!("P({symptom} | {disease})"), p)?;
                conditionals[disease.index()][symptom.index()] = p;
            }
        }

        let sum: f64 = priors.iter().sum();
        if (sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(TableError::PriorSum {
                sum,
                tolerance: PRIOR_SUM_TOLERANCE,
            });
        }

        log::debug!(
            "validated probability tables: {} diseases x {} symptoms",
            Disease::COUNT,
            Symptom::COUNT
        );
        Ok(Self {
            priors,
            conditionals,
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self, TableError> {
        let spec: TableSpec = serde_json::from_str(s)?;
        Self::from_spec(&spec)
    }

    /// Read and validate a JSON table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let s = read_to_string(path)?;
        let tables = Self::from_json_str(&s)?;
        log::info!("loaded probability tables from {}", path.display());
        Ok(tables)
    }

    pub fn prior(&self, disease: Disease) -> f64 {
        self.priors[disease.index()]
    }

    /// P(symptom present | disease).
    pub fn conditional(&self, disease: Disease, symptom: Symptom) -> f64 {
        self.conditionals[disease.index()][symptom.index()]
    }

    pub fn to_spec(&self) -> TableSpec {
        let mut spec = TableSpec::default();
        for disease in Disease::ALL {
            spec.priors.insert(disease, self.prior(disease));
            let row = Symptom::ALL
                .into_iter()
                .map(|symptom| (symptom, self.conditional(disease, symptom)))
                .collect();
            spec.conditionals.insert(disease, row);
        }
        spec
    }
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_range(entry: String, value: f64) -> Result<(), TableError> {
    // NaN fails `contains` as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TableError::ProbabilityOutOfRange { entry, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_pass_validation() {
        let tables = ProbabilityTables::standard();
        let rebuilt = ProbabilityTables::from_spec(&tables.to_spec()).unwrap();
        assert_eq!(rebuilt, tables);
    }

    #[test]
    fn lookups_follow_enum_indices() {
        let tables = ProbabilityTables::standard();
        assert_eq!(tables.prior(Disease::Healthy), 0.68);
        assert_eq!(tables.conditional(Disease::Migraine, Symptom::Headache), 0.95);
        assert_eq!(tables.conditional(Disease::Cold, Symptom::ChestPain), 0.05);
        assert_eq!(
            tables.conditional(Disease::Pneumonia, Symptom::ShortnessOfBreath),
            0.8
        );
    }

    #[test]
    fn rejects_missing_prior() {
        let mut spec = ProbabilityTables::standard().to_spec();
        spec.priors.remove(&Disease::Covid19);
        let err = ProbabilityTables::from_spec(&spec).unwrap_err();
        assert!(matches!(err, TableError::MissingPrior(Disease::Covid19)));
    }

    #[test]
    fn rejects_missing_conditional() {
        let mut spec = ProbabilityTables::standard().to_spec();
        spec.conditionals
            .get_mut(&Disease::Flu)
            .unwrap()
            .remove(&Symptom::Nausea);
        let err = ProbabilityTables::from_spec(&spec).unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingConditional {
                disease: Disease::Flu,
                symptom: Symptom::Nausea
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        let mut spec = ProbabilityTables::standard().to_spec();
        spec.conditionals
            .get_mut(&Disease::Cold)
            .unwrap()
            .insert(Symptom::Cough, 1.2);
        assert!(matches!(
            ProbabilityTables::from_spec(&spec),
            Err(TableError::ProbabilityOutOfRange { .. })
        ));

        let mut spec = ProbabilityTables::standard().to_spec();
        spec.conditionals
            .get_mut(&Disease::Cold)
            .unwrap()
            .insert(Symptom::Cough, f64::NAN);
        assert!(matches!(
            ProbabilityTables::from_spec(&spec),
            Err(TableError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_priors_not_summing_to_one() {
        let mut spec = ProbabilityTables::standard().to_spec();
        spec.priors.insert(Disease::Healthy, 0.5);
        let err = ProbabilityTables::from_spec(&spec).unwrap_err();
        match err {
            TableError::PriorSum { sum, .. } => assert!((sum - 0.82).abs() < 1e-9),
            other => panic!("unexpected error: {other}"),
        }
    }
}
