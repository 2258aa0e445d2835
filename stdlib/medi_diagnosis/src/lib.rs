//! Symptom-based disease inference for the Medi standard library.
//!
//! A flat naive-Bayes model over a closed set of diseases and binary
//! symptoms. [`PosteriorCalculator`] ranks diseases by posterior
//! probability and explains the top candidate.
//!
//! ```
//! use medi_diagnosis::{Disease, Evidence, PosteriorCalculator, Symptom};
//!
//! let calc = PosteriorCalculator::standard();
//! let evidence = Evidence::present([Symptom::Headache, Symptom::Nausea]);
//! let ranking = calc.predict_diseases(&evidence);
//! assert_eq!(ranking.top().unwrap().disease, Disease::Migraine);
//! assert!((ranking.total() - 1.0).abs() < 1e-9);
//!
//! let why = calc.explain_reasoning(&evidence, Disease::Migraine);
//! assert_eq!(why.matching_symptoms, vec![Symptom::Headache, Symptom::Nausea]);
//! ```
//!
//! Evidence is closed-world: symptoms the caller did not report are scored
//! as absent, not as unknown.

pub mod disease;
pub mod evidence;
pub mod explain;
pub mod posterior;
pub mod report;
pub mod symptom;
pub mod tables;

pub use disease::{Disease, DiseaseInfo};
pub use evidence::Evidence;
pub use explain::{Explanation, SymptomContribution};
pub use posterior::{DiseaseRanking, PosteriorCalculator, RankedDisease};
pub use report::{format_percentage, PercentageReport};
pub use symptom::Symptom;
pub use tables::{ProbabilityTables, TableError, TableSpec};
