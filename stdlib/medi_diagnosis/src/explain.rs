use serde::{Deserialize, Serialize};

use crate::symptom::Symptom;

/// Likelihood factor one symptom contributes for the explained disease.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymptomContribution {
    pub symptom: Symptom,
    pub present: bool,
    /// P(symptom present | disease)
    pub conditional: f64,
    /// `conditional` when present, `1 - conditional` otherwise.
    pub factor: f64,
}

/// Human-readable account of why a disease was ranked first.
///
/// Built by [`PosteriorCalculator::explain_reasoning`](crate::PosteriorCalculator::explain_reasoning).
/// The contributions multiply to the disease likelihood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Display name, empty when the disease has no metadata.
    pub disease: String,
    pub probability: f64,
    pub reasoning: String,
    pub matching_symptoms: Vec<Symptom>,
    pub severity: String,
    pub contagious: bool,
    pub contributions: Vec<SymptomContribution>,
}

impl Explanation {
    /// Product of all contribution factors.
    pub fn likelihood(&self) -> f64 {
        self.contributions
            .iter()
            .fold(1.0, |acc, contribution| acc * contribution.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Disease, Evidence, PosteriorCalculator};
    use approx::assert_abs_diff_eq;

    #[test]
    fn contributions_multiply_to_likelihood() {
        let calc = PosteriorCalculator::standard();
        let ev = Evidence::present([Symptom::Fever, Symptom::Cough, Symptom::ShortnessOfBreath]);
        let explanation = calc.explain_reasoning(&ev, Disease::Pneumonia);

        assert_eq!(explanation.contributions.len(), Symptom::COUNT);
        assert_abs_diff_eq!(
            explanation.likelihood(),
            calc.compute_likelihood(Disease::Pneumonia, &ev),
            epsilon = 1e-15
        );
    }

    #[test]
    fn absent_symptom_contributes_complement() {
        let calc = PosteriorCalculator::standard();
        let explanation = calc.explain_reasoning(&Evidence::new(), Disease::Cold);
        let sore_throat = explanation
            .contributions
            .iter()
            .find(|c| c.symptom == Symptom::SoreThroat)
            .unwrap();
        assert!(!sore_throat.present);
        assert_abs_diff_eq!(sore_throat.conditional, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(sore_throat.factor, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn reasoning_names_the_disease() {
        let explanation = PosteriorCalculator::standard()
            .explain_reasoning(&Evidence::present([Symptom::Fever]), Disease::Covid19);
        assert_eq!(
            explanation.reasoning,
            "Based on the symptoms provided, COVID-19 has the highest probability."
        );
        assert_eq!(explanation.severity, "Mild to Severe");
        assert!(explanation.contagious);
        assert_eq!(explanation.matching_symptoms, vec![Symptom::Fever]);
    }
}
