use approx::assert_abs_diff_eq;
use medi_diagnosis::{Disease, Evidence, PosteriorCalculator, Symptom};
use pretty_assertions::assert_eq;

#[test]
fn migraine_explanation_lists_headache_and_nausea() {
    let calc = PosteriorCalculator::standard();
    let evidence = Evidence::new()
        .with(Symptom::Headache, true)
        .with(Symptom::Nausea, true);

    let explanation = calc.explain_reasoning(&evidence, Disease::Migraine);

    assert_eq!(explanation.disease, "Migraine");
    assert_eq!(
        explanation.matching_symptoms,
        vec![Symptom::Headache, Symptom::Nausea]
    );
    assert_eq!(explanation.severity, "Moderate");
    assert!(!explanation.contagious);
    assert_eq!(
        explanation.reasoning,
        "Based on the symptoms provided, Migraine has the highest probability."
    );
}

#[test]
fn explanation_probability_matches_prediction() {
    let calc = PosteriorCalculator::standard();
    let evidence = Evidence::present([Symptom::Headache, Symptom::Nausea]);
    let ranking = calc.predict_diseases(&evidence);
    let explanation = calc.explain_reasoning(&evidence, Disease::Migraine);

    assert_eq!(
        explanation.probability.to_bits(),
        ranking.probability(Disease::Migraine).to_bits()
    );
    assert_abs_diff_eq!(explanation.probability, 0.8401222, epsilon = 1e-6);
}

#[test]
fn negative_and_atypical_symptoms_do_not_match() {
    let calc = PosteriorCalculator::standard();
    let evidence = Evidence::new()
        .with(Symptom::Headache, true)
        .with(Symptom::Nausea, false)
        .with(Symptom::Cough, true);

    let explanation = calc.explain_reasoning(&evidence, Disease::Migraine);
    assert_eq!(explanation.matching_symptoms, vec![Symptom::Headache]);
}

#[test]
fn healthy_has_no_typical_symptoms() {
    let calc = PosteriorCalculator::standard();
    let explanation = calc.explain_reasoning(&Evidence::present(Symptom::ALL), Disease::Healthy);
    assert!(explanation.matching_symptoms.is_empty());
    assert_eq!(explanation.disease, "Healthy");
    assert_eq!(explanation.severity, "None");
}

#[test]
fn explanation_serializes_with_symptom_ids() {
    let calc = PosteriorCalculator::standard();
    let explanation = calc.explain_reasoning(
        &Evidence::present([Symptom::ShortnessOfBreath, Symptom::ChestPain]),
        Disease::Pneumonia,
    );
    let value = serde_json::to_value(&explanation).unwrap();
    assert_eq!(value["disease"], "Pneumonia");
    assert_eq!(
        value["matching_symptoms"],
        serde_json::json!(["shortness_of_breath", "chest_pain"])
    );
    assert_eq!(value["contagious"], false);
}
