use medi_diagnosis::{Evidence, PosteriorCalculator};

fn main() {
    let calc = PosteriorCalculator::standard();

    // Identifiers as a front end would submit them
    let evidence = Evidence::from_identifiers(["fever", "cough", "fatigue"]);
    let ranking = calc.predict_diseases(&evidence);
    for entry in ranking.iter() {
        println!("{:<10} {:.4}", entry.disease, entry.probability);
    }

    if let Some(top) = ranking.top() {
        let why = calc.explain_reasoning(&evidence, top.disease);
        println!("{}", why.reasoning);
        println!(
            "matching={:?} severity={} contagious={}",
            why.matching_symptoms, why.severity, why.contagious
        );
    }

    match ranking.to_percentages().to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to render report: {err}"),
    }
}
