use pretty_assertions::assert_eq;
use stunting_model::{Model, RiskLevel, StuntingScorer};
use stunting_report::{advice_for, Assessment, ReportOptions, Strength};
use tests::init_test_logger;

#[test]
fn child_assessment_workflow() {
    init_test_logger();

    // 1. Form values as a caller would receive them
    let (name, age, diet, infection, env) = ("Budi", 24, "Kurang", "Sering Diare", "Kurang");

    // 2. Score
    let model = StuntingScorer::new();
    assert_eq!(model.name(), "bayesian-network-stunting");
    let inference = model.predict_raw(age, diet, infection, env);

    // 3. Build the report
    let report = Assessment::from_inference(Some(name), age, &inference, ReportOptions::default());
    assert_eq!(report.risk, Some(RiskLevel::Tinggi));
    assert_eq!(report.strength, Some(Strength::VeryStrong));
    assert_eq!(report.advice.len(), advice_for(RiskLevel::Tinggi).len());
    assert!((report.confidence - inference.distribution.tinggi).abs() < 1e-12);

    // 4. Export and read back
    let json = report.to_json().unwrap();
    let back: Assessment = serde_json::from_str(&json).unwrap();
    assert_eq!(back.subject.as_deref(), Some("Budi"));
    assert_eq!(back.age_bucket, "22-25");
    assert_eq!(back.risk, report.risk);
    assert_eq!(back.advice, report.advice);
    assert_eq!(back.interpretation, report.interpretation);
    assert!((back.distribution.tinggi - report.distribution.tinggi).abs() < 1e-9);
}

#[test]
fn close_call_is_flagged_as_weak() {
    // uniform diet row at 26-29 gives Rendah and Sedang a 40/40 tie
    let inference = StuntingScorer::new().predict_raw(27, "?", "Jarang", "Cukup");
    let report = Assessment::from_inference(None, 27, &inference, ReportOptions::default());
    assert_eq!(report.risk, Some(RiskLevel::Rendah));
    assert_eq!(report.strength, Some(Strength::Weak));
    let text = report.interpretation.unwrap();
    assert!(text.contains("relatif lemah dan perlu perhatian"));
}

#[test]
fn medium_risk_gets_medium_advice() {
    let inference = StuntingScorer::new().predict_raw(34, "Kurang", "Tidak Ada", "Cukup");
    let report = Assessment::from_inference(None, 34, &inference, ReportOptions::default());
    assert_eq!(report.risk, Some(RiskLevel::Sedang));
    assert_eq!(report.advice[0], advice_for(RiskLevel::Sedang)[0]);
}
