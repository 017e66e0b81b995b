use pretty_assertions::assert_eq;
use stunting_model::{infer, infer_raw, AgeBucket, RiskLevel};
use tests::{all_cases, init_test_logger, sample_ages};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn every_in_table_combination_is_normalized() {
    init_test_logger();
    for (age, diet, infection, env) in all_cases() {
        let result = infer(age, Some(diet), infection, Some(env));
        let dist = result.distribution;
        assert!(
            !dist.is_degenerate(),
            "zero total for {age} {diet} {infection} {env}"
        );
        for (risk, value) in dist.iter() {
            assert!(value >= 0.0, "{risk} negative for {age} {diet} {infection} {env}");
        }
        assert!((dist.total() - 100.0).abs() < 1e-6);
    }
}

#[test]
fn fallback_rows_never_produce_a_zero_total() {
    for age in sample_ages() {
        for diet in ["Baik", "Cukup", "Kurang", "Sangat Kurang", ""] {
            for infection in ["Tidak Ada", "Sering", "diare", "infeksi berat"] {
                for env in ["Baik", "Cukup", "Kurang", "Buruk"] {
                    let dist = infer_raw(age, diet, infection, env).distribution;
                    assert!(!dist.is_degenerate());
                    assert!((dist.total() - 100.0).abs() < 1e-6);
                }
            }
        }
    }
}

#[test]
fn poor_diet_frequent_diarrhea_is_high_risk() {
    let result = infer_raw(24, "Kurang", "Sering Diare", "Kurang");
    let dist = result.distribution;
    assert_eq!(result.age_bucket_label(), "22-25");
    assert_eq!(dist.most_likely(), Some(RiskLevel::Tinggi));
    // 0.95*0.5*0.40 and 0.05*0.5*0.35 over their sum
    let total = 0.95 * 0.5 * 0.40 + 0.05 * 0.5 * 0.35;
    assert_close(dist.rendah, 0.0);
    assert_close(dist.sedang, 0.05 * 0.5 * 0.35 / total * 100.0);
    assert_close(dist.tinggi, 0.95 * 0.5 * 0.40 / total * 100.0);
}

#[test]
fn good_diet_no_infection_is_low_risk() {
    let result = infer_raw(20, "Baik", "Tidak Ada", "Baik");
    let dist = result.distribution;
    assert_eq!(result.age_bucket_label(), "18-21");
    assert_eq!(dist.most_likely(), Some(RiskLevel::Rendah));
    assert_close(dist.tinggi, 0.0);
    let total = 0.98 * 0.85 * 0.20 + 0.02 * 0.85 * 0.30;
    assert_close(dist.rendah, 0.98 * 0.85 * 0.20 / total * 100.0);
}

#[test]
fn out_of_range_age_uses_thirty_to_thirty_three_row() {
    let at_fifty = infer_raw(50, "Baik", "Tidak Ada", "Baik");
    let at_thirty_one = infer_raw(31, "Baik", "Tidak Ada", "Baik");
    assert_eq!(at_fifty.age_bucket, AgeBucket::Months30To33);
    assert_eq!(at_fifty.age_bucket_label(), "30-33");
    assert_eq!(at_fifty.distribution, at_thirty_one.distribution);
}

#[test]
fn unknown_diet_uses_uniform_row() {
    let unknown = infer_raw(24, "Sangat Kurang", "Sering Diare", "Kurang");
    let dist = unknown.distribution;
    // uniform diet factor leaves only the 22-25 age row shape
    assert_close(dist.rendah, 25.0);
    assert_close(dist.sedang, 35.0);
    assert_close(dist.tinggi, 40.0);
    assert!((dist.total() - 100.0).abs() < 1e-6);

    let high = infer_raw(24, "Kurang", "Sering Diare", "Kurang").distribution;
    let low = infer_raw(20, "Baik", "Tidak Ada", "Baik").distribution;
    assert_ne!(dist, high);
    assert_ne!(dist, low);
}

#[test]
fn environment_factor_does_not_change_the_ranking() {
    for (age, diet, infection, _) in all_cases() {
        let baik = infer(age, Some(diet), infection, Some(stunting_model::EnvironmentLevel::Baik));
        let kurang = infer(age, Some(diet), infection, Some(stunting_model::EnvironmentLevel::Kurang));
        let unknown = infer(age, Some(diet), infection, None);
        assert_eq!(baik.distribution.most_likely(), kurang.distribution.most_likely());
        assert_eq!(baik.distribution.most_likely(), unknown.distribution.most_likely());
    }
}

#[test]
fn free_text_infection_is_canonicalized_before_lookup() {
    let free = infer_raw(28, "Cukup", "sering DIARE dan infeksi", "Cukup");
    let exact = infer_raw(28, "Cukup", "Sering Diare", "Cukup");
    assert_eq!(free, exact);

    let form_value = infer_raw(28, "Cukup", "Sering", "Cukup");
    let none = infer_raw(28, "Cukup", "Tidak Ada", "Cukup");
    assert_eq!(form_value, none);
}
