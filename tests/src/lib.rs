//! Shared fixtures for the integration tests.

use std::sync::Once;

use stunting_model::{AgeBucket, DietQuality, EnvironmentLevel, InfectionCategory};

static INIT: Once = Once::new();

/// Route `log` output through the test harness.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// One representative age per bucket plus the out-of-range ages the form
/// allows.
pub fn sample_ages() -> Vec<i32> {
    let mut ages: Vec<i32> = AgeBucket::ALL.iter().map(|b| b.months().0).collect();
    ages.extend([0, 17, 37, 60]);
    ages
}

/// Every combination of in-table inputs, with infection given by its label.
pub fn all_cases() -> Vec<(i32, DietQuality, &'static str, EnvironmentLevel)> {
    let mut cases = Vec::new();
    for age in 18..=36 {
        for diet in DietQuality::ALL {
            for infection in InfectionCategory::ALL {
                for env in EnvironmentLevel::ALL {
                    cases.push((age, diet, infection.label(), env));
                }
            }
        }
    }
    cases
}
