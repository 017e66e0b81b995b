//! Conditional probability tables.
//!
//! All three tables are `const` data indexed by enum discriminant. A key
//! that could not be resolved (`None`) is answered with the documented
//! fallback instead of an error.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{AgeBucket, DietQuality, EnvironmentLevel, InfectionCategory, RiskLevel};

/// A distribution over [`RiskLevel`], indexed by `RiskLevel as usize`.
pub type RiskRow = [f64; 3];

/// Answer for an unresolved diet or age key. Sums to 0.99.
pub const UNIFORM_RISK: RiskRow = [0.33, 0.33, 0.33];

/// Answer for an unresolved environment, whatever the infection category.
pub const UNKNOWN_ENVIRONMENT_PROBABILITY: f64 = 0.25;

/// P(infection | environment). Columns follow [`InfectionCategory::ALL`]:
/// Tidak Ada, Jarang, Sering Diare, Sering Infeksi.
pub const INFECTION_GIVEN_ENVIRONMENT: [[f64; 4]; 3] = [
    // Baik
    [0.85, 0.10, 0.01, 0.04],
    // Cukup
    [0.40, 0.40, 0.05, 0.15],
    // Kurang
    [0.05, 0.15, 0.50, 0.30],
];

/// P(risk | diet, infection), rows by [`DietQuality`], then infection.
pub const RISK_GIVEN_DIET_INFECTION: [[RiskRow; 4]; 3] = [
    // Baik
    [
        [0.98, 0.02, 0.00],
        [0.70, 0.25, 0.05],
        [0.20, 0.50, 0.30],
        [0.40, 0.40, 0.20],
    ],
    // Cukup
    [
        [0.60, 0.35, 0.05],
        [0.30, 0.50, 0.20],
        [0.05, 0.25, 0.70],
        [0.10, 0.40, 0.50],
    ],
    // Kurang
    [
        [0.20, 0.60, 0.20],
        [0.10, 0.40, 0.50],
        [0.00, 0.05, 0.95],
        [0.05, 0.10, 0.85],
    ],
];

/// P(risk | age bucket). The 30-33 row sums to 1.10 as authored.
pub const RISK_GIVEN_AGE: [RiskRow; 5] = [
    [0.20, 0.30, 0.50],
    [0.25, 0.35, 0.40],
    [0.40, 0.40, 0.20],
    [0.50, 0.40, 0.20],
    [0.60, 0.35, 0.05],
];

/// Probability of `infection` given the sanitation level.
pub fn lookup_infection_given_environment(
    env: Option<EnvironmentLevel>,
    infection: InfectionCategory,
) -> f64 {
    match env {
        Some(env) => INFECTION_GIVEN_ENVIRONMENT[env.index()][infection.index()],
        None => UNKNOWN_ENVIRONMENT_PROBABILITY,
    }
}

/// Row of P(risk | diet, infection); an unresolved diet yields [`UNIFORM_RISK`].
pub fn risk_row_given_diet_infection(
    diet: Option<DietQuality>,
    infection: InfectionCategory,
) -> RiskRow {
    match diet {
        Some(diet) => RISK_GIVEN_DIET_INFECTION[diet.index()][infection.index()],
        None => UNIFORM_RISK,
    }
}

pub fn lookup_risk_given_diet_infection(
    diet: Option<DietQuality>,
    infection: InfectionCategory,
    risk: RiskLevel,
) -> f64 {
    risk_row_given_diet_infection(diet, infection)[risk.index()]
}

/// Row of P(risk | age); an unresolved bucket yields [`UNIFORM_RISK`].
pub fn risk_row_given_age(bucket: Option<AgeBucket>) -> RiskRow {
    match bucket {
        Some(bucket) => RISK_GIVEN_AGE[bucket.index()],
        None => UNIFORM_RISK,
    }
}

pub fn lookup_risk_given_age(bucket: Option<AgeBucket>, risk: RiskLevel) -> f64 {
    risk_row_given_age(bucket)[risk.index()]
}

/// Labelled copy of the tables for auditing and export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableSnapshot {
    pub infection_given_environment: Vec<EnvironmentRow>,
    pub risk_given_diet_infection: Vec<DietInfectionRow>,
    pub risk_given_age: Vec<AgeRow>,
    pub uniform_fallback: RiskRow,
    pub unknown_environment_fallback: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EnvironmentRow {
    pub environment: EnvironmentLevel,
    pub infection: InfectionCategory,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DietInfectionRow {
    pub diet: DietQuality,
    pub infection: InfectionCategory,
    pub risk: RiskRow,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AgeRow {
    pub bucket: AgeBucket,
    pub risk: RiskRow,
}

impl TableSnapshot {
    pub fn capture() -> Self {
        let infection_given_environment = EnvironmentLevel::ALL
            .iter()
            .flat_map(|&environment| {
                InfectionCategory::ALL.iter().map(move |&infection| EnvironmentRow {
                    environment,
                    infection,
                    probability: lookup_infection_given_environment(Some(environment), infection),
                })
            })
            .collect();

        let risk_given_diet_infection = DietQuality::ALL
            .iter()
            .flat_map(|&diet| {
                InfectionCategory::ALL.iter().map(move |&infection| DietInfectionRow {
                    diet,
                    infection,
                    risk: risk_row_given_diet_infection(Some(diet), infection),
                })
            })
            .collect();

        let risk_given_age = AgeBucket::ALL
            .iter()
            .map(|&bucket| AgeRow {
                bucket,
                risk: risk_row_given_age(Some(bucket)),
            })
            .collect();

        Self {
            infection_given_environment,
            risk_given_diet_infection,
            risk_given_age,
            uniform_fallback: UNIFORM_RISK,
            unknown_environment_fallback: UNKNOWN_ENVIRONMENT_PROBABILITY,
        }
    }
}
