//! Stunting risk scorer for children aged 18 to 36 months.
//!
//! Three hand-authored conditional probability tables are combined per risk
//! level as P(risk | diet, infection) x P(infection | environment) x
//! P(risk | age) and the products are normalized to percentages. Unknown or
//! malformed inputs never fail; they are routed to documented fallback
//! rows instead.

pub mod cpt;
pub mod scorer;
pub mod types;

pub use cpt::{
    lookup_infection_given_environment, lookup_risk_given_age, lookup_risk_given_diet_infection,
    TableSnapshot,
};
pub use scorer::{
    age_to_bucket, canonicalize_infection, infer, infer_raw, title_case, Inference,
    RiskDistribution, ScoreVector,
};
pub use types::{
    AgeBucket, DietQuality, EnvironmentLevel, InfectionCategory, ParseLevelError, RiskLevel,
};

/// Minimal trait for prediction models
pub trait Model {
    fn name(&self) -> &str;
}

/// The fixed stunting network. Holds no state; the tables are constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct StuntingScorer;

impl Model for StuntingScorer {
    fn name(&self) -> &str {
        "bayesian-network-stunting"
    }
}

impl StuntingScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(
        &self,
        age_months: i32,
        diet: Option<DietQuality>,
        infection_raw: &str,
        environment: Option<EnvironmentLevel>,
    ) -> Inference {
        infer(age_months, diet, infection_raw, environment)
    }

    /// Like [`StuntingScorer::predict`], taking diet and environment as
    /// form labels.
    pub fn predict_raw(
        &self,
        age_months: i32,
        diet: &str,
        infection_raw: &str,
        environment: &str,
    ) -> Inference {
        infer_raw(age_months, diet, infection_raw, environment)
    }

    pub fn tables(&self) -> TableSnapshot {
        TableSnapshot::capture()
    }
}
