use std::fmt;

use serde::{Deserialize, Serialize};
use stunting_model::{RiskDistribution, RiskLevel};

/// How clearly the winning level stands out from the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryStrong,
    FairlyStrong,
    Weak,
}

impl Strength {
    /// Classify a gap in percentage points.
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 20.0 {
            Strength::VeryStrong
        } else if gap >= 10.0 {
            Strength::FairlyStrong
        } else {
            Strength::Weak
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Strength::VeryStrong => "sangat kuat",
            Strength::FairlyStrong => "cukup kuat",
            Strength::Weak => "relatif lemah dan perlu perhatian",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub risk: RiskLevel,
    /// Percentage of the winning level.
    pub confidence: f64,
    /// Winning percentage minus the runner-up's, in percentage points.
    pub gap: f64,
    pub strength: Strength,
}

impl Interpretation {
    pub fn sentence(&self) -> String {
        format!(
            "Berdasarkan hasil inferensi menggunakan metode Bayesian Network, \
             balita berada pada kategori risiko stunting {} \
             dengan tingkat keyakinan sebesar {:.2}%. \
             Hasil ini dinilai {} dibandingkan kategori risiko lainnya \
             berdasarkan selisih nilai probabilitas.",
            self.risk, self.confidence, self.strength
        )
    }
}

/// Interpret a distribution. `None` when it carries no signal.
pub fn interpret(distribution: &RiskDistribution) -> Option<Interpretation> {
    let risk = distribution.most_likely()?;
    let (_, second) = distribution.runner_up()?;
    let confidence = distribution.get(risk);
    let gap = confidence - second;
    Some(Interpretation {
        risk,
        confidence,
        gap,
        strength: Strength::from_gap(gap),
    })
}
