use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cpt::{
    lookup_infection_given_environment, risk_row_given_age, risk_row_given_diet_infection,
};
use crate::types::{AgeBucket, DietQuality, EnvironmentLevel, InfectionCategory, RiskLevel};

/// Map free-form infection history text to a category.
///
/// Whitespace is trimmed and collapsed and the text is title-cased before
/// matching. Text that is not an exact label is classified by substring,
/// checking "Diare", then "Infeksi", then "Jarang"; anything else is
/// treated as no infection.
pub fn canonicalize_infection(raw: &str) -> InfectionCategory {
    let normalized = title_case(&raw.split_whitespace().collect::<Vec<_>>().join(" "));

    if let Some(exact) = InfectionCategory::ALL
        .into_iter()
        .find(|c| c.label() == normalized)
    {
        return exact;
    }

    let guessed = if normalized.contains("Diare") {
        InfectionCategory::SeringDiare
    } else if normalized.contains("Infeksi") {
        InfectionCategory::SeringInfeksi
    } else if normalized.contains("Jarang") {
        InfectionCategory::Jarang
    } else {
        InfectionCategory::TidakAda
    };
    log::debug!("infection history {raw:?} canonicalized to {guessed} by substring fallback");
    guessed
}

/// Lower-case a character that follows a cased character, upper-case it
/// otherwise. Characters without case (digits, punctuation, CJK) start a
/// new word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_cased = false;
    for c in s.chars() {
        if prev_is_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_cased = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Bucket an age in months. Ages outside 18..=36 use the 30-33 bucket.
pub fn age_to_bucket(months: i32) -> AgeBucket {
    match months {
        18..=21 => AgeBucket::Months18To21,
        22..=25 => AgeBucket::Months22To25,
        26..=29 => AgeBucket::Months26To29,
        30..=33 => AgeBucket::Months30To33,
        34..=36 => AgeBucket::Months34To36,
        _ => {
            log::debug!("age {months} months is outside 18..=36, using {}", AgeBucket::FALLBACK);
            AgeBucket::FALLBACK
        }
    }
}

/// Unnormalized per-level scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreVector([f64; 3]);

impl ScoreVector {
    pub fn new(rendah: f64, sedang: f64, tinggi: f64) -> Self {
        Self([rendah, sedang, tinggi])
    }

    pub fn get(&self, risk: RiskLevel) -> f64 {
        self.0[risk.index()]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Rescale to percentages. An all-zero vector stays all zero.
    pub fn normalize(&self) -> RiskDistribution {
        let total = self.total();
        if total == 0.0 {
            log::debug!("all risk scores are zero, returning an empty distribution");
            return RiskDistribution::default();
        }
        let pct = |risk: RiskLevel| (self.get(risk) / total) * 100.0;
        RiskDistribution {
            rendah: pct(RiskLevel::Rendah),
            sedang: pct(RiskLevel::Sedang),
            tinggi: pct(RiskLevel::Tinggi),
        }
    }
}

/// Percentages per risk level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskDistribution {
    #[cfg_attr(feature = "serde", serde(rename = "Rendah"))]
    pub rendah: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Sedang"))]
    pub sedang: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Tinggi"))]
    pub tinggi: f64,
}

impl RiskDistribution {
    pub fn get(&self, risk: RiskLevel) -> f64 {
        match risk {
            RiskLevel::Rendah => self.rendah,
            RiskLevel::Sedang => self.sedang,
            RiskLevel::Tinggi => self.tinggi,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RiskLevel, f64)> + '_ {
        RiskLevel::ALL.into_iter().map(move |r| (r, self.get(r)))
    }

    pub fn total(&self) -> f64 {
        self.rendah + self.sedang + self.tinggi
    }

    /// True when every level is zero, i.e. the inputs carried no signal.
    pub fn is_degenerate(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }

    /// Level with the largest percentage, earliest level winning ties.
    /// `None` for a degenerate distribution.
    pub fn most_likely(&self) -> Option<RiskLevel> {
        if self.is_degenerate() {
            return None;
        }
        let mut best = RiskLevel::Rendah;
        for (risk, value) in self.iter() {
            if value > self.get(best) {
                best = risk;
            }
        }
        Some(best)
    }

    /// Second-ranked level and its percentage.
    pub fn runner_up(&self) -> Option<(RiskLevel, f64)> {
        let top = self.most_likely()?;
        let mut rest: Vec<_> = self.iter().filter(|(r, _)| *r != top).collect();
        // stable sort keeps level order among equal values
        rest.sort_by(|a, b| b.1.total_cmp(&a.1));
        rest.first().copied()
    }
}

impl fmt::Display for RiskDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let mut first = true;
        for (risk, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{risk}: {value:.precision$}%")?;
        }
        Ok(())
    }
}

/// Result of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inference {
    pub distribution: RiskDistribution,
    pub infection: InfectionCategory,
    pub age_bucket: AgeBucket,
}

impl Inference {
    pub fn age_bucket_label(&self) -> &'static str {
        self.age_bucket.label()
    }
}

/// Per-level product of the three table factors, before normalization.
///
/// The environment factor does not depend on the risk level; it is still
/// applied to every level so the raw scores match the authored model.
pub fn score(
    bucket: AgeBucket,
    diet: Option<DietQuality>,
    infection: InfectionCategory,
    environment: Option<EnvironmentLevel>,
) -> ScoreVector {
    let main = risk_row_given_diet_infection(diet, infection);
    let p_infection = lookup_infection_given_environment(environment, infection);
    let by_age = risk_row_given_age(Some(bucket));

    let mut scores = [0.0; 3];
    for risk in RiskLevel::ALL {
        let i = risk.index();
        scores[i] = main[i] * p_infection * by_age[i];
        log::trace!(
            "{risk}: diet/infection {} x infection/environment {p_infection} x age {} = {}",
            main[i],
            by_age[i],
            scores[i]
        );
    }
    ScoreVector(scores)
}

/// Score a child and normalize to percentages.
///
/// `None` for diet or environment means the caller's value did not name a
/// known level; the corresponding table falls back to its default.
pub fn infer(
    age_months: i32,
    diet: Option<DietQuality>,
    infection_raw: &str,
    environment: Option<EnvironmentLevel>,
) -> Inference {
    let infection = canonicalize_infection(infection_raw);
    let age_bucket = age_to_bucket(age_months);
    if diet.is_none() {
        log::debug!("diet quality unresolved, using uniform diet/infection row");
    }
    if environment.is_none() {
        log::debug!("environment unresolved, using flat infection probability");
    }

    let distribution = score(age_bucket, diet, infection, environment).normalize();
    Inference {
        distribution,
        infection,
        age_bucket,
    }
}

/// String boundary for [`infer`]. Diet and environment must match a label
/// exactly to be resolved; anything else takes the fallback path.
pub fn infer_raw(age_months: i32, diet: &str, infection_raw: &str, environment: &str) -> Inference {
    infer(
        age_months,
        diet.parse().ok(),
        infection_raw,
        environment.parse().ok(),
    )
}
