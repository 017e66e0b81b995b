use std::fmt;

use serde::{Deserialize, Serialize};
use stunting_model::{Inference, InfectionCategory, RiskDistribution, RiskLevel};

use crate::advice::advice_for;
use crate::interpret::{interpret, Strength};

/// What to include when building an [`Assessment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub advice: bool,
    pub interpretation: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            advice: true,
            interpretation: true,
        }
    }
}

/// A scored child, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub age_months: i32,
    pub age_bucket: String,
    pub infection: InfectionCategory,
    pub distribution: RiskDistribution,
    /// Absent when the inputs produced no signal.
    pub risk: Option<RiskLevel>,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advice: Vec<String>,
}

impl Assessment {
    pub fn from_inference(
        subject: Option<&str>,
        age_months: i32,
        inference: &Inference,
        options: ReportOptions,
    ) -> Self {
        let distribution = inference.distribution;
        let reading = interpret(&distribution);
        if reading.is_none() {
            log::warn!("risk distribution is all zero; report carries no risk level");
        }

        let risk = reading.as_ref().map(|r| r.risk);
        let advice = match (options.advice, risk) {
            (true, Some(risk)) => advice_for(risk).iter().map(|s| s.to_string()).collect(),
            _ => Vec::new(),
        };

        Self {
            subject: subject.map(str::to_string),
            age_months,
            age_bucket: inference.age_bucket_label().to_string(),
            infection: inference.infection,
            distribution,
            risk,
            confidence: reading.as_ref().map_or(0.0, |r| r.confidence),
            strength: reading.as_ref().map(|r| r.strength),
            interpretation: reading
                .as_ref()
                .filter(|_| options.interpretation)
                .map(|r| r.sentence()),
            advice,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text report. Percentages use the formatter precision, two
/// decimals when none is given.
impl fmt::Display for Assessment {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = out.precision().unwrap_or(2);
        writeln!(out, "LAPORAN HASIL ANALISIS CARESTUNT")?;
        if let Some(subject) = &self.subject {
            writeln!(out, "Nama Balita : {subject}")?;
        }
        writeln!(
            out,
            "Umur        : {} Bulan (kelompok {})",
            self.age_months, self.age_bucket
        )?;
        writeln!(out, "Riwayat     : {}", self.infection)?;
        writeln!(out)?;

        match self.risk {
            Some(risk) => writeln!(out, "Risiko      : {}", risk.label().to_uppercase())?,
            None => writeln!(out, "Risiko      : tidak dapat ditentukan")?,
        }
        writeln!(out, "Distribusi Probabilitas:")?;
        for (risk, value) in self.distribution.iter() {
            writeln!(out, "- {risk}: {value:.precision$}%")?;
        }

        if let Some(text) = &self.interpretation {
            writeln!(out)?;
            writeln!(out, "{text}")?;
        }

        if !self.advice.is_empty() {
            writeln!(out)?;
            writeln!(out, "REKOMENDASI TINDAKAN")?;
            for (i, line) in self.advice.iter().enumerate() {
                writeln!(out, "{}. {line}", i + 1)?;
            }
        }
        Ok(())
    }
}
