//! Closed vocabularies the scorer is keyed on.
//!
//! Diet, environment and risk labels are matched exactly ("Baik", not
//! "baik"). Infection history is free text and goes through
//! [`crate::canonicalize_infection`] instead of [`FromStr`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returned when a label does not name a known level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct ParseLevelError {
    pub kind: &'static str,
    pub label: String,
}

impl ParseLevelError {
    fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

/// Sanitation quality of the child's surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnvironmentLevel {
    Baik,
    Cukup,
    Kurang,
}

/// Quality of the child's daily diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DietQuality {
    Baik,
    Cukup,
    Kurang,
}

/// Canonical infection history categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InfectionCategory {
    #[cfg_attr(feature = "serde", serde(rename = "Tidak Ada"))]
    TidakAda,
    Jarang,
    #[cfg_attr(feature = "serde", serde(rename = "Sering Diare"))]
    SeringDiare,
    #[cfg_attr(feature = "serde", serde(rename = "Sering Infeksi"))]
    SeringInfeksi,
}

/// Four-month age bins covering 18 to 36 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AgeBucket {
    #[cfg_attr(feature = "serde", serde(rename = "18-21"))]
    Months18To21,
    #[cfg_attr(feature = "serde", serde(rename = "22-25"))]
    Months22To25,
    #[cfg_attr(feature = "serde", serde(rename = "26-29"))]
    Months26To29,
    #[cfg_attr(feature = "serde", serde(rename = "30-33"))]
    Months30To33,
    #[cfg_attr(feature = "serde", serde(rename = "34-36"))]
    Months34To36,
}

/// Stunting risk level, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiskLevel {
    Rendah,
    Sedang,
    Tinggi,
}

impl EnvironmentLevel {
    pub const ALL: [EnvironmentLevel; 3] = [Self::Baik, Self::Cukup, Self::Kurang];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Baik => "Baik",
            Self::Cukup => "Cukup",
            Self::Kurang => "Kurang",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl DietQuality {
    pub const ALL: [DietQuality; 3] = [Self::Baik, Self::Cukup, Self::Kurang];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Baik => "Baik",
            Self::Cukup => "Cukup",
            Self::Kurang => "Kurang",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl InfectionCategory {
    pub const ALL: [InfectionCategory; 4] = [
        Self::TidakAda,
        Self::Jarang,
        Self::SeringDiare,
        Self::SeringInfeksi,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::TidakAda => "Tidak Ada",
            Self::Jarang => "Jarang",
            Self::SeringDiare => "Sering Diare",
            Self::SeringInfeksi => "Sering Infeksi",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 5] = [
        Self::Months18To21,
        Self::Months22To25,
        Self::Months26To29,
        Self::Months30To33,
        Self::Months34To36,
    ];

    /// Bucket used for ages outside 18..=36.
    pub const FALLBACK: AgeBucket = Self::Months30To33;

    pub const fn label(self) -> &'static str {
        match self {
            Self::Months18To21 => "18-21",
            Self::Months22To25 => "22-25",
            Self::Months26To29 => "26-29",
            Self::Months30To33 => "30-33",
            Self::Months34To36 => "34-36",
        }
    }

    /// Inclusive month range covered by this bucket.
    pub const fn months(self) -> (i32, i32) {
        match self {
            Self::Months18To21 => (18, 21),
            Self::Months22To25 => (22, 25),
            Self::Months26To29 => (26, 29),
            Self::Months30To33 => (30, 33),
            Self::Months34To36 => (34, 36),
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [Self::Rendah, Self::Sedang, Self::Tinggi];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rendah => "Rendah",
            Self::Sedang => "Sedang",
            Self::Tinggi => "Tinggi",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

macro_rules! impl_label_traits {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseLevelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| ParseLevelError::new($kind, s))
            }
        }
    };
}

impl_label_traits!(EnvironmentLevel, "environment");
impl_label_traits!(DietQuality, "diet");
impl_label_traits!(InfectionCategory, "infection");
impl_label_traits!(AgeBucket, "age bucket");
impl_label_traits!(RiskLevel, "risk level");
