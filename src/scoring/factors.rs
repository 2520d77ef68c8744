use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score returned for factor names the normalizer does not know.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// One of the five raw HR metrics that feed the overall score.
///
/// Variants are declared in breakdown order; `Factor::ALL` preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Satisfaction,
    Training,
    WorkHours,
    Overtime,
    SickDays,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Satisfaction,
        Factor::Training,
        Factor::WorkHours,
        Factor::Overtime,
        Factor::SickDays,
    ];

    /// Parse a factor name. Accepts the canonical names and the raw field
    /// spellings (`trainingHours`, `sick_days`, `work-hours`, ...), ignoring case.
    pub fn parse(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "satisfaction" => Ok(Factor::Satisfaction),
            "training" | "traininghours" => Ok(Factor::Training),
            "workhours" => Ok(Factor::WorkHours),
            "overtime" => Ok(Factor::Overtime),
            "sickdays" => Ok(Factor::SickDays),
            _ => bail!("Unknown factor: {}", s),
        }
    }

    /// Canonical factor name as used in impact breakdowns.
    pub fn name(&self) -> &'static str {
        match self {
            Factor::Satisfaction => "satisfaction",
            Factor::Training => "training",
            Factor::WorkHours => "workHours",
            Factor::Overtime => "overtime",
            Factor::SickDays => "sickDays",
        }
    }

    /// Human label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Satisfaction => "Satisfaction",
            Factor::Training => "Training",
            Factor::WorkHours => "Work Hours",
            Factor::Overtime => "Overtime",
            Factor::SickDays => "Sick Days",
        }
    }

    /// Inclusive raw-value domain `(min, max)`.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Factor::Satisfaction => (1.0, 5.0),
            Factor::Training => (0.0, 100.0),
            Factor::WorkHours => (20.0, 60.0),
            Factor::Overtime => (0.0, 40.0),
            Factor::SickDays => (0.0, 20.0),
        }
    }

    /// Saturate a raw value at the factor's domain bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.domain();
        value.clamp(min, max)
    }

    /// Map a raw value onto the 0-100 "goodness" scale.
    ///
    /// Never leaves [0, 100]: out-of-domain input saturates and NaN maps to
    /// the neutral score.
    pub fn normalize(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return NEUTRAL_SCORE;
        }
        let score = match self {
            Factor::Satisfaction => ((raw - 1.0) / 4.0) * 100.0,
            // saturates at 80 hours
            Factor::Training => (raw / 80.0) * 100.0,
            // 40h is optimal, symmetric penalty
            Factor::WorkHours => 100.0 - (raw - 40.0).abs() * 2.5,
            Factor::Overtime => 100.0 - raw * 2.5,
            Factor::SickDays => 100.0 - raw * 5.0,
        };
        score.clamp(0.0, 100.0)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Factor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Factor::parse(s)
    }
}

/// String-keyed normalizer. Unrecognized factor names score a neutral 50.
pub fn normalize(factor_name: &str, raw: f64) -> f64 {
    match Factor::parse(factor_name) {
        Ok(factor) => factor.normalize(raw),
        Err(_) => NEUTRAL_SCORE,
    }
}
