use serde::{Deserialize, Serialize};

use crate::scoring::{Factor, FactorValues};

/// A partial set of adjustments applied to a baseline.
///
/// Unset fields leave the factor unchanged. `overtime_pct` is a percentage
/// of the current overtime, every other field is an absolute delta in the
/// factor's own unit.
///
/// Example YAML:
/// ```yaml
/// satisfaction: 0.5
/// overtime: -50
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioDeltas {
    /// Added to satisfaction (1-5 scale)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<f64>,

    /// Added to training hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<f64>,

    /// Added to weekly work hours
    #[serde(default, rename = "workHours", skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<f64>,

    /// Percent change of current overtime (-50 halves it)
    #[serde(default, rename = "overtime", skip_serializing_if = "Option::is_none")]
    pub overtime_pct: Option<f64>,

    /// Added to sick days
    #[serde(default, rename = "sickDays", skip_serializing_if = "Option::is_none")]
    pub sick_days: Option<f64>,
}

impl ScenarioDeltas {
    /// Delta set touching a single factor.
    pub fn single(factor: Factor, delta: f64) -> Self {
        let mut deltas = Self::default();
        deltas.set(factor, delta);
        deltas
    }

    pub fn get(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::Satisfaction => self.satisfaction,
            Factor::Training => self.training,
            Factor::WorkHours => self.work_hours,
            Factor::Overtime => self.overtime_pct,
            Factor::SickDays => self.sick_days,
        }
    }

    pub fn set(&mut self, factor: Factor, delta: f64) {
        let slot = match factor {
            Factor::Satisfaction => &mut self.satisfaction,
            Factor::Training => &mut self.training,
            Factor::WorkHours => &mut self.work_hours,
            Factor::Overtime => &mut self.overtime_pct,
            Factor::SickDays => &mut self.sick_days,
        };
        *slot = Some(delta);
    }

    pub fn is_empty(&self) -> bool {
        Factor::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Overlay the fields set in `other` on top of these deltas.
    pub fn merge(&self, other: &ScenarioDeltas) -> ScenarioDeltas {
        let mut out = *self;
        for factor in Factor::ALL {
            if let Some(delta) = other.get(factor) {
                out.set(factor, delta);
            }
        }
        out
    }

    /// Produce the adjusted values for `baseline`.
    ///
    /// Every adjusted field saturates at its factor domain.
    pub fn apply(&self, baseline: &FactorValues) -> FactorValues {
        let mut adjusted = *baseline;
        for factor in Factor::ALL {
            let current = baseline.get(factor);
            let delta = self.get(factor).unwrap_or(0.0);
            let next = match factor {
                Factor::Overtime => current + current * (delta / 100.0),
                _ => current + delta,
            };
            adjusted.set(factor, factor.clamp(next));
        }
        adjusted
    }

    /// Short human description, e.g. `training +20, overtime -50%`.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = Factor::ALL
            .iter()
            .filter_map(|&factor| {
                self.get(factor).map(|d| match factor {
                    Factor::Overtime => format!("{} {:+}%", factor, d),
                    _ => format!("{} {:+}", factor, d),
                })
            })
            .collect();
        if parts.is_empty() {
            "no change".to_string()
        } else {
            parts.join(", ")
        }
    }
}
