use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::factors::Factor;

/// Raw values for the five factors.
///
/// Field names serialize in the camelCase form used by config files and
/// JSON output (`trainingHours`, `workHours`, `sickDays`).
///
/// Example YAML:
/// ```yaml
/// satisfaction: 3.8
/// trainingHours: 35
/// workHours: 43
/// overtime: 10
/// sickDays: 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FactorValues {
    /// Survey satisfaction, 1-5
    pub satisfaction: f64,
    /// Training hours per period, 0-100
    pub training_hours: f64,
    /// Weekly work hours, 20-60
    pub work_hours: f64,
    /// Overtime hours, 0-40
    pub overtime: f64,
    /// Sick days, 0-20
    pub sick_days: f64,
}

impl Default for FactorValues {
    fn default() -> Self {
        Self {
            satisfaction: 3.8,
            training_hours: 35.0,
            work_hours: 43.0,
            overtime: 10.0,
            sick_days: 5.0,
        }
    }
}

impl FactorValues {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Satisfaction => self.satisfaction,
            Factor::Training => self.training_hours,
            Factor::WorkHours => self.work_hours,
            Factor::Overtime => self.overtime,
            Factor::SickDays => self.sick_days,
        }
    }

    pub fn set(&mut self, factor: Factor, value: f64) {
        match factor {
            Factor::Satisfaction => self.satisfaction = value,
            Factor::Training => self.training_hours = value,
            Factor::WorkHours => self.work_hours = value,
            Factor::Overtime => self.overtime = value,
            Factor::SickDays => self.sick_days = value,
        }
    }

    /// Copy with `factor` replaced by `value`.
    pub fn with(mut self, factor: Factor, value: f64) -> Self {
        self.set(factor, value);
        self
    }

    /// Copy with every field saturated at its factor domain.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for factor in Factor::ALL {
            out.set(factor, factor.clamp(self.get(factor)));
        }
        out
    }

    /// Factors whose raw value lies outside the factor's domain.
    pub fn out_of_domain(&self) -> Vec<Factor> {
        Factor::ALL
            .into_iter()
            .filter(|f| {
                let (min, max) = f.domain();
                let v = self.get(*f);
                !(min..=max).contains(&v)
            })
            .collect()
    }

    /// Apply comma-separated `name=value` overrides on top of these values.
    ///
    /// Factor names are parsed with [`Factor::parse`], so `trainingHours=55`
    /// and `training=55` are equivalent. An empty string applies nothing.
    pub fn with_overrides(&self, spec: &str) -> Result<Self> {
        let mut out = *self;
        for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((name, value)) = part.split_once('=') else {
                bail!("Invalid override '{}': expected name=value", part);
            };
            let factor = Factor::parse(name)?;
            let value: f64 = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid number for {}: '{}'", factor, value.trim()))?;
            if !value.is_finite() {
                bail!("Value for {} must be finite", factor);
            }
            out.set(factor, value);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baseline() {
        let v = FactorValues::default();
        assert_eq!(v.satisfaction, 3.8);
        assert_eq!(v.training_hours, 35.0);
        assert_eq!(v.work_hours, 43.0);
        assert_eq!(v.overtime, 10.0);
        assert_eq!(v.sick_days, 5.0);
    }

    #[test]
    fn test_get_set_by_factor() {
        let mut v = FactorValues::default();
        v.set(Factor::Training, 55.0);
        assert_eq!(v.get(Factor::Training), 55.0);
        assert_eq!(v.training_hours, 55.0);
    }

    #[test]
    fn test_clamped_saturates_each_field() {
        let v = FactorValues {
            satisfaction: 7.0,
            training_hours: -3.0,
            work_hours: 80.0,
            overtime: 110.0,
            sick_days: 4.0,
        };
        let c = v.clamped();
        assert_eq!(c.satisfaction, 5.0);
        assert_eq!(c.training_hours, 0.0);
        assert_eq!(c.work_hours, 60.0);
        assert_eq!(c.overtime, 40.0);
        assert_eq!(c.sick_days, 4.0);
        assert_eq!(
            v.out_of_domain(),
            vec![Factor::Satisfaction, Factor::Training, Factor::WorkHours, Factor::Overtime]
        );
    }

    #[test]
    fn test_default_is_in_domain() {
        assert!(FactorValues::default().out_of_domain().is_empty());
    }

    #[test]
    fn test_overrides_apply_named_fields() {
        let v = FactorValues::default()
            .with_overrides("trainingHours=55, sick_days=2")
            .unwrap();
        assert_eq!(v.training_hours, 55.0);
        assert_eq!(v.sick_days, 2.0);
        assert_eq!(v.satisfaction, 3.8);
    }

    #[test]
    fn test_overrides_empty_is_identity() {
        let v = FactorValues::default();
        assert_eq!(v.with_overrides("").unwrap(), v);
    }

    #[test]
    fn test_overrides_reject_bad_input() {
        let v = FactorValues::default();
        assert!(v.with_overrides("training").is_err());
        assert!(v.with_overrides("morale=3").is_err());
        assert!(v.with_overrides("overtime=lots").is_err());
        assert!(v.with_overrides("overtime=NaN").is_err());
    }

    #[test]
    fn test_yaml_field_names() {
        let yaml = r#"
satisfaction: 4.2
trainingHours: 50
workHours: 40
overtime: 0
sickDays: 1
"#;
        let v: FactorValues = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(v.training_hours, 50.0);
        assert_eq!(v.work_hours, 40.0);
        assert_eq!(v.sick_days, 1.0);
    }

    #[test]
    fn test_yaml_rejects_unknown_field() {
        let yaml = r#"
satisfaction: 4.2
trainingHours: 50
workHours: 40
overtime: 0
sickDays: 1
morale: 3
"#;
        assert!(serde_saphyr::from_str::<FactorValues>(yaml).is_err());
    }
}
