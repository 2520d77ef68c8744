use serde::Serialize;

use super::factors::Factor;

/// Fixed contribution of each factor to the overall score.
///
/// The five weights sum to 1.0, so a weighted sum of 0-100 factor scores
/// stays on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub satisfaction: f64,
    pub training: f64,
    pub work_hours: f64,
    pub overtime: f64,
    pub sick_days: f64,
}

/// Process-wide weighting table.
pub const WEIGHTS: Weights = Weights {
    satisfaction: 0.30,
    training: 0.25,
    work_hours: 0.18,
    overtime: 0.15,
    sick_days: 0.12,
};

impl Weights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Satisfaction => self.satisfaction,
            Factor::Training => self.training,
            Factor::WorkHours => self.work_hours,
            Factor::Overtime => self.overtime,
            Factor::SickDays => self.sick_days,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_are_positive() {
        for factor in Factor::ALL {
            let w = WEIGHTS.get(factor);
            assert!(w > 0.0 && w <= 1.0, "{} weight out of range: {}", factor, w);
        }
    }

    #[test]
    fn test_weight_lookup() {
        assert_eq!(WEIGHTS.get(Factor::Satisfaction), 0.30);
        assert_eq!(WEIGHTS.get(Factor::Training), 0.25);
        assert_eq!(WEIGHTS.get(Factor::WorkHours), 0.18);
        assert_eq!(WEIGHTS.get(Factor::Overtime), 0.15);
        assert_eq!(WEIGHTS.get(Factor::SickDays), 0.12);
    }

    #[test]
    fn test_default_is_fixed_table() {
        assert_eq!(Weights::default(), WEIGHTS);
    }
}
