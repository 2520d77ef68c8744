use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::WEIGHTS;
use super::factors::Factor;
use super::values::FactorValues;

/// Unweighted factor-score movement below which a factor counts as unchanged.
pub const DIRECTION_DEAD_ZONE: f64 = 0.5;

/// Lower bound (inclusive) of the High category.
pub const HIGH_THRESHOLD: f64 = 75.0;

/// Lower bound (inclusive) of the Medium category.
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// One factor's contribution to an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub factor: Factor,
    pub raw: f64,      // Raw input value
    pub score: f64,    // Normalized 0-100
    pub weight: f64,   // Fixed weight
    pub weighted: f64, // score * weight
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
    Neutral,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Positive => "positive",
            Direction::Negative => "negative",
            Direction::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    /// Band for a (rounded) overall score. Lower bounds are inclusive.
    pub fn classify(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Category::High
        } else if score >= MEDIUM_THRESHOLD {
            Category::Medium
        } else {
            Category::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Medium => "Medium",
            Category::High => "High",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEntry {
    pub factor: Factor,
    pub impact: f64,
    pub direction: Direction,
}

/// Outcome of comparing a baseline against an adjusted state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub baseline_score: f64,
    pub new_score: f64,
    pub delta: f64,
    pub percent_change: f64,
    pub category: Category,
    pub impact_breakdown: Vec<ImpactEntry>,
}

/// Round to one decimal place, halves toward positive infinity.
pub fn round1(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

/// Per-factor normalized and weighted scores, in `Factor::ALL` order.
pub fn factor_scores(values: &FactorValues) -> [FactorScore; 5] {
    Factor::ALL.map(|factor| {
        let raw = values.get(factor);
        let score = factor.normalize(raw);
        let weight = WEIGHTS.get(factor);
        FactorScore {
            factor,
            raw,
            score,
            weight,
            weighted: score * weight,
        }
    })
}

/// Weighted aggregate of the five normalized factor scores, in [0, 100].
pub fn overall_score(values: &FactorValues) -> f64 {
    factor_scores(values).iter().map(|s| s.weighted).sum()
}

/// Compare a baseline against an adjusted state.
///
/// Scores are rounded before the delta is taken, and the delta is rounded
/// before the percent change is computed.
pub fn compare(baseline: &FactorValues, adjusted: &FactorValues) -> ScenarioResult {
    let baseline_score = round1(overall_score(baseline));
    let new_score = round1(overall_score(adjusted));
    let delta = round1(new_score - baseline_score);

    // Baseline is only zero when every factor scores zero
    let percent_change = if baseline_score > 0.0 {
        round1(delta / baseline_score * 100.0)
    } else {
        0.0
    };

    ScenarioResult {
        baseline_score,
        new_score,
        delta,
        percent_change,
        category: Category::classify(new_score),
        impact_breakdown: impact_breakdown(baseline, adjusted),
    }
}

fn impact_breakdown(baseline: &FactorValues, adjusted: &FactorValues) -> Vec<ImpactEntry> {
    Factor::ALL
        .iter()
        .map(|&factor| {
            let before = factor.normalize(baseline.get(factor));
            let after = factor.normalize(adjusted.get(factor));
            let direction = if after > before + DIRECTION_DEAD_ZONE {
                Direction::Positive
            } else if after < before - DIRECTION_DEAD_ZONE {
                Direction::Negative
            } else {
                Direction::Neutral
            };
            ImpactEntry {
                factor,
                impact: round1((after - before) * WEIGHTS.get(factor)),
                direction,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_baseline() -> FactorValues {
        FactorValues {
            satisfaction: 3.8,
            training_hours: 35.0,
            work_hours: 43.0,
            overtime: 10.0,
            sick_days: 5.0,
        }
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(68.8375), 68.8);
        assert_eq!(round1(75.0875), 75.1);
        assert_eq!(round1(6.25), 6.3);
        assert_eq!(round1(-6.25), -6.2);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn test_factor_scores_for_sample_baseline() {
        let scores = factor_scores(&sample_baseline());
        let expected = [70.0, 43.75, 92.5, 75.0, 75.0];
        for (s, e) in scores.iter().zip(expected) {
            assert!((s.score - e).abs() < 1e-9, "{}: {} != {}", s.factor, s.score, e);
        }
        assert_eq!(scores[0].factor, Factor::Satisfaction);
        assert_eq!(scores[4].factor, Factor::SickDays);
    }

    #[test]
    fn test_overall_score_sample_baseline() {
        // 21 + 10.9375 + 16.65 + 11.25 + 9
        let score = overall_score(&sample_baseline());
        assert!((score - 68.8375).abs() < 1e-9);
        assert_eq!(round1(score), 68.8);
    }

    #[test]
    fn test_overall_score_extremes() {
        let best = FactorValues {
            satisfaction: 5.0,
            training_hours: 80.0,
            work_hours: 40.0,
            overtime: 0.0,
            sick_days: 0.0,
        };
        assert!((overall_score(&best) - 100.0).abs() < 1e-9);

        let worst = FactorValues {
            satisfaction: 1.0,
            training_hours: 0.0,
            work_hours: 60.0,
            overtime: 40.0,
            sick_days: 20.0,
        };
        // Work hours bottoms out at 50 within its domain
        assert!((overall_score(&worst) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_training_boost() {
        let baseline = sample_baseline();
        let adjusted = baseline.with(Factor::Training, 55.0);
        let result = compare(&baseline, &adjusted);

        assert_eq!(result.baseline_score, 68.8);
        assert_eq!(result.new_score, 75.1);
        assert_eq!(result.delta, 6.3);
        assert_eq!(result.percent_change, 9.2);
        assert_eq!(result.category, Category::High);

        let training = &result.impact_breakdown[1];
        assert_eq!(training.factor, Factor::Training);
        assert_eq!(training.impact, 6.3);
        assert_eq!(training.direction, Direction::Positive);

        for entry in result
            .impact_breakdown
            .iter()
            .filter(|e| e.factor != Factor::Training)
        {
            assert_eq!(entry.impact, 0.0);
            assert_eq!(entry.direction, Direction::Neutral);
        }
    }

    #[test]
    fn test_delta_is_taken_from_rounded_scores() {
        let baseline = sample_baseline();
        let adjusted = baseline.with(Factor::Training, 35.04);

        // Raw movement is 0.0125 points, which rounds away on its own
        let raw_delta = overall_score(&adjusted) - overall_score(&baseline);
        assert_eq!(round1(raw_delta), 0.0);

        let result = compare(&baseline, &adjusted);
        assert_eq!(result.baseline_score, 68.8);
        assert_eq!(result.new_score, 68.9);
        assert_eq!(result.delta, 0.1);
    }

    #[test]
    fn test_compare_identity() {
        let baseline = sample_baseline();
        let result = compare(&baseline, &baseline);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.percent_change, 0.0);
        assert_eq!(result.baseline_score, result.new_score);
        assert!(result
            .impact_breakdown
            .iter()
            .all(|e| e.direction == Direction::Neutral && e.impact == 0.0));
    }

    #[test]
    fn test_compare_negative_change() {
        let baseline = sample_baseline().with(Factor::Training, 55.0);
        let adjusted = sample_baseline();
        let result = compare(&baseline, &adjusted);

        assert_eq!(result.delta, -6.3);
        assert_eq!(result.category, Category::Medium);
        let training = &result.impact_breakdown[1];
        assert_eq!(training.direction, Direction::Negative);
        // -6.25 rounds toward positive infinity
        assert_eq!(training.impact, -6.2);
    }

    #[test]
    fn test_compare_zero_baseline_guards_division() {
        let zero = FactorValues {
            satisfaction: 1.0,
            training_hours: 0.0,
            work_hours: 0.0,
            overtime: 40.0,
            sick_days: 20.0,
        };
        assert_eq!(overall_score(&zero), 0.0);

        let result = compare(&zero, &sample_baseline());
        assert_eq!(result.baseline_score, 0.0);
        assert_eq!(result.percent_change, 0.0);
        assert_eq!(result.delta, result.new_score);
    }

    #[test]
    fn test_direction_dead_zone() {
        let baseline = sample_baseline();
        // +0.2 training hours moves the training score by 0.25: neutral
        let small = compare(&baseline, &baseline.with(Factor::Training, 35.2));
        assert_eq!(small.impact_breakdown[1].direction, Direction::Neutral);

        // +0.8 hours moves it by 1.0: positive
        let larger = compare(&baseline, &baseline.with(Factor::Training, 35.8));
        assert_eq!(larger.impact_breakdown[1].direction, Direction::Positive);

        // +0.04 sick days lowers that score by 0.2: neutral
        let tiny = compare(&baseline, &baseline.with(Factor::SickDays, 5.04));
        assert_eq!(tiny.impact_breakdown[4].direction, Direction::Neutral);
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let result = compare(&sample_baseline(), &sample_baseline());
        let order: Vec<Factor> = result.impact_breakdown.iter().map(|e| e.factor).collect();
        assert_eq!(order, Factor::ALL.to_vec());
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(Category::classify(75.0), Category::High);
        assert_eq!(Category::classify(74.9), Category::Medium);
        assert_eq!(Category::classify(50.0), Category::Medium);
        assert_eq!(Category::classify(49.9), Category::Low);
        assert_eq!(Category::classify(0.0), Category::Low);
        assert_eq!(Category::classify(100.0), Category::High);
    }

    #[test]
    fn test_compare_is_deterministic() {
        let baseline = sample_baseline();
        let adjusted = baseline.with(Factor::Overtime, 4.0).with(Factor::Satisfaction, 4.1);
        let a = compare(&baseline, &adjusted);
        let b = compare(&baseline, &adjusted);
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_json_field_names() {
        let result = compare(&sample_baseline(), &sample_baseline());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("baselineScore").is_some());
        assert!(json.get("newScore").is_some());
        assert!(json.get("percentChange").is_some());
        assert_eq!(json["category"], "Medium");
        assert_eq!(json["impactBreakdown"][2]["factor"], "workHours");
        assert_eq!(json["impactBreakdown"][2]["direction"], "neutral");
    }
}
