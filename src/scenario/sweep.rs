use serde::Serialize;

use super::deltas::ScenarioDeltas;
use crate::scoring::{Factor, FactorValues, ScenarioResult, ScoreCache};

/// Upper bound on sweep steps, so a tiny step cannot run away.
pub const MAX_SWEEP_STEPS: usize = 10_000;

/// One evaluated step of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub delta: f64,
    pub adjusted_value: f64,
    pub result: ScenarioResult,
}

/// Evaluate a single-factor delta stepped from `from` to `to` inclusive.
///
/// Returns an empty sweep for a non-positive or non-finite step, when
/// `from > to`, or when the range needs more than `MAX_SWEEP_STEPS` steps.
/// Deltas that saturate the factor domain produce identical
/// adjusted inputs and are answered from `cache`.
pub fn sweep(
    baseline: &FactorValues,
    factor: Factor,
    from: f64,
    to: f64,
    step: f64,
    cache: &mut ScoreCache,
) -> Vec<SweepPoint> {
    if !(step.is_finite() && step > 0.0 && from.is_finite() && to.is_finite()) || from > to {
        return Vec::new();
    }

    // Index-based stepping avoids accumulating float error
    let steps = (((to - from) / step) + 1e-9).floor();
    if steps > MAX_SWEEP_STEPS as f64 {
        tracing::warn!(
            steps,
            max = MAX_SWEEP_STEPS,
            "sweep range needs too many steps, increase --step"
        );
        return Vec::new();
    }
    let steps = steps as usize;

    let points: Vec<SweepPoint> = (0..=steps)
        .map(|i| {
            let delta = from + step * i as f64;
            let adjusted = ScenarioDeltas::single(factor, delta).apply(baseline);
            SweepPoint {
                delta,
                adjusted_value: adjusted.get(factor),
                result: cache.compare(baseline, &adjusted),
            }
        })
        .collect();

    tracing::debug!(
        factor = %factor,
        points = points.len(),
        cache_hits = cache.hits(),
        cache_misses = cache.misses(),
        "sweep complete"
    );

    points
}
