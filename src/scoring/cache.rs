use std::collections::HashMap;

use super::engine::{compare, ScenarioResult};
use super::values::FactorValues;

/// Bit patterns of the (baseline, adjusted) input tuple.
type CacheKey = [u64; 10];

fn cache_key(baseline: &FactorValues, adjusted: &FactorValues) -> CacheKey {
    [
        baseline.satisfaction.to_bits(),
        baseline.training_hours.to_bits(),
        baseline.work_hours.to_bits(),
        baseline.overtime.to_bits(),
        baseline.sick_days.to_bits(),
        adjusted.satisfaction.to_bits(),
        adjusted.training_hours.to_bits(),
        adjusted.work_hours.to_bits(),
        adjusted.overtime.to_bits(),
        adjusted.sick_days.to_bits(),
    ]
}

/// In-process memo of [`compare`] results keyed by exact input values.
///
/// Purely an optimization: a cached comparison is bit-identical to a fresh one.
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: HashMap<CacheKey, ScenarioResult>,
    hits: u64,
    misses: u64,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(&mut self, baseline: &FactorValues, adjusted: &FactorValues) -> ScenarioResult {
        let key = cache_key(baseline, adjusted);
        if let Some(result) = self.entries.get(&key) {
            self.hits += 1;
            return result.clone();
        }
        self.misses += 1;
        let result = compare(baseline, adjusted);
        self.entries.insert(key, result.clone());
        result
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
