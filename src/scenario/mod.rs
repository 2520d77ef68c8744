pub mod deltas;
pub mod presets;
pub mod sweep;

pub use deltas::ScenarioDeltas;
pub use presets::{all_presets, builtin_presets, find_preset, Preset};
pub use sweep::{sweep, SweepPoint};

use crate::scoring::{compare, FactorValues, ScenarioResult};

/// Apply `deltas` to `baseline` and compare the two states.
pub fn simulate(baseline: &FactorValues, deltas: &ScenarioDeltas) -> ScenarioResult {
    let adjusted = deltas.apply(baseline);
    compare(baseline, &adjusted)
}
