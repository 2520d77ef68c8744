use serde::{Deserialize, Serialize};

use crate::scenario::Preset;
use crate::scoring::FactorValues;

/// Top-level config file.
///
/// Both sections are optional: a missing baseline means the default
/// baseline, missing presets means built-ins only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<FactorValues>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<Preset>>,
}

impl Config {
    /// Baseline to score against, falling back to the default baseline.
    pub fn effective_baseline(&self) -> FactorValues {
        self.baseline.unwrap_or_default()
    }

    pub fn custom_presets(&self) -> &[Preset] {
        self.presets.as_deref().unwrap_or(&[])
    }

    /// Config written by `init`: the default baseline plus one example preset.
    pub fn starter() -> Self {
        Self {
            baseline: Some(FactorValues::default()),
            presets: Some(vec![Preset {
                name: "Mentoring Pilot".to_string(),
                description: Some("Pair juniors with seniors".to_string()),
                deltas: crate::scenario::ScenarioDeltas {
                    satisfaction: Some(0.3),
                    training: Some(12.0),
                    ..Default::default()
                },
            }]),
        }
    }
}
