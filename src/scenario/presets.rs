use serde::{Deserialize, Serialize};

use super::deltas::ScenarioDeltas;

/// A named, reusable set of deltas.
///
/// Example YAML:
/// ```yaml
/// name: Mentoring Pilot
/// description: Pair juniors with seniors
/// deltas: { satisfaction: 0.3, training: 12 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub deltas: ScenarioDeltas,
}

impl Preset {
    fn builtin(name: &str, description: &str, deltas: ScenarioDeltas) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            deltas,
        }
    }
}

/// Presets shipped with the engine.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::builtin(
            "Training Boost",
            "Add 20 training hours per period",
            ScenarioDeltas {
                training: Some(20.0),
                ..Default::default()
            },
        ),
        Preset::builtin(
            "Reduce Overtime",
            "Halve current overtime",
            ScenarioDeltas {
                overtime_pct: Some(-50.0),
                ..Default::default()
            },
        ),
        Preset::builtin(
            "Wellness Program",
            "Health initiatives lift satisfaction and cut sick days",
            ScenarioDeltas {
                satisfaction: Some(0.5),
                sick_days: Some(-2.0),
                ..Default::default()
            },
        ),
        Preset::builtin(
            "Balanced Hours",
            "Shorter weeks with a quarter less overtime",
            ScenarioDeltas {
                work_hours: Some(-3.0),
                overtime_pct: Some(-25.0),
                ..Default::default()
            },
        ),
        Preset::builtin(
            "Engagement Drive",
            "Recognition and development programs",
            ScenarioDeltas {
                satisfaction: Some(0.8),
                training: Some(10.0),
                ..Default::default()
            },
        ),
        Preset::builtin(
            "Crunch Period",
            "Deadline push: longer weeks, double overtime",
            ScenarioDeltas {
                satisfaction: Some(-0.6),
                work_hours: Some(8.0),
                overtime_pct: Some(100.0),
                sick_days: Some(2.0),
                ..Default::default()
            },
        ),
    ]
}

/// Normalize a preset name for lookup: case, spaces, dashes and
/// underscores are not significant.
fn preset_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether two preset names refer to the same preset.
pub fn same_preset(a: &str, b: &str) -> bool {
    preset_key(a) == preset_key(b)
}

/// Resolve a preset by name. `custom` presets shadow built-ins.
pub fn find_preset(name: &str, custom: &[Preset]) -> Option<Preset> {
    custom
        .iter()
        .find(|p| same_preset(&p.name, name))
        .cloned()
        .or_else(|| {
            builtin_presets()
                .into_iter()
                .find(|p| same_preset(&p.name, name))
        })
}

/// All presets visible to a caller: custom first, then built-ins not
/// shadowed by a custom preset of the same name.
pub fn all_presets(custom: &[Preset]) -> Vec<Preset> {
    let mut presets: Vec<Preset> = custom.to_vec();
    presets.extend(
        builtin_presets()
            .into_iter()
            .filter(|b| !custom.iter().any(|c| same_preset(&c.name, &b.name))),
    );
    presets
}
