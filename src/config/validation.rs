use super::schema::Config;
use crate::scenario::presets::same_preset;
use crate::scoring::Factor;

/// Validate a loaded config at startup.
/// Returns all validation errors at once (not just the first).
///
/// Baseline values outside a factor's domain are not errors; callers clamp
/// them before use.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref baseline) = config.baseline {
        for factor in Factor::ALL {
            let value = baseline.get(factor);
            if !value.is_finite() {
                errors.push(format!("baseline.{}: must be a finite number", factor));
            }
        }
    }

    if let Some(ref presets) = config.presets {
        for (i, preset) in presets.iter().enumerate() {
            if preset.name.trim().is_empty() {
                errors.push(format!("presets[{}].name: must not be empty", i));
            } else if presets[..i].iter().any(|p| same_preset(&p.name, &preset.name)) {
                errors.push(format!(
                    "presets[{}].name: duplicate preset '{}'",
                    i, preset.name
                ));
            }

            for factor in Factor::ALL {
                if let Some(delta) = preset.deltas.get(factor) {
                    if !delta.is_finite() {
                        errors.push(format!(
                            "presets[{}].deltas.{}: must be a finite number",
                            i, factor
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
