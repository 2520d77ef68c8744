pub mod formatter;

pub use formatter::{
    format_delta, format_json, format_presets, format_result, format_score,
    format_score_breakdown, format_sweep, format_sweep_tsv, format_tsv, format_values,
    should_use_colors,
};
