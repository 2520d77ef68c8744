//! What-if workforce performance scoring.
//!
//! Five HR factors (satisfaction, training hours, weekly work hours,
//! overtime, sick days) are normalized onto a 0-100 scale, combined with
//! fixed weights into one overall score, and compared between a baseline
//! and an adjusted state.
//!
//! ```
//! use perfscore::scenario::{find_preset, simulate};
//! use perfscore::scoring::{Category, FactorValues};
//!
//! let baseline = FactorValues::default();
//! let preset = find_preset("Training Boost", &[]).unwrap();
//! let result = simulate(&baseline, &preset.deltas);
//! assert_eq!(result.new_score, 75.1);
//! assert_eq!(result.category, Category::High);
//! ```

pub mod config;
pub mod logging;
pub mod output;
pub mod scenario;
pub mod scoring;
