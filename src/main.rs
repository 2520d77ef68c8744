use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use perfscore::config::{self, Config};
use perfscore::output;
use perfscore::scenario::{self, ScenarioDeltas};
use perfscore::scoring::{self, Factor, FactorValues, ScoreCache};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the overall score of the baseline (default if no subcommand)
    Score,
    /// Compare the baseline against explicitly given adjusted values
    Compare {
        /// Adjusted values as name=value pairs; unnamed factors keep their baseline value
        #[arg(short, long)]
        adjusted: String,
    },
    /// Apply a preset and/or deltas to the baseline and compare
    Simulate {
        /// Preset name (see `perfscore presets`)
        #[arg(short, long)]
        preset: Option<String>,

        /// Satisfaction delta (points on the 1-5 scale)
        #[arg(long, allow_negative_numbers = true)]
        satisfaction: Option<f64>,

        /// Training hours delta
        #[arg(long, allow_negative_numbers = true)]
        training: Option<f64>,

        /// Weekly work hours delta
        #[arg(long, allow_negative_numbers = true)]
        work_hours: Option<f64>,

        /// Overtime change in percent of current overtime
        #[arg(long, allow_negative_numbers = true)]
        overtime: Option<f64>,

        /// Sick days delta
        #[arg(long, allow_negative_numbers = true)]
        sick_days: Option<f64>,
    },
    /// Step one factor's delta across a range and score each step
    Sweep {
        /// Factor to vary (satisfaction, training, workHours, overtime, sickDays)
        factor: String,

        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        #[arg(long, allow_negative_numbers = true)]
        to: f64,

        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// List available presets
    Presets,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "perfscore")]
#[command(about = "What-if workforce performance scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/perfscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Baseline overrides as name=value pairs, e.g. "satisfaction=4,trainingHours=50"
    #[arg(short, long, global = true, default_value = "")]
    baseline: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Saturate out-of-domain values, warning once per affected factor.
fn clamp_with_warning(values: FactorValues, label: &str) -> FactorValues {
    for factor in values.out_of_domain() {
        let (min, max) = factor.domain();
        tracing::warn!(
            "{} {} = {} is outside [{}, {}], clamping",
            label,
            factor,
            values.get(factor),
            min,
            max
        );
    }
    values.clamped()
}

fn usage_error(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(EXIT_USAGE);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match output::format_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    perfscore::logging::init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Score);
    let config_path = cli.config.map(PathBuf::from);

    // Init writes the config, so it runs before loading one
    if let Commands::Init { force } = command {
        let path = config_path.unwrap_or_else(config::get_config_path);
        if let Err(e) = config::write_config(&path, &Config::starter(), force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Config written to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let baseline = match config.effective_baseline().with_overrides(&cli.baseline) {
        Ok(v) => clamp_with_warning(v, "baseline"),
        Err(e) => usage_error(format!("Invalid --baseline: {:#}", e)),
    };
    tracing::debug!(?baseline, "resolved baseline");

    let use_colors = output::should_use_colors();

    match command {
        Commands::Score => {
            let scores = scoring::factor_scores(&baseline);
            let overall = scoring::overall_score(&baseline);
            match cli.format {
                OutputFormat::Table => {
                    println!("{}", output::format_score_breakdown(&scores, overall, use_colors))
                }
                OutputFormat::Tsv => println!("{}", output::format_score(scoring::round1(overall))),
                OutputFormat::Json => print_json(&serde_json::json!({
                    "overallScore": scoring::round1(overall),
                    "factors": scores,
                })),
            }
        }
        Commands::Compare { adjusted } => {
            let adjusted = match baseline.with_overrides(&adjusted) {
                Ok(v) => clamp_with_warning(v, "adjusted"),
                Err(e) => usage_error(format!("Invalid --adjusted: {:#}", e)),
            };
            tracing::debug!(?adjusted, "resolved adjusted values");
            print_result(&scoring::compare(&baseline, &adjusted), cli.format, use_colors);
        }
        Commands::Simulate {
            preset,
            satisfaction,
            training,
            work_hours,
            overtime,
            sick_days,
        } => {
            let preset_deltas = match preset {
                Some(name) => match scenario::find_preset(&name, config.custom_presets()) {
                    Some(p) => {
                        tracing::debug!(preset = %p.name, deltas = %p.deltas.describe(), "using preset");
                        p.deltas
                    }
                    None => usage_error(format!(
                        "Unknown preset '{}'. Run `perfscore presets` to list presets.",
                        name
                    )),
                },
                None => ScenarioDeltas::default(),
            };
            let flag_deltas = ScenarioDeltas {
                satisfaction,
                training,
                work_hours,
                overtime_pct: overtime,
                sick_days,
            };
            if Factor::ALL
                .iter()
                .filter_map(|f| flag_deltas.get(*f))
                .any(|d| !d.is_finite())
            {
                usage_error("Deltas must be finite numbers");
            }
            let deltas = preset_deltas.merge(&flag_deltas);

            if cli.verbose {
                let adjusted = deltas.apply(&baseline);
                tracing::debug!("applying {}", deltas.describe());
                tracing::debug!("adjusted values:\n{}", output::format_values(&adjusted));
            }
            print_result(&scenario::simulate(&baseline, &deltas), cli.format, use_colors);
        }
        Commands::Sweep {
            factor,
            from,
            to,
            step,
        } => {
            let factor = match Factor::parse(&factor) {
                Ok(f) => f,
                Err(e) => usage_error(e),
            };
            let mut cache = ScoreCache::new();
            let points = scenario::sweep(&baseline, factor, from, to, step, &mut cache);
            match cli.format {
                OutputFormat::Table => println!("{}", output::format_sweep(&points, use_colors)),
                OutputFormat::Tsv => println!("{}", output::format_sweep_tsv(&points)),
                OutputFormat::Json => print_json(&points),
            }
        }
        Commands::Presets => {
            let presets = scenario::all_presets(config.custom_presets());
            match cli.format {
                OutputFormat::Table => println!("{}", output::format_presets(&presets, use_colors)),
                OutputFormat::Tsv => {
                    for p in &presets {
                        println!("{}\t{}", p.name, p.deltas.describe());
                    }
                }
                OutputFormat::Json => print_json(&presets),
            }
        }
        Commands::Init { .. } => unreachable!("handled before config load"),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_result(result: &scoring::ScenarioResult, format: OutputFormat, use_colors: bool) {
    match format {
        OutputFormat::Table => println!("{}", output::format_result(result, use_colors)),
        OutputFormat::Tsv => println!("{}", output::format_tsv(result)),
        OutputFormat::Json => print_json(result),
    }
}
