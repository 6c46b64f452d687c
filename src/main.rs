use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use roomscore::chart::{improved_score, render_comparison, TextCanvas};
use roomscore::config::{load_config, run_init, Config};
use roomscore::output;
use roomscore::readings::{RawReadings, Readings};
use roomscore::scoring::{build_recommendations, calculate_score, validate_scoring};
use roomscore::tui::{run_tui, App};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

/// The five readings as raw strings. Malformed values intentionally pass
/// argument parsing and coerce to 0 at the scoring boundary instead of
/// failing the invocation.
#[derive(Args, Debug, Clone, Default)]
struct ReadingArgs {
    /// Natural light reading, 0-100
    #[arg(long, value_name = "VALUE")]
    light: Option<String>,

    /// Air quality reading, 0-100
    #[arg(long, value_name = "VALUE")]
    air: Option<String>,

    /// Number of plants in the space
    #[arg(long, value_name = "COUNT")]
    plants: Option<String>,

    /// Natural materials reading, 0-100
    #[arg(long, value_name = "VALUE")]
    materials: Option<String>,

    /// Noise reading, 0-100 (lower is quieter)
    #[arg(long, value_name = "VALUE")]
    noise: Option<String>,
}

impl ReadingArgs {
    fn to_readings(&self) -> Readings {
        Readings::from_raw(&RawReadings {
            light: self.light.clone(),
            air: self.air.clone(),
            plants: self.plants.clone(),
            materials: self.materials.clone(),
            noise: self.noise.clone(),
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the space and print recommendations (default if no subcommand)
    Score {
        #[command(flatten)]
        readings: ReadingArgs,

        /// Emit a machine-readable JSON report
        #[arg(long)]
        json: bool,
    },
    /// Render the before/after comparison chart
    Chart {
        #[command(flatten)]
        readings: ReadingArgs,

        /// Chart width in terminal columns
        #[arg(long, value_name = "N")]
        columns: Option<usize>,
    },
    /// Interactive calculator
    Tui {
        #[command(flatten)]
        readings: ReadingArgs,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "roomscore")]
#[command(about = "Biophilic wellness score for interior spaces", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/roomscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score {
        readings: ReadingArgs::default(),
        json: false,
    });
    let config_path = cli.config.clone().map(PathBuf::from);

    let code = match command {
        Commands::Init { force } => cmd_init(config_path, force),
        Commands::Score { readings, json } => cmd_score(config_path, &readings, json, cli.verbose),
        Commands::Chart { readings, columns } => {
            cmd_chart(config_path, &readings, columns, cli.verbose)
        }
        Commands::Tui { readings } => cmd_tui(config_path, &readings),
    };
    std::process::exit(code);
}

/// Load the config file and validate its scoring section at startup, or
/// report the problems and return the config exit code.
fn load_validated_config(path: Option<PathBuf>, verbose: bool) -> Result<Config, i32> {
    let config = match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return Err(EXIT_CONFIG);
        }
    };

    let scoring = config.effective_scoring();
    if let Err(errors) = validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    if verbose {
        let weights = scoring.effective_weights();
        eprintln!(
            "Weights: light {} / air {} / plants {} / materials {} / noise {}",
            weights.light, weights.air, weights.plants, weights.materials, weights.noise
        );
    }

    Ok(config)
}

fn cmd_score(
    config_path: Option<PathBuf>,
    reading_args: &ReadingArgs,
    json: bool,
    verbose: bool,
) -> i32 {
    let config = match load_validated_config(config_path, verbose) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let scoring = config.effective_scoring();
    let readings = reading_args.to_readings();
    let result = calculate_score(&readings, &scoring);
    let recommendations = build_recommendations(&readings, &scoring.effective_thresholds());

    if json {
        let report = output::ScoreReport::new(&readings, &result, &recommendations);
        return match report.to_json() {
            Ok(json) => {
                println!("{}", json);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                EXIT_FAILURE
            }
        };
    }

    let use_colors = output::should_use_colors();
    println!(
        "{}",
        output::format_score_summary(&readings, &result, &recommendations, use_colors)
    );
    if verbose {
        println!();
        println!("{}", output::format_breakdown(&result.breakdown, use_colors));
    }
    EXIT_SUCCESS
}

fn cmd_chart(
    config_path: Option<PathBuf>,
    reading_args: &ReadingArgs,
    columns: Option<usize>,
    verbose: bool,
) -> i32 {
    let config = match load_validated_config(config_path, verbose) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let readings = reading_args.to_readings();
    let result = calculate_score(&readings, &config.effective_scoring());

    let chart = config.effective_chart();
    let columns = columns.unwrap_or_else(output::default_chart_columns);
    let mut canvas = TextCanvas::new(chart.width, chart.height, columns);
    render_comparison(&mut canvas, result.score);

    println!(
        "Wellness score: {}/100 -> projected {}/100 after improvements",
        result.score,
        improved_score(result.score)
    );
    println!();
    print!("{}", canvas.render_ansi(output::should_use_colors()));
    EXIT_SUCCESS
}

fn cmd_tui(config_path: Option<PathBuf>, reading_args: &ReadingArgs) -> i32 {
    let config = match load_validated_config(config_path, false) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let app = App::new(reading_args.to_readings(), config);
    match run_tui(app) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("TUI error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn cmd_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    match run_init(config_path, force) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Config error: {}", e);
            EXIT_CONFIG
        }
    }
}
