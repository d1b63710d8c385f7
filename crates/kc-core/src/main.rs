//! kcomp - compare Bayesian cluster-count estimators across simulation
//! scenarios.
//!
//! The binary has two commands:
//! - `render`: run the full pipeline and write the HTML comparison report
//! - `check`: load and validate the result tables, printing their summary

use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand};

use kc_common::{OutputFormat, Scenario};
use kc_core::pipeline::{self, RenderOptions, DEFAULT_SEED};
use kc_core::{logging, ExitCode};
use kc_report::ReportConfig;

/// Compare Bayesian cluster-count estimators across simulation scenarios.
#[derive(Parser)]
#[command(name = "kcomp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Directory holding the precomputed result tables
    #[arg(long, global = true, env = "KCOMP_RESULTS_DIR", default_value = "results")]
    results_dir: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full HTML comparison report
    Render {
        /// Output HTML path
        #[arg(long, short, default_value = "report.html")]
        out: PathBuf,

        /// Scenarios to include (default: all, in fixed order)
        #[arg(long, value_enum)]
        scenario: Vec<Scenario>,

        /// Seed for the illustrative samples
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Report title override
        #[arg(long)]
        title: Option<String>,

        /// Skip HTML minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Validate result tables and print their summary
    Check {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Scenarios to check (default: all)
        #[arg(long, value_enum)]
        scenario: Vec<Scenario>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.quiet, cli.global.no_color);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    };
    exit(code.as_i32());
}

fn run(cli: Cli) -> kc_core::Result<ExitCode> {
    match cli.command {
        Commands::Render {
            out,
            scenario,
            seed,
            title,
            no_minify,
        } => {
            let config = ReportConfig {
                title,
                minify: !no_minify,
            };
            let opts = RenderOptions {
                results_dir: cli.global.results_dir,
                out: out.clone(),
                scenarios: selected(scenario),
                seed,
                config,
            };
            let rows = pipeline::render_report(&opts)?;
            println!("wrote {} ({rows} result rows)", out.display());
            Ok(ExitCode::Success)
        }
        Commands::Check { format, scenario } => {
            let entries = pipeline::check_tables(&cli.global.results_dir, &selected(scenario))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                OutputFormat::Text => {
                    for entry in &entries {
                        println!(
                            "{}: {} rows, {} replicates, alpha [{}], n [{}]",
                            entry.scenario,
                            entry.rows,
                            entry.replicates,
                            entry.alpha_levels.join(", "),
                            entry
                                .sample_sizes
                                .iter()
                                .map(|n| n.to_string())
                                .collect::<Vec<_>>()
                                .join(", "),
                        );
                    }
                }
            }
            Ok(ExitCode::Success)
        }
    }
}

/// Default to all scenarios in fixed order; otherwise keep the given order,
/// dropping duplicates.
fn selected(requested: Vec<Scenario>) -> Vec<Scenario> {
    if requested.is_empty() {
        return Scenario::ALL.to_vec();
    }
    let mut seen = Vec::with_capacity(requested.len());
    for scenario in requested {
        if !seen.contains(&scenario) {
            seen.push(scenario);
        }
    }
    seen
}
