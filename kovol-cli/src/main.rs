use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kovol_core::{AnchorForms, RulesetKind};
use tracing::info;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "kovol-predict")]
#[command(about = "Predict Kovol verb paradigms and cross-check them against elicited data")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict a full paradigm from anchor forms and print it as JSON
    Predict {
        /// Analysis to use (a, b)
        #[arg(short, long, default_value = "a")]
        ruleset: RulesetKind,

        /// Remote past 1s form (ruleset a)
        #[arg(long)]
        remote_past_1s: Option<String>,

        /// Recent past 1s form (ruleset a)
        #[arg(long)]
        recent_past_1s: Option<String>,

        /// Future 3p form (ruleset b)
        #[arg(long)]
        future_3p: Option<String>,

        /// English gloss
        #[arg(short, long, default_value = "")]
        gloss: String,
    },

    /// Predict every verb in an elicitation file from its own anchors and
    /// report where the prediction disagrees
    Check {
        /// Analysis to use (a, b)
        #[arg(short, long, default_value = "a")]
        ruleset: RulesetKind,

        /// JSON array of elicitation rows
        #[arg(long)]
        rows: PathBuf,

        /// JSON comparison settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    kovol::tracing::init_with_filter(&args.log_level)?;

    info!("kovol-predict {}", env!("CARGO_PKG_VERSION"));

    let output = match args.command {
        Command::Predict {
            ruleset,
            remote_past_1s,
            recent_past_1s,
            future_3p,
            gloss,
        } => {
            let anchors = AnchorForms {
                remote_past_1s,
                recent_past_1s,
                future_3p,
            };
            let record = commands::predict(ruleset, &anchors, &gloss)?;
            serde_json::to_string_pretty(&record)?
        }
        Command::Check {
            ruleset,
            rows,
            config,
        } => {
            let config = kovol::config::load_compare_config(config.as_deref())?;
            let ingested = kovol::config::load_records(&rows)?;
            let report = commands::check(ruleset, &ingested, &config);
            serde_json::to_string_pretty(&report)?
        }
    };

    println!("{}", output);
    Ok(())
}
