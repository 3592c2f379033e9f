//! # Wingwright CLI
//!
//! Terminal front-end for the RC airplane sizing wizard. Runs the six steps
//! interactively, or with `--batch` prints every step's summary for the
//! given inputs and exits.
//!
//! ```text
//! calc_cli --mode payload --set empty_weight_g=1100 --set payload_weight_g=400 --batch
//! calc_cli --config club.toml --step propulsion
//! ```

mod logger;
mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use calc_core::inputs::parse_assignment;
use calc_core::report::{summarize, summarize_all, StepSummary};
use calc_core::{
    load_config, CompetitionMode, WingConfiguration, WizardConfig, WizardState, WizardStep,
};
use clap::Parser;

use crate::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step RC airplane sizing wizard")]
struct Cli {
    /// TOML or YAML file with session defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Competition mode; also selects the recommended wing configuration
    #[arg(long)]
    mode: Option<CompetitionMode>,

    /// Wing configuration, applied after --mode
    #[arg(long)]
    wing: Option<WingConfiguration>,

    /// Field assignment such as empty_weight_g=1100, keyed like the config file (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<String>,

    /// Print all step summaries and exit instead of prompting
    #[arg(long)]
    batch: bool,

    /// Step to start on (mission, weight, propulsion, wing, tail, layout).
    /// With --batch, print only that step.
    #[arg(long)]
    step: Option<WizardStep>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let state = initial_state(&cli)?;

    if cli.batch {
        if state.derived().is_underpowered {
            warn!(
                "Static thrust {:.0} g is below the {:.0} g flying weight",
                state.derived().static_thrust_g,
                state.derived().total_weight_g
            );
        }
        match cli.step {
            Some(step) => print_summary(&summarize(step, &state)),
            None => summarize_all(&state).iter().for_each(print_summary),
        }
        return Ok(());
    }

    println!("Wingwright - RC Airplane Sizing Wizard");
    println!("======================================");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), state)
        .starting_at(cli.step.unwrap_or_else(WizardStep::first))
        .run()
        .context("Interactive session failed")?;
    Ok(())
}

/// Config file, then mode, then wing, then field assignments.
fn initial_state(cli: &Cli) -> anyhow::Result<WizardState> {
    let config = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            info!("Loaded defaults from {}", path.display());
            config
        }
        None => WizardConfig::default(),
    };
    let mut state = config.into_state();

    if let Some(mode) = cli.mode {
        let recommended = state.select_competition_mode(mode);
        info!("Mode {} selected, recommending {}", mode, recommended);
    }

    if let Some(wing) = cli.wing {
        state.set_wing_configuration(wing);
        info!("Wing configuration set to {}", wing);
    }

    for assignment in &cli.assignments {
        let (field, value) = parse_assignment(assignment)?;
        state.set_field(field, value);
        info!("Set {} = {:?}", field, value);
    }

    Ok(state)
}

fn print_summary(summary: &StepSummary) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", summary.step);
    println!("═══════════════════════════════════════");
    print!("{}", summary);
}
