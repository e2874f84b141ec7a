use strfuzz::{instance_with_config, Dialect, InstanceConfig};
use std::time::{SystemTime, UNIX_EPOCH};
use similar::TextDiff;
use std::path::PathBuf;
use anyhow::Result;
use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use clap::Parser;
use toml;

mod run;
use crate::run::run;

#[derive(Parser, Debug)]
struct Args {
    /// Path to the solver under test
    target: PathBuf,
    /// Path to the reference solver
    gold: PathBuf,
    /// Directory to save mismatching instances into
    out: PathBuf,

    /// Path to .toml configuration for the instance generator
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Dialect to render instances in
    #[arg(short, long, default_value_t = Dialect::Smt25String)]
    dialect: Dialect,
    /// Number of instances to try; runs forever when absent
    #[arg(short, long)]
    num_trials: Option<usize>,
    /// How long to wait before timing out a solver run
    #[arg(short, long)]
    timeout: Option<u64>,
    /// Seed for a reproducible instance stream
    #[arg(short, long)]
    seed: Option<u64>,
}

enum Termination {
    Match,
    Mismatch(String)
}

struct TrialResult {
    termination: Termination,
    both_ended: bool,
    both_clean: bool
}

fn trial<R: Rng>(cli: &Args, configuration: &InstanceConfig, rng: &mut R) -> Result<TrialResult> {
    // fuzz!
    let instance = instance_with_config(rng, cli.dialect, configuration)?;
    // run them!
    let them = run(
        cli.gold.to_str().expect("Can't coerce gold solver path into string."),
        &instance,
        cli.timeout
    )?;
    let us = run(
        cli.target.to_str().expect("Can't coerce target solver path into string."),
        &instance,
        cli.timeout
    )?;
    // diff them!
    let diff = TextDiff::from_lines(
        &us.output,
        &them.output
    );
    // 1.0 => complete match; anything else, the instance is worth keeping
    Ok(
        TrialResult {
            termination:
            if diff.ratio() == 1.0 {
                Termination::Match
            } else {
                Termination::Mismatch(instance)
            },
            both_ended: them.termination && us.termination,
            both_clean: them.clean_exit && us.clean_exit
        }
    )
}

fn main() -> Result<()> {
    let cli = Args::parse();

    // parse config or take default
    let configuration = if let Some(ref path) = cli.config {
        // check if path exists, otherwise panic before
        // throwing weird parsing errors
        assert!(path.exists(), "Configuration path doesn't exist!");

        toml::from_str::<InstanceConfig>(&fs::read_to_string(path)?)?
    } else {
        InstanceConfig::default()
    };

    // Check that the output path exists
    assert!(cli.out.is_dir(), "Output path must be an existing directory!");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Counters for failure kinds
    let mut num_mismatches = 0;
    let mut num_hangs = 0;
    let mut num_crashes = 0;

    // perform k runs
    let mut trials = 0;
    while cli.num_trials.map_or(true, |n| trials < n) {
        trials += 1;

        let result = trial(&cli, &configuration, &mut rng)?;
        if !result.both_ended {
            num_hangs += 1;
        }
        if !result.both_clean {
            num_crashes += 1;
        }
        if let Termination::Mismatch(instance) = result.termination {
            num_mismatches += 1;
            // for uniquely writing failures based on time
            let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
            let dest = cli.out.join(format!("mismatch-{}-{}.smt25", now, trials));
            fs::write(&dest, instance)?;
            eprintln!("trial {}: solvers disagree, instance saved to {}", trials, dest.display());
        }
    }

    println!(
        "{} trials: {} mismatches, {} hangs, {} crashes",
        trials, num_mismatches, num_hangs, num_crashes
    );
    Ok(())
}
