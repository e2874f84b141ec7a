use anyhow::{Result, anyhow};

use subprocess::{Popen, PopenConfig, ExitStatus, Redirection};
use tempfile::Builder;
use std::{fs, time::Duration};

/// Result of one solver invocation.
pub struct RunResult {
    /// The instance text the solver was given.
    #[allow(dead_code)]
    pub input: String,
    /// Whatever the solver printed on stdout.
    pub output: String,
    /// `true` if the solver exited with status 0.
    pub clean_exit: bool,
    /// `true` if the solver finished before the timeout.
    pub termination: bool,
}

/// Run a solver on an instance for a bounded number of seconds.
///
/// # Arguments
/// - `solver`: path to the solver binary to invoke
/// - `instance`: the *raw problem text*, not a file, to hand it
/// - `timeout`: number of seconds before we kill the solver; defaults to 5
///
/// # Notes
/// We will *ignore* stderr and *return* stdout.
///
/// # Returns
/// The solver's output, plus whether it exited at all and whether it
/// exited cleanly.
pub fn run(solver: &str, instance: &str, timeout: Option<u64>) -> Result<RunResult> {
    // Dump the instance to a temporary file; some solvers sniff the
    // extension to pick their input language
    let file = Builder::new().suffix(".smt25").tempfile()?;
    fs::write(&file, instance)?;

    // Run the solver for a bounded number of seconds
    let mut p = Popen::create(
        &[solver,
          file.path().to_str().ok_or(
              anyhow!("Unable to coerce temp path into string."))?],
        PopenConfig {
            stdout: Redirection::Pipe,
            ..Default::default()
        },
    )?;

    // Obtain the output from the standard streams.
    let mut communicator = p.communicate_start(None);
    communicator = communicator.limit_time(Duration::from_secs(timeout.unwrap_or(5)));
    let read = communicator.read_string();

    let output = (if let Ok((res, _)) = read {
        res
    } else if let Err(err) = read {
        err.capture.0.map(|f| String::from_utf8_lossy(&f).into_owned())
    } else {
        unreachable!()
    }).ok_or(anyhow!("Unable to parse the output streams from process."))?;

    let (termination, clean_exit) =
        if let Some(exit_status) = p.poll() {
            match exit_status {
                ExitStatus::Exited(s) => (true, s == 0),
                _ => (true, false)
            }
        } else {
            p.terminate()?;
            (false, true)
        };

    Ok(RunResult {
        input: instance.into(),
        output,
        clean_exit,
        termination
    })
}
