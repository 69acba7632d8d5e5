#![forbid(unsafe_code)]

//! Binary entry point: pick an exercise, walk it on the terminal,
//! optionally write the transcript out as JSON.

use std::fs;
use std::io;
use std::process;

use crossterm::tty::IsTty;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lockstep::AttemptPolicy;
use lockstep_demo::cli::Opts;
use lockstep_demo::driver::Driver;
use lockstep_demo::exercises;

fn main() {
    let opts = Opts::parse();
    init_tracing();
    if let Err(err) = run(opts) {
        eprintln!("lockstep-demo: {err}");
        process::exit(1);
    }
}

/// Route tracing to stderr so it never interleaves with the walk itself.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOCKSTEP_DEMO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(opts: Opts) -> lockstep::Result<()> {
    let Some(exercise) = exercises::by_name(&opts.exercise) else {
        eprintln!("unknown exercise: {}", opts.exercise);
        eprintln!("available: {}", exercises::NAMES.join(", "));
        process::exit(1);
    };
    let exercise = exercise?;
    let policy = match opts.reveal_after {
        0 => AttemptPolicy::Strict,
        limit => AttemptPolicy::RevealAfter(limit),
    };
    debug!(exercise = %opts.exercise, ?policy, "starting walk");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = opts.color && stdout.is_tty();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), color);
    let session = driver.run(exercise, policy)?;

    if let Some(path) = opts.transcript {
        let json = session
            .transcript()
            .to_json()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&path, json)?;
        eprintln!("transcript written to {}", path.display());
    }
    Ok(())
}
