#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `LOCKSTEP_DEMO_*`
//! prefix.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
LockStep Demo — trace a program one step at a time

USAGE:
    lockstep-demo [OPTIONS]

OPTIONS:
    --exercise=NAME      Exercise to run (default: packing-list)
    --reveal-after=N     Reveal the answer after N wrong tries (default: 0,
                         meaning never reveal)
    --transcript=PATH    Write the attempt transcript to PATH as JSON
    --plain              Disable colored verdict feedback
    --help, -h           Show this help message
    --version, -V        Show version

EXERCISES:
    packing-list    Build a packing list from a yes/no travel question
    summing-loop    Accumulate three typed numbers in a for loop

ANSWERING:
    Line questions take a line number, value questions take a literal
    (42, \"text\", true), input questions take anything, and notes just
    take Enter. Wrong answers keep the walk in place; end-of-input
    abandons the walk.

ENVIRONMENT VARIABLES:
    LOCKSTEP_DEMO_EXERCISE       Override --exercise
    LOCKSTEP_DEMO_REVEAL_AFTER   Override --reveal-after
    LOCKSTEP_DEMO_TRANSCRIPT     Override --transcript
    LOCKSTEP_DEMO_LOG            Tracing filter for stderr diagnostics";

/// Parsed command-line options.
pub struct Opts {
    /// Name of the built-in exercise to run.
    pub exercise: String,
    /// Reveal the authored answer after this many wrong tries; 0 never
    /// reveals.
    pub reveal_after: u32,
    /// Where to write the transcript JSON, if anywhere.
    pub transcript: Option<PathBuf>,
    /// Whether verdict feedback is colored.
    pub color: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            exercise: "packing-list".into(),
            reveal_after: 0,
            transcript: None,
            color: true,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("LOCKSTEP_DEMO_EXERCISE") {
            opts.exercise = val;
        }
        if let Ok(val) = env::var("LOCKSTEP_DEMO_REVEAL_AFTER")
            && let Ok(n) = val.parse()
        {
            opts.reveal_after = n;
        }
        if let Ok(val) = env::var("LOCKSTEP_DEMO_TRANSCRIPT") {
            opts.transcript = Some(PathBuf::from(val));
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("lockstep-demo {VERSION}");
                    process::exit(0);
                }
                "--plain" => {
                    opts.color = false;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--exercise=") {
                        opts.exercise = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--reveal-after=") {
                        match val.parse() {
                            Ok(n) => opts.reveal_after = n,
                            Err(_) => {
                                eprintln!("Invalid --reveal-after value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--transcript=") {
                        opts.transcript = Some(PathBuf::from(val));
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
            i += 1;
        }

        opts
    }
}
