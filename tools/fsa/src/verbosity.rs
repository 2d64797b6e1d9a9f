use clap::Args;
use log::LevelFilter;

/// The verbosity flags shared by all subcommands.
#[derive(Args, Debug)]
pub struct VerbosityFlag {
    #[arg(short, long, global = true, help = "Set the verbosity to quiet")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Set the verbosity to verbose")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Set the verbosity to debug")]
    debug: bool,

    #[arg(short, long, global = true, help = "Set the verbosity to trace")]
    trace: bool,
}

impl VerbosityFlag {
    /// Returns the log level filter corresponding to the given verbosity
    /// flags, where quiet takes precedence over the other flags.
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Info
        }
    }
}
