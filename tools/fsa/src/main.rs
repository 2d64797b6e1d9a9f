use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

use refa_fsa::read_fsa;
use refa_recognition::RecognitionMode;
use refa_recognition::recognize;
use refa_utilities::RefaError;
use refa_utilities::Timing;

use crate::verbosity::VerbosityFlag;

mod verbosity;

#[derive(clap::Parser, Debug)]
#[command(
    name = "refa-fsa",
    version,
    about = "A command line tool for finite state automata"
)]
struct Cli {
    #[command(flatten)]
    verbosity: VerbosityFlag,

    #[command(subcommand)]
    commands: Option<Commands>,

    #[arg(long, global = true)]
    timings: bool,
}

/// Defines the subcommands for this tool.
#[derive(Debug, Subcommand)]
enum Commands {
    Info(InfoArgs),
    Recognize(RecognizeArgs),
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints information related to the given automaton")]
struct InfoArgs {
    /// The directory containing the automaton description files.
    directory: String,
}

#[derive(clap::Args, Debug)]
#[command(about = "Decides whether the automaton recognizes the input under the given mode")]
struct RecognizeArgs {
    mode: RecognitionMode,

    /// The directory containing the automaton description files.
    directory: String,

    input: String,
}

fn main() -> Result<ExitCode, RefaError> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    let timing = Timing::new();

    if let Some(command) = cli.commands {
        match command {
            Commands::Info(args) => {
                let mut timer = timing.start("reading");
                let fsa = read_fsa(Path::new(&args.directory))?;
                timer.finish();

                println!("{fsa}");
                log::debug!("{fsa:?}");
            }
            Commands::Recognize(args) => {
                let mut timer = timing.start("reading");
                let fsa = read_fsa(Path::new(&args.directory))?;
                timer.finish();

                let mut timer = timing.start("recognition");
                let accepted = recognize(&fsa, &args.input, args.mode);
                timer.finish();

                println!("{accepted}");
            }
        }
    }

    if cli.timings {
        timing.print();
    }

    Ok(ExitCode::SUCCESS)
}
