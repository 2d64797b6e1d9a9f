use std::collections::HashMap;
use std::collections::HashSet;
use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::debug;
use log::info;
use thiserror::Error;

use refa_utilities::RefaError;

use crate::FiniteStateAutomaton;

/// The conventional file names of a tabular automaton description inside a
/// machine directory.
pub const STATES_FILE_NAME: &str = "states.txt";
pub const FINAL_STATES_FILE_NAME: &str = "finalStates.txt";
pub const START_STATE_FILE_NAME: &str = "startState.txt";
pub const ALPHABET_FILE_NAME: &str = "alphabet.txt";
pub const TRANSITION_TABLE_FILE_NAME: &str = "transitionTable.txt";

/// The destination field that declares the explicit absence of a transition.
/// Such lines contribute nothing to the transition table.
const NO_TRANSITION_MARKER: &str = "NULL";

#[derive(Error, Debug)]
pub enum IOError {
    #[error("Invalid transition '{0}', expected 'source,symbol,destination'")]
    InvalidTransition(String),

    #[error("Invalid symbol '{0}', expected a single character")]
    InvalidSymbol(String),

    #[error("Missing start state, expected at least one non-empty line")]
    MissingStartState,
}

/// Reads a set of newline separated state names from the given reader.
/// Whitespace around every name is stripped and blank lines are skipped.
pub fn read_states(reader: impl Read) -> Result<HashSet<String>, RefaError> {
    let mut states = HashSet::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            states.insert(name.to_string());
        }
    }

    Ok(states)
}

/// Reads the start state, which is the first non-empty line of the given
/// reader.
pub fn read_start_state(reader: impl Read) -> Result<String, RefaError> {
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }

    Err(IOError::MissingStartState.into())
}

/// Reads a set of newline separated single character symbols from the given
/// reader. Blank lines are skipped.
pub fn read_alphabet(reader: impl Read) -> Result<HashSet<char>, RefaError> {
    let mut alphabet = HashSet::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let text = line.trim();
        if !text.is_empty() {
            alphabet.insert(parse_symbol(text)?);
        }
    }

    Ok(alphabet)
}

/// Reads the transition table from the given reader, with one
/// `source,symbol,destination` rule per line. Lines whose destination is the
/// explicit no-transition marker are excluded from the table, and a repeated
/// (source, symbol) pair is replaced by the later line.
pub fn read_transitions(reader: impl Read) -> Result<HashMap<String, HashMap<char, String>>, RefaError> {
    let mut transitions: HashMap<String, HashMap<char, String>> = HashMap::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if let Some((source, symbol, destination)) = parse_transition(text)? {
            debug!("Read transition {source} --[{symbol}]-> {destination}");

            transitions.entry(source).or_default().insert(symbol, destination);
        }
    }

    Ok(transitions)
}

/// Reads an automaton from the five readers that make up its tabular
/// description, and validates the result.
pub fn read_fsa_parts(
    states: impl Read,
    final_states: impl Read,
    start_state: impl Read,
    alphabet: impl Read,
    transitions: impl Read,
) -> Result<FiniteStateAutomaton, RefaError> {
    let fsa = FiniteStateAutomaton::new(
        read_states(states)?,
        read_states(final_states)?,
        read_start_state(start_state)?,
        read_alphabet(alphabet)?,
        read_transitions(transitions)?,
    )?;

    Ok(fsa)
}

/// Reads an automaton from the conventionally named description files inside
/// the given machine directory.
pub fn read_fsa(path: &Path) -> Result<FiniteStateAutomaton, RefaError> {
    info!("Reading FSA from {}...", path.display());

    let fsa = read_fsa_parts(
        File::open(path.join(STATES_FILE_NAME))?,
        File::open(path.join(FINAL_STATES_FILE_NAME))?,
        File::open(path.join(START_STATE_FILE_NAME))?,
        File::open(path.join(ALPHABET_FILE_NAME))?,
        File::open(path.join(TRANSITION_TABLE_FILE_NAME))?,
    )?;

    info!("Finished reading FSA");
    Ok(fsa)
}

/// Writes the tabular description of the given automaton into the given
/// machine directory, creating the directory when necessary. Lines are sorted
/// such that the output is reproducible, and no-transition markers are never
/// written.
pub fn write_fsa(path: &Path, fsa: &FiniteStateAutomaton) -> Result<(), RefaError> {
    info!("Writing FSA to {}...", path.display());
    create_dir_all(path)?;

    write_lines(&path.join(STATES_FILE_NAME), fsa.states().iter().sorted())?;
    write_lines(&path.join(FINAL_STATES_FILE_NAME), fsa.final_states().iter().sorted())?;
    write_lines(&path.join(START_STATE_FILE_NAME), [fsa.start_state()])?;
    write_lines(&path.join(ALPHABET_FILE_NAME), fsa.alphabet().iter().sorted())?;
    write_lines(
        &path.join(TRANSITION_TABLE_FILE_NAME),
        fsa.iter_transitions()
            .map(|(source, symbol, destination)| format!("{source},{symbol},{destination}"))
            .sorted(),
    )?;

    Ok(())
}

/// Parses a single character symbol field.
fn parse_symbol(text: &str) -> Result<char, IOError> {
    let mut characters = text.chars();
    match (characters.next(), characters.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(IOError::InvalidSymbol(text.to_string())),
    }
}

/// Parses a `source,symbol,destination` rule with whitespace stripped around
/// every field. Returns `None` for rules carrying the no-transition marker.
fn parse_transition(line: &str) -> Result<Option<(String, char, String)>, IOError> {
    let mut fields = line.split(',');
    let (Some(source), Some(symbol), Some(destination), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(IOError::InvalidTransition(line.to_string()));
    };

    let destination = destination.trim();
    if destination == NO_TRANSITION_MARKER {
        return Ok(None);
    }

    Ok(Some((
        source.trim().to_string(),
        parse_symbol(symbol.trim())?,
        destination.to_string(),
    )))
}

/// Writes the given lines to a new file at the given path, buffered
/// internally with a `BufWriter`.
fn write_lines<I>(path: &Path, lines: I) -> Result<(), RefaError>
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }

    Ok(())
}
