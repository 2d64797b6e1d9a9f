use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidAutomatonError {
    #[error("Missing start state")]
    MissingStartState,

    #[error("Start state '{0}' is not in the set of states")]
    UnknownStartState(String),

    #[error("Final state '{0}' is not in the set of states")]
    UnknownFinalState(String),

    #[error("Source state '{0}' of a transition is not in the set of states")]
    UnknownSourceState(String),

    #[error("Destination state '{0}' of a transition is not in the set of states")]
    UnknownDestinationState(String),
}

/// Represents a deterministic finite state automaton over single character
/// symbols with a possibly partial transition table.
///
/// The automaton is immutable after construction, and two automata are equal
/// iff their states, final states, start state, alphabet and transition
/// tables are equal as sets and mappings.
#[derive(PartialEq, Eq, Clone)]
pub struct FiniteStateAutomaton {
    states: HashSet<String>,
    final_states: HashSet<String>,
    start_state: String,
    alphabet: HashSet<char>,

    /// Maps every state to its outgoing transitions per symbol. A missing
    /// entry means that no transition is defined for that pair.
    transitions: HashMap<String, HashMap<char, String>>,
}

impl FiniteStateAutomaton {
    /// Creates a new automaton from the given parts.
    ///
    /// Returns an error when the start state, a final state or an endpoint of
    /// a transition is not a member of the set of states. Transition symbols
    /// are not required to be in the alphabet since undeclared symbols can
    /// never be more than a lookup miss.
    pub fn new(
        states: HashSet<String>,
        final_states: HashSet<String>,
        start_state: String,
        alphabet: HashSet<char>,
        transitions: HashMap<String, HashMap<char, String>>,
    ) -> Result<FiniteStateAutomaton, InvalidAutomatonError> {
        if !states.contains(&start_state) {
            return Err(InvalidAutomatonError::UnknownStartState(start_state));
        }

        if let Some(state) = final_states.iter().find(|state| !states.contains(*state)) {
            return Err(InvalidAutomatonError::UnknownFinalState(state.clone()));
        }

        for (source, row) in &transitions {
            if !states.contains(source) {
                return Err(InvalidAutomatonError::UnknownSourceState(source.clone()));
            }

            if let Some(destination) = row.values().find(|destination| !states.contains(*destination)) {
                return Err(InvalidAutomatonError::UnknownDestinationState(destination.clone()));
            }
        }

        Ok(FiniteStateAutomaton {
            states,
            final_states,
            start_state,
            alphabet,
            transitions,
        })
    }

    /// Creates a new automaton that shares the states, alphabet, start state
    /// and transition table of this automaton, but has the given final
    /// states. Useful to derive related languages from one base table.
    pub fn with_final_states(
        &self,
        final_states: HashSet<String>,
    ) -> Result<FiniteStateAutomaton, InvalidAutomatonError> {
        FiniteStateAutomaton::new(
            self.states.clone(),
            final_states,
            self.start_state.clone(),
            self.alphabet.clone(),
            self.transitions.clone(),
        )
    }

    /// Returns the destination of the transition for the given state and
    /// symbol, or `None` when no transition is defined for that pair.
    pub fn transition(&self, state: &str, symbol: char) -> Option<&str> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(&symbol))
            .map(String::as_str)
    }

    /// Returns true iff the given state is a final state.
    pub fn is_final_state(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }

    /// Returns the name of the start state.
    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    /// Returns the set of states.
    pub fn states(&self) -> &HashSet<String> {
        &self.states
    }

    /// Returns the set of final states.
    pub fn final_states(&self) -> &HashSet<String> {
        &self.final_states
    }

    /// Returns the set of input symbols.
    pub fn alphabet(&self) -> &HashSet<char> {
        &self.alphabet
    }

    /// Returns the transition table.
    pub fn transitions(&self) -> &HashMap<String, HashMap<char, String>> {
        &self.transitions
    }

    /// Iterates over all transitions as (source, symbol, destination) tuples.
    pub fn iter_transitions(&self) -> impl Iterator<Item = (&str, char, &str)> + '_ {
        self.transitions.iter().flat_map(|(source, row)| {
            row.iter()
                .map(move |(symbol, destination)| (source.as_str(), *symbol, destination.as_str()))
        })
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }
}

impl fmt::Display for FiniteStateAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print some information about the automaton.
        writeln!(f, "Number of states: {}", self.num_of_states())?;
        writeln!(f, "Number of final states: {}", self.final_states.len())?;
        writeln!(f, "Number of symbols: {}", self.alphabet.len())?;
        writeln!(f, "Number of transitions: {}", self.num_of_transitions())?;
        write!(f, "Start state: {}", self.start_state)
    }
}

impl fmt::Debug for FiniteStateAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "Final states: {{{}}}", self.final_states.iter().sorted().format(", "))?;

        for (source, symbol, destination) in self.iter_transitions().sorted() {
            writeln!(f, "{source} --[{symbol}]-> {destination}")?;
        }

        Ok(())
    }
}
