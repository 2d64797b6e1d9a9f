use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use crate::FiniteStateAutomaton;
use crate::InvalidAutomatonError;

/// Collects the parts of a [FiniteStateAutomaton] incrementally. This is used
/// by the description readers, and to define machines in code without
/// spelling out the collection types.
///
/// The builder never registers states on its own: the endpoints of added
/// transitions and the added final states must also be declared with
/// [FsaBuilder::add_state], otherwise [FsaBuilder::finish] reports the
/// violation.
#[derive(Default)]
pub struct FsaBuilder {
    states: HashSet<String>,
    final_states: HashSet<String>,
    start_state: Option<String>,
    alphabet: HashSet<char>,
    transitions: HashMap<String, HashMap<char, String>>,
}

impl FsaBuilder {
    /// Initializes a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a state with the given name.
    pub fn add_state(&mut self, name: &str) {
        self.states.insert(name.to_string());
    }

    /// Marks the state with the given name as a final state.
    pub fn add_final_state(&mut self, name: &str) {
        self.final_states.insert(name.to_string());
    }

    /// Sets the start state.
    pub fn set_start_state(&mut self, name: &str) {
        self.start_state = Some(name.to_string());
    }

    /// Adds the given symbol to the alphabet.
    pub fn add_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Adds a transition from the given source to the given destination.
    ///
    /// Adding a second transition for the same (source, symbol) pair replaces
    /// the earlier one, keeping the table deterministic.
    pub fn add_transition(&mut self, source: &str, symbol: char, destination: &str) {
        self.transitions
            .entry(source.to_string())
            .or_default()
            .insert(symbol, destination.to_string());
    }

    /// Returns the number of transitions added to the builder.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    /// Finalizes the builder and returns the constructed automaton.
    pub fn finish(self) -> Result<FiniteStateAutomaton, InvalidAutomatonError> {
        let start_state = self.start_state.ok_or(InvalidAutomatonError::MissingStartState)?;

        FiniteStateAutomaton::new(
            self.states,
            self.final_states,
            start_state,
            self.alphabet,
            self.transitions,
        )
    }
}

impl fmt::Debug for FsaBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transitions:")?;
        for (source, row) in &self.transitions {
            for (symbol, destination) in row {
                writeln!(f, "    {source} --[{symbol}]-> {destination}")?;
            }
        }
        Ok(())
    }
}
