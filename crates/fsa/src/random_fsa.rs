use rand::Rng;

use crate::FiniteStateAutomaton;
use crate::FsaBuilder;

/// Generates a random automaton with the desired number of states and out
/// degree over the first `num_of_symbols` lowercase letters. States are named
/// `s0` up to `s{num_of_states - 1}` with `s0` as the start state, and every
/// state is marked final with small probability.
///
/// The out degree bounds the number of attempted transitions per state, so
/// partial transition tables arise naturally.
pub fn random_fsa(
    rng: &mut impl Rng,
    num_of_states: usize,
    num_of_symbols: u32,
    outdegree: usize,
) -> FiniteStateAutomaton {
    assert!(num_of_states > 0, "At least one state is required for the start state.");
    assert!(num_of_symbols > 0, "At least one symbol is required.");
    assert!(
        num_of_symbols <= 26,
        "Too many symbols requested, we only support alphabetic symbols."
    );

    // Introduce lower case letters for the symbols.
    let symbols: Vec<char> = (0..num_of_symbols)
        .map(|i| char::from_digit(i + 10, 36).expect("Radix is less than 37, so should not panic"))
        .collect();

    let mut builder = FsaBuilder::new();
    for symbol in &symbols {
        builder.add_symbol(*symbol);
    }

    let states: Vec<String> = (0..num_of_states).map(|index| format!("s{index}")).collect();
    for state in &states {
        builder.add_state(state);

        // Mark roughly a third of the states as final states.
        if rng.random_bool(0.3) {
            builder.add_final_state(state);
        }
    }
    builder.set_start_state(&states[0]);

    for state in &states {
        // Introduce outgoing transitions for this state based on the desired out degree.
        for _ in 0..rng.random_range(0..=outdegree) {
            let symbol = symbols[rng.random_range(0..symbols.len())];
            let destination = &states[rng.random_range(0..states.len())];

            builder.add_transition(state, symbol, destination);
        }
    }

    builder
        .finish()
        .expect("Randomly generated parts always form a valid automaton")
}
