use refa_fsa::FiniteStateAutomaton;

/// The recognition mode determines which part of the input has to be accepted
/// by the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RecognitionMode {
    /// The entire input must be accepted.
    Membership,
    /// Some suffix of the input, including the empty suffix, must be accepted.
    Endswith,
    /// Some contiguous substring of the input, including the empty substring,
    /// must be accepted.
    Substring,
}

/// Returns true iff the automaton recognizes the input under the given mode.
///
/// Recognition is total. A missing transition, also for symbols outside of the
/// declared alphabet, rejects the current walk instead of raising an error; the
/// suffix and substring modes then retry one character further into the input.
///
/// # Examples
///
/// ```
/// use refa_fsa::FsaBuilder;
/// use refa_recognition::RecognitionMode;
/// use refa_recognition::recognize;
///
/// let mut builder = FsaBuilder::new();
/// builder.add_state("even");
/// builder.add_state("odd");
/// builder.add_final_state("even");
/// builder.set_start_state("even");
/// builder.add_symbol('a');
/// builder.add_symbol('b');
/// builder.add_transition("even", 'a', "odd");
/// builder.add_transition("odd", 'b', "even");
/// let fsa = builder.finish().unwrap();
///
/// assert!(recognize(&fsa, "abab", RecognitionMode::Membership));
/// assert!(!recognize(&fsa, "aba", RecognitionMode::Membership));
/// assert!(recognize(&fsa, "aba", RecognitionMode::Endswith));
/// ```
pub fn recognize(fsa: &FiniteStateAutomaton, input: &str, mode: RecognitionMode) -> bool {
    match mode {
        RecognitionMode::Membership => is_member(fsa, input),
        RecognitionMode::Endswith => ends_with_member(fsa, input),
        RecognitionMode::Substring => contains_member(fsa, input),
    }
}

/// Returns true iff the automaton accepts the whole input, walking from the
/// start state in a single pass.
fn is_member(fsa: &FiniteStateAutomaton, input: &str) -> bool {
    let mut current = fsa.start_state();

    for symbol in input.chars() {
        match fsa.transition(current, symbol) {
            Some(destination) => current = destination,
            None => {
                return false;
            }
        }
    }

    fsa.is_final_state(current)
}

/// Returns true iff the automaton accepts some suffix of the input.
fn ends_with_member(fsa: &FiniteStateAutomaton, input: &str) -> bool {
    // The empty string is a suffix of every input.
    if is_member(fsa, "") {
        return true;
    }

    let mut suffix = input;
    loop {
        if is_member(fsa, suffix) {
            return true;
        }

        // Drop the leading character and retry on the remaining suffix.
        let mut characters = suffix.chars();
        if characters.next().is_none() {
            return false;
        }

        suffix = characters.as_str();
    }
}

/// Returns true iff the automaton accepts some contiguous substring of the
/// input, by searching for an accepted prefix at every start offset.
fn contains_member(fsa: &FiniteStateAutomaton, input: &str) -> bool {
    let mut tail = input;
    loop {
        if has_member_prefix(fsa, tail) {
            return true;
        }

        let mut characters = tail.chars();
        if characters.next().is_none() {
            return false;
        }

        tail = characters.as_str();
    }
}

/// Returns true iff the automaton accepts some prefix of the input, including
/// the empty prefix.
fn has_member_prefix(fsa: &FiniteStateAutomaton, input: &str) -> bool {
    let mut current = fsa.start_state();

    for symbol in input.chars() {
        if fsa.is_final_state(current) {
            return true;
        }

        match fsa.transition(current, symbol) {
            Some(destination) => current = destination,
            None => {
                return false;
            }
        }
    }

    fsa.is_final_state(current)
}
