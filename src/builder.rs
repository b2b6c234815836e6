// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    dfa::{Dfa, StateId, SYMBOL_COUNT},
    error::DfaError,
};

/// Builds an immutable `Dfa`.
///
/// Every argument is validated against the declared state range when it
/// is supplied, so a successfully built automaton always satisfies the
/// model invariants: the start state is in range, the transition table
/// is a pure function, and the final-state set is a subset of the
/// states.
///
/// ```
/// use regex_dfa::DfaBuilder;
///
/// // the automaton of "(a|b)*abb"
/// let mut builder = DfaBuilder::new(0, 4)?;
/// builder.set_final_state(3)?;
/// builder.add_transition(0, b'a', 1)?;
/// builder.add_transition(0, b'b', 0)?;
/// builder.add_transition(1, b'a', 1)?;
/// builder.add_transition(1, b'b', 2)?;
/// builder.add_transition(2, b'a', 1)?;
/// builder.add_transition(2, b'b', 3)?;
/// builder.add_transition(3, b'a', 1)?;
/// builder.add_transition(3, b'b', 0)?;
/// let dfa = builder.build();
///
/// assert!(dfa.is_match("abb"));
/// # Ok::<(), regex_dfa::DfaError>(())
/// ```
pub struct DfaBuilder {
    state_count: usize,
    start_state: StateId,
    transitions: Vec<Option<StateId>>,
    final_states: Vec<bool>,
}

impl DfaBuilder {
    /// Declare an automaton with states `[0, state_count)` and the
    /// specified start state.
    pub fn new(start_state: StateId, state_count: usize) -> Result<Self, DfaError> {
        if state_count == 0 {
            return Err(DfaError::EmptyStateSet);
        }

        if start_state >= state_count {
            return Err(DfaError::StateOutOfRange {
                state: start_state,
                state_count,
            });
        }

        Ok(DfaBuilder {
            state_count,
            start_state,
            transitions: vec![None; state_count * SYMBOL_COUNT],
            final_states: vec![false; state_count],
        })
    }

    /// Add the transition `(from, symbol) -> to`.
    ///
    /// A later addition for the same `(from, symbol)` pair replaces the
    /// earlier one, keeping the table deterministic.
    pub fn add_transition(
        &mut self,
        from: StateId,
        symbol: u8,
        to: StateId,
    ) -> Result<(), DfaError> {
        self.check_state(from)?;
        self.check_state(to)?;

        self.transitions[from * SYMBOL_COUNT + symbol as usize] = Some(to);
        Ok(())
    }

    /// Mark `state` as an accepting state.
    pub fn set_final_state(&mut self, state: StateId) -> Result<(), DfaError> {
        self.check_state(state)?;

        self.final_states[state] = true;
        Ok(())
    }

    /// Finish construction. Infallible: every invariant was checked when
    /// the corresponding argument was supplied.
    pub fn build(self) -> Dfa {
        Dfa::new(
            self.state_count,
            self.start_state,
            self.transitions,
            self.final_states,
        )
    }

    fn check_state(&self, state: StateId) -> Result<(), DfaError> {
        if state >= self.state_count {
            Err(DfaError::StateOutOfRange {
                state,
                state_count: self.state_count,
            })
        } else {
            Ok(())
        }
    }
}
