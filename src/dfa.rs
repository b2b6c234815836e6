// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// The identifier of an automaton state.
///
/// States form the dense range `[0, state_count)`.
pub type StateId = usize;

/// The number of input symbols, i.e. one table column per byte value.
pub const SYMBOL_COUNT: usize = 256;

/// A deterministic finite automaton over the byte alphabet.
///
/// The transition function is a dense row-major table with one row per
/// state and one column per byte value, so a lookup is a single index
/// operation. A missing transition is an explicit `None` entry rather
/// than a sentinel state number.
///
/// A `Dfa` is immutable once built (see `DfaBuilder`). All matching
/// operations are read-only walks over the table, so a single automaton
/// can serve any number of concurrent queries.
pub struct Dfa {
    state_count: usize,
    start_state: StateId,
    transitions: Vec<Option<StateId>>,
    final_states: Vec<bool>,
}

impl Dfa {
    pub(crate) fn new(
        state_count: usize,
        start_state: StateId,
        transitions: Vec<Option<StateId>>,
        final_states: Vec<bool>,
    ) -> Self {
        Dfa {
            state_count,
            start_state,
            transitions,
            final_states,
        }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    /// Look up the target of `(state, symbol)`.
    ///
    /// Returns `None` both for a missing transition and for a state
    /// outside the declared range, i.e. the lookup fails closed instead
    /// of producing an arbitrary state.
    #[inline]
    pub fn transition(&self, state: StateId, symbol: u8) -> Option<StateId> {
        if state >= self.state_count {
            return None;
        }
        self.transitions[state * SYMBOL_COUNT + symbol as usize]
    }

    /// Check whether `state` is an accepting state.
    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.get(state).copied().unwrap_or(false)
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "DFA with {} states, start state {}",
            self.state_count, self.start_state
        )?;

        for state in 0..self.state_count {
            let marker = if self.final_states[state] { "*" } else { " " };
            writeln!(f, "{}state {}", marker, state)?;

            for symbol in 0..SYMBOL_COUNT {
                if let Some(target) = self.transitions[state * SYMBOL_COUNT + symbol] {
                    let symbol = symbol as u8;
                    if symbol.is_ascii_graphic() {
                        writeln!(f, "    '{}' -> {}", symbol as char, target)?;
                    } else {
                        writeln!(f, "    0x{:02x} -> {}", symbol, target)?;
                    }
                }
            }
        }

        Ok(())
    }
}
