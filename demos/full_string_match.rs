// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_dfa::{Dfa, DfaBuilder, DfaError};

// Matches one text against two hand-built automatons.
pub fn main() -> Result<(), DfaError> {
    let dfa1 = build_abb_dfa()?;
    let dfa2 = build_bab_dfa()?;

    let text = "abaabb";

    if dfa1.is_match(text) {
        println!("\"{}\" matches \"(a|b)*abb\"", text);
    } else {
        println!("\"{}\" does not match \"(a|b)*abb\"", text);
    }

    if dfa2.is_match(text) {
        println!("\"{}\" matches \"a*bab\"", text);
    } else {
        println!("\"{}\" does not match \"a*bab\"", text);
    }

    Ok(())
}

// the automaton of "(a|b)*abb"
fn build_abb_dfa() -> Result<Dfa, DfaError> {
    let mut builder = DfaBuilder::new(0, 4)?;
    builder.set_final_state(3)?;
    builder.add_transition(0, b'a', 1)?;
    builder.add_transition(0, b'b', 0)?;
    builder.add_transition(1, b'a', 1)?;
    builder.add_transition(1, b'b', 2)?;
    builder.add_transition(2, b'a', 1)?;
    builder.add_transition(2, b'b', 3)?;
    builder.add_transition(3, b'a', 1)?;
    builder.add_transition(3, b'b', 0)?;
    Ok(builder.build())
}

// the automaton of "a*bab", the table is partial
fn build_bab_dfa() -> Result<Dfa, DfaError> {
    let mut builder = DfaBuilder::new(0, 4)?;
    builder.set_final_state(3)?;
    builder.add_transition(0, b'a', 0)?;
    builder.add_transition(0, b'b', 1)?;
    builder.add_transition(1, b'a', 2)?;
    builder.add_transition(2, b'b', 3)?;
    Ok(builder.build())
}
