// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_dfa::{Dfa, DfaBuilder, DfaError};

pub fn main() -> Result<(), DfaError> {
    let dfa = build_abb_dfa()?;
    let text = "ababbcabbb";

    // print the transition table
    println!("{}", dfa);

    // find one
    if let Some(m) = dfa.find(text) {
        println!("Found match: {}, remainder: {}", m.as_str(), m.remainder());
    } else {
        println!("No match found");
    }

    // find all
    for m in dfa.find_iter(text) {
        println!("Found match: {} at {:?}", m.as_str(), m.range());
    }

    // the longest accepting prefix
    if let Some(m) = dfa.find_prefix("abbabbx") {
        println!("Longest prefix: {}", m.as_str());
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
