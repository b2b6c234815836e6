// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

use crate::dfa::Dfa;

impl Dfa {
    /// Check whether the automaton accepts the entire text.
    ///
    /// The walk starts at the start state and consumes one byte at a
    /// time. A missing transition terminates the walk early and rejects:
    /// a dead end can never reach an accepting state, so cutting the walk
    /// short is an optimization, not a separate rule. The empty text is
    /// accepted iff the start state itself is final.
    pub fn is_match(&self, text: &str) -> bool {
        let mut state = self.start_state();

        for &symbol in text.as_bytes() {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }

        self.is_final(state)
    }

    /// Check whether some prefix of the text is accepted.
    ///
    /// The final-state check runs at every walk position, including
    /// position 0 (the empty prefix), so a final start state answers
    /// `true` for any text. Returns as soon as any prefix qualifies;
    /// a missing transition before that means no prefix ever will.
    pub fn is_prefix_match(&self, text: &str) -> bool {
        let mut state = self.start_state();

        if self.is_final(state) {
            return true;
        }

        for &symbol in text.as_bytes() {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }

            if self.is_final(state) {
                return true;
            }
        }

        false
    }

    /// Extract the longest accepting prefix of the text.
    ///
    /// The walk is anchored at position 0. Every position at which a
    /// final state is reached is a candidate; the last one found during
    /// the linear scan wins, which is the longest-prefix-match policy of
    /// lexical analyzers. Reported matches always contain at least one
    /// byte; if no final state is ever reached the result is `None` and
    /// nothing is allocated.
    pub fn find_prefix(&self, text: &str) -> Option<Match> {
        let end = self.longest_accept(text.as_bytes(), 0)?;
        Some(Match::new(0, end, sub_string(text.as_bytes(), 0, end)))
    }

    /// Find the leftmost accepting substring of the text.
    ///
    /// Candidate start positions are tried from 0 upward; at each one the
    /// walk restarts from the start state and extends as far as it can,
    /// keeping the furthest final position (the longest match from that
    /// start). The first start position that yields a match wins and no
    /// further starts are scanned. The result carries the matched
    /// substring and the remainder of the text strictly after it.
    ///
    /// Restarting at every position makes the worst case quadratic in the
    /// text length; no automaton state is shared between starts.
    pub fn find(&self, text: &str) -> Option<ScanMatch> {
        self.scan(text, 0)
    }

    /// Iterate over all non-overlapping scan matches of the text, from
    /// left to right.
    pub fn find_iter<'a, 'b>(&'a self, text: &'b str) -> Matches<'a, 'b> {
        Matches::new(self, text)
    }

    fn scan(&self, text: &str, from: usize) -> Option<ScanMatch> {
        let bytes = text.as_bytes();

        for start in from..bytes.len() {
            if let Some(end) = self.longest_accept(bytes, start) {
                return Some(ScanMatch::new(
                    start,
                    end,
                    sub_string(bytes, start, end),
                    sub_string(bytes, end, bytes.len()),
                ));
            }
        }

        None
    }

    // Walk from the start state over `bytes[from..]` and return the
    // exclusive end position of the longest run that reaches a final
    // state, or `None` if no final state is reached before the walk dies.
    fn longest_accept(&self, bytes: &[u8], from: usize) -> Option<usize> {
        let mut state = self.start_state();
        let mut accepted_end = None;

        for (offset, &symbol) in bytes[from..].iter().enumerate() {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => break,
            }

            if self.is_final(state) {
                accepted_end = Some(from + offset + 1);
            }
        }

        accepted_end
    }
}

/// An accepting prefix of the searched text.
#[derive(Debug, PartialEq, Clone)]
pub struct Match {
    pub start: usize, // byte position (value included)
    pub end: usize,   // byte position (value excluded)
    pub value: String,
}

impl Match {
    pub fn new(start: usize, end: usize, value: String) -> Self {
        Match { start, end, value }
    }

    // the following methods are intended to
    // be compatible with the 'Match' API of crate 'regex':
    // https://docs.rs/regex/latest/regex/struct.Match.html

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// An accepting substring found anywhere in the searched text, together
/// with the remainder of the text strictly after it.
///
/// Both `value` and `remainder` are owning copies, independent of the
/// searched text's lifetime.
#[derive(Debug, PartialEq, Clone)]
pub struct ScanMatch {
    pub start: usize, // byte position (value included)
    pub end: usize,   // byte position (value excluded)
    pub value: String,
    pub remainder: String,
}

impl ScanMatch {
    pub fn new(start: usize, end: usize, value: String, remainder: String) -> Self {
        ScanMatch {
            start,
            end,
            value,
            remainder,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn remainder(&self) -> &str {
        &self.remainder
    }
}

/// An iterator over the successive scan matches of a text.
///
/// Each round resumes strictly after the previous match end. Scan
/// matches always contain at least one byte, so the cursor advances on
/// every item and the iteration terminates.
pub struct Matches<'a, 'b> {
    dfa: &'a Dfa,
    text: &'b str,
    last_position: usize,
}

impl<'a, 'b> Matches<'a, 'b> {
    fn new(dfa: &'a Dfa, text: &'b str) -> Self {
        Matches {
            dfa,
            text,
            last_position: 0,
        }
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = ScanMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let match_ = self.dfa.scan(self.text, self.last_position)?;
        self.last_position = match_.end;
        Some(match_)
    }
}

// Copy a byte range of the searched text into a fresh `String`. The
// automaton walks bytes, so a span may cut a multi-byte character; such
// bytes are replaced instead of aborting the extraction.
fn sub_string(bytes: &[u8], start: usize, end_excluded: usize) -> String {
    String::from_utf8_lossy(&bytes[start..end_excluded]).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Match, ScanMatch};
    use crate::{builder::DfaBuilder, dfa::Dfa};

    // the automaton of "(a|b)*abb"
    fn abb_dfa() -> Dfa {
        let mut builder = DfaBuilder::new(0, 4).unwrap();
        builder.set_final_state(3).unwrap();
        builder.add_transition(0, b'a', 1).unwrap();
        builder.add_transition(0, b'b', 0).unwrap();
        builder.add_transition(1, b'a', 1).unwrap();
        builder.add_transition(1, b'b', 2).unwrap();
        builder.add_transition(2, b'a', 1).unwrap();
        builder.add_transition(2, b'b', 3).unwrap();
        builder.add_transition(3, b'a', 1).unwrap();
        builder.add_transition(3, b'b', 0).unwrap();
        builder.build()
    }

    // the automaton of "a*bab", with a partial table: states 1, 2 and 3
    // have no transition for most symbols
    fn bab_dfa() -> Dfa {
        let mut builder = DfaBuilder::new(0, 4).unwrap();
        builder.set_final_state(3).unwrap();
        builder.add_transition(0, b'a', 0).unwrap();
        builder.add_transition(0, b'b', 1).unwrap();
        builder.add_transition(1, b'a', 2).unwrap();
        builder.add_transition(2, b'b', 3).unwrap();
        builder.build()
    }

    // the automaton of the single letter "a"
    fn single_a_dfa() -> Dfa {
        let mut builder = DfaBuilder::new(0, 2).unwrap();
        builder.set_final_state(1).unwrap();
        builder.add_transition(0, b'a', 1).unwrap();
        builder.build()
    }

    // one state, final, no transitions: the language of the empty string
    fn empty_string_dfa() -> Dfa {
        let mut builder = DfaBuilder::new(0, 1).unwrap();
        builder.set_final_state(0).unwrap();
        builder.build()
    }

    #[test]
    fn test_full_match() {
        let dfa = abb_dfa();

        assert!(dfa.is_match("abb"));
        assert!(dfa.is_match("babb"));
        assert!(dfa.is_match("abaabb"));

        // ends in state 2, which is not final
        assert!(!dfa.is_match("ab"));
        // passes through the final state and leaves it again
        assert!(!dfa.is_match("abbb"));
        assert!(!dfa.is_match("a"));
    }

    #[test]
    fn test_full_match_early_termination() {
        let dfa = bab_dfa();

        assert!(dfa.is_match("bab"));
        assert!(dfa.is_match("aaabab"));

        // the walk dies in state 2 on the second 'a'
        assert!(!dfa.is_match("abaabb"));
        // the walk dies in state 1 on 'b'
        assert!(!dfa.is_match("bba"));
        // consumed completely, but ends in a non-final state
        assert!(!dfa.is_match("aab"));
    }

    #[test]
    fn test_full_match_empty_input() {
        // accepted iff the start state is final
        assert!(!abb_dfa().is_match(""));
        assert!(empty_string_dfa().is_match(""));

        assert!(!empty_string_dfa().is_match("a"));
    }

    #[test]
    fn test_prefix_test() {
        let dfa = abb_dfa();

        // the prefix "abb" reaches the final state before the
        // unmodeled symbol is even considered
        assert!(dfa.is_prefix_match("abbx"));
        assert!(dfa.is_prefix_match("abb"));
        assert!(dfa.is_prefix_match("abbbbb"));

        assert!(!dfa.is_prefix_match("ab"));
        assert!(!dfa.is_prefix_match("ba"));
        assert!(!dfa.is_prefix_match(""));
    }

    #[test]
    fn test_prefix_test_early_termination() {
        let dfa = bab_dfa();

        assert!(dfa.is_prefix_match("babab"));

        // the walk dies before any final state is reached
        assert!(!dfa.is_prefix_match("bba"));
        assert!(!dfa.is_prefix_match("x"));
    }

    #[test]
    fn test_prefix_test_final_start_state() {
        let dfa = empty_string_dfa();

        // the empty prefix already qualifies
        assert!(dfa.is_prefix_match(""));
        assert!(dfa.is_prefix_match("xyz"));

        // the boolean and the extraction answer different questions:
        // no symbol-consuming prefix is accepted
        assert_eq!(dfa.find_prefix("xyz"), None);
    }

    #[test]
    fn test_find_prefix() {
        let dfa = abb_dfa();

        // the whole string is the longest accepting prefix, the walk
        // returns to the final state at the very end
        assert_eq!(
            dfa.find_prefix("abbabb"),
            Some(Match::new(0, 6, "abbabb".to_owned()))
        );

        // the final state is reached at position 3 and never again
        assert_eq!(
            dfa.find_prefix("abbaab"),
            Some(Match::new(0, 3, "abb".to_owned()))
        );

        assert_eq!(dfa.find_prefix("ab"), None);
        assert_eq!(dfa.find_prefix("xabb"), None);
        assert_eq!(dfa.find_prefix(""), None);
    }

    #[test]
    fn test_find_prefix_longest_policy() {
        let dfa = abb_dfa();

        // candidates end at 3 and 6, the longest wins
        let match_ = dfa.find_prefix("abbabbab").unwrap();
        assert_eq!(match_.start(), 0);
        assert_eq!(match_.end(), 6);
        assert_eq!(match_.as_str(), "abbabb");
        assert_eq!(match_.len(), 6);
        assert_eq!(match_.range(), 0..6);
    }

    #[test]
    fn test_find() {
        let dfa = abb_dfa();

        // the first accepting substring starts at index 2
        assert_eq!(
            dfa.find("xxabb"),
            Some(ScanMatch::new(2, 5, "abb".to_owned(), "".to_owned()))
        );

        assert_eq!(
            dfa.find("xabbyy"),
            Some(ScanMatch::new(1, 4, "abb".to_owned(), "yy".to_owned()))
        );

        assert_eq!(dfa.find("xyz"), None);
        assert_eq!(dfa.find("ab"), None);
        assert_eq!(dfa.find(""), None);
    }

    #[test]
    fn test_find_at_index_zero() {
        let dfa = single_a_dfa();

        // a match whose end position is the very first index is a
        // match; the option is the only found/not-found authority
        let match_ = dfa.find("abc").unwrap();
        assert_eq!(match_.start(), 0);
        assert_eq!(match_.end(), 1);
        assert_eq!(match_.as_str(), "a");
        assert_eq!(match_.remainder(), "bc");
    }

    #[test]
    fn test_find_longest_from_start() {
        let dfa = abb_dfa();

        // from start 0 the final state is reached at 3 and at 6; the
        // furthest one ends the match
        assert_eq!(
            dfa.find("abbabbxy"),
            Some(ScanMatch::new(0, 6, "abbabb".to_owned(), "xy".to_owned()))
        );
    }

    #[test]
    fn test_find_leftmost_policy() {
        let dfa = abb_dfa();

        // start 0 fails on 'x', start 1 succeeds; later starts are
        // not scanned
        assert_eq!(
            dfa.find("xabbabb"),
            Some(ScanMatch::new(1, 7, "abbabb".to_owned(), "".to_owned()))
        );

        // an earlier short match beats a later long one
        let dfa = single_a_dfa();
        assert_eq!(
            dfa.find("baa"),
            Some(ScanMatch::new(1, 2, "a".to_owned(), "a".to_owned()))
        );
    }

    #[test]
    fn test_find_iter() {
        let dfa = abb_dfa();
        let mut matches = dfa.find_iter("abb abb");

        assert_eq!(
            matches.next(),
            Some(ScanMatch::new(0, 3, "abb".to_owned(), " abb".to_owned()))
        );
        assert_eq!(
            matches.next(),
            Some(ScanMatch::new(4, 7, "abb".to_owned(), "".to_owned()))
        );
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_find_iter_adjacent_matches() {
        let dfa = single_a_dfa();
        let values: Vec<String> = dfa.find_iter("aab").map(|m| m.value).collect();

        assert_eq!(values, vec!["a".to_owned(), "a".to_owned()]);
    }

    #[test]
    fn test_idempotence() {
        let dfa = abb_dfa();
        let text = "xxabbabb";

        assert_eq!(dfa.is_match(text), dfa.is_match(text));
        assert_eq!(dfa.is_prefix_match(text), dfa.is_prefix_match(text));
        assert_eq!(dfa.find_prefix(text), dfa.find_prefix(text));
        assert_eq!(dfa.find(text), dfa.find(text));
    }

    #[test]
    fn test_match_accessors() {
        let match_ = Match::new(2, 5, "abb".to_owned());

        assert_eq!(match_.start(), 2);
        assert_eq!(match_.end(), 5);
        assert_eq!(match_.len(), 3);
        assert_eq!(match_.range(), 2..5);
        assert_eq!(match_.as_str(), "abb");
        assert!(!match_.is_empty());
    }

    #[test]
    fn test_scan_match_is_an_independent_copy() {
        let dfa = abb_dfa();

        let match_ = {
            let text = String::from("xxabbyy");
            dfa.find(&text).unwrap()
        };

        // the extracted values outlive the searched text
        assert_eq!(match_.as_str(), "abb");
        assert_eq!(match_.remainder(), "yy");
    }
}
