//! Honeycomb Lexicon
//!
//! A character trie answering two questions in time linear in the query:
//! is this string a stored word, and is it a prefix of one.
//!
//! Children are keyed by arbitrary `char`, so any alphabet works and sparse
//! branches cost nothing. No case folding or other normalization happens;
//! words are stored exactly as inserted.
//!
//! The empty string is a prefix of everything but never a word. Inserting
//! `""` marks the root terminal, which no lookup reports.

mod trie;

pub use trie::{Cursor, Dictionary, TrieNode};
