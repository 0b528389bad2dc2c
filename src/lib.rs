//! # gherkin-spans
//!
//! Lexical span classifier for Gherkin feature files.
//!
//! The engine assigns a [`TokenKind`] to every meaningful span of a feature
//! file so that a rendering surface can style each category distinctly. It is
//! a best-effort, single-pass-per-line tokenizer: it builds no syntax tree,
//! validates nothing, and never fails the caller.
//!
//! Classification is line oriented. A per-document [`Session`] dispatches each
//! line to one of the sub-scanners (keyword, tag, table row, parameter) or
//! short-circuits it as a comment or doc-string line. The only state carried
//! between lines is the doc-string flag, which is why lines must be supplied
//! in document order:
//!
//! ```text
//! @smoke
//! Feature: Withdrawals
//!
//!   Scenario Outline: Withdraw <amount>
//!     Given an account with "100.00" in it
//!     When I withdraw <amount>
//!     | amount | left  |
//!     | 40.00  | 60.00 |
//! ```
//!
//! All offsets and lengths are in characters, so spans stay correct over the
//! non-ASCII keywords of the multilingual vocabulary.

#![allow(rustdoc::invalid_html_tags)]

pub mod gherkin;

pub use gherkin::session::Session;
pub use gherkin::token::{Token, TokenKind};
