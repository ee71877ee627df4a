//! Turtle is a textual syntax for RDF that allows an RDF graph to be completely
//! written in a compact and natural text form. This library provides an
//! incremental, line-oriented Turtle tokenizer meant for syntax highlighting
//! in text editors.
//!
//! The tokenizer does not validate documents. It classifies each lexeme of a
//! line into a [`TokenCategory`] and tracks which slot of the current triple
//! (subject, predicate or object) is expected next, so that predicates can be
//! highlighted differently. It never fails: anything it does not recognize
//! becomes a [`TokenCategory::Error`] token and scanning goes on.
//!
//! ## Basic usage
//!
//! Each line is tokenized from the [`TokenizerState`] reached at the end of
//! the previous one. The state is a plain value, so editors can store it per
//! line and resume from any of them.
//!
//! ```rust
//! use turtle_highlight::{tokenize_line, TokenCategory, TokenizerState};
//!
//! let mut state = TokenizerState::new();
//! for line in ["@prefix ex: <http://example.org/> .", "ex:s ex:p \"\"\"two", "lines\"\"\" ."] {
//!   let (tokens, next) = tokenize_line(line, &state);
//!   for token in tokens {
//!     let text = &line[token.start()..token.end()];
//!     if token.is_predicate() {
//!       println!("{text}: {} (predicate)", token.category)
//!     } else {
//!       println!("{text}: {}", token.category)
//!     }
//!   }
//!
//!   state = next;
//! }
//!
//! assert!(!state.in_string());
//! ```
//!
//! Offsets are UTF-8 byte offsets by default. Editors addressing text in
//! UTF-16 code units select [`Encoding::Utf16`] through [`TokenizerOptions`].
//!
//! The [`session::Session`] type keeps the tokens and states of a whole
//! document and only retokenizes the lines affected by an edit.
//!
//! ## Limitations
//!
//! Blank node property lists (`[ ... ]`) and collections (`( ... )`) are not
//! tracked as nested statements: their brackets are plain
//! [`TokenCategory::Bracket`] tokens, and the terms they contain are assigned
//! roles as if they belonged to the enclosing statement.
mod cursor;
pub mod lexing;
pub mod role;
pub mod session;
pub mod state;
pub mod string;
mod token;

pub use cursor::{Cursor, Encoding, Mark};
pub use lexing::{tokenize_line, Tokenizer, TokenizerOptions};
pub use state::TokenizerState;
pub use token::*;
