//! Line-state cache for editors.
//!
//! A [`Session`] keeps the tokens of every line of a document along with the
//! state the tokenizer was in at the start and end of the line. When a line
//! changes, the following lines are only retokenized as long as the state
//! carried into them differs from the one they were last tokenized with.
use crate::{Token, Tokenizer, TokenizerOptions, TokenizerState};
use std::ops::Range;

/// Session error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("line {index} out of bounds (document has {len} lines)")]
	LineOutOfBounds { index: usize, len: usize },
}

struct Line {
	text: String,

	/// State the line was last tokenized from, `None` if it never was.
	entry: Option<TokenizerState>,
	exit: TokenizerState,
	tokens: Vec<Token>,
}

impl Line {
	fn new(text: String) -> Self {
		Self {
			text,
			entry: None,
			exit: TokenizerState::default(),
			tokens: Vec::new(),
		}
	}
}

/// Tokenized document.
pub struct Session {
	tokenizer: Tokenizer,
	lines: Vec<Line>,
}

impl Session {
	/// Creates a session for an empty document, made of a single empty line.
	pub fn new(options: TokenizerOptions) -> Self {
		Self::from_text("", options)
	}

	/// Creates a session for `text`, tokenizing every line.
	///
	/// Lines are separated by `\n`, and a trailing `\r` is not part of a line.
	pub fn from_text(text: &str, options: TokenizerOptions) -> Self {
		let mut session = Self {
			tokenizer: Tokenizer::new(options),
			lines: text
				.split('\n')
				.map(|line| Line::new(line.strip_suffix('\r').unwrap_or(line).to_owned()))
				.collect(),
		};

		session.retokenize_from(0);
		session
	}

	pub fn options(&self) -> &TokenizerOptions {
		self.tokenizer.options()
	}

	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	pub fn line(&self, index: usize) -> Option<&str> {
		self.lines.get(index).map(|line| line.text.as_str())
	}

	pub fn tokens(&self, index: usize) -> Option<&[Token]> {
		self.lines.get(index).map(|line| line.tokens.as_slice())
	}

	/// State the line was tokenized from.
	pub fn entry_state(&self, index: usize) -> Option<&TokenizerState> {
		self.lines.get(index).and_then(|line| line.entry.as_ref())
	}

	/// State carried from the line to the next one.
	pub fn exit_state(&self, index: usize) -> Option<&TokenizerState> {
		self.lines.get(index).map(|line| &line.exit)
	}

	/// Lines with their tokens.
	pub fn lines(&self) -> impl Iterator<Item = (&str, &[Token])> {
		self.lines
			.iter()
			.map(|line| (line.text.as_str(), line.tokens.as_slice()))
	}

	/// Whole document text.
	pub fn text(&self) -> String {
		let lines: Vec<_> = self.lines.iter().map(|line| line.text.as_str()).collect();
		lines.join("\n")
	}

	/// Replaces the text of a line.
	///
	/// Returns the range of lines that have been retokenized.
	pub fn replace_line(&mut self, index: usize, text: impl Into<String>) -> Result<Range<usize>, Error> {
		self.check(index, self.lines.len())?;
		self.lines[index].text = text.into();
		Ok(self.retokenize_from(index))
	}

	/// Inserts a line before `index`, which may be the line count.
	///
	/// Returns the range of lines that have been retokenized.
	pub fn insert_line(&mut self, index: usize, text: impl Into<String>) -> Result<Range<usize>, Error> {
		self.check(index, self.lines.len() + 1)?;
		self.lines.insert(index, Line::new(text.into()));
		Ok(self.retokenize_from(index))
	}

	/// Removes a line.
	///
	/// Returns the range of lines that have been retokenized, starting with the
	/// line that followed the removed one. A document always has at least one
	/// line: removing the last one leaves a single empty line.
	pub fn remove_line(&mut self, index: usize) -> Result<Range<usize>, Error> {
		self.check(index, self.lines.len())?;
		self.lines.remove(index);
		if self.lines.is_empty() {
			self.lines.push(Line::new(String::new()))
		}

		Ok(self.retokenize_from(index))
	}

	fn check(&self, index: usize, bound: usize) -> Result<(), Error> {
		if index < bound {
			Ok(())
		} else {
			Err(Error::LineOutOfBounds {
				index,
				len: self.lines.len(),
			})
		}
	}

	/// Retokenizes the line at `index`, then the following lines until one is
	/// entered with the same state it was last tokenized from.
	fn retokenize_from(&mut self, index: usize) -> Range<usize> {
		let mut state = match index.checked_sub(1) {
			Some(previous) => self.lines[previous].exit,
			None => TokenizerState::default(),
		};

		let mut end = index;
		for (i, line) in self.lines.iter_mut().enumerate().skip(index) {
			if i > index && line.entry == Some(state) {
				break;
			}

			let (tokens, exit) = self.tokenizer.tokenize_line(&line.text, &state);
			line.entry = Some(state);
			line.exit = exit;
			line.tokens = tokens;
			state = exit;
			end = i + 1
		}

		log::debug!(
			"retokenized lines {index}..{end} of {}",
			self.lines.len()
		);

		index..end
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new(TokenizerOptions::default())
	}
}
