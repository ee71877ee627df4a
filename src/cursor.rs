use decoded_char::DecodedChar;
use locspan::Span;

/// Code unit used to measure token offsets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Encoding {
	/// UTF-8 bytes.
	#[default]
	Utf8,

	/// UTF-16 code units.
	Utf16,

	/// Unicode scalar values.
	Chars,
}

impl Encoding {
	pub fn decode(&self, c: char) -> DecodedChar {
		let len = match self {
			Self::Utf8 => c.len_utf8(),
			Self::Utf16 => c.len_utf16(),
			Self::Chars => 1,
		};

		DecodedChar::new(c, len)
	}
}

/// Saved cursor position, see [`Cursor::rewind`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mark(usize);

/// Cursor over the remainder of a single line.
pub struct Cursor {
	chars: Vec<DecodedChar>,

	/// `offsets[i]` is the offset of the `i`-th character, plus one trailing
	/// entry for the end of the line.
	offsets: Vec<usize>,
	index: usize,
}

impl Cursor {
	pub fn new(line: &str, encoding: Encoding) -> Self {
		let chars: Vec<_> = line.chars().map(|c| encoding.decode(c)).collect();
		let mut offsets = Vec::with_capacity(chars.len() + 1);
		let mut offset = 0;
		offsets.push(offset);
		for c in &chars {
			offset += c.len();
			offsets.push(offset);
		}

		Self {
			chars,
			offsets,
			index: 0,
		}
	}

	/// Offset of the next character.
	pub fn offset(&self) -> usize {
		self.offsets[self.index]
	}

	/// Span from `start` to the current offset.
	pub fn span_from(&self, start: usize) -> Span {
		Span::new(start, self.offset())
	}

	pub fn at_start_of_line(&self) -> bool {
		self.index == 0
	}

	pub fn at_end(&self) -> bool {
		self.index >= self.chars.len()
	}

	pub fn peek(&self) -> Option<char> {
		self.peek_nth(0)
	}

	/// Character `n` positions after the next one.
	pub fn peek_nth(&self, n: usize) -> Option<char> {
		self.chars.get(self.index + n).map(DecodedChar::chr)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.index += 1;
		Some(c)
	}

	/// Consumes the next character if it is `c`.
	pub fn eat(&mut self, c: char) -> bool {
		if self.peek() == Some(c) {
			self.index += 1;
			true
		} else {
			false
		}
	}

	/// Consumes `s` if the line continues with it.
	pub fn match_literal(&mut self, s: &str) -> bool {
		let mut len = 0;
		for expected in s.chars() {
			if self.peek_nth(len) != Some(expected) {
				return false;
			}

			len += 1
		}

		self.index += len;
		true
	}

	/// Consumes the longest run of characters satisfying `f`.
	///
	/// Returns the span of the run, or `None` if it is empty.
	pub fn eat_while(&mut self, f: impl Fn(char) -> bool) -> Option<Span> {
		let start = self.offset();
		while self.peek().map(&f).unwrap_or(false) {
			self.index += 1
		}

		let span = self.span_from(start);
		(!span.is_empty()).then_some(span)
	}

	/// Skips whitespaces, returning `true` if any was skipped.
	pub fn skip_space(&mut self) -> bool {
		self.eat_while(char::is_whitespace).is_some()
	}

	pub fn skip_to_end(&mut self) {
		self.index = self.chars.len()
	}

	pub fn mark(&self) -> Mark {
		Mark(self.index)
	}

	/// Text consumed since `mark`.
	pub fn text_from(&self, mark: Mark) -> String {
		self.chars[mark.0.min(self.index)..self.index]
			.iter()
			.map(DecodedChar::chr)
			.collect()
	}

	/// Goes back to a previously saved position.
	pub fn rewind(&mut self, mark: Mark) {
		self.index = mark.0
	}
}
