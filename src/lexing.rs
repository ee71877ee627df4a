use crate::{
	role,
	state::Directive,
	string::{lex_string, lex_string_body, lex_suffix, StringLexResult},
	Cursor, Encoding, Role, Token, TokenCategory, TokenizerState,
};

/// Tokenizer options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TokenizerOptions {
	/// Unit of token offsets.
	pub encoding: Encoding,

	/// Recognize the SPARQL-style `PREFIX` and `BASE` directives.
	pub sparql_directives: bool,
}

impl Default for TokenizerOptions {
	fn default() -> Self {
		Self {
			encoding: Encoding::Utf8,
			sparql_directives: true,
		}
	}
}

/// Line tokenizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer {
	options: TokenizerOptions,
}

impl Tokenizer {
	pub fn new(options: TokenizerOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &TokenizerOptions {
		&self.options
	}

	/// Tokenizes a single line, starting in `state`.
	///
	/// Returns the tokens of the line along with the state to carry to the
	/// next line. Never fails: unrecognized characters are turned into
	/// [`TokenCategory::Error`] tokens.
	pub fn tokenize_line(&self, line: &str, state: &TokenizerState) -> (Vec<Token>, TokenizerState) {
		let mut lexer = LineLexer {
			options: &self.options,
			cursor: Cursor::new(line, self.options.encoding),
			state: *state,
			tokens: Vec::new(),
		};

		lexer.run();
		(lexer.tokens, lexer.state)
	}
}

/// Tokenizes a single line with the default options.
pub fn tokenize_line(line: &str, state: &TokenizerState) -> (Vec<Token>, TokenizerState) {
	Tokenizer::default().tokenize_line(line, state)
}

struct LineLexer<'a> {
	options: &'a TokenizerOptions,
	cursor: Cursor,
	state: TokenizerState,
	tokens: Vec<Token>,
}

impl<'a> LineLexer<'a> {
	fn run(&mut self) {
		if let Some(context) = self.state.string.filter(|_| !self.cursor.at_end()) {
			let start = self.cursor.offset();
			let result = lex_string_body(&mut self.cursor, context);
			self.end_string(start, result, None)
		}

		loop {
			self.cursor.skip_space();
			if self.cursor.at_end() {
				break;
			}

			self.next_token()
		}
	}

	fn push(&mut self, category: TokenCategory, start: usize) {
		let span = self.cursor.span_from(start);
		self.tokens.push(Token::new(category, span))
	}

	fn push_with_role(&mut self, category: TokenCategory, start: usize, role: Option<Role>) {
		let span = self.cursor.span_from(start);
		self.tokens.push(Token { category, span, role })
	}

	/// Pushes a term filling the expected slot, unless it belongs to a
	/// directive.
	fn push_term(&mut self, category: TokenCategory, start: usize) {
		if self.state.directive.is_open() {
			self.push(category, start)
		} else {
			let (state, role) = role::on_term(self.state);
			self.state = state;
			self.push_with_role(category, start, Some(role))
		}
	}

	/// Pushes a number or boolean.
	fn push_literal(&mut self, category: TokenCategory, start: usize) {
		let (state, role) = role::on_literal(self.state);
		self.state = state;
		self.push_with_role(category, start, role)
	}

	fn end_string(&mut self, start: usize, result: StringLexResult, role: Option<Role>) {
		self.push_with_role(TokenCategory::StringLiteral, start, role);
		match result {
			StringLexResult::Closed => {
				self.state.string = None;
				lex_suffix(&mut self.cursor, &mut self.tokens)
			}
			StringLexResult::Unterminated => self.state.string = None,
			StringLexResult::Suspended(context) => {
				log::trace!("literal continues on next line ({:?})", context.delimiter);
				self.state.string = Some(context)
			}
		}
	}

	fn next_token(&mut self) {
		let start = self.cursor.offset();
		let c = match self.cursor.peek() {
			Some(c) => c,
			None => return,
		};

		if c == '#' {
			self.cursor.skip_to_end();
			return self.push(TokenCategory::Comment, start);
		}

		if let Some(keyword) = self.directive_keyword() {
			self.state.directive = match keyword {
				TokenCategory::PrefixKeyword => Directive::Prefix { name_pending: true },
				_ => Directive::Base,
			};

			return self.push(keyword, start);
		}

		if let Directive::Prefix { name_pending: true } = self.state.directive {
			let mark = self.cursor.mark();
			if scan_prefix(&mut self.cursor) && self.cursor.eat(':') {
				self.state.directive = Directive::Prefix {
					name_pending: false,
				};
				return self.push(TokenCategory::PrefixName, start);
			}

			self.cursor.rewind(mark)
		}

		if self.cursor.eat('<') {
			if !scan_iri(&mut self.cursor) {
				log::trace!("unterminated IRI at {start}")
			}

			return if self.state.directive.is_open() {
				self.state.directive = Directive::None;
				self.push(TokenCategory::Iri, start)
			} else {
				self.push_term(TokenCategory::Iri, start)
			};
		}

		if c == '"' || c == '\'' {
			self.cursor.next();
			let role = if self.state.directive.is_open() {
				None
			} else {
				let (state, role) = role::on_term(self.state);
				self.state = state;
				Some(role)
			};

			let result = lex_string(&mut self.cursor, c);
			return self.end_string(start, result, role);
		}

		if c == 'a' && ends_word(&self.cursor, 1) {
			self.cursor.next();
			let (state, role) = role::on_type_shorthand(self.state);
			self.state = state;
			return self.push_with_role(TokenCategory::RdfTypeShorthand, start, role);
		}

		match c {
			'.' => {
				self.cursor.next();
				self.state = role::on_dot(self.state);
				return self.push(TokenCategory::Dot, start);
			}
			';' => {
				self.cursor.next();
				self.state = role::on_semicolon(self.state);
				return self.push(TokenCategory::Semicolon, start);
			}
			',' => {
				self.cursor.next();
				self.state = role::on_comma(self.state);
				return self.push(TokenCategory::Comma, start);
			}
			_ => (),
		}

		if scan_prefixed_name(&mut self.cursor) {
			return self.push_term(TokenCategory::PrefixedName, start);
		}

		if scan_number(&mut self.cursor) {
			return self.push_literal(TokenCategory::Number, start);
		}

		if self.keyword("true") || self.keyword("false") {
			return self.push_literal(TokenCategory::Boolean, start);
		}

		if scan_blank_node_label(&mut self.cursor) {
			return self.push_term(TokenCategory::BlankNode, start);
		}

		if matches!(c, '[' | ']' | '(' | ')') {
			self.cursor.next();
			return self.push(TokenCategory::Bracket, start);
		}

		// Same extent as the failed prefix scan.
		if is_pn_chars_u(c) {
			self.cursor.next();
			scan_dotted(&mut self.cursor, is_pn_chars);
			return self.push(TokenCategory::LocalName, start);
		}

		self.cursor.next();
		log::trace!("unrecognized character {c:?} at {start}");
		self.push(TokenCategory::Error, start)
	}

	/// Consumes `keyword` if it forms a whole word.
	fn keyword(&mut self, keyword: &str) -> bool {
		let mark = self.cursor.mark();
		if self.cursor.match_literal(keyword) && ends_word(&self.cursor, 0) {
			true
		} else {
			self.cursor.rewind(mark);
			false
		}
	}

	/// Consumes a directive keyword, returning its category.
	fn directive_keyword(&mut self) -> Option<TokenCategory> {
		if self.keyword("@prefix") {
			return Some(TokenCategory::PrefixKeyword);
		}

		if self.keyword("@base") {
			return Some(TokenCategory::BaseKeyword);
		}

		// SPARQL-style directives can only start a statement.
		if self.options.sparql_directives
			&& self.state.expecting == Role::Subject
			&& !self.state.directive.is_open()
		{
			let mark = self.cursor.mark();
			if self.cursor.eat_while(|c| c.is_ascii_alphabetic()).is_some()
				&& ends_word(&self.cursor, 0)
			{
				let word = self.cursor.text_from(mark);
				if word.as_str() == unicase::Ascii::new("PREFIX") {
					return Some(TokenCategory::PrefixKeyword);
				}

				if word.as_str() == unicase::Ascii::new("BASE") {
					return Some(TokenCategory::BaseKeyword);
				}
			}

			self.cursor.rewind(mark)
		}

		None
	}
}

/// Checks that the character `n` positions ahead cannot continue a name.
fn ends_word(cursor: &Cursor, n: usize) -> bool {
	match cursor.peek_nth(n) {
		None => true,
		Some(':') => false,
		Some('.') => !matches!(cursor.peek_nth(n + 1), Some(c) if c == ':' || is_pn_chars(c)),
		Some(c) => !is_pn_chars(c),
	}
}

/// Scans an IRI reference, after its opening `<`.
///
/// IRIs do not span lines: without a closing `>`, the rest of the line is
/// consumed and `false` is returned.
pub(crate) fn scan_iri(cursor: &mut Cursor) -> bool {
	loop {
		match cursor.next() {
			Some('>') => break true,
			Some(_) => (),
			None => break false,
		}
	}
}

/// Consumes characters satisfying `f` or `.`, without a trailing `.`.
fn scan_dotted(cursor: &mut Cursor, f: impl Fn(char) -> bool) {
	let mut end = cursor.mark();
	loop {
		match cursor.peek() {
			Some('.') => {
				cursor.next();
			}
			Some(c) if f(c) => {
				cursor.next();
				end = cursor.mark()
			}
			_ => break,
		}
	}

	cursor.rewind(end)
}

/// Scans a possibly empty prefix (`PN_PREFIX`), without its `:`.
fn scan_prefix(cursor: &mut Cursor) -> bool {
	if cursor.peek().map(is_pn_chars_base).unwrap_or(false) {
		cursor.next();
		scan_dotted(cursor, is_pn_chars)
	}

	true
}

/// Consumes one local name character (`PLX` included).
fn eat_local_char(cursor: &mut Cursor, first: bool) -> bool {
	match cursor.peek() {
		Some('%') => {
			let hex = |c: Option<char>| c.map(|c| c.is_ascii_hexdigit()).unwrap_or(false);
			if hex(cursor.peek_nth(1)) && hex(cursor.peek_nth(2)) {
				cursor.next();
				cursor.next();
				cursor.next();
				true
			} else {
				false
			}
		}
		Some('\\') => {
			if cursor.peek_nth(1).map(is_local_escape).unwrap_or(false) {
				cursor.next();
				cursor.next();
				true
			} else {
				false
			}
		}
		Some(c) if c == ':' || c.is_ascii_digit() || is_pn_chars_u(c) || (!first && is_pn_chars(c)) => {
			cursor.next();
			true
		}
		_ => false,
	}
}

/// Scans a possibly empty local name (`PN_LOCAL`).
fn scan_local(cursor: &mut Cursor) {
	if !eat_local_char(cursor, true) {
		return;
	}

	let mut end = cursor.mark();
	loop {
		if cursor.peek() == Some('.') {
			cursor.next();
		} else if eat_local_char(cursor, false) {
			end = cursor.mark()
		} else {
			break;
		}
	}

	cursor.rewind(end)
}

/// Scans a compact IRI (`prefix:local`, `:local` or `prefix:`).
///
/// Nothing is consumed if there is none.
pub(crate) fn scan_prefixed_name(cursor: &mut Cursor) -> bool {
	let mark = cursor.mark();
	if scan_prefix(cursor) && cursor.eat(':') {
		scan_local(cursor);
		true
	} else {
		cursor.rewind(mark);
		false
	}
}

/// Scans a blank node label (`_:label`).
pub(crate) fn scan_blank_node_label(cursor: &mut Cursor) -> bool {
	let starts_label = |c: char| c.is_ascii_digit() || is_pn_chars_u(c);
	if cursor.peek() == Some('_')
		&& cursor.peek_nth(1) == Some(':')
		&& cursor.peek_nth(2).map(starts_label).unwrap_or(false)
	{
		cursor.next();
		cursor.next();
		cursor.next();
		scan_dotted(cursor, is_pn_chars);
		true
	} else {
		false
	}
}

/// Scans an integer, decimal or double.
///
/// A `.` is only part of the number when followed by a digit, and an
/// incomplete exponent is left out.
fn scan_number(cursor: &mut Cursor) -> bool {
	let digit = |c: Option<char>| c.map(|c| c.is_ascii_digit()).unwrap_or(false);
	let mark = cursor.mark();
	let _ = cursor.eat('+') || cursor.eat('-');

	let integer = cursor.eat_while(|c| c.is_ascii_digit()).is_some();
	let mut fraction = false;
	if cursor.peek() == Some('.') && digit(cursor.peek_nth(1)) {
		cursor.next();
		cursor.eat_while(|c| c.is_ascii_digit());
		fraction = true
	}

	if !integer && !fraction {
		cursor.rewind(mark);
		return false;
	}

	let exponent = cursor.mark();
	if cursor.eat('e') || cursor.eat('E') {
		let _ = cursor.eat('+') || cursor.eat('-');
		if cursor.eat_while(|c| c.is_ascii_digit()).is_none() {
			cursor.rewind(exponent)
		}
	}

	true
}

fn is_local_escape(c: char) -> bool {
	matches!(
		c,
		'_' | '~' | '.' | '-' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
			| '/' | '?' | '#' | '@' | '%'
	)
}

fn is_pn_chars_base(c: char) -> bool {
	matches!(c, 'A'..='Z' | 'a'..='z' | '\u{00c0}'..='\u{00d6}' | '\u{00d8}'..='\u{00f6}' | '\u{00f8}'..='\u{02ff}' | '\u{0370}'..='\u{037d}' | '\u{037f}'..='\u{1fff}' | '\u{200c}'..='\u{200d}' | '\u{2070}'..='\u{218f}' | '\u{2c00}'..='\u{2fef}' | '\u{3001}'..='\u{d7ff}' | '\u{f900}'..='\u{fdcf}' | '\u{fdf0}'..='\u{fffd}' | '\u{10000}'..='\u{effff}')
}

fn is_pn_chars_u(c: char) -> bool {
	is_pn_chars_base(c) || c == '_'
}

fn is_pn_chars(c: char) -> bool {
	is_pn_chars_u(c)
		|| matches!(c, '-' | '0'..='9' | '\u{00b7}' | '\u{0300}'..='\u{036f}' | '\u{203f}'..='\u{2040}')
}
