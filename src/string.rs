//! String literal sub-lexer.
use crate::{
	lexing::{scan_blank_node_label, scan_iri, scan_prefixed_name},
	state::{Delimiter, StringContext},
	Cursor, Token, TokenCategory,
};
use langtag::LanguageTagBuf;

/// Outcome of scanning a string literal up to the end of a line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StringLexResult {
	/// The closing delimiter was consumed.
	Closed,

	/// Single-quoted literal reaching the end of the line. It is not continued
	/// on the next line.
	Unterminated,

	/// Triple-quoted literal continuing on the next line.
	Suspended(StringContext),
}

/// Lexes a string literal, after its first `quote` character.
pub fn lex_string(cursor: &mut Cursor, quote: char) -> StringLexResult {
	let delimiter = if cursor.peek() == Some(quote) && cursor.peek_nth(1) == Some(quote) {
		cursor.next();
		cursor.next();
		Delimiter::Quote3
	} else {
		Delimiter::Quote1
	};

	lex_string_body(cursor, StringContext { delimiter, quote })
}

/// Lexes the content of a string literal until its closing delimiter or the
/// end of the line.
pub fn lex_string_body(cursor: &mut Cursor, context: StringContext) -> StringLexResult {
	let mut pending_escape = false;

	loop {
		match cursor.next() {
			None => {
				break match context.delimiter {
					Delimiter::Quote1 => StringLexResult::Unterminated,
					Delimiter::Quote3 => StringLexResult::Suspended(context),
				}
			}
			Some(_) if pending_escape => pending_escape = false,
			Some('\\') => pending_escape = true,
			Some(c) if c == context.quote => match context.delimiter {
				Delimiter::Quote1 => break StringLexResult::Closed,
				Delimiter::Quote3 => {
					// Up to two quotes may precede the closing ones.
					let mut run = 1;
					while run < 5 && cursor.eat(context.quote) {
						run += 1
					}

					if run >= 3 {
						break StringLexResult::Closed;
					}
				}
			},
			Some(_) => (),
		}
	}
}

/// Lexes the language tag or datatype following a closed literal.
///
/// A language tag must directly follow the literal, while `^^` may be
/// surrounded by spaces. The datatype is emitted without a role, and anything
/// that is not an IRI or compact IRI after `^^` is left to the caller, except
/// blank node labels which are errors.
pub fn lex_suffix(cursor: &mut Cursor, tokens: &mut Vec<Token>) {
	let start = cursor.offset();
	if cursor.eat('@') {
		let tag = cursor.mark();
		let category = match cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '-') {
			Some(_) if is_language_tag(&cursor.text_from(tag)) => TokenCategory::LangTag,
			_ => TokenCategory::Error,
		};

		return tokens.push(Token::new(category, cursor.span_from(start)));
	}

	let mark = cursor.mark();
	cursor.skip_space();
	let start = cursor.offset();
	if !cursor.match_literal("^^") {
		return cursor.rewind(mark);
	}

	tokens.push(Token::new(
		TokenCategory::DatatypeMarker,
		cursor.span_from(start),
	));

	let mark = cursor.mark();
	cursor.skip_space();
	let start = cursor.offset();
	if cursor.eat('<') {
		scan_iri(cursor);
		tokens.push(Token::new(TokenCategory::Iri, cursor.span_from(start)))
	} else if scan_prefixed_name(cursor) {
		tokens.push(Token::new(
			TokenCategory::PrefixedName,
			cursor.span_from(start),
		))
	} else if scan_blank_node_label(cursor) {
		log::trace!("blank node used as datatype at {start}");
		tokens.push(Token::new(TokenCategory::Error, cursor.span_from(start)))
	} else {
		cursor.rewind(mark)
	}
}

fn is_language_tag(tag: &str) -> bool {
	tag.starts_with(|c: char| c.is_ascii_alphabetic())
		&& LanguageTagBuf::new(tag.as_bytes().to_vec()).is_ok()
}
