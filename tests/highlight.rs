use turtle_highlight::{
	session::Session, state::Delimiter, tokenize_line, Encoding, Token, TokenCategory, Tokenizer,
	TokenizerOptions, TokenizerState,
};

fn init_logger() {
	let _ = stderrlog::new()
		.module("turtle_highlight")
		.verbosity(4usize)
		.init();
}

/// Checks that tokens are non-empty, ordered, and only leave whitespace
/// uncovered.
fn check_coverage(line: &str, tokens: &[Token]) {
	let mut end = 0;
	for token in tokens {
		assert!(token.start() < token.end(), "empty token {token} in {line:?}");
		assert!(token.start() >= end, "overlapping token {token} in {line:?}");
		assert!(token.end() <= line.len(), "token {token} past the end of {line:?}");
		assert!(
			line[end..token.start()].chars().all(char::is_whitespace),
			"uncovered text before {token} in {line:?}"
		);
		end = token.end()
	}

	assert!(line[end..].chars().all(char::is_whitespace));
}

fn tokenize_lines(content: &str) -> Vec<Vec<Token>> {
	let mut state = TokenizerState::new();
	content
		.lines()
		.map(|line| {
			let (tokens, next) = tokenize_line(line, &state);
			check_coverage(line, &tokens);
			state = next;
			tokens
		})
		.collect()
}

struct Test {
	input: &'static str,
}

impl Test {
	fn content(&self) -> String {
		std::fs::read_to_string(self.input).unwrap()
	}

	fn run_coverage(self) {
		init_logger();
		tokenize_lines(&self.content());
	}

	fn run_resumable(self) {
		init_logger();
		let content = self.content();
		let by_line: Vec<_> = tokenize_lines(&content)
			.into_iter()
			.flatten()
			.map(|t| (t.category, t.role))
			.collect();

		let joined = content.lines().collect::<Vec<_>>().join(" ");
		let (tokens, state) = tokenize_line(&joined, &TokenizerState::new());
		check_coverage(&joined, &tokens);
		let whole: Vec<_> = tokens.iter().map(|t| (t.category, t.role)).collect();

		assert_eq!(by_line, whole);
		assert!(!state.in_string())
	}

	fn run_session(self) {
		init_logger();
		let content = self.content();
		let expected = tokenize_lines(&content);
		let session = Session::from_text(&content, TokenizerOptions::default());
		assert!(session.line_count() >= expected.len());

		for (i, tokens) in expected.iter().enumerate() {
			assert_eq!(session.tokens(i), Some(tokens.as_slice()), "line {i}");
		}

		for i in expected.len()..session.line_count() {
			assert_eq!(session.tokens(i), Some(&[][..]), "line {i}");
		}
	}
}

macro_rules! coverage_test {
	($($id:ident),*) => {
		$(
			#[test]
			fn $id () {
				Test {
					input: concat!("tests/highlight/", stringify!($id) ,".ttl"),
				}.run_coverage()
			}
		)*
	};
}

macro_rules! resumable_test {
	($($id:ident),*) => {
		$(
			#[test]
			fn $id () {
				Test {
					input: concat!("tests/highlight/", stringify!($id) ,".ttl"),
				}.run_resumable()
			}
		)*
	};
}

macro_rules! session_test {
	($($id:ident),*) => {
		$(
			#[test]
			fn $id () {
				Test {
					input: concat!("tests/highlight/", stringify!($id) ,".ttl"),
				}.run_session()
			}
		)*
	};
}

mod coverage {
	use super::*;

	coverage_test! {
		h01,
		h02,
		h03,
		h04,
		h05,
		h06
	}
}

mod resumable {
	use super::*;

	resumable_test! {
		h01,
		h02,
		h03,
		h05
	}
}

mod cached {
	use super::*;

	session_test! {
		h01,
		h02,
		h03,
		h04,
		h05,
		h06
	}
}

#[test]
fn adversarial_lines() {
	let lines = [
		"",
		" ",
		"\t\r",
		"\"",
		"'''",
		"\"\"\"\"\"\"\"",
		"\\",
		"<",
		">",
		"@",
		"^^",
		"_:",
		"a",
		":",
		"::::",
		"%",
		"ex:%4",
		"ex:\\",
		"1e",
		"+",
		"-.",
		"\u{0}\u{1}\u{7f}",
		"\u{feff}é\u{301}",
		"𝄞𝄞<𝄞",
		"\"\\",
		"\"a\"@",
		"\"a\"^^",
		"\"a\"^^ex",
		"@prefix",
		"@prefix :",
		"PREFIX",
		"[(])",
		"#",
	];

	for encoding in [Encoding::Utf8, Encoding::Utf16, Encoding::Chars] {
		let tokenizer = Tokenizer::new(TokenizerOptions {
			encoding,
			..Default::default()
		});

		for line in lines {
			for state in [
				TokenizerState::new(),
				tokenize_line("ex:s ex:p '''", &TokenizerState::new()).1,
				tokenize_line("@prefix", &TokenizerState::new()).1,
			] {
				let (tokens, _) = tokenizer.tokenize_line(line, &state);
				if encoding == Encoding::Utf8 {
					check_coverage(line, &tokens)
				}

				let mut end = 0;
				for token in &tokens {
					assert!(token.start() < token.end());
					assert!(token.start() >= end);
					end = token.end()
				}
			}
		}
	}
}

#[test]
fn escaped_quotes_never_close() {
	for content in [r#"\""#, r#"a\"b"#, r#"\"\""#, r#"x\\\"y"#, r#"\"\"\""#] {
		let line = format!("ex:s ex:p \"{content}\" .");
		let (tokens, _) = tokenize_line(&line, &TokenizerState::new());
		let literal = tokens[2];
		assert_eq!(literal.category, TokenCategory::StringLiteral);

		let last_escaped_quote = 10 + line[10..].rfind("\\\"").unwrap() + 1;
		assert!(literal.end() > last_escaped_quote + 1);
		assert_eq!(literal.end(), line.len() - 2);
	}
}

#[test]
fn multiline_literal_spans() {
	let lines = ["ex:s ex:p \"\"\"first", "", "  middle \"\" '", "last\"\"\"@en ."];
	let mut state = TokenizerState::new();
	let mut literals = Vec::new();
	let mut exits = Vec::new();

	for line in lines {
		let (tokens, next) = tokenize_line(line, &state);
		check_coverage(line, &tokens);
		literals.extend(
			tokens
				.iter()
				.filter(|t| t.category == TokenCategory::StringLiteral)
				.map(|t| (t.start(), t.end())),
		);
		exits.push(next.string.map(|s| s.delimiter));
		state = next
	}

	assert_eq!(literals, [(10, 18), (0, 13), (0, 7)]);
	assert_eq!(
		exits,
		[
			Some(Delimiter::Quote3),
			Some(Delimiter::Quote3),
			Some(Delimiter::Quote3),
			None
		]
	);
	assert_eq!(state, TokenizerState::new());
}
