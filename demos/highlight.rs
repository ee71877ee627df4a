//! Prints the tokens of Turtle files and reports unrecognized lexemes.
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use std::fs;
use turtle_highlight::{session::Session, TokenCategory, TokenizerOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	stderrlog::new()
		.module("turtle_highlight")
		.verbosity(3usize)
		.init()?;

	let mut args = std::env::args();
	args.next();

	let mut files = SimpleFiles::new();
	let writer = StandardStream::stderr(ColorChoice::Auto);
	let config = codespan_reporting::term::Config::default();

	for filename in args {
		let buffer = fs::read_to_string(&filename)?;
		let session = Session::from_text(&buffer, TokenizerOptions::default());
		let file_id = files.add(filename.clone(), buffer.clone());

		let mut labels = Vec::new();
		let mut line_start = 0;
		for (i, (raw, (line, tokens))) in buffer.split_inclusive('\n').zip(session.lines()).enumerate() {
			for token in tokens {
				let text = &line[token.start()..token.end()];
				match token.role {
					Some(role) => println!("{}:{} {text:?} {} ({role})", i + 1, token.start(), token.category),
					None => println!("{}:{} {text:?} {}", i + 1, token.start(), token.category),
				}

				if token.category == TokenCategory::Error {
					let range = (line_start + token.start())..(line_start + token.end());
					labels.push(Label::primary(file_id, range))
				}
			}

			line_start += raw.len()
		}

		if !labels.is_empty() {
			let diagnostic = Diagnostic::warning()
				.with_message(format!("{} unrecognized lexeme(s)", labels.len()))
				.with_labels(labels);
			codespan_reporting::term::emit(&mut writer.lock(), &config, &files, &diagnostic)?;
		}
	}

	Ok(())
}
