use locspan::Span;
use std::fmt;

/// Lexical category of a token.
///
/// Every category maps to exactly one highlighting style.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum TokenCategory {
	Comment,

	/// `@prefix` or `PREFIX`.
	PrefixKeyword,

	/// `@base` or `BASE`.
	BaseKeyword,

	/// Namespace declared by a prefix directive (`ex:`).
	PrefixName,

	/// IRI reference (`<...>`).
	Iri,

	/// `a`, abbreviating `rdf:type`.
	RdfTypeShorthand,

	/// Term filling the predicate slot of a triple.
	///
	/// Never produced as a lexical category, only as the second tag returned by
	/// [`Token::categories`].
	Predicate,

	/// Compact IRI (`prefix:local`).
	PrefixedName,

	/// Bare name that is neither a keyword nor a compact IRI.
	LocalName,

	/// Blank node label (`_:b0`).
	BlankNode,

	StringLiteral,

	/// Language tag following a string literal (`@en`).
	LangTag,

	/// `^^` between a string literal and its datatype.
	DatatypeMarker,

	Number,
	Boolean,
	Dot,
	Semicolon,
	Comma,

	/// Any of `[`, `]`, `(` and `)`.
	Bracket,

	/// Unrecognized lexeme.
	Error,
}

impl TokenCategory {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Comment => "comment",
			Self::PrefixKeyword => "prefix keyword",
			Self::BaseKeyword => "base keyword",
			Self::PrefixName => "prefix name",
			Self::Iri => "IRI",
			Self::RdfTypeShorthand => "`a`",
			Self::Predicate => "predicate",
			Self::PrefixedName => "prefixed name",
			Self::LocalName => "local name",
			Self::BlankNode => "blank node",
			Self::StringLiteral => "string literal",
			Self::LangTag => "language tag",
			Self::DatatypeMarker => "datatype marker",
			Self::Number => "number",
			Self::Boolean => "boolean",
			Self::Dot => "dot",
			Self::Semicolon => "semicolon",
			Self::Comma => "comma",
			Self::Bracket => "bracket",
			Self::Error => "error",
		}
	}
}

impl fmt::Display for TokenCategory {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.name().fmt(f)
	}
}

/// Grammatical slot of a triple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub enum Role {
	#[default]
	Subject,
	Predicate,
	Object,
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Subject => write!(f, "subject"),
			Self::Predicate => write!(f, "predicate"),
			Self::Object => write!(f, "object"),
		}
	}
}

/// Token.
///
/// The span is expressed in the code units selected by
/// [`Encoding`](crate::Encoding), relative to the start of the line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token {
	pub category: TokenCategory,
	pub span: Span,

	/// Slot this token filled, if any.
	pub role: Option<Role>,
}

impl Token {
	pub fn new(category: TokenCategory, span: Span) -> Self {
		Self {
			category,
			span,
			role: None,
		}
	}

	pub fn with_role(category: TokenCategory, span: Span, role: Role) -> Self {
		Self {
			category,
			span,
			role: Some(role),
		}
	}

	pub fn start(&self) -> usize {
		self.span.start()
	}

	pub fn end(&self) -> usize {
		self.span.end()
	}

	pub fn is_predicate(&self) -> bool {
		self.role == Some(Role::Predicate)
	}

	/// Lexical category, followed by [`TokenCategory::Predicate`] when the
	/// token filled the predicate slot.
	pub fn categories(&self) -> impl Iterator<Item = TokenCategory> {
		std::iter::once(self.category).chain(self.is_predicate().then_some(TokenCategory::Predicate))
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} {}..{}", self.category, self.start(), self.end())?;
		if let Some(role) = self.role {
			write!(f, " ({role})")?
		}

		Ok(())
	}
}
