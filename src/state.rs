use crate::Role;

/// String literal delimiter kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Delimiter {
	/// `"` or `'`.
	Quote1,

	/// `"""` or `'''`.
	Quote3,
}

/// Literal left open at the end of a line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StringContext {
	pub delimiter: Delimiter,

	/// `"` or `'`.
	pub quote: char,
}

/// Directive whose IRI has not been read yet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Directive {
	#[default]
	None,

	/// `@prefix`/`PREFIX`, with `name_pending` set until the prefix name is
	/// read.
	Prefix { name_pending: bool },

	/// `@base`/`BASE`.
	Base,
}

impl Directive {
	pub fn is_open(&self) -> bool {
		!matches!(self, Self::None)
	}
}

/// Slots of the current statement that already hold a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RoleFilled {
	pub subject: bool,
	pub predicate: bool,
	pub object: bool,
}

impl RoleFilled {
	pub fn fill(&mut self, role: Role) {
		match role {
			Role::Subject => self.subject = true,
			Role::Predicate => self.predicate = true,
			Role::Object => self.object = true,
		}
	}
}

/// Tokenizer state carried from the end of one line to the start of the next.
///
/// The default value is the state at the start of a document.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TokenizerState {
	/// Triple-quoted literal continuing on the next line.
	pub string: Option<StringContext>,
	pub directive: Directive,
	pub expecting: Role,
	pub filled: RoleFilled,
}

impl TokenizerState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn in_string(&self) -> bool {
		self.string.is_some()
	}
}
