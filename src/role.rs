//! Role tracking.
//!
//! Transitions of the subject/predicate/object automaton, as pure functions
//! from state to state. Brackets and parentheses have no transition: terms
//! nested in a blank node property list or a collection are tracked as if
//! they belonged to the enclosing statement.
use crate::{Role, TokenizerState};

/// Role that follows `role` once it is filled.
fn successor(role: Role) -> Role {
	match role {
		Role::Subject => Role::Predicate,
		Role::Predicate => Role::Object,
		Role::Object => Role::Predicate,
	}
}

/// An IRI, compact IRI, blank node or string literal fills the expected slot.
///
/// Returns the new state and the filled role.
pub fn on_term(mut state: TokenizerState) -> (TokenizerState, Role) {
	let role = state.expecting;
	state.filled.fill(role);
	state.expecting = successor(role);
	(state, role)
}

/// A number or boolean only fills the object slot.
pub fn on_literal(state: TokenizerState) -> (TokenizerState, Option<Role>) {
	if state.expecting == Role::Object {
		let (state, role) = on_term(state);
		(state, Some(role))
	} else {
		(state, None)
	}
}

/// `a` only fills the predicate slot.
pub fn on_type_shorthand(state: TokenizerState) -> (TokenizerState, Option<Role>) {
	if state.expecting == Role::Predicate {
		let (state, role) = on_term(state);
		(state, Some(role))
	} else {
		(state, None)
	}
}

/// End of statement.
pub fn on_dot(state: TokenizerState) -> TokenizerState {
	TokenizerState {
		string: state.string,
		..TokenizerState::default()
	}
}

/// Same subject, new predicate.
pub fn on_semicolon(mut state: TokenizerState) -> TokenizerState {
	state.filled.predicate = false;
	state.filled.object = false;
	state.expecting = Role::Predicate;
	state
}

/// Same subject and predicate, new object.
pub fn on_comma(mut state: TokenizerState) -> TokenizerState {
	state.filled.object = false;
	state.expecting = Role::Object;
	state
}
