//! Game rules: the set-judging function.

pub mod validator;

pub use validator::{is_set, SET_SIZE};
