//! The wizard's only I/O boundary

use crate::error::Result;

/// Outcome of a choice prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Answer(T),
    /// The user asked to return to the previous question
    Back,
}

/// One entry of a choice list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Raw choice identifier returned on selection
    pub value: String,
    /// Rendered label, e.g. `rspec - popular behavior-style testing (default)`
    pub label: String,
}

/// Asks questions on behalf of the wizard
///
/// Choice lists arrive with the default entry first.
pub trait Prompter {
    /// Ask for one of `choices`, returning the chosen `Choice::value`
    fn choose(&mut self, question: &str, choices: &[Choice]) -> Result<Prompt<String>>;

    /// Ask for free text
    fn text(&mut self, question: &str, default: Option<&str>, allow_empty: bool) -> Result<String>;
}
