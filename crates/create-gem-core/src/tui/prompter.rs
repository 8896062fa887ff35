//! cliclack-backed `Prompter`

use crate::error::Result;
use crate::wizard::{Choice, Prompt, Prompter};

/// Label of the extra item that returns to the previous question
pub(super) const BACK_LABEL: &str = "← back";

/// Renders wizard questions as cliclack prompts
///
/// Back-navigation is an ordinary list item, so no raw key handling is needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn choose(&mut self, question: &str, choices: &[Choice]) -> Result<Prompt<String>> {
        // Use indices as item values; None is the back item
        let mut select = cliclack::select(question);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(Some(idx), &choice.label, "");
        }
        select = select.item(None, BACK_LABEL, "previous question");

        let picked: Option<usize> = select.interact()?;

        Ok(match picked.and_then(|idx| choices.get(idx)) {
            Some(choice) => Prompt::Answer(choice.value.clone()),
            None => Prompt::Back,
        })
    }

    fn text(&mut self, question: &str, default: Option<&str>, allow_empty: bool) -> Result<String> {
        let mut input = cliclack::input(question).required(!allow_empty);
        if let Some(default) = default {
            input = input.default_input(default);
        }

        let value: String = input.interact()?;
        Ok(value.trim().to_string())
    }
}
