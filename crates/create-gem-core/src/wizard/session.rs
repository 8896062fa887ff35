//! Step-by-step selection of `bundle gem` options
//!
//! One question per option supported by the compatibility entry, in registry
//! order. `Back` returns to the previous question; at the first question it
//! is a no-op.

use super::defaults::{self, KEEP, NO, NONE, SET, YES};
use super::labels;
use super::prompter::{Choice, Prompt, Prompter};
use crate::compatibility::Entry;
use crate::error::Result;
use crate::options::{OptionKey, OptionKind, OptionMap, OptionValue};

/// What answering one question does to the mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAnswer {
    Back,
    /// Remove the key so Bundler applies its own default
    UseExternalDefault,
    Value(OptionValue),
}

pub struct Session<'a, P: Prompter> {
    entry: &'a Entry,
    external: &'a OptionMap,
    prompter: &'a mut P,
    keys: Vec<OptionKey>,
    index: usize,
    values: OptionMap,
}

impl<'a, P: Prompter> Session<'a, P> {
    /// `seed` is the starting mapping (preset or previous answers), `external`
    /// holds Bundler's own defaults.
    pub fn new(entry: &'a Entry, seed: &OptionMap, external: &'a OptionMap, prompter: &'a mut P) -> Self {
        Self {
            entry,
            external,
            prompter,
            keys: entry.supported_keys(),
            index: 0,
            values: sanitize_seed(entry, seed),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Key awaiting an answer, or `None` once every question is answered
    pub fn current_key(&self) -> Option<OptionKey> {
        self.keys.get(self.index).copied()
    }

    pub fn values(&self) -> &OptionMap {
        &self.values
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.keys.len()
    }

    /// Ask the current question and apply the answer
    pub fn step(&mut self) -> Result<()> {
        let Some(key) = self.current_key() else {
            return Ok(());
        };

        match self.ask(key)? {
            StepAnswer::Back => {
                self.index = self.index.saturating_sub(1);
            }
            StepAnswer::UseExternalDefault => {
                self.values.remove(&key);
                self.index += 1;
            }
            StepAnswer::Value(value) => {
                self.values.insert(key, value);
                self.index += 1;
            }
        }

        Ok(())
    }

    /// Run every question and return the final mapping
    pub fn run(mut self) -> Result<OptionMap> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.values)
    }

    fn ask(&mut self, key: OptionKey) -> Result<StepAnswer> {
        let question = labels::question(key, self.index, self.keys.len());
        let current = self.values.get(&key);
        let external = self.external.get(&key);

        match key.definition().kind {
            OptionKind::Toggle { .. } => {
                let default = defaults::toggle_default(current, external);
                let answer = self.choose(&question, key, &[YES, NO], default)?;
                Ok(match answer {
                    Prompt::Back => StepAnswer::Back,
                    Prompt::Answer(choice) if choice == YES => StepAnswer::Value(true.into()),
                    Prompt::Answer(choice) if choice == NO => StepAnswer::Value(false.into()),
                    Prompt::Answer(_) => StepAnswer::UseExternalDefault,
                })
            }
            OptionKind::Flag { .. } => {
                let default = defaults::flag_default(current, external);
                let answer = self.choose(&question, key, &[YES, NO], default)?;
                Ok(match answer {
                    Prompt::Back => StepAnswer::Back,
                    Prompt::Answer(choice) if choice == YES => StepAnswer::Value(true.into()),
                    Prompt::Answer(_) => StepAnswer::UseExternalDefault,
                })
            }
            OptionKind::Enum { values, .. } => {
                // An unrestricted row offers every registry value
                let allowed = self.entry.allowed_values(key)?.unwrap_or(values);
                let default = defaults::enum_default(current, external, allowed);
                let mut choices: Vec<&str> = allowed.to_vec();
                choices.push(NONE);
                let answer = self.choose(&question, key, &choices, &default)?;
                Ok(match answer {
                    Prompt::Back => StepAnswer::Back,
                    Prompt::Answer(choice) if choice == NONE => StepAnswer::Value(false.into()),
                    Prompt::Answer(choice) => StepAnswer::Value(OptionValue::Text(choice)),
                })
            }
            OptionKind::Text { .. } => self.ask_text(&question, key),
        }
    }

    fn ask_text(&mut self, question: &str, key: OptionKey) -> Result<StepAnswer> {
        let stored = defaults::stored_text(self.values.get(&key)).map(str::to_string);
        let (choices, default) = defaults::text_choices(self.values.get(&key));

        let choice = match self.choose(question, key, &choices, default)? {
            Prompt::Back => return Ok(StepAnswer::Back),
            Prompt::Answer(choice) => choice,
        };

        if choice == KEEP {
            return Ok(match stored {
                Some(value) => StepAnswer::Value(OptionValue::Text(value)),
                None => StepAnswer::UseExternalDefault,
            });
        }
        if choice != SET {
            return Ok(StepAnswer::UseExternalDefault);
        }

        // A username is never pre-filled; the editor command is.
        let (prefill, allow_empty) = match key {
            OptionKey::GithubUsername => (None, false),
            _ => (stored.as_deref(), true),
        };
        let prompt = format!("{}:", labels::label(key));
        let value = self.prompter.text(&prompt, prefill, allow_empty)?;

        if value.is_empty() {
            Ok(StepAnswer::UseExternalDefault)
        } else {
            Ok(StepAnswer::Value(OptionValue::Text(value)))
        }
    }

    /// Present `choices` with the default first and labelled
    fn choose(
        &mut self,
        question: &str,
        key: OptionKey,
        choices: &[&str],
        default: &str,
    ) -> Result<Prompt<String>> {
        let owned: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        let default = if owned.iter().any(|c| c == default) {
            default.to_string()
        } else {
            owned.first().cloned().unwrap_or_default()
        };

        let rendered: Vec<Choice> = defaults::reorder_default_first(&owned, &default)
            .into_iter()
            .map(|value| Choice {
                label: self.choice_label(key, &value, value == default),
                value,
            })
            .collect();

        self.prompter.choose(question, &rendered)
    }

    fn choice_label(&self, key: OptionKey, choice: &str, is_default: bool) -> String {
        let hint = if choice == KEEP {
            defaults::stored_text(self.values.get(&key)).map(|value| format!("use {}", value))
        } else {
            labels::choice_hint(key, choice).map(str::to_string)
        };

        let mut label = choice.to_string();
        if let Some(hint) = hint {
            label = format!("{} - {}", label, hint);
        }
        if is_default {
            label.push_str(" (default)");
        }
        label
    }
}

/// Keep only supported keys and drop `false` for one-way flags, which have no
/// stored "off" representation
fn sanitize_seed(entry: &Entry, seed: &OptionMap) -> OptionMap {
    seed.iter()
        .filter(|(key, _)| entry.supports(**key))
        .filter(|(key, value)| {
            !matches!(key.definition().kind, OptionKind::Flag { .. })
                || **value != OptionValue::Bool(false)
        })
        .map(|(key, value)| (*key, value.clone()))
        .collect()
}
