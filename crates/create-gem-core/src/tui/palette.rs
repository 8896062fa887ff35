//! Color roles for the summary screen

use crate::detection::RuntimeVersions;
use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ControlBack,
    ControlExit,
    SummaryLabel,
    RuntimeName,
    RuntimeValue,
    CommandBase,
    CommandGem,
    ArgName,
    ArgEq,
    ArgValue,
}

pub fn paint(role: Role, text: &str) -> ColoredString {
    match role {
        Role::ControlBack => text.cyan(),
        Role::ControlExit => text.red(),
        Role::SummaryLabel => text.magenta().bold(),
        Role::RuntimeName => text.blue(),
        Role::RuntimeValue => text.green(),
        Role::CommandBase => text.blue().bold(),
        Role::CommandGem => text.green().bold(),
        Role::ArgName => text.cyan(),
        Role::ArgEq => text.white(),
        Role::ArgValue => text.yellow(),
    }
}

/// `--name=value` split into colored parts; bare values get the value color
pub fn format_argument(argument: &str) -> String {
    if !argument.starts_with("--") {
        return paint(Role::ArgValue, argument).to_string();
    }

    match argument.split_once('=') {
        Some((name, value)) => format!(
            "{}{}{}",
            paint(Role::ArgName, name),
            paint(Role::ArgEq, "="),
            paint(Role::ArgValue, value)
        ),
        None => paint(Role::ArgName, argument).to_string(),
    }
}

/// `bundle gem <name> <args...>` with each part colored by role
pub fn format_command(command: &[String]) -> String {
    let base = command
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let mut line = paint(Role::CommandBase, &base).to_string();

    if let Some(gem_name) = command.get(2) {
        line.push(' ');
        line.push_str(&paint(Role::CommandGem, gem_name).to_string());
    }

    for argument in command.iter().skip(3) {
        line.push(' ');
        line.push_str(&format_argument(argument));
    }

    line
}

pub fn format_runtime(runtime: &RuntimeVersions) -> String {
    runtime
        .entries()
        .iter()
        .map(|(name, version)| {
            format!(
                "{} {}",
                paint(Role::RuntimeName, name),
                paint(Role::RuntimeValue, version)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body of the controls note shown before the first question
pub fn controls(back_label: &str) -> String {
    format!(
        "Choose {} to return to the previous step.\nPress {} to exit.",
        paint(Role::ControlBack, &format!("\"{}\"", back_label)),
        paint(Role::ControlExit, "Ctrl+C")
    )
}

/// Body of the summary note shown before creating the gem
pub fn summary(command: &[String], runtime: &RuntimeVersions) -> String {
    format!(
        "{} {}\n{} {}",
        paint(Role::SummaryLabel, "Runtime:"),
        format_runtime(runtime),
        paint(Role::SummaryLabel, "Command:"),
        format_command(command)
    )
}
