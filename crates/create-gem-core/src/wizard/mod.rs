//! Interactive option selection

pub mod defaults;
pub mod labels;
pub mod prompter;
pub mod session;

pub use prompter::{Choice, Prompt, Prompter};
pub use session::{Session, StepAnswer};
