//! Top-level create-gem flow with interactive prompts

use super::palette;
use super::prompter::{CliclackPrompter, BACK_LABEL};
use crate::command;
use crate::compatibility::{self, Entry};
use crate::config::Store;
use crate::detection::{detect_runtime, BundlerDefaults, RuntimeVersions};
use crate::options::value::parse_lenient;
use crate::options::{self, validator, OptionMap};
use crate::runner::Runner;
use crate::wizard::Session;
use crate::{actions, Error};
use anyhow::{Context, Result};
use semver::Version;

/// Parsed command-line request
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the gem to create; prompted for when absent
    pub gem_name: Option<String>,

    /// Use a saved preset instead of the wizard
    pub preset: Option<String>,

    /// Save the final selection under this preset name
    pub save_preset: Option<String>,

    pub list_presets: bool,

    pub show_preset: Option<String>,

    pub delete_preset: Option<String>,

    /// Print runtime versions and supported options
    pub doctor: bool,

    /// Print the command instead of running it
    pub dry_run: bool,

    /// Skip Bundler detection and use this version
    pub bundler_version: Option<Version>,
}

/// Whether `err` was caused by the user interrupting a prompt
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            return io.kind() == std::io::ErrorKind::Interrupted;
        }
        matches!(
            cause.downcast_ref::<Error>(),
            Some(Error::Io(io)) if io.kind() == std::io::ErrorKind::Interrupted
        )
    })
}

/// Dispatch the requested action
pub async fn run(args: CreateArgs, store: &Store) -> Result<()> {
    let mut out = std::io::stdout();

    if args.doctor {
        let runtime = detect_runtime(args.bundler_version.as_ref())?;
        actions::doctor(&mut out, &runtime)?;
        return Ok(());
    }
    if args.list_presets {
        actions::list_presets(&mut out, store)?;
        return Ok(());
    }
    if let Some(name) = &args.show_preset {
        actions::show_preset(&mut out, store, name)?;
        return Ok(());
    }
    if let Some(name) = &args.delete_preset {
        actions::delete_preset(store, name)?;
        return Ok(());
    }

    create(args, store).await
}

async fn create(args: CreateArgs, store: &Store) -> Result<()> {
    let runtime = detect_runtime(args.bundler_version.as_ref())?;
    let entry = compatibility::resolve(&runtime.bundler)?;
    let external = BundlerDefaults::load().detect();
    let last_used = parse_lenient(&store.last_used()?);
    let interactive = args.preset.is_none();

    if interactive {
        cliclack::intro("create-gem")?;
    }

    let gem_name = resolve_gem_name(&args)?;

    let selected = match &args.preset {
        Some(name) => load_preset(store, name, &gem_name, entry)?,
        None => run_wizard(&gem_name, entry, &last_used, &external, &runtime)?,
    };

    options::validate(&gem_name, &selected, entry)?;
    let command = command::build(&gem_name, &selected);

    let mut runner = Runner::stdout(args.dry_run);
    runner.run(&command).await?;

    store
        .save_last_used(&selected)
        .with_context(|| format!("Failed to save {}", store.path().display()))?;
    save_preset_if_requested(&args, store, &selected)?;

    if interactive {
        cliclack::outro("Happy hacking!")?;
    }

    Ok(())
}

fn resolve_gem_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = args.gem_name.as_deref().filter(|n| !n.is_empty()) {
        return Ok(name.to_string());
    }
    if args.preset.is_some() {
        return Err(Error::Validation("Gem name is required when --preset is provided".into()).into());
    }

    let name: String = cliclack::input("Gem name")
        .placeholder("my_gem")
        .validate(|input: &String| {
            if validator::is_valid_gem_name(input) {
                Ok(())
            } else {
                Err("Start with a letter; use letters, digits, _ or -")
            }
        })
        .interact()?;
    Ok(name)
}

fn load_preset(store: &Store, name: &str, gem_name: &str, entry: &Entry) -> Result<OptionMap> {
    let raw = store
        .preset(name)?
        .ok_or_else(|| Error::Validation(format!("Preset not found: {}", name)))?;
    Ok(options::validate_raw(gem_name, &raw, entry)?)
}

/// Wizard, summary, then create or edit again with the previous answers
fn run_wizard(
    gem_name: &str,
    entry: &Entry,
    last_used: &OptionMap,
    external: &OptionMap,
    runtime: &RuntimeVersions,
) -> Result<OptionMap> {
    cliclack::note("Controls", palette::controls(BACK_LABEL))?;

    let mut seed = last_used.clone();
    loop {
        let mut prompter = CliclackPrompter;
        let selected = Session::new(entry, &seed, external, &mut prompter).run()?;

        let command = command::build(gem_name, &selected);
        cliclack::note("create-gem summary", palette::summary(&command, runtime))?;

        let action: &str = cliclack::select("Next step")
            .item("create", "create", "")
            .item("edit", "edit again", "")
            .interact()?;

        if action == "create" {
            return Ok(selected);
        }
        seed = selected;
    }
}

fn save_preset_if_requested(args: &CreateArgs, store: &Store, selected: &OptionMap) -> Result<()> {
    if let Some(name) = &args.save_preset {
        store.save_preset(name, selected)?;
        return Ok(());
    }
    if args.preset.is_some() {
        return Ok(());
    }

    let save: bool = cliclack::confirm("Save these options as a preset?")
        .initial_value(false)
        .interact()?;
    if save {
        let name: String = cliclack::input("Preset name")
            .required(true)
            .validate(|input: &String| validate_preset_name(input))
            .interact()?;
        store.save_preset(name.trim(), selected)?;
        cliclack::log::success(format!("Saved preset {}", name.trim()))?;
    }

    Ok(())
}

fn validate_preset_name(input: &str) -> std::result::Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Preset name cannot be blank")
    } else {
        Ok(())
    }
}
