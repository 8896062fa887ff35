//! create-gem - interactive wizard for `bundle gem`

use clap::Parser;
use create_gem_core::tui::{is_interrupted, CreateArgs};
use create_gem_core::Store;
use semver::Version;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CREATE_GEM_LOG";

#[derive(Parser, Debug)]
#[command(name = "create-gem")]
#[command(about = "Interactive wizard for `bundle gem`, limited to what your Bundler supports")]
#[command(version)]
pub struct Args {
    /// Name of the gem to create
    pub gem_name: Option<String>,

    /// Create the gem from a saved preset without prompting
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Save the final options under this preset name
    #[arg(long = "save-preset", value_name = "NAME")]
    pub save_preset: Option<String>,

    /// List saved preset names
    #[arg(
        long = "list-presets",
        conflicts_with_all = ["gem_name", "preset", "save_preset", "show_preset", "delete_preset"]
    )]
    pub list_presets: bool,

    /// Print a saved preset
    #[arg(
        long = "show-preset",
        value_name = "NAME",
        conflicts_with_all = ["gem_name", "preset", "save_preset", "delete_preset"]
    )]
    pub show_preset: Option<String>,

    /// Delete a saved preset
    #[arg(
        long = "delete-preset",
        value_name = "NAME",
        conflicts_with_all = ["gem_name", "preset", "save_preset"]
    )]
    pub delete_preset: Option<String>,

    /// Print Ruby, RubyGems and Bundler versions and the supported options
    #[arg(
        long,
        conflicts_with_all = ["gem_name", "preset", "save_preset", "list_presets", "show_preset", "delete_preset"]
    )]
    pub doctor: bool,

    /// Print the `bundle gem` command instead of running it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Use this Bundler version instead of detecting it
    #[arg(long = "bundler-version", value_name = "X.Y.Z")]
    pub bundler_version: Option<Version>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            gem_name: args.gem_name,
            preset: args.preset,
            save_preset: args.save_preset,
            list_presets: args.list_presets,
            show_preset: args.show_preset,
            delete_preset: args.delete_preset,
            doctor: args.doctor,
            dry_run: args.dry_run,
            bundler_version: args.bundler_version,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside of prompts
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        eprintln!("\nSee ya!");
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing();

    let code = match Store::open_default() {
        Ok(store) => {
            let result = create_gem_core::run(args.into(), &store).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            match result {
                Ok(()) => 0,
                Err(err) if is_interrupted(&err) => {
                    eprintln!("See ya!");
                    130
                }
                Err(err) => {
                    eprintln!("Error: {:#}", err);
                    1
                }
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            1
        }
    };

    std::process::exit(code);
}
