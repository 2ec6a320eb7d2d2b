use afterburner::config::HintOptions;
use afterburner::hints::OverrideStore;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with hint options; explicit flags still win.
    #[arg(global = true, long)]
    options: Option<String>,

    /// JSON file replacing the built-in word override table.
    #[arg(global = true, long)]
    overrides: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Annotate(cmd::annotate::AnnotateArgs),
    Overrides(cmd::overrides::OverridesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let store = match &cli.overrides {
        Some(path) => OverrideStore::load_from_file(path).unwrap_or_else(|e| {
            error!("❌ Invalid override table '{}': {}", path, e);
            process::exit(1);
        }),
        None => OverrideStore::builtin().clone(),
    };
    let store = Arc::new(store);

    let result = match &cli.command {
        Commands::Annotate(args) => {
            let sub_matches = subcommand_matches(&matches, "annotate");
            let options = resolve_options(&cli, &args.options, sub_matches);
            cmd::annotate::run(args, options, store)
        }
        Commands::Overrides(args) => cmd::overrides::run(args, &store),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn subcommand_matches<'a>(matches: &'a ArgMatches, name: &str) -> &'a ArgMatches {
    matches.subcommand_matches(name).unwrap_or(matches)
}

fn resolve_options(cli: &Cli, cli_options: &HintOptions, sub_matches: &ArgMatches) -> HintOptions {
    let Some(path) = &cli.options else {
        return *cli_options;
    };

    info!("⚙️  Loading hint options from: {}", path);
    let mut options = HintOptions::load_from_file(path).unwrap_or_else(|e| {
        error!("❌ Failed to load options '{}': {}", path, e);
        process::exit(1);
    });
    options.merge_from_cli(cli_options, sub_matches);
    options
}
