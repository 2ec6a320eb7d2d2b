use crate::reports;
use afterburner::api::HintService;
use afterburner::config::HintOptions;
use afterburner::error::{AfterburnerError, HintResult};
use afterburner::hints::OverrideStore;
use afterburner::layouts::KnownLayout;
use clap::Args;
use std::fs;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub options: HintOptions,

    /// Practice text to annotate.
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the practice text from a file.
    #[arg(short, long)]
    pub file: Option<String>,

    #[arg(short, long, default_value = "afterburner")]
    pub layout: String,

    /// Print JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Ignore suppression and overrides; show what the bare rules say.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

pub fn run(args: &AnnotateArgs, options: HintOptions, store: Arc<OverrideStore>) -> HintResult<()> {
    let layout = KnownLayout::from_str(&args.layout)
        .map_err(|_| AfterburnerError::Config(format!("Unknown layout '{}'", args.layout)))?;

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            debug!("Reading practice text from {}", path);
            fs::read_to_string(path)?
        }
        (None, None) => {
            return Err(AfterburnerError::Config(
                "Nothing to annotate: pass --text or --file".to_string(),
            ))
        }
    };

    let options = if args.raw { HintOptions::none() } else { options };
    debug!("Hint options: {:?}", options);

    if !layout.has_magic_keys() {
        info!("Layout '{}' has no magic keys; all hints are none.", layout);
    }

    let service = HintService::new(layout, options).with_store(store);
    let lines = service.annotate(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for line in &lines {
        reports::print_line_hints(line);
    }
    reports::print_hint_summary(&lines);
    Ok(())
}
