use crate::reports;
use afterburner::error::{AfterburnerError, HintResult};
use afterburner::hints::OverrideStore;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct OverridesArgs {
    /// Show the parsed slots for a single word.
    #[arg(short, long)]
    pub word: Option<String>,
}

pub fn run(args: &OverridesArgs, store: &OverrideStore) -> HintResult<()> {
    match &args.word {
        Some(word) => {
            let slots = store
                .override_for(word)
                .ok_or_else(|| AfterburnerError::Config(format!("No override for '{}'", word)))?;
            reports::print_override_slots(word, slots);
        }
        None => reports::print_override_table(&store.entries()),
    }
    Ok(())
}
