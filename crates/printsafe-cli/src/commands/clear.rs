//! `clear` action

use super::load_oracle;
use anyhow::{bail, Result};
use printsafe_ops::{messages, Outcome, RunOptions};
use printsafe_svg::Document;
use tracing::info;

/// Clears all flags and returns the status message.
pub fn run(doc: &mut Document, opts: &RunOptions) -> Result<String> {
    match printsafe_ops::run(Some(doc), opts, load_oracle)? {
        Outcome::Cleared(count) => {
            info!(count, "clear done");
            Ok(messages::cleared(count))
        }
        other => bail!("unexpected outcome: {other:?}"),
    }
}
