//! `validate` action

use super::load_oracle;
use anyhow::{bail, Result};
use printsafe_ops::{messages, OpsError, Outcome, RunOptions};
use printsafe_svg::Document;
use tracing::{info, warn};

/// Flags out-of-gamut elements and returns the status message.
pub fn run(doc: &mut Document, opts: &RunOptions) -> Result<String> {
    match printsafe_ops::run(Some(doc), opts, load_oracle) {
        Ok(Outcome::Validated(report)) => {
            info!(flagged = report.flagged, "validate done");
            Ok(messages::validated(&report))
        }
        Ok(other) => bail!("unexpected outcome: {other:?}"),
        Err(OpsError::InvalidProfilePath(path)) => {
            warn!(?path, "abort: bad ICC");
            Ok(messages::BAD_PROFILE.to_string())
        }
        Err(err @ OpsError::Icc(_)) => {
            warn!(error = %err, "transform build failed");
            Ok(messages::transform_failed(&err))
        }
        Err(err) => Err(err.into()),
    }
}
