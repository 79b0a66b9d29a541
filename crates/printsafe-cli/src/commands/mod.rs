//! Action implementations

pub mod clear;
pub mod palette;
pub mod validate;

use crate::Cli;
use anyhow::{bail, Context, Result};
use printsafe_icc::{GamutOracle, IccResult, Intent};
use printsafe_ops::Action;
use printsafe_svg::Document;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Runs the selected action, reports its status and writes the document.
///
/// The document is written even when the action reports a failure, so the
/// host always gets it back.
pub fn run(cli: &Cli) -> Result<()> {
    let opts = cli.run_options();
    let mut doc = cli.document.as_deref().map(load_document).transpose()?;

    let status = match (opts.action, doc.as_mut()) {
        (Action::Palette, _) => palette::run(&opts, cli.palette_dir.as_deref()),
        (Action::Validate, Some(doc)) => validate::run(doc, &opts),
        (Action::Clear, Some(doc)) => clear::run(doc, &opts),
        (action, None) => bail!("no document given for '{action}'"),
    };

    if let Some(doc) = &doc {
        write_document(doc, cli.output.as_deref())?;
    }
    eprintln!("{}", status?);
    Ok(())
}

/// Load document from path
pub fn load_document(path: &Path) -> Result<Document> {
    Document::from_file(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Write document to `output`, or stdout
pub fn write_document(doc: &Document, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => doc
            .to_file(path)
            .with_context(|| format!("Failed to save: {}", path.display())),
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            doc.write_to(&mut out).context("Failed to write document")?;
            out.flush().context("Failed to write document")
        }
    }
}

/// Oracle factory for the actions.
pub fn load_oracle(path: &Path, intent: Intent) -> IccResult<GamutOracle> {
    let oracle = GamutOracle::from_file(path, intent)?;
    debug!(
        profile = %oracle.device().base_name(),
        description = %oracle.device().description(),
        intent = oracle.intent().as_str(),
        "profile loaded"
    );
    Ok(oracle)
}
