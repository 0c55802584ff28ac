//! `chriple encode` — the encoding run.
//!
//! Opens both dictionaries read-only (fatal if either is missing or
//! corrupt, before any processing), then streams input → encoder → output.
//! The run report goes to stderr so that stdout stays a clean triple stream
//! when no output file is given.

use crate::error::{CliError, CliResult};
use chriple_encode::{pipeline, Delimiter, MalformedPolicy, TripleEncoder, TripleReader, TripleWriter};
use std::path::Path;
use tracing::info;

pub fn run(
    input: &Path,
    nouns_path: &Path,
    predicates_path: &Path,
    output: Option<&Path>,
    delimiter: Delimiter,
    policy: MalformedPolicy,
    quiet: bool,
) -> CliResult<()> {
    let nouns = pipeline::open_key_store(nouns_path)?;
    let predicates = pipeline::open_key_store(predicates_path)?;
    info!(
        nouns = nouns.len(),
        predicates = predicates.len(),
        "dictionaries loaded"
    );

    let reader = TripleReader::open_gzip(input, delimiter)
        .map_err(|e| CliError::Input(format!("failed to open {}: {e}", input.display())))?;
    let mut encoder = TripleEncoder::new(&nouns, &predicates);

    let report = match output {
        Some(path) => {
            let mut writer = TripleWriter::create_gzip(path)?;
            let report = pipeline::run(reader, &mut encoder, &mut writer, policy)?;
            writer.finish()?;
            report
        }
        None => {
            let mut writer = TripleWriter::stdout();
            pipeline::run(reader, &mut encoder, &mut writer, policy)?
        }
    };

    if !quiet {
        eprintln!(
            "{} triples encoded, {} lines skipped",
            report.triples_written, report.lines_skipped
        );
    }
    Ok(())
}
