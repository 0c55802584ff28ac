//! `chriple build` — the one-pass dictionary build.
//!
//! Streams the compressed corpus once, inserting every subject/object
//! surface form into the noun dictionary and every predicate into the
//! predicate dictionary, then persists both stores. Rebuilding against
//! existing stores is undefined behavior by contract, so the command
//! refuses to overwrite unless `--force` replaces them wholesale.
//! Replacement happens only after a successful build pass, via a
//! write-then-rename of each store, so a failed run leaves any existing
//! dictionaries untouched.

use crate::error::{CliError, CliResult};
use chriple_dict::{dict_io, KeyStoreBuilder};
use chriple_encode::{Delimiter, EncodeError, MalformedPolicy, TripleReader};
use std::path::Path;
use tracing::{info, warn};

/// Persist a store next to its target path, then rename into place.
fn persist(path: &Path, store: &KeyStoreBuilder) -> CliResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);
    dict_io::write_key_store(&tmp, store)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn run(
    input: &Path,
    nouns_path: &Path,
    predicates_path: &Path,
    delimiter: Delimiter,
    policy: MalformedPolicy,
    force: bool,
    quiet: bool,
) -> CliResult<()> {
    for path in [nouns_path, predicates_path] {
        if path.exists() && !force {
            return Err(CliError::Usage(format!(
                "dictionary {} already exists; rebuilding into an existing store is undefined (pass --force to replace it)",
                path.display()
            )));
        }
    }

    let mut nouns = KeyStoreBuilder::new();
    let mut predicates = KeyStoreBuilder::new();
    let mut lines_skipped: u64 = 0;
    let mut triples_read: u64 = 0;

    let reader = TripleReader::open_gzip(input, delimiter)
        .map_err(|e| CliError::Input(format!("failed to open {}: {e}", input.display())))?;
    for item in reader {
        match item {
            Ok(raw) => {
                nouns.insert_unique(&raw.subject);
                predicates.insert_unique(&raw.predicate);
                nouns.insert_unique(&raw.object);
                triples_read += 1;
            }
            Err(EncodeError::MalformedLine { line, field_count })
                if policy == MalformedPolicy::Skip =>
            {
                warn!(line, field_count, "skipping malformed line");
                lines_skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    persist(nouns_path, &nouns)?;
    persist(predicates_path, &predicates)?;

    info!(
        "built dictionaries from {} triples ({} lines skipped): {} nouns → {}, {} predicates → {}",
        triples_read,
        lines_skipped,
        nouns.len(),
        nouns_path.display(),
        predicates.len(),
        predicates_path.display(),
    );
    if !quiet {
        println!(
            "{} nouns, {} predicates from {} triples ({} lines skipped)",
            nouns.len(),
            predicates.len(),
            triples_read,
            lines_skipped,
        );
    }
    Ok(())
}
