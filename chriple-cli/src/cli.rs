use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chriple", about = "Dictionary-encode RDF triple dumps", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Input field delimiter.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    /// Tab-separated fields (RDF dump format)
    Tab,
    /// Space-separated fields (legacy format)
    Space,
}

impl From<DelimiterArg> for chriple_encode::Delimiter {
    fn from(d: DelimiterArg) -> Self {
        match d {
            DelimiterArg::Tab => chriple_encode::Delimiter::Tab,
            DelimiterArg::Space => chriple_encode::Delimiter::Space,
        }
    }
}

/// Policy for lines that do not split into 3 or 4 fields.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MalformedArg {
    /// Fail fast on the first malformed line
    Abort,
    /// Skip malformed lines and report the count at the end
    Skip,
}

impl From<MalformedArg> for chriple_encode::MalformedPolicy {
    fn from(p: MalformedArg) -> Self {
        match p {
            MalformedArg::Abort => chriple_encode::MalformedPolicy::Abort,
            MalformedArg::Skip => chriple_encode::MalformedPolicy::Skip,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build noun and predicate dictionaries from a compressed triple dump
    Build {
        /// Gzip-compressed triple dump, one triple per line
        input: PathBuf,

        /// Output path for the noun dictionary
        #[arg(long, default_value = "nouns.dict")]
        nouns: PathBuf,

        /// Output path for the predicate dictionary
        #[arg(long, default_value = "predicates.dict")]
        predicates: PathBuf,

        /// Input field delimiter
        #[arg(long, value_enum, default_value_t = DelimiterArg::Tab)]
        delimiter: DelimiterArg,

        /// Malformed-line policy
        #[arg(long = "on-malformed", value_enum, default_value_t = MalformedArg::Abort)]
        on_malformed: MalformedArg,

        /// Replace existing dictionary files instead of refusing
        #[arg(long)]
        force: bool,
    },

    /// Encode a compressed triple dump against pre-built dictionaries
    Encode {
        /// Gzip-compressed triple dump, one triple per line
        input: PathBuf,

        /// Path to the noun dictionary
        #[arg(long, default_value = "nouns.dict")]
        nouns: PathBuf,

        /// Path to the predicate dictionary
        #[arg(long, default_value = "predicates.dict")]
        predicates: PathBuf,

        /// Gzip-compressed output file (default: uncompressed stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Input field delimiter
        #[arg(long, value_enum, default_value_t = DelimiterArg::Tab)]
        delimiter: DelimiterArg,

        /// Malformed-line policy
        #[arg(long = "on-malformed", value_enum, default_value_t = MalformedArg::Abort)]
        on_malformed: MalformedArg,
    },
}
