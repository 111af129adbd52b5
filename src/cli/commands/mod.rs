use std::path::{Path, PathBuf};

use clap::Subcommand;

pub mod delocalize;
pub mod localize;

/// Expand a leading tilde in a user-supplied path.
fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Move inline text strings out of data files into text files
    Localize {
        /// Work directory containing the input xml files
        #[arg(short, long)]
        workdir: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long)]
        output: PathBuf,

        /// Language attribute for the result text file(s)
        /// (de, es, fr, it, pl, pt, ru, zh-Hans; anything else means none)
        #[arg(short, long)]
        language: String,

        /// Combine exactly equal text strings under one identifier
        #[arg(long)]
        check_same_strings: bool,

        /// Split the result text files into categories based on source file
        #[arg(long)]
        split_result: bool,
    },

    /// Insert text strings from text files back into data files
    Delocalize {
        /// Work directory containing the input xml files
        #[arg(short, long)]
        workdir: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long)]
        output: PathBuf,

        /// Language attribute to look up in the text files
        /// (de, es, fr, it, pl, pt, ru, zh-Hans; anything else means none)
        #[arg(short, long)]
        language: String,

        /// Placeholder written when no text is found for an id
        #[arg(long, default_value = "TEXT_NOT_FOUND")]
        empty_string: String,

        /// Also replace the reserved "continue" id
        #[arg(long)]
        replace_continue: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Localize {
                workdir,
                output,
                language,
                check_same_strings,
                split_result,
            } => localize::execute(
                &expand_path(workdir),
                &expand_path(output),
                language,
                *check_same_strings,
                *split_result,
            ),
            Commands::Delocalize {
                workdir,
                output,
                language,
                empty_string,
                replace_continue,
            } => delocalize::execute(
                &expand_path(workdir),
                &expand_path(output),
                language,
                empty_string,
                !*replace_continue,
            ),
        }
    }
}
