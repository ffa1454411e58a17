use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aniracetam", version, about = "Terminal language learning with spaced repetition")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Translate a sentence and add it to the collection
    Add {
        /// English sentence; asked for when omitted
        sentence: Option<String>,
    },
    /// Review the sentences that are due
    Review,
    /// List the sentences that are due
    Due {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show collection statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the language being learned
    Language {
        /// Language code such as "es" or "fr"
        code: Option<String>,
    },
}
