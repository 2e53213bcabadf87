//! Command-line interface for the wikirag-server binary.
//!
//! Uses clap for argument parsing and owo-colors for terminal output.

pub mod output;

use crate::types::Result;
use crate::utils::config::WikiRagConfig;
use crate::AppState;
use clap::{Parser, Subcommand};
use output::Output;
use std::path::PathBuf;

/// wikirag - question answering over a wiki corpus
#[derive(Parser, Debug)]
#[command(
    name = "wikirag-server",
    version,
    about = "Retrieval augmented question answering over a wiki corpus",
    after_help = "EXAMPLES:\n    \
                  wikirag-server                              # Serve on the configured address\n    \
                  wikirag-server serve --port 9000            # Override the port\n    \
                  wikirag-server ask \"Who painted the Mona Lisa?\""
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "wikirag.toml", env = "WIKIRAG_CONFIG", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the corpus and serve the HTTP API
    Serve(ServeArgs),

    /// Load the corpus, answer one question and exit
    Ask {
        /// The question to answer
        question: String,

        /// Corpus file (overrides config)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
}

/// Overrides for `serve`
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Host address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,

    /// Corpus file (overrides config)
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut WikiRagConfig) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref corpus) = self.corpus {
            config.corpus.path = corpus.clone();
        }
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Answer one question and print it.
///
/// A pipeline failure is printed and returned so the caller can exit
/// non-zero through normal unwinding.
pub async fn run_ask(state: &AppState, question: &str, output: &Output) -> Result<()> {
    match state.pipeline.answer(question).await {
        Ok(answer) => {
            output.answer(question, &answer);
            Ok(())
        }
        Err(e) => {
            output.error(&e.to_string());
            Err(e)
        }
    }
}
