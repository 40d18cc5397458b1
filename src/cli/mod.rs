//! CLI argument parsing for modelpin.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// modelpin: prompt templates that pin a model.
///
/// Templates are markdown files with a `model:` metadata field, found in the
/// global prompts directory and in `.modelpin/prompts/` of the working
/// directory. Running a template switches to its model, sends the expanded
/// prompt, and restores the previous model when the response completes.
#[derive(Parser, Debug)]
#[command(name = "modelpin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working directory used to find project prompts (default: current directory).
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Config file (default: <agent dir>/modelpin.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). MODELPIN_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for modelpin.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List model-bound templates.
    ///
    /// Project templates replace global templates with the same name.
    List(ListArgs),

    /// Show one template's metadata and body.
    Show(ShowArgs),

    /// Resolve a model spec (`id` or `provider/id`) against the model catalog.
    Resolve(ResolveArgs),

    /// Print a template body with arguments substituted.
    Expand(ExpandArgs),

    /// Run a template against the model catalog.
    ///
    /// Switches to the template's model, prints the message that would be
    /// sent, then completes the response and restores the previous model.
    Run(RunArgs),
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template name (file name without `.md`).
    pub name: String,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Model spec, e.g. `claude-sonnet-4-5` or `anthropic/claude-sonnet-4-5`.
    pub spec: String,

    /// Model catalog (default: <agent dir>/models.yaml).
    #[arg(long)]
    pub models: Option<PathBuf>,
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Template name.
    pub name: String,

    /// Argument string; quote it to pass several words, e.g. 'a "b c"'.
    #[arg(allow_hyphen_values = true)]
    pub args: Option<String>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Template name.
    pub name: String,

    /// Argument string passed to the template.
    #[arg(allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Model catalog (default: <agent dir>/models.yaml).
    #[arg(long)]
    pub models: Option<PathBuf>,

    /// Model active before the run (default: first credentialed catalog model).
    #[arg(long)]
    pub current: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
