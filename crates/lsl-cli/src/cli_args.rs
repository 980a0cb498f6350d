use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lslgen")]
#[command(about = "Generate LSL scripts from JSON recipes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Build(BuildArgs),
    Batch(BatchArgs),
    Events(EventsArgs),
}

#[derive(Debug, Args)]
pub(crate) struct BuildArgs {
    #[arg(long = "recipe")]
    pub(crate) recipe: String,
    #[arg(long = "out")]
    pub(crate) out: Option<String>,
    #[arg(long = "keep-placeholders")]
    pub(crate) keep_placeholders: bool,
}

#[derive(Debug, Args)]
pub(crate) struct BatchArgs {
    #[arg(long = "recipes-dir")]
    pub(crate) recipes_dir: String,
    #[arg(long = "out-dir")]
    pub(crate) out_dir: String,
}

#[derive(Debug, Args)]
pub(crate) struct EventsArgs {
    #[arg(long = "json")]
    pub(crate) json: bool,
}
