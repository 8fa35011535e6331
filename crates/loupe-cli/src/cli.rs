use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "loupe",
    about = "loupe — decode loose objects from a content-addressed store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode one object and print its record
    Cat(CatArgs),
    /// Decode the commit a branch ref file points at
    Head(HeadArgs),
}

#[derive(Args)]
pub struct CatArgs {
    /// 40-hex-character object identifier
    pub id: String,

    /// Object store root
    #[arg(long, default_value = ".git/objects")]
    pub root: String,
}

#[derive(Args)]
pub struct HeadArgs {
    /// Repository metadata directory
    #[arg(long, default_value = ".git")]
    pub git_dir: String,

    /// Branch whose ref file to read
    #[arg(long, default_value = "master")]
    pub branch: String,
}
