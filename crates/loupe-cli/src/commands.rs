use std::path::PathBuf;

use colored::Colorize;
use loupe_object::{ObjectId, ObjectInfo};
use loupe_store::{read_ref_file, LooseStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Cat(args) => cmd_cat(args, &cli.format),
        Command::Head(args) => cmd_head(args, &cli.format),
    }
}

fn cmd_cat(args: CatArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let id = ObjectId::from_hex(args.id.trim())?;
    let store = LooseStore::new(&args.root);
    let info = store.cat(&id)?;
    print_record(&id, &info, format)
}

fn cmd_head(args: HeadArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let git_dir = PathBuf::from(&args.git_dir);
    let id = read_ref_file(git_dir.join("refs/heads").join(&args.branch))?;
    println!("{} {}", args.branch.yellow().bold(), id);
    let store = LooseStore::new(git_dir.join("objects"));
    let info = store.cat(&id)?;
    print_record(&id, &info, format)
}

fn print_record(id: &ObjectId, info: &ObjectInfo, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(info)?),
        OutputFormat::Text => {
            println!("{} {} ({} bytes)", info.kind.to_string().green().bold(), id.short_hex().dimmed(), info.declared_size);
            for (key, values) in info.fields.iter() {
                for value in values {
                    println!("  {} {}", format!("{key}:").bold(), value.cyan());
                }
            }
            if !info.message.is_empty() {
                println!("\n{}", info.message);
            }
        }
    }
    Ok(())
}
