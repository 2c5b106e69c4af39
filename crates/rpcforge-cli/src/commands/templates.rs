//! Implementation of the `rpcforge templates` command.

use rpcforge_adapters::{FilesystemTemplateLoader, InMemoryStore};
use rpcforge_core::application::ports::TemplateStore;

use crate::{
    cli::{ListFormat, TemplatesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = InMemoryStore::with_builtin()?;
    if let Some(dir) = &config.templates.local_path {
        FilesystemTemplateLoader::new(dir).apply_to(&store)?;
    }

    if let Some(id) = args.show {
        print!("{}", store.get(&id)?);
        return Ok(());
    }

    let entries = store.list()?;

    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for entry in &entries {
                output.print(&format!("  {:<14} {}", entry.id, entry.origin))?;
            }
        }
        ListFormat::Json => output.json(&entries)?,
        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }
        ListFormat::Csv => {
            println!("id,origin");
            for entry in &entries {
                println!("{},{}", entry.id, entry.origin);
            }
        }
    }

    Ok(())
}
