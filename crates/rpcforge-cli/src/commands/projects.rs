//! Implementation of the `rpcforge projects` command.

use serde::Serialize;

use rpcforge_adapters::{builtin_projects, registry_loader};
use rpcforge_core::domain::{ProjectDescriptor, ProjectRegistry};

use crate::{
    cli::{ListFormat, ProjectsArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One registry entry, as listed.
#[derive(Debug, Serialize)]
struct ProjectRow<'a> {
    id: &'a str,
    wired: bool,
    constants_type: &'a str,
    constants_file: &'a str,
    service_proxy: &'a str,
    core_proxy: &'a str,
}

impl<'a> From<&'a ProjectDescriptor> for ProjectRow<'a> {
    fn from(d: &'a ProjectDescriptor) -> Self {
        Self {
            id: &d.project_id,
            wired: !d.is_blank(),
            constants_type: d.constants_type.trim(),
            constants_file: d.constants_file.trim(),
            service_proxy: d.service_proxy.trim(),
            core_proxy: d.core_proxy.trim(),
        }
    }
}

pub fn execute(args: ProjectsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut registry: ProjectRegistry = builtin_projects::registry();
    registry.merge(registry_loader::into_registry(config.projects));

    let rows: Vec<ProjectRow<'_>> = registry.iter().map(ProjectRow::from).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Known projects:")?;
            for row in &rows {
                let state = if row.wired { "wired" } else { "blank" };
                output.print(&format!("  {:<18} {state}", row.id))?;
                if row.wired {
                    for (label, value) in [
                        ("constants", row.constants_type),
                        ("file", row.constants_file),
                        ("proxy", row.service_proxy),
                        ("core proxy", row.core_proxy),
                    ] {
                        if !value.is_empty() {
                            output.print(&format!("      {label:<11} {value}"))?;
                        }
                    }
                }
            }
        }
        ListFormat::Json => output.json(&rows)?,
        ListFormat::List => {
            for row in &rows {
                println!("{}", row.id);
            }
        }
        ListFormat::Csv => {
            println!("id,wired,constants_type,constants_file,service_proxy,core_proxy");
            for row in &rows {
                println!(
                    "{},{},{},{},{},{}",
                    row.id,
                    row.wired,
                    row.constants_type,
                    row.constants_file,
                    row.service_proxy,
                    row.core_proxy
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_marks_blank_descriptors() {
        let blank = ProjectDescriptor::blank("refundcore");
        let row = ProjectRow::from(&blank);
        assert_eq!(row.id, "refundcore");
        assert!(!row.wired);

        let registry = builtin_projects::registry();
        let treasure = registry.get("treasurecore").unwrap();
        assert!(ProjectRow::from(treasure).wired);
    }
}
