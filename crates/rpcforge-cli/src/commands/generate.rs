//! Implementation of the `rpcforge generate` command.
//!
//! Responsibility: turn arguments and config into a `MethodSpecification`
//! and `ScaffoldOptions`, wire the adapters, call the core scaffold service,
//! and display the report. No business logic lives here.

use std::{io::IsTerminal as _, path::PathBuf, sync::Arc};

use tracing::{debug, info, instrument};

use rpcforge_adapters::{
    FilesystemTemplateLoader, InMemoryStore, LocalFilesystem, OverlayFilesystem, SimpleRenderer,
    builtin_projects, registry_loader,
};
use rpcforge_core::{
    application::{ScaffoldOptions, ScaffoldService, ports::Filesystem},
    domain::{DuplicatePolicy, MethodSpecification, ProjectRegistry},
    error::ForgeError,
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `rpcforge generate` command.
///
/// Dispatch sequence:
/// 1. Fill in missing inputs (config defaults, then prompts)
/// 2. Validate them into a `MethodSpecification`
/// 3. Build the registry and template store from built-ins plus config
/// 4. Run the scaffold, against an overlay when `--dry-run`
/// 5. Print the report; any failed artifact makes the exit code non-zero.
///    A run stopped by a patch error still prints what it wrote.
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let inputs = resolve_inputs(&args, &config, &global)?;
    let spec = MethodSpecification::new(
        &inputs.project,
        &inputs.path,
        &inputs.method,
        &inputs.author,
    )
    .map_err(ForgeError::from)?;
    let options = build_options(&args, &config);

    debug!(%spec, root = %options.root.display(), dry_run = options.dry_run, "Inputs resolved");

    let registry = build_registry(&config);
    if !registry.contains(spec.project_id()) {
        output.warning(&format!(
            "Project '{}' is not configured; wiring values will be blank",
            spec.project_id()
        ))?;
    }

    let store = Arc::new(InMemoryStore::with_builtin()?);
    if let Some(dir) = &config.templates.local_path {
        let applied = FilesystemTemplateLoader::new(dir).apply_to(store.as_ref())?;
        info!(applied, dir = %dir.display(), "Template overrides loaded");
    }

    let overlay = options
        .dry_run
        .then(|| OverlayFilesystem::new(LocalFilesystem::new()));
    let filesystem: Box<dyn Filesystem> = match &overlay {
        Some(overlay) => Box::new(overlay.clone()),
        None => Box::new(LocalFilesystem::new()),
    };

    let service = ScaffoldService::new(
        Box::new(SimpleRenderer::new(store)),
        filesystem,
        registry,
        config.layout.clone(),
    );

    let spinner = output.spinner(&format!("Scaffolding {spec}..."));
    let result = service.generate(&spec, &options);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let report = match result {
        Ok(report) => report,
        Err(err) => {
            if let Some(partial) = err.partial_report() {
                output.report(partial)?;
            }
            return Err(err.into());
        }
    };

    output.report(&report)?;

    if let Some(overlay) = overlay {
        output.info(&format!(
            "Dry run: {} file(s) would be written, nothing was changed",
            overlay.pending_writes().len()
        ))?;
    }

    if report.has_failures() {
        return Err(CliError::PartialFailure {
            failed: report.failed(),
        });
    }

    if !report.dry_run {
        output.success(&format!(
            "{} ready: {} created, {} patched",
            report.interface_name,
            report.created(),
            report.patched()
        ))?;
    }
    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
struct Inputs {
    project: String,
    path: String,
    method: String,
    author: String,
}

fn resolve_inputs(args: &GenerateArgs, config: &AppConfig, global: &GlobalArgs) -> CliResult<Inputs> {
    let author = args
        .author
        .clone()
        .or_else(|| config.defaults.author.clone())
        .or_else(|| std::env::var("USER").ok())
        .filter(|a| !a.trim().is_empty());

    let can_prompt = !global.quiet && std::io::stdin().is_terminal();

    Ok(Inputs {
        project: value_or_prompt(args.project.clone(), "Project id", can_prompt)?,
        path: value_or_prompt(args.path.clone(), "Route path", can_prompt)?,
        method: value_or_prompt(args.method.clone(), "Method name", can_prompt)?,
        author: value_or_prompt(author, "Author", can_prompt)?,
    })
}

fn value_or_prompt(value: Option<String>, label: &str, can_prompt: bool) -> CliResult<String> {
    match value {
        Some(v) => Ok(v),
        None if can_prompt => prompt(label),
        // Blank values are rejected with a field-specific message by
        // MethodSpecification::new.
        None => Ok(String::new()),
    }
}

#[cfg(feature = "interactive")]
fn prompt(label: &str) -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: format!("failed to read {label}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt(_label: &str) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Options and wiring ────────────────────────────────────────────────────────

fn build_options(args: &GenerateArgs, config: &AppConfig) -> ScaffoldOptions {
    ScaffoldOptions {
        root: args
            .root
            .clone()
            .or_else(|| config.defaults.root.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
        dry_run: args.dry_run,
        overwrite: args.force || config.generate.overwrite,
        on_duplicate: args
            .on_duplicate
            .map(DuplicatePolicy::from)
            .unwrap_or(config.generate.on_duplicate),
        date: args.date.clone(),
    }
}

/// Built-in catalogue with `[projects.*]` from config layered on top.
fn build_registry(config: &AppConfig) -> ProjectRegistry {
    let mut registry = builtin_projects::registry();
    registry.merge(registry_loader::into_registry(config.projects.clone()));
    registry
}

// ── Tests ─────────────────────────────────────────────────────────────────────
