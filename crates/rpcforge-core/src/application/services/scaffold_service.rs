//! Scaffold Service - main application orchestrator.
//!
//! One call to [`ScaffoldService::generate`] runs the whole workflow:
//! 1. Resolve the interface that owns the route (fatal if its directory is missing)
//! 2. Plan names, namespaces and paths
//! 3. Render the eight always-new artifacts (best effort)
//! 4. Patch or create the interface, registering new ones in the wiring file
//! 5. Patch or create the implementation
//! 6. Append the operation constant to the project's constants holder
//!
//! New-file failures are recorded in the report and the run continues.
//! Failures while patching an existing file stop the run.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        services::{
            facade_resolver::FacadeResolver,
            report::{ArtifactOutcome, RunReport},
        },
    },
    domain::{
        ArtifactKind, ArtifactPlan, ArtifactPlanner, ArtifactTarget, Declaration,
        DuplicatePolicy, MethodSpecification, PatchOutcome, ProjectDescriptor, ProjectRegistry,
        SourceLayout, SourcePatcher,
    },
    error::ForgeResult,
};

/// Per-run knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Repository root every layout path is relative to.
    pub root: PathBuf,
    /// Recorded in the report; the caller supplies a non-persisting filesystem.
    pub dry_run: bool,
    /// Re-render new-artifact files that already exist.
    pub overwrite: bool,
    pub on_duplicate: DuplicatePolicy,
    /// Fixed `yyyy-MM-dd` date; today when `None`.
    pub date: Option<String>,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            overwrite: false,
            on_duplicate: DuplicatePolicy::default(),
            date: None,
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    registry: ProjectRegistry,
    layout: SourceLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and
    /// configuration.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        registry: ProjectRegistry,
        layout: SourceLayout,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            registry,
            layout,
        }
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }

    /// Resolve and plan without touching any file.
    pub fn plan(&self, spec: &MethodSpecification, options: &ScaffoldOptions) -> ForgeResult<ArtifactPlan> {
        let project = self.registry.lookup(spec.project_id());
        let resolution = FacadeResolver::new(self.filesystem.as_ref()).resolve(
            &options.root,
            &self.layout.facade_dir(spec.project_id()),
            spec.route_path(),
            &self.layout.file_extension,
        )?;

        let date = options
            .date
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

        Ok(ArtifactPlanner::plan(&project, spec, &resolution, &self.layout, &date))
    }

    /// Scaffold one operation.
    ///
    /// # Errors
    ///
    /// - `FacadeDirectoryMissing` before anything is written
    /// - `RunAborted` when an existing file cannot be patched. Earlier steps
    ///   stay written and the error carries their report.
    #[instrument(
        skip_all,
        fields(
            project = spec.project_id(),
            route = spec.route_path(),
            method = spec.method_name(),
            root = %options.root.display()
        )
    )]
    pub fn generate(&self, spec: &MethodSpecification, options: &ScaffoldOptions) -> ForgeResult<RunReport> {
        let project = self.registry.lookup(spec.project_id());
        if project.is_blank() {
            warn!("project is not in the registry, wiring values will be blank");
        }

        let plan = self.plan(spec, options)?;
        info!(
            interface = %plan.interface.type_name,
            matched = plan.interface_matched,
            "Plan ready"
        );

        let mut report = RunReport::new(
            spec.clone(),
            plan.interface.type_name.clone(),
            plan.interface_matched,
            options.dry_run,
        );

        for target in &plan.new_artifacts {
            let outcome = self.write_new(target, &plan, options);
            self.record(&mut report, target.kind, &target.file_path, outcome);
        }

        if let Err(source) = self.patch_steps(&plan, &project, options, &mut report) {
            warn!(error = %source, done = report.artifacts.len(), "Run stopped");
            return Err(ApplicationError::RunAborted {
                report: Box::new(report),
                source: Box::new(source),
            }
            .into());
        }

        info!(
            created = report.created(),
            patched = report.patched(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Scaffold finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Interface, implementation, then constants. Stops at the first failure.
    fn patch_steps(
        &self,
        plan: &ArtifactPlan,
        project: &ProjectDescriptor,
        options: &ScaffoldOptions,
        report: &mut RunReport,
    ) -> ForgeResult<()> {
        self.interface_step(plan, options, report)?;
        self.implementation_step(plan, project, options, report)?;
        self.constants_step(plan, project, options, report)
    }

    fn interface_step(
        &self,
        plan: &ArtifactPlan,
        options: &ScaffoldOptions,
        report: &mut RunReport,
    ) -> ForgeResult<()> {
        let target = &plan.interface;
        let path = options.root.join(&target.file_path);

        // An interface at the conventional path that does not bind the route
        // yet is still hand-written code: patch it rather than overwrite it.
        if plan.interface_matched || self.filesystem.exists(&path) {
            let decl = SourcePatcher::interface_method(&plan.names, &plan.method_name);
            let outcome = self.patch_existing(target, &path, &plan.dto_imports(), &decl, options)?;
            self.record(report, target.kind, &target.file_path, outcome);
            return Ok(());
        }

        let outcome = self.write_new(target, plan, options);
        let created = outcome == ArtifactOutcome::Created;
        self.record(report, target.kind, &target.file_path, outcome);

        if created {
            let outcome = self.register_service(target, options)?;
            self.record(report, ArtifactKind::ServiceRegistration, &self.layout.beans_file, outcome);
        }
        Ok(())
    }

    fn implementation_step(
        &self,
        plan: &ArtifactPlan,
        project: &ProjectDescriptor,
        options: &ScaffoldOptions,
        report: &mut RunReport,
    ) -> ForgeResult<()> {
        let target = &plan.implementation;
        let path = options.root.join(&target.file_path);

        let outcome = if self.filesystem.exists(&path) {
            let mut imports = plan.dto_imports();
            let constants_type = project.constants_type.trim();
            if !constants_type.is_empty() {
                imports.push(constants_type.to_string());
            }
            let decl = SourcePatcher::implementation_method(&plan.names, &plan.method_name, project);
            self.patch_existing(target, &path, &imports, &decl, options)?
        } else {
            self.write_new(target, plan, options)
        };

        self.record(report, target.kind, &target.file_path, outcome);
        Ok(())
    }

    fn constants_step(
        &self,
        plan: &ArtifactPlan,
        project: &ProjectDescriptor,
        options: &ScaffoldOptions,
        report: &mut RunReport,
    ) -> ForgeResult<()> {
        let Some(relative) = project.constants_file_path() else {
            self.record(
                report,
                ArtifactKind::Constants,
                Path::new(""),
                ArtifactOutcome::Skipped("no constants file configured".into()),
            );
            return Ok(());
        };

        let path = options.root.join(relative);
        let outcome = if self.filesystem.exists(&path) {
            let target = ArtifactTarget {
                kind: ArtifactKind::Constants,
                namespace: project.constants_namespace().to_string(),
                type_name: project.constants_type_name().to_string(),
                file_path: relative.to_path_buf(),
            };
            let decl = SourcePatcher::constant_field(&plan.names.constant);
            self.patch_existing(&target, &path, &[] as &[String], &decl, options)?
        } else {
            ArtifactOutcome::Skipped("constants file not found".into())
        };

        self.record(report, ArtifactKind::Constants, relative, outcome);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Render and write one fresh file. Never fails the run.
    fn write_new(
        &self,
        target: &ArtifactTarget,
        plan: &ArtifactPlan,
        options: &ScaffoldOptions,
    ) -> ArtifactOutcome {
        let path = options.root.join(&target.file_path);
        if !options.overwrite && self.filesystem.exists(&path) {
            return ArtifactOutcome::Skipped("already exists".into());
        }

        let Some(template_id) = target.kind.template_id() else {
            return ArtifactOutcome::Failed(format!("no template for {}", target.kind));
        };

        let result = self
            .renderer
            .render(template_id, &plan.context)
            .and_then(|content| {
                if let Some(parent) = path.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem.write_file(&path, &content)
            });

        match result {
            Ok(()) => ArtifactOutcome::Created,
            Err(e) => {
                warn!(kind = %target.kind, path = %path.display(), error = %e, "Generation failed, continuing");
                ArtifactOutcome::Failed(e.to_string())
            }
        }
    }

    /// Read-modify-write an existing file. Any failure is fatal.
    fn patch_existing(
        &self,
        target: &ArtifactTarget,
        path: &Path,
        imports: &[String],
        declaration: &Declaration,
        options: &ScaffoldOptions,
    ) -> ForgeResult<ArtifactOutcome> {
        let content = self.filesystem.read_to_string(path)?;

        let outcome = SourcePatcher::apply(&content, imports, declaration, options.on_duplicate)
            .map_err(|source| ApplicationError::PatchFailed {
                artifact: target.kind,
                path: target.file_path.clone(),
                source,
            })?;

        match outcome {
            PatchOutcome::Patched(updated) => {
                self.filesystem.write_file(path, &updated)?;
                Ok(ArtifactOutcome::Patched)
            }
            PatchOutcome::AlreadyPresent => {
                Ok(ArtifactOutcome::Skipped("declaration already present".into()))
            }
        }
    }

    fn register_service(&self, interface: &ArtifactTarget, options: &ScaffoldOptions) -> ForgeResult<ArtifactOutcome> {
        let path = options.root.join(&self.layout.beans_file);
        if !self.filesystem.exists(&path) {
            return Ok(ArtifactOutcome::Skipped("wiring file not found".into()));
        }

        let xml = self.filesystem.read_to_string(&path)?;
        match SourcePatcher::register_service_bean(&xml, &interface.type_name, &interface.fq_name()) {
            Some(updated) => {
                self.filesystem.write_file(&path, &updated)?;
                Ok(ArtifactOutcome::Patched)
            }
            None => Ok(ArtifactOutcome::Skipped("already registered".into())),
        }
    }

    fn record(&self, report: &mut RunReport, kind: ArtifactKind, path: &Path, outcome: ArtifactOutcome) {
        match &outcome {
            ArtifactOutcome::Failed(reason) => warn!(%kind, path = %path.display(), reason = %reason, "failed"),
            other => info!(%kind, path = %path.display(), outcome = %other, "artifact"),
        }
        report.record(kind, path, outcome);
    }
}
