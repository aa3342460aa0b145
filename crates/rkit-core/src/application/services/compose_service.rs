//! Compose Service - main application orchestrator.
//!
//! This service executes a generation run end to end:
//! 1. Build the composition plan from the option set
//! 2. Render and emit each activated template tree
//! 3. Accumulate dependencies and scripts into the manifest
//! 4. Write `package.json` once at the end
//!
//! Failure anywhere is fatal: the run stops at the first error and no
//! cleanup of partially written files is attempted. The caller is expected
//! to discard the target tree.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{FileEmitter, TemplateStore, VersionResolver},
    domain::{
        CompositionPlan, CompositionStep, DependencyKind, Manifest, OptionSet, RenderContext,
        TemplateNode,
    },
    error::RkitResult,
};

/// Summary of what a generation run produced, for CLI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub files_written: usize,
    pub dependencies: usize,
    pub dev_dependencies: usize,
}

/// Main composition service.
///
/// Owns the three driven ports and threads the manifest accumulator through
/// each step explicitly — there is no shared mutable state beyond the
/// in-progress target tree.
pub struct ComposeService {
    store: Box<dyn TemplateStore>,
    emitter: Box<dyn FileEmitter>,
    resolver: Box<dyn VersionResolver>,
}

impl ComposeService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        emitter: Box<dyn FileEmitter>,
        resolver: Box<dyn VersionResolver>,
    ) -> Self {
        Self {
            store,
            emitter,
            resolver,
        }
    }

    /// Generate a project from the given options into `output_dir`.
    ///
    /// `output_dir` is the project root itself (e.g. `./demo`), created by
    /// this call. The directory must not already exist.
    #[instrument(skip_all, fields(options = %options, output = %output_dir.as_ref().display()))]
    pub fn generate(
        &self,
        options: &OptionSet,
        output_dir: impl AsRef<Path>,
    ) -> RkitResult<GenerationReport> {
        let root = output_dir.as_ref();

        if self.emitter.exists(root) {
            return Err(crate::application::ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        let plan = CompositionPlan::for_options(options);
        let ctx = RenderContext::for_options(options);
        let mut manifest = Manifest::new(options.name.as_str());
        let mut files_written = 0usize;

        self.emitter.create_dir_all(root)?;

        for step in &plan.steps {
            files_written += self.apply_step(step, root, &ctx, &mut manifest)?;
        }

        // Fixed react-scripts entries, applied after every step so the final
        // script set always contains them.
        for (name, command) in plan.final_scripts {
            manifest.set_script(*name, *command);
        }

        self.emitter
            .write_file(&root.join("package.json"), &manifest.to_json())?;
        files_written += 1;

        let report = GenerationReport {
            files_written,
            dependencies: manifest.dependencies.len(),
            dev_dependencies: manifest.dev_dependencies.len(),
        };
        info!(
            files = report.files_written,
            deps = report.dependencies,
            dev_deps = report.dev_dependencies,
            "generation completed"
        );
        Ok(report)
    }

    /// Build the manifest a run would write without emitting any files.
    ///
    /// Versions go through the same resolver as [`Self::generate`], so this
    /// may hit the registry. Callers that must stay offline (the CLI's
    /// `--dry-run` preview) should list package names from the plan instead.
    pub fn resolve_dependencies(&self, options: &OptionSet) -> Manifest {
        let plan = CompositionPlan::for_options(options);
        let mut manifest = Manifest::new(options.name.as_str());
        for step in &plan.steps {
            self.record_step_dependencies(step, &mut manifest);
        }
        for (name, command) in plan.final_scripts {
            manifest.set_script(*name, *command);
        }
        manifest
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Emit one step's tree and record its dependency/script entries.
    /// Returns the number of files written.
    fn apply_step(
        &self,
        step: &CompositionStep,
        root: &Path,
        ctx: &RenderContext,
        manifest: &mut Manifest,
    ) -> RkitResult<usize> {
        let tree = self.store.get(step.tree)?;
        tree.validate()?;

        let mount: std::path::PathBuf = if step.mount.is_empty() {
            root.to_path_buf()
        } else {
            root.join(step.mount)
        };
        debug!(tree = %step.tree, mount = %mount.display(), "applying step");

        let mut written = 0usize;
        for node in &tree.nodes {
            match node {
                TemplateNode::Directory(dir) => {
                    self.emitter.create_dir_all(&mount.join(&dir.path))?;
                }
                TemplateNode::File(file) => {
                    let path = mount.join(ctx.render_path(&file.path));
                    if let Some(parent) = path.parent() {
                        self.emitter.create_dir_all(parent)?;
                    }
                    self.emitter
                        .write_file(&path, &ctx.render(file.content.as_str()))?;
                    written += 1;
                }
            }
        }

        self.record_step_dependencies(step, manifest);
        for (name, command) in step.scripts {
            manifest.set_script(*name, *command);
        }

        Ok(written)
    }

    fn record_step_dependencies(&self, step: &CompositionStep, manifest: &mut Manifest) {
        for package in step.runtime_packages {
            let version = self.resolver.resolve_or_latest(package);
            manifest.record_dependency(DependencyKind::Runtime, *package, version);
        }
        for package in step.dev_packages {
            let version = self.resolver.resolve_or_latest(package);
            manifest.record_dependency(DependencyKind::Development, *package, version);
        }
    }
}
