//! Per-run aggregates: the baseline snapshot and the workspace descriptor.

use std::sync::Arc;

use sdkify_catalog::CaselessSet;
use sdkify_catalog::ReferenceCatalog;

/// A snapshot of expected default values for the known property kinds.
///
/// A candidate property whose value is already in the matching set is
/// redundant after migration and safe to drop. The common case derives the
/// snapshot from the catalog; an orchestrator that evaluates the
/// unconfigured project can construct one with project-specific values
/// instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaselineProject {
    output_paths: CaselessSet,
    debug_types: CaselessSet,
    platform_targets: CaselessSet,
    define_constants: CaselessSet,
}

impl BaselineProject {
    pub fn new(
        output_paths: CaselessSet,
        debug_types: CaselessSet,
        platform_targets: CaselessSet,
        define_constants: CaselessSet,
    ) -> Self {
        Self {
            output_paths,
            debug_types,
            platform_targets,
            define_constants,
        }
    }

    pub fn from_catalog(catalog: &ReferenceCatalog) -> Self {
        Self {
            output_paths: catalog.default_output_paths.clone(),
            debug_types: catalog.default_debug_types.clone(),
            platform_targets: catalog.default_platform_targets.clone(),
            define_constants: catalog.default_define_constants.clone(),
        }
    }

    pub fn output_paths(&self) -> &CaselessSet {
        &self.output_paths
    }

    pub fn debug_types(&self) -> &CaselessSet {
        &self.debug_types
    }

    pub fn platform_targets(&self) -> &CaselessSet {
        &self.platform_targets
    }

    pub fn define_constants(&self) -> &CaselessSet {
        &self.define_constants
    }
}

/// Everything one conversion run binds together: the document root, the
/// opaque unconfigured-project handle and the baseline snapshot.
///
/// The descriptor owns none of the three exclusively; all are shared with
/// the orchestration session and outlive the run. It carries no state of
/// its own.
#[derive(Debug)]
pub struct WorkspaceDescriptor<R, U> {
    pub project_root: Arc<R>,
    pub unconfigured_project: Arc<U>,
    pub baseline: Arc<BaselineProject>,
}

impl<R, U> WorkspaceDescriptor<R, U> {
    pub fn new(
        project_root: Arc<R>,
        unconfigured_project: Arc<U>,
        baseline: Arc<BaselineProject>,
    ) -> Self {
        Self {
            project_root,
            unconfigured_project,
            baseline,
        }
    }
}

impl<R, U> Clone for WorkspaceDescriptor<R, U> {
    fn clone(&self) -> Self {
        Self {
            project_root: self.project_root.clone(),
            unconfigured_project: self.unconfigured_project.clone(),
            baseline: self.baseline.clone(),
        }
    }
}
