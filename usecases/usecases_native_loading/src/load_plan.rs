//! Load Plan Module
//!
//! An ordered list of native libraries to load, grouped in stages. Native
//! libraries that depend on each other have to be loaded dependencies first;
//! a plan captures that order together with what to do when a library is
//! missing.
//!
//! ## Failure policies
//!
//! - [`FailurePolicy::Required`]: the first failure aborts the whole plan
//! - [`FailurePolicy::BestEffort`]: the first failure ends the stage, the
//!   remaining targets of that stage are not attempted, and the plan carries
//!   on with the next stage. The failure is logged and kept in the
//!   [`LoadReport`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::NativeLinkError;
use crate::module_loader::ModuleLoader;
use crate::native_loader::NativeLibraryLoader;

/// One library to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    /// A file name used as is
    File(PathBuf),
    /// A logical name mapped to the platform file name inside `directory`
    Named {
        directory: PathBuf,
        logical_name: String,
    },
}

impl LoadTarget {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        LoadTarget::File(path.into())
    }

    pub fn named(directory: impl Into<PathBuf>, logical_name: impl Into<String>) -> Self {
        LoadTarget::Named {
            directory: directory.into(),
            logical_name: logical_name.into(),
        }
    }

    /// File this target refers to under a loader's naming convention
    pub fn resolve<L: ModuleLoader>(&self, loader: &NativeLibraryLoader<L>) -> PathBuf {
        match self {
            LoadTarget::File(path) => path.clone(),
            LoadTarget::Named {
                directory,
                logical_name,
            } => loader.resolve_library_file(directory, logical_name),
        }
    }

    fn load<L: ModuleLoader>(&self, loader: &NativeLibraryLoader<L>) -> Result<(), NativeLinkError> {
        match self {
            LoadTarget::File(path) => loader.load_by_path(path),
            LoadTarget::Named {
                directory,
                logical_name,
            } => loader.load_by_name(directory, logical_name),
        }
    }
}

/// What a stage does when one of its targets fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Required,
    BestEffort,
}

/// Targets loaded in order under one failure policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStage {
    label: String,
    policy: FailurePolicy,
    targets: Vec<LoadTarget>,
}

impl LoadStage {
    pub fn new(label: impl Into<String>, policy: FailurePolicy) -> Self {
        Self {
            label: label.into(),
            policy,
            targets: Vec::new(),
        }
    }

    pub fn required(label: impl Into<String>) -> Self {
        Self::new(label, FailurePolicy::Required)
    }

    pub fn best_effort(label: impl Into<String>) -> Self {
        Self::new(label, FailurePolicy::BestEffort)
    }

    pub fn target(mut self, target: LoadTarget) -> Self {
        self.targets.push(target);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn targets(&self) -> &[LoadTarget] {
        &self.targets
    }
}

/// A best-effort stage that stopped early
#[derive(Debug)]
pub struct SkippedStage {
    /// Label of the stage
    pub stage: String,
    /// Failure that ended the stage
    pub error: NativeLinkError,
    /// Files of the stage that were never attempted
    pub not_attempted: Vec<PathBuf>,
}

/// Outcome of a plan that was not aborted
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files loaded, in load order, as named by their targets
    pub loaded: Vec<PathBuf>,
    /// Best-effort stages that failed part way
    pub skipped: Vec<SkippedStage>,
}

impl LoadReport {
    /// `true` when every target of every stage was loaded
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Ordered stages of native libraries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    name: String,
    stages: Vec<LoadStage>,
}

impl LoadPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    pub fn stage(mut self, stage: LoadStage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stages(&self) -> &[LoadStage] {
        &self.stages
    }

    /// Every file the plan would load, in order
    pub fn files<L: ModuleLoader>(&self, loader: &NativeLibraryLoader<L>) -> Vec<PathBuf> {
        self.stages
            .iter()
            .flat_map(|stage| stage.targets.iter())
            .map(|target| target.resolve(loader))
            .collect()
    }

    /// Load every stage in order
    ///
    /// # Errors
    ///
    /// Returns the [`NativeLinkError`] of the first failing target of a
    /// [`FailurePolicy::Required`] stage. Libraries loaded before the failure
    /// stay loaded.
    pub fn execute<L: ModuleLoader>(
        &self,
        loader: &NativeLibraryLoader<L>,
    ) -> Result<LoadReport, NativeLinkError> {
        info!(plan = %self.name, stages = self.stages.len(), "Running native load plan");
        let mut report = LoadReport::default();

        for stage in &self.stages {
            debug!(plan = %self.name, stage = %stage.label, "Loading stage");
            for (index, target) in stage.targets.iter().enumerate() {
                match target.load(loader) {
                    Ok(()) => report.loaded.push(target.resolve(loader)),
                    Err(error) => match stage.policy {
                        FailurePolicy::Required => return Err(error),
                        FailurePolicy::BestEffort => {
                            warn!(
                                plan = %self.name,
                                stage = %stage.label,
                                error = %error,
                                "Native dependencies not provided"
                            );
                            let not_attempted = stage.targets[index + 1..]
                                .iter()
                                .map(|t| t.resolve(loader))
                                .collect();
                            report.skipped.push(SkippedStage {
                                stage: stage.label.clone(),
                                error,
                                not_attempted,
                            });
                            break;
                        }
                    },
                }
            }
        }

        Ok(report)
    }
}

/// Shorthand for the common "file inside a directory" target
pub fn file_in(directory: &Path, file_name: &str) -> LoadTarget {
    LoadTarget::File(directory.join(file_name))
}
