mod blas;
mod cell;
mod indirect_layout;
mod instance_container;
mod model_registry;
mod tlas;

pub use blas::*;
pub use cell::*;
pub use indirect_layout::*;
pub use instance_container::*;
pub use model_registry::*;
pub use tlas::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::buffer::GpuError;
use crate::gltf_model::ModelLoadError;

/// Fatal scene construction failures.
///
/// These terminate scene setup: a failed model load or acceleration structure
/// build would fail identically on retry, so the remedy is fixing the scene
/// data or the GPU resource budget, not a retry loop. Non-fatal lookup misses
/// are logged and degraded instead (see `CellManager::cell`,
/// `ModelRegistry::model_id`).
#[derive(Debug, Error)]
pub enum SceneBuildError {
    #[error("could not load model {}: {source}", .path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ModelLoadError,
    },

    #[error("model {0:?} was never registered")]
    UnknownModel(ModelId),

    #[error("{operation} failed for {subject}: {source}")]
    BuildFailure {
        operation: &'static str,
        subject: String,
        #[source]
        source: GpuError,
    },
}

impl SceneBuildError {
    /// `map_err` adapter attaching the failing operation and subject (usually
    /// a model path or cell label) to a raw GPU error.
    pub(crate) fn build_failure<E: Into<GpuError>>(
        operation: &'static str,
        subject: impl Into<String>,
    ) -> impl FnOnce(E) -> SceneBuildError {
        let subject = subject.into();
        move |source| SceneBuildError::BuildFailure {
            operation,
            subject,
            source: source.into(),
        }
    }
}
