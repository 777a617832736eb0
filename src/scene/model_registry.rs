use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::context::Context;
use crate::gltf_model::GltfModel;

use super::SceneBuildError;

/// Identifies one distinct loaded model file. Ids are assigned sequentially
/// starting at 0, in registration order, and are never reused or removed for
/// the lifetime of the registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ModelId(pub u32);

pub struct ModelInfo<M = GltfModel> {
    pub id: ModelId,
    pub path: PathBuf,
    pub model: M,
}

/// Owns exactly one loaded model per distinct source path.
///
/// Generic over the model payload so the bookkeeping can be exercised without
/// a GPU; scene code uses the `GltfModel` default.
pub struct ModelRegistry<M = GltfModel> {
    by_path: HashMap<PathBuf, ModelId>,
    models: Vec<ModelInfo<M>>,
}

impl<M> ModelRegistry<M> {
    pub fn new() -> Self {
        Self {
            by_path: HashMap::new(),
            models: Vec::new(),
        }
    }

    /// Registers `path`, invoking `load` only if the path has not been seen
    /// before. Repeated registration of the same path is a no-op returning the
    /// already-assigned id.
    pub fn register_with<E>(
        &mut self,
        path: &Path,
        load: impl FnOnce(&Path) -> Result<M, E>,
    ) -> Result<ModelId, E> {
        if let Some(&id) = self.by_path.get(path) {
            log::debug!("Model {} already registered as {:?}", path.display(), id);
            return Ok(id);
        }

        let model = load(path)?;
        let id = ModelId(self.models.len() as u32);
        self.by_path.insert(path.to_path_buf(), id);
        self.models.push(ModelInfo {
            id,
            path: path.to_path_buf(),
            model,
        });
        Ok(id)
    }

    /// Pure lookup, never loads.
    pub fn contains(&self, path: &Path) -> bool {
        self.by_path.contains_key(path)
    }

    /// Pure lookup, never loads.
    pub fn model_id(&self, path: &Path) -> Option<ModelId> {
        let id = self.by_path.get(path).copied();
        if id.is_none() {
            log::warn!("Model {} was never registered", path.display());
        }
        id
    }

    /// Pure lookup, never loads.
    pub fn get(&self, id: ModelId) -> Option<&ModelInfo<M>> {
        let info = self.models.get(id.0 as usize);
        if info.is_none() {
            log::warn!("No model registered under {:?}", id);
        }
        info
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// All models in registration order (equal to id order, with no gaps).
    pub fn iter(&self) -> impl Iterator<Item = &ModelInfo<M>> {
        self.models.iter()
    }
}

impl ModelRegistry<GltfModel> {
    /// Loads and uploads the model behind `path` unless it is already
    /// registered. Load failures are fatal for scene construction.
    pub fn register_model(
        &mut self,
        context: &Arc<Context>,
        path: &Path,
    ) -> Result<ModelId, SceneBuildError> {
        self.register_with(path, |path| {
            log::info!("Loading model {}", path.display());
            GltfModel::load(context, path).map_err(|source| SceneBuildError::ModelLoad {
                path: path.to_path_buf(),
                source,
            })
        })
    }
}

impl<M> Default for ModelRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_counted(
        registry: &mut ModelRegistry<String>,
        path: &str,
        load_calls: &mut u32,
    ) -> ModelId {
        registry
            .register_with::<()>(Path::new(path), |path| {
                *load_calls += 1;
                Ok(path.display().to_string())
            })
            .unwrap()
    }

    #[test]
    fn ids_are_sequential_in_registration_order() {
        let mut registry = ModelRegistry::new();
        let mut load_calls = 0;

        let a = register_counted(&mut registry, "a.gltf", &mut load_calls);
        let b = register_counted(&mut registry, "b.gltf", &mut load_calls);
        let c = register_counted(&mut registry, "c.gltf", &mut load_calls);

        assert_eq!((a, b, c), (ModelId(0), ModelId(1), ModelId(2)));
        assert_eq!(registry.len(), 3);

        let ids: Vec<ModelId> = registry.iter().map(|info| info.id).collect();
        assert_eq!(ids, vec![ModelId(0), ModelId(1), ModelId(2)]);
    }

    #[test]
    fn repeated_registration_loads_once_and_returns_same_id() {
        let mut registry = ModelRegistry::new();
        let mut load_calls = 0;

        let first = register_counted(&mut registry, "x.gltf", &mut load_calls);
        let second = register_counted(&mut registry, "x.gltf", &mut load_calls);

        assert_eq!(first, second);
        assert_eq!(load_calls, 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.model_id(Path::new("x.gltf")), Some(first));
    }

    #[test]
    fn distinct_paths_create_distinct_models() {
        let mut registry = ModelRegistry::new();
        let mut load_calls = 0;

        for path in ["a.gltf", "b.gltf", "a.gltf", "c.gltf", "b.gltf", "a.gltf"] {
            register_counted(&mut registry, path, &mut load_calls);
        }

        assert_eq!(load_calls, 3);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookups_never_load() {
        let registry: ModelRegistry<String> = ModelRegistry::new();

        assert!(!registry.contains(Path::new("missing.gltf")));
        assert_eq!(registry.model_id(Path::new("missing.gltf")), None);
        assert!(registry.get(ModelId(0)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn failed_load_does_not_register() {
        let mut registry: ModelRegistry<String> = ModelRegistry::new();

        let result = registry.register_with(Path::new("broken.gltf"), |_| Err("no such file"));
        assert!(result.is_err());
        assert!(!registry.contains(Path::new("broken.gltf")));

        // A later successful load still gets id 0.
        let id = registry
            .register_with::<()>(Path::new("broken.gltf"), |_| Ok("fixed".to_string()))
            .unwrap();
        assert_eq!(id, ModelId(0));
    }
}
