use std::collections::HashMap;

use ultraviolet::Mat4;

use super::ModelId;

/// Identifies one placed occurrence of a model. Ids are assigned sequentially
/// starting at 0 and instances are never removed: the container is append-only
/// for its whole lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct InstanceId(pub u32);

#[derive(Clone, Debug)]
pub struct Instance {
    pub id: InstanceId,
    pub model_id: ModelId,
    pub transform: Mat4,
}

/// Records model placements for one cell.
///
/// Insertion order is significant: the TLAS and the indirect layout both
/// iterate instances in this order, and that order determines the grouping
/// and offset invariants of the flattened GPU buffers.
pub struct InstanceContainer {
    instances: Vec<Instance>,
    by_model: HashMap<ModelId, Vec<InstanceId>>,
}

impl InstanceContainer {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            by_model: HashMap::new(),
        }
    }

    /// Always succeeds. The caller is responsible for having registered
    /// `model_id` first; `CellManager::add_instance` guarantees this by
    /// registering before adding, per call.
    pub fn add_instance(&mut self, model_id: ModelId, transform: Mat4) -> InstanceId {
        let id = InstanceId(self.instances.len() as u32);
        self.instances.push(Instance {
            id,
            model_id,
            transform,
        });
        self.by_model.entry(model_id).or_default().push(id);
        id
    }

    /// All instances in insertion order.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Reverse index: which instances use `model_id`.
    pub fn instances_of(&self, model_id: ModelId) -> &[InstanceId] {
        self.by_model
            .get(&model_id)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for InstanceContainer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing_from_zero() {
        let mut container = InstanceContainer::new();

        let ids: Vec<InstanceId> = (0..5)
            .map(|i| container.add_instance(ModelId(i % 2), Mat4::identity()))
            .collect();

        assert_eq!(
            ids,
            (0..5).map(InstanceId).collect::<Vec<_>>(),
            "instance ids must be sequential with no gaps or repeats"
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut container = InstanceContainer::new();
        container.add_instance(ModelId(1), Mat4::from_translation([1.0, 0.0, 0.0].into()));
        container.add_instance(ModelId(0), Mat4::from_translation([2.0, 0.0, 0.0].into()));
        container.add_instance(ModelId(1), Mat4::from_translation([3.0, 0.0, 0.0].into()));

        let model_ids: Vec<ModelId> = container
            .instances()
            .iter()
            .map(|instance| instance.model_id)
            .collect();
        assert_eq!(model_ids, vec![ModelId(1), ModelId(0), ModelId(1)]);
    }

    #[test]
    fn reverse_index_tracks_instances_per_model() {
        let mut container = InstanceContainer::new();
        let a = container.add_instance(ModelId(7), Mat4::identity());
        let b = container.add_instance(ModelId(3), Mat4::identity());
        let c = container.add_instance(ModelId(7), Mat4::identity());

        assert_eq!(container.instances_of(ModelId(7)), &[a, c]);
        assert_eq!(container.instances_of(ModelId(3)), &[b]);
        assert_eq!(container.instances_of(ModelId(99)), &[]);
    }
}
