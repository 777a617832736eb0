use std::path::Path;
use std::sync::Arc;

use ash::vk;
use ultraviolet::Mat4;

use crate::context::Context;

use super::{
    IndirectLayout, Instance, InstanceContainer, InstanceId, ModelId, ModelRegistry,
    SceneBuildError, Tlas,
};

/// One spatial partition of the world: its own instance placements, its own
/// TLAS and its own indirect draw data. The model registry is shared across
/// cells and owned by the `CellManager`, so cells borrow it per call.
pub struct Cell {
    instances: InstanceContainer,
    tlas: Option<Tlas>,
    layout: IndirectLayout,
}

impl Cell {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            instances: InstanceContainer::new(),
            tlas: None,
            layout: IndirectLayout::new(context),
        }
    }

    pub fn add_instance(&mut self, model_id: ModelId, transform: Mat4) -> InstanceId {
        self.instances.add_instance(model_id, transform)
    }

    /// Builds this cell's TLAS from its instance list, in insertion order:
    /// the first-referenced model's BLAS builds first. Warns and no-ops if
    /// the TLAS was already built; rebuilding requires a fresh cell.
    pub fn build_tlas(
        &mut self,
        context: &Arc<Context>,
        registry: &ModelRegistry,
    ) -> Result<(), SceneBuildError> {
        if self.tlas.is_some() {
            log::warn!("Cell TLAS already built, skipping rebuild");
            return Ok(());
        }

        let mut tlas = Tlas::new();
        for instance in self.instances.instances() {
            tlas.add_instance(context, registry, instance)?;
        }
        tlas.build(context)?;
        self.tlas = Some(tlas);
        Ok(())
    }

    pub fn build_layout(&mut self, registry: &ModelRegistry) -> Result<(), SceneBuildError> {
        self.layout.build(registry)
    }

    pub fn build_draw_buffer(&mut self, registry: &ModelRegistry) -> Result<(), SceneBuildError> {
        self.layout
            .build_draw_buffer(registry, self.instances.instances())
    }

    pub fn instances(&self) -> &[Instance] {
        self.instances.instances()
    }

    pub fn container(&self) -> &InstanceContainer {
        &self.instances
    }

    pub fn tlas(&self) -> Option<&Tlas> {
        self.tlas.as_ref()
    }

    pub fn layout(&self) -> &IndirectLayout {
        &self.layout
    }

    pub fn draw(
        &self,
        command_buffer: vk::CommandBuffer,
        pipeline_layout: vk::PipelineLayout,
        registry: &ModelRegistry,
    ) {
        self.layout.draw(command_buffer, pipeline_layout, registry);
    }
}

/// Entry point for scene construction: owns the shared model registry and the
/// set of cells. Currently always materializes exactly one cell.
pub struct CellManager {
    context: Arc<Context>,
    registry: ModelRegistry,
    cells: Vec<Cell>,
}

impl CellManager {
    pub fn new(context: Arc<Context>) -> Self {
        let cells = vec![Cell::new(context.clone())];
        Self {
            context,
            registry: ModelRegistry::new(),
            cells,
        }
    }

    /// Registers the model behind `path` (loading it only on first sight) and
    /// places an instance of it in the cell.
    pub fn add_instance(
        &mut self,
        path: &Path,
        transform: Mat4,
    ) -> Result<InstanceId, SceneBuildError> {
        let model_id = self.registry.register_model(&self.context, path)?;
        Ok(self.cells[0].add_instance(model_id, transform))
    }

    /// One-shot pass after all `add_instance` calls: builds every cell's TLAS.
    pub fn build_tlases(&mut self) -> Result<(), SceneBuildError> {
        for cell in &mut self.cells {
            cell.build_tlas(&self.context, &self.registry)?;
        }
        Ok(())
    }

    /// One-shot pass: builds every cell's descriptor layout.
    pub fn build_layouts(&mut self) -> Result<(), SceneBuildError> {
        for cell in &mut self.cells {
            cell.build_layout(&self.registry)?;
        }
        Ok(())
    }

    /// One-shot pass: flattens every cell into its indirect draw buffers.
    pub fn build_draw_buffers(&mut self) -> Result<(), SceneBuildError> {
        for cell in &mut self.cells {
            cell.build_draw_buffer(&self.registry)?;
        }
        Ok(())
    }

    /// Bounds-checked cell lookup; a miss is logged and degraded, not fatal.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        let cell = self.cells.get(index);
        if cell.is_none() {
            log::warn!(
                "Cell index {} out of range ({} cells)",
                index,
                self.cells.len()
            );
        }
        cell
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }
}
