use std::collections::HashMap;
use std::sync::Arc;

use ash::vk;
use gpu_allocator::MemoryLocation;
use ultraviolet::Mat4;

use crate::acceleration_structure::{scratch_buffer, AccelerationStructure};
use crate::buffer::{Buffer, GpuError};
use crate::command::submit_one_shot;
use crate::context::Context;

use super::{Blas, Instance, ModelId, ModelRegistry, SceneBuildError};

/// Top-level acceleration structure over all instances of one cell.
///
/// Owns the bottom-level structures it references: each distinct model's BLAS
/// is built lazily on first use and memoized, so a model instantiated many
/// times builds exactly once. Construction is append-only; `build` runs once
/// after every instance has been added, and structural scene changes require
/// discarding and recreating the whole `Tlas`.
pub struct Tlas {
    blases: HashMap<ModelId, Blas>,
    records: Vec<vk::AccelerationStructureInstanceKHR>,
    structure: Option<AccelerationStructure>,
}

impl Tlas {
    pub fn new() -> Self {
        Self {
            blases: HashMap::new(),
            records: Vec::new(),
            structure: None,
        }
    }

    /// Appends one instance record pointing at the instance's model BLAS,
    /// building that BLAS first if this is the model's first appearance.
    pub fn add_instance(
        &mut self,
        context: &Arc<Context>,
        registry: &ModelRegistry,
        instance: &Instance,
    ) -> Result<(), SceneBuildError> {
        let blas = get_or_build(&mut self.blases, instance.model_id, || {
            let info = registry
                .get(instance.model_id)
                .ok_or(SceneBuildError::UnknownModel(instance.model_id))?;
            Blas::build(context, info)
        })?;

        self.records
            .push(instance_record(&instance.transform, blas.device_address()));
        Ok(())
    }

    /// Uploads the accumulated instance records and builds the top-level
    /// structure: query sizes, allocate backing and scratch, one build
    /// command, submit and block. The instance upload buffer and scratch are
    /// released on return.
    pub fn build(&mut self, context: &Arc<Context>) -> Result<(), SceneBuildError> {
        let subject = format!("TLAS with {} instances", self.records.len());
        let fail = |operation| SceneBuildError::build_failure(operation, subject.as_str());

        let instance_buffer = {
            let size = (std::mem::size_of::<vk::AccelerationStructureInstanceKHR>()
                * self.records.len().max(1)) as vk::DeviceSize;
            let mut buffer: Buffer<vk::AccelerationStructureInstanceKHR> = Buffer::new(
                context.clone(),
                size,
                vk::BufferUsageFlags::ACCELERATION_STRUCTURE_BUILD_INPUT_READ_ONLY_KHR
                    | vk::BufferUsageFlags::SHADER_DEVICE_ADDRESS,
                MemoryLocation::CpuToGpu,
            )
            .map_err(fail("TLAS instance upload"))?;
            buffer.copy_data(&self.records);
            buffer
        };

        let geometry = vk::AccelerationStructureGeometryKHR::builder()
            .geometry_type(vk::GeometryTypeKHR::INSTANCES)
            .geometry(vk::AccelerationStructureGeometryDataKHR {
                instances: vk::AccelerationStructureGeometryInstancesDataKHR::builder()
                    .array_of_pointers(false)
                    .data(vk::DeviceOrHostAddressConstKHR {
                        device_address: instance_buffer.device_address(),
                    })
                    .build(),
            })
            .build();

        let instance_count = self.records.len() as u32;

        let build_sizes = {
            let geometry_info = vk::AccelerationStructureBuildGeometryInfoKHR::builder()
                .ty(vk::AccelerationStructureTypeKHR::TOP_LEVEL)
                .flags(vk::BuildAccelerationStructureFlagsKHR::PREFER_FAST_TRACE)
                .mode(vk::BuildAccelerationStructureModeKHR::BUILD)
                .geometries(std::slice::from_ref(&geometry));

            unsafe {
                context
                    .acceleration_structure
                    .get_acceleration_structure_build_sizes(
                        vk::AccelerationStructureBuildTypeKHR::DEVICE,
                        &geometry_info,
                        &[instance_count],
                    )
            }
        };

        let structure = AccelerationStructure::new(
            context.clone(),
            vk::AccelerationStructureTypeKHR::TOP_LEVEL,
            &build_sizes,
        )
        .map_err(fail("TLAS allocation"))?;

        let scratch =
            scratch_buffer(context.clone(), &build_sizes).map_err(fail("TLAS scratch allocation"))?;

        submit_one_shot(context, |command_buffer| {
            let range_info = vk::AccelerationStructureBuildRangeInfoKHR {
                primitive_count: instance_count,
                primitive_offset: 0,
                first_vertex: 0,
                transform_offset: 0,
            };
            let geometry_info = vk::AccelerationStructureBuildGeometryInfoKHR::builder()
                .ty(vk::AccelerationStructureTypeKHR::TOP_LEVEL)
                .flags(vk::BuildAccelerationStructureFlagsKHR::PREFER_FAST_TRACE)
                .mode(vk::BuildAccelerationStructureModeKHR::BUILD)
                .dst_acceleration_structure(structure.inner)
                .geometries(std::slice::from_ref(&geometry))
                .scratch_data(vk::DeviceOrHostAddressKHR {
                    device_address: scratch.device_address(),
                })
                .build();

            unsafe {
                context.acceleration_structure.cmd_build_acceleration_structures(
                    command_buffer,
                    std::slice::from_ref(&geometry_info),
                    &[std::slice::from_ref(&range_info)],
                )
            };
        })
        .map_err(GpuError::from)
        .map_err(fail("TLAS build"))?;

        log::info!(
            "Built TLAS: {} instances over {} BLASes",
            instance_count,
            self.blases.len()
        );

        self.structure = Some(structure);
        Ok(())
    }

    /// The built structure handle, for ray-tracing descriptor writes.
    pub fn handle(&self) -> Option<vk::AccelerationStructureKHR> {
        self.structure.as_ref().map(|structure| structure.inner)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn blas_count(&self) -> usize {
        self.blases.len()
    }
}

impl Default for Tlas {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized BLAS lookup: `build` runs at most once per model id.
fn get_or_build<B, E>(
    cache: &mut HashMap<ModelId, B>,
    model_id: ModelId,
    build: impl FnOnce() -> Result<B, E>,
) -> Result<&B, E> {
    if !cache.contains_key(&model_id) {
        let built = build()?;
        cache.insert(model_id, built);
    }
    Ok(&cache[&model_id])
}

/// One acceleration-structure instance entry: the transform transposed into
/// row-major 3x4 form, match-all mask, backface culling disabled (the
/// convention for ray tracing, where winding depends on the incident ray),
/// and a zero custom index. Per-instance material distinction lives in the
/// indirect layout's per-draw metadata, derived from the geometry index, so
/// the custom index stays free for future per-instance shader data.
fn instance_record(
    transform: &Mat4,
    blas_address: vk::DeviceAddress,
) -> vk::AccelerationStructureInstanceKHR {
    let rows = transform.transposed();
    let matrix = [
        rows.cols[0].x,
        rows.cols[0].y,
        rows.cols[0].z,
        rows.cols[0].w,
        rows.cols[1].x,
        rows.cols[1].y,
        rows.cols[1].z,
        rows.cols[1].w,
        rows.cols[2].x,
        rows.cols[2].y,
        rows.cols[2].z,
        rows.cols[2].w,
    ];

    vk::AccelerationStructureInstanceKHR {
        transform: vk::TransformMatrixKHR { matrix },
        instance_custom_index_and_mask: vk::Packed24_8::new(0, 0xFF),
        instance_shader_binding_table_record_offset_and_flags: vk::Packed24_8::new(
            0,
            vk::GeometryInstanceFlagsKHR::TRIANGLE_FACING_CULL_DISABLE.as_raw() as u8,
        ),
        acceleration_structure_reference: vk::AccelerationStructureReferenceKHR {
            device_handle: blas_address,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::Vec4;

    #[test]
    fn instance_record_transposes_to_row_major_3x4() {
        // Column-major input: translation lives in the last column.
        let transform = Mat4::from_translation([10.0, 20.0, 30.0].into())
            * Mat4::from_nonuniform_scale([2.0, 3.0, 4.0].into());

        let record = instance_record(&transform, 0xDEAD_BEEF);
        let m = record.transform.matrix;

        // Row 0: [2, 0, 0, 10], row 1: [0, 3, 0, 20], row 2: [0, 0, 4, 30].
        assert_eq!(&m[0..4], &[2.0, 0.0, 0.0, 10.0]);
        assert_eq!(&m[4..8], &[0.0, 3.0, 0.0, 20.0]);
        assert_eq!(&m[8..12], &[0.0, 0.0, 4.0, 30.0]);
    }

    #[test]
    fn instance_record_drops_projective_row() {
        let mut transform = Mat4::identity();
        // Something non-trivial in the bottom row must not leak into the 3x4.
        transform.cols[0].w = 7.0;
        transform.cols[3] = Vec4::new(1.0, 2.0, 3.0, 9.0);

        let record = instance_record(&transform, 0);
        let m = record.transform.matrix;
        assert_eq!(&m[0..4], &[1.0, 0.0, 0.0, 1.0]);
        assert!(!m.contains(&7.0));
        assert!(!m.contains(&9.0));
    }

    #[test]
    fn instance_record_sets_mask_flags_and_address() {
        let record = instance_record(&Mat4::identity(), 0x1234_5678_9ABC);

        assert_eq!(record.instance_custom_index_and_mask.low_24(), 0);
        assert_eq!(record.instance_custom_index_and_mask.high_8(), 0xFF);
        assert_eq!(
            u32::from(
                record
                    .instance_shader_binding_table_record_offset_and_flags
                    .high_8()
            ),
            vk::GeometryInstanceFlagsKHR::TRIANGLE_FACING_CULL_DISABLE.as_raw()
        );
        assert_eq!(
            unsafe { record.acceleration_structure_reference.device_handle },
            0x1234_5678_9ABC
        );
    }

    #[test]
    fn get_or_build_memoizes_per_model() {
        let mut cache: HashMap<ModelId, u64> = HashMap::new();
        let mut build_calls = 0;

        for model_id in [ModelId(0), ModelId(1), ModelId(0), ModelId(0), ModelId(1)] {
            let address = *get_or_build::<_, ()>(&mut cache, model_id, || {
                build_calls += 1;
                Ok(0x1000 + u64::from(model_id.0))
            })
            .unwrap();
            assert_eq!(address, 0x1000 + u64::from(model_id.0));
        }

        assert_eq!(build_calls, 2, "one build per distinct model");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn get_or_build_propagates_build_errors_without_caching() {
        let mut cache: HashMap<ModelId, u64> = HashMap::new();

        let result = get_or_build(&mut cache, ModelId(0), || Err("build failed"));
        assert!(result.is_err());
        assert!(cache.is_empty());

        let result = get_or_build::<_, ()>(&mut cache, ModelId(0), || Ok(1));
        assert_eq!(result.unwrap(), &1);
    }
}
