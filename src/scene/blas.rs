use std::sync::Arc;

use ash::vk;

use crate::acceleration_structure::{scratch_buffer, AccelerationStructure};
use crate::command::submit_one_shot;
use crate::context::Context;
use crate::gltf_model::Vertex;

use super::{ModelInfo, SceneBuildError};

/// Bottom-level acceleration structure over one model's triangle geometry.
///
/// Each primitive of the model becomes one geometry entry referencing a
/// sub-range of the model's shared vertex/index buffers by device address, so
/// the whole model builds in a single command.
pub struct Blas {
    structure: AccelerationStructure,
}

impl Blas {
    /// Runs the full build protocol: query sizes, allocate backing and scratch
    /// buffers, record one build command, submit and block until the fence
    /// signals. The scratch buffer is released on return; the backing buffer
    /// lives as long as the `Blas`.
    pub fn build(context: &Arc<Context>, info: &ModelInfo) -> Result<Blas, SceneBuildError> {
        let subject = info.path.display().to_string();
        let model = &info.model;

        let vertex_address = model.vertex_buffer.device_address();
        let index_address = model.index_buffer.device_address();

        let mut geometries = Vec::new();
        let mut range_infos = Vec::new();
        let mut primitive_counts = Vec::new();
        for primitive in model.primitives() {
            if primitive.index_count < 3 || primitive.vertex_count == 0 {
                continue;
            }

            let triangles = vk::AccelerationStructureGeometryTrianglesDataKHR::builder()
                .vertex_format(vk::Format::R32G32B32_SFLOAT)
                .vertex_data(vk::DeviceOrHostAddressConstKHR {
                    device_address: vertex_address,
                })
                .vertex_stride(std::mem::size_of::<Vertex>() as vk::DeviceSize)
                .max_vertex(primitive.first_vertex + primitive.vertex_count - 1)
                .index_type(vk::IndexType::UINT32)
                .index_data(vk::DeviceOrHostAddressConstKHR {
                    device_address: index_address,
                })
                .build();

            geometries.push(
                vk::AccelerationStructureGeometryKHR::builder()
                    .geometry_type(vk::GeometryTypeKHR::TRIANGLES)
                    .geometry(vk::AccelerationStructureGeometryDataKHR { triangles })
                    .flags(vk::GeometryFlagsKHR::OPAQUE)
                    .build(),
            );

            let triangle_count = primitive.index_count / 3;
            range_infos.push(vk::AccelerationStructureBuildRangeInfoKHR {
                primitive_count: triangle_count,
                primitive_offset: primitive.first_index * std::mem::size_of::<u32>() as u32,
                first_vertex: primitive.first_vertex,
                transform_offset: 0,
            });
            primitive_counts.push(triangle_count);
        }

        let build_sizes = {
            let geometry_info = vk::AccelerationStructureBuildGeometryInfoKHR::builder()
                .ty(vk::AccelerationStructureTypeKHR::BOTTOM_LEVEL)
                .flags(vk::BuildAccelerationStructureFlagsKHR::PREFER_FAST_TRACE)
                .mode(vk::BuildAccelerationStructureModeKHR::BUILD)
                .geometries(&geometries);

            unsafe {
                context
                    .acceleration_structure
                    .get_acceleration_structure_build_sizes(
                        vk::AccelerationStructureBuildTypeKHR::DEVICE,
                        &geometry_info,
                        &primitive_counts,
                    )
            }
        };

        let structure = AccelerationStructure::new(
            context.clone(),
            vk::AccelerationStructureTypeKHR::BOTTOM_LEVEL,
            &build_sizes,
        )
        .map_err(SceneBuildError::build_failure(
            "BLAS allocation",
            subject.as_str(),
        ))?;

        let scratch = scratch_buffer(context.clone(), &build_sizes).map_err(
            SceneBuildError::build_failure("BLAS scratch allocation", subject.as_str()),
        )?;

        submit_one_shot(context, |command_buffer| {
            let geometry_info = vk::AccelerationStructureBuildGeometryInfoKHR::builder()
                .ty(vk::AccelerationStructureTypeKHR::BOTTOM_LEVEL)
                .flags(vk::BuildAccelerationStructureFlagsKHR::PREFER_FAST_TRACE)
                .mode(vk::BuildAccelerationStructureModeKHR::BUILD)
                .dst_acceleration_structure(structure.inner)
                .geometries(&geometries)
                .scratch_data(vk::DeviceOrHostAddressKHR {
                    device_address: scratch.device_address(),
                })
                .build();

            unsafe {
                context.acceleration_structure.cmd_build_acceleration_structures(
                    command_buffer,
                    std::slice::from_ref(&geometry_info),
                    &[range_infos.as_slice()],
                )
            };
        })
        .map_err(SceneBuildError::build_failure("BLAS build", subject.as_str()))?;

        log::debug!(
            "Built BLAS for {} ({} geometries)",
            subject,
            geometries.len()
        );

        Ok(Blas { structure })
    }

    /// Stable for the lifetime of this `Blas`; TLAS instance records reference
    /// the structure through this address instead of holding the handle.
    pub fn device_address(&self) -> vk::DeviceAddress {
        self.structure.device_address()
    }
}
