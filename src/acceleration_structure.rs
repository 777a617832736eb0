use std::sync::Arc;

use ash::vk;
use gpu_allocator::MemoryLocation;

use crate::buffer::{Buffer, GpuError};
use crate::context::Context;

/// An acceleration structure handle together with its exclusively owned
/// backing buffer.
///
/// The device address stays valid for the lifetime of this object, so TLAS
/// instance records can reference a BLAS without keeping its handle around.
pub struct AccelerationStructure {
    pub inner: vk::AccelerationStructureKHR,
    device_address: vk::DeviceAddress,
    _buffer: Buffer<u8>,
    context: Arc<Context>,
}

impl AccelerationStructure {
    /// Allocates the backing buffer for the queried build size and creates the
    /// (still unbuilt) acceleration structure inside it.
    pub fn new(
        context: Arc<Context>,
        ty: vk::AccelerationStructureTypeKHR,
        build_sizes: &vk::AccelerationStructureBuildSizesInfoKHR,
    ) -> Result<Self, GpuError> {
        let buffer: Buffer<u8> = Buffer::new(
            context.clone(),
            build_sizes.acceleration_structure_size,
            vk::BufferUsageFlags::ACCELERATION_STRUCTURE_STORAGE_KHR
                | vk::BufferUsageFlags::SHADER_DEVICE_ADDRESS,
            MemoryLocation::GpuOnly,
        )?;

        let create_info = vk::AccelerationStructureCreateInfoKHR::builder()
            .buffer(buffer.inner)
            .size(build_sizes.acceleration_structure_size)
            .ty(ty);

        let inner = unsafe {
            context
                .acceleration_structure
                .create_acceleration_structure(&create_info, None)
        }?;

        let device_address = {
            let address_info =
                vk::AccelerationStructureDeviceAddressInfoKHR::builder().acceleration_structure(inner);
            unsafe {
                context
                    .acceleration_structure
                    .get_acceleration_structure_device_address(&address_info)
            }
        };

        Ok(Self {
            inner,
            device_address,
            _buffer: buffer,
            context,
        })
    }

    pub fn device_address(&self) -> vk::DeviceAddress {
        self.device_address
    }
}

impl Drop for AccelerationStructure {
    fn drop(&mut self) {
        unsafe {
            self.context
                .acceleration_structure
                .destroy_acceleration_structure(self.inner, None);
        }
    }
}

/// Scratch buffer for a single acceleration structure build, released right
/// after the build submission completes.
pub fn scratch_buffer(
    context: Arc<Context>,
    build_sizes: &vk::AccelerationStructureBuildSizesInfoKHR,
) -> Result<Buffer<u8>, GpuError> {
    Buffer::new(
        context,
        build_sizes.build_scratch_size,
        vk::BufferUsageFlags::STORAGE_BUFFER | vk::BufferUsageFlags::SHADER_DEVICE_ADDRESS,
        MemoryLocation::GpuOnly,
    )
}
