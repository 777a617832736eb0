use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use ash::vk;
use gpu_allocator::vulkan::{Allocation, AllocationCreateDesc, AllocationScheme};
use gpu_allocator::MemoryLocation;
use thiserror::Error;

use crate::command::submit_one_shot;
use crate::context::Context;

/// Failure of a raw GPU resource operation. Scene construction wraps this into
/// a `SceneBuildError::BuildFailure` naming the model and build step.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("vulkan call failed: {0}")]
    Vk(#[from] vk::Result),
    #[error("allocation failed: {0}")]
    Allocation(#[from] gpu_allocator::AllocationError),
}

/// A typed GPU buffer with exclusively owned memory.
///
/// Memory comes out of the context's allocator and is freed on drop. Buffers
/// created with `SHADER_DEVICE_ADDRESS` usage expose a device address for
/// acceleration structure build inputs and shader-side indirection.
pub struct Buffer<T> {
    pub inner: vk::Buffer,
    allocation: Option<Allocation>,
    size: vk::DeviceSize,
    context: Arc<Context>,
    _marker: PhantomData<T>,
}

impl<T: Copy> Buffer<T> {
    pub fn new(
        context: Arc<Context>,
        size: vk::DeviceSize,
        usage: vk::BufferUsageFlags,
        location: MemoryLocation,
    ) -> Result<Buffer<T>, GpuError> {
        let device = &context.device;

        let create_info = vk::BufferCreateInfo::builder()
            .size(size)
            .usage(usage)
            .sharing_mode(vk::SharingMode::EXCLUSIVE);

        let buffer = unsafe { device.create_buffer(&create_info, None) }?;
        let requirements = unsafe { device.get_buffer_memory_requirements(buffer) };

        let allocation = context
            .allocator
            .lock()
            .unwrap()
            .allocate(&AllocationCreateDesc {
                name: "buffer",
                requirements,
                location,
                linear: true,
                allocation_scheme: AllocationScheme::GpuAllocatorManaged,
            })?;

        unsafe { device.bind_buffer_memory(buffer, allocation.memory(), allocation.offset()) }?;

        Ok(Buffer {
            inner: buffer,
            allocation: Some(allocation),
            size,
            context,
            _marker: PhantomData,
        })
    }

    /// Creates a device-local buffer and fills it with `data`, staged through
    /// a host-visible buffer and a blocking one-shot copy submission.
    pub fn device_local_with_data(
        context: Arc<Context>,
        usage: vk::BufferUsageFlags,
        data: &[T],
    ) -> Result<Buffer<T>, GpuError> {
        let size = std::mem::size_of_val(data) as vk::DeviceSize;

        let mut staging = Buffer::new(
            context.clone(),
            size,
            vk::BufferUsageFlags::TRANSFER_SRC,
            MemoryLocation::CpuToGpu,
        )?;
        staging.copy_data(data);

        let buffer = Buffer::new(
            context.clone(),
            size,
            usage | vk::BufferUsageFlags::TRANSFER_DST,
            MemoryLocation::GpuOnly,
        )?;

        submit_one_shot(&context, |command_buffer| {
            let region = vk::BufferCopy {
                src_offset: 0,
                dst_offset: 0,
                size,
            };
            unsafe {
                context.device.cmd_copy_buffer(
                    command_buffer,
                    staging.inner,
                    buffer.inner,
                    std::slice::from_ref(&region),
                )
            };
        })?;

        Ok(buffer)
    }

    /// Writes `data` through the persistent mapping. Only valid for buffers
    /// allocated in `CpuToGpu` memory.
    pub fn copy_data(&mut self, data: &[T]) {
        let allocation = self
            .allocation
            .as_mut()
            .expect("Buffer allocation was already released");
        let mapped = allocation
            .mapped_slice_mut()
            .expect("Buffer memory is not host visible");

        let bytes = unsafe {
            std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data))
        };
        mapped[..bytes.len()].copy_from_slice(bytes);
    }

    pub fn device_address(&self) -> vk::DeviceAddress {
        let info = vk::BufferDeviceAddressInfo::builder().buffer(self.inner);
        unsafe { self.context.device.get_buffer_device_address(&info) }
    }

    pub fn size(&self) -> vk::DeviceSize {
        self.size
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe { self.context.device.destroy_buffer(self.inner, None) };
        if let Some(allocation) = self.allocation.take() {
            let _ = self.context.allocator.lock().unwrap().free(allocation);
        }
    }
}

impl<T> Deref for Buffer<T> {
    type Target = vk::Buffer;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
