use std::sync::Arc;

use ash::vk;

use crate::context::Context;

/// A command pool tied to the context's single graphics/compute queue family.
pub struct CommandPool {
    pub inner: vk::CommandPool,
    context: Arc<Context>,
}

impl CommandPool {
    pub fn new(context: Arc<Context>, flags: vk::CommandPoolCreateFlags) -> Self {
        let create_info = vk::CommandPoolCreateInfo::builder()
            .flags(flags)
            .queue_family_index(context.queue_family_index);

        let inner = unsafe { context.device.create_command_pool(&create_info, None) }
            .expect("Could not create command pool");

        Self { inner, context }
    }

    pub fn allocate_command_buffers(&self, count: u32) -> Vec<vk::CommandBuffer> {
        let allocate_info = vk::CommandBufferAllocateInfo::builder()
            .command_pool(self.inner)
            .level(vk::CommandBufferLevel::PRIMARY)
            .command_buffer_count(count);

        unsafe { self.context.device.allocate_command_buffers(&allocate_info) }
            .expect("Could not allocate command buffers")
    }
}

impl Drop for CommandPool {
    fn drop(&mut self) {
        unsafe { self.context.device.destroy_command_pool(self.inner, None) };
    }
}

/// Records `record` into a fresh primary command buffer, submits it and blocks
/// until a fence signals completion.
///
/// Scene construction funnels every upload and acceleration structure build
/// through here: coarse and synchronous, which is fine for work that happens
/// once at load time. Staging and scratch resources may be released as soon as
/// this returns.
pub fn submit_one_shot(
    context: &Arc<Context>,
    record: impl FnOnce(vk::CommandBuffer),
) -> Result<(), vk::Result> {
    let device = &context.device;

    let pool = {
        let create_info = vk::CommandPoolCreateInfo::builder()
            .flags(vk::CommandPoolCreateFlags::TRANSIENT)
            .queue_family_index(context.queue_family_index);
        unsafe { device.create_command_pool(&create_info, None) }?
    };

    let result = (|| {
        let command_buffer = {
            let allocate_info = vk::CommandBufferAllocateInfo::builder()
                .command_pool(pool)
                .level(vk::CommandBufferLevel::PRIMARY)
                .command_buffer_count(1);
            unsafe { device.allocate_command_buffers(&allocate_info) }?[0]
        };

        let begin_info = vk::CommandBufferBeginInfo::builder()
            .flags(vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT);
        unsafe { device.begin_command_buffer(command_buffer, &begin_info) }?;

        record(command_buffer);

        unsafe { device.end_command_buffer(command_buffer) }?;

        let fence = unsafe { device.create_fence(&vk::FenceCreateInfo::default(), None) }?;

        let submit_info =
            vk::SubmitInfo::builder().command_buffers(std::slice::from_ref(&command_buffer));
        let submitted = unsafe {
            device.queue_submit(context.queue, std::slice::from_ref(&submit_info), fence)
        };

        let waited = match submitted {
            Ok(()) => unsafe {
                device.wait_for_fences(std::slice::from_ref(&fence), true, u64::MAX)
            },
            Err(err) => Err(err),
        };

        unsafe { device.destroy_fence(fence, None) };
        waited
    })();

    unsafe { device.destroy_command_pool(pool, None) };
    result
}
