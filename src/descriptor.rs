use std::sync::Arc;

use ash::vk;

use crate::context::Context;

/// A descriptor set allocated from an externally owned pool, written once at
/// creation time.
pub struct DescriptorSet {
    pub inner: vk::DescriptorSet,
}

impl DescriptorSet {
    pub fn new(
        context: &Arc<Context>,
        descriptor_pool: vk::DescriptorPool,
        set_layout: vk::DescriptorSetLayout,
        writes: Vec<DescriptorWrite>,
    ) -> Self {
        let device = &context.device;

        let allocate_info = vk::DescriptorSetAllocateInfo::builder()
            .descriptor_pool(descriptor_pool)
            .set_layouts(std::slice::from_ref(&set_layout));

        let descriptor_set = unsafe { device.allocate_descriptor_sets(&allocate_info) }
            .expect("Could not allocate descriptor set")[0];

        // Preallocated so the pointers captured via push_next stay stable.
        let mut acceleration_structure_infos = Vec::with_capacity(writes.len());
        let vk_writes: Vec<vk::WriteDescriptorSet> = writes
            .iter()
            .map(|write| {
                let mut vk_write = vk::WriteDescriptorSet::builder()
                    .dst_set(descriptor_set)
                    .dst_binding(write.binding);

                match &write.info {
                    DescriptorInfo::UniformBuffer(info) => {
                        vk_write = vk_write
                            .descriptor_type(vk::DescriptorType::UNIFORM_BUFFER)
                            .buffer_info(std::slice::from_ref(info));
                    }
                    DescriptorInfo::StorageBuffer(info) => {
                        vk_write = vk_write
                            .descriptor_type(vk::DescriptorType::STORAGE_BUFFER)
                            .buffer_info(std::slice::from_ref(info));
                    }
                    DescriptorInfo::SampledImages(infos) => {
                        vk_write = vk_write
                            .descriptor_type(vk::DescriptorType::COMBINED_IMAGE_SAMPLER)
                            .image_info(infos);
                    }
                    DescriptorInfo::AccelerationStructure(handle) => {
                        acceleration_structure_infos.push(
                            vk::WriteDescriptorSetAccelerationStructureKHR::builder()
                                .acceleration_structures(std::slice::from_ref(handle))
                                .build(),
                        );
                        let info = acceleration_structure_infos.last_mut().unwrap();
                        vk_write = vk_write
                            .descriptor_type(vk::DescriptorType::ACCELERATION_STRUCTURE_KHR)
                            .push_next(info);
                        vk_write.descriptor_count = 1;
                    }
                }
                vk_write.build()
            })
            .collect();

        unsafe { device.update_descriptor_sets(&vk_writes, &[]) };

        Self {
            inner: descriptor_set,
        }
    }
}

pub struct DescriptorWrite {
    binding: u32,
    info: DescriptorInfo,
}

enum DescriptorInfo {
    UniformBuffer(vk::DescriptorBufferInfo),
    StorageBuffer(vk::DescriptorBufferInfo),
    SampledImages(Vec<vk::DescriptorImageInfo>),
    AccelerationStructure(vk::AccelerationStructureKHR),
}

impl DescriptorWrite {
    pub fn uniform_buffer(binding: u32, buffer: vk::Buffer) -> Self {
        let info = vk::DescriptorBufferInfo::builder()
            .buffer(buffer)
            .offset(0)
            .range(vk::WHOLE_SIZE)
            .build();
        Self {
            binding,
            info: DescriptorInfo::UniformBuffer(info),
        }
    }

    pub fn storage_buffer(binding: u32, buffer: vk::Buffer) -> Self {
        let info = vk::DescriptorBufferInfo::builder()
            .buffer(buffer)
            .offset(0)
            .range(vk::WHOLE_SIZE)
            .build();
        Self {
            binding,
            info: DescriptorInfo::StorageBuffer(info),
        }
    }

    pub fn sampled_images(binding: u32, infos: Vec<vk::DescriptorImageInfo>) -> Self {
        Self {
            binding,
            info: DescriptorInfo::SampledImages(infos),
        }
    }

    pub fn acceleration_structure(binding: u32, handle: vk::AccelerationStructureKHR) -> Self {
        Self {
            binding,
            info: DescriptorInfo::AccelerationStructure(handle),
        }
    }
}
