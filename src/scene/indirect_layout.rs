use std::collections::HashMap;
use std::sync::Arc;

use ash::vk;
use crevice::std140::AsStd140;
use ultraviolet::Mat4;

use crate::buffer::{Buffer, GpuError};
use crate::context::Context;
use crate::descriptor::{DescriptorSet, DescriptorWrite};
use crate::gltf_model::Primitive;
use crate::texture::Texture;

use super::{Instance, ModelId, ModelRegistry, SceneBuildError};

/// Upper bound on combined-image-sampler slots per model binding. Models with
/// more base-color textures get clamped with a warning.
pub const MAX_MODEL_TEXTURES: u32 = 16;

/// Where one model's data lives inside the flattened per-scene arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRange {
    /// Offset of the model's first transform in the flattened instance array.
    pub first_instance: u32,
    pub instance_count: u32,
    /// Offset of the model's first record in the draw-command array.
    pub first_draw: u32,
    pub draw_count: u32,
}

/// CPU-side result of flattening a scene: everything the GPU buffers are
/// filled from, kept separate from the upload so it can be tested directly.
pub struct DrawPlan {
    /// One record per (model, primitive) pair, not per instance.
    pub commands: Vec<vk::DrawIndexedIndirectCommand>,
    /// Per draw record, positionally matched: the producing primitive's
    /// material index (model-relative).
    pub material_indices: Vec<u32>,
    /// Per draw record, positionally matched: the producing primitive's first
    /// index, for shader-side geometry recovery.
    pub index_offsets: Vec<u32>,
    /// Instance transforms grouped by model in registration order; insertion
    /// order within each group.
    pub transforms: Vec<Mat4>,
    pub ranges: HashMap<ModelId, DrawRange>,
}

/// Flattens a whole scene into indirect draw data.
///
/// `models` must be in registration order and carry each model's primitives in
/// the canonical traversal order. Grouping all of a model's instances into one
/// contiguous transform range is what lets a single draw record per primitive
/// cover every instance of that primitive.
pub(crate) fn plan_draws(models: &[(ModelId, Vec<Primitive>)], instances: &[Instance]) -> DrawPlan {
    let mut grouped: HashMap<ModelId, Vec<&Instance>> = HashMap::new();
    for instance in instances {
        grouped.entry(instance.model_id).or_default().push(instance);
    }

    let mut plan = DrawPlan {
        commands: Vec::new(),
        material_indices: Vec::new(),
        index_offsets: Vec::new(),
        transforms: Vec::with_capacity(instances.len()),
        ranges: HashMap::new(),
    };

    for (model_id, primitives) in models {
        let group = match grouped.get(model_id) {
            Some(group) if !group.is_empty() => group,
            // A registered model without instances contributes nothing.
            _ => continue,
        };

        let first_instance = plan.transforms.len() as u32;
        let instance_count = group.len() as u32;
        let first_draw = plan.commands.len() as u32;

        for instance in group {
            plan.transforms.push(instance.transform);
        }

        for primitive in primitives {
            plan.commands.push(vk::DrawIndexedIndirectCommand {
                index_count: primitive.index_count,
                instance_count,
                first_index: primitive.first_index,
                vertex_offset: primitive.first_vertex as i32,
                first_instance,
            });
            plan.material_indices.push(primitive.material_index);
            plan.index_offsets.push(primitive.first_index);
        }

        plan.ranges.insert(
            *model_id,
            DrawRange {
                first_instance,
                instance_count,
                first_draw,
                draw_count: plan.commands.len() as u32 - first_draw,
            },
        );
    }

    plan
}

/// Pushed once per model during submission; lets the shader address the
/// per-draw metadata and the flattened material table.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct DrawPushConstants {
    pub first_draw: u32,
    pub material_base: u32,
}

/// GPU-side flattening of one cell: the indirect draw-command buffer, the
/// grouped instance-transform buffer, the per-draw metadata buffers, the
/// flattened material table and the per-model texture descriptor sets.
///
/// Built in two one-shot passes after scene construction (`build` for the
/// descriptor side, `build_draw_buffer` for the draw data); afterwards all
/// buffers are read-only to the per-frame loop.
pub struct IndirectLayout {
    descriptor_pool: vk::DescriptorPool,
    texture_set_layout: vk::DescriptorSetLayout,
    model_texture_sets: HashMap<ModelId, DescriptorSet>,
    texture_ranges: HashMap<ModelId, (u32, u32)>,
    material_bases: HashMap<ModelId, u32>,
    fallback_texture: Option<Texture>,
    material_buffer: Option<Buffer<shader_types::Std140Material>>,

    command_buffer: Option<Buffer<vk::DrawIndexedIndirectCommand>>,
    transform_buffer: Option<Buffer<Mat4>>,
    material_index_buffer: Option<Buffer<u32>>,
    index_offset_buffer: Option<Buffer<u32>>,
    ranges: HashMap<ModelId, DrawRange>,

    context: Arc<Context>,
}

impl IndirectLayout {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            descriptor_pool: vk::DescriptorPool::null(),
            texture_set_layout: vk::DescriptorSetLayout::null(),
            model_texture_sets: HashMap::new(),
            texture_ranges: HashMap::new(),
            material_bases: HashMap::new(),
            fallback_texture: None,
            material_buffer: None,
            command_buffer: None,
            transform_buffer: None,
            material_index_buffer: None,
            index_offset_buffer: None,
            ranges: HashMap::new(),
            context,
        }
    }

    /// Descriptor pass: one texture descriptor set per model plus the
    /// flattened material table, with per-model texture range and material
    /// base bookkeeping for shader-side indexing.
    pub fn build(&mut self, registry: &ModelRegistry) -> Result<(), SceneBuildError> {
        if self.descriptor_pool != vk::DescriptorPool::null() {
            log::warn!("Indirect layout descriptors already built, skipping rebuild");
            return Ok(());
        }
        if registry.is_empty() {
            log::warn!("Building indirect layout without any registered models");
            return Ok(());
        }

        let device = &self.context.device;
        let fail = |operation| SceneBuildError::build_failure(operation, "indirect layout");

        let fallback =
            Texture::single_pixel(self.context.clone(), [0xFF, 0xFF, 0xFF, 0xFF])
                .map_err(fail("fallback texture upload"))?;

        self.descriptor_pool = {
            let pool_sizes = [vk::DescriptorPoolSize {
                ty: vk::DescriptorType::COMBINED_IMAGE_SAMPLER,
                descriptor_count: registry.len() as u32 * MAX_MODEL_TEXTURES,
            }];
            let create_info = vk::DescriptorPoolCreateInfo::builder()
                .max_sets(registry.len() as u32)
                .pool_sizes(&pool_sizes);
            unsafe { device.create_descriptor_pool(&create_info, None) }
                .map_err(|err| fail("descriptor pool creation")(GpuError::from(err)))?
        };

        self.texture_set_layout = {
            let binding = vk::DescriptorSetLayoutBinding::builder()
                .binding(0)
                .descriptor_type(vk::DescriptorType::COMBINED_IMAGE_SAMPLER)
                .descriptor_count(MAX_MODEL_TEXTURES)
                .stage_flags(vk::ShaderStageFlags::FRAGMENT)
                .build();
            let create_info = vk::DescriptorSetLayoutCreateInfo::builder()
                .bindings(std::slice::from_ref(&binding));
            unsafe { device.create_descriptor_set_layout(&create_info, None) }
                .map_err(|err| fail("descriptor set layout creation")(GpuError::from(err)))?
        };

        let mut materials = Vec::new();
        let mut texture_base = 0u32;
        for info in registry.iter() {
            let texture_count = info.model.textures.len() as u32;
            if texture_count > MAX_MODEL_TEXTURES {
                log::warn!(
                    "Model {} has {} textures, clamping to {}",
                    info.path.display(),
                    texture_count,
                    MAX_MODEL_TEXTURES
                );
            }
            let bound_count = texture_count.min(MAX_MODEL_TEXTURES);

            let mut image_infos: Vec<vk::DescriptorImageInfo> = info
                .model
                .textures
                .iter()
                .take(bound_count as usize)
                .map(|texture| texture.descriptor_info())
                .collect();
            // Unused array slots still need valid descriptors.
            image_infos.resize(MAX_MODEL_TEXTURES as usize, fallback.descriptor_info());

            let set = DescriptorSet::new(
                &self.context,
                self.descriptor_pool,
                self.texture_set_layout,
                vec![DescriptorWrite::sampled_images(0, image_infos)],
            );
            self.model_texture_sets.insert(info.id, set);
            self.texture_ranges.insert(info.id, (texture_base, texture_count));
            texture_base += texture_count;

            self.material_bases.insert(info.id, materials.len() as u32);
            for material in &info.model.materials {
                materials.push(
                    shader_types::Material {
                        base_color: material.base_color_factor,
                        emissive: material.emissive_factor,
                        base_color_texture: material
                            .base_color_texture
                            .map(|index| index as i32)
                            .unwrap_or(-1),
                    }
                    .as_std140(),
                );
            }
        }

        self.material_buffer = Some(
            Buffer::device_local_with_data(
                self.context.clone(),
                vk::BufferUsageFlags::STORAGE_BUFFER,
                &materials,
            )
            .map_err(fail("material table upload"))?,
        );
        self.fallback_texture = Some(fallback);

        log::debug!(
            "Indirect layout descriptors: {} models, {} materials, {} textures",
            registry.len(),
            materials.len(),
            texture_base
        );
        Ok(())
    }

    /// Draw-data pass: flattens the scene with `plan_draws` and uploads the
    /// four resulting arrays to device-local buffers.
    pub fn build_draw_buffer(
        &mut self,
        registry: &ModelRegistry,
        instances: &[Instance],
    ) -> Result<(), SceneBuildError> {
        if self.command_buffer.is_some() {
            log::warn!("Indirect draw buffer already built, skipping rebuild");
            return Ok(());
        }

        let models: Vec<(ModelId, Vec<Primitive>)> = registry
            .iter()
            .map(|info| (info.id, info.model.primitives()))
            .collect();

        let plan = plan_draws(&models, instances);
        self.ranges = plan.ranges;

        if plan.commands.is_empty() {
            log::warn!("Scene flattening produced no draw records");
            return Ok(());
        }

        let fail = |operation| SceneBuildError::build_failure(operation, "indirect layout");

        self.command_buffer = Some(
            Buffer::device_local_with_data(
                self.context.clone(),
                vk::BufferUsageFlags::INDIRECT_BUFFER,
                &plan.commands,
            )
            .map_err(fail("draw command upload"))?,
        );
        self.transform_buffer = Some(
            Buffer::device_local_with_data(
                self.context.clone(),
                vk::BufferUsageFlags::STORAGE_BUFFER,
                &plan.transforms,
            )
            .map_err(fail("instance transform upload"))?,
        );
        self.material_index_buffer = Some(
            Buffer::device_local_with_data(
                self.context.clone(),
                vk::BufferUsageFlags::STORAGE_BUFFER,
                &plan.material_indices,
            )
            .map_err(fail("material index upload"))?,
        );
        self.index_offset_buffer = Some(
            Buffer::device_local_with_data(
                self.context.clone(),
                vk::BufferUsageFlags::STORAGE_BUFFER,
                &plan.index_offsets,
            )
            .map_err(fail("index offset upload"))?,
        );

        log::info!(
            "Indirect draw buffer: {} draw records, {} instances, {} models drawn",
            plan.commands.len(),
            plan.transforms.len(),
            self.ranges.len()
        );
        Ok(())
    }

    /// Submits the whole cell: for each model with instances, binds its
    /// vertex/index buffers and texture set, then issues one indirect draw
    /// covering all of that model's (primitive, instance) combinations. The
    /// number of API calls is bounded by the model count, independent of
    /// instance and primitive counts.
    pub fn draw(
        &self,
        command_buffer: vk::CommandBuffer,
        pipeline_layout: vk::PipelineLayout,
        registry: &ModelRegistry,
    ) {
        let commands = match &self.command_buffer {
            Some(commands) => commands,
            None => return,
        };
        let device = &self.context.device;
        let stride = std::mem::size_of::<vk::DrawIndexedIndirectCommand>() as u32;

        for info in registry.iter() {
            let range = match self.ranges.get(&info.id) {
                Some(range) if range.draw_count > 0 => range,
                _ => continue,
            };

            unsafe {
                device.cmd_bind_vertex_buffers(
                    command_buffer,
                    0,
                    std::slice::from_ref(&info.model.vertex_buffer.inner),
                    &[0],
                );
                device.cmd_bind_index_buffer(
                    command_buffer,
                    info.model.index_buffer.inner,
                    0,
                    vk::IndexType::UINT32,
                );

                if let Some(set) = self.model_texture_sets.get(&info.id) {
                    device.cmd_bind_descriptor_sets(
                        command_buffer,
                        vk::PipelineBindPoint::GRAPHICS,
                        pipeline_layout,
                        2,
                        std::slice::from_ref(&set.inner),
                        &[],
                    );
                }

                let push = DrawPushConstants {
                    first_draw: range.first_draw,
                    material_base: self.material_bases.get(&info.id).copied().unwrap_or(0),
                };
                let bytes = std::slice::from_raw_parts(
                    &push as *const DrawPushConstants as *const u8,
                    std::mem::size_of::<DrawPushConstants>(),
                );
                device.cmd_push_constants(
                    command_buffer,
                    pipeline_layout,
                    vk::ShaderStageFlags::VERTEX | vk::ShaderStageFlags::FRAGMENT,
                    0,
                    bytes,
                );

                device.cmd_draw_indexed_indirect(
                    command_buffer,
                    commands.inner,
                    vk::DeviceSize::from(range.first_draw) * vk::DeviceSize::from(stride),
                    range.draw_count,
                    stride,
                );
            }
        }
    }

    pub fn texture_set_layout(&self) -> vk::DescriptorSetLayout {
        self.texture_set_layout
    }

    /// `(first, count)` of the model's textures within the flattened
    /// per-scene texture order.
    pub fn texture_range(&self, model_id: ModelId) -> Option<(u32, u32)> {
        self.texture_ranges.get(&model_id).copied()
    }

    pub fn range(&self, model_id: ModelId) -> Option<DrawRange> {
        self.ranges.get(&model_id).copied()
    }

    pub fn draw_count(&self) -> u32 {
        self.ranges.values().map(|range| range.draw_count).sum()
    }

    pub fn transform_buffer(&self) -> Option<&Buffer<Mat4>> {
        self.transform_buffer.as_ref()
    }

    pub fn material_index_buffer(&self) -> Option<&Buffer<u32>> {
        self.material_index_buffer.as_ref()
    }

    pub fn index_offset_buffer(&self) -> Option<&Buffer<u32>> {
        self.index_offset_buffer.as_ref()
    }

    pub fn material_buffer(&self) -> Option<&Buffer<shader_types::Std140Material>> {
        self.material_buffer.as_ref()
    }
}

impl Drop for IndirectLayout {
    fn drop(&mut self) {
        let device = &self.context.device;
        if self.texture_set_layout != vk::DescriptorSetLayout::null() {
            unsafe { device.destroy_descriptor_set_layout(self.texture_set_layout, None) };
        }
        if self.descriptor_pool != vk::DescriptorPool::null() {
            unsafe { device.destroy_descriptor_pool(self.descriptor_pool, None) };
        }
    }
}

pub mod shader_types {
    use crevice::std140::AsStd140;
    use ultraviolet::{Vec3, Vec4};

    #[derive(AsStd140)]
    pub struct Material {
        pub base_color: Vec4,
        pub emissive: Vec3,
        /// Index into the owning model's texture array binding, -1 for none.
        pub base_color_texture: i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::InstanceId;

    fn primitive(first_index: u32, index_count: u32, material_index: u32) -> Primitive {
        Primitive {
            first_index,
            index_count,
            first_vertex: first_index / 3,
            vertex_count: index_count,
            material_index,
        }
    }

    fn instance(id: u32, model_id: ModelId, x: f32) -> Instance {
        Instance {
            id: InstanceId(id),
            model_id,
            transform: Mat4::from_translation([x, 0.0, 0.0].into()),
        }
    }

    #[test]
    fn single_model_three_instances_yield_one_draw_record() {
        // One cube-like model with a single 36-index primitive, placed thrice.
        let models = vec![(ModelId(0), vec![primitive(0, 36, 0)])];
        let instances = vec![
            instance(0, ModelId(0), 1.0),
            instance(1, ModelId(0), 2.0),
            instance(2, ModelId(0), 3.0),
        ];

        let plan = plan_draws(&models, &instances);

        assert_eq!(plan.commands.len(), 1);
        let command = plan.commands[0];
        assert_eq!(command.index_count, 36);
        assert_eq!(command.instance_count, 3);
        assert_eq!(command.first_index, 0);
        assert_eq!(command.vertex_offset, 0);
        assert_eq!(command.first_instance, 0);
        assert_eq!(plan.transforms.len(), 3);
        assert_eq!(
            plan.ranges[&ModelId(0)],
            DrawRange {
                first_instance: 0,
                instance_count: 3,
                first_draw: 0,
                draw_count: 1,
            }
        );
    }

    #[test]
    fn two_models_emit_one_record_per_primitive() {
        let models = vec![
            (ModelId(0), vec![primitive(0, 36, 0), primitive(36, 12, 1)]),
            (ModelId(1), vec![primitive(0, 9, 0)]),
        ];
        let instances = vec![
            instance(0, ModelId(0), 1.0),
            instance(1, ModelId(0), 2.0),
            instance(2, ModelId(1), 3.0),
        ];

        let plan = plan_draws(&models, &instances);

        assert_eq!(plan.commands.len(), 3);
        assert!(plan.commands[..2]
            .iter()
            .all(|command| command.instance_count == 2 && command.first_instance == 0));
        assert_eq!(plan.commands[2].instance_count, 1);
        assert_eq!(plan.commands[2].first_instance, 2);
        assert_eq!(plan.ranges[&ModelId(0)].draw_count, 2);
        assert_eq!(plan.ranges[&ModelId(1)].draw_count, 1);
    }

    #[test]
    fn interleaved_instances_group_contiguously_per_model() {
        let models = vec![
            (ModelId(0), vec![primitive(0, 3, 0)]),
            (ModelId(1), vec![primitive(0, 3, 0)]),
        ];
        // Insertion alternates between the models.
        let instances = vec![
            instance(0, ModelId(1), 10.0),
            instance(1, ModelId(0), 20.0),
            instance(2, ModelId(1), 11.0),
            instance(3, ModelId(0), 21.0),
            instance(4, ModelId(1), 12.0),
        ];

        let plan = plan_draws(&models, &instances);

        // Registration order wins for group order; insertion order within.
        let xs: Vec<f32> = plan
            .transforms
            .iter()
            .map(|transform| transform.cols[3].x)
            .collect();
        assert_eq!(xs, vec![20.0, 21.0, 10.0, 11.0, 12.0]);

        let range_a = plan.ranges[&ModelId(0)];
        let range_b = plan.ranges[&ModelId(1)];
        assert_eq!((range_a.first_instance, range_a.instance_count), (0, 2));
        assert_eq!((range_b.first_instance, range_b.instance_count), (2, 3));

        // Every draw record's instance window addresses only its own model's
        // contiguous slots.
        for range in [range_a, range_b] {
            for command in &plan.commands
                [range.first_draw as usize..(range.first_draw + range.draw_count) as usize]
            {
                assert_eq!(command.instance_count, range.instance_count);
                assert_eq!(command.first_instance, range.first_instance);
            }
        }
    }

    #[test]
    fn per_draw_metadata_matches_positionally() {
        let models = vec![
            (
                ModelId(0),
                vec![primitive(0, 36, 2), primitive(36, 12, 0), primitive(48, 6, 1)],
            ),
            (ModelId(1), vec![primitive(12, 9, 4)]),
        ];
        let instances = vec![instance(0, ModelId(0), 0.0), instance(1, ModelId(1), 1.0)];

        let plan = plan_draws(&models, &instances);

        assert_eq!(plan.material_indices, vec![2, 0, 1, 4]);
        assert_eq!(plan.index_offsets, vec![0, 36, 48, 12]);
        for (position, command) in plan.commands.iter().enumerate() {
            assert_eq!(plan.index_offsets[position], command.first_index);
        }
    }

    #[test]
    fn model_without_instances_contributes_nothing() {
        let models = vec![
            (ModelId(0), vec![primitive(0, 3, 0)]),
            (ModelId(1), vec![primitive(0, 300, 0), primitive(300, 3, 1)]),
            (ModelId(2), vec![primitive(0, 3, 0)]),
        ];
        // Only the first and last models are placed.
        let instances = vec![instance(0, ModelId(0), 0.0), instance(1, ModelId(2), 1.0)];

        let plan = plan_draws(&models, &instances);

        assert_eq!(plan.commands.len(), 2);
        assert_eq!(plan.transforms.len(), 2);
        assert!(!plan.ranges.contains_key(&ModelId(1)));
        assert!(plan
            .commands
            .iter()
            .all(|command| command.instance_count > 0));
        // The skipped model must not leave a hole in the instance offsets.
        assert_eq!(plan.ranges[&ModelId(2)].first_instance, 1);
    }

    #[test]
    fn group_order_follows_registration_not_first_appearance() {
        let models = vec![
            (ModelId(0), vec![primitive(0, 3, 0)]),
            (ModelId(1), vec![primitive(0, 3, 0)]),
        ];
        // The later-registered model is instantiated first.
        let instances = vec![instance(0, ModelId(1), 5.0), instance(1, ModelId(0), 6.0)];

        let plan = plan_draws(&models, &instances);

        assert_eq!(plan.ranges[&ModelId(0)].first_instance, 0);
        assert_eq!(plan.ranges[&ModelId(1)].first_instance, 1);
        assert_eq!(plan.transforms[0].cols[3].x, 6.0);
        assert_eq!(plan.transforms[1].cols[3].x, 5.0);
    }

    #[test]
    fn empty_scene_produces_empty_plan() {
        let models = vec![(ModelId(0), vec![primitive(0, 3, 0)])];
        let plan = plan_draws(&models, &[]);

        assert!(plan.commands.is_empty());
        assert!(plan.transforms.is_empty());
        assert!(plan.ranges.is_empty());
    }
}
