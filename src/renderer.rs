use std::ffi::CStr;
use std::io::Cursor;
use std::sync::Arc;

use ash::util::read_spv;
use ash::vk;
use crevice::std140::AsStd140;
use gpu_allocator::vulkan::{Allocation, AllocationCreateDesc, AllocationScheme};
use gpu_allocator::MemoryLocation;

use crate::buffer::Buffer;
use crate::camera::Camera;
use crate::context::Context;
use crate::descriptor::{DescriptorSet, DescriptorWrite};
use crate::gltf_model::Vertex;
use crate::scene::{Cell, DrawPushConstants, ModelRegistry};
use crate::swapchain::Swapchain;

const DEPTH_FORMAT: vk::Format = vk::Format::D32_SFLOAT;

/// Forward renderer over one cell's indirect draw data.
///
/// Set 0 carries the per-frame camera, set 1 the cell's flattened scene
/// buffers plus its TLAS (for ray-query shadows), set 2 the per-model texture
/// arrays owned by the cell's indirect layout.
pub struct CellRenderer {
    render_pass: vk::RenderPass,
    pipeline_layout: vk::PipelineLayout,
    pipeline: vk::Pipeline,

    frame_set_layout: vk::DescriptorSetLayout,
    cell_set_layout: vk::DescriptorSetLayout,
    descriptor_pool: vk::DescriptorPool,
    frame_set: DescriptorSet,
    cell_set: DescriptorSet,

    camera_buffer: Buffer<shader_types::Std140Camera>,

    depth_buffer: DepthBuffer,
    framebuffers: Vec<vk::Framebuffer>,

    context: Arc<Context>,
}

impl CellRenderer {
    pub fn new(context: Arc<Context>, swapchain: &Swapchain, cell: &Cell) -> Self {
        let device = &context.device;

        let render_pass = create_render_pass(device, swapchain.format.format);

        let frame_set_layout = {
            let bindings = [vk::DescriptorSetLayoutBinding::builder()
                .binding(0)
                .descriptor_type(vk::DescriptorType::UNIFORM_BUFFER)
                .descriptor_count(1)
                .stage_flags(vk::ShaderStageFlags::VERTEX)
                .build()];
            let create_info = vk::DescriptorSetLayoutCreateInfo::builder().bindings(&bindings);
            unsafe { device.create_descriptor_set_layout(&create_info, None) }
                .expect("Could not create frame set layout")
        };

        let cell_set_layout = {
            let storage = |binding: u32, stages: vk::ShaderStageFlags| {
                vk::DescriptorSetLayoutBinding::builder()
                    .binding(binding)
                    .descriptor_type(vk::DescriptorType::STORAGE_BUFFER)
                    .descriptor_count(1)
                    .stage_flags(stages)
                    .build()
            };
            let bindings = [
                // Flattened instance transforms, indexed by gl_InstanceIndex.
                storage(0, vk::ShaderStageFlags::VERTEX),
                // Per-draw material indices, indexed by first_draw + gl_DrawID.
                storage(1, vk::ShaderStageFlags::VERTEX),
                // Flattened material table.
                storage(2, vk::ShaderStageFlags::FRAGMENT),
                // Per-draw index offsets, for geometry recovery.
                storage(3, vk::ShaderStageFlags::FRAGMENT),
                vk::DescriptorSetLayoutBinding::builder()
                    .binding(4)
                    .descriptor_type(vk::DescriptorType::ACCELERATION_STRUCTURE_KHR)
                    .descriptor_count(1)
                    .stage_flags(vk::ShaderStageFlags::FRAGMENT)
                    .build(),
            ];
            let create_info = vk::DescriptorSetLayoutCreateInfo::builder().bindings(&bindings);
            unsafe { device.create_descriptor_set_layout(&create_info, None) }
                .expect("Could not create cell set layout")
        };

        let pipeline_layout = {
            let set_layouts = [
                frame_set_layout,
                cell_set_layout,
                cell.layout().texture_set_layout(),
            ];
            let push_constant_range = vk::PushConstantRange {
                stage_flags: vk::ShaderStageFlags::VERTEX | vk::ShaderStageFlags::FRAGMENT,
                offset: 0,
                size: std::mem::size_of::<DrawPushConstants>() as u32,
            };
            let create_info = vk::PipelineLayoutCreateInfo::builder()
                .set_layouts(&set_layouts)
                .push_constant_ranges(std::slice::from_ref(&push_constant_range));
            unsafe { device.create_pipeline_layout(&create_info, None) }
                .expect("Could not create pipeline layout")
        };

        let pipeline = create_pipeline(device, render_pass, pipeline_layout);

        let descriptor_pool = {
            let pool_sizes = [
                vk::DescriptorPoolSize {
                    ty: vk::DescriptorType::UNIFORM_BUFFER,
                    descriptor_count: 1,
                },
                vk::DescriptorPoolSize {
                    ty: vk::DescriptorType::STORAGE_BUFFER,
                    descriptor_count: 4,
                },
                vk::DescriptorPoolSize {
                    ty: vk::DescriptorType::ACCELERATION_STRUCTURE_KHR,
                    descriptor_count: 1,
                },
            ];
            let create_info = vk::DescriptorPoolCreateInfo::builder()
                .max_sets(2)
                .pool_sizes(&pool_sizes);
            unsafe { device.create_descriptor_pool(&create_info, None) }
                .expect("Could not create renderer descriptor pool")
        };

        let camera_buffer: Buffer<shader_types::Std140Camera> = Buffer::new(
            context.clone(),
            shader_types::Camera::std140_size_static() as vk::DeviceSize,
            vk::BufferUsageFlags::UNIFORM_BUFFER,
            MemoryLocation::CpuToGpu,
        )
        .expect("Could not create camera buffer");

        let frame_set = DescriptorSet::new(
            &context,
            descriptor_pool,
            frame_set_layout,
            vec![DescriptorWrite::uniform_buffer(0, camera_buffer.inner)],
        );

        let cell_set = {
            let layout = cell.layout();
            let transforms = layout
                .transform_buffer()
                .expect("Cell draw buffers must be built before the renderer");
            let material_indices = layout
                .material_index_buffer()
                .expect("Cell draw buffers must be built before the renderer");
            let index_offsets = layout
                .index_offset_buffer()
                .expect("Cell draw buffers must be built before the renderer");
            let materials = layout
                .material_buffer()
                .expect("Cell descriptors must be built before the renderer");
            let tlas = cell
                .tlas()
                .and_then(|tlas| tlas.handle())
                .expect("Cell TLAS must be built before the renderer");

            DescriptorSet::new(
                &context,
                descriptor_pool,
                cell_set_layout,
                vec![
                    DescriptorWrite::storage_buffer(0, transforms.inner),
                    DescriptorWrite::storage_buffer(1, material_indices.inner),
                    DescriptorWrite::storage_buffer(2, materials.inner),
                    DescriptorWrite::storage_buffer(3, index_offsets.inner),
                    DescriptorWrite::acceleration_structure(4, tlas),
                ],
            )
        };

        let depth_buffer = DepthBuffer::new(context.clone(), swapchain.extent);
        let framebuffers =
            create_framebuffers(device, render_pass, swapchain, depth_buffer.view);

        Self {
            render_pass,
            pipeline_layout,
            pipeline,
            frame_set_layout,
            cell_set_layout,
            descriptor_pool,
            frame_set,
            cell_set,
            camera_buffer,
            depth_buffer,
            framebuffers,
            context,
        }
    }

    pub fn resize(&mut self, swapchain: &Swapchain) {
        let device = &self.context.device;
        for &framebuffer in &self.framebuffers {
            unsafe { device.destroy_framebuffer(framebuffer, None) };
        }
        self.depth_buffer = DepthBuffer::new(self.context.clone(), swapchain.extent);
        self.framebuffers =
            create_framebuffers(device, self.render_pass, swapchain, self.depth_buffer.view);
    }

    pub fn update(&mut self, camera: &Camera) {
        let camera = shader_types::Camera {
            view: camera.view_matrix(),
            proj: camera.projection_matrix(),
        };
        self.camera_buffer.copy_data(&[camera.as_std140()]);
    }

    pub fn draw(
        &self,
        command_buffer: vk::CommandBuffer,
        image_index: usize,
        extent: vk::Extent2D,
        cell: &Cell,
        registry: &ModelRegistry,
    ) {
        let device = &self.context.device;

        let clear_values = [
            vk::ClearValue {
                color: vk::ClearColorValue {
                    float32: [0.02, 0.02, 0.05, 1.0],
                },
            },
            vk::ClearValue {
                depth_stencil: vk::ClearDepthStencilValue {
                    depth: 1.0,
                    stencil: 0,
                },
            },
        ];

        let begin_info = vk::RenderPassBeginInfo::builder()
            .render_pass(self.render_pass)
            .framebuffer(self.framebuffers[image_index])
            .render_area(vk::Rect2D {
                offset: vk::Offset2D { x: 0, y: 0 },
                extent,
            })
            .clear_values(&clear_values);

        unsafe {
            device.cmd_begin_render_pass(command_buffer, &begin_info, vk::SubpassContents::INLINE);
            device.cmd_bind_pipeline(
                command_buffer,
                vk::PipelineBindPoint::GRAPHICS,
                self.pipeline,
            );

            let viewport = vk::Viewport {
                x: 0.0,
                y: 0.0,
                width: extent.width as f32,
                height: extent.height as f32,
                min_depth: 0.0,
                max_depth: 1.0,
            };
            device.cmd_set_viewport(command_buffer, 0, std::slice::from_ref(&viewport));
            let scissor = vk::Rect2D {
                offset: vk::Offset2D { x: 0, y: 0 },
                extent,
            };
            device.cmd_set_scissor(command_buffer, 0, std::slice::from_ref(&scissor));

            let sets = [self.frame_set.inner, self.cell_set.inner];
            device.cmd_bind_descriptor_sets(
                command_buffer,
                vk::PipelineBindPoint::GRAPHICS,
                self.pipeline_layout,
                0,
                &sets,
                &[],
            );
        }

        cell.draw(command_buffer, self.pipeline_layout, registry);

        unsafe { device.cmd_end_render_pass(command_buffer) };
    }
}

impl Drop for CellRenderer {
    fn drop(&mut self) {
        let device = &self.context.device;
        for &framebuffer in &self.framebuffers {
            unsafe { device.destroy_framebuffer(framebuffer, None) };
        }
        unsafe { device.destroy_pipeline(self.pipeline, None) };
        unsafe { device.destroy_pipeline_layout(self.pipeline_layout, None) };
        unsafe { device.destroy_render_pass(self.render_pass, None) };
        unsafe { device.destroy_descriptor_pool(self.descriptor_pool, None) };
        unsafe { device.destroy_descriptor_set_layout(self.cell_set_layout, None) };
        unsafe { device.destroy_descriptor_set_layout(self.frame_set_layout, None) };
    }
}

fn create_render_pass(device: &ash::Device, color_format: vk::Format) -> vk::RenderPass {
    let attachments = [
        vk::AttachmentDescription {
            format: color_format,
            samples: vk::SampleCountFlags::TYPE_1,
            load_op: vk::AttachmentLoadOp::CLEAR,
            store_op: vk::AttachmentStoreOp::STORE,
            stencil_load_op: vk::AttachmentLoadOp::DONT_CARE,
            stencil_store_op: vk::AttachmentStoreOp::DONT_CARE,
            initial_layout: vk::ImageLayout::UNDEFINED,
            final_layout: vk::ImageLayout::PRESENT_SRC_KHR,
            ..Default::default()
        },
        vk::AttachmentDescription {
            format: DEPTH_FORMAT,
            samples: vk::SampleCountFlags::TYPE_1,
            load_op: vk::AttachmentLoadOp::CLEAR,
            store_op: vk::AttachmentStoreOp::DONT_CARE,
            stencil_load_op: vk::AttachmentLoadOp::DONT_CARE,
            stencil_store_op: vk::AttachmentStoreOp::DONT_CARE,
            initial_layout: vk::ImageLayout::UNDEFINED,
            final_layout: vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
            ..Default::default()
        },
    ];

    let color_ref = vk::AttachmentReference {
        attachment: 0,
        layout: vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
    };
    let depth_ref = vk::AttachmentReference {
        attachment: 1,
        layout: vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
    };

    let subpass = vk::SubpassDescription::builder()
        .pipeline_bind_point(vk::PipelineBindPoint::GRAPHICS)
        .color_attachments(std::slice::from_ref(&color_ref))
        .depth_stencil_attachment(&depth_ref);

    let dependency = vk::SubpassDependency {
        src_subpass: vk::SUBPASS_EXTERNAL,
        src_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
            | vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS,
        dst_stage_mask: vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
            | vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS,
        dst_access_mask: vk::AccessFlags::COLOR_ATTACHMENT_WRITE
            | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE,
        ..Default::default()
    };

    let create_info = vk::RenderPassCreateInfo::builder()
        .attachments(&attachments)
        .subpasses(std::slice::from_ref(&subpass))
        .dependencies(std::slice::from_ref(&dependency));

    unsafe { device.create_render_pass(&create_info, None) }
        .expect("Could not create render pass")
}

fn create_pipeline(
    device: &ash::Device,
    render_pass: vk::RenderPass,
    pipeline_layout: vk::PipelineLayout,
) -> vk::Pipeline {
    let mut vert_spv = Cursor::new(&include_bytes!(concat!(env!("OUT_DIR"), "/scene.vert.spv"))[..]);
    let mut frag_spv = Cursor::new(&include_bytes!(concat!(env!("OUT_DIR"), "/scene.frag.spv"))[..]);

    let vert_code = read_spv(&mut vert_spv).expect("Could not read vertex shader spv");
    let frag_code = read_spv(&mut frag_spv).expect("Could not read fragment shader spv");

    let vert_module = {
        let create_info = vk::ShaderModuleCreateInfo::builder().code(&vert_code);
        unsafe { device.create_shader_module(&create_info, None) }
            .expect("Could not create vertex shader module")
    };
    let frag_module = {
        let create_info = vk::ShaderModuleCreateInfo::builder().code(&frag_code);
        unsafe { device.create_shader_module(&create_info, None) }
            .expect("Could not create fragment shader module")
    };

    let entry_name = unsafe { CStr::from_bytes_with_nul_unchecked(b"main\0") };
    let stages = [
        vk::PipelineShaderStageCreateInfo::builder()
            .module(vert_module)
            .name(entry_name)
            .stage(vk::ShaderStageFlags::VERTEX)
            .build(),
        vk::PipelineShaderStageCreateInfo::builder()
            .module(frag_module)
            .name(entry_name)
            .stage(vk::ShaderStageFlags::FRAGMENT)
            .build(),
    ];

    let binding_descriptions = Vertex::binding_descriptions();
    let attribute_descriptions = Vertex::attribute_descriptions();
    let vertex_input = vk::PipelineVertexInputStateCreateInfo::builder()
        .vertex_binding_descriptions(&binding_descriptions)
        .vertex_attribute_descriptions(&attribute_descriptions);

    let input_assembly = vk::PipelineInputAssemblyStateCreateInfo::builder()
        .topology(vk::PrimitiveTopology::TRIANGLE_LIST);

    let viewport_state = vk::PipelineViewportStateCreateInfo::builder()
        .viewport_count(1)
        .scissor_count(1);

    let rasterization = vk::PipelineRasterizationStateCreateInfo::builder()
        .cull_mode(vk::CullModeFlags::BACK)
        .front_face(vk::FrontFace::COUNTER_CLOCKWISE)
        .line_width(1.0)
        .polygon_mode(vk::PolygonMode::FILL);

    let multisample = vk::PipelineMultisampleStateCreateInfo::builder()
        .rasterization_samples(vk::SampleCountFlags::TYPE_1);

    let depth_stencil = vk::PipelineDepthStencilStateCreateInfo::builder()
        .depth_test_enable(true)
        .depth_write_enable(true)
        .depth_compare_op(vk::CompareOp::LESS_OR_EQUAL)
        .max_depth_bounds(1.0);

    let color_blend_attachment = vk::PipelineColorBlendAttachmentState {
        blend_enable: vk::FALSE,
        color_write_mask: vk::ColorComponentFlags::RGBA,
        ..Default::default()
    };
    let color_blend = vk::PipelineColorBlendStateCreateInfo::builder()
        .attachments(std::slice::from_ref(&color_blend_attachment));

    let dynamic_states = [vk::DynamicState::VIEWPORT, vk::DynamicState::SCISSOR];
    let dynamic_state =
        vk::PipelineDynamicStateCreateInfo::builder().dynamic_states(&dynamic_states);

    let create_info = vk::GraphicsPipelineCreateInfo::builder()
        .stages(&stages)
        .vertex_input_state(&vertex_input)
        .input_assembly_state(&input_assembly)
        .viewport_state(&viewport_state)
        .rasterization_state(&rasterization)
        .multisample_state(&multisample)
        .depth_stencil_state(&depth_stencil)
        .color_blend_state(&color_blend)
        .dynamic_state(&dynamic_state)
        .layout(pipeline_layout)
        .render_pass(render_pass)
        .subpass(0);

    let pipeline = unsafe {
        device.create_graphics_pipelines(
            vk::PipelineCache::null(),
            std::slice::from_ref(&create_info),
            None,
        )
    }
    .expect("Could not create graphics pipeline")[0];

    unsafe { device.destroy_shader_module(vert_module, None) };
    unsafe { device.destroy_shader_module(frag_module, None) };

    pipeline
}

fn create_framebuffers(
    device: &ash::Device,
    render_pass: vk::RenderPass,
    swapchain: &Swapchain,
    depth_view: vk::ImageView,
) -> Vec<vk::Framebuffer> {
    swapchain
        .image_views
        .iter()
        .map(|&image_view| {
            let attachments = [image_view, depth_view];
            let create_info = vk::FramebufferCreateInfo::builder()
                .render_pass(render_pass)
                .attachments(&attachments)
                .width(swapchain.extent.width)
                .height(swapchain.extent.height)
                .layers(1);

            unsafe { device.create_framebuffer(&create_info, None) }
                .expect("Could not create framebuffer")
        })
        .collect()
}

struct DepthBuffer {
    image: vk::Image,
    view: vk::ImageView,
    allocation: Option<Allocation>,
    context: Arc<Context>,
}

impl DepthBuffer {
    fn new(context: Arc<Context>, extent: vk::Extent2D) -> Self {
        let device = &context.device;

        let image = {
            let create_info = vk::ImageCreateInfo::builder()
                .image_type(vk::ImageType::TYPE_2D)
                .format(DEPTH_FORMAT)
                .extent(vk::Extent3D {
                    width: extent.width,
                    height: extent.height,
                    depth: 1,
                })
                .mip_levels(1)
                .array_layers(1)
                .samples(vk::SampleCountFlags::TYPE_1)
                .tiling(vk::ImageTiling::OPTIMAL)
                .usage(vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT)
                .initial_layout(vk::ImageLayout::UNDEFINED);
            unsafe { device.create_image(&create_info, None) }
                .expect("Could not create depth image")
        };

        let requirements = unsafe { device.get_image_memory_requirements(image) };
        let allocation = context
            .allocator
            .lock()
            .unwrap()
            .allocate(&AllocationCreateDesc {
                name: "depth buffer",
                requirements,
                location: MemoryLocation::GpuOnly,
                linear: false,
                allocation_scheme: AllocationScheme::GpuAllocatorManaged,
            })
            .expect("Could not allocate depth buffer memory");
        unsafe { device.bind_image_memory(image, allocation.memory(), allocation.offset()) }
            .expect("Could not bind depth buffer memory");

        let view = {
            let create_info = vk::ImageViewCreateInfo::builder()
                .view_type(vk::ImageViewType::TYPE_2D)
                .format(DEPTH_FORMAT)
                .subresource_range(vk::ImageSubresourceRange {
                    aspect_mask: vk::ImageAspectFlags::DEPTH,
                    base_mip_level: 0,
                    level_count: 1,
                    base_array_layer: 0,
                    layer_count: 1,
                })
                .image(image);
            unsafe { device.create_image_view(&create_info, None) }
                .expect("Could not create depth image view")
        };

        Self {
            image,
            view,
            allocation: Some(allocation),
            context,
        }
    }
}

impl Drop for DepthBuffer {
    fn drop(&mut self) {
        let device = &self.context.device;
        unsafe { device.destroy_image_view(self.view, None) };
        unsafe { device.destroy_image(self.image, None) };
        if let Some(allocation) = self.allocation.take() {
            let _ = self.context.allocator.lock().unwrap().free(allocation);
        }
    }
}

mod shader_types {
    use crevice::std140::AsStd140;
    use ultraviolet::Mat4;

    #[derive(AsStd140)]
    pub struct Camera {
        pub view: Mat4,
        pub proj: Mat4,
    }
}
