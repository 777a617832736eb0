mod acceleration_structure;
mod buffer;
mod camera;
mod command;
mod config;
mod context;
mod descriptor;
mod gltf_model;
mod renderer;
mod scene;
mod swapchain;
mod texture;
mod utility;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use ash::vk;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use camera::{Camera, CameraSettings};
use command::CommandPool;
use config::Config;
use context::Context;
use renderer::CellRenderer;
use scene::CellManager;
use swapchain::Swapchain;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load_or_default(Path::new("raycell.json"));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("raycell")
        .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .context("could not create window")?;

    let context = Arc::new(Context::new(&event_loop, &window));

    let preferred_present_mode = if config.vsync {
        vk::PresentModeKHR::FIFO
    } else {
        vk::PresentModeKHR::MAILBOX
    };
    let mut swapchain = Swapchain::new(context.clone(), window.inner_size(), preferred_present_mode);

    // Scene construction: register-and-place every configured model, then run
    // the one-shot build passes. All of this happens on this thread, before
    // the first frame.
    let mut manager = CellManager::new(context.clone());
    for placement in &config.placements {
        manager.add_instance(&placement.model, placement.transform())?;
    }
    manager.build_tlases()?;
    manager.build_layouts()?;
    manager.build_draw_buffers()?;

    let mut renderer = CellRenderer::new(
        context.clone(),
        &swapchain,
        manager.cell(0).context("no cell was materialized")?,
    );

    let mut camera = Camera::new(
        config.camera.position,
        config.camera.yaw,
        config.camera.pitch,
        CameraSettings {
            aspect_ratio: config.window_width as f32 / config.window_height as f32,
            ..CameraSettings::default()
        },
    );

    let command_pool = CommandPool::new(
        context.clone(),
        vk::CommandPoolCreateFlags::RESET_COMMAND_BUFFER,
    );
    let frame_command_buffer = command_pool.allocate_command_buffers(1)[0];

    let device = &context.device;
    let image_available =
        unsafe { device.create_semaphore(&vk::SemaphoreCreateInfo::default(), None) }?;
    let render_finished =
        unsafe { device.create_semaphore(&vk::SemaphoreCreateInfo::default(), None) }?;
    let in_flight = {
        let create_info = vk::FenceCreateInfo::builder().flags(vk::FenceCreateFlags::SIGNALED);
        unsafe { device.create_fence(&create_info, None) }?
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                    swapchain.recreate(size);
                    renderer.resize(&swapchain);
                    camera.settings.aspect_ratio = size.width as f32 / size.height as f32;
                }
                _ => {}
            },
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                let device = &context.device;

                unsafe { device.wait_for_fences(&[in_flight], true, u64::MAX) }
                    .expect("Could not wait for frame fence");

                let image_index = match unsafe {
                    swapchain.loader.acquire_next_image(
                        swapchain.inner,
                        u64::MAX,
                        image_available,
                        vk::Fence::null(),
                    )
                } {
                    Ok((image_index, _suboptimal)) => image_index,
                    Err(vk::Result::ERROR_OUT_OF_DATE_KHR) => {
                        swapchain.recreate(window.inner_size());
                        renderer.resize(&swapchain);
                        return;
                    }
                    Err(err) => panic!("Could not acquire swapchain image: {err}"),
                };

                unsafe { device.reset_fences(&[in_flight]) }.expect("Could not reset frame fence");

                renderer.update(&camera);

                let begin_info = vk::CommandBufferBeginInfo::builder()
                    .flags(vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT);
                unsafe { device.begin_command_buffer(frame_command_buffer, &begin_info) }
                    .expect("Could not begin frame command buffer");

                if let Some(cell) = manager.cell(0) {
                    renderer.draw(
                        frame_command_buffer,
                        image_index as usize,
                        swapchain.extent,
                        cell,
                        manager.registry(),
                    );
                }

                unsafe { device.end_command_buffer(frame_command_buffer) }
                    .expect("Could not end frame command buffer");

                let wait_stages = [vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT];
                let submit_info = vk::SubmitInfo::builder()
                    .wait_semaphores(std::slice::from_ref(&image_available))
                    .wait_dst_stage_mask(&wait_stages)
                    .command_buffers(std::slice::from_ref(&frame_command_buffer))
                    .signal_semaphores(std::slice::from_ref(&render_finished));
                unsafe {
                    device.queue_submit(
                        context.queue,
                        std::slice::from_ref(&submit_info),
                        in_flight,
                    )
                }
                .expect("Could not submit frame");

                let present_info = vk::PresentInfoKHR::builder()
                    .wait_semaphores(std::slice::from_ref(&render_finished))
                    .swapchains(std::slice::from_ref(&swapchain.inner))
                    .image_indices(std::slice::from_ref(&image_index));
                match unsafe { swapchain.loader.queue_present(context.queue, &present_info) } {
                    Ok(false) => {}
                    Ok(true) | Err(vk::Result::ERROR_OUT_OF_DATE_KHR) => {
                        swapchain.recreate(window.inner_size());
                        renderer.resize(&swapchain);
                    }
                    Err(err) => panic!("Could not present: {err}"),
                }
            }
            Event::LoopDestroyed => {
                unsafe { context.device.device_wait_idle() }
                    .expect("Could not wait for device idle");
                // The frame pool must live as long as the event loop; naming it
                // here moves it into the closure.
                let _ = &command_pool;
            }
            _ => {}
        }
    });
}
