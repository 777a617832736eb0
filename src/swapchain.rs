use std::sync::Arc;

use ash::vk;
use winit::dpi::PhysicalSize;

use crate::context::Context;

pub struct Swapchain {
    pub loader: ash::extensions::khr::Swapchain,
    pub inner: vk::SwapchainKHR,

    pub images: Vec<vk::Image>,
    pub image_views: Vec<vk::ImageView>,

    pub format: vk::SurfaceFormatKHR,
    pub extent: vk::Extent2D,

    present_mode: vk::PresentModeKHR,
    context: Arc<Context>,
}

impl Swapchain {
    pub fn new(
        context: Arc<Context>,
        window_size: PhysicalSize<u32>,
        preferred_present_mode: vk::PresentModeKHR,
    ) -> Self {
        let formats = unsafe {
            context
                .surface_loader
                .get_physical_device_surface_formats(context.physical_device, context.surface)
        }
        .expect("Could not get surface formats");

        let format = formats
            .iter()
            .copied()
            .find(|format| {
                format.format == vk::Format::B8G8R8A8_SRGB
                    && format.color_space == vk::ColorSpaceKHR::SRGB_NONLINEAR
            })
            .unwrap_or(formats[0]);

        let present_modes = unsafe {
            context
                .surface_loader
                .get_physical_device_surface_present_modes(context.physical_device, context.surface)
        }
        .expect("Could not get surface present modes");

        let present_mode = present_modes
            .into_iter()
            .find(|&mode| mode == preferred_present_mode)
            .unwrap_or(vk::PresentModeKHR::FIFO);

        let loader = ash::extensions::khr::Swapchain::new(&context.instance, &context.device);

        let mut swapchain = Self {
            loader,
            inner: vk::SwapchainKHR::null(),
            images: Vec::new(),
            image_views: Vec::new(),
            format,
            extent: vk::Extent2D::default(),
            present_mode,
            context,
        };
        swapchain.recreate(window_size);
        swapchain
    }

    pub fn recreate(&mut self, window_size: PhysicalSize<u32>) {
        let device = &self.context.device;
        unsafe { device.device_wait_idle() }.expect("Could not wait for device idle");

        let capabilities = unsafe {
            self.context
                .surface_loader
                .get_physical_device_surface_capabilities(
                    self.context.physical_device,
                    self.context.surface,
                )
        }
        .expect("Could not get surface capabilities");

        let extent = if capabilities.current_extent.width != u32::MAX {
            capabilities.current_extent
        } else {
            vk::Extent2D {
                width: window_size.width.clamp(
                    capabilities.min_image_extent.width,
                    capabilities.max_image_extent.width,
                ),
                height: window_size.height.clamp(
                    capabilities.min_image_extent.height,
                    capabilities.max_image_extent.height,
                ),
            }
        };

        let create_info = vk::SwapchainCreateInfoKHR::builder()
            .surface(self.context.surface)
            .min_image_count(capabilities.min_image_count.max(2))
            .image_format(self.format.format)
            .image_color_space(self.format.color_space)
            .image_extent(extent)
            .image_array_layers(1)
            .image_usage(vk::ImageUsageFlags::COLOR_ATTACHMENT)
            .image_sharing_mode(vk::SharingMode::EXCLUSIVE)
            .pre_transform(capabilities.current_transform)
            .composite_alpha(vk::CompositeAlphaFlagsKHR::OPAQUE)
            .present_mode(self.present_mode)
            .clipped(true)
            .old_swapchain(self.inner);

        let swapchain = unsafe { self.loader.create_swapchain(&create_info, None) }
            .expect("Could not create swapchain");

        self.destroy_handles();
        self.inner = swapchain;
        self.extent = extent;

        self.images = unsafe { self.loader.get_swapchain_images(swapchain) }
            .expect("Could not get swapchain images");

        self.image_views = self
            .images
            .iter()
            .map(|&image| {
                let create_info = vk::ImageViewCreateInfo::builder()
                    .view_type(vk::ImageViewType::TYPE_2D)
                    .format(self.format.format)
                    .subresource_range(vk::ImageSubresourceRange {
                        aspect_mask: vk::ImageAspectFlags::COLOR,
                        base_mip_level: 0,
                        level_count: 1,
                        base_array_layer: 0,
                        layer_count: 1,
                    })
                    .image(image);

                unsafe { device.create_image_view(&create_info, None) }
                    .expect("Could not create swapchain image view")
            })
            .collect();
    }

    fn destroy_handles(&mut self) {
        let device = &self.context.device;
        for &image_view in &self.image_views {
            unsafe { device.destroy_image_view(image_view, None) };
        }
        self.image_views.clear();
        if self.inner != vk::SwapchainKHR::null() {
            unsafe { self.loader.destroy_swapchain(self.inner, None) };
            self.inner = vk::SwapchainKHR::null();
        }
    }
}

impl Drop for Swapchain {
    fn drop(&mut self) {
        self.destroy_handles();
    }
}
