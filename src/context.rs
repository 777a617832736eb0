use std::ffi::CStr;
use std::mem::ManuallyDrop;
use std::sync::Mutex;

use ash::extensions::khr::AccelerationStructure;
use ash::vk::{self, ApplicationInfo, DeviceCreateInfo, DeviceQueueCreateInfo, InstanceCreateInfo};
use gpu_allocator::vulkan::{Allocator, AllocatorCreateDesc};
use raw_window_handle::{HasRawDisplayHandle, HasRawWindowHandle};
use winit::event_loop::EventLoop;
use winit::window::Window;

/// Owns the Vulkan instance, device and allocator for the whole application.
///
/// Everything that allocates GPU resources holds an `Arc<Context>`, so the
/// device is guaranteed to outlive every buffer, image and acceleration
/// structure created through it.
pub struct Context {
    _entry: ash::Entry,
    pub instance: ash::Instance,

    pub surface_loader: ash::extensions::khr::Surface,
    pub surface: vk::SurfaceKHR,

    pub physical_device: vk::PhysicalDevice,
    pub queue_family_index: u32,

    pub device: ash::Device,
    pub queue: vk::Queue,

    pub acceleration_structure: AccelerationStructure,
    pub acceleration_structure_properties: vk::PhysicalDeviceAccelerationStructurePropertiesKHR,

    pub allocator: ManuallyDrop<Mutex<Allocator>>,
}

/// Device extensions beyond the swapchain: acceleration structures for the
/// cell TLAS/BLAS hierarchy, and ray queries so the fragment shader can trace
/// shadow rays against the TLAS without a full ray-tracing pipeline.
fn required_device_extensions() -> [&'static CStr; 4] {
    [
        ash::extensions::khr::Swapchain::name(),
        AccelerationStructure::name(),
        ash::extensions::khr::DeferredHostOperations::name(),
        vk::KhrRayQueryFn::name(),
    ]
}

impl Context {
    pub fn new(event_loop: &EventLoop<()>, window: &Window) -> Self {
        let entry = unsafe { ash::Entry::load() }.expect("Could not load vulkan library");

        let instance = {
            let surface_extensions =
                ash_window::enumerate_required_extensions(event_loop.raw_display_handle())
                    .expect("Could not enumerate surface extensions");

            let app_info = ApplicationInfo::builder().api_version(vk::API_VERSION_1_3);
            let create_info = InstanceCreateInfo::builder()
                .application_info(&app_info)
                .enabled_extension_names(surface_extensions);
            unsafe { entry.create_instance(&create_info, None) }.expect("Could not create instance")
        };

        let surface = unsafe {
            ash_window::create_surface(
                &entry,
                &instance,
                window.raw_display_handle(),
                window.raw_window_handle(),
                None,
            )
        }
        .expect("Could not create surface");
        let surface_loader = ash::extensions::khr::Surface::new(&entry, &instance);

        let (physical_device, queue_family_index) =
            pick_physical_device(&instance, &surface, &surface_loader);

        let device = create_logical_device(&instance, physical_device, queue_family_index);
        let queue = unsafe { device.get_device_queue(queue_family_index, 0) };

        let acceleration_structure = AccelerationStructure::new(&instance, &device);
        let acceleration_structure_properties =
            unsafe { AccelerationStructure::get_properties(&instance, physical_device) };

        let allocator = Allocator::new(&AllocatorCreateDesc {
            instance: instance.clone(),
            device: device.clone(),
            physical_device,
            debug_settings: Default::default(),
            buffer_device_address: true,
            allocation_sizes: Default::default(),
        })
        .expect("Could not create allocator");

        Self {
            _entry: entry,
            instance,
            surface_loader,
            surface,
            physical_device,
            queue_family_index,
            device,
            queue,
            acceleration_structure,
            acceleration_structure_properties,
            allocator: ManuallyDrop::new(Mutex::new(allocator)),
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { ManuallyDrop::drop(&mut self.allocator) };
        unsafe { self.device.destroy_device(None) };
        unsafe { self.surface_loader.destroy_surface(self.surface, None) };
        unsafe { self.instance.destroy_instance(None) };
    }
}

fn pick_physical_device(
    instance: &ash::Instance,
    surface: &vk::SurfaceKHR,
    surface_loader: &ash::extensions::khr::Surface,
) -> (vk::PhysicalDevice, u32) {
    let physical_devices = unsafe { instance.enumerate_physical_devices() }
        .expect("Could not enumerate physical devices");

    physical_devices
        .into_iter()
        .filter(|&physical_device| supports_required_extensions(instance, physical_device))
        .filter_map(|physical_device| {
            let queue_families =
                unsafe { instance.get_physical_device_queue_family_properties(physical_device) };

            queue_families
                .iter()
                .enumerate()
                .position(|(index, info)| {
                    let supports_graphics = info.queue_flags.contains(vk::QueueFlags::GRAPHICS);
                    let supports_surface = unsafe {
                        surface_loader.get_physical_device_surface_support(
                            physical_device,
                            index as u32,
                            *surface,
                        )
                    }
                    .unwrap_or(false);

                    supports_graphics && supports_surface
                })
                .map(|index| (physical_device, index as u32))
        })
        .min_by_key(|&(physical_device, _)| {
            let device_type =
                unsafe { instance.get_physical_device_properties(physical_device) }.device_type;

            match device_type {
                vk::PhysicalDeviceType::DISCRETE_GPU => 0,
                vk::PhysicalDeviceType::INTEGRATED_GPU => 1,
                vk::PhysicalDeviceType::VIRTUAL_GPU => 2,
                _ => 3,
            }
        })
        .expect("Could not find a device with ray tracing support")
}

fn supports_required_extensions(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
) -> bool {
    let available = match unsafe { instance.enumerate_device_extension_properties(physical_device) }
    {
        Ok(properties) => properties,
        Err(_) => return false,
    };

    required_device_extensions().iter().all(|&required| {
        available
            .iter()
            .any(|property| unsafe { CStr::from_ptr(property.extension_name.as_ptr()) } == required)
    })
}

fn create_logical_device(
    instance: &ash::Instance,
    physical_device: vk::PhysicalDevice,
    queue_family_index: u32,
) -> ash::Device {
    let extension_names: Vec<*const i8> = required_device_extensions()
        .iter()
        .map(|name| name.as_ptr())
        .collect();

    let queue_priorities = [1.0];
    let queue_create_info = DeviceQueueCreateInfo::builder()
        .queue_family_index(queue_family_index)
        .queue_priorities(&queue_priorities);

    // gl_DrawID is needed to look up per-draw material data in the
    // multi-draw-indirect path.
    let mut vulkan11_features =
        vk::PhysicalDeviceVulkan11Features::builder().shader_draw_parameters(true);

    let mut vulkan12_features = vk::PhysicalDeviceVulkan12Features::builder()
        .buffer_device_address(true)
        .descriptor_indexing(true)
        .runtime_descriptor_array(true);

    let mut vulkan13_features =
        vk::PhysicalDeviceVulkan13Features::builder().synchronization2(true);

    let mut acceleration_structure_features =
        vk::PhysicalDeviceAccelerationStructureFeaturesKHR::builder().acceleration_structure(true);

    let mut ray_query_features = vk::PhysicalDeviceRayQueryFeaturesKHR::builder().ray_query(true);

    let create_info = DeviceCreateInfo::builder()
        .queue_create_infos(std::slice::from_ref(&queue_create_info))
        .enabled_extension_names(&extension_names)
        .push_next(&mut vulkan11_features)
        .push_next(&mut vulkan12_features)
        .push_next(&mut vulkan13_features)
        .push_next(&mut acceleration_structure_features)
        .push_next(&mut ray_query_features);

    unsafe { instance.create_device(physical_device, &create_info, None) }
        .expect("Could not create logical device")
}
