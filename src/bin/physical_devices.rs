//! Enumerating the physical devices behind an instance.
//!
//! Creates the instance through the library, asks the driver for every
//! adapter it knows about and prints the properties of each one: versions,
//! identifiers, device type, name, pipeline cache UUID and a subset of the
//! device limits.

use ash::khr;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use vulkan_primer::{device, Example, ExampleInfo, Shell, VulkanError, VulkanInstance};
use winit::raw_window_handle::HasDisplayHandle;
use winit::window::Window;

struct PhysicalDevicesExample;

impl Example for PhysicalDevicesExample {
    fn init_vulkan(
        &mut self,
        info: &ExampleInfo,
        window: &Window,
    ) -> Result<VulkanInstance, VulkanError> {
        // Requesting VK_KHR_surface explicitly, like every example that wants
        // to present should. The platform required set already contains it,
        // the merge inside keeps a single copy.
        let instance = VulkanInstance::new(
            info.app_name,
            info.app_version,
            window.display_handle()?.as_raw(),
            &[khr::surface::NAME],
        )?;

        let devices = device::enumerate(&instance.instance)?;
        info!("found {} physical device(s)", devices.len());

        for (ordinal, device) in devices.iter().enumerate() {
            device::print_device_summary(&instance.instance, ordinal, *device);
        }

        Ok(instance)
    }
}

fn main() {
    SimpleLogger::new().with_level(LevelFilter::Info).init().unwrap();

    let info = ExampleInfo {
        title: "PhysicalDevices Example",
        app_name: c"PhysicalDevices Example",
        ..Default::default()
    };

    Shell::new(info, PhysicalDevicesExample).run().unwrap();
}
