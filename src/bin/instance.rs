//! Creating a Vulkan instance by hand.
//!
//! Spells out what `vk::ApplicationInfo` and `vk::InstanceCreateInfo` are, how
//! the enabled extension list is put together, and what the loader reports
//! about the instance once it exists. The other examples go through
//! `VulkanInstance::new`, which automates exactly the steps shown here.

use ash::{ext, khr, vk, Entry};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::ffi::CStr;
use vulkan_primer::instance::merge_extension_names;
use vulkan_primer::{Example, ExampleInfo, Shell, Version, VulkanError, VulkanInstance};
use winit::raw_window_handle::HasDisplayHandle;
use winit::window::Window;

struct InstanceExample;

impl Example for InstanceExample {
    fn init_vulkan(
        &mut self,
        info: &ExampleInfo,
        window: &Window,
    ) -> Result<VulkanInstance, VulkanError> {
        // Load the Vulkan library. Everything below goes through function
        // pointers resolved from this entry point.
        let entry = unsafe { Entry::load()? };

        // The windowing system needs a set of extensions enabled before a
        // surface can be created, and which ones depends on the platform.
        let required = ash_window::enumerate_required_extensions(
            window.display_handle()?.as_raw(),
        )?;
        let required: Vec<&CStr> = required
            .iter()
            .map(|&name| unsafe { CStr::from_ptr(name) })
            .collect();

        // Request VK_KHR_surface on top; without it the instance would act
        // like an offscreen context. The platform set already carries it, so
        // the merge collapses the duplicate.
        let extension_names = merge_extension_names(&required, &[khr::surface::NAME]);
        let extension_names: Vec<_> = extension_names.iter().map(|name| name.as_ptr()).collect();

        // vk::ApplicationInfo describes the application to the driver. None
        // of it changes behaviour here, but drivers key workarounds off these
        // fields in the wild.
        let app_info = vk::ApplicationInfo::default()
            .application_name(info.app_name)
            .application_version(info.app_version.pack())
            .engine_name(c"vulkan-primer")
            .api_version(vk::API_VERSION_1_0);

        // vk::InstanceCreateInfo refers to the application info and carries
        // the enabled extension list.
        let create_info = vk::InstanceCreateInfo::default()
            .application_info(&app_info)
            .enabled_extension_names(&extension_names);

        let instance = unsafe { entry.create_instance(&create_info, None)? };

        // No manual frees: the create info structs only borrow the buffers
        // above, and everything is released when this scope ends. The wrapper
        // owns the handle from here on.
        let instance = VulkanInstance { entry, instance };

        print_loader_report(&instance.entry)?;

        Ok(instance)
    }
}

/// What the installed loader offers: its instance API version and whether the
/// extensions these examples care about are available.
fn print_loader_report(entry: &Entry) -> Result<(), VulkanError> {
    // a loader that predates vkEnumerateInstanceVersion is a 1.0 loader
    let loader_version = unsafe { entry.try_enumerate_instance_version() }?
        .unwrap_or(vk::API_VERSION_1_0);

    println!("Instance API Version: {}", Version::unpack(loader_version));

    let available = unsafe { entry.enumerate_instance_extension_properties(None) }?;
    let available: Vec<&CStr> = available
        .iter()
        .map(|properties| properties.extension_name_as_c_str().unwrap_or_default())
        .collect();

    let interesting = [
        khr::surface::NAME,
        khr::display::NAME,
        khr::xlib_surface::NAME,
        khr::wayland_surface::NAME,
        khr::win32_surface::NAME,
        ext::debug_report::NAME,
        ext::debug_utils::NAME,
    ];

    for name in interesting {
        println!(
            "{}: {}",
            name.to_string_lossy(),
            available.contains(&name)
        );
    }

    Ok(())
}

fn main() {
    SimpleLogger::new().with_level(LevelFilter::Info).init().unwrap();

    let info = ExampleInfo {
        title: "Vulkan Instance Example",
        app_name: c"Vulkan Instance Example",
        ..Default::default()
    };

    Shell::new(info, InstanceExample).run().unwrap();
}
