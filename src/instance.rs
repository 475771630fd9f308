use crate::error::VulkanError;
use crate::version::Version;
use ash::{vk, Entry, Instance};
use log::info;
use std::ffi::{c_char, CStr};
use winit::raw_window_handle::RawDisplayHandle;

pub const ENGINE_NAME: &CStr = c"vulkan-primer";
pub const ENGINE_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
pub const ENGINE_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
pub const ENGINE_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");

/// The loaded Vulkan library together with the instance created from it.
///
/// The `Entry` has to stay alive for as long as the instance, the function
/// pointers `Instance` holds are loaded through it. Dropping this destroys the
/// instance, so every handle derived from it (surfaces in particular) must be
/// gone first.
pub struct VulkanInstance {
    pub entry: Entry,
    pub instance: Instance,
}

impl VulkanInstance {
    /// Load the Vulkan library and create an instance ready to present to the
    /// display behind `display_handle`.
    ///
    /// The enabled extension list is the platform required set for that
    /// display plus `extra_extensions`. Requesting a name the platform already
    /// requires is fine, duplicates are merged away.
    pub fn new(
        app_name: &CStr,
        app_version: Version,
        display_handle: RawDisplayHandle,
        extra_extensions: &[&CStr],
    ) -> Result<Self, VulkanError> {
        let entry = unsafe { Entry::load()? };

        let required = ash_window::enumerate_required_extensions(display_handle)?;
        // ash-window hands out static NUL-terminated names
        let required: Vec<&CStr> = required
            .iter()
            .map(|&name| unsafe { CStr::from_ptr(name) })
            .collect();

        let extension_names = merge_extension_names(&required, extra_extensions);

        for name in &extension_names {
            info!("enabling instance extension {}", name.to_string_lossy());
        }

        let engine_version = vk::make_api_version(
            0,
            ENGINE_MAJOR.parse().unwrap_or(0),
            ENGINE_MINOR.parse().unwrap_or(0),
            ENGINE_PATCH.parse().unwrap_or(0),
        );

        let app_info = vk::ApplicationInfo::default()
            .application_name(app_name)
            .application_version(app_version.pack())
            .engine_name(ENGINE_NAME)
            .engine_version(engine_version)
            .api_version(vk::API_VERSION_1_0);

        let instance = Self::create_instance(&entry, &app_info, &extension_names)?;

        Ok(Self { entry, instance })
    }

    fn create_instance(
        entry: &Entry,
        app_info: &vk::ApplicationInfo<'_>,
        extension_names: &[&CStr],
    ) -> Result<Instance, VulkanError> {
        let extension_names: Vec<*const c_char> =
            extension_names.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::default()
            .application_info(app_info)
            .enabled_extension_names(&extension_names);

        let instance = unsafe { entry.create_instance(&create_info, None) }.map_err(|err| {
            match err {
                vk::Result::ERROR_INCOMPATIBLE_DRIVER => VulkanError::IncompatibleDriver,
                other => VulkanError::Vk(other),
            }
        })?;

        Ok(instance)
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

/// Union of the platform required extension names and the explicitly requested
/// ones. Order is preserved and the first occurrence of a name wins.
pub fn merge_extension_names<'a>(required: &[&'a CStr], requested: &[&'a CStr]) -> Vec<&'a CStr> {
    let mut names: Vec<&CStr> = Vec::with_capacity(required.len() + requested.len());

    for &name in required.iter().chain(requested) {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash::khr;

    #[test]
    fn merge_keeps_union_in_order() {
        let required = [khr::surface::NAME, khr::wayland_surface::NAME];
        let requested = [khr::display::NAME];

        let merged = merge_extension_names(&required, &requested);

        assert_eq!(
            merged,
            vec![
                khr::surface::NAME,
                khr::wayland_surface::NAME,
                khr::display::NAME
            ]
        );
    }

    #[test]
    fn merge_drops_duplicates() {
        let required = [khr::surface::NAME, khr::xlib_surface::NAME];
        // requesting something the platform already requires must not
        // produce a second entry
        let requested = [khr::surface::NAME, khr::surface::NAME];

        let merged = merge_extension_names(&required, &requested);

        assert_eq!(merged, vec![khr::surface::NAME, khr::xlib_surface::NAME]);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        assert!(merge_extension_names(&[], &[]).is_empty());
    }

    #[test]
    #[ignore = "requires a Vulkan driver"]
    fn create_and_destroy_bare_instance() {
        let entry = unsafe { Entry::load() }.expect("Vulkan library not found");

        let app_info = vk::ApplicationInfo::default()
            .application_name(c"instance test")
            .api_version(vk::API_VERSION_1_0);
        let create_info = vk::InstanceCreateInfo::default().application_info(&app_info);

        let instance = unsafe { entry.create_instance(&create_info, None) }
            .expect("failed to create an instance with zero extensions");

        assert_ne!(instance.handle(), vk::Instance::null());

        unsafe { instance.destroy_instance(None) };
    }
}
