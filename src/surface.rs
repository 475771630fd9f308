use crate::error::VulkanError;
use crate::instance::VulkanInstance;
use ash::khr::surface;
use ash::vk;
use winit::raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::window::Window;

/// A presentable surface bound to a window.
///
/// Must be dropped before the `VulkanInstance` it was created from, the
/// destroy call goes through function pointers loaded from that instance.
pub struct VulkanSurface {
    pub surface: vk::SurfaceKHR,
    pub surface_loader: surface::Instance,
}

impl VulkanSurface {
    pub fn new(vk_instance: &VulkanInstance, window: &Window) -> Result<Self, VulkanError> {
        let surface = unsafe {
            ash_window::create_surface(
                &vk_instance.entry,
                &vk_instance.instance,
                window.display_handle()?.as_raw(),
                window.window_handle()?.as_raw(),
                None,
            )?
        };

        let surface_loader = surface::Instance::new(&vk_instance.entry, &vk_instance.instance);

        Ok(Self {
            surface,
            surface_loader,
        })
    }
}

impl Drop for VulkanSurface {
    fn drop(&mut self) {
        unsafe {
            self.surface_loader.destroy_surface(self.surface, None);
        }
    }
}
