//! The smallest possible Vulkan window.
//!
//! No library wrappers: raw `ash` calls, explicit teardown in reverse
//! creation order after the event loop exits, and a distinct process exit
//! code for every way initialisation can fail. Everything the other examples
//! get from `VulkanInstance` and `VulkanSurface` is written out by hand here.

use ash::khr::surface;
use ash::{vk, Entry, Instance};
use std::process;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::window::{Window, WindowId};

const EXIT_NO_EVENT_LOOP: i32 = -1;
const EXIT_NO_VULKAN: i32 = -2;
const EXIT_INCOMPATIBLE_DRIVER: i32 = -3;
const EXIT_INSTANCE_FAILED: i32 = -4;
const EXIT_SURFACE_FAILED: i32 = -5;

struct RawHandles {
    // keeps the Vulkan library loaded while the instance is alive
    _entry: Entry,
    instance: Instance,
    surface_loader: surface::Instance,
    surface: vk::SurfaceKHR,
}

struct HelloVulkan {
    // held only to keep the window open while the loop runs
    _window: Option<Window>,
    vulkan: Option<RawHandles>,
}

impl ApplicationHandler for HelloVulkan {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.vulkan.is_some() {
            return;
        }

        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Hello Vulkan")
                    .with_inner_size(LogicalSize::new(800.0, 600.0)),
            )
            .expect("could not create the window");

        let entry = match unsafe { Entry::load() } {
            Ok(entry) => entry,
            Err(error) => {
                eprintln!("Vulkan driver is not found on this machine: {error}");
                process::exit(EXIT_NO_VULKAN);
            }
        };

        let display_handle = window
            .display_handle()
            .expect("no display handle")
            .as_raw();

        // the surface extensions for this platform; without them surface
        // creation below cannot succeed
        let extension_names = match ash_window::enumerate_required_extensions(display_handle) {
            Ok(names) => names,
            Err(error) => {
                eprintln!("could not query the required extensions: {error}");
                process::exit(EXIT_INSTANCE_FAILED);
            }
        };

        let app_info = vk::ApplicationInfo::default()
            .application_name(c"VulkanTests")
            .application_version(1)
            .engine_name(c"VulkanTests")
            .engine_version(1)
            .api_version(vk::API_VERSION_1_0);

        let create_info = vk::InstanceCreateInfo::default()
            .application_info(&app_info)
            .enabled_extension_names(extension_names);

        let instance = match unsafe { entry.create_instance(&create_info, None) } {
            Ok(instance) => instance,
            Err(vk::Result::ERROR_INCOMPATIBLE_DRIVER) => {
                eprintln!("the installed driver is incompatible");
                process::exit(EXIT_INCOMPATIBLE_DRIVER);
            }
            Err(error) => {
                eprintln!("could not create the instance: {error}");
                process::exit(EXIT_INSTANCE_FAILED);
            }
        };

        let surface = match unsafe {
            ash_window::create_surface(
                &entry,
                &instance,
                display_handle,
                window.window_handle().expect("no window handle").as_raw(),
                None,
            )
        } {
            Ok(surface) => surface,
            Err(error) => {
                eprintln!("could not create surface for Vulkan: {error}");
                process::exit(EXIT_SURFACE_FAILED);
            }
        };

        let surface_loader = surface::Instance::new(&entry, &instance);

        self._window = Some(window);
        self.vulkan = Some(RawHandles {
            _entry: entry,
            instance,
            surface_loader,
            surface,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
        }
    }
}

fn main() {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(error) => {
            eprintln!("could not initialise the windowing system: {error}");
            process::exit(EXIT_NO_EVENT_LOOP);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = HelloVulkan {
        _window: None,
        vulkan: None,
    };

    if let Err(error) = event_loop.run_app(&mut app) {
        eprintln!("event loop error: {error}");
        process::exit(EXIT_NO_EVENT_LOOP);
    }

    // teardown in reverse creation order, surface before instance; this is
    // the sequence the library wrappers automate with Drop
    if let Some(vulkan) = app.vulkan.take() {
        unsafe {
            vulkan.surface_loader.destroy_surface(vulkan.surface, None);
            vulkan.instance.destroy_instance(None);
        }
    }
}
