use crate::error::VulkanError;
use crate::instance::VulkanInstance;
use crate::surface::VulkanSurface;
use crate::utils::ReplaceWith;
use crate::version::Version;
use log::info;
use std::ffi::CStr;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Identity an example hands to the driver at instance creation time.
pub struct ExampleInfo {
    pub title: &'static str,
    pub app_name: &'static CStr,
    pub app_version: Version,
}

impl Default for ExampleInfo {
    fn default() -> Self {
        Self {
            title: "Vulkan Tests",
            app_name: c"Vulkan Tests",
            app_version: Version::new(0, 1, 0),
        }
    }
}

/// One example program.
///
/// The shell owns the window and the event loop; the example supplies the
/// instance (requesting whatever extensions it wants to demonstrate) and an
/// optional per-frame callback. The shell creates the surface from the
/// returned instance, and teardown is implicit: surface first, instance
/// second, window last.
pub trait Example {
    /// Bring up Vulkan for this example. The returned instance must be able
    /// to present to `window`, so the platform surface extensions have to be
    /// enabled.
    fn init_vulkan(
        &mut self,
        info: &ExampleInfo,
        window: &Window,
    ) -> Result<VulkanInstance, VulkanError>;

    /// Called on every redraw. The examples here have nothing to draw.
    fn render(&mut self, _instance: &VulkanInstance) {}
}

/// Everything a running example owns.
pub struct ShellCtx<E: Example> {
    example: E,
    // surface before instance, handles drop in reverse creation order
    _surface: VulkanSurface,
    instance: VulkanInstance,
    window: Window,
}

impl<E: Example> ShellCtx<E> {
    fn new(info: ExampleInfo, mut example: E, event_loop: &ActiveEventLoop) -> Self {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(info.title)
                    .with_inner_size(LogicalSize::new(800.0, 600.0)),
            )
            .expect("could not create the window");

        let instance = example
            .init_vulkan(&info, &window)
            .expect("could not initialise Vulkan");

        let surface =
            VulkanSurface::new(&instance, &window).expect("could not create surface for Vulkan");

        window.request_redraw();

        Self {
            example,
            _surface: surface,
            instance,
            window,
        }
    }
}

/// Window and event loop runner shared by all the examples.
///
/// Starts out uninitialised; the first `resumed` from winit creates the
/// window, runs the example's Vulkan setup and switches to the initialised
/// state. Exiting the loop drops the context and with it every handle.
pub enum Shell<E: Example> {
    Uninitialised { info: ExampleInfo, example: E },
    Initialised(ShellCtx<E>),
}

impl<E: Example, F> ReplaceWith<F> for Shell<E> {}

impl<E: Example> Shell<E> {
    pub fn new(info: ExampleInfo, example: E) -> Self {
        Shell::Uninitialised { info, example }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) {
        self.replace_with(|state| match state {
            Self::Initialised(_) => panic!(),
            Self::Uninitialised { info, example } => {
                info!("starting example: {}", info.title);
                Self::Initialised(ShellCtx::new(info, example, event_loop))
            }
        });
    }

    /// Run the example until its window is closed.
    pub fn run(mut self) -> Result<(), VulkanError> {
        let event_loop = EventLoop::new()?;

        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl<E: Example> ApplicationHandler for Shell<E> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Shell::Uninitialised { .. } = self {
            self.init(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Shell::Initialised(ctx) = self {
                    ctx.example.render(&ctx.instance);
                    ctx.window.request_redraw();
                }
            }
            _ => (),
        }
    }
}
