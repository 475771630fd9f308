use ash::vk;
use thiserror::Error;
use winit::error::EventLoopError;
use winit::raw_window_handle::HandleError;

/// Everything that can go wrong while bringing Vulkan up.
///
/// Driver failures stay as raw `vk::Result` status codes except for
/// `VK_ERROR_INCOMPATIBLE_DRIVER`, which gets its own variant because the
/// minimal example maps it to a dedicated exit code.
#[derive(Debug, Error)]
pub enum VulkanError {
    #[error("failed to load the Vulkan library: {0}")]
    Loading(#[from] ash::LoadingError),

    #[error("the installed driver is incompatible with the requested API version")]
    IncompatibleDriver,

    #[error("Vulkan call failed: {0}")]
    Vk(#[from] vk::Result),

    #[error("no Vulkan physical devices are available")]
    NoPhysicalDevices,

    #[error("window handle is unavailable: {0}")]
    Handle(#[from] HandleError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
}
