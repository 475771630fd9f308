//! Shared plumbing for a handful of small Vulkan introduction programs.
//!
//! Each binary in `src/bin` is a standalone example. The library carries the
//! parts they all need: loading the Vulkan library and creating an instance,
//! binding a surface to a window, enumerating physical devices, and the
//! window/event-loop shell the examples plug into. Nothing in here renders
//! anything.

pub mod device;
pub mod error;
pub mod instance;
pub mod shell;
pub mod surface;
pub mod utils;
pub mod version;

pub use error::VulkanError;
pub use instance::VulkanInstance;
pub use shell::{Example, ExampleInfo, Shell};
pub use surface::VulkanSurface;
pub use version::Version;
