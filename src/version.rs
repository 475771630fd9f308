use ash::vk;
use std::fmt;

/// A Vulkan version triple.
///
/// Vulkan packs versions into a single `u32` with 7 bits of major, 10 bits of
/// minor and 12 bits of patch (the variant bits are always zero for the core
/// API). `ash` ships the packing macros as const fns, this type just gives the
/// unpacked form a name and a `Display` impl so the examples can print it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Pack into the `u32` the API expects in `vk::ApplicationInfo` fields.
    pub const fn pack(self) -> u32 {
        vk::make_api_version(0, self.major, self.minor, self.patch)
    }

    /// Unpack a version reported by the driver, ie `api_version` in
    /// `vk::PhysicalDeviceProperties`.
    pub const fn unpack(packed: u32) -> Self {
        Self {
            major: vk::api_version_major(packed),
            minor: vk::api_version_minor(packed),
            patch: vk::api_version_patch(packed),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        // field widths are 7/10/12 bits
        let triples = [
            (0, 0, 0),
            (1, 0, 4),
            (1, 3, 281),
            (2, 9, 100),
            (127, 1023, 4095),
        ];

        for (major, minor, patch) in triples {
            let version = Version::new(major, minor, patch);
            assert_eq!(Version::unpack(version.pack()), version);
        }
    }

    #[test]
    fn matches_ash_packing() {
        assert_eq!(Version::new(1, 3, 0).pack(), vk::API_VERSION_1_3);
        assert_eq!(Version::unpack(vk::API_VERSION_1_0), Version::new(1, 0, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Version::new(1, 0, 4).to_string(), "1.0.4");
    }
}
