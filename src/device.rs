use crate::error::VulkanError;
use crate::version::Version;
use ash::{vk, Instance};
use std::fmt::Write;

/// All physical devices visible to the instance.
///
/// The count-query/fill-query dance of `vkEnumeratePhysicalDevices` happens
/// inside ash, the returned `Vec` is always sized to the count the driver
/// reported.
pub fn enumerate(instance: &Instance) -> Result<Vec<vk::PhysicalDevice>, VulkanError> {
    let physical_devices = unsafe { instance.enumerate_physical_devices()? };
    Ok(physical_devices)
}

/// Handle to the first physical device connected to the system.
pub fn first_physical_device(instance: &Instance) -> Result<vk::PhysicalDevice, VulkanError> {
    enumerate(instance)?
        .first()
        .copied()
        .ok_or(VulkanError::NoPhysicalDevices)
}

/// Fixed label for each of the known device types, `None` for anything a
/// newer driver might report.
pub fn device_type_label(device_type: vk::PhysicalDeviceType) -> Option<&'static str> {
    match device_type {
        vk::PhysicalDeviceType::CPU => Some("CPU"),
        vk::PhysicalDeviceType::DISCRETE_GPU => Some("Discrete GPU"),
        vk::PhysicalDeviceType::INTEGRATED_GPU => Some("Integrated GPU"),
        vk::PhysicalDeviceType::VIRTUAL_GPU => Some("Virtual GPU"),
        vk::PhysicalDeviceType::OTHER => Some("Other"),
        _ => None,
    }
}

/// The driver's 16 byte pipeline cache identifier in the canonical
/// 8-4-4-4-12 hex form.
pub fn format_pipeline_cache_uuid(uuid: &[u8; vk::UUID_SIZE]) -> String {
    let mut out = String::with_capacity(36);

    for (i, byte) in uuid.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        let _ = write!(out, "{byte:02x}");
    }

    out
}

/// Total DEVICE_LOCAL heap memory in MiB.
pub fn physical_device_memory_size(
    physical_device: &vk::PhysicalDevice,
    instance: &Instance,
) -> u64 {
    let memory_properties =
        unsafe { instance.get_physical_device_memory_properties(*physical_device) };

    memory_properties.memory_heaps[..memory_properties.memory_heap_count as usize]
        .iter()
        .fold(0u64, |acc, heap| {
            if heap.flags.contains(vk::MemoryHeapFlags::DEVICE_LOCAL) {
                acc + heap.size / (1024 * 1024)
            } else {
                acc
            }
        })
}

/// Print the property report for one physical device: versions, identifiers,
/// type, name, pipeline cache UUID and a subset of the device limits.
pub fn print_device_summary(instance: &Instance, ordinal: usize, device: vk::PhysicalDevice) {
    let properties = unsafe { instance.get_physical_device_properties(device) };

    println!("Physical Device {ordinal}");
    println!("~~~~~~~~~~~~~~~~~");

    println!("\tAPI Version: {}", Version::unpack(properties.api_version));
    println!("\tDriver Version: {}", properties.driver_version);
    println!("\tVendor ID: {}", properties.vendor_id);
    println!("\tDevice ID: {}", properties.device_id);
    println!(
        "\tDevice Type: {}",
        device_type_label(properties.device_type).unwrap_or("Unknown")
    );
    println!(
        "\tDevice Name: {}",
        properties
            .device_name_as_c_str()
            .unwrap_or_default()
            .to_string_lossy()
    );
    println!(
        "\tPipeline Cache UUID: {}",
        format_pipeline_cache_uuid(&properties.pipeline_cache_uuid)
    );
    println!(
        "\tDevice Memory: {} MiB",
        physical_device_memory_size(&device, instance)
    );

    let limits = &properties.limits;

    println!("\tLimits");
    println!("\t~~~~~~");
    println!(
        "\t\tMax Image Dimension 1D: {}",
        limits.max_image_dimension1_d
    );
    println!(
        "\t\tMax Image Dimension 2D: {}",
        limits.max_image_dimension2_d
    );
    println!(
        "\t\tMax Image Dimension 3D: {}",
        limits.max_image_dimension3_d
    );
    println!(
        "\t\tMax Image Dimension Cube: {}",
        limits.max_image_dimension_cube
    );
    println!(
        "\t\tMax Image Array Layers: {}",
        limits.max_image_array_layers
    );
    println!(
        "\t\tMax Texel Buffer Elements: {}",
        limits.max_texel_buffer_elements
    );
    println!(
        "\t\tMax Uniform Buffer Range: {}",
        limits.max_uniform_buffer_range
    );
    println!(
        "\t\tMax Storage Buffer Range: {}",
        limits.max_storage_buffer_range
    );
    println!(
        "\t\tMax Push Constants Size: {}",
        limits.max_push_constants_size
    );
    println!();
    println!(
        "\t\tBuffer Image Granularity: {}",
        limits.buffer_image_granularity
    );
    println!(
        "\t\tDiscrete Queue Priorities: {}",
        limits.discrete_queue_priorities
    );
    println!(
        "\t\tFramebuffer Color Sample Counts: {:?}",
        limits.framebuffer_color_sample_counts
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash::Entry;

    #[test]
    fn labels_cover_the_known_device_types() {
        let known = [
            vk::PhysicalDeviceType::OTHER,
            vk::PhysicalDeviceType::INTEGRATED_GPU,
            vk::PhysicalDeviceType::DISCRETE_GPU,
            vk::PhysicalDeviceType::VIRTUAL_GPU,
            vk::PhysicalDeviceType::CPU,
        ];

        for device_type in known {
            assert!(device_type_label(device_type).is_some());
        }
    }

    #[test]
    fn unknown_device_type_has_no_label() {
        assert_eq!(
            device_type_label(vk::PhysicalDeviceType::from_raw(1234)),
            None
        );
    }

    #[test]
    fn pipeline_cache_uuid_formatting() {
        let uuid: [u8; vk::UUID_SIZE] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];

        assert_eq!(
            format_pipeline_cache_uuid(&uuid),
            "00112233-4455-6677-8899-aabbccddeeff"
        );
    }

    #[test]
    fn zero_uuid_formats_to_zeroes() {
        assert_eq!(
            format_pipeline_cache_uuid(&[0; vk::UUID_SIZE]),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    #[ignore = "requires a Vulkan driver"]
    fn enumeration_matches_first_device() {
        let entry = unsafe { Entry::load() }.expect("Vulkan library not found");

        let app_info = vk::ApplicationInfo::default()
            .application_name(c"enumeration test")
            .api_version(vk::API_VERSION_1_0);
        let create_info = vk::InstanceCreateInfo::default().application_info(&app_info);
        let instance = unsafe { entry.create_instance(&create_info, None) }
            .expect("failed to create an instance");

        let devices = enumerate(&instance).expect("enumeration failed");

        match first_physical_device(&instance) {
            Ok(first) => assert_eq!(devices.first().copied(), Some(first)),
            Err(crate::VulkanError::NoPhysicalDevices) => assert!(devices.is_empty()),
            Err(other) => panic!("unexpected error: {other}"),
        }

        unsafe { instance.destroy_instance(None) };
    }
}
