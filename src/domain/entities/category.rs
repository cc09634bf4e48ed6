//! Device catalog entities.

use serde::{Deserialize, Serialize};

/// Device entry as delivered inside a category by the content service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceFromApi {
    /// Device name.
    pub name: String,
    /// Illustrative image URL.
    pub image_url: String,
}

impl DeviceFromApi {
    /// Creates a new device entry.
    #[must_use]
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

/// A named group of devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCategory {
    /// Category name, localized by the content service.
    pub name: String,
    /// Short category description.
    pub description: String,
    /// Devices in this category.
    pub devices: Vec<DeviceFromApi>,
}

impl DeviceCategory {
    /// Creates an empty category.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            devices: Vec::new(),
        }
    }

    /// Adds a device to the category.
    #[must_use]
    pub fn with_device(mut self, device: DeviceFromApi) -> Self {
        self.devices.push(device);
        self
    }
}

/// Flattened device annotated with its owning category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    /// Device name.
    pub name: String,
    /// Name of the category the device was listed under.
    pub category_name: String,
    /// Illustrative image URL.
    pub image_url: String,
}

impl Device {
    /// Creates a new device.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category_name: category_name.into(),
            image_url: image_url.into(),
        }
    }
}

/// Projects every category's devices into one list, keeping catalog order.
#[must_use]
pub fn flatten_devices(categories: &[DeviceCategory]) -> Vec<Device> {
    categories
        .iter()
        .flat_map(|category| {
            category.devices.iter().map(|device| Device {
                name: device.name.clone(),
                category_name: category.name.clone(),
                image_url: device.image_url.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_keeps_order_and_category() {
        let categories = vec![
            DeviceCategory::new("X-ray Devices", "Radiography")
                .with_device(DeviceFromApi::new("C-arm", "https://img/carm.png"))
                .with_device(DeviceFromApi::new("Portable X-ray", "https://img/px.png")),
            DeviceCategory::new("Therapy", "Treatment")
                .with_device(DeviceFromApi::new("Nebulizer", "https://img/neb.png")),
        ];

        let devices = flatten_devices(&categories);

        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0], Device::new("C-arm", "X-ray Devices", "https://img/carm.png"));
        assert_eq!(devices[1].name, "Portable X-ray");
        assert_eq!(devices[2].category_name, "Therapy");
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_devices(&[]).is_empty());
        assert!(flatten_devices(&[DeviceCategory::new("Empty", "")]).is_empty());
    }
}
