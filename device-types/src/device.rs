//! Device domain types.
//!
//! Devices are supplied as a read-only array; nothing in the catalog
//! creates or mutates them after loading.

use serde::{Deserialize, Serialize};

/// A listed device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// Unique device identifier
    pub id: String,

    /// The product this device is an instance of
    pub product: Product,

    /// The product line the device belongs to
    pub line: Line,
}

/// Product information for a device.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Human-readable product name (e.g., "Camera Pro")
    pub name: String,
}

/// Product line grouping.
///
/// Two devices belong to the same line when their line ids are equal;
/// the name is display-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Line {
    /// Line identifier, used in the `lines` URL parameter
    pub id: String,

    /// Display name
    pub name: String,
}

impl Device {
    pub fn new(
        id: impl Into<String>,
        product_name: impl Into<String>,
        line_id: impl Into<String>,
        line_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product: Product {
                name: product_name.into(),
            },
            line: Line {
                id: line_id.into(),
                name: line_name.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_serialization() {
        let device = Device::new("d1", "Camera Pro", "L1", "Protect");

        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains("\"product\":{\"name\":\"Camera Pro\"}"));
        assert!(json.contains("\"line\":{\"id\":\"L1\",\"name\":\"Protect\"}"));

        let deserialized: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(device, deserialized);
    }

    #[test]
    fn test_device_ignores_unknown_fields() {
        let json = r#"{
            "id": "d2",
            "product": { "name": "Switch 24", "abbrev": "USW-24" },
            "line": { "id": "network", "name": "Network" },
            "icon": { "resolutions": [[25, 25]] }
        }"#;

        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.id, "d2");
        assert_eq!(device.product.name, "Switch 24");
        assert_eq!(device.line.id, "network");
    }

    #[test]
    fn test_device_missing_line_is_rejected() {
        let json = r#"{ "id": "d3", "product": { "name": "Orphan" } }"#;
        assert!(serde_json::from_str::<Device>(json).is_err());
    }
}
