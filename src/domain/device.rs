//! Device - Device Types and Their Icons

use crate::constants::DEFAULT_DEVICE_ICON;

/// Device categories known to the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Laptop,
    PcCase,
    Monitor,
    Keyboard,
    Mouse,
    Ram,
    Cpu,
    Ssd,
    Hdd,
    Desk,
    Chair,
    Router,
    Fan,
}

impl DeviceType {
    /// Parse the type name used by the asset API (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        DeviceType::all().iter().copied().find(|t| t.name() == name)
    }

    /// Type name as shown in the asset API
    pub fn name(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "Laptop",
            DeviceType::PcCase => "PC Case",
            DeviceType::Monitor => "Monitor",
            DeviceType::Keyboard => "Keyboard",
            DeviceType::Mouse => "Mouse",
            DeviceType::Ram => "RAM",
            DeviceType::Cpu => "CPU",
            DeviceType::Ssd => "SSD",
            DeviceType::Hdd => "HDD",
            DeviceType::Desk => "Desk",
            DeviceType::Chair => "Chair",
            DeviceType::Router => "Router",
            DeviceType::Fan => "Fan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "💻",
            DeviceType::PcCase | DeviceType::Monitor => "🖥️",
            DeviceType::Keyboard => "⌨️",
            DeviceType::Mouse => "🖱️",
            DeviceType::Ram => "🧠",
            DeviceType::Cpu => "⚙️",
            DeviceType::Ssd => "💾",
            DeviceType::Hdd => "💿",
            DeviceType::Desk | DeviceType::Chair => "🪑",
            DeviceType::Router => "📡",
            DeviceType::Fan => "🌀",
        }
    }

    pub fn all() -> &'static [DeviceType] {
        &[
            DeviceType::Laptop,
            DeviceType::PcCase,
            DeviceType::Monitor,
            DeviceType::Keyboard,
            DeviceType::Mouse,
            DeviceType::Ram,
            DeviceType::Cpu,
            DeviceType::Ssd,
            DeviceType::Hdd,
            DeviceType::Desk,
            DeviceType::Chair,
            DeviceType::Router,
            DeviceType::Fan,
        ]
    }
}

/// Icon for a device type name, `📦` when the type is not in the table
pub fn device_icon(type_name: &str) -> &'static str {
    DeviceType::from_name(type_name)
        .map(|t| t.icon())
        .unwrap_or(DEFAULT_DEVICE_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(device_icon("Laptop"), "💻");
        assert_eq!(device_icon("PC Case"), "🖥️");
        assert_eq!(device_icon("Monitor"), "🖥️");
        assert_eq!(device_icon("Chair"), "🪑");
        assert_eq!(device_icon("Fan"), "🌀");
    }

    #[test]
    fn test_unknown_types_use_default() {
        for name in ["", "laptop", "Printer", "ram", "PC  Case"] {
            assert_eq!(device_icon(name), "📦");
        }
    }

    #[test]
    fn test_table_size() {
        assert_eq!(DeviceType::all().len(), 13);
        for t in DeviceType::all() {
            assert_eq!(DeviceType::from_name(t.name()), Some(*t));
        }
    }
}
