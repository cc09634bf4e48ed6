//! Catalog filtering: the category denylist and device search.

use crate::domain::entities::{Device, DeviceCategory};

/// Keywords that exclude a category from the catalog, in both languages.
pub const FORBIDDEN_KEYWORDS: [&str; 22] = [
    "المختبر",
    "laboratory",
    "الأسنان",
    "dentistry",
    "مراقبة",
    "monitoring",
    "جراحية",
    "surgical",
    "غرسات",
    "implants",
    "تصوير",
    "imaging",
    "منزلية",
    "home healthcare",
    "تعقيم",
    "sterilization",
    "دعم الحياة",
    "life support",
    "غرف العمليات",
    "operating room",
    "نقل",
    "transport",
];

/// Whether a category name contains any denylisted keyword, ignoring case.
#[must_use]
pub fn is_forbidden_category(name: &str) -> bool {
    let name = name.to_lowercase();
    FORBIDDEN_KEYWORDS
        .iter()
        .any(|keyword| name.contains(&keyword.to_lowercase()))
}

/// Drops every denylisted category, keeping the order of the rest.
#[must_use]
pub fn filter_categories(categories: Vec<DeviceCategory>) -> Vec<DeviceCategory> {
    categories
        .into_iter()
        .filter(|category| !is_forbidden_category(&category.name))
        .collect()
}

/// Category narrowing applied to the device list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Pass every device through.
    #[default]
    All,
    /// Keep devices whose category name matches exactly.
    Named(String),
}

impl CategoryFilter {
    /// Whether the device passes this filter.
    #[must_use]
    pub fn matches(&self, device: &Device) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => device.category_name == *name,
        }
    }
}

/// Whether the device name contains the trimmed query, ignoring case.
///
/// A blank query matches everything.
#[must_use]
pub fn matches_search(device: &Device, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || device.name.to_lowercase().contains(&query.to_lowercase())
}

/// Narrows by category, then by search text.
#[must_use]
pub fn filter_devices<'a>(
    devices: &'a [Device],
    filter: &CategoryFilter,
    query: &str,
) -> Vec<&'a Device> {
    devices
        .iter()
        .filter(|device| filter.matches(device))
        .filter(|device| matches_search(device, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DeviceFromApi, flatten_devices};
    use test_case::test_case;

    fn sample_devices() -> Vec<Device> {
        vec![
            Device::new("ECG Machine", "Diagnostic", "u1"),
            Device::new("Ultrasound", "Diagnostic", "u2"),
            Device::new("Infusion Pump", "Therapeutic", "u3"),
            Device::new("ecg holter", "Therapeutic", "u4"),
        ]
    }

    #[test_case("Dental Equipment and Dentistry", true ; "english_keyword")]
    #[test_case("PATIENT MONITORING", true ; "uppercase_keyword")]
    #[test_case("أجهزة الأسنان", true ; "arabic_keyword")]
    #[test_case("أجهزة دعم الحياة", true ; "arabic_phrase")]
    #[test_case("Home Healthcare Devices", true ; "multi_word")]
    #[test_case("X-ray Devices", false ; "allowed_english")]
    #[test_case("أجهزة العلاج الطبيعي", false ; "allowed_arabic")]
    fn test_forbidden_category(name: &str, forbidden: bool) {
        assert_eq!(is_forbidden_category(name), forbidden);
    }

    #[test]
    fn test_denylist_scenario_keeps_only_allowed_devices() {
        let categories = vec![
            DeviceCategory::new("X-ray Devices", "")
                .with_device(DeviceFromApi::new("C-arm", "img")),
            DeviceCategory::new("Dental Equipment (Dentistry)", "")
                .with_device(DeviceFromApi::new("Dental Chair", "img")),
        ];

        let kept = filter_categories(categories);
        let devices = flatten_devices(&kept);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "X-ray Devices");
        assert_eq!(devices, vec![Device::new("C-arm", "X-ray Devices", "img")]);
    }

    #[test]
    fn test_all_filter_with_blank_query_passes_everything() {
        let devices = sample_devices();
        assert_eq!(filter_devices(&devices, &CategoryFilter::All, "   ").len(), 4);
    }

    #[test]
    fn test_category_then_search() {
        let devices = sample_devices();
        let filter = CategoryFilter::Named("Therapeutic".to_string());

        let result = filter_devices(&devices, &filter, "  ECG ");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "ecg holter");
    }

    #[test]
    fn test_category_match_is_exact() {
        let devices = sample_devices();
        let filter = CategoryFilter::Named("diagnostic".to_string());
        assert!(filter_devices(&devices, &filter, "").is_empty());
    }

    #[test]
    fn test_filters_commute() {
        let devices = sample_devices();
        for filter in [
            CategoryFilter::All,
            CategoryFilter::Named("Diagnostic".to_string()),
            CategoryFilter::Named("Therapeutic".to_string()),
        ] {
            for query in ["", "ecg", "PUMP", "sound", "zzz"] {
                let category_first = filter_devices(&devices, &filter, query);
                let search_first: Vec<&Device> = devices
                    .iter()
                    .filter(|d| matches_search(d, query))
                    .filter(|d| filter.matches(d))
                    .collect();
                assert_eq!(category_first, search_first, "filter={filter:?} query={query}");
            }
        }
    }
}
