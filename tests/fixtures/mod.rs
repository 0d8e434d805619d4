//! Canned provider outputs and image bytes
#![allow(dead_code)]

/// A complete, schema-valid model reply.
pub const VALID_ANALYSIS: &str = r#"{
  "flower_name": "Common sunflower (Helianthus annuus)",
  "watering_schedule": "Deep watering once or twice a week, about 2-3 liters per plant; more in heat waves",
  "care_recommendations": [
    "Full sun, at least 6 hours a day",
    "Stake tall stems before flowering"
  ],
  "health_assessment": "Healthy bloom with no visible leaf spotting",
  "confidence": 0.93,
  "issues": [],
  "tips": ["Leave seed heads for birds in autumn"],
  "sources": [
    "https://extension.umn.edu/flowers/growing-sunflowers",
    "https://www.rhs.org.uk/plants/helianthus/growing-guide"
  ]
}"#;

/// Valid except that `flower_name` is omitted.
pub const MISSING_FLOWER_NAME: &str = r#"{
  "watering_schedule": "Weekly",
  "care_recommendations": [],
  "health_assessment": "Looks fine",
  "issues": [],
  "tips": [],
  "sources": []
}"#;

/// Valid except for an out-of-range confidence.
pub const CONFIDENCE_TOO_HIGH: &str = r#"{
  "flower_name": "Tulip (Tulipa)",
  "watering_schedule": "Keep soil lightly moist",
  "health_assessment": "Petals slightly wilted",
  "confidence": 1.5
}"#;

/// Start of a JFIF file, treated as opaque bytes.
pub const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// PNG signature.
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
