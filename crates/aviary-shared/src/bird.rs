//! Domain model for bird species records.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly between the HTTP layer, the store, and the client.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Physical appearance of a species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appearance {
    /// Rough size, e.g. `"22-30 cm"`.
    pub size: String,
    /// Plumage colors, most prominent first.
    pub color: Vec<String>,
}

/// The mutable attributes of a bird record: everything except `id`.
///
/// This is the request body for both create and update, which replace the
/// whole document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BirdFields {
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
    /// Habitats the species occurs in, at least one.
    pub habitat: Vec<String>,
    pub appearance: Appearance,
    /// Photo URLs. May be empty; entries must not be blank.
    pub photos: Vec<String>,
}

/// A persisted bird record: the store-assigned `id` plus its fields.
///
/// The `id` is opaque, unique across all live records, and never reused
/// after deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bird {
    pub id: String,
    #[serde(flatten)]
    pub fields: BirdFields,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl BirdFields {
    /// Check every required-field constraint, reporting the first violation.
    ///
    /// A record either passes in full or is rejected before anything is
    /// written.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if blank(&self.common_name) {
            return Err(ValidationError::MissingOrEmpty("commonName"));
        }
        if blank(&self.scientific_name) {
            return Err(ValidationError::MissingOrEmpty("scientificName"));
        }
        if blank(&self.description) {
            return Err(ValidationError::MissingOrEmpty("description"));
        }
        if self.habitat.is_empty() {
            return Err(ValidationError::MissingOrEmpty("habitat"));
        }
        if self.habitat.iter().any(|h| blank(h)) {
            return Err(ValidationError::EmptyEntry("habitat"));
        }
        if blank(&self.appearance.size) {
            return Err(ValidationError::MissingOrEmpty("appearance.size"));
        }
        if self.appearance.color.is_empty() {
            return Err(ValidationError::MissingOrEmpty("appearance.color"));
        }
        if self.appearance.color.iter().any(|c| blank(c)) {
            return Err(ValidationError::EmptyEntry("appearance.color"));
        }
        if self.photos.iter().any(|p| blank(p)) {
            return Err(ValidationError::EmptyEntry("photos"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> BirdFields {
        BirdFields {
            common_name: "Blue Jay".to_string(),
            scientific_name: "Cyanocitta cristata".to_string(),
            description: "A noisy, intelligent corvid of eastern North America.".to_string(),
            habitat: vec!["Forests".to_string(), "Suburban gardens".to_string()],
            appearance: Appearance {
                size: "22-30 cm".to_string(),
                color: vec!["Blue".to_string(), "White".to_string()],
            },
            photos: vec!["https://example.com/blue-jay.jpg".to_string()],
        }
    }

    #[test]
    fn valid_fields_pass() {
        assert!(fields().validate().is_ok());
    }

    #[test]
    fn blank_common_name_rejected() {
        let mut f = fields();
        f.common_name = "   ".to_string();
        assert_eq!(
            f.validate(),
            Err(ValidationError::MissingOrEmpty("commonName"))
        );
    }

    #[test]
    fn empty_habitat_rejected() {
        let mut f = fields();
        f.habitat.clear();
        assert_eq!(f.validate(), Err(ValidationError::MissingOrEmpty("habitat")));
    }

    #[test]
    fn blank_habitat_entry_rejected() {
        let mut f = fields();
        f.habitat.push(String::new());
        assert_eq!(f.validate(), Err(ValidationError::EmptyEntry("habitat")));
    }

    #[test]
    fn empty_color_rejected() {
        let mut f = fields();
        f.appearance.color.clear();
        assert_eq!(
            f.validate(),
            Err(ValidationError::MissingOrEmpty("appearance.color"))
        );
    }

    #[test]
    fn empty_photos_allowed() {
        let mut f = fields();
        f.photos.clear();
        assert!(f.validate().is_ok());
    }

    #[test]
    fn blank_photo_entry_rejected() {
        let mut f = fields();
        f.photos.push(" ".to_string());
        assert_eq!(f.validate(), Err(ValidationError::EmptyEntry("photos")));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let bird = Bird {
            id: "bird-1".to_string(),
            fields: fields(),
        };
        let value = serde_json::to_value(&bird).unwrap();

        assert_eq!(value["id"], "bird-1");
        assert_eq!(value["commonName"], "Blue Jay");
        assert_eq!(value["scientificName"], "Cyanocitta cristata");
        assert_eq!(value["appearance"]["size"], "22-30 cm");
        assert!(value["habitat"].is_array());

        let back: Bird = serde_json::from_value(value).unwrap();
        assert_eq!(back, bird);
    }

    #[test]
    fn missing_field_fails_to_deserialize() {
        let json = r#"{"commonName": "Robin"}"#;
        assert!(serde_json::from_str::<BirdFields>(json).is_err());
    }
}
