//! Testimonial Entity
//!
//! A patient/relative quote shown in the testimonials carousel.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// A testimonial card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Unique identifier (assigned by the store)
    #[serde(default)]
    pub id: u32,
    /// Display name of the author
    pub name: String,
    /// Relation or service, e.g. "Paciente" or "Terapia de casal"
    pub role: String,
    /// The quote itself
    pub quote: String,
    /// Optional uploaded avatar path; the site falls back to initials
    #[serde(default)]
    pub avatar: Option<String>,
    /// Star rating, 1..=5
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Display sequence within the collection
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_rating() -> u8 {
    5
}

fn default_active() -> bool {
    true
}

impl Testimonial {
    pub fn new(name: String, role: String, quote: String) -> Self {
        Self {
            id: 0,
            name,
            role,
            quote,
            avatar: None,
            rating: 5,
            is_active: true,
            position: 0,
        }
    }

    /// Initial used for the fallback avatar bubble
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

impl Entity for Testimonial {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for Testimonial {
    fn position(&self) -> i32 {
        self.position
    }
    fn set_position(&mut self, position: i32) {
        self.position = position;
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_defaults() {
        let t = Testimonial::new("Maria".to_string(), "Paciente".to_string(), "Me ajudou muito".to_string());
        assert!(t.is_active);
        assert_eq!(t.rating, 5);
        assert_eq!(t.initial(), "M");
    }

    #[test]
    fn test_wire_names() {
        let t = Testimonial::new("Maria".to_string(), "Paciente".to_string(), "Ok".to_string());
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("isActive").is_some());
        assert!(json.get("order").is_some());
    }
}
