//! Contact Button Entity
//!
//! The clickable contact channels (WhatsApp, Instagram, email, ...) in the
//! contact section and the floating action button.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// Contact channel kind, drives which external link template applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Whatsapp,
    Instagram,
    Email,
    Phone,
    Location,
    /// Free-form link supplied by the owner
    Custom,
}

impl ButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Whatsapp => "whatsapp",
            ButtonKind::Instagram => "instagram",
            ButtonKind::Email => "email",
            ButtonKind::Phone => "phone",
            ButtonKind::Location => "location",
            ButtonKind::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "instagram" => ButtonKind::Instagram,
            "email" => ButtonKind::Email,
            "phone" => ButtonKind::Phone,
            "location" => ButtonKind::Location,
            "custom" => ButtonKind::Custom,
            _ => ButtonKind::Whatsapp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactButton {
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "type", default)]
    pub kind: ButtonKind,
    pub title: String,
    /// Rendered under the title, e.g. the handle or phone number
    #[serde(default)]
    pub description: String,
    /// Icon name resolved by the frontend, e.g. "FaWhatsapp"
    #[serde(default)]
    pub icon: String,
    /// Brand color of the channel, hex
    #[serde(default)]
    pub color: String,
    pub link: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_active() -> bool {
    true
}

impl ContactButton {
    pub fn new(kind: ButtonKind, title: String, link: String) -> Self {
        Self {
            id: 0,
            kind,
            title,
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            link,
            is_active: true,
            position: 0,
        }
    }
}

impl Entity for ContactButton {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for ContactButton {
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
