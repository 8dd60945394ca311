//! Credential Entity
//!
//! Qualification cards in the about section (degree, CRP registration,
//! specializations).

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_active() -> bool {
    true
}

impl Credential {
    pub fn new(title: String, subtitle: String) -> Self {
        Self {
            id: 0,
            title,
            subtitle,
            description: String::new(),
            is_active: true,
            position: 0,
        }
    }
}

impl Entity for Credential {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for Credential {
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
