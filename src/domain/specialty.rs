//! Specialty Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// A specialty area shown in the "Minhas Especialidades" grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Icon name resolved by the frontend
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_active() -> bool {
    true
}

impl Specialty {
    pub fn new(title: String, description: String, icon: String) -> Self {
        Self {
            id: 0,
            title,
            description,
            icon,
            is_active: true,
            position: 0,
        }
    }
}

impl Entity for Specialty {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for Specialty {
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
