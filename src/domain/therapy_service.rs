//! Therapy Service Entity
//!
//! One card in the services grid (modality, duration, price).

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// A service offered by the practice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyService {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Icon name resolved by the frontend, e.g. "Brain" or "Heart"
    #[serde(default)]
    pub icon: String,
    /// Session length, free text ("50 minutos")
    #[serde(default)]
    pub duration: Option<String>,
    /// Price, free text ("R$ 150,00")
    #[serde(default)]
    pub price: Option<String>,
    /// Whether the price is rendered on the public card
    #[serde(default = "default_show_price")]
    pub show_price: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_show_price() -> bool {
    true
}

fn default_active() -> bool {
    true
}

impl TherapyService {
    pub fn new(title: String, description: String, icon: String) -> Self {
        Self {
            id: 0,
            title,
            description,
            icon,
            duration: None,
            price: None,
            show_price: true,
            is_active: true,
            position: 0,
        }
    }
}

impl Entity for TherapyService {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for TherapyService {
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
