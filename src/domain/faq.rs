//! FAQ Entry Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// One question/answer pair in the FAQ accordion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    #[serde(default)]
    pub id: u32,
    pub question: String,
    pub answer: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_active() -> bool {
    true
}

impl FaqEntry {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: 0,
            question,
            answer,
            is_active: true,
            position: 0,
        }
    }
}

impl Entity for FaqEntry {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for FaqEntry {
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
