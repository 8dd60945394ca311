//! Carousel Photo Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ordered};

/// One slide of the photo carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselPhoto {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    /// Caption rendered over the image when `show_caption` is set
    #[serde(default)]
    pub caption: String,
    /// Path of the uploaded image (upload handling lives elsewhere)
    pub image_url: String,
    #[serde(default = "default_show_caption")]
    pub show_caption: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn default_show_caption() -> bool {
    true
}

fn default_active() -> bool {
    true
}

impl CarouselPhoto {
    pub fn new(title: String, image_url: String) -> Self {
        Self {
            id: 0,
            title,
            caption: String::new(),
            image_url,
            show_caption: true,
            is_active: true,
            position: 0,
        }
    }
}

impl Entity for CarouselPhoto {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Ordered for CarouselPhoto {
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
