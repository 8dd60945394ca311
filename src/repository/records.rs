//! Collection Bindings
//!
//! Maps each ordered domain entity to its backing table.

use crate::domain::{
    CarouselPhoto, ContactButton, Credential, FaqEntry, Specialty, Testimonial, TherapyService,
};

use super::traits::CollectionRecord;

impl CollectionRecord for Testimonial {
    const TABLE: &'static str = "testimonials";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl CollectionRecord for FaqEntry {
    const TABLE: &'static str = "faq_entries";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl CollectionRecord for TherapyService {
    const TABLE: &'static str = "therapy_services";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl CollectionRecord for Specialty {
    const TABLE: &'static str = "specialties";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl CollectionRecord for CarouselPhoto {
    const TABLE: &'static str = "carousel_photos";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl CollectionRecord for Credential {
    const TABLE: &'static str = "credentials";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl CollectionRecord for ContactButton {
    const TABLE: &'static str = "contact_buttons";

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
