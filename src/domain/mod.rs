//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod contact_button;
mod credential;
mod entity;
mod faq;
mod photo;
mod specialty;
mod testimonial;
mod therapy_service;

pub mod config;
pub mod ordering;

pub use contact_button::{ButtonKind, ContactButton};
pub use credential::Credential;
pub use entity::{DomainError, DomainResult, Entity, Ordered};
pub use faq::FaqEntry;
pub use photo::CarouselPhoto;
pub use specialty::Specialty;
pub use testimonial::Testimonial;
pub use therapy_service::TherapyService;
