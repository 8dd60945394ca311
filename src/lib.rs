//! Practice-Site CMS Core
//!
//! Layered architecture:
//! - domain: entities, typed config blobs and ordering rules
//! - repository: data access abstractions and the SQLite implementation
//! - services: cached config access, optimistic collection views, page layout
//!
//! HTTP routing, authentication and file uploads are collaborator concerns
//! and live outside this crate.

pub mod domain;
pub mod repository;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use domain::config::ContactSettings;
use domain::{
    CarouselPhoto, ContactButton, Credential, DomainResult, FaqEntry, Specialty, Testimonial,
    TherapyService,
};
use repository::{init_db, DbState};
use services::{CollectionManager, ConfigService, SectionLayout, SeedSummary};

/// Application state shared across the admin panel's operations
pub struct SiteCms {
    pub db: DbState,
    pub config: Arc<ConfigService>,
    pub layout: SectionLayout,
    pub testimonials: CollectionManager<Testimonial>,
    pub faq: CollectionManager<FaqEntry>,
    pub services: CollectionManager<TherapyService>,
    pub specialties: CollectionManager<Specialty>,
    pub gallery: CollectionManager<CarouselPhoto>,
    pub credentials: CollectionManager<Credential>,
    pub contact_buttons: CollectionManager<ContactButton>,
}

impl SiteCms {
    /// Open (or create) the database at `db_path` and wire up every manager
    pub async fn open(db_path: &Path) -> DomainResult<Self> {
        let db = init_db(db_path).await?;
        Ok(Self::from_state(db))
    }

    /// Wire managers over an already-initialized database state
    pub fn from_state(db: DbState) -> Self {
        let config = Arc::new(ConfigService::new(db.conn.clone()));
        Self {
            layout: SectionLayout::new(config.clone()),
            testimonials: CollectionManager::new(db.conn.clone()),
            faq: CollectionManager::new(db.conn.clone()),
            services: CollectionManager::new(db.conn.clone()),
            specialties: CollectionManager::new(db.conn.clone()),
            gallery: CollectionManager::new(db.conn.clone()),
            credentials: CollectionManager::new(db.conn.clone()),
            contact_buttons: CollectionManager::new(db.conn.clone()),
            config,
            db,
        }
    }

    /// Seed default content; a no-op on an already-populated store unless
    /// `force` is set
    pub async fn seed_defaults(&self, force: bool) -> DomainResult<SeedSummary> {
        services::seed_defaults(&self.config, &self.contact_buttons, force).await
    }

    /// Everything the public contact section renders, in one payload
    pub async fn contact_settings(&self) -> DomainResult<ContactSettings> {
        Ok(ContactSettings {
            contact_items: self.contact_buttons.active_items().await?,
            schedule_info: self.config.read().await?,
            location_info: self.config.read().await?,
        })
    }
}
