//! Services Layer
//!
//! The operations the admin panel (and the public read endpoints) call:
//! cached config access, optimistic collection views, page layout control
//! and first-run seeding.

mod collection;
mod config;
mod layout;
mod seed;


pub use collection::CollectionManager;
pub use config::ConfigService;
pub use layout::SectionLayout;
pub use seed::{seed_defaults, SeedSummary};
