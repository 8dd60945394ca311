//! First-run Content Seeding
//!
//! Writes the default copy and contact channels into a fresh store, so the
//! public site renders something sensible before the owner edits anything.

use crate::domain::config::{default_value, ALL_CONFIG_KEYS};
use crate::domain::{ButtonKind, ContactButton, DomainResult};

use super::collection::CollectionManager;
use super::config::ConfigService;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub config_keys_written: usize,
    pub contact_buttons_created: usize,
}

/// Seed defaults. Config keys are written when absent (all of them when
/// `force` is set); contact buttons only when the collection is empty, since
/// their ids are store-assigned and a forced rewrite would duplicate them.
pub async fn seed_defaults(
    config: &ConfigService,
    contact_buttons: &CollectionManager<ContactButton>,
    force: bool,
) -> DomainResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for key in ALL_CONFIG_KEYS {
        if force || config.raw(*key).await?.is_none() {
            config.set_raw(*key, default_value(*key)).await?;
            summary.config_keys_written += 1;
        }
    }

    if contact_buttons.items().await?.is_empty() {
        let defaults = default_contact_buttons();
        summary.contact_buttons_created = defaults.len();
        for button in defaults {
            contact_buttons.create(button).await?;
        }
    }

    tracing::info!(
        config_keys = summary.config_keys_written,
        contact_buttons = summary.contact_buttons_created,
        "seeded default content"
    );
    Ok(summary)
}

fn default_contact_buttons() -> Vec<ContactButton> {
    let mut whatsapp = ContactButton::new(
        ButtonKind::Whatsapp,
        "WhatsApp".to_string(),
        "https://wa.me/5544999990000".to_string(),
    );
    whatsapp.description = "(44) 99999-0000".to_string();
    whatsapp.icon = "FaWhatsapp".to_string();
    whatsapp.color = "#25D366".to_string();

    let mut instagram = ContactButton::new(
        ButtonKind::Instagram,
        "Instagram".to_string(),
        "https://instagram.com/anasoares.psi".to_string(),
    );
    instagram.description = "@anasoares.psi".to_string();
    instagram.icon = "FaInstagram".to_string();
    instagram.color = "#E4405F".to_string();

    let mut email = ContactButton::new(
        ButtonKind::Email,
        "Email".to_string(),
        "mailto:contato@anasoarespsi.com.br".to_string(),
    );
    email.description = "contato@anasoarespsi.com.br".to_string();
    email.icon = "Mail".to_string();
    email.color = "#EA4335".to_string();

    vec![whatsapp, instagram, email]
}
