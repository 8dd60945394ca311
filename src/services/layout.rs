//! Page Layout Controller
//!
//! Visibility toggles, whole-page section ordering and the color theme.
//! This is the config store applied at page-section granularity: the same
//! move-and-renumber used for list rows, persisted as one config write.

use std::sync::Arc;

use crate::domain::config::{ColorTheme, SectionOrder, SectionVisibility, SECTIONS};
use crate::domain::{ordering, DomainError, DomainResult};

use super::config::ConfigService;

pub struct SectionLayout {
    config: Arc<ConfigService>,
}

impl SectionLayout {
    pub fn new(config: Arc<ConfigService>) -> Self {
        Self { config }
    }

    fn ensure_known(section: &str) -> DomainResult<()> {
        if SECTIONS.contains(&section) {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(format!(
                "Unknown section: {}",
                section
            )))
        }
    }

    pub async fn visibility(&self) -> DomainResult<SectionVisibility> {
        self.config.read().await
    }

    pub async fn is_visible(&self, section: &str) -> DomainResult<bool> {
        Self::ensure_known(section)?;
        Ok(self.visibility().await?.is_visible(section))
    }

    pub async fn set_visible(&self, section: &str, visible: bool) -> DomainResult<()> {
        Self::ensure_known(section)?;
        let mut visibility = self.config.read::<SectionVisibility>().await?;
        visibility.sections.insert(section.to_string(), visible);
        self.config.write(&visibility).await
    }

    /// Section names in display order
    pub async fn ordered_sections(&self) -> DomainResult<Vec<String>> {
        Ok(self.config.read::<SectionOrder>().await?.ordered())
    }

    /// Move a whole page section to `target_index` and persist the new
    /// numbering in one write
    pub async fn move_section(&self, section: &str, target_index: usize) -> DomainResult<Vec<String>> {
        Self::ensure_known(section)?;

        let mut order = self.config.read::<SectionOrder>().await?;
        let mut names = order.ordered();
        let from = names
            .iter()
            .position(|name| name == section)
            .ok_or_else(|| DomainError::NotFound(format!("Section {} not ordered", section)))?;

        ordering::move_entry(&mut names, from, target_index);
        order.renumber_to(&names);
        self.config.write(&order).await?;
        Ok(names)
    }

    pub async fn theme(&self) -> DomainResult<ColorTheme> {
        self.config.read().await
    }

    pub async fn set_theme(&self, theme: &ColorTheme) -> DomainResult<()> {
        self.config.write(theme).await
    }
}
