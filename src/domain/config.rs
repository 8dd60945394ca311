//! Typed Site Configuration
//!
//! The store itself is a generic key -> JSON table; this module pins down the
//! known keys and the shape behind each one. Readers validate on the way out
//! and fall back to per-key defaults, so a missing or malformed blob never
//! breaks the public site. Unknown keys are rejected at the service boundary.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::contact_button::ContactButton;
use super::entity::{DomainError, DomainResult};

/// Canonical page sections, in default display order
pub const SECTIONS: &[&str] = &[
    "hero",
    "about",
    "gallery",
    "specialties",
    "services",
    "testimonials",
    "faq",
    "contact",
];

/// One row of the key/value configuration store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: Value,
}

/// The known configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    HeroSection,
    AboutSection,
    SpecialtiesSection,
    TestimonialsSection,
    FaqSection,
    ServicesSection,
    GallerySection,
    ContactSection,
    ScheduleInfo,
    LocationInfo,
    GeneralInfo,
    Colors,
    SectionVisibility,
    SectionOrder,
    Maintenance,
}

/// All known keys, used for seeding and admin listings
pub const ALL_CONFIG_KEYS: &[ConfigKey] = &[
    ConfigKey::HeroSection,
    ConfigKey::AboutSection,
    ConfigKey::SpecialtiesSection,
    ConfigKey::TestimonialsSection,
    ConfigKey::FaqSection,
    ConfigKey::ServicesSection,
    ConfigKey::GallerySection,
    ConfigKey::ContactSection,
    ConfigKey::ScheduleInfo,
    ConfigKey::LocationInfo,
    ConfigKey::GeneralInfo,
    ConfigKey::Colors,
    ConfigKey::SectionVisibility,
    ConfigKey::SectionOrder,
    ConfigKey::Maintenance,
];

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::HeroSection => "hero_section",
            ConfigKey::AboutSection => "about_section",
            ConfigKey::SpecialtiesSection => "specialties_section",
            ConfigKey::TestimonialsSection => "testimonials_section",
            ConfigKey::FaqSection => "faq_section",
            ConfigKey::ServicesSection => "services_section",
            ConfigKey::GallerySection => "gallery_section",
            ConfigKey::ContactSection => "contact_section",
            ConfigKey::ScheduleInfo => "schedule_info",
            ConfigKey::LocationInfo => "location_info",
            ConfigKey::GeneralInfo => "general_info",
            ConfigKey::Colors => "colors",
            ConfigKey::SectionVisibility => "section_visibility",
            ConfigKey::SectionOrder => "section_order",
            ConfigKey::Maintenance => "maintenance",
        }
    }

    /// Parse a caller-supplied key, rejecting anything unknown
    pub fn parse(s: &str) -> DomainResult<Self> {
        ALL_CONFIG_KEYS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("Unknown config key: {}", s)))
    }

    /// Keys whose blob is a plain `SectionHeading`
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            ConfigKey::SpecialtiesSection
                | ConfigKey::TestimonialsSection
                | ConfigKey::FaqSection
                | ConfigKey::ServicesSection
                | ConfigKey::GallerySection
        )
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A config blob with a fixed key and a usable default
pub trait ConfigBlob: Serialize + DeserializeOwned + Default + Send + Sync {
    const KEY: ConfigKey;
}

/// Hero section copy. Parentheses in titles mark the gradient span the
/// frontend renders, e.g. "Sobre (mim)".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_link: String,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            title: "Cuidando de você com (acolhimento)".to_string(),
            subtitle: "Psicoterapia individual em um espaço seguro, sem julgamentos".to_string(),
            cta_label: "AGENDAR CONSULTA".to_string(),
            cta_link: "#contact".to_string(),
        }
    }
}

impl ConfigBlob for HeroSection {
    const KEY: ConfigKey = ConfigKey::HeroSection;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            title: "Sobre (mim)".to_string(),
            subtitle: "Psicóloga clínica".to_string(),
            body: "Atendimento humanizado, centrado em você e no seu momento de vida."
                .to_string(),
        }
    }
}

impl ConfigBlob for AboutSection {
    const KEY: ConfigKey = ConfigKey::AboutSection;
}

/// Title/subtitle pair shared by the simple list-section headers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

impl SectionHeading {
    /// Fallback copy per heading key
    pub fn default_for(key: ConfigKey) -> Self {
        let (title, subtitle) = match key {
            ConfigKey::SpecialtiesSection => (
                "Minhas (Especialidades)",
                "Áreas especializadas onde posso te ajudar a encontrar equilíbrio e bem-estar emocional",
            ),
            ConfigKey::TestimonialsSection => (
                "O que dizem (sobre mim)",
                "Histórias reais de quem já trilhou essa jornada",
            ),
            ConfigKey::FaqSection => (
                "Perguntas (Frequentes)",
                "Respostas para as dúvidas mais comuns sobre a terapia",
            ),
            ConfigKey::ServicesSection => (
                "Meus (Serviços)",
                "Atendimento personalizado para cada momento da sua vida",
            ),
            ConfigKey::GallerySection => (
                "Meu (Espaço)",
                "Um ambiente pensado para o seu conforto e acolhimento",
            ),
            _ => ("", ""),
        };
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Scheduling card copy in the contact section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub scheduling_card_title: String,
    pub scheduling_card_description: String,
    pub scheduling_card_button: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            scheduling_card_title: "Vamos conversar?".to_string(),
            scheduling_card_description:
                "Juntas, vamos caminhar em direção ao seu bem-estar e crescimento pessoal, em um espaço de acolhimento e cuidado"
                    .to_string(),
            scheduling_card_button: "AGENDAMENTO".to_string(),
        }
    }
}

impl ConfigBlob for ContactSection {
    const KEY: ConfigKey = ConfigKey::ContactSection;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInfo {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
    pub additional_info: String,
}

impl Default for ScheduleInfo {
    fn default() -> Self {
        Self {
            weekdays: "Segunda à Sexta: 8h às 18h".to_string(),
            saturday: "Sábado: 8h às 12h".to_string(),
            sunday: "Domingo: Fechado".to_string(),
            additional_info: "Horários flexíveis disponíveis".to_string(),
        }
    }
}

impl ConfigBlob for ScheduleInfo {
    const KEY: ConfigKey = ConfigKey::ScheduleInfo;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub city: String,
    pub maps_link: String,
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self {
            city: "Campo Mourão, Paraná".to_string(),
            maps_link: "https://maps.google.com/search/Campo+Mourão+Paraná".to_string(),
        }
    }
}

impl ConfigBlob for LocationInfo {
    const KEY: ConfigKey = ConfigKey::LocationInfo;
}

/// Owner identity shown in the header and footer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfo {
    pub name: String,
    /// Professional registration, e.g. "CRP 08/12345"
    pub crp: String,
    pub site_title: String,
}

impl Default for GeneralInfo {
    fn default() -> Self {
        Self {
            name: "Ana Soares".to_string(),
            crp: "CRP 08/12345".to_string(),
            site_title: "Ana Soares - Psicóloga".to_string(),
        }
    }
}

impl ConfigBlob for GeneralInfo {
    const KEY: ConfigKey = ConfigKey::GeneralInfo;
}

/// Site color palette, hex values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: "#ec4899".to_string(),
            secondary: "#a855f7".to_string(),
            accent: "#6366f1".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl ConfigBlob for ColorTheme {
    const KEY: ConfigKey = ConfigKey::Colors;
}

/// Map of section name -> shown/hidden
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionVisibility {
    pub sections: BTreeMap<String, bool>,
}

impl SectionVisibility {
    /// Sections without an entry are visible
    pub fn is_visible(&self, section: &str) -> bool {
        self.sections.get(section).copied().unwrap_or(true)
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        let sections = SECTIONS
            .iter()
            .map(|s| ((*s).to_string(), true))
            .collect();
        Self { sections }
    }
}

impl ConfigBlob for SectionVisibility {
    const KEY: ConfigKey = ConfigKey::SectionVisibility;
}

/// Map of section name -> display index (page-section granularity)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder {
    pub sections: BTreeMap<String, i32>,
}

impl SectionOrder {
    /// Section names sorted for display. Ties break on name; canonical
    /// sections missing from the map are appended in canonical order.
    pub fn ordered(&self) -> Vec<String> {
        let mut entries: Vec<(&String, i32)> =
            self.sections.iter().map(|(name, pos)| (name, *pos)).collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let mut names: Vec<String> = entries.into_iter().map(|(name, _)| name.clone()).collect();
        for section in SECTIONS {
            if !self.sections.contains_key(*section) {
                names.push((*section).to_string());
            }
        }
        names
    }

    /// Rebuild the map so indices match the given sequence
    pub fn renumber_to(&mut self, names: &[String]) {
        self.sections = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index as i32))
            .collect();
    }
}

impl Default for SectionOrder {
    fn default() -> Self {
        let sections = SECTIONS
            .iter()
            .enumerate()
            .map(|(index, s)| ((*s).to_string(), index as i32))
            .collect();
        Self { sections }
    }
}

impl ConfigBlob for SectionOrder {
    const KEY: ConfigKey = ConfigKey::SectionOrder;
}

/// Maintenance-mode flag for the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub enabled: bool,
    pub message: String,
}

impl Default for Maintenance {
    fn default() -> Self {
        Self {
            enabled: false,
            message: "Site em manutenção. Volte em breve!".to_string(),
        }
    }
}

impl ConfigBlob for Maintenance {
    const KEY: ConfigKey = ConfigKey::Maintenance;
}

/// Aggregate payload of the public contact endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSettings {
    pub contact_items: Vec<ContactButton>,
    pub schedule_info: ScheduleInfo,
    pub location_info: LocationInfo,
}

/// Default JSON blob for a key, used when seeding a fresh store
pub fn default_value(key: ConfigKey) -> Value {
    fn blob<T: Serialize>(value: T) -> Value {
        serde_json::to_value(value).unwrap_or(Value::Null)
    }

    if key.is_heading() {
        return blob(SectionHeading::default_for(key));
    }
    match key {
        ConfigKey::HeroSection => blob(HeroSection::default()),
        ConfigKey::AboutSection => blob(AboutSection::default()),
        ConfigKey::ContactSection => blob(ContactSection::default()),
        ConfigKey::ScheduleInfo => blob(ScheduleInfo::default()),
        ConfigKey::LocationInfo => blob(LocationInfo::default()),
        ConfigKey::GeneralInfo => blob(GeneralInfo::default()),
        ConfigKey::Colors => blob(ColorTheme::default()),
        ConfigKey::SectionVisibility => blob(SectionVisibility::default()),
        ConfigKey::SectionOrder => blob(SectionOrder::default()),
        ConfigKey::Maintenance => blob(Maintenance::default()),
        // Heading keys handled above
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for key in ALL_CONFIG_KEYS {
            assert_eq!(ConfigKey::parse(key.as_str()).unwrap(), *key);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConfigKey::parse("totally_made_up").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(ColorTheme::default().primary, "#ec4899");
    }

    #[test]
    fn test_visibility_defaults_to_visible() {
        let vis = SectionVisibility::default();
        assert!(vis.is_visible("faq"));
        // Even for a section nobody wrote yet
        let empty = SectionVisibility {
            sections: BTreeMap::new(),
        };
        assert!(empty.is_visible("hero"));
    }

    #[test]
    fn test_section_order_default_matches_canonical() {
        assert_eq!(
            SectionOrder::default().ordered(),
            SECTIONS.iter().map(|s| (*s).to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_ordered_appends_missing_sections() {
        let mut order = SectionOrder::default();
        order.sections.remove("contact");
        let names = order.ordered();
        assert_eq!(names.last().map(String::as_str), Some("contact"));
    }

    #[test]
    fn test_default_value_never_null_for_known_keys() {
        for key in ALL_CONFIG_KEYS {
            assert!(!default_value(*key).is_null(), "no default for {}", key);
        }
    }
}
