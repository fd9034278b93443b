//! Site content and tunables, embedded at build time from `assets/site.json`

use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::errors::Result;
use crate::shared::logging::log_config_fallback;

const SITE_JSON: &str = include_str!("../assets/site.json");

static SITE: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_json(SITE_JSON).unwrap_or_else(|e| {
        log_config_fallback(&e.to_string());
        SiteConfig::default()
    })
});

/// Parsed site configuration, loaded once
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub logo_path: String,
    pub audio_path: String,
    pub nav_items: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub privacy_anchor: String,
    pub nav_animation_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Nexus".to_string(),
            logo_path: "/img/logo.png".to_string(),
            audio_path: "/audio/loop.mp3".to_string(),
            nav_items: ["Nexus", "Vault", "Prologue", "About", "Contact"]
                .into_iter()
                .map(String::from)
                .collect(),
            social_links: vec![
                SocialLink {
                    name: "Discord".to_string(),
                    href: "https://discord.com".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    href: "https://github.com".to_string(),
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    href: "https://www.linkedin.com".to_string(),
                },
            ],
            privacy_anchor: "privacy-policy".to_string(),
            nav_animation_ms: 200,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn nav_animation(&self) -> Duration {
        Duration::from_millis(self.nav_animation_ms)
    }

    pub fn privacy_href(&self) -> String {
        format!("#{}", self.privacy_anchor)
    }
}

/// Section id for a navigation label ("About" -> "about")
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}

/// In-page anchor for a navigation label ("About" -> "#about")
pub fn nav_anchor(label: &str) -> String {
    format!("#{}", section_id(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(site().nav_items.len(), 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "Other" }"#).unwrap();
        assert_eq!(config.brand, "Other");
        assert_eq!(config.nav_animation(), Duration::from_millis(200));
        assert_eq!(config.social_links.len(), 3);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_nav_anchor_lowercases_label() {
        assert_eq!(nav_anchor("About"), "#about");
        assert_eq!(nav_anchor("Prologue"), "#prologue");
        assert_eq!(section_id("Nexus"), "nexus");
    }

    #[test]
    fn test_privacy_href() {
        assert_eq!(SiteConfig::default().privacy_href(), "#privacy-policy");
    }
}
