//! Widget settings
//!
//! Persisted in LocalStorage; the variant can be overridden from the URL
//! query (`?variant=classic`).

use serde::{Deserialize, Serialize};

/// Behavior preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Confirmation is final; no counter
    Classic,
    /// Dodge counter, toasts, and a retry button after confirming
    #[default]
    Playful,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Playful => "Playful",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "v1" | "1" => Some(Variant::Classic),
            "playful" | "v2" | "2" => Some(Variant::Playful),
            _ => None,
        }
    }

    /// Whether dodges are counted and toasted
    pub fn dodge_counter(&self) -> bool {
        matches!(self, Variant::Playful)
    }

    /// Whether the confirmed state offers a retry
    pub fn resettable(&self) -> bool {
        matches!(self, Variant::Playful)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub variant: Variant,

    // === Behavior ===
    /// Count dodges and show toasts
    pub dodge_counter: bool,
    /// Offer a retry after confirming
    pub resettable: bool,

    // === Visual Effects ===
    /// Scale/rotate flourish while dodging
    pub flourish: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses the flourish)
    #[serde(default)]
    pub reduced_motion: bool,

    /// Fixed RNG seed (time-based when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl Settings {
    /// Create settings from a variant (applies its defaults)
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            dodge_counter: variant.dodge_counter(),
            resettable: variant.resettable(),
            flourish: true,
            reduced_motion: false,
            seed: None,
        }
    }

    /// Switch variant (updates variant-dependent toggles)
    pub fn apply_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.dodge_counter = variant.dodge_counter();
        self.resettable = variant.resettable();
    }

    /// Effective flourish (respects reduced_motion)
    pub fn effective_flourish(&self) -> bool {
        self.flourish && !self.reduced_motion
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "evasive_confirm_settings";

    /// Load settings from LocalStorage, then apply the URL override (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let storage = window
            .as_ref()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let stored = storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let query = window.and_then(|w| w.location().search().ok());
        Self::resolve(stored.as_deref(), query.as_deref())
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    /// Effective settings from the stored JSON and the page query.
    /// The query override only applies to this session; nothing is written back.
    pub fn resolve(stored: Option<&str>, query: Option<&str>) -> Self {
        let mut settings = stored
            .and_then(|json| serde_json::from_str::<Settings>(json).ok())
            .unwrap_or_else(|| {
                log::info!("Using default settings");
                Self::default()
            });

        if let Some(variant) = query.and_then(Self::variant_from_query) {
            log::info!("Variant override from URL: {}", variant.as_str());
            settings.apply_variant(variant);
        }

        settings
    }

    /// Parse `variant=...` out of a `?a=b&c=d` query string
    pub fn variant_from_query(query: &str) -> Option<Variant> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "variant")
            .and_then(|(_, value)| Variant::from_str(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        let classic = Settings::from_variant(Variant::Classic);
        assert!(!classic.dodge_counter);
        assert!(!classic.resettable);

        let playful = Settings::default();
        assert_eq!(playful.variant, Variant::Playful);
        assert!(playful.dodge_counter);
        assert!(playful.resettable);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("CLASSIC"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("v2"), Some(Variant::Playful));
        assert_eq!(Variant::from_str("nope"), None);
    }

    #[test]
    fn test_variant_from_query() {
        assert_eq!(Settings::variant_from_query("?variant=classic"), Some(Variant::Classic));
        assert_eq!(Settings::variant_from_query("?x=1&variant=playful"), Some(Variant::Playful));
        assert_eq!(Settings::variant_from_query("?x=1"), None);
        assert_eq!(Settings::variant_from_query(""), None);
    }

    #[test]
    fn test_query_override_does_not_stick() {
        let stored = serde_json::to_string(&Settings::from_variant(Variant::Playful)).unwrap();

        let overridden = Settings::resolve(Some(&stored), Some("?variant=classic"));
        assert_eq!(overridden.variant, Variant::Classic);
        assert!(!overridden.resettable);

        // Next visit without the query still gets the stored variant
        let next = Settings::resolve(Some(&stored), None);
        assert_eq!(next.variant, Variant::Playful);
        assert!(next.resettable);
    }

    #[test]
    fn test_resolve_bad_json_falls_back_to_default() {
        let settings = Settings::resolve(Some("{not json"), Some("?x=1"));
        assert_eq!(settings.variant, Variant::default());
    }

    #[test]
    fn test_effective_flourish() {
        let mut settings = Settings::default();
        assert!(settings.effective_flourish());
        settings.reduced_motion = true;
        assert!(!settings.effective_flourish());
    }

    #[test]
    fn test_settings_json_round_trip_tolerates_missing_fields() {
        let json = r#"{"variant":"Classic","dodge_counter":false,"resettable":false,"flourish":true}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.variant, Variant::Classic);
        assert!(!settings.reduced_motion);
        assert_eq!(settings.seed, None);
    }
}
