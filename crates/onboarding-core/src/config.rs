//! # Configuration
//!
//! Everything a flow needs is supplied once, up front, as an
//! [`OnboardingConfig`]. The flow keeps it behind an `Rc` and never mutates it.
//!
//! ```rust
//! use onboarding_core::*;
//!
//! let config = OnboardingConfig {
//!     max_interest_selection: 3,
//!     loading_steps: vec!["Analyzing".into(), "Tuning".into()],
//!     ..OnboardingConfig::default()
//! };
//! assert_eq!(config.professions.len(), 9);
//! ```
//!
//! Hosts that ship configuration as data can load it from JSON. Missing
//! fields keep their defaults and colors are hex strings:
//!
//! ```rust
//! use onboarding_core::*;
//!
//! let config = OnboardingConfig::from_json_str(
//!     r##"{ "max_interest_selection": 2, "theme": { "primary": "#FF5733" } }"##,
//! )
//! .unwrap();
//! assert_eq!(config.max_interest_selection, 2);
//! assert_eq!(config.theme.primary, Color(0xFF, 0x57, 0x33, 0xFF));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::{Catalog, ConfigError, Theme};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub theme: Theme,
    pub professions: Catalog,
    pub interests: Catalog,
    pub max_interest_selection: usize,
    /// Labels ticked off one by one on the loading screen.
    pub loading_steps: Vec<String>,
    /// Captions rotated under the progress bar while steps run.
    pub loading_texts: Vec<String>,
    pub haptics_enabled: bool,
    pub copy: FlowCopy,
    pub timings: LoadingTimings,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            professions: Catalog::professions(),
            interests: Catalog::interests(),
            max_interest_selection: 5,
            loading_steps: vec![
                "Analyzing your preferences".into(),
                "Matching your interests".into(),
                "Curating content".into(),
                "Finalizing your profile".into(),
            ],
            loading_texts: vec![
                "Personalizing your experience...".into(),
                "Almost there...".into(),
                "Setting things up just for you...".into(),
            ],
            haptics_enabled: true,
            copy: FlowCopy::default(),
            timings: LoadingTimings::default(),
        }
    }
}

impl OnboardingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate();
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading onboarding config from {}", path.display());
        Self::from_json_str(&raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Logs configurations that are legal but make for a degenerate flow.
    /// Returns the number of warnings emitted.
    pub fn validate(&self) -> usize {
        let mut warnings = 0;
        let catalogs = [("professions", &self.professions), ("interests", &self.interests)];
        for (name, catalog) in catalogs {
            if catalog.is_empty() {
                log::warn!("{name} catalog is empty; its page can never be completed");
                warnings += 1;
            }
            for dup in catalog.duplicate_titles() {
                log::warn!("{name} catalog has duplicate title '{dup}'");
                warnings += 1;
            }
        }
        if self.max_interest_selection == 0 {
            log::warn!("max_interest_selection is 0; the interests page can never be completed");
            warnings += 1;
        }
        warnings
    }
}

/// User-facing strings. Not localized here; hosts pass translated copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowCopy {
    pub welcome_title: String,
    pub welcome_subtitle: String,
    pub profession_title: String,
    pub interests_title: String,
    pub continue_label: String,
    pub finish_label: String,
    pub skip_label: String,
    pub back_label: String,
    pub all_set_title: String,
}

impl Default for FlowCopy {
    fn default() -> Self {
        Self {
            welcome_title: "Welcome".into(),
            welcome_subtitle: "Let's personalize your experience in a few quick steps.".into(),
            profession_title: "What do you do?".into(),
            interests_title: "What are you into?".into(),
            continue_label: "Continue".into(),
            finish_label: "Get Started".into(),
            skip_label: "Skip".into(),
            back_label: "Back".into(),
            all_set_title: "You're all set!".into(),
        }
    }
}

/// Delays of the loading sequence, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingTimings {
    pub step_ms: u64,
    pub settle_ms: u64,
    pub all_set_ms: u64,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            step_ms: 800,
            settle_ms: 500,
            all_set_ms: 1500,
        }
    }
}

impl LoadingTimings {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn all_set_delay(&self) -> Duration {
        Duration::from_millis(self.all_set_ms)
    }

    /// Wall time from entering the loading screen to completion.
    pub fn total(&self, steps: usize) -> Duration {
        self.step_delay() * steps as u32 + self.settle_delay() + self.all_set_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_overrides_keep_defaults() {
        let c = OnboardingConfig::from_json_str(
            r#"{ "loading_steps": [], "timings": { "step_ms": 10 } }"#,
        )
        .unwrap();
        assert!(c.loading_steps.is_empty());
        assert_eq!(c.timings.step_ms, 10);
        assert_eq!(c.timings.settle_ms, 500);
        assert_eq!(c.interests.len(), 12);
        assert!(c.haptics_enabled);
    }

    #[test]
    fn catalogs_load_from_json() {
        let c = OnboardingConfig::from_json_str(
            r#"{ "professions": [ { "glyph": "🧪", "title": "Chemist" } ] }"#,
        )
        .unwrap();
        assert_eq!(c.professions.len(), 1);
        assert!(c.professions.contains("Chemist"));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = OnboardingConfig::from_json_str(r##"{ "theme": { "text": "#12" } }"##)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("#12"));
    }

    #[test]
    fn round_trips_through_json() {
        let c = OnboardingConfig::default();
        let json = c.to_json().unwrap();
        assert_eq!(OnboardingConfig::from_json_str(&json).unwrap(), c);
    }

    #[test]
    fn file_loading_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onboarding.json");
        let err = OnboardingConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        std::fs::write(&path, r#"{ "max_interest_selection": 1 }"#).unwrap();
        let c = OnboardingConfig::from_json_file(&path).unwrap();
        assert_eq!(c.max_interest_selection, 1);
    }

    #[test]
    fn validate_counts_degenerate_settings() {
        assert_eq!(OnboardingConfig::default().validate(), 0);
        let c = OnboardingConfig {
            max_interest_selection: 0,
            professions: Catalog::default(),
            ..OnboardingConfig::default()
        };
        assert_eq!(c.validate(), 2);
    }

    #[test]
    fn total_duration() {
        let t = LoadingTimings::default();
        assert_eq!(t.total(2), Duration::from_millis(800 * 2 + 500 + 1500));
        assert_eq!(t.total(0), Duration::from_millis(2000));
    }
}
