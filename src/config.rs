use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::i18n::dates::is_valid_pattern;
use crate::i18n::labels::LabelOverrides;
use crate::sanitize::{ModeKind, SanitizeMode};

/// Root configuration structure, deserialized from `.isogeo-formatter/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Language code used for labels and date patterns.
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    /// Locale entries merged over the built-in table, keyed by language code.
    #[serde(default)]
    pub locales: HashMap<String, LocaleConfig>,
    /// Label overrides, `[labels.<domain>] <key> = "<label>"`.
    #[serde(default)]
    pub labels: LabelOverrides,
}

fn default_lang() -> String {
    "fr".to_string()
}

/// How free text is sanitized before it goes into an XML document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SanitizerConfig {
    #[serde(default)]
    pub mode: ModeKind,
    /// Single character replacing each tag in strict mode. Absent means the
    /// tags are removed.
    #[serde(default)]
    pub substitute: Option<String>,
}

impl SanitizerConfig {
    /// Convert to the corresponding [`SanitizeMode`].
    pub fn to_mode(&self) -> Result<SanitizeMode> {
        let substitute = match self.substitute.as_deref() {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => bail!("sanitizer substitute must be a single character, got {:?}", s),
                }
            }
        };
        Ok(match self.mode {
            ModeKind::Soft => SanitizeMode::Soft,
            ModeKind::Strict => SanitizeMode::Strict { substitute },
        })
    }
}

/// Date patterns and locale identifier for one language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocaleConfig {
    /// Pattern for plain dates, e.g. specification publication dates.
    pub dates: String,
    /// Pattern for full timestamps.
    pub datetimes: String,
    /// Platform locale identifier (`fr_FR`, `uk_UK`).
    pub locale: String,
}

/// Built-in locale table. Unknown codes resolve to `en`.
fn builtin_locale(code: &str) -> LocaleConfig {
    match code {
        "fr" => LocaleConfig {
            dates: "%d/%m/%Y".to_string(),
            datetimes: "%A %d %B %Y (%Hh%M)".to_string(),
            locale: "fr_FR".to_string(),
        },
        _ => LocaleConfig {
            dates: "%d/%m/%Y".to_string(),
            datetimes: "%a %d %B %Y (%Hh%M)".to_string(),
            locale: "uk_UK".to_string(),
        },
    }
}

impl Default for Config {
    /// Built-in configuration used when no config file is found: French
    /// labels, soft sanitizing, no overrides.
    fn default() -> Self {
        Config {
            lang: default_lang(),
            sanitizer: SanitizerConfig::default(),
            locales: HashMap::new(),
            labels: LabelOverrides::new(),
        }
    }
}

impl Config {
    /// Resolve the locale entry for `lang`: configured entries first, then the
    /// built-in table. Language codes compare case-insensitively.
    pub fn locale(&self, lang: &str) -> LocaleConfig {
        let code = lang.to_lowercase();
        self.locales
            .iter()
            .find(|(key, _)| key.to_lowercase() == code)
            .map(|(_, locale)| locale.clone())
            .unwrap_or_else(|| builtin_locale(&code))
    }

    /// Reject settings that would only fail later, at format time.
    pub fn validate(&self) -> Result<()> {
        self.sanitizer.to_mode()?;
        let mut seen = HashSet::new();
        for (code, locale) in &self.locales {
            if !seen.insert(code.to_lowercase()) {
                bail!("locale '{}' is configured more than once", code.to_lowercase());
            }
            for pattern in [&locale.dates, &locale.datetimes] {
                if !is_valid_pattern(pattern) {
                    bail!("locale '{}': invalid date pattern {:?}", code, pattern);
                }
            }
        }
        Ok(())
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.isogeo-formatter/config.toml`
/// 3. `~/.config/isogeo-formatter/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".isogeo-formatter").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("isogeo-formatter")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), lang = %config.lang, "configuration loaded");
    Ok(config)
}
