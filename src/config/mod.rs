mod env;
mod key;

use anyhow::{Result, anyhow};

use crate::cli::Cli;

pub use env::get_env;
pub use key::{CREDENTIAL_VARS, KeyLookup, resolve_key_with};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_AGENCY_NAME: &str = "Aideal Agency";
pub const DEFAULT_AGENCY_SPECIALTY: &str = "AI Marketing and Software Consulting";

/// Parameters sent with every `generateContent` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub search_grounding: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            search_grounding: true,
        }
    }
}

impl GenerationSettings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let model = cli.model.trim();
        if model.is_empty() {
            return Err(anyhow!("model argument is empty"));
        }
        if cli.max_output_tokens == 0 {
            return Err(anyhow!("--max-output-tokens must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&cli.temperature) {
            return Err(anyhow!(
                "--temperature must be between 0.0 and 2.0 (got {})",
                cli.temperature
            ));
        }

        Ok(Self {
            model: model.to_string(),
            base_url: env::base_url_from_env().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_output_tokens: cli.max_output_tokens,
            temperature: cli.temperature,
            search_grounding: !cli.no_search,
        })
    }

    pub fn model_path(&self) -> String {
        if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        }
    }
}

/// Agency context woven into the prompt preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyProfile {
    pub name: String,
    pub specialty: String,
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENCY_NAME.to_string(),
            specialty: DEFAULT_AGENCY_SPECIALTY.to_string(),
        }
    }
}

impl AgencyProfile {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            name: non_blank(&cli.agency_name).unwrap_or(defaults.name),
            specialty: non_blank(&cli.agency_specialty).unwrap_or(defaults.specialty),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_fixed_generation_parameters() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model, "gemini-3-flash-preview");
        assert_eq!(settings.max_output_tokens, 500);
        assert_eq!(settings.temperature, 0.7);
        assert!(settings.search_grounding);
    }

    #[test]
    fn cli_overrides_generation_parameters() {
        let cli = Cli::parse_from([
            "proposal-genius",
            "--model",
            "gemini-2.5-flash",
            "--max-output-tokens",
            "800",
            "--temperature",
            "0.2",
            "--no-search",
        ]);
        let settings = GenerationSettings::from_cli(&cli).unwrap();
        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.max_output_tokens, 800);
        assert_eq!(settings.temperature, 0.2);
        assert!(!settings.search_grounding);
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let cli = Cli::parse_from(["proposal-genius", "--temperature", "3.5"]);
        assert!(GenerationSettings::from_cli(&cli).is_err());
    }

    #[test]
    fn prefixes_model_path_once() {
        let mut settings = GenerationSettings::default();
        assert_eq!(settings.model_path(), "models/gemini-3-flash-preview");
        settings.model = "models/custom".into();
        assert_eq!(settings.model_path(), "models/custom");
    }

    #[test]
    fn blank_agency_flags_fall_back_to_defaults() {
        let cli = Cli::parse_from(["proposal-genius", "--agency-name", "  "]);
        assert_eq!(AgencyProfile::from_cli(&cli), AgencyProfile::default());
    }
}
