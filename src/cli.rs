use clap::Parser;

use crate::config::{
    DEFAULT_AGENCY_NAME, DEFAULT_AGENCY_SPECIALTY, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

#[derive(Debug, Parser)]
#[command(
    name = "proposal-genius",
    version,
    about = "Drafts business proposal sections with Gemini and cites its web sources"
)]
pub struct Cli {
    /// Proposal section / topic (runs once together with --notes)
    #[arg(short = 't', long = "topic", requires = "notes")]
    pub topic: Option<String>,

    /// Raw notes for the section; use "-" to read them from stdin
    #[arg(short = 'n', long = "notes", requires = "topic")]
    pub notes: Option<String>,

    /// Print the composed prompt and exit without calling the model
    #[arg(long = "print-prompt", requires = "topic")]
    pub print_prompt: bool,

    /// Gemini model name
    #[arg(short = 'm', long = "model", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Response length cap in tokens
    #[arg(long = "max-output-tokens", default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
    pub max_output_tokens: u32,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long = "temperature", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Disable Google Search grounding
    #[arg(long = "no-search")]
    pub no_search: bool,

    /// Agency name used in the prompt preamble
    #[arg(long = "agency-name", default_value = DEFAULT_AGENCY_NAME)]
    pub agency_name: String,

    /// Agency specialty used in the prompt preamble
    #[arg(long = "agency-specialty", default_value = DEFAULT_AGENCY_SPECIALTY)]
    pub agency_specialty: String,

    /// Copy each generated draft to the clipboard
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,
}
