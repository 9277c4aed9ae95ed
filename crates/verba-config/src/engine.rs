use std::env;

use serde::{Deserialize, Serialize};

fn default_max_input_chars() -> usize {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest accepted input, counted in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Lexicon JSON files merged over the embedded one, in order
    #[serde(default)]
    pub additional_lexicons: Vec<String>,
    /// `lemma\trank` file replacing the embedded frequency list
    pub frequency_list: Option<String>,
}

impl EngineConfig {
    pub fn new() -> Self {
        let max_input_chars = env::var("VERBA_MAX_INPUT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_input_chars);

        let additional_lexicons = env::var("VERBA_LEXICONS")
            .map(|v| split_paths(&v))
            .unwrap_or_default();

        let frequency_list = env::var("VERBA_FREQUENCY_LIST").ok();

        Self {
            max_input_chars,
            additional_lexicons,
            frequency_list,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            additional_lexicons: vec![],
            frequency_list: None,
        }
    }
}

/// Comma separated, blanks dropped
fn split_paths(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
