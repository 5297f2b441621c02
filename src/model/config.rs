use serde::{Deserialize, Serialize};

/// On-disk theme document (`config.toml`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub colors: ColorConfig,
}

/// Color strings as written by the operator. Resolved by `crate::theme`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorConfig {
    pub title: String,
    pub normal_text: String,
    pub cursor: String,
    pub selected: String,
    pub border: String,
    pub instruction: String,
    pub active_column_bg: String,
}
