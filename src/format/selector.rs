use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output style for the converted line list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayFormat {
    Simple,
    Quoted,
    Template,
    Markdown,
}

impl ArrayFormat {
    pub const ALL: [ArrayFormat; 4] = [
        Self::Simple,
        Self::Quoted,
        Self::Template,
        Self::Markdown,
    ];

    /// Selector name as used in the config file and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Quoted => "quoted",
            Self::Template => "template",
            Self::Markdown => "markdown",
        }
    }

    /// Human-readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Simple Array",
            Self::Quoted => "Single Quotes",
            Self::Template => "Template Literals",
            Self::Markdown => "Markdown Links",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Simple => Self::Quoted,
            Self::Quoted => Self::Template,
            Self::Template => Self::Markdown,
            Self::Markdown => Self::Simple,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Simple => Self::Markdown,
            Self::Quoted => Self::Simple,
            Self::Template => Self::Quoted,
            Self::Markdown => Self::Template,
        }
    }
}

impl Default for ArrayFormat {
    fn default() -> Self {
        ArrayFormat::Quoted
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ArrayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "quoted" => Ok(Self::Quoted),
            "template" => Ok(Self::Template),
            "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}
