use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selection::types::CategoryKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub category: CategoryKey,
    pub label: String,
    pub display_name: String,
}

/// Result of asking the engine to complete the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Summary {
    Incomplete {
        message: String,
    },
    Empty {
        message: String,
    },
    Report {
        heading: String,
        entries: Vec<SummaryEntry>,
    },
}

impl Summary {
    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report { .. })
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        match self {
            Self::Report { entries, .. } => entries,
            Self::Incomplete { .. } | Self::Empty { .. } => &[],
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Incomplete { message } | Self::Empty { message } => {
                format!("<p>{}</p>", escape_html(message))
            }
            Self::Report { heading, entries } => {
                let mut html = format!("<h3>{}</h3><ul>", escape_html(heading));
                for entry in entries {
                    html.push_str("<li>");
                    html.push_str(&escape_html(&entry.label));
                    html.push_str(": ");
                    html.push_str(&escape_html(&entry.display_name));
                    html.push_str("</li>");
                }
                html.push_str("</ul>");
                html
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { message } | Self::Empty { message } => write!(f, "{message}"),
            Self::Report { heading, entries } => {
                write!(f, "{heading}")?;
                for entry in entries {
                    write!(f, "\n  - {}: {}", entry.label, entry.display_name)?;
                }
                Ok(())
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
