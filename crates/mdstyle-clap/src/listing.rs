//! Human-readable output for theme listings and theme dumps.

use console::Style;
use mdstyle::{Category, Theme, ThemeRegistry};
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

use crate::error::CliError;

/// Output format for `mdstyle show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShowFormat {
    /// The theme as a YAML document
    Yaml,
    /// The theme as pretty-printed JSON
    Json,
    /// One line of inline declarations per element
    Css,
}

/// One element of a theme, written `h1`, `block:h1` or `inline:td`.
///
/// A bare id selects a block element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelector {
    /// Group the element lives in. Never [`Category::Base`].
    pub category: Category,
    /// Element id within the group.
    pub id: String,
}

impl ElementSelector {
    /// The selector in the form [`render_theme`] takes.
    pub fn as_pair(&self) -> (Category, &str) {
        (self.category, self.id.as_str())
    }
}

impl FromStr for ElementSelector {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (category, id) = match value.split_once(':') {
            Some(("block", id)) => (Category::Block, id),
            Some(("inline", id)) => (Category::Inline, id),
            Some((prefix, _)) => {
                return Err(format!(
                    "unknown element category '{}' (expected 'block' or 'inline')",
                    prefix
                ))
            }
            None => (Category::Block, value),
        };
        if id.is_empty() {
            return Err("element id is empty".to_string());
        }
        Ok(Self {
            category,
            id: id.to_string(),
        })
    }
}

/// Pads a string with spaces to a display width.
///
/// Uses Unicode width so labels with wide characters still line up.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

/// Renders the registry's selection descriptors as an aligned table.
pub fn render_theme_list(registry: &ThemeRegistry, use_color: bool) -> String {
    let options = registry.list();
    let id_width = options.iter().map(|o| o.id.width()).max().unwrap_or(0);
    let label_width = options.iter().map(|o| o.label.width()).max().unwrap_or(0);
    let id_style = Style::new().bold().force_styling(use_color);
    let muted = Style::new().dim().force_styling(use_color);

    let mut out = String::new();
    for option in options {
        // Style after padding so escape codes don't count toward the width.
        let id = id_style.apply_to(pad_to_width(&option.id, id_width));
        let line = format!(
            "{}  {}  {}",
            id,
            pad_to_width(&option.label, label_width),
            muted.apply_to(&option.description)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Serializes a theme, or one of its elements, in the requested format.
pub fn render_theme(
    theme_id: &str,
    theme: &Theme,
    format: ShowFormat,
    element: Option<(Category, &str)>,
) -> Result<String, CliError> {
    if let Some((category, id)) = element {
        let styles = theme
            .element(category, id)
            .ok_or_else(|| CliError::UnknownElement {
                theme: theme_id.to_string(),
                category: category.to_string(),
                id: id.to_string(),
            })?;
        return match format {
            ShowFormat::Yaml => to_yaml(styles),
            ShowFormat::Json => to_json(styles),
            ShowFormat::Css => Ok(format!("{}\n", styles.to_declarations())),
        };
    }

    match format {
        ShowFormat::Yaml => to_yaml(theme),
        ShowFormat::Json => to_json(theme),
        ShowFormat::Css => Ok(declaration_lines(theme)),
    }
}

fn declaration_lines(theme: &Theme) -> String {
    let mut out = format!("base {}\n", theme.base().to_declarations());
    for category in [Category::Block, Category::Inline] {
        if let Some(group) = theme.group(category) {
            for (id, styles) in group {
                out.push_str(&format!("{}.{} {}\n", category, id, styles.to_declarations()));
            }
        }
    }
    out
}

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_yaml::to_string(value).map_err(|e| CliError::Serialize(e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| CliError::Serialize(e.to_string()))
}
