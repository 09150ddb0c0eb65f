//! The `grace` theme: softer headings, shadows and rounded blocks over `default`.

use crate::theme::ThemeOverride;
use crate::{style_group, style_map};

pub(super) fn overrides() -> ThemeOverride {
    ThemeOverride::new()
        .with_base(style_map! {})
        .with_block(style_group! {
            "h1" => {
                "padding" => "0.5em 1em",
                "border-bottom" => "2px solid var(--md-primary-color)",
                "font-size" => "1.4em",
                "text-shadow" => "2px 2px 4px rgba(0,0,0,0.1)",
            },
            "h2" => {
                "padding" => "0.3em 1em",
                "border-radius" => "8px",
                "font-size" => "1.3em",
                "box-shadow" => "0 4px 6px rgba(0,0,0,0.1)",
            },
            "h3" => {
                "padding-left" => "12px",
                "font-size" => "1.2em",
                "border-left" => "4px solid var(--md-primary-color)",
                "border-bottom" => "1px dashed var(--md-primary-color)",
            },
            "h4" => { "font-size" => "1.1em" },
            "h5" => { "font-size" => "1em" },
            "h6" => { "font-size" => "1em" },
            "p" => {},
            "blockquote" => {
                "font-style" => "italic",
                "padding" => "1em 1em 1em 2em",
                "border-left" => "4px solid var(--md-primary-color)",
                "border-radius" => "6px",
                "color" => "rgba(0,0,0,0.6)",
                "box-shadow" => "0 4px 6px rgba(0,0,0,0.05)",
            },
            "blockquote_p" => {},
            "markdown-alert" => { "font-style" => "italic" },
            "code_pre" => { "box-shadow" => "inset 0 0 10px rgba(0,0,0,0.05)" },
            "code" => {
                "white-space" => "pre-wrap",
                "font-family" => "'Fira Code', Menlo, Operator Mono, Consolas, Monaco, monospace",
            },
            "image" => {
                "border-radius" => "8px",
                "box-shadow" => "0 4px 8px rgba(0,0,0,0.1)",
            },
            "ol" => { "padding-left" => "1.5em" },
            "ul" => {
                "list-style" => "none",
                "padding-left" => "1.5em",
            },
            "footnotes" => {},
            "figure" => {},
            "hr" => {
                "height" => "1px",
                "border" => "none",
                "margin" => "2em 0",
                "background" => "linear-gradient(to right, rgba(0,0,0,0), rgba(0,0,0,0.1), rgba(0,0,0,0))",
            },
        })
        .with_inline(style_group! {
            "listitem" => { "margin" => "0.5em 0" },
            "codespan" => {},
            "em" => {},
            "link" => {},
            "wx_link" => {},
            "strong" => {},
            "table" => {
                "border-collapse" => "separate",
                "border-spacing" => "0",
                "border-radius" => "8px",
                "margin" => "1em 0",
                "color" => "var(--el-text-color-regular)",
                "box-shadow" => "0 4px 6px rgba(0,0,0,0.1)",
                "overflow" => "hidden",
            },
            "thead" => { "color" => "#fff" },
            "td" => { "padding" => "0.5em 1em" },
            "footnote" => { "color" => "rgba(0,0,0,0.5)" },
            "figcaption" => {},
        })
}
