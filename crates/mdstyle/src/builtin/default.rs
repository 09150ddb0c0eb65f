//! The `default` theme: the base every built-in theme derives from.

use crate::theme::Theme;
use crate::{style_group, style_map};

pub(super) fn theme() -> Theme {
    Theme::new(
        style_map! {
            "--md-primary-color" => "hsl(0, 100%, 50%)",
            "text-align" => "left",
            "line-height" => "1.75",
        },
        block(),
        inline(),
    )
}

fn block() -> crate::StyleGroup {
    style_group! {
        "h1" => {
            "margin" => "0 auto 0",
            "color" => "hsl(0, 100%, 50%)",
            "font-size" => "3em",
            "font-weight" => "bold",
            "text-align" => "left",
            "font-style" => "italic",
        },
        "h2" => {
            "margin" => "-14px auto 2em",
            "color" => "hsl(0, 100%, 50%)",
            "font-size" => "1.2em",
            "font-weight" => "bold",
            "text-align" => "left",
        },
        "h3" => {
            "padding-left" => "8px",
            "border-left" => "3px solid var(--md-primary-color)",
            "margin" => "2em 8px 0.75em 0",
            "color" => "var(--el-text-color-regular)",
            "font-size" => "1.1em",
            "font-weight" => "bold",
            "line-height" => "1.2",
        },
        "h4" => {
            "margin" => "2em 8px 0.5em",
            "color" => "var(--md-primary-color)",
            "font-size" => "1em",
            "font-weight" => "bold",
        },
        "h5" => {
            "margin" => "1.5em 8px 0.5em",
            "color" => "var(--md-primary-color)",
            "font-size" => "1em",
            "font-weight" => "bold",
        },
        "h6" => {
            "margin" => "1.5em 8px 0.5em",
            "font-size" => "1em",
            "color" => "var(--md-primary-color)",
        },
        "p" => {
            "margin" => "1.5em 0",
            "letter-spacing" => "0.1em",
            "color" => "var(--el-text-color-regular)",
            "text-align" => "justify",
        },
        "blockquote" => {
            "font-style" => "normal",
            "border-left" => "none",
            "padding" => "1.4em",
            "border-radius" => "8px",
            "color" => "rgba(0,0,0,0.5)",
            "background-color" => "var(--blockquote-background)",
            "background-image" => "url('https://static.wuxiaobao.cn/image/adren/quote.png')",
            "background-size" => "18px",
            "background-repeat" => "no-repeat",
            "background-position" => "6px 6px",
            "margin" => "2em 0",
        },
        "blockquote_p" => {
            "display" => "block",
            "font-size" => "1em",
            "letter-spacing" => "0.1em",
            "color" => "var(--el-text-color-regular)",
        },
        "blockquote_name" => {
            "color" => "#3f3f3f",
            "font-weight" => "bold",
        },
        "blockquote_name_others" => {
            "color" => "#3f3f3f",
            "font-weight" => "bold",
        },
        "blockquote_content" => {
            "color" => "var(--md-primary-color)",
            "font-weight" => "bold",
        },
        // GFM alert containers; reserved, unstyled by default.
        "blockquote_note" => {},
        "blockquote_tip" => {},
        "blockquote_important" => {},
        "blockquote_warning" => {},
        "blockquote_caution" => {},
        "blockquote_title" => {
            "display" => "flex",
            "align-items" => "center",
            "gap" => "0.5em",
            "margin-bottom" => "0.5em",
        },
        "blockquote_title_note" => { "color" => "#478be6" },
        "blockquote_title_tip" => { "color" => "#57ab5a" },
        "blockquote_title_important" => { "color" => "#986ee2" },
        "blockquote_title_warning" => { "color" => "#c69026" },
        "blockquote_title_caution" => { "color" => "#e5534b" },
        "blockquote_p_note" => {},
        "blockquote_p_tip" => {},
        "blockquote_p_important" => {},
        "blockquote_p_warning" => {},
        "blockquote_p_caution" => {},
        "code_pre" => {
            "font-size" => "14px",
            "overflow-x" => "auto",
            "border-radius" => "8px",
            "padding" => "1em",
            "line-height" => "1.5",
            "margin" => "10px 0",
        },
        "code" => {
            "margin" => 0,
            "white-space" => "nowrap",
            "font-family" => "Menlo, Operator Mono, Consolas, Monaco, monospace",
        },
        "image" => {
            "display" => "block",
            "width" => "100% !important",
            "margin" => "0.1em auto 0em",
        },
        "ol" => {
            "padding-left" => "0em",
            "margin-left" => "0",
            "color" => "var(--el-text-color-regular)",
        },
        "ul" => {
            "list-style" => "circle",
            "padding-left" => "0em",
            "margin-left" => "0",
            "color" => "var(--el-text-color-regular)",
        },
        "footnotes" => {
            "margin" => "0.5em 0",
            "font-size" => "80%",
            "color" => "var(--el-text-color-regular)",
        },
        "figure" => {
            "margin" => "1.5em 0",
            "color" => "var(--el-text-color-regular)",
        },
        "hr" => {
            "border-style" => "solid",
            "border-width" => "1px 0 0",
            "border-color" => "rgba(0,0,0,0.1)",
            "-webkit-transform-origin" => "0 0",
            "-webkit-transform" => "scale(1, 0.5)",
            "transform-origin" => "0 0",
            "transform" => "scale(1, 0.5)",
        },
    }
}

fn inline() -> crate::StyleGroup {
    style_group! {
        "listitem" => {
            "display" => "flex",
            "margin" => "0.2em 0",
            "color" => "var(--el-text-color-regular)",
        },
        "codespan" => {
            "font-weight" => "bold",
            "font-size" => "inherit",
        },
        "em" => {
            "font-style" => "italic",
            "font-size" => "inherit",
        },
        "link" => { "color" => "#576b95" },
        "wx_link" => {
            "color" => "#576b95",
            "text-decoration" => "none",
        },
        "strong" => {
            "color" => "var(--md-primary-color)",
            "font-weight" => "bold",
            "font-size" => "inherit",
            "box-shadow" => "inset 0 -8px 0 rgba(255,0,0,0.1)",
        },
        "table" => {
            "border-collapse" => "collapse",
            "text-align" => "center",
            "margin" => "1em 0",
            "color" => "var(--el-text-color-regular)",
        },
        "thead" => {
            "background" => "rgba(0, 0, 0, 0.05)",
            "font-weight" => "bold",
            "color" => "var(--el-text-color-regular)",
        },
        "td" => {
            "border" => "1px solid #dfdfdf",
            "padding" => "0.25em 0.5em",
            "color" => "#3f3f3f",
            "word-break" => "keep-all",
        },
        "footnote" => {
            "font-size" => "12px",
            "color" => "var(--el-text-color-regular)",
        },
        "figcaption" => {
            "text-align" => "left",
            "color" => "rgba(0,0,0,0.6)",
            "font-size" => "1em",
            "line-height" => "1.4",
            "padding" => "0.8em 1em",
            "border-left" => "5px solid var(--md-primary-color)",
            "background" => "rgba(0,0,0,0.05)",
        },
    }
}
