//! Theme derivation by three-level deep merge.

use super::overrides::ThemeOverride;
use super::theme::Theme;

/// Derives a new theme by overlaying `overrides` onto `base`.
///
/// The merge follows the fixed theme shape, category then element then
/// property:
///
/// - `base` properties from the override replace or extend the base map.
/// - `block` and `inline` elements present on both sides are merged property
///   by property; an element's map is never replaced wholesale.
/// - Elements only in the override are added as-is; elements only in the base
///   are kept unchanged.
///
/// The base is only read. The result owns all of its data, so one base can
/// feed any number of independent derivations.
///
/// # Example
///
/// ```rust
/// use mdstyle::{derive, style_group, style_map, Category, Theme, ThemeOverride};
///
/// let base = Theme::new(
///     style_map! {},
///     style_group! { "h1" => { "margin" => "0 auto 0", "font-size" => "3em" } },
///     style_group! {},
/// );
/// let overrides = ThemeOverride::new()
///     .with_block(style_group! { "h1" => { "font-size" => "1.4em" } });
///
/// let derived = derive(&base, &overrides);
/// let h1 = derived.element(Category::Block, "h1").unwrap();
/// assert_eq!(h1.to_declarations(), "margin: 0 auto 0; font-size: 1.4em;");
/// ```
pub fn derive(base: &Theme, overrides: &ThemeOverride) -> Theme {
    let mut derived = base.clone();
    let (base_map, block, inline) = derived.parts_mut();

    if let Some(properties) = &overrides.base {
        base_map.merge_from(properties);
    }
    if let Some(elements) = &overrides.block {
        block.merge_from(elements);
    }
    if let Some(elements) = &overrides.inline {
        inline.merge_from(elements);
    }

    log::debug!(
        "derived theme: {} base properties, {} block and {} inline elements",
        derived.base().len(),
        derived.block().len(),
        derived.inline().len()
    );
    derived
}
