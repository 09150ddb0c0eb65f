//! Built-in themes and the process-wide registry holding them.
//!
//! | Id        | Label   | Derived from |
//! |-----------|---------|--------------|
//! | `default` | Classic | (base)       |
//! | `grace`   | Grace   | `default`    |
//!
//! The registry is assembled on first use and never changes afterwards.

mod default;
mod grace;

use once_cell::sync::Lazy;

use crate::registry::{ThemeRegistry, ThemeRegistryBuilder};
use crate::theme::{derive, Theme, ThemeOverride};
use crate::ThemeResult;

/// Identifier of the base theme.
pub const DEFAULT_THEME_ID: &str = "default";

/// Identifier of the `grace` theme.
pub const GRACE_THEME_ID: &str = "grace";

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(default::theme);

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(|| {
    builtin_registry()
        .map(ThemeRegistryBuilder::build)
        .expect("built-in theme identifiers are unique")
});

/// The base theme every built-in theme derives from.
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

/// The override that turns the base theme into `grace`.
pub fn grace_overrides() -> ThemeOverride {
    grace::overrides()
}

/// The registry of built-in themes, in menu order.
///
/// # Example
///
/// ```rust
/// use mdstyle::{builtin, Category, StyleValue};
///
/// let grace = builtin().get("grace")?;
/// let h1 = grace.element(Category::Block, "h1").unwrap();
/// assert_eq!(h1.get("font-size"), Some(&StyleValue::from("1.4em")));
/// assert_eq!(h1.get("margin"), Some(&StyleValue::from("0 auto 0")));
/// # Ok::<(), mdstyle::ThemeError>(())
/// ```
pub fn builtin() -> &'static ThemeRegistry {
    &BUILTIN
}

/// Registers the built-in themes on a fresh builder.
///
/// Applications adding their own themes start from this and keep
/// registering; the built-in identifiers are then reserved.
pub fn builtin_registry() -> ThemeResult<ThemeRegistryBuilder> {
    let base = default_theme();
    ThemeRegistry::builder()
        .register(
            DEFAULT_THEME_ID,
            "Classic",
            "Red accent headings, justified paragraphs and quote-mark blockquotes",
            base.clone(),
        )?
        .register(
            GRACE_THEME_ID,
            "Grace",
            "Softer headings with shadows, rounded blocks and separated tables",
            derive(base, &grace_overrides()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Category;
    use crate::ThemeError;

    #[test]
    fn test_builtin_ids_in_order() {
        let ids: Vec<&str> = builtin().ids().collect();
        assert_eq!(ids, vec![DEFAULT_THEME_ID, GRACE_THEME_ID]);
    }

    #[test]
    fn test_grace_is_default_with_grace_overrides() {
        let overrides = grace_overrides();
        assert!(!overrides.is_empty());
        assert_eq!(
            &derive(default_theme(), &overrides),
            builtin().get(GRACE_THEME_ID).unwrap()
        );
    }

    #[test]
    fn test_builtin_default_is_base() {
        assert_eq!(builtin().get(DEFAULT_THEME_ID).unwrap(), default_theme());
    }

    #[test]
    fn test_builtin_registry_reserves_ids() {
        let result = builtin_registry()
            .unwrap()
            .register("grace", "Mine", "", Theme::default());
        assert!(matches!(result, Err(ThemeError::DuplicateRegistration { .. })));
    }

    #[test]
    fn test_grace_keeps_base_only_elements() {
        let grace = builtin().get(GRACE_THEME_ID).unwrap();
        for id in default_theme().block().ids() {
            assert!(grace.block().contains(id), "grace lost block element {id}");
        }
        assert!(grace.element(Category::Block, "markdown-alert").is_some());
        assert!(default_theme().element(Category::Block, "markdown-alert").is_none());
    }

    #[test]
    fn test_default_reserved_empty_entries() {
        let theme = default_theme();
        for id in ["blockquote_note", "blockquote_p_caution"] {
            let styles = theme.element(Category::Block, id).unwrap();
            assert!(styles.is_empty());
        }
    }
}
