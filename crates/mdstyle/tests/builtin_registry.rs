//! Integration tests for the built-in registry.
//!
//! These exercise the registry the way a renderer and a CLI consume it:
//! resolve by identifier, then look up styles by category and element id.

use mdstyle::{builtin, default_theme, derive, grace_overrides, Category, StyleValue, ThemeError};

#[test]
fn test_every_theme_has_all_categories() {
    for option in builtin().list() {
        let theme = builtin().get(&option.id).unwrap();
        let value = serde_json::to_value(theme).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3, "{} has the wrong categories", option.id);
        // base is flat: every value is a scalar
        for (_, v) in object["base"].as_object().unwrap() {
            assert!(v.is_string() || v.is_number());
        }
        // groups map element ids to flat maps
        for category in ["block", "inline"] {
            for (_, styles) in object[category].as_object().unwrap() {
                let styles = styles.as_object().unwrap();
                assert!(styles.values().all(|v| v.is_string() || v.is_number()));
            }
        }
    }
}

#[test]
fn test_default_is_base_theme_unchanged() {
    let theme = builtin().get("default").unwrap();
    assert_eq!(theme, default_theme());
    assert_eq!(
        theme.base().get("line-height"),
        Some(&StyleValue::from("1.75"))
    );
}

#[test]
fn test_grace_merges_per_property() {
    let grace = builtin().get("grace").unwrap();
    let h1 = grace.element(Category::Block, "h1").unwrap();

    assert_eq!(h1.get("font-size"), Some(&StyleValue::from("1.4em")));
    assert_eq!(h1.get("margin"), Some(&StyleValue::from("0 auto 0")));
    assert_eq!(h1.get("font-style"), Some(&StyleValue::from("italic")));
    assert_eq!(
        h1.get("text-shadow"),
        Some(&StyleValue::from("2px 2px 4px rgba(0,0,0,0.1)"))
    );
}

#[test]
fn test_grace_inline_table_and_untouched_elements() {
    let grace = builtin().get("grace").unwrap();
    let base = default_theme();

    let table = grace.element(Category::Inline, "table").unwrap();
    assert_eq!(table.get("border-collapse"), Some(&StyleValue::from("separate")));
    assert_eq!(table.get("text-align"), Some(&StyleValue::from("center")));

    // Elements grace leaves empty keep the base styling.
    assert_eq!(
        grace.element(Category::Inline, "link"),
        base.element(Category::Inline, "link")
    );
    assert_eq!(grace.base(), base.base());
}

#[test]
fn test_grace_code_number_value_survives() {
    let grace = builtin().get("grace").unwrap();
    let code = grace.element(Category::Block, "code").unwrap();
    assert_eq!(code.get("margin"), Some(&StyleValue::Number(0.0)));
    assert_eq!(code.get("white-space"), Some(&StyleValue::from("pre-wrap")));
}

#[test]
fn test_unknown_theme() {
    let err = builtin().get("not-a-real-theme").unwrap_err();
    match err {
        ThemeError::UnknownTheme { id, available } => {
            assert_eq!(id, "not-a-real-theme");
            assert_eq!(available, vec!["default", "grace"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_list_order_and_labels() {
    let options = builtin().list();
    let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["default", "grace"]);
    assert!(options.iter().all(|o| !o.label.is_empty()));
    assert!(options.iter().all(|o| !o.description.is_empty()));
}

#[test]
fn test_registry_readable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let grace = builtin().get("grace").unwrap();
                grace.block().len()
            })
        })
        .collect();

    let expected = builtin().get("grace").unwrap().block().len();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_grace_can_be_rebuilt_from_its_override() {
    // Custom registries reuse the published override instead of copying it.
    let rebuilt = derive(default_theme(), &grace_overrides());
    assert_eq!(&rebuilt, builtin().get("grace").unwrap());

    let tweaked = derive(
        default_theme(),
        &grace_overrides().then(
            &mdstyle::ThemeOverride::from_yaml("block:\n  h1:\n    font-size: 2em\n").unwrap(),
        ),
    );
    let h1 = tweaked.element(Category::Block, "h1").unwrap();
    assert_eq!(h1.get("font-size"), Some(&StyleValue::from("2em")));
    assert!(h1.get("text-shadow").is_some());
}
