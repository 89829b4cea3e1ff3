#![cfg(test)]
/*!
Selector lint for the shell stylesheet.

The shell components in `ui/src/components` emit a fixed set of class names and
data attributes. This test keeps `ui/assets/styling/shell.css` in step with
them so a rename on either side fails here instead of silently unstyling the
packaged desktop build.

If you rename a class in a component, update the stylesheet and the list below
together.
*/

const SHELL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/shell.css"
));

/// Selectors the shell components depend on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Frame (theme-driven colors)
    ".frame {",
    ".frame--light",
    ".frame--dark",
    ".frame__main",
    // Navbar
    ".navbar {",
    ".navbar__skip",
    ".navbar__links",
    ".navbar__item",
    ".navbar__link",
    ".navbar__label",
    // The single hover highlight, keyed by its layout id
    ".navbar__highlight[data-layout-id=\"hover-background\"]",
    ".navbar__highlight--active",
    // Theme toggle
    ".theme-toggle",
    ".theme-toggle__icon",
    // Footer
    ".footer {",
    ".footer__links",
    ".footer__link",
    ".footer__rights",
    // Responsive block
    "@media (max-width: 640px)",
];

#[test]
fn shell_stylesheet_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !SHELL_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors in shell stylesheet:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn both_modes_define_the_same_color_tokens() {
    let block = |selector: &str| -> String {
        let start = SHELL_CSS
            .find(selector)
            .unwrap_or_else(|| panic!("{selector} block missing"));
        let end = SHELL_CSS[start..].find('}').map(|i| start + i).unwrap();
        SHELL_CSS[start..end].to_string()
    };
    let tokens = |body: &str| -> Vec<String> {
        let mut names: Vec<String> = body
            .lines()
            .filter_map(|line| line.trim().strip_prefix("--"))
            .filter_map(|rest| rest.split(':').next())
            .map(|name| name.to_string())
            .collect();
        names.sort();
        names
    };

    let light = tokens(&block(".frame--light {"));
    let dark = tokens(&block(".frame--dark {"));
    assert!(!light.is_empty(), "light mode defines no color tokens");
    assert_eq!(light, dark, "light/dark color tokens differ");
}
