use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use ui::core::nav::NAV_LINKS;

/// Translation completeness.
///
/// - every non-fallback locale defines every key of `en-US/folio-ui.ftl`
/// - no file defines a key twice
/// - every `t!("...")` literal under `src/` and every nav label id exists in
///   the fallback
///
/// The key parser is deliberately simple: comment, attribute and blank lines
/// are skipped and anything shaped like `key =` counts as a definition.
///
/// Adding a locale: create `ui/i18n/<locale>/folio-ui.ftl`, copy every key from
/// en-US and register it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/folio-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/folio-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", ES_ES),
    // Add new locales here.
];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn every_embedded_locale_is_registered() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n");
    let mut on_disk: Vec<String> = fs::read_dir(&i18n_root)
        .expect("i18n directory readable")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name != "en-US")
        .collect();
    on_disk.sort();

    let mut registered: Vec<String> = LOCALES.iter().map(|(l, _)| l.to_string()).collect();
    registered.sort();

    assert_eq!(on_disk, registered, "update LOCALES when adding a locale folder");
}

/// `fl!` resolves its files from `i18n.toml`, the runtime loader from
/// `ui::i18n::DOMAIN`. Both must name the file that is actually on disk.
#[test]
fn fluent_domain_matches_the_fallback_file() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config: toml::Table = fs::read_to_string(manifest_dir.join("i18n.toml"))
        .expect("i18n.toml readable")
        .parse()
        .expect("i18n.toml is valid TOML");

    let fallback = config["fallback_language"]
        .as_str()
        .expect("fallback_language is a string");
    let fluent = config["fluent"].as_table().expect("[fluent] section");
    let domain = fluent
        .get("domain")
        .and_then(|d| d.as_str())
        .expect("[fluent] sets `domain`; otherwise fl! derives it from the package name");
    let assets_dir = fluent["assets_dir"].as_str().expect("assets_dir is a string");

    assert_eq!(domain, ui::i18n::DOMAIN);
    let fallback_file = manifest_dir
        .join(assets_dir)
        .join(fallback)
        .join(format!("{domain}.ftl"));
    assert!(fallback_file.is_file(), "missing {}", fallback_file.display());
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback_keys = extract_keys(EN_US);
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut referenced = extract_translation_keys_from_source(&src_root);
    referenced.extend(NAV_LINKS.iter().map(|link| link.label_id.to_string()));

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();

    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback:\n{}",
        missing.join("\n")
    );
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(definition_key).collect()
}

fn definition_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty() && key.chars().all(valid_key_char);
    valid.then(|| key.to_string())
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = src
        .lines()
        .filter_map(definition_key)
        .filter(|key| !seen.insert(key.clone()))
        .collect();

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Every `t!("...")` literal first argument in `.rs` files under `src_root`.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "t!(\"";
        for (pos, _) in content.match_indices(needle) {
            // Skip other macros ending in `t!`, e.g. `assert!("...")`.
            let standalone = content[..pos]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            if !standalone {
                continue;
            }
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}
