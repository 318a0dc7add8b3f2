// SPDX-License-Identifier: MPL-2.0
use fluent_scope::composer::{Composer, TranslatorOptions};
use fluent_scope::config::{self, Config};
use fluent_scope::scope::{ComponentNode, ScopeResolver};
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        fallback_language: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let composer_en = Composer::from_embedded(None, &loaded_initial_config)
        .expect("Failed to build composer");
    assert_eq!(composer_en.default_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        fallback_language: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let composer_fr = Composer::from_embedded(None, &loaded_french_config)
        .expect("Failed to build composer");
    assert_eq!(composer_fr.default_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn full_resolution_pass_over_a_tree() {
    // Host override picks French as the process-wide default.
    let composer = Rc::new(
        Composer::from_embedded(Some("fr".to_string()), &Config::default())
            .expect("Failed to build composer"),
    );
    let resolver = ScopeResolver::new(
        Rc::new(composer.default_translator()),
        Rc::clone(&composer),
    );

    // Root scopes itself to German via local options.
    let root = Rc::new(ComponentNode::new("app").with_options(TranslatorOptions {
        locale: Some("de".to_string()),
        ..Default::default()
    }));
    let root_translator = resolver
        .on_node_created(&root)
        .expect("root resolution failed");
    assert_eq!(root.translate("greeting").unwrap(), "Hallo, Welt!");

    // A descendant linked to the root shares the instance.
    let child = Rc::new(ComponentNode::new("toolbar").with_root(&root));
    let child_translator = resolver
        .on_node_created(&child)
        .expect("child resolution failed");
    assert!(Rc::ptr_eq(&root_translator, &child_translator));
    assert_eq!(child.translate("greeting").unwrap(), "Hallo, Welt!");

    // An orphan gets the French default.
    let orphan = Rc::new(ComponentNode::new("orphan"));
    resolver
        .on_node_created(&orphan)
        .expect("orphan resolution failed");
    assert_eq!(orphan.translate("greeting").unwrap(), "Bonjour !");
    assert_eq!(
        orphan.translate_choice("unread-messages", 2.0).unwrap(),
        "Vous avez 2 messages non lus"
    );
}

#[test]
fn missing_translation_falls_back_to_default_locale() {
    let inline_sources = vec![
        (
            "en-US".to_string(),
            "greeting = Hello\nonly-english = English only\n".to_string(),
        ),
        ("fr".to_string(), "greeting = Bonjour\n".to_string()),
    ];
    let composer = Composer::from_sources(
        &inline_sources,
        Some("fr".to_string()),
        &Config::default(),
    )
    .expect("Failed to build composer");

    let translator = composer.default_translator();
    assert_eq!(translator.translate("greeting"), "Bonjour");
    assert_eq!(translator.translate("only-english"), "English only");
    assert_eq!(translator.translate("nowhere"), "MISSING: nowhere");
}
