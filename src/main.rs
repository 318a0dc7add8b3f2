// SPDX-License-Identifier: MPL-2.0
//! Demo binary: builds a small component tree, resolves a translator for
//! each node and prints localized output.

use chrono::Utc;
use fluent_scope::composer::{Composer, TranslatorOptions};
use fluent_scope::config;
use fluent_scope::error::Result;
use fluent_scope::scope::{ComponentNode, ScopeResolver};
use fluent_scope::translator::DateStyle;
use std::rc::Rc;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let key = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let config = config::load().unwrap_or_default();
    let composer = Rc::new(Composer::from_embedded(lang, &config)?);
    let resolver = ScopeResolver::new(Rc::new(composer.default_translator()), Rc::clone(&composer));

    // Application root with local options overriding one message.
    let root = Rc::new(ComponentNode::new("app").with_options(TranslatorOptions {
        resources: vec![(
            "en-US".to_string(),
            "app-title = Fluent Scope (demo)\n".to_string(),
        )],
        ..Default::default()
    }));
    resolver.on_node_created(&root)?;

    // A child inheriting the root's translator and a detached island that
    // only knows its parent.
    let child = Rc::new(ComponentNode::new("toolbar").with_root(&root));
    resolver.on_node_created(&child)?;
    let island = Rc::new(ComponentNode::new("tooltip").with_parent(&child));
    resolver.on_node_created(&island)?;

    let key = key.as_deref().unwrap_or("greeting");
    println!("{}", root.translate("app-title")?);
    println!("[app]     {}", root.translate(key)?);
    println!("[toolbar] {}", child.translate(key)?);
    println!("[tooltip] {}", island.translate(key)?);
    println!("[app]     {}", root.translate_choice("unread-messages", 3.0)?);
    println!("[app]     {}", root.format_date(&Utc::now(), DateStyle::Long)?);
    println!("[app]     {}", root.format_number(1234567.891)?);

    Ok(())
}
