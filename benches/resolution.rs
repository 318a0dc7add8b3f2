// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for translator resolution and message lookup.
//!
//! Measures the performance of:
//! - The scoped-resolution policy (inherit vs. construct)
//! - Message formatting through a bound node

use criterion::{criterion_group, criterion_main, Criterion};
use fluent_scope::composer::{Composer, TranslatorOptions};
use fluent_scope::config::Config;
use fluent_scope::scope::{ComponentNode, ScopeResolver};
use std::hint::black_box;
use std::rc::Rc;

fn resolver() -> ScopeResolver {
    let composer = Rc::new(
        Composer::from_embedded(Some("en-US".to_string()), &Config::default())
            .expect("embedded locales load"),
    );
    ScopeResolver::new(Rc::new(composer.default_translator()), composer)
}

/// Benchmark inheriting an already-bound ancestor translator.
fn bench_resolve_inherited(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let resolver = resolver();
    let root = Rc::new(ComponentNode::new("root"));
    resolver.on_node_created(&root).expect("root binds");

    group.bench_function("resolve_inherited", |b| {
        b.iter(|| {
            let node = ComponentNode::new("leaf").with_root(&root);
            black_box(resolver.on_node_created(&node).expect("leaf binds"));
        });
    });

    group.finish();
}

/// Benchmark constructing a node-local translator from options.
fn bench_resolve_scoped(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let resolver = resolver();
    let options = TranslatorOptions {
        locale: Some("fr".to_string()),
        ..Default::default()
    };

    group.bench_function("resolve_scoped", |b| {
        b.iter(|| {
            let node = ComponentNode::new("scoped").with_options(options.clone());
            black_box(resolver.on_node_created(&node).expect("scoped binds"));
        });
    });

    group.finish();
}

/// Benchmark message lookup through a bound node.
fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let resolver = resolver();
    let node = Rc::new(ComponentNode::new("node"));
    resolver.on_node_created(&node).expect("node binds");

    group.bench_function("translate", |b| {
        b.iter(|| {
            black_box(node.translate("greeting").expect("bound lookup"));
        });
    });

    group.bench_function("translate_choice", |b| {
        b.iter(|| {
            black_box(
                node.translate_choice("unread-messages", 3.0)
                    .expect("bound lookup"),
            );
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_inherited,
    bench_resolve_scoped,
    bench_translate
);
criterion_main!(benches);
