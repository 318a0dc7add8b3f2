// SPDX-License-Identifier: MPL-2.0
//! `fluent_scope` provides component-scoped internationalization built on the
//! Fluent localization system.
//!
//! A host application's component tree hands each newly created node to a
//! [`scope::ScopeResolver`], which binds exactly one [`translator::Translator`]
//! to it: a fresh instance when the node carries its own options, an
//! ancestor's instance when one is already bound, or the process-wide default
//! otherwise. Nodes then expose translation, plural, existence, date and
//! number accessors that delegate to the bound instance.
//!
//! # Features
//!
//! - Automatic locale detection from a host override, config, or system settings
//! - Compile-time embedded `.ftl` translation files
//! - Per-component translator scoping with root/parent inheritance
//! - Fallback to a default locale when translations are missing

#![doc(html_root_url = "https://docs.rs/fluent_scope/0.1.0")]

pub mod composer;
pub mod config;
pub mod error;
pub mod scope;
pub mod translator;
