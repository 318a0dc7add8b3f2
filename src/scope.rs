// SPDX-License-Identifier: MPL-2.0
//! Scoped translator resolution for component trees.
//!
//! Every [`ComponentNode`] binds exactly one [`Translator`] instance, chosen
//! once when the host reports the node's creation. The choice is a strict
//! priority chain, first match wins:
//!
//! 1. node-local [`TranslatorOptions`] — a brand-new instance scoped to the
//!    node and its uninitialized descendants;
//! 2. the node's root link, when the root is already bound — most
//!    applications share one translator anchored at the application root;
//! 3. the node's parent link, when the parent is already bound — covers
//!    detached subtrees (dynamically mounted islands) with no root link;
//! 4. the process-wide default translator captured at install time.
//!
//! The resolver only reads ancestor links; it never mutates the tree, and a
//! node's binding is never invalidated afterwards.

use crate::composer::{Composer, TranslatorOptions};
use crate::error::{Error, Result};
use crate::translator::{DateStyle, Translator};
use chrono::{DateTime, Utc};
use fluent_bundle::FluentArgs;
use std::cell::OnceCell;
use std::rc::Rc;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// A unit in the host framework's component tree.
///
/// The host constructs the node (with whatever options and ancestor links it
/// has resolved), wraps it in an [`Rc`], and hands it to
/// [`ScopeResolver::on_node_created`] before first use.
pub struct ComponentNode {
    name: String,
    options: Option<TranslatorOptions>,
    root: Option<Rc<ComponentNode>>,
    parent: Option<Rc<ComponentNode>>,
    translator: OnceCell<Rc<Translator>>,
}

impl ComponentNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
            root: None,
            parent: None,
            translator: OnceCell::new(),
        }
    }

    /// Attaches node-local i18n options, overriding all ancestor translators
    /// for this node.
    pub fn with_options(mut self, options: TranslatorOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_root(mut self, root: &Rc<ComponentNode>) -> Self {
        self.root = Some(Rc::clone(root));
        self
    }

    pub fn with_parent(mut self, parent: &Rc<ComponentNode>) -> Self {
        self.parent = Some(Rc::clone(parent));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> Option<&TranslatorOptions> {
        self.options.as_ref()
    }

    /// The translator bound to this node, if resolution has run.
    pub fn bound_translator(&self) -> Option<&Rc<Translator>> {
        self.translator.get()
    }

    fn bound(&self) -> Result<&Rc<Translator>> {
        self.translator
            .get()
            .ok_or_else(|| Error::UnboundNode(self.name.clone()))
    }

    // Delegating accessors. Each forwards to the bound translator; calling
    // one before resolution yields `Error::UnboundNode`.

    pub fn translate(&self, key: &str) -> Result<String> {
        Ok(self.bound()?.translate(key))
    }

    pub fn translate_with(&self, key: &str, args: &FluentArgs<'_>) -> Result<String> {
        Ok(self.bound()?.translate_with(key, args))
    }

    pub fn translate_choice(&self, key: &str, count: f64) -> Result<String> {
        Ok(self.bound()?.translate_choice(key, count))
    }

    pub fn translate_choice_with(
        &self,
        key: &str,
        count: f64,
        extra: &FluentArgs<'_>,
    ) -> Result<String> {
        Ok(self.bound()?.translate_choice_with(key, count, extra))
    }

    pub fn translate_exists(
        &self,
        key: &str,
        locale: Option<&LanguageIdentifier>,
    ) -> Result<bool> {
        Ok(self.bound()?.translate_exists(key, locale))
    }

    pub fn format_date(&self, value: &DateTime<Utc>, style: DateStyle) -> Result<String> {
        Ok(self.bound()?.format_date(value, style))
    }

    pub fn format_number(&self, value: f64) -> Result<String> {
        Ok(self.bound()?.format_number(value))
    }
}

/// Selects and binds translator instances for component nodes.
///
/// Captures the process-wide default translator and the composer once at
/// install time, the way a plugin closure would.
pub struct ScopeResolver {
    default_translator: Rc<Translator>,
    composer: Rc<Composer>,
}

impl ScopeResolver {
    pub fn new(default_translator: Rc<Translator>, composer: Rc<Composer>) -> Self {
        Self {
            default_translator,
            composer,
        }
    }

    pub fn default_translator(&self) -> &Rc<Translator> {
        &self.default_translator
    }

    /// The pure selection policy. Does not bind anything.
    pub fn resolve(&self, node: &ComponentNode) -> Result<Rc<Translator>> {
        if let Some(options) = node.options() {
            // Node-local configuration wins over every ancestor.
            debug!(node = node.name(), "binding node-local translator");
            return Ok(Rc::new(self.composer.create_translator(options)?));
        }

        if let Some(root) = &node.root {
            if let Some(translator) = root.bound_translator() {
                debug!(node = node.name(), "reusing root translator");
                return Ok(Rc::clone(translator));
            }
        }

        if let Some(parent) = &node.parent {
            if let Some(translator) = parent.bound_translator() {
                debug!(node = node.name(), "reusing parent translator");
                return Ok(Rc::clone(translator));
            }
        }

        debug!(node = node.name(), "falling back to default translator");
        Ok(Rc::clone(&self.default_translator))
    }

    /// Host-facing lifecycle entry point: resolve the node's translator and
    /// bind it. Runs the policy once per node; later calls return the
    /// already-bound instance untouched.
    pub fn on_node_created(&self, node: &ComponentNode) -> Result<Rc<Translator>> {
        if let Some(existing) = node.bound_translator() {
            return Ok(Rc::clone(existing));
        }
        let resolved = self.resolve(node)?;
        // First binding always succeeds; a concurrent set is impossible in
        // this single-threaded model.
        let _ = node.translator.set(Rc::clone(&resolved));
        Ok(resolved)
    }
}
