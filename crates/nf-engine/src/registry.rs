//! Family registry and generator lookup.
//!
//! The registry maps family keys to generators. A key may be declared
//! without a linked generator; [`Registry::resolve`] then hands out the
//! [`Placeholder`] so call sites never have to check availability.

use std::sync::Arc;

use nf_core::Question;
use nf_patterns::{PatternContext, PatternFamily, PatternResult};

use crate::placeholder::Placeholder;

struct Entry {
    key: String,
    family: Option<Arc<dyn PatternFamily>>,
}

/// Ordered set of known pattern families.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in family.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for family in nf_patterns::builtin() {
            registry.register(family);
        }
        registry
    }

    /// Register a family, replacing any entry with the same key.
    pub fn register(&mut self, family: Arc<dyn PatternFamily>) {
        let key = family.key().to_string();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.family = Some(family),
            None => self.entries.push(Entry {
                key,
                family: Some(family),
            }),
        }
    }

    /// Builder form of [`Registry::register`].
    pub fn with(mut self, family: impl PatternFamily + 'static) -> Self {
        self.register(Arc::new(family));
        self
    }

    /// Declare a key whose generator is not linked in. Existing entries are
    /// left untouched.
    pub fn declare(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.contains(&key) {
            self.entries.push(Entry { key, family: None });
        }
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// Whether `key` is registered (with or without a generator).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Whether `key` is registered with a real generator.
    pub fn is_available(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.key == key && e.family.is_some())
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The generator for `key`: the family if linked, else the placeholder.
    pub fn resolve(&self, key: &str) -> Generator<'_> {
        let linked = self
            .entries
            .iter()
            .find(|e| e.key == key)
            .and_then(|e| e.family.as_deref());
        match linked {
            Some(family) => Generator::Family(family),
            None => Generator::Placeholder(Placeholder::new(key)),
        }
    }
}

/// A callable generator: a real family or the placeholder.
#[derive(Debug)]
pub enum Generator<'a> {
    /// A registered family.
    Family(&'a dyn PatternFamily),
    /// The stand-in for an unavailable family.
    Placeholder(Placeholder),
}

impl Generator<'_> {
    /// Whether this is the placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Key of the family this generator produces.
    pub fn key(&self) -> &str {
        match self {
            Self::Family(f) => f.key(),
            Self::Placeholder(p) => p.key(),
        }
    }

    /// Run one generation against the context.
    pub fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        match self {
            Self::Family(f) => f.generate(ctx),
            Self::Placeholder(p) => Ok(p.generate(ctx)),
        }
    }
}
