//! Frozen built-in module table and its builder.

use std::collections::HashSet;

use tracing::debug;

use crate::builtins::STANDARD_INITTAB;
use crate::entry::{InittabEntry, ModuleEntry};
use crate::error::InittabError;
use crate::module::ModuleInitFn;

/// Immutable table of built-in modules, queryable by exact name.
///
/// Built once through [`InittabBuilder`] and never mutated afterwards, so it
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Inittab {
    entries: Vec<ModuleEntry>,
}

impl Inittab {
    /// Start building a table.
    pub fn builder() -> InittabBuilder {
        InittabBuilder::new()
    }

    /// Freeze the shipped table of standard built-in modules.
    pub fn standard() -> Result<Self, InittabError> {
        Self::builder().records(STANDARD_INITTAB).build()
    }

    /// Entry for `name`, if the name is a known built-in module.
    ///
    /// A hit whose [`ModuleEntry::init`] is absent means the name is reserved
    /// and its module is constructed elsewhere; callers skip initialization
    /// for it rather than treat it as missing.
    pub fn lookup(&self, name: &str) -> Option<&ModuleEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Whether `name` is a known built-in module.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.entries.iter()
    }

    /// Module names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.name())
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`Inittab`].
///
/// Entries accumulate in insertion order: raw records first, then any
/// embedder additions. Name validation happens at [`build`](Self::build).
#[derive(Debug, Default)]
pub struct InittabBuilder {
    pending: Vec<(&'static str, Option<ModuleInitFn>)>,
}

impl InittabBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Append a raw, sentinel-terminated record slice.
    ///
    /// Scanning stops at the first sentinel; rows after it are ignored.
    pub fn records(mut self, records: &'static [InittabEntry]) -> Self {
        let rows = records
            .iter()
            .take_while(|row| !row.is_sentinel())
            .filter_map(|row| row.name.map(|name| (name, row.init)));
        self.pending.extend(rows);
        self
    }

    /// Append one module with an initializer.
    pub fn module(mut self, name: &'static str, init: ModuleInitFn) -> Self {
        debug!(module = name, "appending built-in module entry");
        self.pending.push((name, Some(init)));
        self
    }

    /// Reserve a name whose module is constructed elsewhere.
    pub fn reserved(mut self, name: &'static str) -> Self {
        debug!(module = name, "reserving built-in module name");
        self.pending.push((name, None));
        self
    }

    /// Validate names and freeze the table.
    pub fn build(self) -> Result<Inittab, InittabError> {
        let mut seen = HashSet::with_capacity(self.pending.len());
        let mut entries = Vec::with_capacity(self.pending.len());

        for (index, (name, init)) in self.pending.into_iter().enumerate() {
            if name.is_empty() {
                return Err(InittabError::EmptyName { index });
            }
            if !seen.insert(name) {
                return Err(InittabError::DuplicateName(name.to_string()));
            }
            entries.push(ModuleEntry::new(name, init));
        }

        debug!(entries = entries.len(), "froze built-in module table");
        Ok(Inittab { entries })
    }
}
