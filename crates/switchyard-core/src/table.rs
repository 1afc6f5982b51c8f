// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered name-to-descriptor table.

use std::collections::HashMap;

use crate::types::ComponentDescriptor;

/// Components keyed by unique name, iterated in first-registration order.
///
/// Upserting an existing name replaces its descriptor without moving it.
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    entries: Vec<(String, ComponentDescriptor)>,
    index: HashMap<String, usize>,
}

impl ComponentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous descriptor, if any.
    pub fn upsert(
        &mut self,
        name: impl Into<String>,
        descriptor: ComponentDescriptor,
    ) -> Option<ComponentDescriptor> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, descriptor)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, descriptor));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ComponentDescriptor> {
        self.index.get(name).map(|&pos| &mut self.entries[pos].1)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentDescriptor)> {
        self.entries.iter().map(|(name, desc)| (name.as_str(), desc))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Owned copy of every entry, in registration order.
    pub fn to_vec(&self) -> Vec<(String, ComponentDescriptor)> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
