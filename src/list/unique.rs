use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::mem;

/// An insert-ordered list of strings which never holds the same string twice.
///
/// Operations follow the semantics of the free functions in this module: items are compared
/// exactly and new items are always appended at the end.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct UniqueList {
    items: Vec<String>,
}

impl UniqueList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Parses a YAML sequence of strings, dropping duplicates.
    ///
    /// Entries must be YAML strings. Numbers, booleans and nulls aren't converted to strings but
    /// rejected, so quote them if they're meant as strings.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let values: Vec<serde_yaml::Value> =
            serde_yaml::from_str(yaml).context("Failed to parse YAML string list")?;
        let mut res = Self::with_capacity(values.len());
        for (i, v) in values.into_iter().enumerate() {
            match v {
                serde_yaml::Value::String(s) => res.append_if_new(s),
                other => {
                    return Err(anyhow!(
                        "Entry {i} of YAML string list isn't a string: {other:?}"
                    ));
                }
            }
        }
        Ok(res)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    pub fn items_iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }

    /// Appends item to list if it's not present yet
    pub fn append_if_new(&mut self, item: String) {
        if !self.contains(&item) {
            self.items.push(item);
        }
    }

    /// Removes item from the list. Returns whether the item was present.
    pub fn remove(&mut self, item: &str) -> bool {
        let len = self.items.len();
        let items = mem::take(&mut self.items);
        self.items = super::remove(Some(items), item).unwrap_or_default();
        self.items.len() != len
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        super::has(Some(self.items.as_slice()), item)
    }

    /// Keeps only the items for which `keep` returns `true`
    pub fn retain(&mut self, keep: impl FnMut(&str) -> bool) {
        let items = mem::take(&mut self.items);
        self.items = super::filter(Some(items), keep).unwrap_or_default();
    }

    /// Merges other into self, consuming other
    pub fn merge(&mut self, other: Self) {
        self.merge_impl(other.items.into_iter());
    }

    /// Merges other into self, creating a clone of other
    pub fn merge_from(&mut self, other: &Self) {
        self.merge_impl(other.items.iter().cloned());
    }

    fn merge_impl(&mut self, itemiter: impl Iterator<Item = String>) {
        for it in itemiter {
            self.append_if_new(it);
        }
    }
}

impl From<Vec<String>> for UniqueList {
    #[inline]
    fn from(item: Vec<String>) -> Self {
        let mut res = Self::with_capacity(item.len());
        res.merge_impl(item.into_iter());
        res
    }
}

impl From<UniqueList> for Vec<String> {
    #[inline]
    fn from(l: UniqueList) -> Self {
        l.items
    }
}

impl FromIterator<String> for UniqueList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut res = Self::new();
        res.merge_impl(iter.into_iter());
        res
    }
}
