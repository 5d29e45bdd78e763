//! Indicator checkbox selection

use std::collections::HashSet;

/// Set of checked indicators over a canonical, ordered list of choices
///
/// The canonical list only drives rendering and ordering; membership lives
/// in the set, so toggling a name outside the list is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSelection {
    available: Vec<String>,
    checked: HashSet<String>,
    /// Checked names that are not in `available`, in the order they were added
    extra: Vec<String>,
}

impl IndicatorSelection {
    /// Every available indicator starts checked
    pub fn all(available: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut list: Vec<String> = Vec::new();
        for name in available {
            let name = name.into();
            if !list.contains(&name) {
                list.push(name);
            }
        }
        let checked = list.iter().cloned().collect();

        Self {
            available: list,
            checked,
            extra: Vec::new(),
        }
    }

    /// Uncheck `name` if checked, check it otherwise
    pub fn toggle(&mut self, name: &str) {
        if self.checked.remove(name) {
            self.extra.retain(|n| n != name);
        } else {
            self.checked.insert(name.to_string());
            if !self.available.iter().any(|n| n == name) {
                self.extra.push(name.to_string());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checked.contains(name)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// The canonical list of choices
    pub fn available(&self) -> &[String] {
        &self.available
    }

    /// Checked names, canonical order first
    pub fn selected(&self) -> Vec<String> {
        self.available
            .iter()
            .filter(|name| self.checked.contains(*name))
            .chain(self.extra.iter())
            .cloned()
            .collect()
    }

    /// `(name, checked)` for every canonical choice
    pub fn checkboxes(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.available
            .iter()
            .map(|name| (name.as_str(), self.checked.contains(name)))
    }
}
