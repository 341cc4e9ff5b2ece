use std::collections::{HashMap, hash_map};

/// Maps identifiers to their last assigned value.
///
/// One store belongs to one interpreter and lives as long as it does. Values
/// persist across lines and are only dropped by an explicit [`clear`].
///
/// [`clear`]: VariableStore::clear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    variables: HashMap<String, f64>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    ///
    /// Lookup is by presence: a variable holding `0` (or `NaN`) is still
    /// defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the variable names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.variables.iter()
    }
}

impl<'a> IntoIterator for &'a VariableStore {
    type IntoIter = hash_map::Iter<'a, String, f64>;
    type Item = (&'a String, &'a f64);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
