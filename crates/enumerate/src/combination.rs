use std::{ops::Index, sync::Arc};

use indexmap::IndexMap;

/// One point in the product of all axis sequences.
///
/// Values are stored in configuration order and owned by each combination,
/// so changing one never affects another.
/// Axis names are shared between every combination of an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    names: Arc<[String]>,
    values: Vec<f64>,
}

impl Combination {
    /// Pairs shared names with this combination's values.
    pub(crate) fn new(names: Arc<[String]>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// Returns the value of the named axis, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.position(name).map(|index| self.values[index])
    }

    /// Overwrites the value of the named axis, returning the previous value.
    ///
    /// Returns `None` and changes nothing if the axis does not exist.
    pub fn set(&mut self, name: &str, value: f64) -> Option<f64> {
        let index = self.position(name)?;
        Some(std::mem::replace(&mut self.values[index], value))
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the combination has no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the axis names in configuration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the values in configuration order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns `(name, value)` pairs in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Copies the combination into an ordered map.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, f64> {
        self.iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl Index<&str> for Combination {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if no axis has the given name.
    fn index(&self, name: &str) -> &f64 {
        match self.position(name) {
            Some(index) => &self.values[index],
            None => panic!("no axis named `{name}`"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Combination {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
