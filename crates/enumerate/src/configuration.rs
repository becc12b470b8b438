use indexmap::IndexMap;

use incrementator_core::AxisSpec;

/// Named axes in enumeration order.
///
/// The first axis inserted is the outermost (slowest-varying) and the last is
/// the innermost (fastest-varying).
/// Inserting a name that already exists replaces its spec but keeps its
/// original position.
///
/// # Examples
///
/// ```
/// use incrementator::{AxisSpec, Configuration};
///
/// let config = Configuration::new()
///     .with_axis("x", AxisSpec::new(0.0, 2.0, 1.0))
///     .with_axis("y", AxisSpec::new(5.0, 3.0, -0.5));
///
/// assert_eq!(config.names().collect::<Vec<_>>(), ["x", "y"]);
/// ```
#[derive(Debug, Default)]
pub struct Configuration {
    axes: IndexMap<String, AxisSpec>,
}

impl Configuration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an axis and returns the configuration, for chained construction.
    #[must_use]
    pub fn with_axis(mut self, name: impl Into<String>, spec: AxisSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Adds an axis, returning the spec it replaced if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, spec: AxisSpec) -> Option<AxisSpec> {
        self.axes.insert(name.into(), spec)
    }

    /// Returns the spec of the named axis, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AxisSpec> {
        self.axes.get(name)
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns `true` if no axes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Returns the axis names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    /// Returns the axes in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisSpec)> {
        self.axes.iter().map(|(name, spec)| (name.as_str(), spec))
    }
}

impl<K: Into<String>> FromIterator<(K, AxisSpec)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, AxisSpec)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (name, spec) in iter {
            config.insert(name, spec);
        }
        config
    }
}
