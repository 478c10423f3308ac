//! Normalized column arguments.
//!
//! Steps accept either a single column name or a list of names. Both forms are
//! converted into a [`ColumnSelection`] at construction time so that transform
//! bodies always iterate an ordered list.

use std::fmt;

/// Ordered list of column names targeted by a step.
///
/// # Examples
///
/// ```
/// use tabstep_transform::ColumnSelection;
///
/// let single = ColumnSelection::from("AGE");
/// let many = ColumnSelection::from(["AGE", "SEX"]);
///
/// assert_eq!(single.as_slice(), ["AGE"]);
/// assert_eq!(many.len(), 2);
/// assert_eq!(many.to_string(), "AGE, SEX");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSelection(Vec<String>);

impl ColumnSelection {
    /// Build a selection from any list of names, keeping their order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty selection turns every step using it into a no-op.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for ColumnSelection {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for ColumnSelection {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<&String> for ColumnSelection {
    fn from(name: &String) -> Self {
        Self(vec![name.clone()])
    }
}

impl From<Vec<String>> for ColumnSelection {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for ColumnSelection {
    fn from(names: Vec<&str>) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for ColumnSelection {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for ColumnSelection {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}

impl<'a> IntoIterator for &'a ColumnSelection {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.0.iter().map(as_str)
    }
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_list_forms_normalize_to_lists() {
        assert_eq!(ColumnSelection::from("a"), ColumnSelection::from(vec!["a"]));
        assert_eq!(
            ColumnSelection::from(vec!["a".to_string(), "b".to_string()]),
            ColumnSelection::from(["a", "b"])
        );
    }

    #[test]
    fn iteration_keeps_order() {
        let selection = ColumnSelection::from(["c", "a", "b"]);
        let names: Vec<&str> = (&selection).into_iter().collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert_eq!(selection.iter().count(), 3);
    }

    #[test]
    fn empty_selection() {
        let selection = ColumnSelection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.to_string(), "");
    }
}
