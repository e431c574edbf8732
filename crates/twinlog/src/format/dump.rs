//! Verbose value dumps for DEBUG lines

use std::any::type_name;
use std::fmt::{self, Debug};

/// Multi-value diagnostic dump
///
/// Each value is rendered as `(<type>) <pretty Debug>`, one per line, with
/// nested structures fully expanded.
///
/// # Example
///
/// ```
/// use twinlog::Dump;
///
/// let dump = Dump::new().value(&vec![1, 2]).value("hi");
/// let text = dump.to_string();
/// assert!(text.contains("Vec<i32>) ["));
/// assert!(text.contains("(str) \"hi\""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dump {
    entries: Vec<String>,
}

impl Dump {
    /// Empty dump
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value
    pub fn value<T: Debug + ?Sized>(mut self, value: &T) -> Self {
        self.push(value);
        self
    }

    /// Append a value in place
    pub fn push<T: Debug + ?Sized>(&mut self, value: &T) {
        self.entries
            .push(format!("({}) {:#?}", type_name::<T>(), value));
    }

    /// Number of values in the dump
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dump has no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
