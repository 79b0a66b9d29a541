//! Inline `style` attribute maps.
//!
//! An SVG `style` attribute is a `;`-separated list of `property:value`
//! declarations. [`Style`] keeps them in source order so writing a style back
//! changes only the declarations that were touched.
//!
//! # Example
//!
//! ```
//! use printsafe_svg::Style;
//!
//! let mut style = Style::parse("fill:#FF0000; stroke : none");
//! assert_eq!(style.get("stroke"), Some("none"));
//!
//! style.set("stroke", "#FF00FF");
//! style.set("stroke-width", "6px");
//! assert_eq!(style.to_string(), "fill:#FF0000;stroke:#FF00FF;stroke-width:6px");
//! ```

use indexmap::IndexMap;
use std::fmt;

/// Ordered mapping from CSS property name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    props: IndexMap<String, String>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `style` attribute value.
    ///
    /// Declarations without a `:` or with an empty name are dropped. A
    /// property declared twice keeps its first position and its last value.
    pub fn parse(s: &str) -> Self {
        let mut props = IndexMap::new();
        for decl in s.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            props.insert(name.to_string(), value.trim().to_string());
        }
        Self { props }
    }

    /// Value of `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// `true` if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Sets `name`, keeping its position if already declared.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    /// Removes `name`, keeping the order of the remaining declarations.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.props.shift_remove(name)
    }

    /// `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.props.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{k}:{v}")?;
        }
        Ok(())
    }
}
