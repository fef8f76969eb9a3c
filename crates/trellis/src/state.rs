use std::{any::type_name, fmt};

/// A node name: the identification string the caller supplied, stored as
/// given. Names are not required to be unique; lookups return the first
/// match in tree order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeName(String);

impl NodeName {
    /// Wrap a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Default name for a type: the last segment of its path, lowercased.
    pub fn of_type<T: ?Sized>() -> Self {
        let full = type_name::<T>();
        let short = full.rsplit("::").next().unwrap_or(full);
        Self(short.to_ascii_lowercase())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NodeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Blank, Solid};

    #[test]
    fn stored_as_given() {
        assert_eq!(NodeName::new("OK Button"), "OK Button");
        assert_eq!(NodeName::from("side-panel").to_string(), "side-panel");
        assert_eq!(NodeName::from(String::from("")).as_str(), "");
    }

    #[test]
    fn type_defaults() {
        assert_eq!(NodeName::of_type::<Solid>(), "solid");
        assert_eq!(NodeName::of_type::<Blank>(), "blank");
        assert_eq!(NodeName::of_type::<u32>(), "u32");
    }
}
