use std::collections::BTreeMap;
use crate::error::InvalidExpression;

/// User variables, a capital letter bound to a raw expression.
///
/// Values are only validated when an expression refers to them, so a
/// definition may mention variables that don't exist yet.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Variables(BTreeMap<char, String>);

impl Variables {
    pub fn new() -> Variables {
        Variables(BTreeMap::new())
    }

    pub fn is_valid_name(name: char) -> bool {
        name.is_ascii_uppercase()
    }

    pub fn get(&self, name: char) -> Option<&str> {
        self.0.get(&name).map(|value| value.as_str())
    }

    pub fn contains(&self, name: char) -> bool {
        self.0.contains_key(&name)
    }

    /// Bind `name` to `value`, returning the value it replaces.
    pub fn set(&mut self, name: char, value: impl Into<String>) -> Result<Option<String>, InvalidExpression> {
        if !Self::is_valid_name(name) {
            return Err(InvalidExpression::InvalidVariableName(name.to_string()));
        }
        Ok(self.0.insert(name, value.into()))
    }

    pub fn remove(&mut self, name: char) -> Option<String> {
        self.0.remove(&name)
    }

    // sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<S: Into<String>> FromIterator<(char, S)> for Variables {
    // invalid names are dropped
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Variables(iter.into_iter()
            .filter(|(name, _)| Self::is_valid_name(*name))
            .map(|(name, value)| (name, value.into()))
            .collect())
    }
}

///////////////////////////////////////////////////////////////////////////////
