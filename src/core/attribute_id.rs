use std::fmt;

/// Identifies an attribute of a sample set either by name or by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeId<'a> {
    ByName(&'a str),
    ByIndex(usize),
}

impl<'a> From<&'a str> for AttributeId<'a> {
    fn from(name: &'a str) -> Self {
        AttributeId::ByName(name)
    }
}

impl<'a> From<&'a String> for AttributeId<'a> {
    fn from(name: &'a String) -> Self {
        AttributeId::ByName(name.as_str())
    }
}

impl From<usize> for AttributeId<'_> {
    fn from(index: usize) -> Self {
        AttributeId::ByIndex(index)
    }
}

impl fmt::Display for AttributeId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeId::ByName(name) => write!(f, "'{name}'"),
            AttributeId::ByIndex(index) => write!(f, "#{index}"),
        }
    }
}
