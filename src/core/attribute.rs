use crate::error::{EntropyError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type AttributeRef = Arc<Attribute>;

/// A named categorical feature with a fixed, ordered set of legal values.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: String,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl Attribute {
    /// Builds an attribute, rejecting an empty or repeated value list.
    pub fn new<N, I, V>(name: N, values: I) -> Result<Attribute>
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(EntropyError::schema_violation(format!(
                "attribute '{name}' declares no values"
            )));
        }

        let mut label_to_index = HashMap::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            if label_to_index.insert(v.clone(), i).is_some() {
                return Err(EntropyError::schema_violation(format!(
                    "attribute '{name}' declares value '{v}' more than once"
                )));
            }
        }

        Ok(Attribute {
            name,
            values,
            label_to_index,
        })
    }

    pub fn into_ref(self) -> AttributeRef {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, v: &str) -> Option<usize> {
        self.label_to_index.get(v).copied()
    }

    pub fn contains(&self, v: &str) -> bool {
        self.label_to_index.contains_key(v)
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {{{}}}", self.name, self.values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_declared_order() {
        let a = Attribute::new("outlook", ["sunny", "overcast", "rain"]).unwrap();
        assert_eq!(a.name(), "outlook");
        assert_eq!(a.values(), &["sunny", "overcast", "rain"]);
        assert_eq!(a.index_of_value("rain"), Some(2));
        assert_eq!(a.index_of_value("snow"), None);
        assert!(a.contains("overcast"));
        assert_eq!(a.number_of_values(), 3);
    }

    #[test]
    fn empty_value_list_is_rejected() {
        let err = Attribute::new("wind", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, EntropyError::SchemaViolation { .. }));
    }

    #[test]
    fn repeated_value_is_rejected() {
        let err = Attribute::new("wind", ["weak", "strong", "weak"]).unwrap_err();
        assert!(matches!(err, EntropyError::SchemaViolation { .. }));
    }

    #[test]
    fn display_lists_values() {
        let a = Attribute::new("humidity", ["high", "normal"]).unwrap();
        assert_eq!(a.to_string(), "humidity: {high, normal}");
    }
}
