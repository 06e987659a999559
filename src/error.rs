use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntropyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntropyError {
    /// Lookup by name found no declared attribute.
    #[error("'{name}' is not an attribute")]
    AttributeNotFound { name: String },

    /// Positional lookup past the end of the attribute list.
    #[error("attribute index {index} out of range ({len} attributes)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A computation was asked to summarize zero samples.
    #[error("empty population: {context}")]
    EmptyPopulation { context: String },

    /// A schema, sample or query value does not conform to the declared schema.
    #[error("schema violation: {reason}")]
    SchemaViolation { reason: String },
}

impl EntropyError {
    pub fn attribute_not_found<S: Into<String>>(name: S) -> Self {
        EntropyError::AttributeNotFound { name: name.into() }
    }

    pub fn empty_population<S: Into<String>>(context: S) -> Self {
        EntropyError::EmptyPopulation {
            context: context.into(),
        }
    }

    pub fn schema_violation<S: Into<String>>(reason: S) -> Self {
        EntropyError::SchemaViolation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_not_found_message_names_attribute() {
        let err = EntropyError::attribute_not_found("colour");
        assert_eq!(err.to_string(), "'colour' is not an attribute");
    }

    #[test]
    fn constructors_pick_distinct_kinds() {
        assert!(matches!(
            EntropyError::empty_population("x"),
            EntropyError::EmptyPopulation { .. }
        ));
        assert!(matches!(
            EntropyError::schema_violation("x"),
            EntropyError::SchemaViolation { .. }
        ));
    }
}
