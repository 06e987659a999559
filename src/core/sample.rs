/// One labeled observation: a class label plus one value per attribute,
/// positionally aligned with the owning set's attribute list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    result: String,
    values: Vec<String>,
}

impl Sample {
    pub fn new<R, I, V>(result: R, values: I) -> Sample
    where
        R: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Sample {
            result: result.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value_at_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_index_is_positional() {
        let s = Sample::new("no", ["sunny", "hot", "high", "weak"]);
        assert_eq!(s.result(), "no");
        assert_eq!(s.value_at_index(2), Some("high"));
        assert_eq!(s.value_at_index(4), None);
        assert_eq!(s.values().len(), 4);
    }
}
