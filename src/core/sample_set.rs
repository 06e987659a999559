use crate::core::attribute::{Attribute, AttributeRef};
use crate::core::attribute_id::AttributeId;
use crate::core::sample::Sample;
use crate::error::{EntropyError, Result};
use crate::measures::information_from_counts;
use crate::ui::table;
use log::{debug, trace};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Samples sharing one declared value of an attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub value: String,
    pub count: usize,
    /// Class-label counts, in declared class order.
    pub class_distribution: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttributeGain {
    pub attribute: String,
    pub gain: f64,
}

/// A sample resolved to positions in the schema.
#[derive(Clone, Debug)]
struct EncodedSample {
    class: usize,
    values: Vec<usize>,
}

/// A labeled categorical dataset and the entropy/gain statistics over it.
///
/// Every sample is checked against the attribute schema and the class set
/// when it is added, so the computations never meet a non-conformant row.
/// Each set owns its own sample storage.
pub struct SampleSet {
    attributes: Vec<AttributeRef>,
    classes: Vec<String>,
    class_to_index: HashMap<String, usize>,
    samples: Vec<Sample>,
    encoded: Vec<EncodedSample>,
}

impl SampleSet {
    /// Creates an empty set over the given schema.
    pub fn new<I, C>(attributes: Vec<AttributeRef>, classes: I) -> Result<SampleSet>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let mut names = HashSet::with_capacity(attributes.len());
        for attr in &attributes {
            if !names.insert(attr.name()) {
                return Err(EntropyError::schema_violation(format!(
                    "attribute '{}' declared more than once",
                    attr.name()
                )));
            }
        }

        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(EntropyError::schema_violation("no class labels declared"));
        }
        let mut class_to_index = HashMap::with_capacity(classes.len());
        for (i, c) in classes.iter().enumerate() {
            if class_to_index.insert(c.clone(), i).is_some() {
                return Err(EntropyError::schema_violation(format!(
                    "class '{c}' declared more than once"
                )));
            }
        }

        Ok(SampleSet {
            attributes,
            classes,
            class_to_index,
            samples: Vec::new(),
            encoded: Vec::new(),
        })
    }

    /// Creates a set and appends `samples` in order. Fails on the first
    /// sample that does not conform to the schema.
    pub fn with_samples<I, C, S>(
        attributes: Vec<AttributeRef>,
        classes: I,
        samples: S,
    ) -> Result<SampleSet>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
        S: IntoIterator<Item = Sample>,
    {
        let mut set = SampleSet::new(attributes, classes)?;
        for sample in samples {
            set.add_sample(sample)?;
        }
        Ok(set)
    }

    pub fn add_sample(&mut self, sample: Sample) -> Result<()> {
        let encoded = self.encode(&sample)?;
        debug!(
            "sample #{} added: {:?} -> {}",
            self.samples.len() + 1,
            sample.values(),
            sample.result()
        );
        self.samples.push(sample);
        self.encoded.push(encoded);
        Ok(())
    }

    fn encode(&self, sample: &Sample) -> Result<EncodedSample> {
        if sample.values().len() != self.attributes.len() {
            return Err(EntropyError::schema_violation(format!(
                "sample has {} values but the set declares {} attributes",
                sample.values().len(),
                self.attributes.len()
            )));
        }

        let mut values = Vec::with_capacity(self.attributes.len());
        for (attr, raw) in self.attributes.iter().zip(sample.values()) {
            let Some(pos) = attr.index_of_value(raw) else {
                return Err(EntropyError::schema_violation(format!(
                    "value '{raw}' not in domain of attribute '{}'",
                    attr.name()
                )));
            };
            values.push(pos);
        }

        let Some(&class) = self.class_to_index.get(sample.result()) else {
            return Err(EntropyError::schema_violation(format!(
                "class '{}' is not a declared class",
                sample.result()
            )));
        };

        Ok(EncodedSample { class, values })
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index).map(|a| a.as_ref())
    }

    /// Zero-based position of the attribute called `name`.
    pub fn index_of_attribute(&self, name: &str) -> Result<usize> {
        for (i, attr) in self.attributes.iter().enumerate() {
            if attr.name() == name {
                return Ok(i);
            }
        }
        Err(EntropyError::attribute_not_found(name))
    }

    fn resolve(&self, id: AttributeId<'_>) -> Result<usize> {
        match id {
            AttributeId::ByName(name) => self.index_of_attribute(name),
            AttributeId::ByIndex(index) if index < self.attributes.len() => Ok(index),
            AttributeId::ByIndex(index) => Err(EntropyError::IndexOutOfRange {
                index,
                len: self.attributes.len(),
            }),
        }
    }

    fn resolve_value(&self, attr_index: usize, value: &str) -> Result<usize> {
        let attr = &self.attributes[attr_index];
        attr.index_of_value(value).ok_or_else(|| {
            EntropyError::schema_violation(format!(
                "value '{value}' not in domain of attribute '{}'",
                attr.name()
            ))
        })
    }

    fn matching(
        &self,
        attr_index: usize,
        value_index: usize,
    ) -> impl Iterator<Item = &EncodedSample> {
        self.encoded
            .iter()
            .filter(move |s| s.values[attr_index] == value_index)
    }

    fn count_classes<'a>(&self, samples: impl Iterator<Item = &'a EncodedSample>) -> Vec<usize> {
        let mut dist = vec![0usize; self.classes.len()];
        for s in samples {
            dist[s.class] += 1;
        }
        dist
    }

    /// Class-label counts over all samples, in declared class order.
    pub fn class_distribution(&self) -> Vec<usize> {
        self.count_classes(self.encoded.iter())
    }

    /// Entropy of the class-label distribution over every sample.
    pub fn entropy(&self) -> Result<f64> {
        if self.samples.is_empty() {
            return Err(EntropyError::empty_population(
                "entropy of a sample set with no samples",
            ));
        }
        let entropy = information_from_counts(&self.class_distribution())?;
        debug!("entropy over {} samples = {entropy}", self.samples.len());
        Ok(entropy)
    }

    /// Entropy of the class labels among samples whose `attribute` equals
    /// `value`. The attribute may be named or given by position.
    pub fn attribute_entropy<'a, A>(&self, attribute: A, value: &str) -> Result<f64>
    where
        A: Into<AttributeId<'a>>,
    {
        let index = self.resolve(attribute.into())?;
        let value_index = self.resolve_value(index, value)?;
        self.subset_entropy(index, value_index)
    }

    fn subset_entropy(&self, attr_index: usize, value_index: usize) -> Result<f64> {
        let dist = self.count_classes(self.matching(attr_index, value_index));
        let attr = &self.attributes[attr_index];
        let value = &attr.values()[value_index];
        if dist.iter().all(|&c| c == 0) {
            return Err(EntropyError::empty_population(format!(
                "no samples with {} = {value}",
                attr.name()
            )));
        }
        let entropy = information_from_counts(&dist)?;
        trace!("{} = {value}: {dist:?} -> {entropy}", attr.name());
        Ok(entropy)
    }

    /// Expected reduction in entropy from splitting every sample on the
    /// attribute called `attribute`.
    ///
    /// Declared values with no samples carry zero weight and are skipped.
    pub fn gain(&self, attribute: &str) -> Result<f64> {
        let index = self.index_of_attribute(attribute)?;
        self.gain_at(index)
    }

    fn gain_at(&self, index: usize) -> Result<f64> {
        let mut gain = self.entropy()?;
        let total = self.samples.len() as f64;
        let attr = &self.attributes[index];

        let mut counts = vec![0usize; attr.number_of_values()];
        for s in &self.encoded {
            counts[s.values[index]] += 1;
        }

        for (value_index, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            gain -= (count as f64 / total) * self.subset_entropy(index, value_index)?;
        }

        debug!("gain({}) = {gain}", attr.name());
        Ok(gain)
    }

    /// Gain of splitting the samples where `attr1 == value` further on
    /// `attr2`, measured against the entropy of that subset.
    pub fn attribute_gain<'a, 'b, A, B>(&self, attr1: A, value: &str, attr2: B) -> Result<f64>
    where
        A: Into<AttributeId<'a>>,
        B: Into<AttributeId<'b>>,
    {
        let i1 = self.resolve(attr1.into())?;
        let v1 = self.resolve_value(i1, value)?;
        let i2 = self.resolve(attr2.into())?;

        let base = self.subset_entropy(i1, v1)?;

        let mut dists =
            vec![vec![0usize; self.classes.len()]; self.attributes[i2].number_of_values()];
        let mut subset_size = 0usize;
        for s in self.matching(i1, v1) {
            dists[s.values[i2]][s.class] += 1;
            subset_size += 1;
        }

        let mut result = base;
        for dist in &dists {
            let size: usize = dist.iter().sum();
            if size == 0 {
                continue;
            }
            result -= (size as f64 / subset_size as f64) * information_from_counts(dist)?;
        }

        debug!(
            "attribute_gain({} = {value}, {}) = {result}",
            self.attributes[i1].name(),
            self.attributes[i2].name()
        );
        Ok(result)
    }

    /// Gain of every attribute, in schema order.
    pub fn gains(&self) -> Result<Vec<AttributeGain>> {
        (0..self.attributes.len())
            .map(|i| {
                Ok(AttributeGain {
                    attribute: self.attributes[i].name().to_string(),
                    gain: self.gain_at(i)?,
                })
            })
            .collect()
    }

    /// The attribute with the highest gain; the earliest declared wins ties.
    /// `None` when the schema has no attributes.
    pub fn best_attribute(&self) -> Result<Option<AttributeGain>> {
        let mut best: Option<AttributeGain> = None;
        for candidate in self.gains()? {
            if best.as_ref().is_none_or(|b| candidate.gain > b.gain) {
                best = Some(candidate);
            }
        }
        Ok(best)
    }

    /// Per-value breakdown of an attribute, in declared value order.
    pub fn partition_counts<'a, A>(&self, attribute: A) -> Result<Vec<Partition>>
    where
        A: Into<AttributeId<'a>>,
    {
        let index = self.resolve(attribute.into())?;
        let partitions = self.attributes[index]
            .enumerate_values()
            .map(|(value_index, value)| {
                let class_distribution = self.count_classes(self.matching(index, value_index));
                Partition {
                    value: value.clone(),
                    count: class_distribution.iter().sum(),
                    class_distribution,
                }
            })
            .collect();
        Ok(partitions)
    }

    /// `#`, each attribute name, then `class`.
    pub fn header_row(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.attributes.len() + 2);
        header.push("#".to_string());
        header.extend(self.attributes.iter().map(|a| a.name().to_string()));
        header.push("class".to_string());
        header
    }

    /// One row per sample, in insertion order, numbered from 1.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut row = Vec::with_capacity(s.values().len() + 2);
                row.push((i + 1).to_string());
                row.extend(s.values().iter().cloned());
                row.push(s.result().to_string());
                row
            })
            .collect()
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&table::render(&self.header_row(), &self.rows()))
    }
}

impl fmt::Debug for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleSet")
            .field(
                "attributes",
                &self.attributes.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("classes", &self.classes)
            .field("n_samples", &self.samples.len())
            .finish()
    }
}
