pub mod attribute;
pub mod attribute_id;
pub mod sample;
pub mod sample_set;

pub use attribute::{Attribute, AttributeRef};
pub use attribute_id::AttributeId;
pub use sample::Sample;
pub use sample_set::{AttributeGain, Partition, SampleSet};
