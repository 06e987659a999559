//! Shannon entropy and information gain over labeled categorical data.
//!
//! ```
//! use infogain::core::{Attribute, Sample, SampleSet};
//!
//! let wind = Attribute::new("wind", ["weak", "strong"])?.into_ref();
//! let mut set = SampleSet::new(vec![wind], ["yes", "no"])?;
//! set.add_sample(Sample::new("yes", ["weak"]))?;
//! set.add_sample(Sample::new("no", ["strong"]))?;
//!
//! assert_eq!(set.entropy()?, 1.0);
//! assert_eq!(set.gain("wind")?, 1.0);
//! # Ok::<(), infogain::error::EntropyError>(())
//! ```

pub mod core;
pub mod datasets;
pub mod error;
pub mod measures;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{Attribute, AttributeId, AttributeRef, Sample, SampleSet};
pub use crate::error::{EntropyError, Result};
pub use crate::measures::{information, information_from_counts};
