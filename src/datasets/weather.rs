//! The 14-day "play tennis" weather data commonly used to illustrate ID3.

use crate::core::{Attribute, AttributeRef, Sample, SampleSet};
use crate::error::Result;

pub const CLASSES: [&str; 2] = ["yes", "no"];

const ROWS: [(&str, [&str; 4]); 14] = [
    ("no", ["sunny", "hot", "high", "weak"]),
    ("no", ["sunny", "hot", "high", "strong"]),
    ("yes", ["overcast", "hot", "high", "weak"]),
    ("yes", ["rain", "mild", "high", "weak"]),
    ("yes", ["rain", "cool", "normal", "weak"]),
    ("no", ["rain", "cool", "normal", "strong"]),
    ("yes", ["overcast", "cool", "normal", "strong"]),
    ("no", ["sunny", "mild", "high", "weak"]),
    ("yes", ["sunny", "cool", "normal", "weak"]),
    ("yes", ["rain", "mild", "normal", "weak"]),
    ("yes", ["sunny", "mild", "normal", "strong"]),
    ("yes", ["overcast", "mild", "high", "strong"]),
    ("yes", ["overcast", "hot", "normal", "weak"]),
    ("no", ["rain", "mild", "high", "strong"]),
];

pub fn play_tennis_attributes() -> Result<Vec<AttributeRef>> {
    Ok(vec![
        Attribute::new("outlook", ["sunny", "overcast", "rain"])?.into_ref(),
        Attribute::new("temp", ["hot", "mild", "cool"])?.into_ref(),
        Attribute::new("humidity", ["high", "normal"])?.into_ref(),
        Attribute::new("wind", ["weak", "strong"])?.into_ref(),
    ])
}

/// The fourteen days, D1 to D14, in order.
pub fn play_tennis_samples() -> Vec<Sample> {
    ROWS.iter()
        .map(|(result, values)| Sample::new(*result, *values))
        .collect()
}

pub fn play_tennis() -> Result<SampleSet> {
    SampleSet::with_samples(play_tennis_attributes()?, CLASSES, play_tennis_samples())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_yes_five_no() {
        let set = play_tennis().unwrap();
        assert_eq!(set.number_of_attributes(), 4);
        assert_eq!(set.number_of_classes(), 2);
        assert_eq!(set.class_distribution(), vec![9, 5]);
    }

    #[test]
    fn samples_are_fresh_each_call() {
        let mut a = play_tennis().unwrap();
        let b = play_tennis().unwrap();
        a.add_sample(Sample::new("yes", ["rain", "cool", "high", "weak"]))
            .unwrap();
        assert_eq!(a.len(), 15);
        assert_eq!(b.len(), 14);
    }
}
