use crate::core::{Attribute, Sample, SampleSet};

/// One attribute `bucket` with the single value `all`, and one class per
/// `(label, count)` pair holding `count` samples.
pub fn single_attribute_set(class_counts: &[(&str, usize)]) -> SampleSet {
    let bucket = Attribute::new("bucket", ["all"])
        .expect("valid attribute")
        .into_ref();
    let classes = class_counts.iter().map(|(label, _)| *label);
    let samples = class_counts
        .iter()
        .flat_map(|(label, count)| (0..*count).map(move |_| Sample::new(*label, ["all"])));
    SampleSet::with_samples(vec![bucket], classes, samples).expect("conformant samples")
}

/// `k` classes named `c0..c{k-1}`, each holding `per_class` samples.
pub fn uniform_set(k: usize, per_class: usize) -> SampleSet {
    let labels: Vec<String> = (0..k).map(|i| format!("c{i}")).collect();
    let counts: Vec<(&str, usize)> = labels.iter().map(|l| (l.as_str(), per_class)).collect();
    single_attribute_set(&counts)
}
