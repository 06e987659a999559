pub mod information;

pub use information::{information, information_from_counts};
