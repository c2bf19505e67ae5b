pub mod kappa;
pub mod pairs;
pub mod proportions;

pub use kappa::cohen_kappa;
pub use pairs::{analyze_pairs, enumerate_pairs, join_on_text, pair_reliability};
pub use proportions::summarize_proportions;
