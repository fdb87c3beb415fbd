pub mod explainer;
pub mod pricing;
pub mod validation;

pub use explainer::*;
pub use pricing::*;
pub use validation::*;
