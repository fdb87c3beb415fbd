pub mod breakdown;
pub mod discount;
pub mod money;
pub mod seat;
pub mod tier;

pub use breakdown::*;
pub use discount::*;
pub use money::*;
pub use seat::*;
pub use tier::*;
