pub mod batch_inverse;
pub mod errors;
pub mod math;

pub use batch_inverse::{batch_inverse, par_batch_inverse};
