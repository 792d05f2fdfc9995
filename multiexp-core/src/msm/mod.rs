use crate::group::MultiExpGroup;

pub mod bos_coster;
pub mod chunked;
pub mod config;
pub mod fixed_base;
pub mod naive;

pub use bos_coster::multi_exp_inner;
pub use chunked::{chunk_ranges, multi_exp, multi_exp_with_mixed_addition};
pub use config::{MultiExpConfig, MultiExpMethod};
pub use fixed_base::{
    batch_exp, batch_exp_with_coeff, exp_window_size, exp_window_size_for, fixed_base_exp,
    get_window_table, window_size_from_table, windowed_exp, WindowTable, MAX_EXP_WINDOW,
};
pub use naive::{naive_exp, naive_plain_exp, plain_scalar_mul, scalar_mul};

/// Which addition an accumulator may use when the right-hand side is
/// special.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdditionMode {
    /// Always the generic `+`.
    Plain,
    /// [`MultiExpGroup::mixed_add`] whenever the right-hand side is special.
    Mixed,
}

impl AdditionMode {
    #[inline]
    pub fn add<G: MultiExpGroup>(self, lhs: &G, rhs: &G) -> G {
        match self {
            AdditionMode::Mixed if rhs.is_special() => lhs.mixed_add(rhs),
            _ => *lhs + *rhs,
        }
    }
}
