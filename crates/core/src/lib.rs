#![forbid(unsafe_code)]

pub mod model;
pub mod random;
pub mod rank;
pub mod shuffle;

pub use random::RandomSource;
pub use rank::{RankResult, RankTier, rank};
