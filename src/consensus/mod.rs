//! Consensus arithmetic: constants, compact-bits PoW, subsidy schedule,
//! and version-bits signaling. No I/O, no locks, pure functions over
//! plain data.

pub mod params;
pub mod pow;
pub mod subsidy;
pub mod version_bits;

pub use params::{Amount, COIN, MAX_MONEY};
pub use pow::{from_compact, hash_to_uint, to_compact, verify_pow, verify_pow_for, HasPowVersion};
pub use subsidy::get_block_subsidy;
pub use version_bits::has_bit;
