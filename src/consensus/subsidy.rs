//! Block subsidy schedule.
//!
//! The reward table below is reproduced exactly as a chain of independent
//! conditionals rather than an if/else-if ladder, matching the source's
//! control flow band for band. This matters only for the 196149-196418
//! range, where two bands overlap; see the note on `get_block_subsidy`
//! and DESIGN.md's Open Questions for why that overlap is preserved
//! rather than "fixed".

use crate::consensus::params::{Amount, COIN};

const PREMINE: Amount = 12_226_641 * COIN;

/// Returns the coinbase subsidy for `height`.
///
/// Heights 0 and 1 receive the premine. The source's precondition
/// "fails fast when height < 0" has no counterpart here: `height` is
/// unsigned, so the negative case cannot occur and is not represented.
///
/// The band `196149..=317811 -> 34` is evaluated strictly after the band
/// `121394..=196418 -> 21`. Because each band unconditionally overwrites
/// `reward` rather than short-circuiting, heights 196149-196418 fall in
/// both bands and the later one (34) wins. The table itself carries a
/// `196148` boundary where `196418` would make the bands disjoint; that
/// is preserved verbatim, not corrected. See DESIGN.md.
pub fn get_block_subsidy(height: u64) -> Amount {
    if height <= 1 {
        return PREMINE;
    }

    let mut reward: Amount = 0;

    if height >= 2 && height <= 6765 {
        reward = 1 * COIN;
    }
    if height > 6765 && height <= 10946 {
        reward = 1 * COIN;
    }
    if height > 10946 && height <= 17711 {
        reward = 2 * COIN;
    }
    if height > 17711 && height <= 28657 {
        reward = 3 * COIN;
    }
    if height > 28657 && height <= 46368 {
        reward = 5 * COIN;
    }
    if height > 46368 && height <= 75025 {
        reward = 8 * COIN;
    }
    if height > 75025 && height <= 121393 {
        reward = 13 * COIN;
    }
    if height > 121393 && height <= 196418 {
        reward = 21 * COIN;
    }
    if height > 196148 && height <= 317811 {
        reward = 34 * COIN;
    }
    if height > 317811 && height <= 514229 {
        reward = 55 * COIN;
    }
    if height > 514229 && height <= 832040 {
        reward = 34 * COIN;
    }
    if height > 832040 && height <= 1_346_269 {
        reward = 21 * COIN;
    }
    if height > 1_346_269 && height <= 2_178_309 {
        reward = 13 * COIN;
    }
    if height > 2_178_309 && height <= 3_524_578 {
        reward = 8 * COIN;
    }
    if height > 3_524_578 && height <= 5_702_887 {
        reward = 5 * COIN;
    }
    if height > 5_702_887 && height <= 9_227_465 {
        reward = 3 * COIN;
    }
    if height > 9_227_465 && height <= 14_930_352 {
        reward = 2 * COIN;
    }
    if height > 14_930_352 && height <= 24_157_817 {
        reward = 1 * COIN;
    }
    if height > 24_157_817 {
        reward = 0;
    }

    reward
}
