//! Consensus constants, exported verbatim per the protocol's rules.

/// Amount denominated in satoshis; one coin = 100,000,000 satoshis.
pub type Amount = i64;

/// One coin, in satoshis.
pub const COIN: Amount = 100_000_000;

/// Maximum possible money supply: 115,000,000 coins.
pub const MAX_MONEY: Amount = 115_000_000 * COIN;

/// Default block subsidy before the Fibonacci schedule kicks in.
pub const BASE_REWARD: Amount = 50 * COIN;
pub const HALF_REWARD: Amount = BASE_REWARD / 2;

/// Block and script size limits.
pub const MAX_BLOCK_SIZE: usize = 4_000_000;
pub const MAX_RAW_BLOCK_SIZE: usize = 4_000_000;
pub const MAX_BLOCK_WEIGHT: usize = 4_000_000;
pub const MAX_BLOCK_SIGOPS: usize = 20_000;
pub const MAX_BLOCK_SIGOPS_COST: usize = 80_000;

/// Version-bits signaling.
pub const VERSION_TOP_BITS: u32 = 0x2000_0000;
pub const VERSION_TOP_MASK: u32 = 0xE000_0000;

/// Coinbase and witness constants.
pub const COINBASE_MATURITY: u32 = 8;
pub const WITNESS_SCALE_FACTOR: u32 = 4;

/// Locktime / sequence constants.
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;
pub const SEQUENCE_DISABLE_FLAG: u32 = 1 << 31;
pub const SEQUENCE_TYPE_FLAG: u32 = 1 << 22;
pub const SEQUENCE_GRANULARITY: u32 = 9;
pub const SEQUENCE_MASK: u32 = 0x0000_FFFF;

/// Script limits.
pub const MAX_SCRIPT_SIZE: usize = 10_000;
pub const MAX_SCRIPT_STACK: usize = 1_000;
pub const MAX_SCRIPT_PUSH: usize = 520;
pub const MAX_SCRIPT_OPS: usize = 201;
pub const MAX_MULTISIG_PUBKEYS: usize = 20;

/// BIP16 (P2SH) activation time (Unix seconds).
pub const BIP16_TIME: u64 = 1_333_238_400;

/// Upper bound on a framed message's payload length (see `NetworkParams`
/// for per-connection wiring; this crate fixes one value, see DESIGN.md).
pub const MAX_MESSAGE: usize = 32 * 1024 * 1024;

/// Fixed header size: magic (4) + command (12) + length (4) + checksum (4).
pub const HEADER_SIZE: usize = 24;
pub const COMMAND_SIZE: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_arithmetic() {
        assert_eq!(COIN, 100_000_000);
        assert_eq!(MAX_MONEY, 115_000_000 * COIN);
        assert_eq!(HALF_REWARD, BASE_REWARD / 2);
    }

    #[test]
    fn test_block_and_script_bounds() {
        assert!(MAX_SCRIPT_SIZE < MAX_BLOCK_SIZE);
        assert!(MAX_SCRIPT_STACK > 0);
        assert!(MAX_MULTISIG_PUBKEYS <= MAX_SCRIPT_STACK);
        assert_eq!(HEADER_SIZE, 4 + COMMAND_SIZE + 4 + 4);
    }

    #[test]
    fn test_version_bits_constants() {
        assert_eq!(VERSION_TOP_MASK & VERSION_TOP_BITS, VERSION_TOP_BITS);
        assert_ne!(VERSION_TOP_MASK, VERSION_TOP_BITS);
    }
}
