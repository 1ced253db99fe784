//! Network descriptors: magic tag, PoW limits, and bootstrap data for
//! each of the protocol's networks. Resolved by name, as the wire codec
//! and consensus layer only ever see a `&'static NetworkParams`.

use num_bigint::BigInt;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::consensus::pow::from_compact;
use crate::error::{CreativeError, Result};

/// Immutable per-network parameters. Instances are `'static` and never
/// constructed at runtime outside of this module's static tables, so
/// they are freely `Send`/`Sync` without locking.
///
/// `Serialize` is used for diagnostic dumps (e.g. a `--print-network`
/// CLI flag or a status endpoint), not for wire messages.
#[derive(Debug, Serialize)]
pub struct NetworkParams {
    pub name: &'static str,
    pub magic: u32,
    pub pow_limit_bits: u32,
    pub keccak_pow_limit_bits: u32,
    pub default_port: u16,
    pub dns_seeds: &'static [&'static str],
}

impl NetworkParams {
    /// Decodes `pow_limit_bits` into a target integer. Computed lazily
    /// rather than stored, since it is only needed for diagnostics (see
    /// `consensus::pow::verify_pow`).
    pub fn pow_limit(&self) -> BigInt {
        from_compact(self.pow_limit_bits)
    }

    /// Decodes `keccak_pow_limit_bits` into a target integer.
    pub fn keccak_pow_limit(&self) -> BigInt {
        from_compact(self.keccak_pow_limit_bits)
    }

    /// Looks up a network by name. Returns `None` for unrecognized
    /// names; callers needing a `Result` should use [`NetworkParams::get`].
    pub fn by_name(name: &str) -> Option<&'static NetworkParams> {
        match name {
            "main" | "mainnet" => Some(&MAIN),
            "testnet" => Some(&TESTNET),
            "regtest" => Some(&REGTEST),
            _ => None,
        }
    }

    /// Like [`NetworkParams::by_name`], but returns a recoverable error
    /// for an unknown name instead of `None` — this is a config-time
    /// lookup, not a hot-path invariant, so there is no case for a panic.
    pub fn get(name: &str) -> Result<&'static NetworkParams> {
        NetworkParams::by_name(name).ok_or_else(|| CreativeError::UnknownNetwork(name.to_string()))
    }
}

static MAIN: Lazy<NetworkParams> = Lazy::new(|| NetworkParams {
    name: "main",
    magic: 0xC0C0_C0C0,
    pow_limit_bits: 0x1e0f_ffff,
    keccak_pow_limit_bits: 0x1e0f_ffff,
    default_port: 12_683,
    dns_seeds: &["seed1.creativecoin.net", "seed2.creativecoin.net", "seed.creativecoin.org"],
});

static TESTNET: Lazy<NetworkParams> = Lazy::new(|| NetworkParams {
    name: "testnet",
    magic: 0x0B11_0907,
    pow_limit_bits: 0x1f0f_ffff,
    keccak_pow_limit_bits: 0x1f0f_ffff,
    default_port: 21_591,
    dns_seeds: &["testnet-seed.creativecoin.net"],
});

static REGTEST: Lazy<NetworkParams> = Lazy::new(|| NetworkParams {
    name: "regtest",
    magic: 0xFABF_B5DA,
    pow_limit_bits: 0x207f_ffff,
    keccak_pow_limit_bits: 0x207f_ffff,
    default_port: 21_692,
    dns_seeds: &[],
});

/// Bootstrap peer addresses, keyed by network name. `main` and
/// `testnet` return their DNS seed lists; any other name, including
/// `regtest`, returns an empty slice.
pub mod seeds {
    use super::NetworkParams;

    pub fn get(name: &str) -> &'static [&'static str] {
        match name {
            "main" | "mainnet" => NetworkParams::by_name("main").unwrap().dns_seeds,
            "testnet" => NetworkParams::by_name("testnet").unwrap().dns_seeds,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_known_networks() {
        assert!(NetworkParams::by_name("main").is_some());
        assert!(NetworkParams::by_name("testnet").is_some());
        assert!(NetworkParams::by_name("regtest").is_some());
    }

    #[test]
    fn test_by_name_unknown_network() {
        assert!(NetworkParams::by_name("foonet").is_none());
    }

    #[test]
    fn test_get_returns_err_for_unknown_network() {
        let result = NetworkParams::get("foonet");
        assert!(result.is_err());
    }

    #[test]
    fn test_networks_have_distinct_magics() {
        let main = NetworkParams::by_name("main").unwrap();
        let testnet = NetworkParams::by_name("testnet").unwrap();
        let regtest = NetworkParams::by_name("regtest").unwrap();
        assert_ne!(main.magic, testnet.magic);
        assert_ne!(main.magic, regtest.magic);
        assert_ne!(testnet.magic, regtest.magic);
    }

    #[test]
    fn test_pow_limit_decodes_to_positive_target() {
        let main = NetworkParams::by_name("main").unwrap();
        assert!(main.pow_limit() > BigInt::from(0));
        assert!(main.keccak_pow_limit() > BigInt::from(0));
    }

    #[test]
    fn test_seeds_known_vs_unknown() {
        assert!(!seeds::get("main").is_empty());
        assert!(!seeds::get("testnet").is_empty());
        assert!(seeds::get("regtest").is_empty());
        assert!(seeds::get("foonet").is_empty());
    }

    #[test]
    fn test_network_params_serializes_for_diagnostics() {
        let main = NetworkParams::by_name("main").unwrap();
        let json = serde_json::to_string(main).unwrap();
        assert!(json.contains("\"name\":\"main\""));
        assert!(json.contains("\"default_port\":12683"));
    }
}
