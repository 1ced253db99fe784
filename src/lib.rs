// src/lib.rs - Creativecoin Core Library
//! Consensus arithmetic and wire-protocol framing for a Bitcoin-derived
//! cryptocurrency node:
//! - compact-bits proof-of-work target encoding and verification
//! - a dual PoW scheme (double-SHA-256 legacy, Keccak-256 new version)
//! - the block subsidy schedule and version-bits soft-fork signaling
//! - a stream-oriented, length-prefixed packet parser

pub mod consensus;
pub mod error;
pub mod hash;
pub mod network_params;
pub mod parser;

pub use consensus::{get_block_subsidy, has_bit, verify_pow, Amount, COIN, MAX_MONEY};
pub use error::{CreativeError, Result};
pub use network_params::NetworkParams;
pub use parser::{FrameError, PacketParser, ParseEvent};

/// Library version, exported for diagnostics and the demo binary's
/// `--version` handling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging for creativecoin applications.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// Initialize logging with a custom level, for callers (tests, the demo
/// binary with `-v`) that want more than `Info`.
pub fn init_logging_with_level(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Format a satoshi-denominated amount for display, e.g. `1.00000000 CREA`.
pub fn format_amount(amount: Amount) -> String {
    let whole = amount / COIN;
    let frac = (amount % COIN).abs();
    format!("{whole}.{frac:08} CREA")
}

/// Parse a decimal amount string (e.g. "1.5") into satoshis.
pub fn parse_amount(amount_str: &str) -> Result<Amount> {
    let parts: Vec<&str> = amount_str.split('.').collect();

    if parts.len() > 2 {
        return Err(CreativeError::consensus("too many decimal points"));
    }

    let whole_part: Amount = parts[0]
        .parse()
        .map_err(|_| CreativeError::consensus("invalid whole number"))?;

    let fractional_part: Amount = if parts.len() == 2 {
        let frac_str = format!("{:0<8}", parts[1]);
        if frac_str.len() > 8 {
            return Err(CreativeError::consensus("too many decimal places"));
        }
        frac_str[..8]
            .parse()
            .map_err(|_| CreativeError::consensus("invalid decimal number"))?
    } else {
        0
    };

    Ok(whole_part * COIN + fractional_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(COIN), "1.00000000 CREA");
        assert_eq!(format_amount(COIN + COIN / 2), "1.50000000 CREA");
        assert_eq!(format_amount(COIN / 2), "0.50000000 CREA");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1").unwrap(), COIN);
        assert_eq!(parse_amount("1.5").unwrap(), COIN + COIN / 2);
        assert_eq!(parse_amount("0.5").unwrap(), COIN / 2);
        assert_eq!(parse_amount("1.00000001").unwrap(), COIN + 1);
    }

    #[test]
    fn test_parse_amount_errors() {
        assert!(parse_amount("1.2.3").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1.123456789").is_err());
    }
}
