//! Message codec: turns a `(command, payload)` pair into a typed
//! message. Pluggable via the `MessageCodec` trait so a consumer can
//! supply the full command set for its own protocol; `DemoCodec`
//! implements the small representative set used by this crate's tests.

use bytes::Bytes;

/// A message as framed off the wire, before codec decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub command: String,
    pub payload: Bytes,
}

/// A decoded message. `Raw` is the fallback for commands a codec does
/// not recognize; this is not an error, since enumerating every command
/// is out of scope here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedMessage {
    Ping { nonce: u64 },
    Pong { nonce: u64 },
    Verack,
    Version { protocol_version: u32, user_agent: String },
    Raw { command: String, payload: Bytes },
}

/// Decodes a raw `(command, payload)` pair into a `DecodedMessage`.
/// Implementations return `Err(String)` (wrapped by the parser into
/// `FrameError::Decode`) on malformed payloads for a recognized command.
pub trait MessageCodec {
    fn decode(&self, command: &str, payload: &Bytes) -> Result<DecodedMessage, String>;
}

/// Decodes `ping`, `pong`, `verack`, and `version`; everything else
/// round-trips as `DecodedMessage::Raw`.
#[derive(Debug, Default)]
pub struct DemoCodec;

impl MessageCodec for DemoCodec {
    fn decode(&self, command: &str, payload: &Bytes) -> Result<DecodedMessage, String> {
        match command {
            "ping" => {
                let nonce = read_u64_le(payload)?;
                Ok(DecodedMessage::Ping { nonce })
            }
            "pong" => {
                let nonce = read_u64_le(payload)?;
                Ok(DecodedMessage::Pong { nonce })
            }
            "verack" => {
                if !payload.is_empty() {
                    return Err(format!("verack expects an empty payload, got {} bytes", payload.len()));
                }
                Ok(DecodedMessage::Verack)
            }
            "version" => decode_version(payload),
            _ => Ok(DecodedMessage::Raw {
                command: command.to_string(),
                payload: payload.clone(),
            }),
        }
    }
}

fn read_u64_le(payload: &Bytes) -> Result<u64, String> {
    if payload.len() != 8 {
        return Err(format!("expected an 8-byte nonce, got {} bytes", payload.len()));
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(payload);
    Ok(u64::from_le_bytes(buf))
}

fn decode_version(payload: &Bytes) -> Result<DecodedMessage, String> {
    if payload.len() < 4 {
        return Err(format!("version payload too short: {} bytes", payload.len()));
    }
    let mut version_bytes = [0u8; 4];
    version_bytes.copy_from_slice(&payload[0..4]);
    let protocol_version = u32::from_le_bytes(version_bytes);

    let user_agent = String::from_utf8(payload[4..].to_vec())
        .map_err(|e| format!("version user agent is not valid UTF-8: {e}"))?;

    Ok(DecodedMessage::Version { protocol_version, user_agent })
}
