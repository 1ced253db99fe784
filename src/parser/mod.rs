//! Stream-oriented, length-prefixed packet parser. A cooperative state
//! machine: `feed` runs synchronously to completion and returns the
//! events produced by however many frames the newly-available bytes
//! complete. No suspension points, no locks, one instance per peer.

pub mod codec;

use std::collections::VecDeque;

use bytes::Bytes;

use crate::hash::sha256;
use crate::network_params::NetworkParams;
use codec::{DecodedMessage, MessageCodec, RawMessage};

const HEADER_SIZE: usize = 24;
const COMMAND_SIZE: usize = 12;

/// Framing and decode failures. All are recoverable: the parser resets
/// to `AwaitHeader` after emitting one and keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    InvalidMagic { expected: u32, found: u32 },
    UnterminatedCommand,
    OversizePacket { declared: u32, max: u32 },
    InvalidChecksum { expected: u32, computed: u32 },
    Decode(String),
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::InvalidMagic { expected, found } => {
                write!(f, "invalid magic: expected {expected:#010x}, found {found:#010x}")
            }
            FrameError::UnterminatedCommand => write!(f, "command field has no NUL terminator"),
            FrameError::OversizePacket { declared, max } => {
                write!(f, "declared payload size {declared} exceeds max {max}")
            }
            FrameError::InvalidChecksum { expected, computed } => {
                write!(f, "checksum mismatch: header says {expected:#010x}, computed {computed:#010x}")
            }
            FrameError::Decode(msg) => write!(f, "codec decode error: {msg}"),
        }
    }
}

impl std::error::Error for FrameError {}

/// One outcome of a `feed` call: either a fully decoded message or a
/// recoverable framing/decode error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Packet(DecodedMessage),
    Error(FrameError),
}

#[derive(Debug, Clone)]
struct MessageHeader {
    command: String,
    payload_len: u32,
    checksum: u32,
}

#[derive(Debug)]
enum ParserState {
    AwaitHeader,
    AwaitPayload(MessageHeader),
}

/// A single peer's framing state. Owns no transport; bytes are pushed
/// in via `feed` and decoded packets come back out, in order.
pub struct PacketParser<C: MessageCodec = codec::DemoCodec> {
    network: &'static NetworkParams,
    codec: C,
    state: ParserState,
    pending: VecDeque<Bytes>,
    total: usize,
    waiting: usize,
}

impl PacketParser<codec::DemoCodec> {
    /// Builds a parser bound to `network`'s magic, using the bundled
    /// demo codec.
    pub fn new(network: &'static NetworkParams) -> Self {
        PacketParser::with_codec(network, codec::DemoCodec)
    }
}

impl<C: MessageCodec> PacketParser<C> {
    pub fn with_codec(network: &'static NetworkParams, codec: C) -> Self {
        PacketParser {
            network,
            codec,
            state: ParserState::AwaitHeader,
            pending: VecDeque::new(),
            total: 0,
            waiting: HEADER_SIZE,
        }
    }

    /// Appends `bytes` to the internal queue and drives the state
    /// machine as far as the newly-available bytes allow. Never blocks,
    /// never panics on malformed input; framing errors are reported as
    /// `ParseEvent::Error` entries in the returned vector.
    pub fn feed(&mut self, bytes: impl Into<Bytes>) -> Vec<ParseEvent> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Vec::new();
        }
        self.total += bytes.len();
        self.pending.push_back(bytes);

        let mut events = Vec::new();
        while self.total >= self.waiting {
            let event = match &self.state {
                ParserState::AwaitHeader => self.try_parse_header(),
                ParserState::AwaitPayload(_) => self.try_parse_payload(),
            };
            if let Some(event) = event {
                events.push(event);
            }
            // `try_parse_header` returns `None` on a successful
            // header->payload transition, not just on "no progress" -
            // keep looping so a header and payload that arrive in the
            // same `feed` call are both consumed this pass. Terminates
            // because `try_parse_header`/`try_parse_payload` always
            // consume `waiting` bytes, and the loop guard stops once
            // fewer than `waiting` bytes remain.
        }
        events
    }

    /// Adapter for callers that prefer a callback over a returned
    /// vector.
    pub fn feed_with(&mut self, bytes: impl Into<Bytes>, on_event: &mut impl FnMut(ParseEvent)) {
        for event in self.feed(bytes) {
            on_event(event);
        }
    }

    fn try_parse_header(&mut self) -> Option<ParseEvent> {
        let header_bytes = self.take(HEADER_SIZE);

        let magic = u32::from_le_bytes(header_bytes[0..4].try_into().unwrap());
        if magic != self.network.magic {
            self.reset_to_header();
            return Some(ParseEvent::Error(FrameError::InvalidMagic {
                expected: self.network.magic,
                found: magic,
            }));
        }

        let command_field = &header_bytes[4..4 + COMMAND_SIZE];
        let nul_pos = command_field.iter().position(|&b| b == 0);
        let command = match nul_pos {
            Some(pos) => String::from_utf8_lossy(&command_field[..pos]).into_owned(),
            None => {
                self.reset_to_header();
                return Some(ParseEvent::Error(FrameError::UnterminatedCommand));
            }
        };

        let payload_len = u32::from_le_bytes(header_bytes[16..20].try_into().unwrap());
        let max = crate::consensus::params::MAX_MESSAGE as u32;
        if payload_len > max {
            self.reset_to_header();
            return Some(ParseEvent::Error(FrameError::OversizePacket { declared: payload_len, max }));
        }

        let checksum = u32::from_le_bytes(header_bytes[20..24].try_into().unwrap());

        self.waiting = payload_len as usize;
        self.state = ParserState::AwaitPayload(MessageHeader { command, payload_len, checksum });
        None
    }

    fn try_parse_payload(&mut self) -> Option<ParseEvent> {
        let header = match &self.state {
            ParserState::AwaitPayload(header) => header.clone(),
            ParserState::AwaitHeader => unreachable!("try_parse_payload called outside AwaitPayload"),
        };

        let payload = self.take(header.payload_len as usize);

        let digest = sha256(&sha256(&payload));
        let computed = u32::from_le_bytes(digest[0..4].try_into().unwrap());
        if computed != header.checksum {
            self.reset_to_header();
            return Some(ParseEvent::Error(FrameError::InvalidChecksum {
                expected: header.checksum,
                computed,
            }));
        }

        let raw = RawMessage { command: header.command.clone(), payload: payload.clone() };
        match self.codec.decode(&raw.command, &raw.payload) {
            Ok(decoded) => {
                self.reset_to_header();
                Some(ParseEvent::Packet(decoded))
            }
            Err(msg) => {
                self.reset_to_header();
                Some(ParseEvent::Error(FrameError::Decode(msg)))
            }
        }
    }

    fn reset_to_header(&mut self) {
        self.state = ParserState::AwaitHeader;
        self.waiting = HEADER_SIZE;
    }

    /// Drains exactly `n` bytes from the front of `pending`, splitting
    /// the last chunk if it straddles the boundary. Never copies bytes
    /// it doesn't consume; `Bytes::split_to` is a refcount bump, not an
    /// allocation.
    fn take(&mut self, n: usize) -> Bytes {
        debug_assert!(self.total >= n);
        self.total -= n;

        if n == 0 {
            return Bytes::new();
        }

        if let Some(front) = self.pending.front() {
            if front.len() >= n {
                let mut front = self.pending.pop_front().unwrap();
                let taken = front.split_to(n);
                if !front.is_empty() {
                    self.pending.push_front(front);
                }
                return taken;
            }
        }

        let mut out = Vec::with_capacity(n);
        let mut remaining = n;
        while remaining > 0 {
            let mut front = self.pending.pop_front().expect("enough bytes were counted in total");
            if front.len() <= remaining {
                remaining -= front.len();
                out.extend_from_slice(&front);
            } else {
                let rest = front.split_off(remaining);
                out.extend_from_slice(&front);
                self.pending.push_front(rest);
                remaining = 0;
            }
        }
        Bytes::from(out)
    }
}
