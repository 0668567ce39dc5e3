//! Fixed binary instruction payloads.
//!
//! Layouts are part of the deployed programs' ABI; byte order and width must
//! match exactly:
//!
//! - greet:  `[bump]` (1 byte)
//! - swap:   `[amount: u64 LE][bump]` (9 bytes)
//!
//! The swap program reads the amount first and the bump second. Amounts are
//! already scaled to base units by the caller; no unit conversion happens
//! here.

use crate::errors::{CoreError, CoreResult};

pub const GREET_PAYLOAD_LEN: usize = 1;
pub const SWAP_PAYLOAD_LEN: usize = 9;

/// Payload of a single program call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionPayload {
    Greet { bump: u8 },
    Swap { amount: u64, bump: u8 },
}

impl InstructionPayload {
    pub fn to_bytes(&self) -> Vec<u8> {
        match *self {
            InstructionPayload::Greet { bump } => vec![bump],
            InstructionPayload::Swap { amount, bump } => {
                let mut out = Vec::with_capacity(SWAP_PAYLOAD_LEN);
                out.extend_from_slice(&amount.to_le_bytes());
                out.push(bump);
                out
            }
        }
    }
}

/// Decode a greet payload back into its bump byte.
pub fn decode_greet(data: &[u8]) -> CoreResult<u8> {
    match data {
        [bump] => Ok(*bump),
        _ => Err(CoreError::DecodeError {
            what: "greet payload",
            expected: GREET_PAYLOAD_LEN,
            got: data.len(),
        }),
    }
}

/// Decode a swap payload back into `(amount, bump)`.
pub fn decode_swap(data: &[u8]) -> CoreResult<(u64, u8)> {
    if data.len() != SWAP_PAYLOAD_LEN {
        return Err(CoreError::DecodeError {
            what: "swap payload",
            expected: SWAP_PAYLOAD_LEN,
            got: data.len(),
        });
    }
    let mut amount_bytes = [0u8; 8];
    amount_bytes.copy_from_slice(&data[..8]);
    Ok((u64::from_le_bytes(amount_bytes), data[8]))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn swap_payload_layout_is_fixed() {
        let payload = InstructionPayload::Swap { amount: 8_100_000, bump: 7 };
        let bytes = payload.to_bytes();
        assert_eq!(bytes, vec![0xE0, 0x9B, 0x7B, 0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn swap_payload_round_trips() {
        let bytes = InstructionPayload::Swap { amount: 8_100_000, bump: 7 }.to_bytes();
        assert_eq!(decode_swap(&bytes).unwrap(), (8_100_000, 7));
    }

    #[test]
    fn greet_payload_round_trips() {
        let bytes = InstructionPayload::Greet { bump: 254 }.to_bytes();
        assert_eq!(bytes.len(), GREET_PAYLOAD_LEN);
        assert_eq!(decode_greet(&bytes).unwrap(), 254);
    }

    #[test]
    fn wrong_length_is_a_decode_error() {
        assert_matches!(
            decode_swap(&[1, 2, 3]),
            Err(CoreError::DecodeError { what: "swap payload", expected: 9, got: 3 })
        );
        assert_matches!(
            decode_greet(&[]),
            Err(CoreError::DecodeError { what: "greet payload", expected: 1, got: 0 })
        );
    }
}
