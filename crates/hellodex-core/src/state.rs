//! On-chain state layout of the greeting account.

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};

/// Exact size of a greeting account blob.
pub const GREETING_RECORD_LEN: usize = 4;

/// Decoded greeting account: a little-endian u32 greeting counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRecord {
    pub counter: u32,
}

impl GreetingRecord {
    pub fn unpack(data: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; GREETING_RECORD_LEN] =
            data.try_into().map_err(|_| CoreError::DecodeError {
                what: "greeting record",
                expected: GREETING_RECORD_LEN,
                got: data.len(),
            })?;
        Ok(Self { counter: u32::from_le_bytes(bytes) })
    }

    pub fn pack(&self) -> [u8; GREETING_RECORD_LEN] {
        self.counter.to_le_bytes()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn unpack_little_endian() {
        assert_eq!(GreetingRecord::unpack(&[1, 0, 0, 0]).unwrap().counter, 1);
        assert_eq!(GreetingRecord::unpack(&[0, 1, 0, 0]).unwrap().counter, 256);
    }

    #[test]
    fn short_blob_is_a_decode_error() {
        assert_matches!(
            GreetingRecord::unpack(&[1, 0, 0]),
            Err(CoreError::DecodeError { what: "greeting record", expected: 4, got: 3 })
        );
    }

    #[test]
    fn pack_unpack_round_trip() {
        let record = GreetingRecord { counter: 7_654_321 };
        assert_eq!(GreetingRecord::unpack(&record.pack()).unwrap(), record);
    }
}
