//! Key material loading.
//!
//! Loading failures are fatal precondition violations; the error carries the
//! offending path and is never retried.

use std::path::Path;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};

use crate::errors::{ClientError, ClientResult};

/// Load a keypair from a JSON byte-array file (the `solana-keygen` format).
pub fn load_keypair(path: &Path) -> ClientResult<Keypair> {
    read_keypair_file(path).map_err(|err| ClientError::Keyfile {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

/// Load only the public half of a keypair file. Used for program ids, where
/// the deploy keypair's pubkey names the program.
pub fn load_pubkey(path: &Path) -> ClientResult<Pubkey> {
    Ok(load_keypair(path)?.pubkey())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use solana_sdk::signature::write_keypair_file;

    use super::*;

    #[test]
    fn keypair_round_trips_through_a_file() {
        let keypair = Keypair::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        write_keypair_file(&keypair, &path).unwrap();

        let loaded = load_keypair(&path).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
        assert_eq!(load_pubkey(&path).unwrap(), keypair.pubkey());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_keypair(Path::new("/no/such/key.json")).unwrap_err();
        assert_matches!(err, ClientError::Keyfile { path, .. } if path.contains("key.json"));
    }
}
