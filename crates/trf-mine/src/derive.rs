use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use trf_core::errors::{ErrorInfo, TrfError};
use trf_graph::Clique;

/// Fractional digits of the work value that enter the digest preimage.
pub const WORK_VALUE_PRECISION: usize = 8;

/// 256-bit digest derived from a clique and its work value.
///
/// Serialized as a lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest([u8; 32]);

impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a 64-character hex string.
    pub fn from_hex(text: &str) -> Result<Self, TrfError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(text, &mut bytes).map_err(|err| {
            TrfError::Serde(
                ErrorInfo::new("digest-hex", err.to_string()).with_context("value", text),
            )
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Digest {
    type Error = TrfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_hex()
    }
}

/// `s ln s` for a clique of `s` vertices; zero for `s <= 1`.
pub fn clique_complexity(clique_size: usize) -> f64 {
    if clique_size <= 1 {
        return 0.0;
    }
    let s = clique_size as f64;
    s * s.ln()
}

/// Work released by reducing a field of the given complexity to a clique of
/// `clique_size` vertices: `field_complexity / (s ln s + 1)`.
pub fn work_value(field_complexity: f64, clique_size: usize) -> f64 {
    field_complexity / (clique_complexity(clique_size) + 1.0)
}

/// Canonical text hashed by [`derive_digest`].
///
/// The clique renders as `[v0, v1, ...]` (decimal vertices separated by a comma
/// and one space) followed by `-` and the work value with exactly
/// [`WORK_VALUE_PRECISION`] fractional digits, e.g. `[0, 1, 2, 3]-1.00520593`.
pub fn digest_preimage(clique: &Clique, work_value: f64) -> String {
    format!("{clique}-{work_value:.prec$}", prec = WORK_VALUE_PRECISION)
}

/// SHA-256 of [`digest_preimage`].
pub fn derive_digest(clique: &Clique, work_value: f64) -> Digest {
    let preimage = digest_preimage(clique, work_value);
    Digest(Sha256::digest(preimage.as_bytes()).into())
}

/// Work value rendered the way it enters the digest.
pub(crate) fn render_work_value(work_value: f64) -> String {
    format!("{work_value:.prec$}", prec = WORK_VALUE_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_clique_keeps_field_complexity() {
        assert_eq!(work_value(42.5, 1), 42.5);
        assert_eq!(work_value(0.0, 4), 0.0);
    }

    #[test]
    fn preimage_uses_fixed_precision() {
        let clique = Clique::new(vec![0, 1, 2, 3]).unwrap();
        assert_eq!(digest_preimage(&clique, 1.5), "[0, 1, 2, 3]-1.50000000");
        assert_eq!(
            digest_preimage(&clique, 2.0 / 3.0),
            "[0, 1, 2, 3]-0.66666667"
        );
    }

    #[test]
    fn digest_hex_round_trip() {
        let clique = Clique::new(vec![3, 5]).unwrap();
        let digest = derive_digest(&clique, 7.25);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Digest::from_hex(&hex).unwrap(), digest);
        assert_eq!(Digest::from_hex("zz").unwrap_err().code(), "digest-hex");
    }
}
