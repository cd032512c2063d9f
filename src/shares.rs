use std::{collections::BTreeMap, path::Path};

use num_bigint::BigInt;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::shamir::{self, RawShare, Verification};

/// JSON document describing a set of shares, e.g.
///
/// ```json
/// {
///     "keys": { "n": 2, "k": 2 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": "2", "value": "111" }
/// }
/// ```
///
/// Each member other than `keys` is a share, its key is the abscissa.
#[derive(Debug, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, EncodedShare>,
}

#[derive(Debug, Deserialize)]
pub struct Keys {
    /// Declared number of shares
    pub n: usize,
    /// Threshold
    pub k: usize,
}

#[derive(Debug, Deserialize)]
pub struct EncodedShare {
    pub base: Base,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(u32),
    Text(String),
}

#[derive(Debug, Error)]
pub enum ShareDocumentError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("share key {0:?} is not an integer")]
    InvalidIndex(String),
    #[error("base {base:?} of share {index} is not a number")]
    InvalidBase { index: String, base: String },
}

impl ShareDocument {
    pub fn from_json(json: &str) -> Result<Self, ShareDocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// Shares ordered by abscissa, values are left encoded
    pub fn raw_shares(&self) -> Result<Vec<RawShare>, ShareDocumentError> {
        if self.keys.n != self.shares.len() {
            warn!(
                "document declares {} shares but contains {}",
                self.keys.n,
                self.shares.len()
            );
        }

        let mut raw_shares = Vec::with_capacity(self.shares.len());
        for (index, share) in &self.shares {
            let x = index
                .trim()
                .parse::<BigInt>()
                .map_err(|_| ShareDocumentError::InvalidIndex(index.clone()))?;
            let base = match &share.base {
                Base::Number(base) => *base,
                Base::Text(text) => {
                    text.trim()
                        .parse::<u32>()
                        .map_err(|_| ShareDocumentError::InvalidBase {
                            index: index.clone(),
                            base: text.clone(),
                        })?
                }
            };
            raw_shares.push(RawShare {
                x,
                base,
                value: share.value.clone(),
            });
        }
        // Keys are sorted as strings, "10" comes before "2"
        raw_shares.sort_by(|a, b| a.x.cmp(&b.x));
        Ok(raw_shares)
    }

    pub fn recover_secret(&self, verification: Verification) -> Result<BigInt, anyhow::Error> {
        let raw_shares = self.raw_shares()?;
        let secret = shamir::recover_secret(&raw_shares, self.threshold(), verification)?;
        Ok(secret)
    }
}

pub fn load_share_document(path: &Path) -> Result<ShareDocument, anyhow::Error> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read share file {}: {e}", path.display()))?;
    ShareDocument::from_json(&json)
        .map_err(|e| anyhow::anyhow!("Failed to parse share file {}: {e}", path.display()))
}
