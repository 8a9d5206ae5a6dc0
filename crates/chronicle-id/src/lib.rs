//! Event tokens and sharded path minting.
//!
//! This crate provides the opaque token type that identifies a single
//! audited occurrence and the minter that turns such a token into a
//! hierarchical storage path with an even fan-out.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque unique token identifying one event occurrence.
///
/// Tokens are hex-like strings. Freshly generated tokens are hyphenless
/// v4 UUIDs; externally supplied tokens are accepted verbatim and only
/// validated when a path is minted from them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventToken(String);

impl EventToken {
    /// Generate a fresh random token (32 hex characters).
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn from_external(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EventToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EventToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidTokenError {
    #[error("token `{token}` is shorter than the {required} characters required for sharding")]
    TooShort { token: String, required: usize },
    #[error("token `{token}` has a non-hex character in its shard prefix")]
    NonHexPrefix { token: String },
}

/// Mints hierarchical storage paths from event tokens.
///
/// A token `27c605e498c6...` minted with the default layout (4 segments
/// of 2 characters) becomes `27/c6/05/e4/27c605e498c6...`. The shard
/// segments are taken from the token prefix, so the same token always
/// mints the same path and distinct tokens never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardedPathMinter {
    segment_count: usize,
    segment_width: usize,
}

const DEFAULT_SEGMENT_COUNT: usize = 4;
const DEFAULT_SEGMENT_WIDTH: usize = 2;

impl ShardedPathMinter {
    pub fn new(segment_count: usize, segment_width: usize) -> Self {
        Self { segment_count, segment_width }
    }

    /// Number of leading token characters consumed by the shard segments.
    pub fn prefix_len(&self) -> usize {
        self.segment_count * self.segment_width
    }

    /// Mint the sharded path for `token`.
    ///
    /// Pure function: no side effects, deterministic for a given token.
    pub fn mint(&self, token: &str) -> Result<String, InvalidTokenError> {
        let required = self.prefix_len();
        if token.len() < required {
            return Err(InvalidTokenError::TooShort { token: token.to_string(), required });
        }
        let Some(prefix) = token.get(..required) else {
            return Err(InvalidTokenError::NonHexPrefix { token: token.to_string() });
        };
        if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidTokenError::NonHexPrefix { token: token.to_string() });
        }

        let mut path = String::with_capacity(required + self.segment_count + token.len());
        for segment in 0..self.segment_count {
            let start = segment * self.segment_width;
            path.push_str(&prefix[start..start + self.segment_width]);
            path.push('/');
        }
        path.push_str(token);
        Ok(path)
    }
}

impl Default for ShardedPathMinter {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT_COUNT, DEFAULT_SEGMENT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mints_default_layout() {
        let minter = ShardedPathMinter::default();
        let path = minter.mint("27c605e498c66a4f7d4fde8cca2167a8").expect("mint");
        assert_eq!(path, "27/c6/05/e4/27c605e498c66a4f7d4fde8cca2167a8");
    }

    #[test]
    fn shard_prefix_reassembles_to_token_prefix() {
        let minter = ShardedPathMinter::default();
        let token = "deadbeef0123";
        let path = minter.mint(token).expect("mint");
        let segments: Vec<&str> = path.split('/').collect();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[4], token);
        let reassembled: String = segments[..4].concat();
        assert_eq!(reassembled, &token[..8]);
    }

    #[test]
    fn mint_is_deterministic() {
        let minter = ShardedPathMinter::default();
        let token = EventToken::random();
        let first = minter.mint(token.as_str()).expect("mint");
        let second = minter.mint(token.as_str()).expect("mint");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_short_token() {
        let minter = ShardedPathMinter::default();
        let err = minter.mint("abc123").unwrap_err();
        assert_eq!(
            err,
            InvalidTokenError::TooShort { token: "abc123".to_string(), required: 8 }
        );
    }

    #[test]
    fn rejects_non_hex_prefix() {
        let minter = ShardedPathMinter::default();
        let err = minter.mint("zzzzzzzz41f1").unwrap_err();
        assert!(matches!(err, InvalidTokenError::NonHexPrefix { .. }));
    }

    #[test]
    fn custom_layout() {
        let minter = ShardedPathMinter::new(2, 4);
        let path = minter.mint("0a1b2c3d4e").expect("mint");
        assert_eq!(path, "0a1b/2c3d/0a1b2c3d4e");
    }

    #[test]
    fn random_tokens_are_mintable() {
        let minter = ShardedPathMinter::default();
        let token = EventToken::random();
        assert_eq!(token.as_str().len(), 32);
        assert!(minter.mint(token.as_str()).is_ok());
    }
}
