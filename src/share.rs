//! Share Links
//!
//! Packs the owned set into a fixed-width bitset (one bit per catalog id) and
//! carries it as URL-safe base64 in the `ids` query parameter.
//!
//! Layout: id `k` lives in byte `(k - 1) / 8`, bit `(k - 1) % 8`, least
//! significant bit first. The token length depends only on the catalog size.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::owned::OwnedSet;

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Bytes needed for `catalog_size` bits
pub fn bitset_len(catalog_size: u32) -> usize {
    (catalog_size as usize).div_ceil(8)
}

/// Bitset bytes for `owned`; ids outside `1..=catalog_size` are dropped
pub fn to_bitset(owned: &OwnedSet, catalog_size: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; bitset_len(catalog_size)];
    for id in owned.iter().filter(|id| (1..=catalog_size).contains(id)) {
        let offset = (id - 1) as usize;
        bytes[offset / 8] |= 1 << (offset % 8);
    }
    bytes
}

/// Ids whose bit is set, limited to `1..=catalog_size`
pub fn from_bitset(bytes: &[u8], catalog_size: u32) -> OwnedSet {
    let mut owned = OwnedSet::new();
    for (index, byte) in bytes.iter().enumerate() {
        for bit in 0..8 {
            if byte & (1 << bit) == 0 {
                continue;
            }
            let id = (index * 8 + bit + 1) as u64;
            if id <= catalog_size as u64 {
                owned.insert(id as u32);
            }
        }
    }
    owned
}

pub fn encode(owned: &OwnedSet, catalog_size: u32) -> String {
    TOKEN_ENGINE.encode(to_bitset(owned, catalog_size))
}

/// `None` for empty or malformed tokens
pub fn decode(token: &str, catalog_size: u32) -> Option<OwnedSet> {
    if token.trim().is_empty() {
        return None;
    }
    // Accept the standard alphabet too; a '+' arrives as ' ' after query decoding,
    // so remap before trimming anything.
    let normalized: String = token
        .chars()
        .map(|c| match c {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let normalized = normalized.trim_matches(|c: char| c.is_ascii_control());
    let bytes = TOKEN_ENGINE.decode(normalized).ok()?;
    Some(from_bitset(&bytes, catalog_size))
}

/// Value of `param` in a `location.search` string ("?ids=...")
pub fn token_from_query(search: &str, param: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
}

/// Fully-qualified share link: origin + path + `?<param>=<token>`
pub fn share_url(origin: &str, path: &str, param: &str, token: &str) -> String {
    format!("{}{}?{}={}", origin, path, param, token)
}
