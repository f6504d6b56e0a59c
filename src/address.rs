//! Bitcoin address format checks.
//!
//! Two encodings are recognised:
//!
//! - **Base58Check** (`1...` P2PKH and `3...` P2SH): the string must decode with a
//!   valid double-SHA-256 checksum into a 25 byte payload (version byte, 20 byte
//!   hash, 4 byte checksum).
//! - **Segwit** (`bc1...`): the string must match `bc1` followed by 25 to 39
//!   lowercase alphanumerics.
//!
//! The segwit rule is a shape check only. It does not verify the Bech32 checksum
//! and accepts characters (`1`, `b`, `i`, `o`) that the real Bech32 charset
//! excludes.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::log::mask_address;

/// Full Base58Check payload length of a mainnet address, checksum included.
const BASE58_ADDRESS_LEN: usize = 25;
const CHECKSUM_LEN: usize = 4;

static SEGWIT_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(bc1)[0-9a-z]{25,39}$").expect("Invalid segwit address regex"));

/// The encoding an address was accepted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Base58,
    Bech32,
}

/// Returns the encoding of `address` if it passes the format checks.
pub fn classify(address: &str) -> Option<AddressKind> {
    if address.starts_with('1') || address.starts_with('3') {
        return match bs58::decode(address).with_check(None).into_vec() {
            // `with_check` strips the checksum from the returned payload.
            Ok(payload) if payload.len() + CHECKSUM_LEN == BASE58_ADDRESS_LEN => {
                debug!(address:% = mask_address(address); "Found valid base58 address");
                Some(AddressKind::Base58)
            },
            Ok(payload) => {
                debug!(
                    address:% = mask_address(address),
                    length = payload.len() + CHECKSUM_LEN;
                    "Found base58 address with unexpected length"
                );
                None
            },
            Err(e) => {
                debug!(address:% = mask_address(address), error:% = e; "Base58Check decoding failed");
                None
            },
        };
    }

    if address.starts_with("bc1") {
        if SEGWIT_ADDRESS_REGEX.is_match(address) {
            debug!(address:% = mask_address(address); "Found valid bech32 address");
            return Some(AddressKind::Bech32);
        }
        debug!(address:% = mask_address(address); "Found invalid bech32 address");
        return None;
    }

    debug!(address:% = mask_address(address); "Found address with unknown prefix");
    None
}

/// Returns `true` if `address` is a well-formed legacy, script or segwit address.
pub fn validate(address: &str) -> bool {
    classify(address).is_some()
}
