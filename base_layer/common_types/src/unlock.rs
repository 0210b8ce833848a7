// Copyright 2024, The Contract Core Developers
//
// Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
// following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
// disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
// following disclaimer in the documentation and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
// products derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
// INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
// WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
// USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::{convert::TryFrom, fmt};

use blake2::{digest::consts::U32, Blake2b, Digest};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{hash::Hash256, serializers::hex as hex_serde};

type Blake2b256 = Blake2b<U32>;

pub const UNLOCK_KEY_LENGTH: usize = 32;

/// An opaque public-key identifier. The validation core never verifies signatures against it --
/// that belongs to the transport layer that countersigns revisions -- it only ever compares,
/// hashes, and stores it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, BorshSerialize, BorshDeserialize)]
#[derive(Serialize, Deserialize)]
pub struct UnlockKey(#[serde(with = "hex_serde")] [u8; UNLOCK_KEY_LENGTH]);

impl UnlockKey {
    pub const fn new(bytes: [u8; UNLOCK_KEY_LENGTH]) -> Self {
        UnlockKey(bytes)
    }
}

impl AsRef<[u8]> for UnlockKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; UNLOCK_KEY_LENGTH]> for UnlockKey {
    fn from(bytes: [u8; UNLOCK_KEY_LENGTH]) -> Self {
        UnlockKey(bytes)
    }
}

impl fmt::Debug for UnlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnlockKey({})", hex::encode(self.0))
    }
}

/// A 2-of-2 renter/host unlock condition: `[renter_key, host_key]` with a fixed
/// `signatures_required = 2`. Both revisions of a contract must share identical unlock
/// conditions -- the pair is immutable for the life of the contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, BorshSerialize, BorshDeserialize)]
#[derive(Serialize, Deserialize)]
pub struct UnlockConditions {
    pub renter_key: UnlockKey,
    pub host_key: UnlockKey,
}

/// The number of signatures required to satisfy `UnlockConditions`. Always 2 -- both parties
/// must co-sign every revision.
pub const SIGNATURES_REQUIRED: u8 = 2;

impl UnlockConditions {
    pub fn new(renter_key: UnlockKey, host_key: UnlockKey) -> Self {
        UnlockConditions { renter_key, host_key }
    }

    /// Deterministic digest of the canonical encoding of `[renter_key, host_key]` plus the fixed
    /// signature threshold. Two `UnlockConditions` values hash equal iff they are equal.
    pub fn hash(&self) -> Hash256 {
        let mut hasher = Blake2b256::new();
        hasher.update(self.renter_key.as_ref());
        hasher.update(self.host_key.as_ref());
        hasher.update([SIGNATURES_REQUIRED]);
        let digest = hasher.finalize();
        Hash256::try_from(digest.as_slice()).expect("blake2b-256 output is always 32 bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_order_sensitive() {
        let renter = UnlockKey::new([1u8; UNLOCK_KEY_LENGTH]);
        let host = UnlockKey::new([2u8; UNLOCK_KEY_LENGTH]);

        let a = UnlockConditions::new(renter, host);
        let b = UnlockConditions::new(renter, host);
        assert_eq!(a.hash(), b.hash());

        let swapped = UnlockConditions::new(host, renter);
        assert_ne!(a.hash(), swapped.hash());
    }
}
