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

//! Canonical hashing of revisions and file contracts.
//!
//! The real on-chain byte layout must match the host chain's own wire encoding for signature
//! compatibility, and that encoding is owned by the chain, not this crate. What *is* this crate's
//! responsibility is that the same logical contents always hash to the same digest and different
//! contents hash to different digests; we get that from a canonical `borsh` encoding (field order
//! equal to declaration order) over `blake2b-256`.

use blake2::{digest::consts::U32, Blake2b, Digest};
use borsh::BorshSerialize;
use contract_types::Hash256;

use crate::contract::{FileContract, FileContractRevision};

type Blake2b256 = Blake2b<U32>;

fn hash_borsh<T: BorshSerialize>(value: &T) -> Hash256 {
    let mut hasher = Blake2b256::new();
    let bytes = borsh::to_vec(value).expect("in-memory borsh serialization is infallible");
    hasher.update(&bytes);
    let digest = hasher.finalize();
    Hash256::new(digest.into())
}

/// Deterministic digest of a [`FileContractRevision`], suitable for co-signing.
pub fn hash_revision(revision: &FileContractRevision) -> Hash256 {
    hash_borsh(revision)
}

/// Deterministic digest of a bare [`FileContract`] (used to derive a formation transaction's
/// contract id).
pub fn hash_file_contract(contract: &FileContract) -> Hash256 {
    hash_borsh(contract)
}

#[cfg(test)]
mod tests {
    use contract_types::{BlockHeight, Currency, UnlockConditions, UnlockKey};

    use super::*;
    use crate::contract::SiacoinOutput;

    fn sample_contract() -> FileContract {
        FileContract {
            filesize: 0,
            file_merkle_root: Hash256::ZERO,
            window_start: BlockHeight(100),
            window_end: BlockHeight(200),
            valid_proof_outputs: vec![
                SiacoinOutput::new(Default::default(), Currency::from(60u64)),
                SiacoinOutput::new(Default::default(), Currency::from(50u64)),
            ],
            missed_proof_outputs: vec![
                SiacoinOutput::new(Default::default(), Currency::from(60u64)),
                SiacoinOutput::new(Default::default(), Currency::from(50u64)),
                SiacoinOutput::new(Default::default(), Currency::ZERO),
            ],
            unlock_hash: Hash256::ZERO,
            revision_number: 0,
        }
    }

    #[test]
    fn hash_is_stable_and_sensitive_to_content() {
        let a = sample_contract();
        let mut b = sample_contract();
        assert_eq!(hash_file_contract(&a), hash_file_contract(&b));

        b.filesize = 1;
        assert_ne!(hash_file_contract(&a), hash_file_contract(&b));
    }

    #[test]
    fn revision_hash_is_sensitive_to_unlock_conditions() {
        let contract = sample_contract();
        let a = FileContractRevision {
            parent_id: Hash256::ZERO,
            unlock_conditions: UnlockConditions::new(UnlockKey::new([1u8; 32]), UnlockKey::new([2u8; 32])),
            contract: contract.clone(),
        };
        let b = FileContractRevision {
            unlock_conditions: UnlockConditions::new(UnlockKey::new([2u8; 32]), UnlockKey::new([1u8; 32])),
            ..a.clone()
        };
        assert_ne!(hash_revision(&a), hash_revision(&b));
    }
}
