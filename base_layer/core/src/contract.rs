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

//! The on-chain file contract and its revisions. These are plain value types: the validators in
//! [`crate::validation`] decide whether one revision may legally succeed another, and the
//! constructors in [`crate::construct`] build well-formed successors, but nothing in this module
//! itself enforces any invariant -- it only has a shape.

use borsh::{BorshDeserialize, BorshSerialize};
use contract_types::{Address, BlockHeight, Currency, Hash256, UnlockConditions};
use serde::{Deserialize, Serialize};

use crate::consensus::MAX_REVISION_NUMBER;

/// A single payout: an address and the value paid to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct SiacoinOutput {
    pub address: Address,
    pub value: Currency,
}

impl SiacoinOutput {
    pub fn new(address: Address, value: Currency) -> Self {
        SiacoinOutput { address, value }
    }
}

/// A file contract, in either its freshly-formed or most-recently-revised state. The structural
/// shape is fixed: exactly two valid-proof outputs (`[renter, host]`) and exactly three
/// missed-proof outputs (`[renter, host, void]`).
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FileContract {
    pub filesize: u64,
    pub file_merkle_root: Hash256,
    pub window_start: BlockHeight,
    pub window_end: BlockHeight,
    pub valid_proof_outputs: Vec<SiacoinOutput>,
    pub missed_proof_outputs: Vec<SiacoinOutput>,
    pub unlock_hash: Hash256,
    pub revision_number: u64,
}

impl FileContract {
    pub fn is_locked(&self) -> bool {
        self.revision_number == MAX_REVISION_NUMBER
    }
}

/// A revision of a [`FileContract`]: the contract plus the identifier of the formation output it
/// descends from, and the unlock conditions that must co-sign every successor.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FileContractRevision {
    pub parent_id: Hash256,
    pub unlock_conditions: UnlockConditions,
    pub contract: FileContract,
}

impl FileContractRevision {
    pub fn revision_number(&self) -> u64 {
        self.contract.revision_number
    }

    pub fn valid_proof_outputs(&self) -> &[SiacoinOutput] {
        &self.contract.valid_proof_outputs
    }

    pub fn missed_proof_outputs(&self) -> &[SiacoinOutput] {
        &self.contract.missed_proof_outputs
    }
}

/// The minimal shape of a formation transaction needed to derive `ParentID` for
/// [`crate::construct::initial_revision`]. Everything else about transaction construction
/// (inputs, signatures, fees) belongs to the transport layer, not this core.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct FormationTransaction {
    pub file_contracts: Vec<FileContract>,
}

impl FormationTransaction {
    /// The identifier of the file-contract output at `index`, derived by hashing its canonical
    /// encoding. A full transaction-id scheme additionally domain-separates this against the
    /// rest of the transaction's fields; that scheme belongs to the chain's wire encoding and is
    /// out of scope here.
    pub fn file_contract_id(&self, index: usize) -> Option<Hash256> {
        let fc = self.file_contracts.get(index)?;
        Some(crate::hashing::hash_file_contract(fc))
    }
}
