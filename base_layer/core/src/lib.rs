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

//! The contract revision validation core for a storage-marketplace host.
//!
//! Every function exported here is pure: it takes owned or borrowed value types and returns a
//! value or a [`error::ContractError`], performs no I/O, and retains no reference to its inputs
//! after returning. Surrounding concerns -- transaction signing, network framing, sector
//! persistence, settings negotiation, fee computation, block-window monitoring, proof generation
//! -- are the responsibility of external collaborators that call into this crate with already-
//! parsed messages.

pub mod consensus;
pub mod construct;
pub mod contract;
pub mod error;
pub mod hashing;
pub mod settings;
pub mod validation;

pub use construct::{clearing_revision, initial_revision, revise};
pub use contract::{FileContract, FileContractRevision, FormationTransaction, SiacoinOutput};
pub use error::ContractError;
pub use hashing::hash_revision;
pub use settings::HostSettings;
pub use validation::{
    validate_clearing_revision,
    validate_formation,
    validate_payment_revision,
    validate_program_revision,
    validate_renewal,
    validate_revision,
    general::validate_general_revision,
    renewal::RenewalOutcome,
};

#[cfg(test)]
pub(crate) mod test_support {
    use contract_types::{Address, BlockHeight, Currency, Hash256, UnlockConditions, UnlockKey};

    use crate::contract::{FileContract, FileContractRevision, SiacoinOutput};

    /// Builds a structurally valid (but otherwise zeroed) contract, then applies `f` to adjust
    /// the fields a given test cares about. Covers every validator's baseline shape so tests only
    /// need to state what differs.
    pub fn contract_with(f: impl FnOnce(&mut FileContract)) -> FileContract {
        let mut contract = FileContract {
            filesize: 0,
            file_merkle_root: Hash256::ZERO,
            window_start: BlockHeight(0),
            window_end: BlockHeight(0),
            valid_proof_outputs: vec![
                SiacoinOutput::new(renter_address(), Currency::ZERO),
                SiacoinOutput::new(host_address(), Currency::ZERO),
            ],
            missed_proof_outputs: vec![
                SiacoinOutput::new(renter_address(), Currency::ZERO),
                SiacoinOutput::new(host_address(), Currency::ZERO),
                SiacoinOutput::new(Address::VOID, Currency::ZERO),
            ],
            unlock_hash: Hash256::ZERO,
            revision_number: 0,
        };
        f(&mut contract);
        contract
    }

    /// Wraps a contract into a revision with fixed sample unlock conditions and parent id.
    pub fn revision_of(contract: FileContract) -> FileContractRevision {
        FileContractRevision {
            parent_id: Hash256::ZERO,
            unlock_conditions: UnlockConditions::new(renter_key(), host_key()),
            contract,
        }
    }

    pub fn renter_address() -> Address {
        Address::new([1u8; 32])
    }

    pub fn host_address() -> Address {
        Address::new([2u8; 32])
    }

    pub fn renter_key() -> UnlockKey {
        UnlockKey::new([9u8; 32])
    }

    pub fn host_key() -> UnlockKey {
        UnlockKey::new([8u8; 32])
    }
}
