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

//! Builders that produce the canonical next revision of a contract. Unlike the validators in
//! [`crate::validation`], these do not reject adversarial input -- they are used by the host's own
//! side of a negotiation to build the revision it is about to propose or countersign.

use contract_types::{Currency, UnlockConditions, UnlockKey};

use crate::{
    consensus::MAX_REVISION_NUMBER,
    contract::{FileContractRevision, FormationTransaction},
    error::ContractError,
};

/// Builds revision 1 of the first file contract in `formation`, with `parent_id` set to that
/// contract's id and unlock conditions `[renter_key, host_key]`.
pub fn initial_revision(
    formation: &FormationTransaction,
    host_key: UnlockKey,
    renter_key: UnlockKey,
) -> Result<FileContractRevision, ContractError> {
    let parent_id = formation
        .file_contract_id(0)
        .ok_or(ContractError::MissingFormationContract { index: 0 })?;
    let mut contract = formation.file_contracts[0].clone();
    contract.revision_number = 1;

    Ok(FileContractRevision {
        parent_id,
        unlock_conditions: UnlockConditions::new(renter_key, host_key),
        contract,
    })
}

/// Builds the successor of `rev` at `new_number`, replacing each valid- and missed-proof output's
/// value with the corresponding entry of `valid_values`/`missed_values` while preserving its
/// address. `new_number` must strictly exceed `rev`'s current revision number, and the value
/// vectors must match the existing output counts exactly.
pub fn revise(
    rev: &FileContractRevision,
    new_number: u64,
    valid_values: &[Currency],
    missed_values: &[Currency],
) -> Result<FileContractRevision, ContractError> {
    if new_number <= rev.revision_number() {
        return Err(ContractError::RevisionNumberMustBeGreater {
            current: rev.revision_number(),
        });
    }

    let current_valid = rev.valid_proof_outputs();
    if valid_values.len() != current_valid.len() {
        return Err(ContractError::IncorrectNumberOfOutputs {
            expected: current_valid.len(),
            actual: valid_values.len(),
        });
    }
    let current_missed = rev.missed_proof_outputs();
    if missed_values.len() != current_missed.len() {
        return Err(ContractError::IncorrectNumberOfOutputs {
            expected: current_missed.len(),
            actual: missed_values.len(),
        });
    }

    let mut contract = rev.contract.clone();
    contract.revision_number = new_number;
    for (output, value) in contract.valid_proof_outputs.iter_mut().zip(valid_values) {
        output.value = *value;
    }
    for (output, value) in contract.missed_proof_outputs.iter_mut().zip(missed_values) {
        output.value = *value;
    }

    Ok(FileContractRevision {
        contract,
        ..rev.clone()
    })
}

/// Builds the terminal clearing revision of `rev`: sets the valid payouts to `output_values`,
/// copies them onto the missed payouts unchanged, zeroes filesize and merkle root, and sets the
/// revision number to [`MAX_REVISION_NUMBER`]. Fails if `rev` is already locked or
/// `output_values` does not match the current valid-output count.
pub fn clearing_revision(
    rev: &FileContractRevision,
    output_values: &[Currency],
) -> Result<FileContractRevision, ContractError> {
    if rev.contract.is_locked() {
        return Err(ContractError::AlreadyLocked);
    }

    let current_valid = rev.valid_proof_outputs();
    if output_values.len() != current_valid.len() {
        return Err(ContractError::IncorrectNumberOfOutputs {
            expected: current_valid.len(),
            actual: output_values.len(),
        });
    }

    let mut contract = rev.contract.clone();
    for (output, value) in contract.valid_proof_outputs.iter_mut().zip(output_values) {
        output.value = *value;
    }
    contract.missed_proof_outputs = contract.valid_proof_outputs.clone();
    contract.filesize = 0;
    contract.file_merkle_root = contract_types::Hash256::ZERO;
    contract.revision_number = MAX_REVISION_NUMBER;

    Ok(FileContractRevision {
        contract,
        ..rev.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{contract_with, host_key, renter_key, revision_of};

    #[test]
    fn initial_revision_sets_revision_number_one_and_derives_parent_id() {
        let fc = contract_with(|_| {});
        let formation = FormationTransaction {
            file_contracts: vec![fc.clone()],
        };

        let rev = initial_revision(&formation, host_key(), renter_key()).unwrap();
        assert_eq!(rev.revision_number(), 1);
        assert_eq!(rev.parent_id, formation.file_contract_id(0).unwrap());
        assert_eq!(rev.unlock_conditions, UnlockConditions::new(renter_key(), host_key()));
    }

    #[test]
    fn revise_replaces_values_and_preserves_addresses() {
        let current = revision_of(contract_with(|c| {
            c.revision_number = 1;
            c.valid_proof_outputs[0].value = Currency::from(100u64);
            c.valid_proof_outputs[1].value = Currency::from(50u64);
            c.missed_proof_outputs[0].value = Currency::from(100u64);
            c.missed_proof_outputs[1].value = Currency::from(50u64);
            c.missed_proof_outputs[2].value = Currency::ZERO;
        }));

        let next = revise(
            &current,
            2,
            &[Currency::from(90u64), Currency::from(60u64)],
            &[Currency::from(90u64), Currency::from(60u64), Currency::ZERO],
        )
        .unwrap();

        assert_eq!(next.revision_number(), 2);
        assert_eq!(next.valid_proof_outputs()[0].value, Currency::from(90u64));
        assert_eq!(next.valid_proof_outputs()[0].address, current.valid_proof_outputs()[0].address);
        assert_eq!(next.valid_proof_outputs()[1].value, Currency::from(60u64));
    }

    #[test]
    fn revise_rejects_a_non_increasing_revision_number() {
        let current = revision_of(contract_with(|c| c.revision_number = 5));
        let err = revise(&current, 5, &[Currency::ZERO, Currency::ZERO], &[
            Currency::ZERO,
            Currency::ZERO,
            Currency::ZERO,
        ])
        .unwrap_err();
        assert_eq!(err, ContractError::RevisionNumberMustBeGreater { current: 5 });
    }

    #[test]
    fn revise_rejects_a_wrong_number_of_outputs() {
        let current = revision_of(contract_with(|c| c.revision_number = 1));
        let err = revise(&current, 2, &[Currency::ZERO], &[Currency::ZERO, Currency::ZERO, Currency::ZERO])
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::IncorrectNumberOfOutputs { expected: 2, actual: 1 }
        );
    }

    #[test]
    fn clearing_revision_equalizes_missed_and_valid_and_locks() {
        let current = revision_of(contract_with(|c| {
            c.revision_number = 5;
            c.filesize = 1024;
            c.valid_proof_outputs[0].value = Currency::from(100u64);
            c.valid_proof_outputs[1].value = Currency::from(50u64);
        }));

        let cleared = clearing_revision(&current, &[Currency::from(120u64), Currency::from(30u64)]).unwrap();
        assert_eq!(cleared.revision_number(), MAX_REVISION_NUMBER);
        assert_eq!(cleared.contract.filesize, 0);
        assert!(cleared.contract.file_merkle_root.is_zero());
        assert_eq!(cleared.valid_proof_outputs()[0].value, Currency::from(120u64));
        assert_eq!(cleared.missed_proof_outputs()[0].value, Currency::from(120u64));
        assert_eq!(cleared.missed_proof_outputs()[1].value, Currency::from(30u64));
    }

    #[test]
    fn clearing_revision_rejects_an_already_locked_contract() {
        let current = revision_of(contract_with(|c| c.revision_number = MAX_REVISION_NUMBER));
        let err = clearing_revision(&current, &[Currency::ZERO, Currency::ZERO]).unwrap_err();
        assert_eq!(err, ContractError::AlreadyLocked);
    }
}
