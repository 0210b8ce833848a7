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

//! Accepts or rejects the terminal revision that locks a contract at the maximum revision number
//! with equal valid and missed outputs.
//!
//! This validator deliberately does **not** call [`crate::validation::std_check`]: the standard
//! check's arity requirement (2 valid, 3 missed) is incompatible with a cleared contract, whose
//! valid and missed vectors must instead be of equal length to one another. It is its own
//! independent predicate.

use contract_types::Currency;
use log::debug;

use crate::{contract::FileContractRevision, error::ContractError};

const LOG_TARGET: &str = "contract_core::validation::clearing";

/// Validates that `final_revision` is a legal terminal clearing of `current`: zero filesize and
/// merkle root, an unchanged window and unlock scheme, the maximum revision number, and missed
/// outputs pointwise equal to valid outputs (no burn at clearing).
pub fn validate_clearing_revision(
    current: &FileContractRevision,
    final_revision: &FileContractRevision,
) -> Result<(), ContractError> {
    validate(current, final_revision).map_err(|err| {
        debug!(target: LOG_TARGET, "rejecting clearing revision: {}", err);
        err
    })
}

fn validate(current: &FileContractRevision, final_revision: &FileContractRevision) -> Result<(), ContractError> {
    let final_contract = &final_revision.contract;

    if final_contract.filesize != 0 {
        return Err(ContractError::ClearingFilesizeNotZero);
    }
    if !final_contract.file_merkle_root.is_zero() {
        return Err(ContractError::ClearingMerkleRootNotZero);
    }
    if final_contract.window_start != current.contract.window_start {
        return Err(ContractError::WindowStartChanged);
    }
    if final_contract.window_end != current.contract.window_end {
        return Err(ContractError::WindowEndChanged);
    }
    if final_contract.unlock_hash != current.contract.unlock_hash {
        return Err(ContractError::UnlockHashChanged);
    }
    if final_revision.unlock_conditions.hash() != current.unlock_conditions.hash() {
        return Err(ContractError::UnlockConditionsChanged);
    }

    let final_valid = final_revision.valid_proof_outputs();
    let final_missed = final_revision.missed_proof_outputs();
    if final_valid.len() != final_missed.len() {
        return Err(ContractError::ClearingOutputLengthMismatch);
    }

    if final_contract.revision_number != crate::consensus::MAX_REVISION_NUMBER {
        return Err(ContractError::ClearingRevisionNumberNotMax);
    }

    let current_valid = current.valid_proof_outputs();
    if final_valid.len() != current_valid.len() {
        return Err(ContractError::ClearingOutputLengthMismatch);
    }

    for (i, (final_out, current_out)) in final_valid.iter().zip(current_valid.iter()).enumerate() {
        if final_out.address != current_out.address {
            return Err(ContractError::ClearingOutputAddressChanged { index: i });
        }
        if final_out.value != current_out.value {
            return Err(ContractError::ClearingOutputValueChanged { index: i });
        }
    }

    for (i, (final_missed_out, final_valid_out)) in final_missed.iter().zip(final_valid.iter()).enumerate() {
        if final_missed_out.address != final_valid_out.address || final_missed_out.value != final_valid_out.value {
            return Err(ContractError::ClearingMissedNotEqualToValid { index: i });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{contract_with, revision_of};

    #[test]
    fn accepts_a_well_formed_clearing() {
        let current = revision_of(contract_with(|c| {
            c.revision_number = 5;
            c.valid_proof_outputs[0].value = Currency::from(100u64);
            c.valid_proof_outputs[1].value = Currency::from(50u64);
            c.missed_proof_outputs[0].value = Currency::from(100u64);
            c.missed_proof_outputs[1].value = Currency::from(50u64);
        }));

        let mut final_contract = current.contract.clone();
        final_contract.filesize = 0;
        final_contract.file_merkle_root = contract_types::Hash256::ZERO;
        final_contract.revision_number = crate::consensus::MAX_REVISION_NUMBER;
        final_contract.missed_proof_outputs = final_contract.valid_proof_outputs.clone();
        let final_revision = crate::contract::FileContractRevision {
            contract: final_contract,
            ..current.clone()
        };

        assert!(validate_clearing_revision(&current, &final_revision).is_ok());
    }

    #[test]
    fn rejects_a_missing_max_revision_number() {
        let current = revision_of(contract_with(|c| c.revision_number = 5));
        let mut final_contract = current.contract.clone();
        final_contract.missed_proof_outputs = final_contract.valid_proof_outputs.clone();
        final_contract.revision_number = 6;
        let final_revision = crate::contract::FileContractRevision {
            contract: final_contract,
            ..current.clone()
        };

        let err = validate_clearing_revision(&current, &final_revision).unwrap_err();
        assert_eq!(err, ContractError::ClearingRevisionNumberNotMax);
    }

    #[test]
    fn rejects_a_burn_at_clearing() {
        let current = revision_of(contract_with(|c| {
            c.revision_number = 5;
            c.valid_proof_outputs[0].value = Currency::from(100u64);
            c.valid_proof_outputs[1].value = Currency::from(50u64);
        }));
        let mut final_contract = current.contract.clone();
        final_contract.revision_number = crate::consensus::MAX_REVISION_NUMBER;
        final_contract.missed_proof_outputs = final_contract.valid_proof_outputs.clone();
        final_contract.missed_proof_outputs[1].value = Currency::from(40u64);
        let final_revision = crate::contract::FileContractRevision {
            contract: final_contract,
            ..current.clone()
        };

        let err = validate_clearing_revision(&current, &final_revision).unwrap_err();
        assert_eq!(err, ContractError::ClearingMissedNotEqualToValid { index: 1 });
    }
}
