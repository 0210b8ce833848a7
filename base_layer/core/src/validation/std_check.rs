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

//! The foundational structural predicate shared by every validator that accepts a *successor*
//! revision of an existing contract. The clearing validator is the one exception -- see
//! [`crate::validation::clearing`] for why it cannot share this check.

use contract_types::Currency;

use crate::{
    consensus::{MISSED_PROOF_OUTPUTS_LEN, RENTER_INDEX, VALID_PROOF_OUTPUTS_LEN},
    contract::FileContractRevision,
    error::ContractError,
};

/// Checks that `revision` is a structurally legal successor of `current`: fixed output arity,
/// unchanged addresses, conserved payout sums, an unchanged window and unlock scheme, a strictly
/// advancing revision number, and a renter that never gains. Scan order is fixed; the first
/// violated invariant is returned.
pub fn check(current: &FileContractRevision, revision: &FileContractRevision) -> Result<(), ContractError> {
    // A locked contract sits at MAX_REVISION_NUMBER; no value exceeds it, so the revision-number
    // check below (invariant 6) rejects any successor without a separate early exit here.
    let current_valid = current.valid_proof_outputs();
    let current_missed = current.missed_proof_outputs();
    let proposed_valid = revision.valid_proof_outputs();
    let proposed_missed = revision.missed_proof_outputs();

    if current_valid.len() != VALID_PROOF_OUTPUTS_LEN || proposed_valid.len() != VALID_PROOF_OUTPUTS_LEN {
        return Err(ContractError::WrongValidProofOutputsLen {
            expected: VALID_PROOF_OUTPUTS_LEN,
            actual: proposed_valid.len(),
        });
    }
    if current_missed.len() != MISSED_PROOF_OUTPUTS_LEN || proposed_missed.len() != MISSED_PROOF_OUTPUTS_LEN {
        return Err(ContractError::WrongMissedProofOutputsLen {
            expected: MISSED_PROOF_OUTPUTS_LEN,
            actual: proposed_missed.len(),
        });
    }

    for i in 0..VALID_PROOF_OUTPUTS_LEN {
        if proposed_valid[i].address != current_valid[i].address {
            return Err(ContractError::ValidProofOutputAddressChanged { index: i });
        }
    }
    for i in 0..MISSED_PROOF_OUTPUTS_LEN {
        if proposed_missed[i].address != current_missed[i].address {
            return Err(ContractError::MissedProofOutputAddressChanged { index: i });
        }
    }

    if revision.contract.unlock_hash != current.contract.unlock_hash {
        return Err(ContractError::UnlockHashChanged);
    }
    if revision.unlock_conditions.hash() != current.unlock_conditions.hash() {
        return Err(ContractError::UnlockConditionsChanged);
    }

    if revision.contract.window_start != current.contract.window_start {
        return Err(ContractError::WindowStartChanged);
    }
    if revision.contract.window_end != current.contract.window_end {
        return Err(ContractError::WindowEndChanged);
    }

    if revision.revision_number() <= current.revision_number() {
        return Err(ContractError::RevisionNumberMustIncrease {
            current: current.revision_number(),
            proposed: revision.revision_number(),
        });
    }

    let current_valid_sum =
        Currency::checked_sum(current_valid.iter().map(|o| o.value)).ok_or(ContractError::CurrencyOverflow)?;
    let proposed_valid_sum =
        Currency::checked_sum(proposed_valid.iter().map(|o| o.value)).ok_or(ContractError::CurrencyOverflow)?;
    let proposed_missed_sum =
        Currency::checked_sum(proposed_missed.iter().map(|o| o.value)).ok_or(ContractError::CurrencyOverflow)?;

    if proposed_valid_sum != current_valid_sum {
        return Err(ContractError::ValidProofOutputSumChanged);
    }
    if proposed_missed_sum != current_valid_sum {
        return Err(ContractError::MissedProofOutputSumMismatch);
    }

    if proposed_valid[RENTER_INDEX].value > current_valid[RENTER_INDEX].value {
        return Err(ContractError::RenterPayoutIncreased);
    }
    if proposed_missed[RENTER_INDEX].value > current_missed[RENTER_INDEX].value {
        return Err(ContractError::RenterPayoutIncreased);
    }

    if proposed_valid[RENTER_INDEX].value != proposed_missed[RENTER_INDEX].value {
        return Err(ContractError::RenterValidMissedMismatch);
    }

    Ok(())
}
