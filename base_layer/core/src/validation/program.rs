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

//! Accepts or rejects a revision that burns host collateral into the void output, up to a
//! declared bound, while leaving every other payout unchanged.

use contract_types::Currency;
use log::debug;

use crate::{
    consensus::{HOST_INDEX, RENTER_INDEX, VOID_INDEX},
    contract::FileContractRevision,
    error::ContractError,
    validation::std_check,
};

const LOG_TARGET: &str = "contract_core::validation::program";

/// Validates that `revision` burns at most `storage + collateral` of the host's missed payout
/// into the void output, with valid outputs and the renter's missed payout left untouched.
/// Returns the actual burn on success.
pub fn validate_program_revision(
    current: &FileContractRevision,
    revision: &FileContractRevision,
    storage: Currency,
    collateral: Currency,
) -> Result<Currency, ContractError> {
    validate(current, revision, storage, collateral).map_err(|err| {
        debug!(target: LOG_TARGET, "rejecting program revision: {}", err);
        err
    })
}

fn validate(
    current: &FileContractRevision,
    revision: &FileContractRevision,
    storage: Currency,
    collateral: Currency,
) -> Result<Currency, ContractError> {
    std_check::check(current, revision)?;

    let current_valid = current.valid_proof_outputs();
    let current_missed = current.missed_proof_outputs();
    let proposed_valid = revision.valid_proof_outputs();
    let proposed_missed = revision.missed_proof_outputs();

    let host_burn = current_missed[HOST_INDEX]
        .value
        .checked_sub(proposed_missed[HOST_INDEX].value)
        .ok_or(ContractError::HostMissedPayoutMustDecrease)?;

    let bound = storage.checked_add(collateral).ok_or(ContractError::CurrencyOverflow)?;
    if host_burn > bound {
        return Err(ContractError::ExcessiveHostBurn {
            expected: bound,
            actual: host_burn,
        });
    }

    let void_delta = proposed_missed[VOID_INDEX]
        .value
        .checked_sub(current_missed[VOID_INDEX].value)
        .ok_or(ContractError::CurrencyUnderflow)?;
    if void_delta != host_burn {
        return Err(ContractError::BurnNotCreditedToVoid {
            burn: host_burn,
            found: void_delta,
        });
    }

    if proposed_valid[RENTER_INDEX].value != current_valid[RENTER_INDEX].value {
        return Err(ContractError::ValidRenterPayoutChanged);
    }
    if proposed_valid[HOST_INDEX].value != current_valid[HOST_INDEX].value {
        return Err(ContractError::ValidHostPayoutChanged);
    }
    if proposed_missed[RENTER_INDEX].value != current_missed[RENTER_INDEX].value {
        return Err(ContractError::MissedRenterPayoutChanged);
    }

    Ok(host_burn)
}
