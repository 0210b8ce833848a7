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

//! Accepts or rejects a revision that transfers a fixed payment from renter outputs to host
//! outputs, with nothing else moving.

use contract_types::Currency;
use log::debug;

use crate::{
    consensus::{HOST_INDEX, RENTER_INDEX},
    contract::FileContractRevision,
    error::ContractError,
    validation::std_check,
};

const LOG_TARGET: &str = "contract_core::validation::payment";

/// Validates that `revision` is exactly a payment transfer of `payment`: the renter's valid and
/// missed payouts each decrease by `payment`, the host's valid and missed payouts each increase by
/// `payment`, and nothing else changes.
pub fn validate_payment_revision(
    current: &FileContractRevision,
    revision: &FileContractRevision,
    payment: Currency,
) -> Result<(), ContractError> {
    validate(current, revision, payment).map_err(|err| {
        debug!(target: LOG_TARGET, "rejecting payment revision: {}", err);
        err
    })
}

fn validate(
    current: &FileContractRevision,
    revision: &FileContractRevision,
    payment: Currency,
) -> Result<(), ContractError> {
    std_check::check(current, revision)?;

    let current_valid = current.valid_proof_outputs();
    let current_missed = current.missed_proof_outputs();
    let proposed_valid = revision.valid_proof_outputs();
    let proposed_missed = revision.missed_proof_outputs();

    let expected_renter_valid = current_valid[RENTER_INDEX]
        .value
        .checked_sub(payment)
        .ok_or(ContractError::RenterValidPayoutMustDecrease)?;
    if proposed_valid[RENTER_INDEX].value != expected_renter_valid {
        return Err(ContractError::RenterValidPayoutMustDecrease);
    }

    let expected_renter_missed = current_missed[RENTER_INDEX]
        .value
        .checked_sub(payment)
        .ok_or(ContractError::RenterMissedPayoutMustDecrease)?;
    if proposed_missed[RENTER_INDEX].value != expected_renter_missed {
        return Err(ContractError::RenterMissedPayoutMustDecrease);
    }

    let expected_host_valid = current_valid[HOST_INDEX]
        .value
        .checked_add(payment)
        .ok_or(ContractError::CurrencyOverflow)?;
    if proposed_valid[HOST_INDEX].value != expected_host_valid {
        return Err(ContractError::HostValidPayoutMustIncrease);
    }

    let expected_host_missed = current_missed[HOST_INDEX]
        .value
        .checked_add(payment)
        .ok_or(ContractError::CurrencyOverflow)?;
    if proposed_missed[HOST_INDEX].value != expected_host_missed {
        return Err(ContractError::HostMissedPayoutMustIncrease);
    }

    Ok(())
}
