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

//! The analytic layer shared by [`crate::validation::payment`] and
//! [`crate::validation::program`]: given a `(current, revision)` pair that has already passed
//! [`crate::validation::std_check`], decide whether the payout movement it describes is exactly a
//! transfer of `payment` from renter to host plus a burn of at most `collateral` from the host's
//! missed payout, and report the amounts actually moved.

use contract_types::Currency;

use crate::{
    consensus::{HOST_INDEX, RENTER_INDEX},
    contract::FileContractRevision,
    error::ContractError,
    validation::std_check,
};

/// The amounts a general revision actually moves: `to_host` credited from the renter's valid and
/// missed payouts, and `host_burn` removed from the host's missed payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralOutcome {
    pub to_host: Currency,
    pub host_burn: Currency,
}

/// Validates that `revision` moves exactly `payment` from the renter to the host and burns at
/// most `collateral` of the host's missed payout, after confirming `(current, revision)` is a
/// structurally legal successor pair.
pub fn validate_general_revision(
    current: &FileContractRevision,
    revision: &FileContractRevision,
    payment: Currency,
    collateral: Currency,
) -> Result<GeneralOutcome, ContractError> {
    std_check::check(current, revision)?;

    let current_valid = current.valid_proof_outputs();
    let current_missed = current.missed_proof_outputs();
    let proposed_valid = revision.valid_proof_outputs();
    let proposed_missed = revision.missed_proof_outputs();

    if current_valid[RENTER_INDEX].value < payment {
        return Err(ContractError::InsufficientRenterValidFunds {
            have: current_valid[RENTER_INDEX].value,
            payment,
        });
    }
    if current_missed[RENTER_INDEX].value < payment {
        return Err(ContractError::InsufficientRenterMissedFunds {
            have: current_missed[RENTER_INDEX].value,
            payment,
        });
    }
    if current_missed[HOST_INDEX].value < collateral {
        return Err(ContractError::InsufficientHostMissedFunds {
            have: current_missed[HOST_INDEX].value,
            collateral,
        });
    }

    let from_renter = current_valid[RENTER_INDEX]
        .value
        .checked_sub(proposed_valid[RENTER_INDEX].value)
        .ok_or(ContractError::RenterValidPayoutMustDecrease)?;
    let to_host = proposed_valid[HOST_INDEX]
        .value
        .checked_sub(current_valid[HOST_INDEX].value)
        .ok_or(ContractError::HostValidPayoutMustIncrease)?;
    let host_burn = current_missed[HOST_INDEX]
        .value
        .checked_sub(proposed_missed[HOST_INDEX].value)
        .ok_or(ContractError::HostMissedPayoutMustDecrease)?;

    if from_renter != to_host {
        return Err(ContractError::TransferMismatch { from_renter, to_host });
    }
    if to_host < payment {
        return Err(ContractError::PaymentMismatch { to_host, payment });
    }
    if host_burn > collateral {
        return Err(ContractError::BurnExceedsCollateralBound { burn: host_burn, collateral });
    }

    Ok(GeneralOutcome { to_host, host_burn })
}
