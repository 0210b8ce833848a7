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

//! Accepts or rejects a freshly proposed file contract at revision 0.

use contract_types::{Address, BlockHeight, Currency, UnlockConditions, UnlockKey};
use log::debug;

use crate::{
    consensus::{HOST_INDEX, MISSED_PROOF_OUTPUTS_LEN, VALID_PROOF_OUTPUTS_LEN, VOID_INDEX},
    contract::FileContract,
    error::ContractError,
    settings::HostSettings,
};

const LOG_TARGET: &str = "contract_core::validation::formation";

/// Validates a freshly proposed file contract and, on success, returns the host's newly
/// committed locked collateral (`ValidHostPayout - ContractPrice`).
pub fn validate_formation(
    fc: &FileContract,
    host_key: UnlockKey,
    renter_key: UnlockKey,
    height: BlockHeight,
    settings: &HostSettings,
) -> Result<Currency, ContractError> {
    validate(fc, host_key, renter_key, height, settings).map_err(|err| {
        debug!(target: LOG_TARGET, "rejecting contract formation: {}", err);
        err
    })
}

fn validate(
    fc: &FileContract,
    host_key: UnlockKey,
    renter_key: UnlockKey,
    height: BlockHeight,
    settings: &HostSettings,
) -> Result<Currency, ContractError> {
    if fc.filesize != 0 || fc.revision_number != 0 || !fc.file_merkle_root.is_zero() {
        return Err(ContractError::NotAFreshContract);
    }

    let earliest_start = height.saturating_add(settings.window_size);
    if fc.window_start.as_u64() < earliest_start.as_u64() {
        return Err(ContractError::WindowStartsTooSoon {
            window_start: fc.window_start.as_u64(),
            earliest: earliest_start.as_u64(),
        });
    }
    let latest_start = height.saturating_add(settings.max_duration);
    if fc.window_start.as_u64() > latest_start.as_u64() {
        return Err(ContractError::WindowStartsTooLate {
            window_start: fc.window_start.as_u64(),
            latest: latest_start.as_u64(),
        });
    }
    let earliest_end = fc.window_start.saturating_add(settings.window_size);
    if fc.window_end.as_u64() < earliest_end.as_u64() {
        return Err(ContractError::WindowTooNarrow {
            window_end: fc.window_end.as_u64(),
            earliest: earliest_end.as_u64(),
        });
    }

    if fc.valid_proof_outputs.len() != VALID_PROOF_OUTPUTS_LEN {
        return Err(ContractError::WrongValidProofOutputsLen {
            expected: VALID_PROOF_OUTPUTS_LEN,
            actual: fc.valid_proof_outputs.len(),
        });
    }
    if fc.missed_proof_outputs.len() != MISSED_PROOF_OUTPUTS_LEN {
        return Err(ContractError::WrongMissedProofOutputsLen {
            expected: MISSED_PROOF_OUTPUTS_LEN,
            actual: fc.missed_proof_outputs.len(),
        });
    }

    if fc.valid_proof_outputs[HOST_INDEX].address != settings.address {
        return Err(ContractError::WrongHostAddress);
    }
    if fc.missed_proof_outputs[HOST_INDEX].address != settings.address {
        return Err(ContractError::WrongHostAddress);
    }

    if fc.missed_proof_outputs[VOID_INDEX].address != Address::VOID {
        return Err(ContractError::WrongVoidAddress);
    }
    if !fc.missed_proof_outputs[VOID_INDEX].value.is_zero() {
        return Err(ContractError::VoidOutputAlreadyFunded);
    }

    let valid_host_payout = fc.valid_proof_outputs[HOST_INDEX].value;
    let missed_host_payout = fc.missed_proof_outputs[HOST_INDEX].value;

    if valid_host_payout < settings.contract_price {
        return Err(ContractError::HostPayoutBelowContractPrice {
            payout: valid_host_payout,
            price: settings.contract_price,
        });
    }
    if valid_host_payout != missed_host_payout {
        return Err(ContractError::CollateralAlreadyRisked {
            valid: valid_host_payout,
            missed: missed_host_payout,
        });
    }
    if valid_host_payout > settings.max_collateral {
        return Err(ContractError::CollateralExceedsMax {
            payout: valid_host_payout,
            max: settings.max_collateral,
        });
    }

    let expected_unlock_hash = UnlockConditions::new(renter_key, host_key).hash();
    if fc.unlock_hash != expected_unlock_hash {
        return Err(ContractError::UnlockHashMismatch);
    }

    valid_host_payout
        .checked_sub(settings.contract_price)
        .ok_or(ContractError::CurrencyUnderflow)
}
