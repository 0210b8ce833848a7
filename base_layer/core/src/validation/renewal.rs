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

//! Accepts or rejects a renewal contract referencing an existing revision, and derives the
//! revenue, risked collateral, and locked collateral it commits the host to.

use contract_types::{Address, BlockHeight, Currency, UnlockConditions, UnlockKey};
use log::debug;

use crate::{
    consensus::{HOST_INDEX, MISSED_PROOF_OUTPUTS_LEN, VALID_PROOF_OUTPUTS_LEN, VOID_INDEX},
    contract::{FileContract, FileContractRevision},
    error::ContractError,
    settings::HostSettings,
};

const LOG_TARGET: &str = "contract_core::validation::renewal";

/// The quantities a successful renewal commits the host to: the revenue it has already earned
/// from the prior contract term, the collateral it has authorized to be burned on a missed
/// proof, and the total collateral locked for the new term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenewalOutcome {
    pub storage_revenue: Currency,
    pub risked_collateral: Currency,
    pub locked_collateral: Currency,
}

/// Validates a proposed renewal `renewal` of the contract underlying `existing`, and on success
/// returns the derived [`RenewalOutcome`].
#[allow(clippy::too_many_arguments)]
pub fn validate_renewal(
    existing: &FileContractRevision,
    renewal: &FileContract,
    host_key: UnlockKey,
    renter_key: UnlockKey,
    base_host_revenue: Currency,
    base_risked_collateral: Currency,
    height: BlockHeight,
    settings: &HostSettings,
) -> Result<RenewalOutcome, ContractError> {
    validate(
        existing,
        renewal,
        host_key,
        renter_key,
        base_host_revenue,
        base_risked_collateral,
        height,
        settings,
    )
    .map_err(|err| {
        debug!(target: LOG_TARGET, "rejecting contract renewal: {}", err);
        err
    })
}

#[allow(clippy::too_many_arguments)]
fn validate(
    existing: &FileContractRevision,
    renewal: &FileContract,
    host_key: UnlockKey,
    renter_key: UnlockKey,
    base_host_revenue: Currency,
    base_risked_collateral: Currency,
    height: BlockHeight,
    settings: &HostSettings,
) -> Result<RenewalOutcome, ContractError> {
    let existing_contract = &existing.contract;

    if renewal.revision_number != 0 {
        return Err(ContractError::NotAFreshContract);
    }
    if renewal.filesize != existing_contract.filesize || renewal.file_merkle_root != existing_contract.file_merkle_root
    {
        return Err(ContractError::RenewalDataChanged);
    }

    if renewal.window_end < existing_contract.window_end {
        return Err(ContractError::WindowShortened);
    }
    let earliest_start = height.saturating_add(settings.window_size);
    if renewal.window_start.as_u64() < earliest_start.as_u64() {
        return Err(ContractError::WindowStartsTooSoon {
            window_start: renewal.window_start.as_u64(),
            earliest: earliest_start.as_u64(),
        });
    }
    let latest_start = height.saturating_add(settings.max_duration);
    if renewal.window_start.as_u64() > latest_start.as_u64() {
        return Err(ContractError::WindowStartsTooLate {
            window_start: renewal.window_start.as_u64(),
            latest: latest_start.as_u64(),
        });
    }
    let earliest_end = renewal.window_start.saturating_add(settings.window_size);
    if renewal.window_end.as_u64() < earliest_end.as_u64() {
        return Err(ContractError::WindowTooNarrow {
            window_end: renewal.window_end.as_u64(),
            earliest: earliest_end.as_u64(),
        });
    }

    if renewal.valid_proof_outputs.len() != VALID_PROOF_OUTPUTS_LEN {
        return Err(ContractError::WrongValidProofOutputsLen {
            expected: VALID_PROOF_OUTPUTS_LEN,
            actual: renewal.valid_proof_outputs.len(),
        });
    }
    if renewal.missed_proof_outputs.len() != MISSED_PROOF_OUTPUTS_LEN {
        return Err(ContractError::WrongMissedProofOutputsLen {
            expected: MISSED_PROOF_OUTPUTS_LEN,
            actual: renewal.missed_proof_outputs.len(),
        });
    }
    if renewal.valid_proof_outputs[HOST_INDEX].address != settings.address
        || renewal.missed_proof_outputs[HOST_INDEX].address != settings.address
    {
        return Err(ContractError::WrongHostAddress);
    }
    if renewal.missed_proof_outputs[VOID_INDEX].address != Address::VOID {
        return Err(ContractError::WrongVoidAddress);
    }

    let expected_unlock_hash = UnlockConditions::new(renter_key, host_key).hash();
    if renewal.unlock_hash != expected_unlock_hash {
        return Err(ContractError::UnlockHashMismatch);
    }

    let valid_host_payout = renewal.valid_proof_outputs[HOST_INDEX].value;
    let missed_host_payout = renewal.missed_proof_outputs[HOST_INDEX].value;

    let host_burn = valid_host_payout
        .checked_sub(missed_host_payout)
        .ok_or(ContractError::CurrencyUnderflow)?;

    let expected_burn = base_host_revenue
        .checked_add(base_risked_collateral)
        .ok_or(ContractError::CurrencyOverflow)?;
    if host_burn > expected_burn {
        return Err(ContractError::ExcessiveHostBurn {
            expected: expected_burn,
            actual: host_burn,
        });
    }

    let void_value = renewal.missed_proof_outputs[VOID_INDEX].value;
    if void_value != host_burn {
        return Err(ContractError::BurnNotCreditedToVoid {
            burn: host_burn,
            found: void_value,
        });
    }

    let risked_collateral = host_burn.saturating_sub(base_host_revenue);

    let locked_collateral = valid_host_payout
        .checked_sub(base_host_revenue)
        .ok_or(ContractError::CurrencyUnderflow)?;
    if locked_collateral > settings.max_collateral {
        return Err(ContractError::CollateralExceedsMax {
            payout: locked_collateral,
            max: settings.max_collateral,
        });
    }

    Ok(RenewalOutcome {
        storage_revenue: base_host_revenue,
        risked_collateral,
        locked_collateral,
    })
}

#[cfg(test)]
mod tests {
    use contract_types::Hash256;

    use super::*;
    use crate::{contract::SiacoinOutput, test_support::revision_of};

    fn settings() -> HostSettings {
        HostSettings::new(host_address(), Currency::from(10u64), Currency::from(100u64), 10, 200)
    }

    fn host_address() -> Address {
        Address::new([2u8; 32])
    }

    fn renter_key() -> UnlockKey {
        UnlockKey::new([3u8; 32])
    }

    fn host_key() -> UnlockKey {
        UnlockKey::new([4u8; 32])
    }

    fn existing_contract(filesize: u64, merkle_root: Hash256) -> FileContractRevision {
        revision_of(FileContract {
            filesize,
            file_merkle_root: merkle_root,
            window_start: BlockHeight(100),
            window_end: BlockHeight(200),
            valid_proof_outputs: vec![
                SiacoinOutput::new(Address::new([1u8; 32]), Currency::from(60u64)),
                SiacoinOutput::new(host_address(), Currency::from(40u64)),
            ],
            missed_proof_outputs: vec![
                SiacoinOutput::new(Address::new([1u8; 32]), Currency::from(60u64)),
                SiacoinOutput::new(host_address(), Currency::from(40u64)),
                SiacoinOutput::new(Address::VOID, Currency::ZERO),
            ],
            unlock_hash: UnlockConditions::new(renter_key(), host_key()).hash(),
            revision_number: 1,
        })
    }

    fn renewal_contract(window_end: BlockHeight, host_burn: u64) -> FileContract {
        FileContract {
            filesize: 1024,
            file_merkle_root: Hash256::new([9u8; 32]),
            window_start: BlockHeight(150),
            window_end,
            valid_proof_outputs: vec![
                SiacoinOutput::new(Address::new([1u8; 32]), Currency::from(60u64)),
                SiacoinOutput::new(host_address(), Currency::from(50u64)),
            ],
            missed_proof_outputs: vec![
                SiacoinOutput::new(Address::new([1u8; 32]), Currency::from(60u64)),
                SiacoinOutput::new(host_address(), Currency::from(50u64 - host_burn)),
                SiacoinOutput::new(Address::VOID, Currency::from(host_burn)),
            ],
            unlock_hash: UnlockConditions::new(renter_key(), host_key()).hash(),
            revision_number: 0,
        }
    }

    #[test]
    fn accepts_a_renewal_that_carries_data_forward_and_derives_the_outcome() {
        let existing = existing_contract(1024, Hash256::new([9u8; 32]));
        let renewal = renewal_contract(BlockHeight(400), 5);

        let outcome = validate_renewal(
            &existing,
            &renewal,
            host_key(),
            renter_key(),
            Currency::from(3u64),
            Currency::from(7u64),
            BlockHeight(0),
            &settings(),
        )
        .unwrap();

        assert_eq!(outcome.storage_revenue, Currency::from(3u64));
        assert_eq!(outcome.risked_collateral, Currency::from(2u64));
        assert_eq!(outcome.locked_collateral, Currency::from(47u64));
    }

    #[test]
    fn rejects_a_renewal_that_changes_the_stored_data() {
        let existing = existing_contract(1024, Hash256::new([9u8; 32]));
        let mut renewal = renewal_contract(BlockHeight(400), 5);
        renewal.filesize = 2048;

        let err = validate_renewal(
            &existing,
            &renewal,
            host_key(),
            renter_key(),
            Currency::from(3u64),
            Currency::from(7u64),
            BlockHeight(0),
            &settings(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::RenewalDataChanged);
    }

    #[test]
    fn rejects_a_burn_exceeding_revenue_plus_risked_collateral() {
        let existing = existing_contract(1024, Hash256::new([9u8; 32]));
        let renewal = renewal_contract(BlockHeight(400), 11);

        let err = validate_renewal(
            &existing,
            &renewal,
            host_key(),
            renter_key(),
            Currency::from(3u64),
            Currency::from(7u64),
            BlockHeight(0),
            &settings(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::ExcessiveHostBurn {
                expected: Currency::from(10u64),
                actual: Currency::from(11u64)
            }
        );
    }

    #[test]
    fn rejects_a_shortened_window() {
        let existing = existing_contract(1024, Hash256::new([9u8; 32]));
        let renewal = renewal_contract(BlockHeight(150), 5);

        let err = validate_renewal(
            &existing,
            &renewal,
            host_key(),
            renter_key(),
            Currency::from(3u64),
            Currency::from(7u64),
            BlockHeight(0),
            &settings(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::WindowShortened);
    }
}
