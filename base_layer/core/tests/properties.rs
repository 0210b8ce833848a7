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

//! Property tests for the testable invariants in the validation core's design notes: accepted
//! payment/program revisions move exactly the declared amounts, and `revise` never trips the
//! structural predicate when it is asked to conserve sums and advance the revision number.

use contract_core::{
    construct::revise,
    contract::{FileContract, FileContractRevision, SiacoinOutput},
    validation::{validate_payment_revision, validate_program_revision, validate_revision},
};
use contract_types::{Address, BlockHeight, Currency, Hash256, UnlockConditions, UnlockKey};
use quickcheck::{quickcheck, TestResult};

fn renter_address() -> Address {
    Address::new([1u8; 32])
}

fn host_address() -> Address {
    Address::new([2u8; 32])
}

fn sample_revision(revision_number: u64, renter_valid: u64, host_valid: u64, void_missed: u64) -> FileContractRevision {
    let renter = Currency::from(renter_valid);
    let host = Currency::from(host_valid);
    let contract = FileContract {
        filesize: 0,
        file_merkle_root: Hash256::ZERO,
        window_start: BlockHeight(100),
        window_end: BlockHeight(200),
        valid_proof_outputs: vec![
            SiacoinOutput::new(renter_address(), renter),
            SiacoinOutput::new(host_address(), host),
        ],
        missed_proof_outputs: vec![
            SiacoinOutput::new(renter_address(), renter),
            SiacoinOutput::new(host_address(), host),
            SiacoinOutput::new(Address::VOID, Currency::from(void_missed)),
        ],
        unlock_hash: Hash256::ZERO,
        revision_number,
    };
    FileContractRevision {
        parent_id: Hash256::ZERO,
        unlock_conditions: UnlockConditions::new(UnlockKey::new([9u8; 32]), UnlockKey::new([8u8; 32])),
        contract,
    }
}

quickcheck! {
    /// Every accepted payment revision moves exactly `payment` from the renter's valid and
    /// missed payouts to the host's.
    fn accepted_payment_moves_exactly_the_declared_amount(renter_valid: u64, host_valid: u64, payment: u64) -> TestResult {
        if payment == 0 || payment > renter_valid || host_valid.checked_add(payment).is_none() {
            return TestResult::discard();
        }

        let current = sample_revision(1, renter_valid, host_valid, 0);
        let revision = sample_revision(2, renter_valid - payment, host_valid + payment, 0);

        match validate_payment_revision(&current, &revision, Currency::from(payment)) {
            Ok(()) => TestResult::from_bool(
                current.valid_proof_outputs()[0].value.checked_sub(revision.valid_proof_outputs()[0].value)
                    == Some(Currency::from(payment)),
            ),
            Err(_) => TestResult::failed(),
        }
    }

    /// Every accepted program revision burns at most `storage + collateral` and leaves the
    /// renter's and the host's valid payouts, and the renter's missed payout, untouched.
    fn accepted_program_revision_only_moves_the_host_missed_and_void_outputs(
        renter_valid: u64,
        host_valid: u64,
        burn: u64,
        storage: u64,
        collateral: u64
    ) -> TestResult {
        if burn > host_valid || burn > storage.saturating_add(collateral) {
            return TestResult::discard();
        }
        if storage.checked_add(collateral).is_none() {
            return TestResult::discard();
        }

        let current = sample_revision(1, renter_valid, host_valid, 0);
        let mut revision = sample_revision(2, renter_valid, host_valid, burn);
        revision.contract.missed_proof_outputs[1].value = Currency::from(host_valid - burn);

        match validate_program_revision(
            &current,
            &revision,
            Currency::from(storage),
            Currency::from(collateral),
        ) {
            Ok(actual_burn) => TestResult::from_bool(actual_burn == Currency::from(burn)),
            Err(_) => TestResult::failed(),
        }
    }

    /// `revise` followed by the structural predicate never fails when the caller conserves the
    /// payout sums and the revision number strictly advances.
    fn revise_then_std_check_never_fails_when_sums_conserved(renter_valid: u64, host_valid: u64, transfer: u64) -> TestResult {
        if transfer > renter_valid || host_valid.checked_add(transfer).is_none() {
            return TestResult::discard();
        }

        let current = sample_revision(1, renter_valid, host_valid, 0);
        let valid_values = vec![Currency::from(renter_valid - transfer), Currency::from(host_valid + transfer)];
        let missed_values = vec![
            Currency::from(renter_valid - transfer),
            Currency::from(host_valid + transfer),
            Currency::ZERO,
        ];

        let revision = match revise(&current, 2, &valid_values, &missed_values) {
            Ok(r) => r,
            Err(_) => return TestResult::failed(),
        };

        TestResult::from_bool(validate_revision(&current, &revision).is_ok())
    }

    /// Revising a contract to carry forward its own current payouts at a higher revision number
    /// is a no-op: it passes the structural predicate with no transfer and no burn.
    fn revise_with_unchanged_values_is_idempotent(renter_valid: u64, host_valid: u64) -> TestResult {
        let current = sample_revision(1, renter_valid, host_valid, 0);
        let valid_values: Vec<Currency> = current.valid_proof_outputs().iter().map(|o| o.value).collect();
        let missed_values: Vec<Currency> = current.missed_proof_outputs().iter().map(|o| o.value).collect();

        let revision = match revise(&current, 2, &valid_values, &missed_values) {
            Ok(r) => r,
            Err(_) => return TestResult::failed(),
        };

        TestResult::from_bool(
            validate_revision(&current, &revision).is_ok()
                && revision.valid_proof_outputs()[1].value == current.valid_proof_outputs()[1].value
                && revision.missed_proof_outputs()[2].value == current.missed_proof_outputs()[2].value,
        )
    }
}
