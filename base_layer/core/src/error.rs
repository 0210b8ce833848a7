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

use contract_types::Currency;
use thiserror::Error;

/// The closed error taxonomy for every check a validator in this crate can fail. One variant per
/// named invariant; a validator never returns an error outside this set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    // --- Structural shape ---
    #[error("expected {expected} valid proof outputs, got {actual}")]
    WrongValidProofOutputsLen { expected: usize, actual: usize },

    #[error("expected {expected} missed proof outputs, got {actual}")]
    WrongMissedProofOutputsLen { expected: usize, actual: usize },

    #[error("valid proof output {index} address must not change")]
    ValidProofOutputAddressChanged { index: usize },

    #[error("missed proof output {index} address must not change")]
    MissedProofOutputAddressChanged { index: usize },

    #[error("unlock hash must not change")]
    UnlockHashChanged,

    #[error("unlock conditions must not change")]
    UnlockConditionsChanged,

    #[error("window start must not change")]
    WindowStartChanged,

    #[error("window end must not change")]
    WindowEndChanged,

    // --- Monotonicity ---
    #[error("revision number must increase: current {current}, proposed {proposed}")]
    RevisionNumberMustIncrease { current: u64, proposed: u64 },

    #[error("contract is already locked at the maximum revision number")]
    AlreadyLocked,

    // --- Conservation ---
    #[error("valid proof output sum must not change")]
    ValidProofOutputSumChanged,

    #[error("missed proof output sum must equal the valid proof output sum")]
    MissedProofOutputSumMismatch,

    #[error("renter's valid and missed payouts must be equal")]
    RenterValidMissedMismatch,

    #[error("renter payout must not increase")]
    RenterPayoutIncreased,

    // --- Feasibility (FormationValidator / RenewalValidator window checks) ---
    #[error("contract starts too soon: window start {window_start} is before height + window size {earliest}")]
    WindowStartsTooSoon { window_start: u64, earliest: u64 },

    #[error("contract starts too far in the future: window start {window_start} is after the latest allowed height {latest}")]
    WindowStartsTooLate { window_start: u64, latest: u64 },

    #[error("proof window is too narrow: window end {window_end} must be at least {earliest}")]
    WindowTooNarrow { window_end: u64, earliest: u64 },

    #[error("window end must not precede the existing contract's window end")]
    WindowShortened,

    #[error("file data must be carried across a renewal unchanged")]
    RenewalDataChanged,

    #[error("a freshly formed or renewed contract must start at revision number 0")]
    NotAFreshContract,

    // --- Funding / policy (FormationValidator, RenewalValidator, General/Payment/Program) ---
    #[error("host output address must equal the host's configured address")]
    WrongHostAddress,

    #[error("void output address must be the distinguished void address")]
    WrongVoidAddress,

    #[error("a freshly formed contract must not pre-burn collateral into the void output")]
    VoidOutputAlreadyFunded,

    #[error("freshly formed or renewed contract must not risk collateral yet: valid host payout {valid} != missed host payout {missed}")]
    CollateralAlreadyRisked { valid: Currency, missed: Currency },

    #[error("host payout {payout} is below the contract price {price}")]
    HostPayoutBelowContractPrice { payout: Currency, price: Currency },

    #[error("host payout {payout} exceeds the maximum collateral {max}")]
    CollateralExceedsMax { payout: Currency, max: Currency },

    #[error("unlock hash does not match the hash of the supplied unlock conditions")]
    UnlockHashMismatch,

    #[error("host expected to burn at most {expected}, but burned {actual}")]
    ExcessiveHostBurn { expected: Currency, actual: Currency },

    #[error("the entire host burn of {burn} must be credited to the void output, found {found}")]
    BurnNotCreditedToVoid { burn: Currency, found: Currency },

    #[error("renter valid payout {have} is insufficient to fund a payment of {payment}")]
    InsufficientRenterValidFunds { have: Currency, payment: Currency },

    #[error("renter missed payout {have} is insufficient to fund a payment of {payment}")]
    InsufficientRenterMissedFunds { have: Currency, payment: Currency },

    #[error("host missed payout {have} is insufficient to fund collateral of {collateral}")]
    InsufficientHostMissedFunds { have: Currency, collateral: Currency },

    #[error("renter valid payout must decrease by the payment amount")]
    RenterValidPayoutMustDecrease,

    #[error("renter missed payout must decrease by the payment amount")]
    RenterMissedPayoutMustDecrease,

    #[error("host valid payout must increase by the payment amount")]
    HostValidPayoutMustIncrease,

    #[error("host missed payout must increase by the payment amount")]
    HostMissedPayoutMustIncrease,

    #[error("host missed payout must decrease by the burn amount")]
    HostMissedPayoutMustDecrease,

    #[error("amount transferred from the renter ({from_renter}) must equal the amount credited to the host ({to_host})")]
    TransferMismatch { from_renter: Currency, to_host: Currency },

    #[error("amount credited to the host ({to_host}) must equal the declared payment ({payment})")]
    PaymentMismatch { to_host: Currency, payment: Currency },

    #[error("host burn ({burn}) must not exceed the declared collateral bound ({collateral})")]
    BurnExceedsCollateralBound { burn: Currency, collateral: Currency },

    #[error("renter's valid payout must not change in a program revision")]
    ValidRenterPayoutChanged,

    #[error("host's valid payout must not change in a program revision")]
    ValidHostPayoutChanged,

    #[error("renter's missed payout must not change in a program revision")]
    MissedRenterPayoutChanged,

    // --- Clearing (ClearingRevisionValidator) ---
    #[error("a cleared contract must have zero filesize")]
    ClearingFilesizeNotZero,

    #[error("a cleared contract must have a zero merkle root")]
    ClearingMerkleRootNotZero,

    #[error("a cleared contract's valid and missed output vectors must have equal length")]
    ClearingOutputLengthMismatch,

    #[error("a cleared contract must set the revision number to its maximum")]
    ClearingRevisionNumberNotMax,

    #[error("cleared output {index} value must equal the current valid payout")]
    ClearingOutputValueChanged { index: usize },

    #[error("cleared output {index} address must equal the current valid payout's address")]
    ClearingOutputAddressChanged { index: usize },

    #[error("a cleared contract's missed outputs must equal its valid outputs at index {index}")]
    ClearingMissedNotEqualToValid { index: usize },

    // --- Constructors (Revise, ClearingRevision) ---
    #[error("incorrect number of outputs: expected {expected}, got {actual}")]
    IncorrectNumberOfOutputs { expected: usize, actual: usize },

    #[error("revision number must be greater than the current revision number {current}")]
    RevisionNumberMustBeGreater { current: u64 },

    // --- Arithmetic (distinct from "value decreased when it must not") ---
    #[error("currency arithmetic underflowed")]
    CurrencyUnderflow,

    #[error("currency arithmetic overflowed")]
    CurrencyOverflow,

    // --- Constructors (InitialRevision) ---
    #[error("formation transaction does not contain a file contract at index {index}")]
    MissingFormationContract { index: usize },
}
