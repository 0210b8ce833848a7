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

//! Protocol-wide constants. Centralized here instead of scattered as magic numbers through the
//! validators, the way the teacher workspace centralizes consensus constants.

/// Index of the renter's payout in both the valid- and missed-proof output vectors.
pub const RENTER_INDEX: usize = 0;

/// Index of the host's payout in both the valid- and missed-proof output vectors.
pub const HOST_INDEX: usize = 1;

/// Index of the void (burn) payout in the missed-proof output vector. There is no void entry in
/// the valid-proof vector.
pub const VOID_INDEX: usize = 2;

/// Required length of the valid-proof output vector.
pub const VALID_PROOF_OUTPUTS_LEN: usize = 2;

/// Required length of the missed-proof output vector.
pub const MISSED_PROOF_OUTPUTS_LEN: usize = 3;

/// The terminal revision number. A contract at this revision number is locked: no further
/// revision may supersede it.
pub const MAX_REVISION_NUMBER: u64 = u64::MAX;
