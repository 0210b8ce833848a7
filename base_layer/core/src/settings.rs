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

//! A host's advertised pricing and capability parameters. Negotiating or loading these values
//! from disk, the network, or the environment belongs to the transport layer; this crate only
//! consumes a snapshot.

use contract_types::{Address, Currency};

/// Gating parameters used by [`crate::validation::formation`] and [`crate::validation::renewal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSettings {
    /// The address the host expects to receive its payouts at.
    pub address: Address,
    /// The minimum the host must be paid for forming a contract at all.
    pub contract_price: Currency,
    /// The most collateral the host is willing to lock into a single contract.
    pub max_collateral: Currency,
    /// Minimum lead time, in blocks, the host requires between "now" and a contract's proof
    /// window opening.
    pub window_size: u64,
    /// The furthest into the future, in blocks, a contract's proof window may be scheduled to
    /// start.
    pub max_duration: u64,
}

impl HostSettings {
    pub fn new(
        address: Address,
        contract_price: Currency,
        max_collateral: Currency,
        window_size: u64,
        max_duration: u64,
    ) -> Self {
        HostSettings {
            address,
            contract_price,
            max_collateral,
            window_size,
            max_duration,
        }
    }
}
