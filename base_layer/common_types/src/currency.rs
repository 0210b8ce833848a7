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

//! A non-negative, wide (256-bit) currency amount.
//!
//! Deliberately does not implement `Add`/`Sub`/`Neg`: every arithmetic site where money changes
//! hands is expected to call `checked_add`/`checked_sub` explicitly and handle the `None`
//! (underflow/overflow) case as a distinct error from "value decreased when it must not have",
//! per the validation core's design notes.

use std::fmt;

use borsh::{io, BorshDeserialize, BorshSerialize};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Currency(U256);

impl Currency {
    pub const ZERO: Currency = Currency(U256::zero());
    pub const MAX: Currency = Currency(U256::MAX);

    pub const fn from_u256(value: U256) -> Self {
        Currency(value)
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow rather than wrapping or panicking.
    #[must_use]
    pub fn checked_add(&self, other: Currency) -> Option<Currency> {
        self.0.checked_add(other.0).map(Currency)
    }

    /// Checked subtraction. Returns `None` on underflow rather than wrapping or panicking.
    #[must_use]
    pub fn checked_sub(&self, other: Currency) -> Option<Currency> {
        self.0.checked_sub(other.0).map(Currency)
    }

    /// `self - other`, or zero if that would underflow. Used where the spec calls for
    /// `max(0, a - b)` explicitly (e.g. risked collateral).
    pub fn saturating_sub(&self, other: Currency) -> Currency {
        self.checked_sub(other).unwrap_or(Currency::ZERO)
    }

    pub fn checked_sum<I: IntoIterator<Item = Currency>>(values: I) -> Option<Currency> {
        values.into_iter().try_fold(Currency::ZERO, |acc, v| acc.checked_add(v))
    }
}

impl From<u64> for Currency {
    fn from(value: u64) -> Self {
        Currency(U256::from(value))
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.0)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BorshSerialize for Currency {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let bytes = self.0.to_little_endian();
        writer.write_all(&bytes)
    }
}

impl BorshDeserialize for Currency {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let mut bytes = [0u8; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Currency(U256::from_little_endian(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sub_reports_underflow_as_none() {
        let a = Currency::from(5u64);
        let b = Currency::from(10u64);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(Currency::from(5u64)));
    }

    #[test]
    fn checked_add_reports_overflow_as_none() {
        assert_eq!(Currency::MAX.checked_add(Currency::from(1u64)), None);
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = Currency::from(5u64);
        let b = Currency::from(10u64);
        assert_eq!(a.saturating_sub(b), Currency::ZERO);
    }

    #[test]
    fn checked_sum_detects_overflow_across_many_terms() {
        let values = vec![Currency::MAX, Currency::from(1u64)];
        assert_eq!(Currency::checked_sum(values), None);

        let values = vec![Currency::from(1u64), Currency::from(2u64), Currency::from(3u64)];
        assert_eq!(Currency::checked_sum(values), Some(Currency::from(6u64)));
    }
}
