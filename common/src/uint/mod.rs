// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unsigned 256-bit integer used for proof of work targets and chain work.
//!
//! Addition, subtraction, multiplication and negation wrap around modulo 2^256, exactly like the
//! fixed-width integer of the reference node. Consensus code relies on that: the next target of
//! the continuous difficulty algorithm is computed as `(-work) / work`, i.e. `(2^256 - work) / work`,
//! without ever representing 2^256. Division truncates and reports a zero divisor as `None`.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Not, Shl, Shr, Sub},
};

use parity_scale_codec::{Decode, Encode};

const LIMBS: usize = 4;

/// Little-endian limbs: `self.0[0]` holds the least significant 64 bits.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
pub struct Uint256(pub [u64; LIMBS]);

impl Uint256 {
    pub const ZERO: Self = Uint256([0; LIMBS]);
    pub const ONE: Self = Uint256([1, 0, 0, 0]);
    pub const MAX: Self = Uint256([u64::MAX; LIMBS]);

    pub const fn from_u64(value: u64) -> Self {
        Uint256([value, 0, 0, 0])
    }

    pub fn low_u64(&self) -> u64 {
        self.0[0]
    }

    pub fn low_u32(&self) -> u32 {
        self.0[0] as u32
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|limb| *limb == 0)
    }

    /// Number of significant bits, zero for zero.
    pub fn bits(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .rev()
            .find(|(_, limb)| **limb != 0)
            .map_or(0, |(i, limb)| 64 * i + (64 - limb.leading_zeros() as usize))
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let end = 32 - 8 * i;
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[end - 8..end]);
            *limb = u64::from_be_bytes(chunk);
        }
        Uint256(limbs)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            let end = 32 - 8 * i;
            bytes[end - 8..end].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut bytes = bytes;
        bytes.reverse();
        Self::from_be_bytes(bytes)
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut bytes = self.to_be_bytes();
        bytes.reverse();
        bytes
    }

    pub fn overflowing_add(self, other: Self) -> (Self, bool) {
        let mut result = [0u64; LIMBS];
        let mut carry = false;
        for (i, limb) in result.iter_mut().enumerate() {
            let (sum, c1) = self.0[i].overflowing_add(other.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            *limb = sum;
            carry = c1 || c2;
        }
        (Uint256(result), carry)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        match self.overflowing_add(other) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        (self >= other).then(|| self - other)
    }

    /// Schoolbook multiplication, keeping the low 256 bits of the product.
    fn wrapping_mul(self, other: Self) -> Self {
        let mut result = [0u64; LIMBS];
        for i in 0..LIMBS {
            let mut carry: u128 = 0;
            for j in 0..(LIMBS - i) {
                let current = result[i + j] as u128
                    + (self.0[i] as u128) * (other.0[j] as u128)
                    + carry;
                result[i + j] = current as u64;
                carry = current >> 64;
            }
        }
        Uint256(result)
    }

    /// Binary long division. The divisor must not be zero.
    fn div_rem(self, divisor: Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());

        let my_bits = self.bits();
        let divisor_bits = divisor.bits();
        if my_bits < divisor_bits {
            return (Self::ZERO, self);
        }

        let mut shift = my_bits - divisor_bits;
        let mut remainder = self;
        let mut shifted_divisor = divisor << shift;
        let mut quotient = [0u64; LIMBS];
        loop {
            if remainder >= shifted_divisor {
                quotient[shift / 64] |= 1 << (shift % 64);
                remainder = remainder - shifted_divisor;
            }
            shifted_divisor = shifted_divisor >> 1;
            if shift == 0 {
                break;
            }
            shift -= 1;
        }
        (Uint256(quotient), remainder)
    }

    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        (!divisor.is_zero()).then(|| self.div_rem(divisor).1)
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for Uint256 {
    fn from(value: u32) -> Self {
        Self::from_u64(value.into())
    }
}

impl PartialOrd for Uint256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uint256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl Add for Uint256 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.overflowing_add(other).0
    }
}

impl Sub for Uint256 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul for Uint256 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }
}

impl Mul<u64> for Uint256 {
    type Output = Self;

    fn mul(self, other: u64) -> Self {
        self.wrapping_mul(Self::from_u64(other))
    }
}

impl Div for Uint256 {
    type Output = Option<Self>;

    fn div(self, divisor: Self) -> Option<Self> {
        (!divisor.is_zero()).then(|| self.div_rem(divisor).0)
    }
}

impl Neg for Uint256 {
    type Output = Self;

    /// Two's complement: `2^256 - self`, and zero for zero.
    fn neg(self) -> Self {
        (!self).overflowing_add(Self::ONE).0
    }
}

impl Not for Uint256 {
    type Output = Self;

    fn not(self) -> Self {
        let Uint256(limbs) = self;
        Uint256(limbs.map(|limb| !limb))
    }
}

impl Shl<usize> for Uint256 {
    type Output = Self;

    fn shl(self, shift: usize) -> Self {
        let word_shift = shift / 64;
        let bit_shift = shift % 64;
        let mut result = [0u64; LIMBS];
        for i in 0..LIMBS {
            if i + word_shift < LIMBS {
                result[i + word_shift] |= self.0[i] << bit_shift;
            }
            if bit_shift > 0 && i + word_shift + 1 < LIMBS {
                result[i + word_shift + 1] |= self.0[i] >> (64 - bit_shift);
            }
        }
        Uint256(result)
    }
}

impl Shr<usize> for Uint256 {
    type Output = Self;

    fn shr(self, shift: usize) -> Self {
        let word_shift = shift / 64;
        let bit_shift = shift % 64;
        let mut result = [0u64; LIMBS];
        for i in word_shift..LIMBS {
            result[i - word_shift] |= self.0[i] >> bit_shift;
            if bit_shift > 0 && i + 1 < LIMBS {
                result[i - word_shift] |= self.0[i + 1] << (64 - bit_shift);
            }
        }
        Uint256(result)
    }
}

impl fmt::LowerHex for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        self.0.iter().rev().try_for_each(|limb| write!(f, "{limb:016x}"))
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}
