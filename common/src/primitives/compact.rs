// Copyright (c) 2021-2022 RBB S.r.l
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

use std::fmt;

use parity_scale_codec::{Decode, Encode};
use thiserror::Error;

use crate::Uint256;

/// The on-chain "bits" encoding of a 256-bit target.
///
/// The top byte is the size of the number in bytes, the lower 23 bits are its three most
/// significant bytes and bit 23 is a sign bit. The precise bit pattern is consensus critical:
/// block headers carry it and it must be bitwise equal to the encoding of the computed target.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Encode, Decode)]
pub struct Compact(pub u32);

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Result of expanding a [Compact], with the flags the format can carry besides the magnitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecodedCompact {
    /// The magnitude; bits shifted beyond 256 are lost when `overflow` is set.
    pub value: Uint256,
    /// The sign bit is set and the mantissa is not zero.
    pub negative: bool,
    /// The number does not fit in 256 bits.
    pub overflow: bool,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompactError {
    #[error("Compact value {0:?} is negative")]
    Negative(Compact),
    #[error("Compact value {0:?} does not fit in 256 bits")]
    Overflow(Compact),
}

impl Compact {
    pub fn decode(self) -> DecodedCompact {
        let size = self.0 >> 24;
        let mut word = self.0 & MANTISSA_MASK;

        let value = if size <= 3 {
            word >>= 8 * (3 - size);
            Uint256::from(word)
        } else {
            Uint256::from(word) << (8 * (size as usize - 3))
        };

        let negative = word != 0 && (self.0 & SIGN_BIT) != 0;
        let overflow =
            word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

        DecodedCompact {
            value,
            negative,
            overflow,
        }
    }
}

impl From<Uint256> for Compact {
    fn from(value: Uint256) -> Self {
        let mut size = value.bits().div_ceil(8);
        let mut compact = if size <= 3 {
            (value.low_u64() << (8 * (3 - size))) as u32
        } else {
            (value >> (8 * (size - 3))).low_u32()
        };

        // The mantissa must not look negative, move one byte into the exponent instead
        if compact & SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }

        Compact(compact | ((size as u32) << 24))
    }
}

impl TryFrom<Compact> for Uint256 {
    type Error = CompactError;

    fn try_from(compact: Compact) -> Result<Self, Self::Error> {
        let decoded = compact.decode();
        if decoded.negative {
            return Err(CompactError::Negative(compact));
        }
        if decoded.overflow {
            return Err(CompactError::Overflow(compact));
        }
        Ok(decoded.value)
    }
}

impl fmt::Debug for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compact({:#010x})", self.0)
    }
}
