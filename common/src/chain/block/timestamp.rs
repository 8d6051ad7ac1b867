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

use std::fmt;

use parity_scale_codec::{Decode, Encode};

/// Block time as carried in the header: seconds since the Unix epoch.
///
/// Miners choose it, so nothing guarantees it grows along a chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Encode, Decode)]
pub struct BlockTimestamp(u32);

impl BlockTimestamp {
    pub const fn from_int_seconds(timestamp: u32) -> Self {
        Self(timestamp)
    }

    pub const fn as_int_seconds(&self) -> u32 {
        self.0
    }

    /// Signed number of seconds from `earlier` to `self`.
    pub fn seconds_since(&self, earlier: BlockTimestamp) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }
}

impl fmt::Display for BlockTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_since_can_be_negative() {
        let early = BlockTimestamp::from_int_seconds(1_000);
        let late = BlockTimestamp::from_int_seconds(1_600);
        assert_eq!(late.seconds_since(early), 600);
        assert_eq!(early.seconds_since(late), -600);

        let zero = BlockTimestamp::from_int_seconds(0);
        let max = BlockTimestamp::from_int_seconds(u32::MAX);
        assert_eq!(zero.seconds_since(max), -i64::from(u32::MAX));
    }
}
