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

#[derive(Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Default, Encode, Decode)]
pub struct BlockHeight(u64);

impl BlockHeight {
    pub const fn new(height: u64) -> BlockHeight {
        BlockHeight(height)
    }

    pub const fn zero() -> BlockHeight {
        BlockHeight(0)
    }

    pub const fn one() -> BlockHeight {
        BlockHeight(1)
    }

    pub const fn into_int(self) -> u64 {
        self.0
    }

    pub fn next_height(&self) -> BlockHeight {
        BlockHeight(self.0.checked_add(1).expect("Block height overflow"))
    }

    /// The height of the block `distance` blocks below this one, if it exists.
    pub fn checked_sub(&self, distance: u64) -> Option<BlockHeight> {
        self.0.checked_sub(distance).map(BlockHeight)
    }

    pub fn checked_add(&self, distance: u64) -> Option<BlockHeight> {
        self.0.checked_add(distance).map(BlockHeight)
    }

    /// Whether this height is a multiple of the given block count.
    pub fn is_multiple_of(&self, block_count: u64) -> bool {
        self.0 % block_count == 0
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        BlockHeight(height)
    }
}

impl From<BlockHeight> for u64 {
    fn from(height: BlockHeight) -> Self {
        height.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
