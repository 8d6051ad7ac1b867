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

use parity_scale_codec::{Decode, Encode};

use common::{
    chain::block::timestamp::BlockTimestamp,
    primitives::{BlockHeight, Compact, H256},
    Uint256,
};

/// What the chain knows about an accepted block, as seen by difficulty adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BlockIndex {
    block_id: H256,
    prev_block_id: Option<H256>,
    height: BlockHeight,
    timestamp: BlockTimestamp,
    bits: Compact,
    chain_trust: Uint256,
}

impl BlockIndex {
    pub fn new(
        block_id: H256,
        prev_block_id: Option<H256>,
        height: BlockHeight,
        timestamp: BlockTimestamp,
        bits: Compact,
        chain_trust: Uint256,
    ) -> Self {
        Self {
            block_id,
            prev_block_id,
            height,
            timestamp,
            bits,
            chain_trust,
        }
    }

    pub fn block_id(&self) -> &H256 {
        &self.block_id
    }

    /// `None` only for genesis
    pub fn prev_block_id(&self) -> &Option<H256> {
        &self.prev_block_id
    }

    pub fn is_genesis(&self) -> bool {
        self.prev_block_id.is_none()
    }

    pub fn block_height(&self) -> BlockHeight {
        self.height
    }

    pub fn block_timestamp(&self) -> BlockTimestamp {
        self.timestamp
    }

    pub fn bits(&self) -> Compact {
        self.bits
    }

    /// Work accumulated from genesis up to and including this block
    pub fn chain_trust(&self) -> &Uint256 {
        &self.chain_trust
    }
}
