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

//! Scenario tests over an in-memory chain.

mod legacy;

use std::{collections::BTreeMap, time::Duration};

use chainstate_types::{BlockIndex, BlockIndexHandle, PropertyQueryError};
use common::{
    chain::{
        block::{block_header::RESERVED_WORDS, timestamp::BlockTimestamp, BlockHeader},
        config::ChainType,
        PoWChainConfigBuilder,
    },
    primitives::{BlockHeight, Compact, H256},
    Uint256,
};

use crate::get_block_proof;

pub const LEGACY_LIMIT_BITS: Compact = Compact(0x1d00ffff);
pub const POST_FORK_LIMIT_BITS: Compact = Compact(0x1f07ffff);
pub const START_LIMIT_BITS: Compact = Compact(0x1d0fffff);

pub const GENESIS_TIME: u32 = 1_500_000_000;
pub const SPACING: u32 = 600;

pub fn block_id(height: u64) -> H256 {
    H256::from_low_u64_be(height + 1)
}

/// Mainnet parameters with a retarget every 10 blocks.
pub fn short_interval_config() -> PoWChainConfigBuilder {
    PoWChainConfigBuilder::new(ChainType::Mainnet)
        .target_timespan(Duration::from_secs(10 * SPACING as u64))
}

/// A single chain of block indexes, keyed by id.
#[derive(Default)]
pub struct TestChain {
    blocks: BTreeMap<H256, BlockIndex>,
    tip: Option<BlockIndex>,
}

impl TestChain {
    pub fn new() -> Self {
        logging::init_logging_for_tests();
        Self::default()
    }

    /// Chain of `count` blocks with the same bits, `spacing` seconds apart.
    pub fn with_blocks(count: u64, spacing: u32, bits: Compact) -> Self {
        let mut chain = Self::new();
        chain.extend(count, spacing, bits);
        chain
    }

    pub fn push(&mut self, timestamp: u32, bits: Compact) -> &BlockIndex {
        let (height, prev_block_id, prev_trust) = match &self.tip {
            None => (BlockHeight::zero(), None, Uint256::ZERO),
            Some(tip) => (
                tip.block_height().next_height(),
                Some(*tip.block_id()),
                *tip.chain_trust(),
            ),
        };

        let block_index = BlockIndex::new(
            block_id(height.into_int()),
            prev_block_id,
            height,
            BlockTimestamp::from_int_seconds(timestamp),
            bits,
            prev_trust + get_block_proof(bits),
        );
        self.blocks.insert(*block_index.block_id(), block_index.clone());
        self.tip.insert(block_index)
    }

    pub fn extend(&mut self, count: u64, spacing: u32, bits: Compact) {
        for _ in 0..count {
            let timestamp = self.next_timestamp(spacing);
            self.push(timestamp, bits);
        }
    }

    pub fn next_timestamp(&self, spacing: u32) -> u32 {
        self.tip
            .as_ref()
            .map_or(GENESIS_TIME, |tip| tip.block_timestamp().as_int_seconds() + spacing)
    }

    pub fn tip(&self) -> &BlockIndex {
        self.tip.as_ref().expect("chain is not empty")
    }

    pub fn at(&self, height: u64) -> &BlockIndex {
        &self.blocks[&block_id(height)]
    }

    /// Drops a block from the index while keeping its descendants.
    pub fn forget(&mut self, height: u64) {
        self.blocks.remove(&block_id(height));
    }

    /// Header of a block extending the tip.
    pub fn next_header(&self, timestamp: u32, bits: Compact) -> BlockHeader {
        let (prev_block_id, height) = match &self.tip {
            None => (H256::zero(), 0),
            Some(tip) => (*tip.block_id(), tip.block_height().into_int() + 1),
        };

        BlockHeader {
            version: 4,
            prev_block_id,
            merkle_root: H256::repeat_byte(0x5a),
            height: height as u32,
            reserved: [0; RESERVED_WORDS],
            timestamp: BlockTimestamp::from_int_seconds(timestamp),
            bits,
            nonce: H256::zero(),
            solution: Vec::new(),
        }
    }
}

impl BlockIndexHandle for TestChain {
    fn get_block_index(&self, block_id: &H256) -> Result<Option<BlockIndex>, PropertyQueryError> {
        Ok(self.blocks.get(block_id).cloned())
    }
}
