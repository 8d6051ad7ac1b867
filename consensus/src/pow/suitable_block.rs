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

//! Median-of-three block selection, limiting the influence of a single skewed timestamp.

use chainstate_types::{BlockIndex, BlockIndexHandle, PropertyQueryError};
use common::primitives::BlockHeight;

/// The block with the median timestamp among `block_index` and its two direct ancestors.
///
/// Panics if `block_index` is below height 2 or one of the ancestors is missing.
pub fn get_suitable_block(
    block_index: &BlockIndex,
    block_index_handle: &impl BlockIndexHandle,
) -> Result<BlockIndex, PropertyQueryError> {
    assert!(
        block_index.block_height() >= BlockHeight::new(2),
        "Suitable block requires two ancestors, got block at height {}",
        block_index.block_height()
    );

    let prev = block_index_handle
        .get_prev_block_index(block_index)?
        .expect("Parent of a block above genesis must exist");
    let prev_prev = block_index_handle
        .get_prev_block_index(&prev)?
        .expect("Parent of a block above genesis must exist");

    Ok(median_of_three([prev_prev, prev, block_index.clone()]))
}

/// Sorts the blocks by timestamp with a fixed sorting network and returns the middle one.
///
/// With equal timestamps the network decides which block is returned, so the order of the input
/// (oldest first) matters.
pub fn median_of_three(mut blocks: [BlockIndex; 3]) -> BlockIndex {
    for (i, j) in [(0, 2), (0, 1), (1, 2)] {
        if blocks[i].block_timestamp() > blocks[j].block_timestamp() {
            blocks.swap(i, j);
        }
    }

    let [_, median, _] = blocks;
    median
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use common::{
        chain::block::timestamp::BlockTimestamp,
        primitives::{Compact, H256},
        Uint256,
    };

    fn block(id: u64, timestamp: u32) -> BlockIndex {
        BlockIndex::new(
            H256::from_low_u64_be(id),
            None,
            BlockHeight::new(id),
            BlockTimestamp::from_int_seconds(timestamp),
            Compact(0x1d00ffff),
            Uint256::ZERO,
        )
    }

    #[rstest]
    #[case([1, 2, 3])]
    #[case([1, 3, 2])]
    #[case([2, 1, 3])]
    #[case([2, 3, 1])]
    #[case([3, 1, 2])]
    #[case([3, 2, 1])]
    fn median_ignores_order(#[case] order: [u64; 3]) {
        let timestamp = |id: u64| 1_000 + 100 * id as u32;
        let blocks = order.map(|id| block(id, timestamp(id)));
        assert_eq!(median_of_three(blocks).block_id(), &H256::from_low_u64_be(2));
    }

    #[test]
    fn ties_follow_the_sorting_network() {
        // All equal: nothing is swapped, the parent stays in the middle
        let blocks = [block(1, 500), block(2, 500), block(3, 500)];
        assert_eq!(median_of_three(blocks).block_id(), &H256::from_low_u64_be(2));

        // The newest block shares the oldest timestamp with the grandparent
        let blocks = [block(1, 500), block(2, 900), block(3, 500)];
        assert_eq!(median_of_three(blocks).block_id(), &H256::from_low_u64_be(3));
    }
}
