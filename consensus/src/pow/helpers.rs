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

use common::{
    primitives::{BlockHeight, Compact},
    Uint256,
};

pub fn due_for_retarget(difficulty_adjustment_interval: u64, block_height: BlockHeight) -> bool {
    block_height.is_multiple_of(difficulty_adjustment_interval)
}

/// Amount of work a block with the given target represents, i.e. the expected number of hashes
/// needed to hit it. Zero for targets that no valid block can carry.
pub fn get_block_proof(bits: Compact) -> Uint256 {
    let decoded = bits.decode();
    if decoded.negative || decoded.overflow || decoded.value.is_zero() {
        return Uint256::ZERO;
    }
    let target = decoded.value;

    // 2^256 / (target + 1) == (2^256 - (target + 1)) / (target + 1) + 1 == !target / (target + 1) + 1
    let quotient = (!target / (target + Uint256::ONE)).expect("target is below the maximum");
    quotient + Uint256::ONE
}

pub mod special_rules {
    use std::time::Duration;

    use common::chain::block::timestamp::BlockTimestamp;

    /// Checks if it took more than two target spacings to find a block
    pub fn block_production_stalled(
        target_spacing: Duration,
        new_block_time: BlockTimestamp,
        prev_block_time: BlockTimestamp,
    ) -> bool {
        new_block_time.seconds_since(prev_block_time) > 2 * target_spacing.as_secs() as i64
    }
}
