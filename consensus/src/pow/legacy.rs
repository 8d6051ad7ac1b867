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

//! The periodic retarget used before the fork: the target changes once per adjustment interval,
//! scaled by how long the previous interval took.

use chainstate_types::{BlockIndex, BlockIndexHandle, PropertyQueryError};
use common::{
    chain::{block::timestamp::BlockTimestamp, PoWChainConfig},
    primitives::Compact,
    Uint256,
};
use logging::log;

use super::helpers::{due_for_retarget, special_rules::block_production_stalled};

pub fn next_work_required(
    pow_config: &PoWChainConfig,
    prev_block_index: Option<&BlockIndex>,
    new_block_time: BlockTimestamp,
    block_index_handle: &impl BlockIndexHandle,
) -> Result<Compact, PropertyQueryError> {
    let limit = Compact::from(pow_config.limit());

    let prev_block_index = match prev_block_index {
        Some(block_index) => block_index,
        None => return Ok(limit),
    };

    let adjustment_interval = pow_config.difficulty_adjustment_interval();
    let new_block_height = prev_block_index.block_height().next_height();

    if !due_for_retarget(adjustment_interval, new_block_height) {
        if !pow_config.allow_min_difficulty_blocks() {
            return Ok(prev_block_index.bits());
        }

        if block_production_stalled(
            pow_config.target_spacing(),
            new_block_time,
            prev_block_index.block_timestamp(),
        ) {
            log::debug!("Block production stalled at height {new_block_height}, allowing minimum difficulty");
            return Ok(limit);
        }

        return last_non_special_min_difficulty(pow_config, prev_block_index, block_index_handle);
    }

    // The first block of the interval that ends with the previous block
    let first_height = prev_block_index
        .block_height()
        .checked_sub(adjustment_interval - 1)
        .expect("A retarget boundary is at least one interval above genesis");
    let first_block_index = block_index_handle
        .get_ancestor(prev_block_index, first_height)?
        .expect("Ancestor of a block in its chain must exist");

    let bits = calculate_next_work_required(
        pow_config,
        prev_block_index,
        first_block_index.block_timestamp(),
    );
    log::debug!(
        "Retarget at height {new_block_height}: {:?} -> {bits:?}",
        prev_block_index.bits()
    );
    Ok(bits)
}

/// The bits of the closest block, walking back from `block_index`, that was not mined under the
/// minimum difficulty rule. Retarget boundaries and genesis end the walk.
fn last_non_special_min_difficulty(
    pow_config: &PoWChainConfig,
    block_index: &BlockIndex,
    block_index_handle: &impl BlockIndexHandle,
) -> Result<Compact, PropertyQueryError> {
    let limit = Compact::from(pow_config.limit());
    let adjustment_interval = pow_config.difficulty_adjustment_interval();

    let mut block_index = block_index.clone();
    while !block_index.is_genesis()
        && !due_for_retarget(adjustment_interval, block_index.block_height())
        && block_index.bits() == limit
    {
        block_index = block_index_handle
            .get_prev_block_index(&block_index)?
            .expect("Parent of a block above genesis must exist");
    }

    Ok(block_index.bits())
}

/// New target from the time the last adjustment interval took, clamped so that a single retarget
/// changes the target by at most a factor of 4 and never makes it easier than the limit.
pub fn calculate_next_work_required(
    pow_config: &PoWChainConfig,
    prev_block_index: &BlockIndex,
    first_block_time: BlockTimestamp,
) -> Compact {
    if pow_config.no_retargeting() {
        return prev_block_index.bits();
    }

    let target_timespan = pow_config.target_timespan().as_secs();
    let actual_timespan = clamped_timespan(
        target_timespan,
        prev_block_index.block_timestamp().seconds_since(first_block_time),
    );

    let prev_target = prev_block_index.bits().decode().value;
    let new_target = (prev_target * actual_timespan / Uint256::from_u64(target_timespan))
        .expect("Target timespan is not zero");

    Compact::from(std::cmp::min(new_target, pow_config.limit()))
}

/// Actual timespan of an interval, limited to `[target / 4, target * 4]`.
pub fn clamped_timespan(target_timespan: u64, actual_timespan: i64) -> u64 {
    let target_timespan = target_timespan as i64;
    num::clamp(actual_timespan, target_timespan / 4, target_timespan * 4) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping() {
        let target = 14 * 24 * 60 * 60;
        assert_eq!(clamped_timespan(target, target as i64), target);
        assert_eq!(clamped_timespan(target, 0), target / 4);
        assert_eq!(clamped_timespan(target, -5_000), target / 4);
        assert_eq!(clamped_timespan(target, i64::MAX), target * 4);
        assert_eq!(clamped_timespan(target, 1_000_000), 1_000_000);
    }
}
