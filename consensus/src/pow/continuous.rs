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

//! Per-block retarget used after the fork.
//!
//! The next target is derived from the chain work done over the last 144 blocks and the time it
//! took. Both ends of the window are picked with [get_suitable_block], so only the timestamps of
//! the first and the last block matter and a single skewed timestamp has limited influence.

use chainstate_types::{BlockIndex, BlockIndexHandle, PropertyQueryError};
use common::{
    chain::{block::timestamp::BlockTimestamp, PoWChainConfig},
    primitives::{BlockHeight, Compact},
    Uint256,
};
use logging::log;

use super::{
    helpers::special_rules::block_production_stalled, suitable_block::get_suitable_block,
};

/// Distance in blocks between the ends of the averaging window.
pub const WINDOW_LENGTH: u64 = 144;

/// The measured window time is limited to `[MIN_WINDOW_SPACINGS, MAX_WINDOW_SPACINGS]` target
/// spacings, which bounds a single adjustment to a factor in `[0.5, 2]`.
pub const MIN_WINDOW_SPACINGS: i64 = 72;
pub const MAX_WINDOW_SPACINGS: i64 = 288;

pub fn next_work_required(
    pow_config: &PoWChainConfig,
    prev_block_index: &BlockIndex,
    new_block_time: BlockTimestamp,
    block_index_handle: &impl BlockIndexHandle,
) -> Result<Compact, PropertyQueryError> {
    let limit = pow_config.post_fork_limit();

    if pow_config.allow_min_difficulty_blocks()
        && block_production_stalled(
            pow_config.target_spacing(),
            new_block_time,
            prev_block_index.block_timestamp(),
        )
    {
        return Ok(Compact::from(limit));
    }

    let prev_height = prev_block_index.block_height();
    assert!(
        prev_height >= BlockHeight::new(pow_config.difficulty_adjustment_interval()),
        "Continuous retarget needs a full adjustment interval of history, got height {prev_height}"
    );

    let last = get_suitable_block(prev_block_index, block_index_handle)?;

    let first_height = prev_height
        .checked_sub(WINDOW_LENGTH)
        .expect("Window start is above genesis");
    let first = block_index_handle
        .get_ancestor(prev_block_index, first_height)?
        .expect("Ancestor of a block in its chain must exist");
    let first = get_suitable_block(&first, block_index_handle)?;

    let next_target = compute_target(pow_config, &first, &last);
    let bits = Compact::from(std::cmp::min(next_target, limit));
    log::debug!(
        "Continuous retarget after height {prev_height} over blocks {}..{}: {bits:?}",
        first.block_height(),
        last.block_height()
    );
    Ok(bits)
}

/// Target under which blocks would, at the hash rate observed between `first` and `last`, arrive
/// every target spacing.
pub fn compute_target(pow_config: &PoWChainConfig, first: &BlockIndex, last: &BlockIndex) -> Uint256 {
    assert!(
        last.block_height() > first.block_height(),
        "Window end {} must be above its start {}",
        last.block_height(),
        first.block_height()
    );
    assert!(
        last.chain_trust() > first.chain_trust(),
        "Chain trust must grow along the window"
    );

    let target_spacing = pow_config.target_spacing().as_secs();
    let work = (*last.chain_trust() - *first.chain_trust()) * target_spacing;

    let timespan = clamped_window_timespan(
        target_spacing,
        last.block_timestamp().seconds_since(first.block_timestamp()),
    );
    let work = (work / Uint256::from_u64(timespan)).expect("Window timespan is not zero");

    // 2^256 / work - 1, computed as (2^256 - work) / work since 2^256 does not fit
    (-work / work).expect("Work over the window must not be zero")
}

/// Actual window time, limited to `[72, 288]` target spacings.
pub fn clamped_window_timespan(target_spacing: u64, actual_timespan: i64) -> u64 {
    let target_spacing = target_spacing as i64;
    num::clamp(
        actual_timespan,
        MIN_WINDOW_SPACINGS * target_spacing,
        MAX_WINDOW_SPACINGS * target_spacing,
    ) as u64
}
