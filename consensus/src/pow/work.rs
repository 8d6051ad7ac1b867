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

use chainstate_types::{BlockIndex, BlockIndexHandle};
use common::{
    chain::{block::BlockHeader, PoWChainConfig},
    primitives::{BlockHeight, Compact},
};
use logging::log;

use super::{continuous, legacy, ConsensusPoWError};

/// How the target of a block is determined, by its height relative to the fork.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkRequiredRule {
    /// Periodic retarget, before the fork
    Legacy,
    /// Post-fork limit for the first blocks after the fork
    Premine,
    /// Fixed start target while the averaging window fills up
    Bridge,
    /// Per-block retarget over the averaging window
    Continuous,
}

impl WorkRequiredRule {
    pub fn for_height(pow_config: &PoWChainConfig, height: BlockHeight) -> Self {
        if !pow_config.is_post_fork(height) {
            return WorkRequiredRule::Legacy;
        }

        let fork_height = pow_config.fork_height().into_int();
        let premine_end = fork_height.saturating_add(pow_config.premine_window());
        let bridge_end = premine_end.saturating_add(pow_config.averaging_window());

        match height.into_int() {
            h if h < premine_end => WorkRequiredRule::Premine,
            h if h < bridge_end => WorkRequiredRule::Bridge,
            _ => WorkRequiredRule::Continuous,
        }
    }
}

/// The bits a block on top of `prev_block_index` must carry; `None` stands for the genesis block.
pub fn calculate_work_required(
    pow_config: &PoWChainConfig,
    prev_block_index: Option<&BlockIndex>,
    new_block_header: &BlockHeader,
    block_index_handle: &impl BlockIndexHandle,
) -> Result<Compact, ConsensusPoWError> {
    let prev_block_index = match prev_block_index {
        Some(block_index) => block_index,
        None => return Ok(Compact::from(pow_config.limit())),
    };

    if pow_config.no_retargeting() {
        return Ok(prev_block_index.bits());
    }

    let new_block_height = prev_block_index.block_height().next_height();
    let rule = WorkRequiredRule::for_height(pow_config, new_block_height);
    log::trace!("Work required rule for height {new_block_height}: {rule:?}");

    let bits = match rule {
        WorkRequiredRule::Legacy => legacy::next_work_required(
            pow_config,
            Some(prev_block_index),
            new_block_header.timestamp(),
            block_index_handle,
        )?,
        WorkRequiredRule::Premine => Compact::from(pow_config.post_fork_limit()),
        WorkRequiredRule::Bridge => Compact::from(pow_config.start_limit()),
        WorkRequiredRule::Continuous => continuous::next_work_required(
            pow_config,
            prev_block_index,
            new_block_header.timestamp(),
            block_index_handle,
        )?,
    };

    Ok(bits)
}
