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

use std::time::Duration;

use crate::{chain::config::ChainType, primitives::BlockHeight, Uint256};

/// Chain parameters for proof of work.
///
/// Two retargeting algorithms are active at different heights. Before `fork_height` the legacy
/// periodic retarget is used with `limit` as the easiest target. From `fork_height` on, the
/// first `premine_window` blocks use `post_fork_limit`, the following `averaging_window` blocks
/// use `start_limit` and after that the target is recomputed for every block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoWChainConfig {
    no_retargeting: bool,
    /// Checks whether minimum difficulty can be used for the block
    allow_min_difficulty_blocks: bool,
    /// The lowest possible difficulty before the fork
    limit: Uint256,
    /// The lowest possible difficulty from the fork on
    post_fork_limit: Uint256,
    /// Fixed target used while the averaging window fills up after the fork
    start_limit: Uint256,
    target_timespan: Duration,
    target_spacing: Duration,
    fork_height: BlockHeight,
    premine_window: u64,
    averaging_window: u64,
}

impl PoWChainConfig {
    pub fn new(chain_type: ChainType) -> Self {
        PoWChainConfigBuilder::new(chain_type).build()
    }

    pub const fn no_retargeting(&self) -> bool {
        self.no_retargeting
    }

    pub const fn allow_min_difficulty_blocks(&self) -> bool {
        self.allow_min_difficulty_blocks
    }

    pub const fn limit(&self) -> Uint256 {
        self.limit
    }

    pub const fn post_fork_limit(&self) -> Uint256 {
        self.post_fork_limit
    }

    pub const fn start_limit(&self) -> Uint256 {
        self.start_limit
    }

    pub const fn pow_limit(&self, post_fork: bool) -> Uint256 {
        if post_fork {
            self.post_fork_limit
        } else {
            self.limit
        }
    }

    /// The legacy algorithm aims for `target_timespan` per adjustment interval.
    pub const fn target_timespan(&self) -> Duration {
        self.target_timespan
    }

    pub const fn target_spacing(&self) -> Duration {
        self.target_spacing
    }

    pub const fn fork_height(&self) -> BlockHeight {
        self.fork_height
    }

    pub const fn premine_window(&self) -> u64 {
        self.premine_window
    }

    pub const fn averaging_window(&self) -> u64 {
        self.averaging_window
    }

    pub fn is_post_fork(&self, height: BlockHeight) -> bool {
        height >= self.fork_height
    }

    /// Number of blocks between two legacy retargets.
    pub const fn difficulty_adjustment_interval(&self) -> u64 {
        self.target_timespan.as_secs() / self.target_spacing.as_secs()
    }
}

#[derive(Debug, Clone)]
pub struct PoWChainConfigBuilder {
    no_retargeting: bool,
    allow_min_difficulty_blocks: bool,
    limit: Uint256,
    post_fork_limit: Uint256,
    start_limit: Uint256,
    target_timespan: Duration,
    target_spacing: Duration,
    fork_height: BlockHeight,
    premine_window: u64,
    averaging_window: u64,
}

impl PoWChainConfigBuilder {
    pub fn new(chain_type: ChainType) -> Self {
        Self {
            no_retargeting: no_retargeting(chain_type),
            allow_min_difficulty_blocks: allow_min_difficulty_blocks(chain_type),
            limit: limit(chain_type),
            post_fork_limit: post_fork_limit(chain_type),
            start_limit: start_limit(chain_type),
            target_timespan: DEFAULT_TARGET_TIMESPAN,
            target_spacing: DEFAULT_TARGET_SPACING,
            fork_height: fork_height(chain_type),
            premine_window: DEFAULT_PREMINE_WINDOW,
            averaging_window: DEFAULT_AVERAGING_WINDOW,
        }
    }

    builder_method!(no_retargeting: bool);
    builder_method!(allow_min_difficulty_blocks: bool);
    builder_method!(limit: Uint256);
    builder_method!(post_fork_limit: Uint256);
    builder_method!(start_limit: Uint256);
    builder_method!(target_timespan: Duration);
    builder_method!(target_spacing: Duration);
    builder_method!(fork_height: BlockHeight);
    builder_method!(premine_window: u64);
    builder_method!(averaging_window: u64);

    pub fn build(self) -> PoWChainConfig {
        assert!(
            !self.limit.is_zero() && !self.post_fork_limit.is_zero() && !self.start_limit.is_zero(),
            "PoW limits must not be zero"
        );
        assert!(
            self.target_spacing.as_secs() > 0,
            "Target spacing must be at least a second"
        );
        assert!(
            self.target_timespan >= self.target_spacing,
            "Target timespan must cover at least one block"
        );

        let Self {
            no_retargeting,
            allow_min_difficulty_blocks,
            limit,
            post_fork_limit,
            start_limit,
            target_timespan,
            target_spacing,
            fork_height,
            premine_window,
            averaging_window,
        } = self;

        PoWChainConfig {
            no_retargeting,
            allow_min_difficulty_blocks,
            limit,
            post_fork_limit,
            start_limit,
            target_timespan,
            target_spacing,
            fork_height,
            premine_window,
            averaging_window,
        }
    }
}

/// Parameters of the memory-hard puzzle that post-fork blocks must solve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EquihashParams {
    pub n: u32,
    pub k: u32,
}

impl EquihashParams {
    pub const fn new(n: u32, k: u32) -> Self {
        Self { n, k }
    }

    pub const fn for_chain(chain_type: ChainType) -> Self {
        match chain_type {
            ChainType::Mainnet | ChainType::Testnet => Self::new(200, 9),
            ChainType::Regtest => Self::new(48, 5),
        }
    }
}

/// Two weeks, the span a legacy retarget interval aims for.
const DEFAULT_TARGET_TIMESPAN: Duration = Duration::from_secs(14 * 24 * 60 * 60);
const DEFAULT_TARGET_SPACING: Duration = Duration::from_secs(10 * 60);
const DEFAULT_PREMINE_WINDOW: u64 = 10;
const DEFAULT_AVERAGING_WINDOW: u64 = 17;

const fn no_retargeting(chain_type: ChainType) -> bool {
    match chain_type {
        ChainType::Mainnet | ChainType::Testnet => false,
        ChainType::Regtest => true,
    }
}

const fn allow_min_difficulty_blocks(chain_type: ChainType) -> bool {
    match chain_type {
        ChainType::Mainnet => false,
        ChainType::Testnet | ChainType::Regtest => true,
    }
}

const fn fork_height(chain_type: ChainType) -> BlockHeight {
    match chain_type {
        ChainType::Mainnet | ChainType::Testnet => BlockHeight::new(501_407),
        ChainType::Regtest => BlockHeight::new(3_000),
    }
}

const fn limit(chain_type: ChainType) -> Uint256 {
    match chain_type {
        ChainType::Mainnet | ChainType::Testnet => Uint256([
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0x00000000FFFFFFFF,
        ]),
        ChainType::Regtest => Uint256([
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0x7FFFFFFFFFFFFFFF,
        ]),
    }
}

const fn post_fork_limit(chain_type: ChainType) -> Uint256 {
    match chain_type {
        ChainType::Mainnet | ChainType::Testnet => Uint256([
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0x0007FFFFFFFFFFFF,
        ]),
        ChainType::Regtest => Uint256([
            0x0F0F0F0F0F0F0F0F,
            0x0F0F0F0F0F0F0F0F,
            0x0F0F0F0F0F0F0F0F,
            0x0F0F0F0F0F0F0F0F,
        ]),
    }
}

const fn start_limit(chain_type: ChainType) -> Uint256 {
    match chain_type {
        ChainType::Mainnet | ChainType::Testnet => Uint256([
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0xFFFFFFFFFFFFFFFF,
            0x0000000FFFFFFFFF,
        ]),
        ChainType::Regtest => post_fork_limit(chain_type),
    }
}
