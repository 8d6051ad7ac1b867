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

use thiserror::Error;

use common::{
    chain::PoWChainConfig,
    primitives::{Compact, H256},
    Uint256,
};
use utils::ensure;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TargetCheckError {
    #[error("Target {0:?} is negative")]
    Negative(Compact),
    #[error("Target {0:?} does not fit in 256 bits")]
    Overflow(Compact),
    #[error("Target {0:?} is zero")]
    Zero(Compact),
    #[error("Target {target} is easier than the limit {limit}")]
    AboveLimit { target: Uint256, limit: Uint256 },
    #[error("Block hash {hash} is above the target {target}")]
    HashAboveTarget { hash: Uint256, target: Uint256 },
}

/// Checks that `bits` is a valid target for the given side of the fork and that the block hash,
/// read as a big-endian number, does not exceed it.
pub fn check_target(
    block_hash: &H256,
    bits: Compact,
    post_fork: bool,
    pow_config: &PoWChainConfig,
) -> Result<(), TargetCheckError> {
    let decoded = bits.decode();
    ensure!(!decoded.negative, TargetCheckError::Negative(bits));
    ensure!(!decoded.overflow, TargetCheckError::Overflow(bits));
    ensure!(!decoded.value.is_zero(), TargetCheckError::Zero(bits));

    let target = decoded.value;
    let limit = pow_config.pow_limit(post_fork);
    ensure!(
        target <= limit,
        TargetCheckError::AboveLimit { target, limit }
    );

    let hash = Uint256::from(*block_hash);
    ensure!(
        hash <= target,
        TargetCheckError::HashAboveTarget { hash, target }
    );

    Ok(())
}

pub fn check_proof_of_work(
    block_hash: &H256,
    bits: Compact,
    post_fork: bool,
    pow_config: &PoWChainConfig,
) -> bool {
    check_target(block_hash, bits, post_fork, pow_config).is_ok()
}
