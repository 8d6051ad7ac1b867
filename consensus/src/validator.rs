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

use chainstate_types::BlockIndexHandle;
use common::{
    chain::{block::BlockHeader, config::ChainConfig},
    primitives::{BlockHeight, H256},
};
use logging::log;
use utils::ensure;

use crate::{
    error::ConsensusVerificationError,
    pow::{
        calculate_work_required, check_equihash_solution, check_target, ConsensusPoWError,
        EquihashVerifier,
    },
};

/// Checks the proof of work of a block identified by its header and hash.
///
/// The header must carry exactly the bits the chain requires at its position, the hash must meet
/// that target, and from the fork on the header must also carry a valid Equihash solution. A
/// header whose previous block id is all zeros is treated as the genesis block.
pub fn validate_pow_consensus<H, V>(
    chain_config: &ChainConfig,
    header: &BlockHeader,
    block_hash: &H256,
    block_index_handle: &H,
    equihash_verifier: &V,
) -> Result<(), ConsensusVerificationError>
where
    H: BlockIndexHandle,
    V: EquihashVerifier,
{
    let pow_config = chain_config.pow_chain_config();
    let prev_block_id = header.prev_block_id;

    let prev_block_index = if prev_block_id.is_zero() {
        None
    } else {
        let block_index = block_index_handle
            .get_block_index(&prev_block_id)
            .map_err(|err| ConsensusVerificationError::PrevBlockLoadError(prev_block_id, err))?
            .ok_or(ConsensusVerificationError::PrevBlockNotFound(prev_block_id))?;
        Some(block_index)
    };

    let block_height = prev_block_index
        .as_ref()
        .map_or(BlockHeight::zero(), |block_index| block_index.block_height().next_height());

    let work_required = calculate_work_required(
        pow_config,
        prev_block_index.as_ref(),
        header,
        block_index_handle,
    )?;
    if header.bits() != work_required {
        log::debug!(
            "Block {block_hash:?} at height {block_height} has bits {:?}, required {work_required:?}",
            header.bits()
        );
    }
    ensure!(
        header.bits() == work_required,
        ConsensusPoWError::BitsMismatch {
            expected: work_required,
            actual: header.bits(),
        }
    );

    let post_fork = pow_config.is_post_fork(block_height);
    check_target(block_hash, header.bits(), post_fork, pow_config).map_err(|err| {
        log::debug!("Block {block_hash:?} at height {block_height} rejected: {err}");
        ConsensusPoWError::InvalidTarget(err)
    })?;

    if post_fork {
        check_equihash_solution(chain_config, header, equihash_verifier)?;
    }

    Ok(())
}
