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

use common::chain::{block::BlockHeader, ChainConfig, EquihashParams};
use logging::log;
use utils::ensure;

use super::ConsensusPoWError;

/// Verification side of the Equihash puzzle.
///
/// The state is a hash state keyed on the puzzle parameters; the bytes the solution commits to
/// are fed into it before the solution itself is checked.
pub trait EquihashVerifier {
    type State;

    fn initialise_state(&self, params: EquihashParams) -> Self::State;

    fn update(&self, state: &mut Self::State, input: &[u8]);

    fn is_valid_solution(&self, params: EquihashParams, state: Self::State, solution: &[u8])
        -> bool;
}

pub fn check_equihash_solution(
    chain_config: &ChainConfig,
    header: &BlockHeader,
    verifier: &impl EquihashVerifier,
) -> Result<(), ConsensusPoWError> {
    let params = chain_config.equihash_params();

    let mut state = verifier.initialise_state(params);
    verifier.update(&mut state, &header.equihash_input_bytes());

    let is_valid = verifier.is_valid_solution(params, state, &header.solution);
    if !is_valid {
        log::warn!(
            "Invalid Equihash solution for block at height {} with parameters {params:?}",
            header.height
        );
    }
    ensure!(is_valid, ConsensusPoWError::InvalidEquihashSolution);

    Ok(())
}
