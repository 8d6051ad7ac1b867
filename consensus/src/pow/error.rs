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

use chainstate_types::PropertyQueryError;
use common::primitives::Compact;

use super::TargetCheckError;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConsensusPoWError {
    #[error("Chainstate error: `{0}`")]
    ChainstateError(#[from] PropertyQueryError),
    #[error("Block bits {actual:?} differ from the required {expected:?}")]
    BitsMismatch { expected: Compact, actual: Compact },
    #[error("Invalid proof of work: {0}")]
    InvalidTarget(#[from] TargetCheckError),
    #[error("Invalid Equihash solution")]
    InvalidEquihashSolution,
}
