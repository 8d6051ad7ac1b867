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
use common::primitives::H256;

use crate::ConsensusPoWError;

/// A consensus related error.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConsensusVerificationError {
    #[error("Error while loading previous block {0:?} with error {1}")]
    PrevBlockLoadError(H256, PropertyQueryError),
    #[error("Previous block {0:?} not found in database")]
    PrevBlockNotFound(H256),
    #[error("PoW error: {0}")]
    PoWError(#[from] ConsensusPoWError),
}
