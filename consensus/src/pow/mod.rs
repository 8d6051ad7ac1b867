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

mod check;
pub mod continuous;
mod equihash;
mod error;
mod helpers;
pub mod legacy;
pub mod suitable_block;
mod work;

#[cfg(test)]
mod tests;

pub use check::{check_proof_of_work, check_target, TargetCheckError};
pub use equihash::{check_equihash_solution, EquihashVerifier};
pub use error::ConsensusPoWError;
pub use helpers::get_block_proof;
pub use work::{calculate_work_required, WorkRequiredRule};
