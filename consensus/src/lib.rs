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

//! Proof of work consensus: difficulty adjustment and block validation.

mod error;
mod pow;
mod validator;

pub use crate::{
    error::ConsensusVerificationError,
    pow::{
        calculate_work_required, check_equihash_solution, check_proof_of_work, check_target,
        continuous, get_block_proof, legacy, suitable_block, ConsensusPoWError,
        EquihashVerifier, TargetCheckError, WorkRequiredRule,
    },
    validator::validate_pow_consensus,
};
