// Copyright (c) 2021-2022 RBB S.r.l
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

#![allow(clippy::non_canonical_clone_impl)]

use parity_scale_codec::{Decode, Encode};

use crate::Uint256;

fixed_hash::construct_fixed_hash! {
    #[derive(Encode, Decode)]
    pub struct H256(32);
}

/// A hash, viewed as a number, is read most significant byte first.
impl From<H256> for Uint256 {
    fn from(hash: H256) -> Self {
        Uint256::from_be_bytes(hash.0)
    }
}

impl From<Uint256> for H256 {
    fn from(value: Uint256) -> Self {
        H256(value.to_be_bytes())
    }
}
