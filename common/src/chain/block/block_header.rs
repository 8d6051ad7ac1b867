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

use parity_scale_codec::{Decode, Encode};

use crate::{
    chain::block::timestamp::BlockTimestamp,
    primitives::{Compact, H256},
};

pub const RESERVED_WORDS: usize = 7;

/// Header of a candidate block.
///
/// The field order is the serialization order. Everything up to and including `bits` is the
/// Equihash input, the nonce and the solution follow it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_id: H256,
    pub merkle_root: H256,
    pub height: u32,
    pub reserved: [u32; RESERVED_WORDS],
    pub timestamp: BlockTimestamp,
    pub bits: Compact,
    pub nonce: H256,
    pub solution: Vec<u8>,
}

/// The part of a header the Equihash puzzle is keyed on.
#[derive(Encode)]
struct EquihashInput {
    version: i32,
    prev_block_id: H256,
    merkle_root: H256,
    height: u32,
    reserved: [u32; RESERVED_WORDS],
    timestamp: BlockTimestamp,
    bits: Compact,
}

impl From<&BlockHeader> for EquihashInput {
    fn from(header: &BlockHeader) -> Self {
        Self {
            version: header.version,
            prev_block_id: header.prev_block_id,
            merkle_root: header.merkle_root,
            height: header.height,
            reserved: header.reserved,
            timestamp: header.timestamp,
            bits: header.bits,
        }
    }
}

impl BlockHeader {
    pub fn timestamp(&self) -> BlockTimestamp {
        self.timestamp
    }

    pub fn bits(&self) -> Compact {
        self.bits
    }

    /// Bytes fed to the Equihash state before the solution is checked: the serialized header
    /// without nonce and solution, followed by the serialized nonce.
    pub fn equihash_input_bytes(&self) -> Vec<u8> {
        let mut bytes = EquihashInput::from(self).encode();
        self.nonce.encode_to(&mut bytes);
        bytes
    }
}
