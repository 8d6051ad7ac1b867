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

use common::primitives::{BlockHeight, H256};

use crate::{BlockIndex, GetAncestorError, PropertyQueryError};

/// Read access to the block index of a chain.
pub trait BlockIndexHandle {
    /// Get block index for given block ID
    fn get_block_index(&self, block_id: &H256) -> Result<Option<BlockIndex>, PropertyQueryError>;

    /// Get the parent of a block index, `None` for genesis
    fn get_prev_block_index(
        &self,
        block_index: &BlockIndex,
    ) -> Result<Option<BlockIndex>, PropertyQueryError> {
        match block_index.prev_block_id() {
            Some(prev_block_id) => self.get_block_index(prev_block_id),
            None => Ok(None),
        }
    }

    /// Get the ancestor of a block at the given height, `None` if the height is above the block.
    ///
    /// The provided implementation follows parent links one at a time.
    fn get_ancestor(
        &self,
        block_index: &BlockIndex,
        ancestor_height: BlockHeight,
    ) -> Result<Option<BlockIndex>, PropertyQueryError> {
        if ancestor_height > block_index.block_height() {
            return Ok(None);
        }

        let mut current = block_index.clone();
        while current.block_height() > ancestor_height {
            let prev = self.get_prev_block_index(&current)?;
            current = prev.ok_or(GetAncestorError::PrevBlockIndexNotFound(*current.block_id()))?;
        }
        Ok(Some(current))
    }
}
