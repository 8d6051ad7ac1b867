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

use crate::chain::{
    config::{ChainConfig, ChainType},
    EquihashParams, PoWChainConfig, PoWChainConfigBuilder,
};

/// Builder for [ChainConfig]
#[derive(Debug, Clone)]
pub struct Builder {
    chain_type: ChainType,
    pow_chain_config: PoWChainConfig,
    equihash_params: EquihashParams,
}

impl Builder {
    /// A new chain config builder, with given chain type as a basis
    pub fn new(chain_type: ChainType) -> Self {
        Self {
            chain_type,
            pow_chain_config: PoWChainConfig::new(chain_type),
            equihash_params: EquihashParams::for_chain(chain_type),
        }
    }

    /// New builder initialized with test chain config
    pub fn test_chain() -> Self {
        Self::new(ChainType::Regtest)
    }

    /// Build the chain config
    pub fn build(self) -> ChainConfig {
        let Self {
            chain_type,
            pow_chain_config,
            equihash_params,
        } = self;

        ChainConfig {
            chain_type,
            pow_chain_config,
            equihash_params,
        }
    }

    /// Start a PoW parameter builder for the current chain type; finish it with
    /// [Self::pow_chain_config]
    pub fn pow_builder(&self) -> PoWChainConfigBuilder {
        PoWChainConfigBuilder::new(self.chain_type)
    }
}

impl Builder {
    builder_method!(pow_chain_config: PoWChainConfig);
    builder_method!(equihash_params: EquihashParams);
}
