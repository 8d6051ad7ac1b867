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

mod builder;

pub use builder::Builder;

use strum::EnumIter;

use crate::chain::{EquihashParams, PoWChainConfig};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum ChainType {
    Mainnet,
    Testnet,
    Regtest,
}

impl ChainType {
    pub const fn name(&self) -> &'static str {
        match self {
            ChainType::Mainnet => "mainnet",
            ChainType::Testnet => "testnet",
            ChainType::Regtest => "regtest",
        }
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ChainType {
    type Err = ChainTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(ChainType::Mainnet),
            "testnet" => Ok(ChainType::Testnet),
            "regtest" => Ok(ChainType::Regtest),
            _ => Err(ChainTypeParseError(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chain type: {0}")]
pub struct ChainTypeParseError(String);

/// Everything consensus needs to know about a network. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    chain_type: ChainType,
    pow_chain_config: PoWChainConfig,
    equihash_params: EquihashParams,
}

impl ChainConfig {
    pub fn chain_type(&self) -> &ChainType {
        &self.chain_type
    }

    pub fn pow_chain_config(&self) -> &PoWChainConfig {
        &self.pow_chain_config
    }

    pub fn equihash_params(&self) -> EquihashParams {
        self.equihash_params
    }
}

pub fn create_mainnet() -> ChainConfig {
    Builder::new(ChainType::Mainnet).build()
}

pub fn create_testnet() -> ChainConfig {
    Builder::new(ChainType::Testnet).build()
}

pub fn create_regtest() -> ChainConfig {
    Builder::new(ChainType::Regtest).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn chain_type_names_round_trip() {
        for chain_type in ChainType::iter() {
            assert_eq!(chain_type.name().parse::<ChainType>(), Ok(chain_type));
            assert_eq!(chain_type.to_string(), chain_type.name());
        }
        assert_eq!(
            "signet".parse::<ChainType>(),
            Err(ChainTypeParseError("signet".to_owned()))
        );
    }

    #[test]
    fn mainnet_creation() {
        let config = create_mainnet();
        assert_eq!(config.chain_type(), &ChainType::Mainnet);
        assert_eq!(config.equihash_params(), EquihashParams::new(200, 9));
        assert_eq!(
            config.pow_chain_config(),
            &PoWChainConfig::new(ChainType::Mainnet)
        );
    }

    #[test]
    fn other_networks() {
        assert!(create_testnet().pow_chain_config().allow_min_difficulty_blocks());
        let regtest = create_regtest();
        assert!(regtest.pow_chain_config().no_retargeting());
        assert_eq!(regtest.equihash_params(), EquihashParams::new(48, 5));
    }
}
