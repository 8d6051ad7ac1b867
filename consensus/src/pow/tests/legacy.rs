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

use rand::Rng;
use rstest::rstest;
use test_utils::random::{make_seedable_rng, Seed};

use common::{
    chain::{block::timestamp::BlockTimestamp, config::ChainType, PoWChainConfigBuilder},
    primitives::Compact,
    Uint256,
};

use super::*;
use crate::{
    calculate_work_required,
    pow::legacy::{calculate_next_work_required, next_work_required},
    ConsensusPoWError,
};

const BITS: Compact = Compact(0x1c0ffff0);

#[test]
fn genesis_uses_limit() {
    let config = short_interval_config().build();
    let chain = TestChain::new();
    let header = chain.next_header(GENESIS_TIME, LEGACY_LIMIT_BITS);

    assert_eq!(
        calculate_work_required(&config, None, &header, &chain),
        Ok(LEGACY_LIMIT_BITS)
    );
    let legacy_bits = next_work_required(&config, None, header.timestamp(), &chain);
    assert_eq!(legacy_bits, Ok(LEGACY_LIMIT_BITS));
}

#[test]
fn between_retargets_bits_are_kept() {
    let config = short_interval_config().build();
    // Tip at height 8, the next block is one below the retarget boundary
    let chain = TestChain::with_blocks(9, SPACING, BITS);
    let header = chain.next_header(chain.next_timestamp(100_000), BITS);

    assert_eq!(
        calculate_work_required(&config, Some(chain.tip()), &header, &chain),
        Ok(BITS)
    );
}

#[rstest]
#[case(LEGACY_LIMIT_BITS, SPACING, Compact(0x1d00e665))]
#[case(BITS, SPACING, Compact(0x1c0e6658))]
#[case(BITS, 900, Compact(0x1c159984))]
#[case(BITS, 0, Compact(0x1c03fffc))]
#[case(BITS, 100_000, Compact(0x1c3fffc0))]
#[case(LEGACY_LIMIT_BITS, 1_200, LEGACY_LIMIT_BITS)]
fn retarget_on_boundary(#[case] bits: Compact, #[case] spacing: u32, #[case] expected: Compact) {
    let config = short_interval_config().build();
    // Tip at height 9, the next block is at the retarget boundary
    let chain = TestChain::with_blocks(10, spacing, bits);
    let header = chain.next_header(chain.next_timestamp(spacing), expected);

    assert_eq!(
        calculate_work_required(&config, Some(chain.tip()), &header, &chain),
        Ok(expected)
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn only_interval_ends_matter(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let config = short_interval_config().build();

    let mut chain = TestChain::new();
    chain.push(GENESIS_TIME, LEGACY_LIMIT_BITS);
    for _ in 1..9 {
        chain.push(GENESIS_TIME + rng.gen_range(0..100_000), LEGACY_LIMIT_BITS);
    }
    chain.push(GENESIS_TIME + 9 * SPACING, LEGACY_LIMIT_BITS);

    let header = chain.next_header(GENESIS_TIME + 10 * SPACING, LEGACY_LIMIT_BITS);
    assert_eq!(
        calculate_work_required(&config, Some(chain.tip()), &header, &chain),
        Ok(Compact(0x1d00e665))
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn retarget_is_bounded(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let config = short_interval_config().build();
    let limit = config.limit();
    let truncated = |value: Uint256| Compact::from(value).decode().value;

    for _ in 0..100 {
        let bits = Compact::from(limit >> rng.gen_range(0..100usize));
        let old_target = bits.decode().value;

        let mut chain = TestChain::new();
        let first_time = rng.gen_range(GENESIS_TIME..GENESIS_TIME + 1_000_000);
        chain.push(first_time, bits);
        for _ in 1..10 {
            chain.push(rng.gen_range(GENESIS_TIME..GENESIS_TIME + 1_000_000), bits);
        }

        let new_bits = calculate_next_work_required(
            &config,
            chain.tip(),
            BlockTimestamp::from_int_seconds(first_time),
        );
        let new_target = new_bits.decode().value;

        assert!(new_target <= std::cmp::min(old_target * 4, limit));
        assert!(new_target >= truncated((old_target / Uint256::from_u64(4)).unwrap()));
    }
}

#[test]
fn no_retargeting_keeps_bits() {
    let config = short_interval_config().no_retargeting(true).build();
    let chain = TestChain::with_blocks(10, 0, BITS);
    let first_time = chain.at(0).block_timestamp();

    assert_eq!(
        calculate_next_work_required(&config, chain.tip(), first_time),
        BITS
    );
}

#[test]
fn missing_interval_start_is_reported() {
    let config = short_interval_config().build();
    let mut chain = TestChain::with_blocks(10, SPACING, BITS);
    chain.forget(4);
    let header = chain.next_header(chain.next_timestamp(SPACING), BITS);

    let result = calculate_work_required(&config, Some(chain.tip()), &header, &chain);
    assert!(matches!(result, Err(ConsensusPoWError::ChainstateError(_))));
}

mod min_difficulty {
    use super::*;

    fn testnet_config() -> common::chain::PoWChainConfig {
        PoWChainConfigBuilder::new(ChainType::Testnet)
            .target_timespan(std::time::Duration::from_secs(10 * SPACING as u64))
            .build()
    }

    #[test]
    fn stalled_production_allows_limit() {
        let config = testnet_config();
        let chain = TestChain::with_blocks(5, SPACING, BITS);
        let tip_time = chain.tip().block_timestamp().as_int_seconds();

        let header = chain.next_header(tip_time + 2 * SPACING + 1, LEGACY_LIMIT_BITS);
        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(LEGACY_LIMIT_BITS)
        );

        let header = chain.next_header(tip_time + 2 * SPACING, BITS);
        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(BITS)
        );
    }

    #[test]
    fn stalled_production_without_the_rule() {
        let config = short_interval_config().build();
        let chain = TestChain::with_blocks(5, SPACING, BITS);
        let header = chain.next_header(chain.next_timestamp(100 * SPACING), BITS);

        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(BITS)
        );
    }

    #[test]
    fn walks_back_to_retarget_boundary() {
        let config = testnet_config();
        let mut chain = TestChain::with_blocks(11, SPACING, BITS);
        chain.extend(3, SPACING, LEGACY_LIMIT_BITS);
        assert_eq!(chain.tip().block_height().into_int(), 13);

        let header = chain.next_header(chain.next_timestamp(SPACING), BITS);
        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(BITS)
        );
    }

    #[test]
    fn walks_back_to_last_regular_block() {
        let config = testnet_config();
        let other_bits = Compact(0x1c0aaaaa);
        let mut chain = TestChain::with_blocks(11, SPACING, BITS);
        chain.extend(1, SPACING, other_bits);
        chain.extend(2, SPACING, LEGACY_LIMIT_BITS);

        let header = chain.next_header(chain.next_timestamp(SPACING), other_bits);
        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(other_bits)
        );
    }

    #[test]
    fn boundary_block_at_limit_ends_the_walk() {
        let config = testnet_config();
        let mut chain = TestChain::with_blocks(10, SPACING, BITS);
        chain.extend(3, SPACING, LEGACY_LIMIT_BITS);

        // Height 10 carries the limit itself, the walk stops there anyway
        let header = chain.next_header(chain.next_timestamp(SPACING), BITS);
        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(LEGACY_LIMIT_BITS)
        );
    }

    #[test]
    fn walk_stops_at_genesis() {
        let config = testnet_config();
        let chain = TestChain::with_blocks(4, SPACING, LEGACY_LIMIT_BITS);
        let header = chain.next_header(chain.next_timestamp(SPACING), LEGACY_LIMIT_BITS);

        assert_eq!(
            calculate_work_required(&config, Some(chain.tip()), &header, &chain),
            Ok(LEGACY_LIMIT_BITS)
        );
    }
}
