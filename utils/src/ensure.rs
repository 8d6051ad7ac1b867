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

/// Exit early from the enclosing function unless the condition holds.
///
/// With a single argument the function must return an [Option] and `None` is returned.
/// With two arguments the second one is the error, evaluated lazily, returned as `Err`.
///
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum SpacingError {
///     ZeroSpacing,
///     UnevenTimespan,
/// }
///
/// fn blocks_per_interval(timespan: u64, spacing: u64) -> Result<u64, SpacingError> {
///     ensure!(spacing != 0, SpacingError::ZeroSpacing);
///     ensure!(timespan % spacing == 0, SpacingError::UnevenTimespan);
///     Ok(timespan / spacing)
/// }
///
/// assert_eq!(blocks_per_interval(1_209_600, 600), Ok(2016));
/// assert_eq!(blocks_per_interval(1_209_600, 0), Err(SpacingError::ZeroSpacing));
/// assert_eq!(blocks_per_interval(1_000, 600), Err(SpacingError::UnevenTimespan));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then_some(())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then_some(()).ok_or_else(|| $err)?
    };
}
