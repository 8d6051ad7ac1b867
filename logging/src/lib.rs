// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use log;

/// Environment variable holding the log filter, in `env_logger` syntax (e.g. `consensus=trace`).
pub const LOG_FILTER_ENV_VAR: &str = "CASHPLUS_LOG";

const DEFAULT_FILTER: &str = "info";
const DEFAULT_TEST_FILTER: &str = "debug";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

fn env_with_default_filter(default_filter: &str) -> env_logger::Env<'_> {
    env_logger::Env::new().filter_or(LOG_FILTER_ENV_VAR, default_filter)
}

/// Install the terminal logger. Calling this more than once is a no-op.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        // Fails only if some other logger is already installed, which is fine.
        let _ = env_logger::Builder::from_env(env_with_default_filter(DEFAULT_FILTER)).try_init();
    });
}

/// Install a logger whose output is captured by the test harness.
pub fn init_logging_for_tests() {
    // Several tests in one binary race to install the logger; only the first one wins.
    let _ = env_logger::Builder::from_env(env_with_default_filter(DEFAULT_TEST_FILTER))
        .is_test(true)
        .try_init();
}
