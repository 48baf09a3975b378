// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! swt-core: data model shared by the switch test suite.

pub mod env;
pub mod params;
pub mod record;
pub mod report;
pub mod verdict;

pub use params::{config_lines, lenient_u64, loopback_ip, switch_id, CsvList, Subports, Topology};
pub use record::{record_key, ExecutionLog, ExecutionRecord, RESULT_DETAIL_KEY, RESULT_STATUS_KEY};
pub use report::{log_file_path, write_log, LogMode, RunOutcome, TaskReport, TestReport};
pub use verdict::{StatusLabel, Verdict};
