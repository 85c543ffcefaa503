// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod logs;
pub mod run;
pub mod step;

use clap::ValueEnum;
use reporter_core::Outcome;

/// Result of a run or step as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResultArg {
    Passed,
    Failed,
}

impl From<ResultArg> for Outcome {
    fn from(arg: ResultArg) -> Self {
        match arg {
            ResultArg::Passed => Outcome::Passed,
            ResultArg::Failed => Outcome::Failed,
        }
    }
}
