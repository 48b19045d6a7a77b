// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

//! Error module for the placeholder fixtures.

use std::path::PathBuf;

/// Error type for any failure while building or running a fixture.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fixture file is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        /// file that failed to open or read
        path: PathBuf,
        /// underlying io error
        #[source]
        source: std::io::Error,
    },
    /// A domain file line is not a decimal 256-bit unsigned integer.
    #[error("{}:{line}: expected an unsigned decimal integer, found {value:?}", path.display())]
    Parse {
        /// domain file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// raw line content
        value: String,
    },
    /// The verifier rejected the proof or parameters.
    #[error("verification failed for {test_name:?}: {reason}")]
    Verification {
        /// display name of the failing case
        test_name: String,
        /// what the driver reported
        reason: String,
    },
    /// The external driver could not be run.
    #[error("driver error: {0}")]
    Driver(String),
    /// Request de/serialization error.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
