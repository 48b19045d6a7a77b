// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use log::debug;

use crate::constants::{
    DOMAIN8_UNIFIED_ADDITION_FILENAME, PROOF1_FILENAME, PROOF2_FILENAME, TEST_DATA_DIR,
    UNIFIED_ADDITION_CASE1_NAME, UNIFIED_ADDITION_CASE2_NAME,
};
use crate::error::Result;
use crate::fixture::TestCase;
use crate::io::{data_path, read_all, read_domain};
use crate::params::{unified_addition_columns_rotations, InitParams};

/// (proof file, display name) of every unified addition case, in run order.
pub const UNIFIED_ADDITION_CASES: [(&str, &str); 2] = [
    (PROOF1_FILENAME, UNIFIED_ADDITION_CASE1_NAME),
    (PROOF2_FILENAME, UNIFIED_ADDITION_CASE2_NAME),
];

/// Builds a unified addition case from an explicit proof file and domain file.
///
/// Nothing is returned unless both files are read and every domain line parses.
pub fn build_test_case(
    test_name: &str,
    proof_path: impl AsRef<Path>,
    domain_path: impl AsRef<Path>,
) -> Result<TestCase> {
    let proof = read_all(proof_path.as_ref())?;
    let domain = read_domain(domain_path.as_ref())?;
    debug!(
        "{test_name}: proof {} bytes, domain {} points",
        proof.len(),
        domain.len()
    );

    let init_params = InitParams::unified_addition(domain).flatten();

    Ok(TestCase::new(
        test_name,
        proof,
        init_params,
        unified_addition_columns_rotations(),
    ))
}

/// Builds a unified addition case whose files live under `<base_path>/test/data`.
pub fn unified_addition_case(
    base_path: &str,
    proof_filename: &str,
    test_name: &str,
) -> Result<TestCase> {
    let data_dir = data_path(base_path, TEST_DATA_DIR);
    build_test_case(
        test_name,
        data_dir.join(proof_filename),
        data_dir.join(DOMAIN8_UNIFIED_ADDITION_FILENAME),
    )
}
