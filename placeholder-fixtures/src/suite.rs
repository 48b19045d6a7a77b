// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::case::{unified_addition_case, UNIFIED_ADDITION_CASES};
use crate::constants::{
    UNIFIED_ADDITION_CONTRACT_NAME, UNIFIED_ADDITION_CONTRACT_PATH,
    UNIFIED_ADDITION_GATES_ENTRY_LIB, UNIFIED_ADDITION_LINKED_LIBS,
};
use crate::driver::{run, run_simple, ContractTarget, Driver};
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// transact against contract plus linked libraries
    #[default]
    Simple,
    /// also link the gates entry library explicitly
    Full,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Variant::Simple),
            "full" => Ok(Variant::Full),
            _ => Err(format!("unknown variant {s}")),
        }
    }
}

pub fn unified_addition_target() -> ContractTarget {
    ContractTarget::new(
        UNIFIED_ADDITION_CONTRACT_NAME,
        UNIFIED_ADDITION_CONTRACT_PATH,
        &UNIFIED_ADDITION_LINKED_LIBS,
    )
}

/// Runs every unified addition case in order. The first failure stops the run.
pub fn run_unified_addition<D: Driver + ?Sized>(
    driver: &D,
    base_path: &str,
    variant: Variant,
) -> Result<()> {
    let target = unified_addition_target();
    for (proof_file, test_name) in UNIFIED_ADDITION_CASES {
        let builder = || unified_addition_case(base_path, proof_file, test_name);
        match variant {
            Variant::Simple => run_simple(driver, &target, builder)?,
            Variant::Full => run(driver, &target, UNIFIED_ADDITION_GATES_ENTRY_LIB, builder)?,
        }
    }
    Ok(())
}
