// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use ethers_core::types::U256;
use once_cell::sync::Lazy;

use crate::util::read_env_var;

// environment variables key
pub const CMD_ENV_BASE_PATH: &str = "BASE_PATH";
pub const CMD_ENV_DRIVER_CMD: &str = "DRIVER_CMD";
pub const CMD_ENV_VARIANT: &str = "VARIANT";
// unset or empty skips the driver version check
pub const CMD_ENV_EXPECTED_DRIVER_VERSION: &str = "EXPECTED_DRIVER_VERSION";

const DEFAULT_BASE_PATH: &str = ".";
const DEFAULT_DRIVER_CMD: &str = "./web3_test";
pub const DEFAULT_VARIANT: &str = "simple";

// fixture files live under `<BASE_PATH>/test/data`
pub const TEST_DATA_DIR: &str = "test/data";
pub const PROOF1_FILENAME: &str = "placeholder_proof1.txt";
pub const PROOF2_FILENAME: &str = "placeholder_proof2.txt";
pub const DOMAIN8_UNIFIED_ADDITION_FILENAME: &str = "domain8_unified_addition.txt";

pub const UNIFIED_ADDITION_CONTRACT_NAME: &str = "TestPlaceholderVerifierUnifiedAddition";
pub const UNIFIED_ADDITION_CONTRACT_PATH: &str =
    "placeholder/test/public_api_placeholder_unified_addition_component.sol";
pub const UNIFIED_ADDITION_GATES_ENTRY_LIB: &str = "unified_addition_component_gen";
pub const UNIFIED_ADDITION_LINKED_LIBS: [&str; 2] =
    ["unified_addition_component_gen", "placeholder_verifier"];

pub const UNIFIED_ADDITION_CASE1_NAME: &str =
    "Placeholder proof verification for unified addition (case 1)";
pub const UNIFIED_ADDITION_CASE2_NAME: &str =
    "Placeholder proof verification for unified addition (case 2)";

/// Pallas base field modulus,
/// 28948022309329048855892746252171976963363056481941560715954676764349967630337.
pub const MODULUS: U256 = U256([
    0x992d30ed00000001,
    0x224698fc094cf91b,
    0x0000000000000000,
    0x4000000000000000,
]);
/// 199455130043951077247265858823823987229570523056509026484192158816218200659
pub const DOMAIN_SCALAR_A: U256 = U256([
    0x7c18299e8f753a53,
    0x5b0a9daaed5ad56f,
    0x2d9cfeedc219a126,
    0x0070e339f39258d6,
]);
// 12 may be the intended value, the deployed verifier expects 13
pub const DOMAIN_SCALAR_B: u64 = 13;

pub const EXTENSION_DEGREE: u64 = 2;
pub const MAX_DEGREE: u64 = 7;
pub const LAMBDA: u64 = 2;
pub const ROWS_AMOUNT: u64 = 8;
pub const Q: [u64; 3] = [0, 0, 1];
pub const STEP_LIST: [u64; 2] = [1, 1];

// one rotation list per circuit column of the unified addition component
pub const COLUMNS_ROTATIONS_COUNT: usize = 14;
pub const COLUMN_ROTATION: i64 = 0;

pub static BASE_PATH: Lazy<String> =
    Lazy::new(|| read_env_var(CMD_ENV_BASE_PATH, DEFAULT_BASE_PATH.to_string()));

pub static DRIVER_CMD: Lazy<String> =
    Lazy::new(|| read_env_var(CMD_ENV_DRIVER_CMD, DEFAULT_DRIVER_CMD.to_string()));
