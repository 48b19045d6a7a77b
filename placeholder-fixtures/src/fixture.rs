// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use ethers_core::abi::{encode, Token};
use ethers_core::types::{I256, U256};
use serde::Serialize;

/// One verification run: the proof blob and the verifier's init parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    proof: Vec<u8>,
    init_params: Vec<U256>,
    columns_rotations: Vec<Vec<i64>>,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        proof: Vec<u8>,
        init_params: Vec<U256>,
        columns_rotations: Vec<Vec<i64>>,
    ) -> Self {
        Self {
            name: name.into(),
            proof,
            init_params,
            columns_rotations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn proof(&self) -> &[u8] {
        &self.proof
    }

    pub fn init_params(&self) -> &[U256] {
        &self.init_params
    }

    pub fn columns_rotations(&self) -> &[Vec<i64>] {
        &self.columns_rotations
    }

    /// ABI encoding of `(uint256[] init_params, int256[][] columns_rotations)`.
    pub fn encode_init_calldata(&self) -> Vec<u8> {
        let init_params = Token::Array(self.init_params.iter().copied().map(Token::Uint).collect());
        let rotations = Token::Array(
            self.columns_rotations
                .iter()
                .map(|column| {
                    Token::Array(
                        column
                            .iter()
                            .map(|r| Token::Int(I256::from(*r).into_raw()))
                            .collect(),
                    )
                })
                .collect(),
        );
        encode(&[init_params, rotations])
    }

    pub fn wire(&self) -> WireTestCase<'_> {
        WireTestCase {
            test_name: &self.name,
            proof: &self.proof,
            init_params: &self.init_params,
            columns_rotations: &self.columns_rotations,
        }
    }
}

/// The keyed form consumed by the external driver.
#[derive(Debug, Serialize)]
pub struct WireTestCase<'a> {
    #[serde(rename = "_test_name")]
    pub test_name: &'a str,
    #[serde(with = "base64_bytes")]
    pub proof: &'a [u8],
    #[serde(with = "dec_u256")]
    pub init_params: &'a [U256],
    pub columns_rotations: &'a [Vec<i64>],
}

pub mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::Serializer;

    /// serialize bytes as base64
    pub fn serialize<S>(data: &&[u8], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&STANDARD.encode(*data))
    }
}

/// 256-bit integers as decimal strings, they do not fit a JSON number.
pub mod dec_u256 {
    use ethers_core::types::U256;
    use serde::ser::SerializeSeq;
    use serde::Serializer;

    pub fn serialize<S>(values: &&[U256], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = s.serialize_seq(Some(values.len()))?;
        for v in values.iter() {
            seq.serialize_element(&v.to_string())?;
        }
        seq.end()
    }
}
