// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

//! Positional init parameters of the placeholder verifier.
//!
//! The verifier's initializer reads a single flat `uint256[]`: seven scalar
//! fields followed by the variable-length blocks `D`, `q` and `step_list`,
//! each preceded by its own length. Position is meaning; there are no names
//! on the wire.

use ethers_core::types::U256;

use crate::constants::{
    COLUMNS_ROTATIONS_COUNT, COLUMN_ROTATION, DOMAIN_SCALAR_A, DOMAIN_SCALAR_B, EXTENSION_DEGREE,
    LAMBDA, MAX_DEGREE, MODULUS, Q, ROWS_AMOUNT, STEP_LIST,
};

/// Offset of `len(D)` in the flattened vector.
pub const DOMAIN_LEN_INDEX: usize = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitParams {
    pub modulus: U256,
    /// field extension degree, `r`
    pub r: U256,
    pub max_degree: U256,
    pub lambda: U256,
    pub rows_amount: U256,
    pub domain_scalar_a: U256,
    pub domain_scalar_b: U256,
    /// evaluation domain `D`, in file order
    pub domain: Vec<U256>,
    pub q: Vec<U256>,
    pub step_list: Vec<U256>,
}

impl InitParams {
    /// The unified addition parameters over the given domain.
    pub fn unified_addition(domain: Vec<U256>) -> Self {
        Self {
            modulus: MODULUS,
            r: EXTENSION_DEGREE.into(),
            max_degree: MAX_DEGREE.into(),
            lambda: LAMBDA.into(),
            rows_amount: ROWS_AMOUNT.into(),
            domain_scalar_a: DOMAIN_SCALAR_A,
            domain_scalar_b: DOMAIN_SCALAR_B.into(),
            domain,
            q: Q.iter().copied().map(U256::from).collect(),
            step_list: STEP_LIST.iter().copied().map(U256::from).collect(),
        }
    }

    pub fn flatten(&self) -> Vec<U256> {
        let mut out = Vec::with_capacity(
            DOMAIN_LEN_INDEX + 3 + self.domain.len() + self.q.len() + self.step_list.len(),
        );
        out.extend([
            self.modulus,
            self.r,
            self.max_degree,
            self.lambda,
            self.rows_amount,
            self.domain_scalar_a,
            self.domain_scalar_b,
        ]);
        push_length_prefixed(&mut out, &self.domain);
        push_length_prefixed(&mut out, &self.q);
        push_length_prefixed(&mut out, &self.step_list);
        out
    }
}

fn push_length_prefixed(out: &mut Vec<U256>, block: &[U256]) {
    out.push(U256::from(block.len()));
    out.extend_from_slice(block);
}

/// `count` singleton rotation lists, each holding `rotation`.
pub fn uniform_columns_rotations(count: usize, rotation: i64) -> Vec<Vec<i64>> {
    vec![vec![rotation]; count]
}

pub fn unified_addition_columns_rotations() -> Vec<Vec<i64>> {
    uniform_columns_rotations(COLUMNS_ROTATIONS_COUNT, COLUMN_ROTATION)
}

#[cfg(test)]
mod test {
    use ethers_core::types::U256;

    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn test_flatten_layout() {
        let domain = vec![u(11), u(22), u(33)];
        let flat = InitParams::unified_addition(domain.clone()).flatten();

        assert_eq!(flat[0], MODULUS);
        assert_eq!(&flat[1..5], &[u(2), u(7), u(2), u(8)]);
        assert_eq!(flat[5], DOMAIN_SCALAR_A);
        assert_eq!(flat[6], u(13));
        assert_eq!(flat[DOMAIN_LEN_INDEX], u(3));
        assert_eq!(&flat[8..11], domain.as_slice());
        assert_eq!(&flat[11..15], &[u(3), u(0), u(0), u(1)]);
        assert_eq!(&flat[15..], &[u(2), u(1), u(1)]);
    }

    #[test]
    fn test_flatten_empty_domain() {
        let flat = InitParams::unified_addition(vec![]).flatten();
        assert_eq!(flat.len(), 7 + 1 + 4 + 3);
        assert_eq!(flat[DOMAIN_LEN_INDEX], U256::zero());
        assert_eq!(flat[8], u(3));
    }

    #[test]
    fn test_custom_blocks_are_length_prefixed() {
        let mut params = InitParams::unified_addition(vec![u(9)]);
        params.q = vec![u(4), u(5)];
        params.step_list = vec![];
        let flat = params.flatten();
        assert_eq!(&flat[7..], &[u(1), u(9), u(2), u(4), u(5), u(0)]);
    }

    #[test]
    fn test_columns_rotations() {
        let rotations = unified_addition_columns_rotations();
        assert_eq!(rotations.len(), 14);
        assert!(rotations.iter().all(|r| r == &vec![0]));
        assert_eq!(uniform_columns_rotations(2, -1), vec![vec![-1], vec![-1]]);
    }
}
