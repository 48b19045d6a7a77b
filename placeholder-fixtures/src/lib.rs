// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

pub mod case;
pub mod constants;
pub mod driver;
pub mod error;
pub mod fixture;
pub mod io;
pub mod params;
pub mod suite;
pub mod util;

pub use error::{Error, Result};
pub use fixture::TestCase;
