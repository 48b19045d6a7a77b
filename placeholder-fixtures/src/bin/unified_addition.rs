// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use log::info;

use placeholder_fixtures::constants::{
    BASE_PATH, CMD_ENV_EXPECTED_DRIVER_VERSION, CMD_ENV_VARIANT, DEFAULT_VARIANT, DRIVER_CMD,
};
use placeholder_fixtures::driver::CommandDriver;
use placeholder_fixtures::suite::{run_unified_addition, Variant};
use placeholder_fixtures::util::{init_env_and_log, read_env_var, GIT_VERSION};

fn main() -> Result<()> {
    let output_dir = init_env_and_log("unified_addition")?;
    info!("git version {GIT_VERSION}, output dir {output_dir}");

    let variant: Variant = read_env_var(
        CMD_ENV_VARIANT,
        DEFAULT_VARIANT.parse().unwrap_or_default(),
    );
    info!("base path {}, driver {}, variant {variant:?}", *BASE_PATH, *DRIVER_CMD);

    let driver = CommandDriver::new(DRIVER_CMD.as_str());
    let expected_version = read_env_var(CMD_ENV_EXPECTED_DRIVER_VERSION, String::new());
    if !expected_version.is_empty() {
        driver
            .check_version(&expected_version)
            .context("driver version check")?;
    }
    run_unified_addition(&driver, &BASE_PATH, variant)
        .context("unified addition placeholder verification")?;

    info!("all unified addition cases passed");
    Ok(())
}
