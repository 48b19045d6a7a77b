// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Once;

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::Config;

pub static LOGGER: Once = Once::new();
pub const GIT_VERSION: &str = env!("FIXTURES_GIT_VERSION");

pub fn read_env_var<T: Clone + FromStr>(var_name: &'static str, default: T) -> T {
    std::env::var(var_name)
        .map(|s| s.parse::<T>().unwrap_or_else(|_| default.clone()))
        .unwrap_or(default)
}

fn create_output_dir(id: &str) -> Result<String> {
    let output = read_env_var(
        "OUTPUT_DIR",
        format!("{}_output_{}", id, Utc::now().format("%Y%m%d_%H%M%S")),
    );

    fs::create_dir_all(&output).with_context(|| format!("create output dir {output}"))?;

    Ok(output)
}

pub fn init_env_and_log(id: &str) -> Result<String> {
    dotenvy::dotenv().ok();
    let output_dir = create_output_dir(id)?;

    let mut result = Ok(());
    LOGGER.call_once(|| {
        let log_level = read_env_var("RUST_LOG", "INFO".to_string());
        let log_level = LevelFilter::from_str(&log_level).unwrap_or(LevelFilter::Info);

        let mut log_file_path = PathBuf::from(output_dir.clone());
        log_file_path.push("log.txt");

        result = (|| -> Result<()> {
            let log_file = FileAppender::builder().build(log_file_path)?;
            let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

            let config = Config::builder()
                .appenders([
                    Appender::builder().build("log-file", Box::new(log_file)),
                    Appender::builder().build("stderr", Box::new(stderr)),
                ])
                .build(
                    Root::builder()
                        .appender("log-file")
                        .appender("stderr")
                        .build(log_level),
                )?;

            log4rs::init_config(config)?;
            Ok(())
        })();
    });
    result.context("init logger")?;

    Ok(output_dir)
}
