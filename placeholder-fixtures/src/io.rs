// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use ethers_core::types::U256;

use crate::error::{Error, Result};

pub fn data_path(base: &str, filename: &str) -> PathBuf {
    let mut path = PathBuf::from(base);
    path.push(filename);
    path
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the whole file. The bytes are returned as found on disk.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut buf = vec![];
    open(path)?
        .read_to_end(&mut buf)
        .map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buf)
}

/// Reads a domain file holding one decimal integer per line, in line order.
///
/// Surrounding whitespace of a line is ignored; an empty line is an error.
pub fn read_domain<P: AsRef<Path>>(path: P) -> Result<Vec<U256>> {
    let path = path.as_ref();
    let mut reader = BufReader::new(open(path)?);

    let mut domain = vec![];
    let mut buf = vec![];
    for idx in 1.. {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let value = std::str::from_utf8(raw).ok().and_then(parse_u256_dec);
        domain.push(value.ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            line: idx,
            value: String::from_utf8_lossy(raw).into_owned(),
        })?);
    }
    Ok(domain)
}

fn parse_u256_dec(s: &str) -> Option<U256> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_dec_str(digits).ok()
}
