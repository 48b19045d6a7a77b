// Copyright (C) SAFIT. All rights reserved.
// Copyright (C) BABEC. All rights reserved.
// Copyright (C) THL A29 Limited, a Tencent company. All rights reserved.
//
// SPDX-License-Identifier: Apache-2.0

//! Boundary to the tool that compiles, links, deploys and transacts.
//!
//! Deployment is not done here. A [`Driver`] receives the contract to target
//! and a built [`TestCase`], and answers success or failure.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::fixture::{TestCase, WireTestCase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractTarget {
    pub contract_name: String,
    pub contract_path: String,
    pub linked_libs: Vec<String>,
    /// Only set for the full variant, which links the gate library explicitly.
    pub gates_entry_lib: Option<String>,
}

impl ContractTarget {
    pub fn new<S: AsRef<str>>(contract_name: &str, contract_path: &str, linked_libs: &[S]) -> Self {
        Self {
            contract_name: contract_name.to_string(),
            contract_path: contract_path.to_string(),
            linked_libs: linked_libs.iter().map(|s| s.as_ref().to_string()).collect(),
            gates_entry_lib: None,
        }
    }

    pub fn with_gates_entry_lib(mut self, lib: &str) -> Self {
        self.gates_entry_lib = Some(lib.to_string());
        self
    }
}

pub trait Driver {
    /// Deploys `target`, initializes it with `case` and submits the proof.
    /// Returns `Err(Error::Verification)` when the call is rejected.
    fn transact(&self, target: &ContractTarget, case: &TestCase) -> Result<()>;
}

fn run_with<D, F>(driver: &D, target: &ContractTarget, builder: F) -> Result<()>
where
    D: Driver + ?Sized,
    F: FnOnce() -> Result<TestCase>,
{
    let case = builder()?;
    info!(
        "[{}] {} ({} init params, {} proof bytes)",
        target.contract_name,
        case.name(),
        case.init_params().len(),
        case.proof().len()
    );
    match driver.transact(target, &case) {
        Ok(()) => {
            info!("[{}] {}: passed", target.contract_name, case.name());
            Ok(())
        }
        Err(e) => {
            error!("[{}] {}: {}", target.contract_name, case.name(), e);
            Err(e)
        }
    }
}

/// The simple transact check: contract plus linked libraries.
pub fn run_simple<D, F>(driver: &D, target: &ContractTarget, builder: F) -> Result<()>
where
    D: Driver + ?Sized,
    F: FnOnce() -> Result<TestCase>,
{
    let mut target = target.clone();
    target.gates_entry_lib = None;
    run_with(driver, &target, builder)
}

/// The full check, linking `gates_entry_lib` as the gate evaluation entry.
pub fn run<D, F>(
    driver: &D,
    target: &ContractTarget,
    gates_entry_lib: &str,
    builder: F,
) -> Result<()>
where
    D: Driver + ?Sized,
    F: FnOnce() -> Result<TestCase>,
{
    let target = target.clone().with_gates_entry_lib(gates_entry_lib);
    run_with(driver, &target, builder)
}

#[derive(Debug, Serialize)]
struct Request<'a> {
    contract_name: &'a str,
    contract_path: &'a str,
    linked_libs: &'a [String],
    linked_gates_entry_lib: Option<&'a str>,
    params: WireTestCase<'a>,
    init_params_calldata: String,
}

/// Hands each case to an external program as one JSON document on stdin.
/// Exit status 0 means the verifier accepted the proof.
#[derive(Clone, Debug)]
pub struct CommandDriver {
    program: String,
    args: Vec<String>,
}

impl CommandDriver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn request_body(target: &ContractTarget, case: &TestCase) -> Result<Vec<u8>> {
        let request = Request {
            contract_name: &target.contract_name,
            contract_path: &target.contract_path,
            linked_libs: &target.linked_libs,
            linked_gates_entry_lib: target.gates_entry_lib.as_deref(),
            params: case.wire(),
            init_params_calldata: format!("0x{}", hex::encode(case.encode_init_calldata())),
        };
        Ok(serde_json::to_vec(&request)?)
    }

    /// Checks that the tool runs and reports `expected_version`.
    /// A version mismatch only warns.
    pub fn check_version(&self, expected_version: &str) -> Result<()> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| Error::Driver(format!("failed to execute {}: {e}", self.program)))?;
        if !output.status.success() {
            return Err(Error::Driver(format!(
                "{} --version exited with {}",
                self.program, output.status
            )));
        }
        let version_str = String::from_utf8(output.stdout)
            .map_err(|_| Error::Driver(format!("unreadable {} version output", self.program)))?;

        if version_str.contains(expected_version) {
            info!("[{}] version matched: {}", self.program, version_str.trim());
        } else {
            warn!(
                "[{}] version mismatch: expected {}, found {}",
                self.program,
                expected_version,
                version_str.trim()
            );
        }
        Ok(())
    }
}

impl Driver for CommandDriver {
    fn transact(&self, target: &ContractTarget, case: &TestCase) -> Result<()> {
        let body = Self::request_body(target, case)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Driver(format!("failed to execute {}: {e}", self.program)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Driver(format!("no stdin for {}", self.program)))?;
        // stdout and stderr are drained while the request is written,
        // stdin is dropped when the writer ends so the tool sees EOF
        let writer = thread::spawn(move || stdin.write_all(&body));

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Driver(format!("failed to wait for {}: {e}", self.program)))?;
        let written = writer
            .join()
            .map_err(|_| Error::Driver("request writer panicked".to_string()))?;
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            info!("[{}] {}", self.program, line);
        }

        if output.status.success() {
            match written {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                    Err(Error::Driver(format!("failed to write request: {e}")))
                }
                Err(e) => {
                    debug!("[{}] request not fully read: {e}", self.program);
                    Ok(())
                }
                Ok(()) => Ok(()),
            }
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::Verification {
                test_name: case.name().to_string(),
                reason: format!("{} ({})", stderr.trim(), output.status),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use ethers_core::types::U256;

    use super::*;

    #[derive(Default)]
    struct RecordingDriver {
        seen: RefCell<Vec<(ContractTarget, TestCase)>>,
        reject: bool,
    }

    impl Driver for RecordingDriver {
        fn transact(&self, target: &ContractTarget, case: &TestCase) -> Result<()> {
            self.seen.borrow_mut().push((target.clone(), case.clone()));
            if self.reject {
                Err(Error::Verification {
                    test_name: case.name().to_string(),
                    reason: "rejected".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn target() -> ContractTarget {
        ContractTarget::new("Verifier", "verifier.sol", &["lib_a", "lib_b"])
    }

    fn case() -> TestCase {
        TestCase::new("c", b"p".to_vec(), vec![U256::one()], vec![vec![0]])
    }

    #[test]
    fn test_run_simple_passes_case_through() {
        let driver = RecordingDriver::default();
        run_simple(&driver, &target().with_gates_entry_lib("g"), || Ok(case())).unwrap();

        let seen = driver.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.gates_entry_lib, None);
        assert_eq!(seen[0].0.linked_libs, vec!["lib_a", "lib_b"]);
        assert_eq!(seen[0].1, case());
    }

    #[test]
    fn test_run_full_sets_gates_lib() {
        let driver = RecordingDriver::default();
        run(&driver, &target(), "gates_gen", || Ok(case())).unwrap();
        assert_eq!(
            driver.seen.borrow()[0].0.gates_entry_lib.as_deref(),
            Some("gates_gen")
        );
    }

    #[test]
    fn test_builder_error_skips_driver() {
        let driver = RecordingDriver::default();
        let res = run_simple(&driver, &target(), || {
            Err(Error::Driver("builder failed".to_string()))
        });
        assert!(res.is_err());
        assert!(driver.seen.borrow().is_empty());
    }

    #[test]
    fn test_rejection_surfaces() {
        let driver = RecordingDriver {
            reject: true,
            ..Default::default()
        };
        assert!(matches!(
            run_simple(&driver, &target(), || Ok(case())),
            Err(Error::Verification { .. })
        ));
    }

    #[test]
    fn test_request_body() {
        let full = target().with_gates_entry_lib("g");
        let body = CommandDriver::request_body(&full, &case()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["contract_name"], "Verifier");
        assert_eq!(json["contract_path"], "verifier.sol");
        assert_eq!(json["linked_libs"], serde_json::json!(["lib_a", "lib_b"]));
        assert_eq!(json["linked_gates_entry_lib"], "g");
        assert_eq!(json["params"]["_test_name"], "c");
        assert_eq!(json["params"]["proof"], "cA==");
        assert_eq!(json["params"]["init_params"], serde_json::json!(["1"]));
        assert_eq!(
            json["init_params_calldata"],
            format!("0x{}", hex::encode(case().encode_init_calldata()))
        );
    }

    #[test]
    fn test_missing_program() {
        let driver = CommandDriver::new("./definitely-not-a-driver-binary");
        assert!(matches!(
            driver.transact(&target(), &case()),
            Err(Error::Driver(_))
        ));
    }

    #[test]
    fn test_check_version_missing_program() {
        let driver = CommandDriver::new("./definitely-not-a-driver-binary");
        assert!(matches!(driver.check_version("1.0"), Err(Error::Driver(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status() {
        let ok = CommandDriver::new("sh").arg("-c").arg("cat > /dev/null");
        ok.transact(&target(), &case()).unwrap();

        let fail = CommandDriver::new("sh")
            .arg("-c")
            .arg("cat > /dev/null; echo revert >&2; exit 1");
        match fail.transact(&target(), &case()) {
            Err(Error::Verification { test_name, reason }) => {
                assert_eq!(test_name, "c");
                assert!(reason.contains("revert"));
            }
            other => panic!("expected verification failure, got {other:?}"),
        }
    }

    fn large_case() -> TestCase {
        TestCase::new("large", vec![b'7'; 512 * 1024], vec![U256::one()], vec![vec![0]])
    }

    #[cfg(unix)]
    #[test]
    fn test_rejection_without_reading_request() {
        let driver = CommandDriver::new("sh")
            .arg("-c")
            .arg("echo revert >&2; exit 1");
        match driver.transact(&target(), &large_case()) {
            Err(Error::Verification { test_name, reason }) => {
                assert_eq!(test_name, "large");
                assert!(reason.contains("revert"));
            }
            other => panic!("expected verification failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_large_output_before_reading_request() {
        let driver = CommandDriver::new("sh")
            .arg("-c")
            .arg("head -c 300000 /dev/zero; cat > /dev/null");
        driver.transact(&target(), &large_case()).unwrap();
    }
}
