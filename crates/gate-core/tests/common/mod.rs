// Rust guideline compliant 2026-10-19

//! Shared test doubles for gate integration tests.

#![allow(dead_code)]

use gate_core::{CommandRunner, CommandSpec, ExitStatus, GateConfig, Result};
use std::collections::HashMap;

/// Config whose commands are named after their role.
pub fn scripted_config() -> GateConfig {
    GateConfig {
        check: CommandSpec::new("check", ["--quiet"]),
        fix: CommandSpec::new("fix", Vec::<String>::new()),
        test: CommandSpec::new("test", Vec::<String>::new()),
        ..GateConfig::default()
    }
}

/// Runner returning a fixed status per program and recording every call.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    statuses: HashMap<String, i32>,
    pub calls: Vec<String>,
}

impl ScriptedRunner {
    pub fn new(check: i32, fix: i32, test: i32) -> Self {
        let statuses = [("check", check), ("fix", fix), ("test", test)]
            .into_iter()
            .map(|(name, code)| (name.to_string(), code))
            .collect();
        Self {
            statuses,
            calls: Vec::new(),
        }
    }

    pub fn count(&self, program: &str) -> usize {
        self.calls.iter().filter(|call| call.as_str() == program).count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus> {
        self.calls.push(command.program.clone());
        let code = self.statuses.get(&command.program).copied().unwrap_or(0);
        Ok(ExitStatus::from_code(code))
    }
}

/// Runner simulating a working tree that the formatter repairs.
#[derive(Debug)]
pub struct TreeRunner {
    pub formatted: bool,
    pub test_status: i32,
    pub calls: Vec<String>,
}

impl TreeRunner {
    pub fn new(formatted: bool, test_status: i32) -> Self {
        Self {
            formatted,
            test_status,
            calls: Vec::new(),
        }
    }
}

impl CommandRunner for TreeRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus> {
        self.calls.push(command.program.clone());
        let code = match command.program.as_str() {
            "check" if self.formatted => 0,
            "check" => 1,
            "fix" => {
                self.formatted = true;
                0
            }
            _ => self.test_status,
        };
        Ok(ExitStatus::from_code(code))
    }
}
