#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use zbrowse::inventory::{CommandError, CommandRunner, HostIdentity};

/// Replays canned command output keyed by the full command line.
/// Unknown command lines fail like a non-zero exit.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pools(mut self, out: &str) -> Self {
        self.outputs
            .insert("zpool list -Hp -o name,health".to_string(), out.to_string());
        self
    }

    pub fn datasets(mut self, pool: &str, out: &str) -> Self {
        self.outputs.insert(
            format!("zfs list -r -Hp -o name,used,avail,mountpoint {}", pool),
            out.to_string(),
        );
        self
    }

    pub fn snapshots(mut self, dataset: &str, out: &str) -> Self {
        self.outputs.insert(
            format!(
                "zfs list -t snapshot -r -Hp -o name,used,creation {}",
                dataset
            ),
            out.to_string(),
        );
        self
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let line = format!("{} {}", program, args.join(" "));
        self.calls.borrow_mut().push(line.clone());
        self.outputs
            .get(&line)
            .cloned()
            .ok_or_else(|| CommandError::Failed {
                program: program.to_string(),
                args: args.join(" "),
                status: "exit status: 1".to_string(),
                stderr: "cannot open: dataset does not exist".to_string(),
            })
    }
}

pub fn identity() -> HostIdentity {
    HostIdentity {
        name: "Local ZBox".to_string(),
        hostname: "testhost".to_string(),
        user: "tester".to_string(),
    }
}

/// `tank` with one dataset `tank/data` holding `s1` (epoch 0) and `s2` (epoch 86400).
pub fn tank_runner() -> ScriptedRunner {
    ScriptedRunner::new()
        .pools("tank\tONLINE\n")
        .datasets("tank", "tank/data\t1024\t2048\t/tank/data\n")
        .snapshots("tank/data", "s1\t0\t0\ns2\t512\t86400\n")
}
