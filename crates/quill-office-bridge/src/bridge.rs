//! Subprocess management and JSON IPC for the automation bridge process.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use quill_office_core::{Host, HostError, HostValue, RawHandle};
use quill_office_protocol::{Command, Request, Response, ResponseData, ResponseResult};

use crate::config::BridgeConfig;
use crate::convert::{from_wire, to_wire};

/// Errors from starting or stopping the bridge process.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Failed to spawn bridge process: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("Bridge executable not found at: {0}")]
    ExeNotFound(String),

    #[error("Bridge failed to attach to the host: {0}")]
    InitFailed(String),
}

/// A [`Host`] backend that drives the automation bridge subprocess.
///
/// One request/response pair per operation, in order, over stdio. The stdio
/// mutexes serialize access at the process boundary; the facade layer above
/// is single-threaded by construction.
pub struct BridgeHost {
    child: Mutex<Child>,
    stdin: Mutex<ChildStdin>,
    stdout: Mutex<BufReader<ChildStdout>>,
    next_id: AtomicU64,
}

impl BridgeHost {
    /// Start the bridge process and attach to the host application.
    pub fn start(config: BridgeConfig) -> Result<Self, BridgeError> {
        let exe_path = config.bridge_exe_path.unwrap_or_else(find_bridge_exe);

        if !exe_path.exists() {
            return Err(BridgeError::ExeNotFound(exe_path.display().to_string()));
        }

        let mut cmd = std::process::Command::new(&exe_path);
        // The bridge bounds its own attach wait; a hung host surfaces as an
        // Init error rather than a hung read on our side.
        cmd.arg(format!(
            "--startup-timeout-secs={}",
            config.startup_timeout.as_secs()
        ));
        for arg in &config.extra_args {
            cmd.arg(arg);
        }
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit()); // Bridge diagnostics go to our stderr

        tracing::info!("Starting automation bridge: {}", exe_path.display());
        let mut child = cmd.spawn()?;

        let stdin = child.stdin.take().expect("stdin was piped");
        let stdout = child.stdout.take().expect("stdout was piped");

        let bridge = Self {
            child: Mutex::new(child),
            stdin: Mutex::new(stdin),
            stdout: Mutex::new(BufReader::new(stdout)),
            next_id: AtomicU64::new(1),
        };

        // Attach to the host.
        bridge
            .send_command(Command::Init)
            .map_err(|e| BridgeError::InitFailed(e.to_string()))?;

        Ok(bridge)
    }

    /// Send a command to the bridge and wait for the response.
    fn send_command(&self, command: Command) -> Result<Option<ResponseData>, HostError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let request = Request { id, command };
        let json = serde_json::to_string(&request)
            .map_err(|e| HostError::Transport(e.to_string()))?;

        {
            let mut stdin = self.stdin.lock().unwrap();
            writeln!(stdin, "{json}").map_err(|e| HostError::Transport(e.to_string()))?;
            stdin
                .flush()
                .map_err(|e| HostError::Transport(e.to_string()))?;
        }

        let response: Response = {
            let mut stdout = self.stdout.lock().unwrap();
            let mut line = String::new();
            stdout
                .read_line(&mut line)
                .map_err(|e| HostError::Transport(e.to_string()))?;

            if line.is_empty() {
                return Err(HostError::Transport("bridge process exited".to_string()));
            }

            serde_json::from_str(&line).map_err(|e| HostError::Transport(e.to_string()))?
        };

        match response.result {
            ResponseResult::Ok { data } => Ok(data),
            ResponseResult::Error { message } => Err(HostError::Rejected(message)),
        }
    }

    fn expect_value(data: Option<ResponseData>) -> Result<HostValue, HostError> {
        match data {
            Some(ResponseData::Value { value }) => Ok(from_wire(value)),
            other => Err(HostError::Shape {
                expected: "a value",
                got: format!("{other:?}"),
            }),
        }
    }

    /// Shut down the bridge: release everything host-side and terminate the
    /// process.
    pub fn shutdown(self) -> Result<(), BridgeError> {
        let _ = self.send_command(Command::Shutdown);

        let mut child = self.child.lock().unwrap();
        let _ = child.wait();

        Ok(())
    }
}

impl Host for BridgeHost {
    fn root(&self) -> Result<HostValue, HostError> {
        Self::expect_value(self.send_command(Command::Root)?)
    }

    fn type_name(&self, raw: RawHandle) -> Result<String, HostError> {
        match self.send_command(Command::TypeName { handle: raw })? {
            Some(ResponseData::TypeName { name }) => Ok(name),
            other => Err(HostError::Shape {
                expected: "a type name",
                got: format!("{other:?}"),
            }),
        }
    }

    fn get_property(&self, raw: RawHandle, name: &str) -> Result<HostValue, HostError> {
        Self::expect_value(self.send_command(Command::GetProperty {
            handle: raw,
            name: name.to_string(),
        })?)
    }

    fn set_property(&self, raw: RawHandle, name: &str, value: HostValue) -> Result<(), HostError> {
        self.send_command(Command::SetProperty {
            handle: raw,
            name: name.to_string(),
            value: to_wire(&value),
        })?;
        Ok(())
    }

    fn invoke(
        &self,
        raw: RawHandle,
        method: &str,
        args: &[HostValue],
    ) -> Result<HostValue, HostError> {
        let data = self.send_command(Command::Invoke {
            handle: raw,
            method: method.to_string(),
            args: args.iter().map(to_wire).collect(),
        })?;
        match data {
            Some(ResponseData::Value { value }) => Ok(from_wire(value)),
            None => Ok(HostValue::Void),
            other => Err(HostError::Shape {
                expected: "a value or nothing",
                got: format!("{other:?}"),
            }),
        }
    }

    fn release(&self, raw: RawHandle) -> Result<u32, HostError> {
        match self.send_command(Command::Release { handle: raw })? {
            Some(ResponseData::Remaining { remaining }) => Ok(remaining),
            other => Err(HostError::Shape {
                expected: "a remaining count",
                got: format!("{other:?}"),
            }),
        }
    }
}

/// Attempt to locate the bridge exe relative to the current executable or in
/// common paths.
fn find_bridge_exe() -> PathBuf {
    // Check next to the current executable
    if let Ok(mut exe) = std::env::current_exe() {
        exe.pop();
        let candidate = exe.join(exe_name());
        if candidate.exists() {
            return candidate;
        }
    }

    // Default: assume it's in the current directory
    PathBuf::from(exe_name())
}

fn exe_name() -> &'static str {
    if cfg!(windows) {
        "quill-office-bridge-host.exe"
    } else {
        "quill-office-bridge-host"
    }
}
