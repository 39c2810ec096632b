//! Transport backed by the `curl` command line program.
//!
//! Invokes `curl --silent --show-error --write-out "\n%{http_code}"` and
//! splits the status code trailer off the response body. Headers and the
//! request body are passed in a config read from stdin (`--config -`), so
//! credentials never appear in the process arguments.

use super::{Request, Response, Transport, TransportError};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::trace;

/// curl exit code for "operation timed out".
const CURL_TIMEOUT_EXIT: i32 = 28;

/// Status code trailer appended after the body.
const WRITE_OUT: &str = "\n%{http_code}";

/// Sends requests by running `curl`.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    program: String,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            program: "curl".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum time a request may take.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different curl executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn command(&self, request: &Request) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["--silent", "--show-error", "--request", request.method.as_str()]);
        cmd.arg("--max-time")
            .arg(self.timeout.as_secs().max(1).to_string());

        cmd.args(["--config", "-"]);
        cmd.args(["--write-out", WRITE_OUT]);
        cmd.arg(&request.url);
        cmd
    }

    /// The curl config carrying the request headers and body.
    fn config(request: &Request) -> Vec<u8> {
        let mut config = Vec::new();
        for (name, value) in &request.headers {
            config_entry(&mut config, "header", format!("{}: {}", name, value).as_bytes());
        }
        if let Some(body) = &request.body {
            // data-raw never treats a leading '@' as a file name
            config_entry(&mut config, "data-raw", body);
        }
        config
    }
}

/// Append `key = "value"` to a curl config, escaping the value.
fn config_entry(config: &mut Vec<u8>, key: &str, value: &[u8]) {
    config.extend_from_slice(key.as_bytes());
    config.extend_from_slice(b" = \"");
    for &byte in value {
        match byte {
            b'\\' => config.extend_from_slice(b"\\\\"),
            b'"' => config.extend_from_slice(b"\\\""),
            b'\n' => config.extend_from_slice(b"\\n"),
            b'\r' => config.extend_from_slice(b"\\r"),
            b'\t' => config.extend_from_slice(b"\\t"),
            _ => config.push(byte),
        }
    }
    config.extend_from_slice(b"\"\n");
}

impl Transport for CurlTransport {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        let mut cmd = self.command(request);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        trace!(program = %self.program, url = %request.url, "Spawning curl");

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                TransportError::NotAvailable(format!("{} not found in PATH", self.program))
            }
            _ => TransportError::Io(e),
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&Self::config(request))?;
            // stdin is dropped here, closing the pipe
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            if code == CURL_TIMEOUT_EXIT {
                return Err(TransportError::Timeout(self.timeout));
            }
            return Err(TransportError::Failed {
                code,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        parse_output(&output.stdout)
    }
}

/// Split curl's stdout into the response body and the status trailer.
fn parse_output(stdout: &[u8]) -> Result<Response, TransportError> {
    let split = stdout
        .iter()
        .rposition(|&b| b == b'\n')
        .ok_or_else(|| TransportError::InvalidResponse("missing status trailer".to_string()))?;

    let trailer = String::from_utf8_lossy(&stdout[split + 1..]);
    let status = trailer
        .trim()
        .parse::<u16>()
        .map_err(|_| TransportError::InvalidResponse(format!("bad status code: {trailer:?}")))?;

    Ok(Response::new(status, &stdout[..split]))
}
