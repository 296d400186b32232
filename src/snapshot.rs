use std::process::{Command, Stdio};
use log::debug;
use crate::error::AcquisitionError;
use crate::schema::{FieldSchema, NETSH_SCHEMA};

/// Something that can dump the current wireless interface state as
/// `Label: value` text.
pub trait SnapshotSource {
    fn acquire(&mut self) -> Result<String, AcquisitionError>;

    /// Labels this source uses for each logical field.
    fn schema(&self) -> &FieldSchema {
        &NETSH_SCHEMA
    }
}

/// Runs an external status utility and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `netsh wlan show interfaces`
    pub fn netsh() -> Self {
        Self::new("netsh", &["wlan", "show", "interfaces"])
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SnapshotSource for CommandSource {
    fn acquire(&mut self) -> Result<String, AcquisitionError> {
        debug!("Running {} {}", self.program, self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| AcquisitionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            // netsh reports failures such as a stopped WLAN service on stdout
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(AcquisitionError::ExitStatus {
                program: self.program.clone(),
                status: output.status,
                output: detail,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
