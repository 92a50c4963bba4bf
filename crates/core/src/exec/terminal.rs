//! Terminal backends and shell command composition

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::impl_case_insensitive_deserialize;

/// The two terminal backends a script can be launched in.
///
/// Each backend owns its invocation flags, statement separator, and delete
/// verb, so the composed run/pause/cleanup command is valid for that shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminal {
    #[default]
    Cmd,
    Powershell,
}

impl_case_insensitive_deserialize!(
    Terminal,
    Cmd => "cmd",
    Powershell => "powershell"
);

impl Terminal {
    /// Executable to spawn
    pub fn program(&self) -> &'static str {
        match self {
            Terminal::Cmd => "cmd",
            Terminal::Powershell => "powershell",
        }
    }

    /// Arguments that hand `command` to the backend for execution
    pub fn invocation_args(&self, command: &str) -> Vec<String> {
        match self {
            Terminal::Cmd => vec!["/C".to_string(), command.to_string()],
            Terminal::Powershell => vec![
                "-NoProfile".to_string(),
                "-Command".to_string(),
                command.to_string(),
            ],
        }
    }

    /// Composes run, pause-for-acknowledgment, and cleanup into one command.
    ///
    /// The ordering is essential: the script runs, the terminal waits for the
    /// user to acknowledge its output, and only then is the temp file removed.
    pub fn compose(&self, run: &str, cleanup: &str) -> String {
        match self {
            Terminal::Cmd => format!("{run} & pause & {cleanup}"),
            Terminal::Powershell => format!("{run}; pause; {cleanup}"),
        }
    }

    /// Command that deletes the temp script file
    pub fn delete_command(&self, path: &str) -> String {
        match self {
            Terminal::Cmd => format!("del \"{path}\""),
            Terminal::Powershell => format!("Remove-Item \"{path}\""),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for Terminal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cmd" => Ok(Terminal::Cmd),
            "powershell" => Ok(Terminal::Powershell),
            other => Err(Error::InvalidArgument(format!(
                "unknown terminal '{other}', expected 'cmd' or 'powershell'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_composition_orders_run_pause_cleanup() {
        let composed = Terminal::Cmd.compose(
            "python \"C:\\tmp\\snippet.py\"",
            &Terminal::Cmd.delete_command("C:\\tmp\\snippet.py"),
        );
        assert_eq!(
            composed,
            "python \"C:\\tmp\\snippet.py\" & pause & del \"C:\\tmp\\snippet.py\""
        );
    }

    #[test]
    fn test_powershell_composition_uses_semicolons() {
        let composed = Terminal::Powershell.compose("bash \"/tmp/s.sh\"", "Remove-Item \"/tmp/s.sh\"");
        assert_eq!(composed, "bash \"/tmp/s.sh\"; pause; Remove-Item \"/tmp/s.sh\"");
    }

    #[test]
    fn test_invocation_args() {
        assert_eq!(Terminal::Cmd.invocation_args("echo hi"), vec!["/C", "echo hi"]);
        assert_eq!(
            Terminal::Powershell.invocation_args("echo hi"),
            vec!["-NoProfile", "-Command", "echo hi"]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Terminal::from_str("CMD").unwrap(), Terminal::Cmd);
        assert_eq!(
            Terminal::from_str(" PowerShell ").unwrap(),
            Terminal::Powershell
        );
        assert!(Terminal::from_str("konsole").is_err());
    }
}
