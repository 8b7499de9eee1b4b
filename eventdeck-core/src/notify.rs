//! Outbound RSVP notifications.
//!
//! The dashboard announces RSVP changes to a bus owned by the hosting
//! application. The store only knows the `RsvpNotifier` trait; delivery is
//! fire-and-forget and nothing is ever read back from the bus.
//!
//! `HookNotifier` bridges to a host bus living in another process: it runs
//! an executable and writes the message to its stdin as one JSON line.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EventDeckError, EventDeckResult};
use crate::rsvp::RsvpStatus;

/// Topic for RSVP changes on the shared bus.
pub const EVENT_RSVP_TOPIC: &str = "event:rsvp";

/// Name this module registers under on the shared bus.
pub const MODULE_NAME: &str = "events";

/// Payload of an RSVP change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpChanged {
    pub event_id: String,
    pub event_title: String,
    pub status: RsvpStatus,
    pub reminder: bool,
    /// ISO-8601
    pub start_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    pub topic: String,
    pub source: String,
    pub payload: RsvpChanged,
}

impl BusMessage {
    pub fn rsvp_changed(payload: RsvpChanged) -> Self {
        BusMessage {
            topic: EVENT_RSVP_TOPIC.to_string(),
            source: MODULE_NAME.to_string(),
            payload,
        }
    }
}

/// A publisher the store can hand RSVP changes to.
pub trait RsvpNotifier {
    /// Messages are only published when the bus reports ready.
    fn is_ready(&self) -> bool;

    fn publish(&self, message: &BusMessage) -> EventDeckResult<()>;
}

/// Publishes by running an external executable once per message.
#[derive(Clone)]
pub struct HookNotifier {
    command: String,
}

impl HookNotifier {
    pub fn new(command: &str) -> Self {
        HookNotifier {
            command: command.to_string(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn binary_path(&self) -> EventDeckResult<PathBuf> {
        which::which(&self.command).map_err(|_| EventDeckError::HookNotInstalled(self.command.clone()))
    }
}

impl RsvpNotifier for HookNotifier {
    fn is_ready(&self) -> bool {
        self.binary_path().is_ok()
    }

    fn publish(&self, message: &BusMessage) -> EventDeckResult<()> {
        let message_json = serde_json::to_string(message)?;
        let binary_path = self.binary_path()?;

        let mut child = Command::new(&binary_path)
            .arg(&message.topic)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                EventDeckError::Notify(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // The hook may exit without reading its stdin; only the exit status counts.
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(format!("{message_json}\n").as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        if !status.success() {
            return Err(EventDeckError::Notify(format!(
                "Hook exited with status: {}",
                status.code().unwrap_or(-1)
            )));
        }

        match write_result {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!(hook = %binary_path.display(), "Hook exited without reading the message");
            }
            Err(e) => return Err(e.into()),
            Ok(()) => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_wire_format() {
        let message = BusMessage::rsvp_changed(RsvpChanged {
            event_id: "evt-1".into(),
            event_title: "Python".into(),
            status: RsvpStatus::NotGoing,
            reminder: false,
            start_date: "2025-03-22T12:00:00+00:00".into(),
        });

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["topic"], "event:rsvp");
        assert_eq!(value["source"], "events");
        assert_eq!(value["payload"]["eventId"], "evt-1");
        assert_eq!(value["payload"]["eventTitle"], "Python");
        assert_eq!(value["payload"]["status"], "not_going");
        assert_eq!(value["payload"]["startDate"], "2025-03-22T12:00:00+00:00");
    }

    fn message() -> BusMessage {
        BusMessage::rsvp_changed(RsvpChanged {
            event_id: "evt-1".into(),
            event_title: "Python".into(),
            status: RsvpStatus::Going,
            reminder: true,
            start_date: "2025-03-22T12:00:00+00:00".into(),
        })
    }

    /// Write an executable shell script and return its absolute path.
    #[cfg(unix)]
    fn write_hook(dir: &std::path::Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    #[test]
    fn hook_receives_topic_and_json_line() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let hook = HookNotifier::new(&write_hook(
            dir.path(),
            "bus-bridge",
            &format!("echo \"$1\" > '{0}.topic'\ncat > '{0}.stdin'", out.display()),
        ));

        assert!(hook.is_ready());
        hook.publish(&message()).unwrap();

        let topic = std::fs::read_to_string(out.with_extension("topic")).unwrap();
        assert_eq!(topic.trim_end(), EVENT_RSVP_TOPIC);

        let stdin = std::fs::read_to_string(out.with_extension("stdin")).unwrap();
        assert!(stdin.ends_with('\n'));
        assert_eq!(stdin.lines().count(), 1);
        let received: BusMessage = serde_json::from_str(stdin.trim_end()).unwrap();
        assert_eq!(received, message());
    }

    #[cfg(unix)]
    #[test]
    fn failing_hook_is_a_notify_error() {
        let dir = tempfile::tempdir().unwrap();
        let hook = HookNotifier::new(&write_hook(dir.path(), "bus-down", "cat > /dev/null\nexit 1"));

        let err = hook.publish(&message()).unwrap_err();
        assert!(matches!(err, EventDeckError::Notify(ref m) if m.contains("status: 1")));
    }

    #[cfg(unix)]
    #[test]
    fn hook_that_ignores_stdin_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let hook = HookNotifier::new(&write_hook(dir.path(), "bus-ignore", "exit 0"));

        let mut big = message();
        big.payload.event_title = "x".repeat(200 * 1024);

        hook.publish(&big).unwrap();
    }

    #[test]
    fn missing_hook_is_not_ready() {
        let hook = HookNotifier::new("eventdeck-hook-that-does-not-exist");
        assert!(!hook.is_ready());
    }
}
