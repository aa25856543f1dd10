//! Process lifecycle events and their log messages.

use std::fmt;

/// Termination signals the listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedSignal {
    Interrupt,
    Kill,
    Quit,
    Terminate,
}

impl TrackedSignal {
    /// Every tracked signal, in registration order.
    pub const ALL: [TrackedSignal; 4] = [
        TrackedSignal::Interrupt,
        TrackedSignal::Kill,
        TrackedSignal::Quit,
        TrackedSignal::Terminate,
    ];

    /// Conventional signal name.
    pub fn name(self) -> &'static str {
        match self {
            TrackedSignal::Interrupt => "SIGINT",
            TrackedSignal::Kill => "SIGKILL",
            TrackedSignal::Quit => "SIGQUIT",
            TrackedSignal::Terminate => "SIGTERM",
        }
    }

    /// POSIX signal number.
    pub fn number(self) -> i32 {
        match self {
            TrackedSignal::Interrupt => 2,
            TrackedSignal::Kill => 9,
            TrackedSignal::Quit => 3,
            TrackedSignal::Terminate => 15,
        }
    }
}

impl fmt::Display for TrackedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signal reported through the death channel rather than as a tracked signal.
pub const DEATH_SIGNAL_NAME: &str = "SIGHUP";

/// POSIX number of [`DEATH_SIGNAL_NAME`].
pub const DEATH_SIGNAL_NUMBER: i32 = 1;

/// Something that happened to the process and deserves one log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The process is exiting with this code.
    Exit { code: i32 },
    /// A tracked termination signal was delivered.
    Signal(TrackedSignal),
    /// Abnormal termination, identified by a signal name and/or an error.
    Death {
        signal: String,
        error: Option<String>,
    },
}

impl LifecycleEvent {
    /// Death caused by an untracked signal.
    pub fn death_by_signal(signal: impl Into<String>) -> Self {
        LifecycleEvent::Death {
            signal: signal.into(),
            error: None,
        }
    }

    /// Death caused by a panic carrying `message`.
    pub fn death_by_panic(message: impl Into<String>) -> Self {
        LifecycleEvent::Death {
            signal: "panic".to_string(),
            error: Some(message.into()),
        }
    }

    /// The log message for this event.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Exit code the process should use once this event has been recorded,
    /// or `None` if the event does not end the run.
    pub fn termination_code(&self) -> Option<i32> {
        match self {
            LifecycleEvent::Exit { .. } => None,
            LifecycleEvent::Signal(signal) => Some(128 + signal.number()),
            LifecycleEvent::Death { signal, .. } if signal == DEATH_SIGNAL_NAME => {
                Some(128 + DEATH_SIGNAL_NUMBER)
            }
            // Panics unwind on their own; the runtime picks the code.
            LifecycleEvent::Death { .. } => None,
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::Exit { code } => write!(f, "Exit {}", code),
            LifecycleEvent::Signal(signal) => write!(f, "Signal {}", signal),
            LifecycleEvent::Death { signal, error: None } => write!(f, "Death {}", signal),
            LifecycleEvent::Death {
                signal,
                error: Some(error),
            } => write!(f, "Death {} {}", signal, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_message_carries_code() {
        assert_eq!(LifecycleEvent::Exit { code: 0 }.message(), "Exit 0");
        assert_eq!(LifecycleEvent::Exit { code: 130 }.message(), "Exit 130");
    }

    #[test]
    fn signal_messages_use_names() {
        let messages: Vec<String> = TrackedSignal::ALL
            .iter()
            .map(|s| LifecycleEvent::Signal(*s).message())
            .collect();
        assert_eq!(
            messages,
            vec!["Signal SIGINT", "Signal SIGKILL", "Signal SIGQUIT", "Signal SIGTERM"]
        );
    }

    #[test]
    fn death_message_includes_error_when_present() {
        assert_eq!(LifecycleEvent::death_by_signal("SIGHUP").message(), "Death SIGHUP");
        assert_eq!(
            LifecycleEvent::death_by_panic("boom").message(),
            "Death panic boom"
        );
    }

    #[test]
    fn termination_codes_follow_shell_convention() {
        assert_eq!(LifecycleEvent::Signal(TrackedSignal::Interrupt).termination_code(), Some(130));
        assert_eq!(LifecycleEvent::Signal(TrackedSignal::Terminate).termination_code(), Some(143));
        assert_eq!(LifecycleEvent::death_by_signal("SIGHUP").termination_code(), Some(129));
        assert_eq!(LifecycleEvent::death_by_panic("x").termination_code(), None);
        assert_eq!(LifecycleEvent::Exit { code: 0 }.termination_code(), None);
    }
}
