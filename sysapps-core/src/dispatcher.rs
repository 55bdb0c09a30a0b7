//! Action dispatcher
//!
//! Turns a selected [`MenuAction`] into a side effect: a service script run
//! or a probe query. Failures are logged and reported as an outcome; they
//! never propagate into the UI loop.

use std::sync::Arc;

use crate::error::CoreError;
use crate::service_menu::MenuLabels;
use crate::traits::{ScriptRunner, SystemProbe};
use crate::types::{MenuAction, SystemSnapshot};

/// Service scripts shipped with the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceScript {
    EnableSsh,
    DisableSsh,
    EnableScp,
    DisableScp,
}

impl ServiceScript {
    pub fn file_name(self) -> &'static str {
        match self {
            ServiceScript::EnableSsh => "EnableSSH.sh",
            ServiceScript::DisableSsh => "DisableSSH.sh",
            ServiceScript::EnableScp => "EnableSCP.sh",
            ServiceScript::DisableScp => "DisableSCP.sh",
        }
    }

    /// Script that toggles `action` given the current state.
    pub fn for_action(action: MenuAction, snapshot: &SystemSnapshot) -> Option<Self> {
        match action {
            MenuAction::ToggleSsh => Some(Self::ssh_toggle(snapshot)),
            MenuAction::ToggleScp => Some(Self::scp_toggle(snapshot)),
            _ => None,
        }
    }

    fn ssh_toggle(snapshot: &SystemSnapshot) -> Self {
        if snapshot.ssh_active {
            ServiceScript::DisableSsh
        } else {
            ServiceScript::EnableSsh
        }
    }

    /// Enabling SCP also brings SSH up, so with SSH down the toggle always enables.
    fn scp_toggle(snapshot: &SystemSnapshot) -> Self {
        if snapshot.ssh_active && snapshot.scp_enabled {
            ServiceScript::DisableScp
        } else {
            ServiceScript::EnableScp
        }
    }
}

/// Result of dispatching one action
#[derive(Debug)]
pub enum ActionOutcome {
    Completed { message: String },
    Failed { error: CoreError },
    /// Navigation request; the caller switches screens.
    OpenManuals,
}

pub struct ActionDispatcher {
    probe: Arc<dyn SystemProbe>,
    runner: Arc<dyn ScriptRunner>,
    labels: MenuLabels,
}

impl ActionDispatcher {
    pub fn new(
        probe: Arc<dyn SystemProbe>,
        runner: Arc<dyn ScriptRunner>,
        labels: MenuLabels,
    ) -> Self {
        Self {
            probe,
            runner,
            labels,
        }
    }

    /// Blocks for the duration of a script run.
    pub fn dispatch(&self, action: MenuAction, snapshot: &SystemSnapshot) -> ActionOutcome {
        log::debug!("Dispatching {action:?}");

        let l = &self.labels;
        let message = match action {
            MenuAction::ToggleSsh => return self.run_script(ServiceScript::ssh_toggle(snapshot)),
            MenuAction::ToggleScp => return self.run_script(ServiceScript::scp_toggle(snapshot)),
            MenuAction::OpenManuals => return ActionOutcome::OpenManuals,
            MenuAction::ShowRamStatus => match self.probe.memory() {
                Some(mem) => format!("{}: {} / {} MB", l.ram, mem.used_mib(), mem.total_mib()),
                None => format!("{}: {}", l.ram, l.unavailable),
            },
            MenuAction::ShowBatteryStatus => l.battery_line(self.probe.battery_percent()),
            MenuAction::ShowNetworkStatus => l.ip_line(self.probe.ip_address().as_deref()),
        };

        ActionOutcome::Completed { message }
    }

    fn run_script(&self, script: ServiceScript) -> ActionOutcome {
        let name = script.file_name();
        match self.runner.run(name) {
            Ok(()) => {
                log::info!("{name} completed");
                ActionOutcome::Completed {
                    message: self.labels.completed.to_string(),
                }
            }
            Err(error) => {
                if error.is_expected() {
                    log::warn!("{name}: {error}");
                } else {
                    log::error!("{name}: {error}");
                }
                ActionOutcome::Failed { error }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{MockScriptRunner, MockSystemProbe};
    use crate::types::MemoryInfo;

    fn snapshot(ssh: bool, scp: bool) -> SystemSnapshot {
        SystemSnapshot {
            ssh_active: ssh,
            scp_enabled: scp,
            ..SystemSnapshot::default()
        }
    }

    fn dispatcher(probe: MockSystemProbe, runner: &Arc<MockScriptRunner>) -> ActionDispatcher {
        ActionDispatcher::new(Arc::new(probe), runner.clone(), MenuLabels::ENGLISH)
    }

    #[test]
    fn test_script_selection() {
        use ServiceScript::{DisableScp, DisableSsh, EnableScp, EnableSsh};

        let cases = [
            (MenuAction::ToggleSsh, snapshot(true, false), Some(DisableSsh)),
            (MenuAction::ToggleSsh, snapshot(false, false), Some(EnableSsh)),
            (MenuAction::ToggleScp, snapshot(true, true), Some(DisableScp)),
            (MenuAction::ToggleScp, snapshot(true, false), Some(EnableScp)),
            (MenuAction::ToggleScp, snapshot(false, true), Some(EnableScp)),
            (MenuAction::ShowRamStatus, snapshot(true, true), None),
        ];
        for (action, state, expected) in cases {
            assert_eq!(ServiceScript::for_action(action, &state), expected, "{action:?} {state:?}");
        }
    }

    #[test]
    fn test_toggle_runs_script() {
        let runner = Arc::new(MockScriptRunner::new());
        let d = dispatcher(MockSystemProbe::new(), &runner);

        let outcome = d.dispatch(MenuAction::ToggleSsh, &snapshot(false, false));
        assert!(matches!(outcome, ActionOutcome::Completed { ref message } if message == "Done"));
        assert_eq!(runner.calls(), vec!["EnableSSH.sh"]);
    }

    #[test]
    fn test_missing_script_fails_softly() {
        let runner = Arc::new(MockScriptRunner::new().with_missing("DisableSSH.sh"));
        let d = dispatcher(MockSystemProbe::new(), &runner);

        match d.dispatch(MenuAction::ToggleSsh, &snapshot(true, false)) {
            ActionOutcome::Failed { error } => assert!(matches!(error, CoreError::ScriptMissing(_))),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_failing_script() {
        let runner = Arc::new(MockScriptRunner::new().with_exit_code("EnableSCP.sh", 1));
        let d = dispatcher(MockSystemProbe::new(), &runner);

        match d.dispatch(MenuAction::ToggleScp, &snapshot(false, false)) {
            ActionOutcome::Failed { error } => {
                assert!(matches!(error, CoreError::ScriptFailed { code: Some(1), .. }));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_status_queries() {
        let runner = Arc::new(MockScriptRunner::new());
        let probe = MockSystemProbe::new()
            .with_battery(Some(42))
            .with_ip(Some("10.0.0.7"))
            .with_memory(Some(MemoryInfo {
                total_kib: 1024 * 1024,
                available_kib: 768 * 1024,
            }));
        let d = dispatcher(probe, &runner);
        let state = SystemSnapshot::default();

        let message = |action| match d.dispatch(action, &state) {
            ActionOutcome::Completed { message } => message,
            other => panic!("unexpected outcome: {other:?}"),
        };
        assert_eq!(message(MenuAction::ShowRamStatus), "RAM: 256 / 1024 MB");
        assert_eq!(message(MenuAction::ShowBatteryStatus), "Battery: 42%");
        assert_eq!(message(MenuAction::ShowNetworkStatus), "IP: 10.0.0.7");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_unavailable_values() {
        let runner = Arc::new(MockScriptRunner::new());
        let d = dispatcher(MockSystemProbe::new(), &runner);
        let state = SystemSnapshot::default();

        match d.dispatch(MenuAction::ShowRamStatus, &state) {
            ActionOutcome::Completed { message } => assert_eq!(message, "RAM: N/A"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(matches!(
            d.dispatch(MenuAction::OpenManuals, &state),
            ActionOutcome::OpenManuals
        ));
    }
}
