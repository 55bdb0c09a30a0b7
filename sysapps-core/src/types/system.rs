//! Service menu types

use crate::traits::SystemProbe;

/// Every action the service menu can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ToggleSsh,
    ToggleScp,
    ShowRamStatus,
    ShowBatteryStatus,
    ShowNetworkStatus,
    OpenManuals,
}

impl MenuAction {
    /// Menu order
    pub fn all() -> &'static [MenuAction] {
        &[
            MenuAction::ToggleSsh,
            MenuAction::ToggleScp,
            MenuAction::ShowRamStatus,
            MenuAction::ShowBatteryStatus,
            MenuAction::ShowNetworkStatus,
            MenuAction::OpenManuals,
        ]
    }

    /// Whether the action changes system state (and needs a processing frame).
    pub fn is_toggle(self) -> bool {
        matches!(self, MenuAction::ToggleSsh | MenuAction::ToggleScp)
    }
}

/// Memory figures in kibibytes, as reported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total_kib: u64,
    pub available_kib: u64,
}

impl MemoryInfo {
    pub fn used_kib(&self) -> u64 {
        self.total_kib.saturating_sub(self.available_kib)
    }

    pub fn used_mib(&self) -> u64 {
        self.used_kib() / 1024
    }

    pub fn total_mib(&self) -> u64 {
        self.total_kib / 1024
    }
}

/// Live system state sampled once per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub ssh_active: bool,
    /// SCP counts as enabled only while SSH itself is running.
    pub scp_enabled: bool,
    pub battery_percent: Option<u8>,
    pub ip_address: Option<String>,
}

impl SystemSnapshot {
    pub fn capture(probe: &dyn SystemProbe) -> Self {
        let ssh_active = probe.ssh_active();
        Self {
            ssh_active,
            scp_enabled: ssh_active && probe.scp_enabled(),
            battery_percent: probe.battery_percent(),
            ip_address: probe.ip_address(),
        }
    }
}
