//! Service menu
//!
//! Flat list of actions whose labels follow live system state ("Enable SSH"
//! turns into "Disable SSH" once the service runs). Rows are rebuilt from a
//! fresh [`SystemSnapshot`] every frame.

use crate::paged_list::PagedList;
use crate::presentation::{Body, LegendButton, LegendItem, Screen};
use crate::types::{MenuAction, Row, RowList, SystemSnapshot};

/// Display strings for the service menu and its status messages.
///
/// Supplied by the front end so the core stays language neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLabels {
    pub title: &'static str,
    pub enable_ssh: &'static str,
    pub disable_ssh: &'static str,
    pub enable_scp: &'static str,
    pub disable_scp: &'static str,
    pub show_ram: &'static str,
    pub show_battery: &'static str,
    pub show_network: &'static str,
    pub open_manuals: &'static str,
    pub ssh: &'static str,
    pub scp: &'static str,
    pub battery: &'static str,
    pub ip: &'static str,
    pub ram: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub unavailable: &'static str,
    pub processing: &'static str,
    pub completed: &'static str,
    pub select: &'static str,
    pub exit: &'static str,
    pub no_actions: &'static str,
}

impl MenuLabels {
    pub const ENGLISH: MenuLabels = MenuLabels {
        title: "System Apps",
        enable_ssh: "Enable SSH",
        disable_ssh: "Disable SSH",
        enable_scp: "Enable SCP",
        disable_scp: "Disable SCP",
        show_ram: "RAM Status",
        show_battery: "Battery Status",
        show_network: "Network Status",
        open_manuals: "Manuals",
        ssh: "SSH",
        scp: "SCP",
        battery: "Battery",
        ip: "IP",
        ram: "RAM",
        active: "Active",
        inactive: "Inactive",
        unavailable: "N/A",
        processing: "Processing...",
        completed: "Done",
        select: "Select",
        exit: "Exit",
        no_actions: "No actions available",
    };

    pub fn action(&self, action: MenuAction, snapshot: &SystemSnapshot) -> &'static str {
        match action {
            MenuAction::ToggleSsh if snapshot.ssh_active => self.disable_ssh,
            MenuAction::ToggleSsh => self.enable_ssh,
            MenuAction::ToggleScp if snapshot.scp_enabled => self.disable_scp,
            MenuAction::ToggleScp => self.enable_scp,
            MenuAction::ShowRamStatus => self.show_ram,
            MenuAction::ShowBatteryStatus => self.show_battery,
            MenuAction::ShowNetworkStatus => self.show_network,
            MenuAction::OpenManuals => self.open_manuals,
        }
    }

    pub fn state(&self, active: bool) -> &'static str {
        if active {
            self.active
        } else {
            self.inactive
        }
    }

    pub fn battery_line(&self, percent: Option<u8>) -> String {
        match percent {
            Some(p) => format!("{}: {p}%", self.battery),
            None => format!("{}: {}", self.battery, self.unavailable),
        }
    }

    pub fn ip_line(&self, ip: Option<&str>) -> String {
        format!("{}: {}", self.ip, ip.unwrap_or(self.unavailable))
    }
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self::ENGLISH
    }
}

/// Build the action rows for the given state.
pub fn build_rows(snapshot: &SystemSnapshot, labels: &MenuLabels) -> RowList<MenuAction> {
    MenuAction::all()
        .iter()
        .map(|&action| Row::new(labels.action(action, snapshot), action))
        .collect()
}

/// Main menu state
#[derive(Debug, Clone)]
pub struct ServiceMenu {
    list: PagedList<MenuAction>,
    snapshot: SystemSnapshot,
    labels: MenuLabels,
}

impl ServiceMenu {
    pub fn new(page_size: usize, labels: MenuLabels) -> Self {
        let snapshot = SystemSnapshot::default();
        Self {
            list: PagedList::with_rows(build_rows(&snapshot, &labels), page_size),
            snapshot,
            labels,
        }
    }

    /// Rebuild rows and status lines from freshly sampled state.
    pub fn refresh(&mut self, snapshot: SystemSnapshot) {
        self.list.replace_rows(build_rows(&snapshot, &self.labels));
        self.snapshot = snapshot;
    }

    pub fn move_by(&mut self, delta: i32) {
        self.list.move_by(delta);
    }

    pub fn activate(&self) -> Option<MenuAction> {
        self.list.activate()
    }

    pub fn snapshot(&self) -> &SystemSnapshot {
        &self.snapshot
    }

    pub fn list(&self) -> &PagedList<MenuAction> {
        &self.list
    }

    pub fn labels(&self) -> &MenuLabels {
        &self.labels
    }

    pub fn status_lines(&self) -> Vec<String> {
        let l = &self.labels;
        vec![
            format!("{}: {}", l.ssh, l.state(self.snapshot.ssh_active)),
            format!("{}: {}", l.scp, l.state(self.snapshot.scp_enabled)),
            l.battery_line(self.snapshot.battery_percent),
            l.ip_line(self.snapshot.ip_address.as_deref()),
        ]
    }

    pub fn screen(&self) -> Screen {
        let body = if self.list.is_empty() {
            Body::Empty(self.labels.no_actions.to_string())
        } else {
            Body::List(self.list.view())
        };

        Screen {
            title: self.labels.title.to_string(),
            subtitle: None,
            status_lines: self.status_lines(),
            body,
            legend: vec![
                LegendItem::new(LegendButton::Exit, self.labels.exit),
                LegendItem::new(LegendButton::Confirm, self.labels.select),
            ],
            overlay: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn active_snapshot() -> SystemSnapshot {
        SystemSnapshot {
            ssh_active: true,
            scp_enabled: true,
            battery_percent: Some(87),
            ip_address: Some("192.168.1.20".to_string()),
        }
    }

    #[test]
    fn test_labels_follow_state() {
        let mut menu = ServiceMenu::new(7, MenuLabels::ENGLISH);
        assert_eq!(menu.list().selected().unwrap().label(), "Enable SSH");

        menu.refresh(active_snapshot());
        assert_eq!(menu.list().selected().unwrap().label(), "Disable SSH");
        assert_eq!(menu.list().rows().get(1).unwrap().label(), "Disable SCP");
    }

    #[test]
    fn test_refresh_keeps_cursor() {
        let mut menu = ServiceMenu::new(3, MenuLabels::ENGLISH);
        for _ in 0..4 {
            menu.move_by(1);
        }
        let before = menu.list().viewport();

        menu.refresh(active_snapshot());
        menu.refresh(SystemSnapshot::default());

        assert_eq!(menu.list().viewport(), before);
        assert_eq!(menu.activate(), Some(MenuAction::ShowNetworkStatus));
    }

    #[test]
    fn test_status_lines() {
        let mut menu = ServiceMenu::new(7, MenuLabels::ENGLISH);
        assert_eq!(
            menu.status_lines(),
            vec!["SSH: Inactive", "SCP: Inactive", "Battery: N/A", "IP: N/A"]
        );

        menu.refresh(active_snapshot());
        assert_eq!(
            menu.status_lines(),
            vec!["SSH: Active", "SCP: Active", "Battery: 87%", "IP: 192.168.1.20"]
        );
    }

    #[test]
    fn test_screen_legend() {
        let menu = ServiceMenu::new(7, MenuLabels::ENGLISH);
        let screen = menu.screen();

        assert_eq!(screen.title, "System Apps");
        assert_eq!(screen.legend.len(), 2);
        assert_eq!(screen.legend[0].button, LegendButton::Exit);
        match screen.body {
            Body::List(view) => assert_eq!(view.rows.len(), 6),
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
