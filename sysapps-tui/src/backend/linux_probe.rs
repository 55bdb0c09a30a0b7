//! Linux 系统状态查询
//!
//! 读取 systemd、sshd 配置、`/sys` 与 `/proc`。
//! 任何读取失败都视为“不可用”，只记录 debug 日志。

use std::fs;
use std::net::UdpSocket;
use std::path::{Path, PathBuf};
use std::process::Command;

use sysapps_core::{MemoryInfo, SystemProbe};

/// 用于确定出口网卡地址的公网地址（connect 不会发送数据包）
const ROUTE_PROBE_ADDR: &str = "8.8.8.8:80";

/// Linux 系统状态查询
pub struct LinuxProbe {
    sshd_config: PathBuf,
    power_supply_dir: PathBuf,
    meminfo: PathBuf,
}

impl Default for LinuxProbe {
    fn default() -> Self {
        Self {
            sshd_config: PathBuf::from("/etc/ssh/sshd_config"),
            power_supply_dir: PathBuf::from("/sys/class/power_supply"),
            meminfo: PathBuf::from("/proc/meminfo"),
        }
    }
}

impl LinuxProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义文件路径（测试用）
    #[cfg(test)]
    fn with_paths(sshd_config: &Path, power_supply_dir: &Path, meminfo: &Path) -> Self {
        Self {
            sshd_config: sshd_config.to_path_buf(),
            power_supply_dir: power_supply_dir.to_path_buf(),
            meminfo: meminfo.to_path_buf(),
        }
    }
}

impl SystemProbe for LinuxProbe {
    fn ssh_active(&self) -> bool {
        match Command::new("systemctl").args(["is-active", "ssh"]).output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "active",
            Err(e) => {
                log::debug!("systemctl unavailable: {e}");
                false
            }
        }
    }

    fn scp_enabled(&self) -> bool {
        read(&self.sshd_config).is_some_and(|text| forwarding_enabled(&text))
    }

    fn battery_percent(&self) -> Option<u8> {
        let entries = fs::read_dir(&self.power_supply_dir)
            .map_err(|e| log::debug!("{}: {e}", self.power_supply_dir.display()))
            .ok()?;

        let mut supplies: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        supplies.sort();

        supplies.iter().find_map(|supply| {
            let kind = read(&supply.join("type"));
            if kind.as_deref().is_some_and(|k| k.trim() != "Battery") {
                return None;
            }
            read(&supply.join("capacity")).and_then(|text| parse_capacity(&text))
        })
    }

    fn ip_address(&self) -> Option<String> {
        let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
        socket
            .connect(ROUTE_PROBE_ADDR)
            .map_err(|e| log::debug!("No route for IP lookup: {e}"))
            .ok()?;
        let ip = socket.local_addr().ok()?.ip();
        (!ip.is_unspecified()).then(|| ip.to_string())
    }

    fn memory(&self) -> Option<MemoryInfo> {
        read(&self.meminfo).and_then(|text| parse_meminfo(&text))
    }
}

fn read(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .map_err(|e| log::debug!("{}: {e}", path.display()))
        .ok()
}

/// sshd 配置中是否存在生效的 `AllowTcpForwarding yes`（忽略注释行）
fn forwarding_enabled(sshd_config: &str) -> bool {
    sshd_config.lines().any(|line| {
        let mut words = line.split_whitespace();
        matches!(
            (words.next(), words.next()),
            (Some(key), Some(value))
                if key.eq_ignore_ascii_case("AllowTcpForwarding") && value.eq_ignore_ascii_case("yes")
        )
    })
}

fn parse_capacity(text: &str) -> Option<u8> {
    text.trim().parse::<u8>().ok().map(|p| p.min(100))
}

fn parse_meminfo(text: &str) -> Option<MemoryInfo> {
    let field = |name: &str| {
        text.lines().find_map(|line| {
            let rest = line.strip_prefix(name)?.strip_prefix(':')?;
            rest.split_whitespace().next()?.parse::<u64>().ok()
        })
    };

    Some(MemoryInfo {
        total_kib: field("MemTotal")?,
        available_kib: field("MemAvailable")?,
    })
}
