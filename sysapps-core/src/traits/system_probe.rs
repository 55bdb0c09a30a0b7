//! 系统状态查询抽象 Trait

use crate::types::MemoryInfo;

/// 系统状态查询 Trait
///
/// 所有查询均不可失败：读取失败时返回 `false` / `None`，
/// 界面显示为“不可用”。
pub trait SystemProbe: Send + Sync {
    /// SSH 服务是否运行中
    fn ssh_active(&self) -> bool;

    /// sshd 配置是否允许 SCP 所需的转发
    fn scp_enabled(&self) -> bool;

    /// 电池电量百分比
    fn battery_percent(&self) -> Option<u8>;

    /// 本机对外 IP 地址
    fn ip_address(&self) -> Option<String>;

    /// 内存占用
    fn memory(&self) -> Option<MemoryInfo>;
}
