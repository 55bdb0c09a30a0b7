//! 服务脚本执行抽象 Trait

use crate::error::CoreResult;

/// 服务脚本执行 Trait
///
/// 调用会阻塞直到脚本退出。
pub trait ScriptRunner: Send + Sync {
    /// 执行脚本
    ///
    /// # Returns
    /// * `Ok(())` - 退出码为 0
    /// * `Err(CoreError::ScriptMissing)` - 脚本不存在
    /// * `Err(CoreError::ScriptFailed)` - 非零退出码
    fn run(&self, script: &str) -> CoreResult<()>;
}
