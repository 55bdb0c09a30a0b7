//! 服务脚本执行
//!
//! 以 `bash <scripts_dir>/<script>` 运行开关脚本。
//! 终端由 TUI 占用，脚本输出被捕获后写入日志。

use std::path::PathBuf;
use std::process::{Command, Stdio};

use sysapps_core::{CoreError, CoreResult, ScriptRunner};

/// bash 脚本执行器
pub struct BashScriptRunner {
    scripts_dir: PathBuf,
}

impl BashScriptRunner {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
        }
    }
}

impl ScriptRunner for BashScriptRunner {
    fn run(&self, script: &str) -> CoreResult<()> {
        let path = self.scripts_dir.join(script);
        if !path.is_file() {
            return Err(CoreError::ScriptMissing(path));
        }

        log::info!("Running {}", path.display());
        let output = Command::new("bash")
            .arg(&path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CoreError::Command {
                program: "bash".to_string(),
                message: e.to_string(),
            })?;

        if let Some(stdout) = captured_text(&output.stdout) {
            log::debug!("{script} stdout: {stdout}");
        }
        if let Some(stderr) = captured_text(&output.stderr) {
            log::debug!("{script} stderr: {stderr}");
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(CoreError::ScriptFailed {
                script: script.to_string(),
                code: output.status.code(),
            })
        }
    }
}

/// 去掉首尾空白后的输出，没有内容时为 None
fn captured_text(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
