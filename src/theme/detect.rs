//! 系统主题检测

use std::process::Command;

/// 检测系统主题，返回 `true` 表示深色模式
///
/// macOS 读取 AppleInterfaceStyle；Linux 尝试 gsettings (GNOME)；
/// 其他平台或检测失败时默认浅色模式。
pub fn detect_system_theme() -> bool {
    if cfg!(target_os = "macos") {
        return detect_macos();
    }
    if cfg!(target_os = "linux") {
        return detect_gnome();
    }
    false
}

/// macOS：AppleInterfaceStyle 存在且为 "Dark" 时是深色模式
fn detect_macos() -> bool {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

/// GNOME：color-scheme 含 "dark" 时是深色模式
fn detect_gnome() -> bool {
    Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("dark")
        })
        .unwrap_or(false)
}
