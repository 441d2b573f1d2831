//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        done: Color::Rgb(100, 100, 100),  // 已完成行（变暗）
        danger: Color::Rgb(255, 85, 85),  // 红色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(0, 128, 68),            // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(160, 160, 160),
        danger: Color::Rgb(200, 50, 50),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // nord0
        bg_secondary: Color::Rgb(59, 66, 82), // nord1
        logo: Color::Rgb(136, 192, 208),      // nord8
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(216, 222, 233), // nord4
        muted: Color::Rgb(97, 110, 136),
        border: Color::Rgb(67, 76, 94), // nord2
        done: Color::Rgb(97, 110, 136),
        danger: Color::Rgb(191, 97, 106), // nord11
    }
}

/// Catppuccin (Mocha) 主题
pub fn catppuccin_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 46),           // base
        bg_secondary: Color::Rgb(49, 50, 68), // surface0
        logo: Color::Rgb(203, 166, 247),      // mauve
        highlight: Color::Rgb(203, 166, 247),
        text: Color::Rgb(205, 214, 244), // text
        muted: Color::Rgb(127, 132, 156),
        border: Color::Rgb(69, 71, 90), // surface1
        done: Color::Rgb(108, 112, 134),
        danger: Color::Rgb(243, 139, 168), // red
    }
}
