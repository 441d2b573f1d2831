//! CLI 模块

use clap::{Parser, Subcommand};

use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "tuido")]
#[command(version)]
#[command(about = "A tiny to-do list for your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive to-do list (default)
    Tui,
    /// List available color themes
    Themes,
}

/// 打印所有可用主题名称
pub fn print_themes() {
    for theme in Theme::all() {
        println!("{}", theme.label());
    }
}
