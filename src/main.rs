mod app;
mod cli;
mod config;
mod dialogs;
mod error;
mod event;
mod store;
mod theme;
mod ui;
mod ui_state;

use std::io::{self, Write};
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};

/// 启动 TUI 界面
fn run_tui() -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // 创建应用
    let mut app = App::new();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    // 清除终端 tab 标题（恢复默认）
    print!("\x1b]0;\x07");
    let _ = io::stdout().flush();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            run_tui()?;
        }
        Some(Commands::Themes) => {
            cli::print_themes();
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面（点击区域每帧重新注册）
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::todo::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
