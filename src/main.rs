//! Shelf TUI - Actor-based grouped item list viewer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP fetch and connectivity probing

mod models;
mod ui;
mod messages;
mod app;
mod network;
mod constants;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use messages::ui_events::key_to_ui_event;
use messages::{ConnectivityUpdate, NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::LoadState;
use network::{connectivity, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Endpoint override via positional argument
    let items_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| constants::DEFAULT_ITEMS_URL.to_string());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (conn_tx, conn_rx) = mpsc::unbounded_channel::<ConnectivityUpdate>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn connectivity watcher
    match connectivity::probe_target(&items_url) {
        Some((host, port)) => {
            tokio::spawn(connectivity::watch_connectivity(host, port, conn_tx));
        }
        None => {
            tracing::warn!(url = %items_url, "Cannot derive connectivity probe target");
        }
    }

    // Spawn app actor
    let app_actor = AppActor::new(items_url, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx, conn_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut tick: u64 = 0;

    loop {
        terminal.draw(|f| draw_ui(f, &current_state, tick))?;
        tick = tick.wrapping_add(1);

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, tick: u64) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    match &state.load_state {
        LoadState::Loading => draw_loading(f, main_chunks[0], tick),
        LoadState::Success(_) => draw_list(f, state, main_chunks[0]),
        LoadState::Error => draw_error(f, state, main_chunks[0]),
    }

    draw_status_bar(f, state, main_chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_loading(f: &mut Frame, area: Rect, tick: u64) {
    let block = Block::default().borders(Borders::ALL).title(" Items ");
    f.render_widget(block, area);

    let center = centered_rect(40, 20, area);
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Loading items...", ui::spinner_frame(tick)),
            Style::default().fg(Color::Cyan),
        )),
    ];
    f.render_widget(ui::centered_text(lines), center);
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let LoadState::Success(groups) = &state.load_state else {
        return;
    };

    let item_count: usize = groups.iter().map(|g| g.items.len()).sum();

    // The group under the top of the viewport doubles as a pinned header
    let title = match ui::group_at_line(groups, state.scroll as usize) {
        Some(group) if state.scroll > 0 => {
            format!(" Items - Group {} ({} groups, {} items) ", group.name, groups.len(), item_count)
        }
        _ => format!(" Items ({} groups, {} items) ", groups.len(), item_count),
    };

    let block = Block::default().borders(Borders::ALL).title(title);

    if groups.is_empty() {
        let empty = Paragraph::new("The list is empty.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let list = Paragraph::new(ui::group_lines(groups))
        .block(block)
        .scroll((state.scroll, 0));
    f.render_widget(list, area);
}

fn draw_error(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Items ");
    f.render_widget(block, area);

    let center = centered_rect(60, 40, area);
    let mut lines = vec![
        Line::from(Span::styled(
            "Couldn't load the list.",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
    ];
    if !state.network_available {
        lines.push(Line::from(Span::styled(
            "Network appears to be offline. Retrying when it recovers.",
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(" r ", Style::default().fg(Color::Black).bg(Color::White).bold()),
        Span::raw(" to try again."),
    ]));

    f.render_widget(ui::centered_text(lines), center);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (indicator, color) = if state.network_available {
        ("[online]", Color::Green)
    } else {
        ("[offline]", Color::Red)
    };

    let fetch_time = if state.last_fetch_ms > 0 {
        format!(" {}ms ", state.last_fetch_ms)
    } else {
        String::new()
    };

    let bar = Line::from(vec![
        Span::styled(format!(" {} ", indicator), Style::default().fg(color)),
        Span::styled(fetch_time, Style::default().fg(Color::DarkGray)),
        Span::styled(
            " ↑/↓:scroll | r:retry | ?:help | q:quit ",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 50, area);

    let help_text = r#"
 SHELF TUI - Keyboard Shortcuts

 LIST
   ↑ / k              Scroll up
   ↓ / j              Scroll down

 LOADING
   r                  Try again (error screen)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
