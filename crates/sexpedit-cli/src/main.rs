mod app;
mod keys;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use sexpedit_config::Config;
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

use app::{App, Outcome};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let path = match (args.len(), &config.scratch_path) {
        (2, _) => PathBuf::from(&args[1]),
        (1, Some(scratch)) => scratch.clone(),
        _ => {
            eprintln!("Usage: {} <file>", args[0]);
            eprintln!(
                "Or set scratch_path in {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let mut app = App::open(path, config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Poll so an expired flash is redrawn without a key press.
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key) {
                Ok(Outcome::Quit) => return Ok(()),
                Ok(Outcome::Continue) => {}
                Err(e) => app.status = format!("error: {e:#}"),
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let caret = app.caret_line_col();
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll = caret.line.saturating_sub(visible.saturating_sub(1));

    let title = format!(
        "{}{}",
        app.path.display(),
        if app.dirty { " [+]" } else { "" }
    );
    let body = Paragraph::new(buffer_lines(app, Instant::now()))
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(body, chunks[0]);

    let status = Line::from(vec![
        Span::styled(
            format!(" {}:{} ", caret.line + 1, caret.col + 1),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw(" "),
        Span::raw(app.status.clone()),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);
}

/// One styled line per buffer line: the caret is reversed, a live eval
/// flash is highlighted.
fn buffer_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let text = app.text();
    let flash = app.active_flash(now);
    let caret_style = Style::default().add_modifier(Modifier::REVERSED);
    let flash_style = Style::default().bg(Color::Yellow).fg(Color::Black);

    text.lines()
        .map(|line| {
            let mut spans: Vec<Span<'static>> = (line.start..line.end)
                .map(|i| {
                    let c = text.get(i).unwrap_or(' ').to_string();
                    let style = if i == app.caret {
                        caret_style
                    } else if flash.is_some_and(|f| f.contains(i)) {
                        flash_style
                    } else {
                        Style::default()
                    };
                    Span::styled(c, style)
                })
                .collect();
            // caret sitting on the newline or at end of buffer
            if app.caret == line.end {
                spans.push(Span::styled(" ", caret_style));
            }
            Line::from(spans)
        })
        .collect()
}
