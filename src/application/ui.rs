use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Alignment;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::menus;
use crate::config::Config;
use crate::config::ConfigKey;
use crate::domain::models::Event;
use crate::domain::models::Overlay;
use crate::domain::models::SpeechInputName;
use crate::domain::services::events::EventsService;
use crate::domain::services::Session;
use crate::infrastructure::personas::PersonaRegistry;
use crate::infrastructure::speech::SpeechInputManager;

const HINTS: &str =
    "Ctrl+Q quick actions • Ctrl+P personas • Ctrl+T tools • Ctrl+L voice • Ctrl+R reset • Esc close • Ctrl+C quit";

fn popup_rect(frame_rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(frame_rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical[1])[1];
}

fn message_lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = vec![];

    for message in session.log.all() {
        let mut meta = format!("{} • {}", message.sender.to_string(), message.timestamp);
        if let Some(confidence) = message.confidence {
            meta = format!("{meta} • {confidence}%");
        }

        lines.push(Line::styled(
            meta,
            Style::default().add_modifier(Modifier::DIM),
        ));
        for text_line in message.text.split('\n') {
            lines.push(Line::from(text_line.to_string()));
        }

        if session.dev_mode && message.is_reply() {
            lines.push(Line::styled(
                format!("💭 {}", message.thoughts.join(" → ")),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            ));
        }

        lines.push(Line::from(""));
    }

    return lines;
}

fn render_conversation<B: Backend>(
    frame: &mut Frame<B>,
    session: &Session,
    scroll_up: u16,
    rect: Rect,
) {
    let lines = message_lines(session);
    let total = lines.len() as u16;
    let visible = rect.height.saturating_sub(2);
    let bottom_offset = total.saturating_sub(visible);
    let offset = bottom_offset.saturating_sub(scroll_up);

    let persona = PersonaRegistry::get(session.active_persona);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} {}", persona.icon, persona.name))
                .padding(Padding::new(1, 1, 0, 0)),
        )
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));

    frame.render_widget(paragraph, rect);
}

fn render_composer<B: Backend>(frame: &mut Frame<B>, session: &Session, rect: Rect) {
    let title = if session.listening {
        "🎤 Listening...".to_string()
    } else {
        let persona = PersonaRegistry::get(session.active_persona);
        format!("Ask {}... (try 'Settings')", persona.name)
    };

    let paragraph = Paragraph::new(session.composer.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(title)
            .padding(Padding::new(1, 1, 0, 0)),
    );

    frame.render_widget(paragraph, rect);
}

fn render_menu_overlay<B: Backend>(
    frame: &mut Frame<B>,
    overlay: Overlay,
    cursor: usize,
    rect: Rect,
) {
    let entries = match menus::entries_for(overlay) {
        Some(entries) => entries,
        None => return,
    };

    let lines = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let marker = if idx == cursor { "❯" } else { " " };
            let text = format!(
                "{marker} {} {} - {}",
                entry.icon, entry.name, entry.description
            );
            if idx == cursor {
                return Line::styled(text, Style::default().add_modifier(Modifier::BOLD));
            }
            return Line::from(text);
        })
        .collect::<Vec<Line>>();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(overlay.title())
            .padding(Padding::new(1, 1, 1, 1)),
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

fn render_cooking_overlay<B: Backend>(frame: &mut Frame<B>, session: &Session, rect: Rect) {
    let lines = vec![
        Line::from(format!("Search for recipes: {}", session.overlays.cooking_query)),
        Line::from(""),
        Line::styled(
            format!("Filter: {} (Tab to change)", session.overlays.cooking_filter.label()),
            Style::default().add_modifier(Modifier::DIM),
        ),
        Line::from(""),
        Line::styled(
            "Enter searches, Esc closes.",
            Style::default().add_modifier(Modifier::DIM),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Overlay::Cooking.title())
            .padding(Padding::new(1, 1, 1, 1)),
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

fn render_history_overlay<B: Backend>(frame: &mut Frame<B>, session: &Session, rect: Rect) {
    let mut lines: Vec<Line> = vec![];
    if session.log.is_empty() {
        lines.push(Line::from("No conversation history yet."));
    } else {
        for message in session.log.all() {
            lines.push(Line::from(format!(
                "[{}] {}: {}",
                message.timestamp,
                message.sender.to_string(),
                message.text
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Overlay::History.title())
                .padding(Padding::new(1, 1, 1, 1)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

fn render_settings_overlay<B: Backend>(frame: &mut Frame<B>, session: &Session, rect: Rect) {
    let checkbox = if session.dev_mode { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from(format!("{checkbox} Developer Mode (Space to toggle)")),
        Line::from(""),
        Line::styled(
            "Configure integrations and advanced settings.",
            Style::default().add_modifier(Modifier::DIM),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Overlay::Settings.title())
            .padding(Padding::new(1, 1, 1, 1)),
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

fn render<B: Backend>(frame: &mut Frame<B>, session: &Session, cursor: usize, scroll_up: u16) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_conversation(frame, session, scroll_up, layout[0]);
    render_composer(frame, session, layout[1]);
    frame.render_widget(
        Paragraph::new(HINTS)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM)),
        layout[2],
    );

    if let Some(overlay) = session.overlays.active() {
        let rect = popup_rect(frame.size());
        match overlay {
            Overlay::Cooking => render_cooking_overlay(frame, session, rect),
            Overlay::History => render_history_overlay(frame, session, rect),
            Overlay::Settings => render_settings_overlay(frame, session, rect),
            _ => render_menu_overlay(frame, overlay, cursor, rect),
        }
    }
}

fn start_voice_capture(tx: &mpsc::UnboundedSender<Event>) {
    let name = SpeechInputName::parse(&Config::get(ConfigKey::SpeechInput))
        .unwrap_or(SpeechInputName::None);
    let capture_tx = tx.clone();

    tokio::spawn(async move {
        match SpeechInputManager::get(name) {
            Ok(speech) => {
                if let Err(err) = speech.start_capture(&capture_tx).await {
                    tracing::warn!(err = ?err, "voice capture failed");
                }
            }
            Err(err) => {
                tracing::warn!(err = ?err, "no voice capture source");
            }
        }
    });
}

fn type_char(session: &mut Session, char: char) {
    if session.overlays.is_open(Overlay::Cooking) {
        session.overlays.cooking_query.push(char);
        return;
    }

    session.composer.push(char);
}

fn handle_enter(session: &mut Session, cursor: &mut usize) {
    let overlay = match session.overlays.active() {
        Some(overlay) => overlay,
        None => {
            session.submit();
            return;
        }
    };

    match overlay {
        Overlay::Cooking => session.submit_cooking_search(),
        Overlay::History | Overlay::Settings => (),
        _ => {
            if let Some(entries) = menus::entries_for(overlay) {
                if let Some(entry) = entries.get(*cursor) {
                    session.run_menu_entry(overlay, entry);
                    *cursor = 0;
                }
            }
        }
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    tx: mpsc::UnboundedSender<Event>,
    events: &mut EventsService,
) -> Result<()> {
    // Cursor into the active menu overlay, and how far the conversation is
    // scrolled up from the bottom.
    let mut cursor: usize = 0;
    let mut scroll_up: u16 = 0;

    loop {
        terminal.draw(|frame| {
            render(frame, session, cursor, scroll_up);
        })?;

        match events.next().await? {
            Event::ReplyReady(message) => {
                session.handle_reply(message);
                scroll_up = 0;
            }
            Event::SpeechCaptureStarted() => session.handle_speech_capture_started(),
            Event::SpeechTranscript(transcript) => session.handle_speech_transcript(transcript),
            Event::SpeechCaptureEnded() => session.handle_speech_capture_ended(),
            Event::KeyboardCTRLC() => break,
            Event::KeyboardCTRLQ() => {
                session.overlays.open(Overlay::QuickActions);
                cursor = 0;
            }
            Event::KeyboardCTRLP() => {
                session.overlays.open(Overlay::PersonaPicker);
                cursor = 0;
            }
            Event::KeyboardCTRLT() => {
                session.overlays.open(Overlay::ToolCatalog);
                cursor = 0;
            }
            Event::KeyboardCTRLR() => {
                session.reset();
                scroll_up = 0;
            }
            Event::KeyboardCTRLL() => {
                if !session.listening {
                    start_voice_capture(&tx);
                }
            }
            Event::KeyboardEsc() => {
                if let Some(overlay) = session.overlays.active() {
                    session.overlays.close(overlay);
                    cursor = 0;
                }
            }
            Event::KeyboardEnter() => {
                handle_enter(session, &mut cursor);
                scroll_up = 0;
            }
            Event::KeyboardSpace() => {
                if session.overlays.is_open(Overlay::Settings) {
                    session.toggle_dev_mode();
                } else {
                    type_char(session, ' ');
                }
            }
            Event::KeyboardTab() => {
                if session.overlays.is_open(Overlay::Cooking) {
                    session.overlays.cooking_filter = session.overlays.cooking_filter.cycle();
                }
            }
            Event::KeyboardCharInput(char) => type_char(session, char),
            Event::KeyboardBackspace() => {
                if session.overlays.is_open(Overlay::Cooking) {
                    session.overlays.cooking_query.pop();
                } else {
                    session.composer.pop();
                }
            }
            Event::KeyboardPaste(text) => {
                if session.overlays.is_open(Overlay::Cooking) {
                    session.overlays.cooking_query.push_str(&text);
                } else {
                    session.composer.push_str(&text);
                }
            }
            Event::UIScrollUp() => {
                if session.overlays.active().is_some() {
                    cursor = cursor.saturating_sub(1);
                } else {
                    scroll_up = scroll_up.saturating_add(1);
                }
            }
            Event::UIScrollDown() => {
                if let Some(overlay) = session.overlays.active() {
                    if let Some(entries) = menus::entries_for(overlay) {
                        if cursor + 1 < entries.len() {
                            cursor += 1;
                        }
                    }
                } else {
                    scroll_up = scroll_up.saturating_sub(1);
                }
            }
            Event::UIResize() | Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut session = Session::new(tx.clone());
    let mut events = EventsService::new(rx);

    start_loop(&mut terminal, &mut session, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
