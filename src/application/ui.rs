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
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Margin;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Locale;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::models::Turn;
use crate::domain::models::TurnKind;
use crate::domain::services::actions::help_text;
use crate::domain::services::EventsService;
use crate::domain::services::Scroll;
use crate::domain::services::Session;
use crate::domain::services::TranscriptList;
use crate::infrastructure::backends::BackendManager;

fn locale_codes() -> String {
    return Locale::iter()
        .map(|locale| return format!("{locale} ({})", locale.native_name()))
        .collect::<Vec<String>>()
        .join(", ");
}

fn sync_display(
    transcript: &mut TranscriptList,
    scroll: &mut Scroll,
    session: &Session,
    width: u16,
    height: u16,
) {
    transcript.set_turns(&session.turns, width);
    scroll.set_state(transcript.len() as u16, height);
    scroll.last();
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let loading = Loading::new("Johar is thinking...");
    let mut transcript = TranscriptList::default();
    let mut scroll = Scroll::default();
    let mut last_known_width: u16 = 0;
    let mut last_known_height: u16 = 0;

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(frame.size());

            if layout[0].width != last_known_width || layout[0].height != last_known_height {
                last_known_width = layout[0].width;
                last_known_height = layout[0].height;
                transcript.set_turns(&session.turns, last_known_width);
                scroll.set_state(transcript.len() as u16, last_known_height);
                scroll.last();
            }

            transcript.render(frame, layout[0], scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scroll.scrollbar_state,
            );

            if session.busy {
                loading.render(frame, layout[1]);
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }
        })?;

        match events.next().await? {
            Event::ReplyReady(reply) => {
                session.handle_reply(reply);
                sync_display(
                    &mut transcript,
                    &mut scroll,
                    session,
                    last_known_width,
                    last_known_height,
                );
            }
            Event::KeyboardCTRLC() => {
                if session.busy {
                    tx.send(Action::Abort())?;
                    session.reset();
                    sync_display(
                        &mut transcript,
                        &mut scroll,
                        session,
                        last_known_width,
                        last_known_height,
                    );
                    continue;
                }
                break;
            }
            Event::KeyboardEnter() => {
                if session.busy {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }
                textarea = TextArea::default();

                if let Some(command) = SlashCommand::parse(&input_str) {
                    if command.is_quit() {
                        break;
                    }

                    handle_command(session, &command);
                    sync_display(
                        &mut transcript,
                        &mut scroll,
                        session,
                        last_known_width,
                        last_known_height,
                    );
                    continue;
                }

                session.submit(&input_str, &tx)?;
                sync_display(
                    &mut transcript,
                    &mut scroll,
                    session,
                    last_known_width,
                    last_known_height,
                );
            }
            Event::KeyboardCharInput(input) => {
                if !session.busy {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if !session.busy {
                    textarea.insert_str(&text);
                }
            }
            Event::UIScrollUp() => {
                scroll.up();
            }
            Event::UIScrollDown() => {
                scroll.down();
            }
            Event::UIScrollPageUp() => {
                scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                scroll.down_page();
            }
            Event::UITick() => {}
        }
    }

    return Ok(());
}

fn handle_command(session: &mut Session, command: &SlashCommand) {
    if let Some(intent) = command.intent() {
        session.select_intent(intent);
        return;
    }

    if command.is_restart() {
        session.reset();
        return;
    }

    if command.is_help() {
        session.add_turn(Turn::new(Author::Johar, &help_text()));
        return;
    }

    if command.is_locale_set() {
        let code = command.args.first().map(String::as_str).unwrap_or_default();
        match Locale::parse(code) {
            Some(locale) => {
                session.set_locale(locale);
            }
            None => {
                session.add_turn(Turn::new_with_kind(
                    Author::Johar,
                    TurnKind::Error,
                    &format!(
                        "'{code}' isn't a language I know. Try one of: {}",
                        locale_codes()
                    ),
                ));
            }
        }
    }
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let locale =
        Locale::parse(&Config::get(ConfigKey::Locale)).unwrap_or(Locale::English);
    let mut session = Session::new(locale);

    let backend_name = Config::get(ConfigKey::Backend);
    let backend = BackendManager::get(&backend_name)?;
    if let Err(err) = backend.health_check().await {
        session.add_turn(Turn::new_with_kind(
            Author::Johar,
            TurnKind::Error,
            &format!("Hey, it looks like backend {backend_name} isn't reachable, I can't connect to it. You should double check that before we start talking, otherwise every reply will fail.\n\nError: {err}"),
        ));
    }

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
