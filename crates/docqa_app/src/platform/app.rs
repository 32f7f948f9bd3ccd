use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use docqa_core::{update, AppState, ButtonView, Msg};
use docqa_engine::EngineHandle;
use docqa_logging::{qa_error, qa_info, qa_warn, LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;

use super::config::{self, AppConfig, DEFAULT_CONFIG_FILE};
use super::effects::EffectRunner;
use super::input::{self, Command, ParseError};
use super::ui;

/// Everything the main loop reacts to. Only the main loop touches `AppState`.
#[derive(Debug, PartialEq)]
pub(crate) enum LoopEvent {
    Msg(Msg),
    Command(Command),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = load_config(&config_path);

    let (engine, events) = EngineHandle::new(&config.client_settings())?;
    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(engine, events, loop_tx.clone());
    spawn_input_thread(loop_tx);

    let mut session = Session::new(
        AppState::with_notification_duration(config.notification_duration()),
        runner,
    );
    session.render();
    println!("{}", ui::constants::HELP_TEXT);

    while let Ok(event) = loop_rx.recv() {
        let flow = match event {
            LoopEvent::Msg(msg) => {
                session.dispatch_msg(msg);
                ControlFlow::Continue(())
            }
            LoopEvent::Command(command) => session.handle_command(command),
            LoopEvent::InputClosed => {
                session.input_closed = true;
                ControlFlow::Continue(())
            }
        };
        if flow.is_break() || session.finished() {
            break;
        }
    }

    session.runner.shutdown();
    qa_info!("Session ended");
    Ok(())
}

fn load_config(path: &Path) -> AppConfig {
    let loaded = config::read_config(path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    // Logging depends on the config, so report how loading went afterwards.
    init_logging(config.log_destination);
    match loaded {
        Ok(Some(_)) => qa_info!("Loaded config from {:?}", path),
        Ok(None) => qa_info!("No config at {:?}; using defaults", path),
        Err(err) => qa_warn!("Ignoring config at {:?}: {}", path, err),
    }
    config
}

fn init_logging(destination: LogDestination) {
    docqa_logging::initialize(destination, LevelFilter::Info, Path::new(DEFAULT_LOG_FILE));
}

fn spawn_input_thread(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let event = match read_line(line) {
                LineOutcome::Event(event) => event,
                LineOutcome::Skip => continue,
                LineOutcome::Stop => break,
            };
            if loop_tx.send(event).is_err() {
                return;
            }
        }
        let _ = loop_tx.send(LoopEvent::InputClosed);
    });
}

#[derive(Debug, PartialEq)]
enum LineOutcome {
    Event(LoopEvent),
    Skip,
    Stop,
}

/// A line that is not UTF-8 is dropped; any other read error ends input.
fn read_line(line: io::Result<String>) -> LineOutcome {
    let line = match line {
        Ok(line) => line,
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            qa_warn!("Skipping unreadable input line: {}", err);
            eprintln!("Input line is not valid UTF-8; ignored.");
            return LineOutcome::Skip;
        }
        Err(err) => {
            qa_error!("Reading stdin failed: {}", err);
            return LineOutcome::Stop;
        }
    };
    match input::parse_command(&line) {
        Ok(command) => LineOutcome::Event(LoopEvent::Command(command)),
        Err(ParseError::Empty) => LineOutcome::Skip,
        Err(err) => {
            eprintln!("{err}. Type `help` for commands.");
            LineOutcome::Skip
        }
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    input_closed: bool,
}

impl Session {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            input_closed: false,
        }
    }

    /// With stdin gone, stay alive only until the in-flight request lands.
    fn finished(&self) -> bool {
        self.input_closed && !self.state.busy().is_busy()
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.render();
        }
    }

    fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::SelectFile(path) => match input::load_document(&path) {
                Ok(document) => self.dispatch_msg(Msg::DocumentSelected(document)),
                Err(err) => {
                    qa_error!("Could not read {:?}: {}", path, err);
                    eprintln!("Could not read {}: {}", path.display(), err);
                }
            },
            Command::SetQuestion(text) => self.dispatch_msg(Msg::QuestionChanged(text)),
            Command::Upload => {
                let button = self.state.view().upload_button;
                self.click(button, Msg::UploadClicked);
            }
            Command::Ask(text) => {
                let button = self.state.view().ask_button;
                if !button.enabled {
                    report_disabled(button);
                    return ControlFlow::Continue(());
                }
                if let Some(text) = text {
                    self.dispatch_msg(Msg::QuestionChanged(text));
                }
                self.click(button, Msg::AskClicked);
            }
            Command::Help => println!("{}", ui::constants::HELP_TEXT),
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// A disabled button swallows the click.
    fn click(&mut self, button: ButtonView, msg: Msg) {
        if button.enabled {
            self.dispatch_msg(msg);
        } else {
            report_disabled(button);
        }
    }

    fn render(&self) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{}", ui::render::render(&self.state.view()));
        let _ = write!(stdout, "{}", ui::constants::PROMPT);
        let _ = stdout.flush();
    }
}

fn report_disabled(button: ButtonView) {
    println!("[{}] is disabled while a request is in flight.", button.label);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use docqa_core::{BusyFlag, Operation, SelectedDocument};
    use docqa_engine::{DocumentUpload, QaService, RequestError, UploadReceipt};

    use super::*;

    /// Counts calls and never answers, so the busy flag stays held.
    #[derive(Default)]
    struct HangingService {
        uploads: AtomicUsize,
        asks: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl QaService for HangingService {
        async fn upload_document(
            &self,
            _document: &DocumentUpload,
        ) -> Result<UploadReceipt, RequestError> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }

        async fn ask_question(&self, _question: &str) -> Result<Option<String>, RequestError> {
            self.asks.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    fn session_with(service: Arc<HangingService>) -> (Session, mpsc::Receiver<LoopEvent>) {
        let (engine, events) = EngineHandle::with_service(service).unwrap();
        let (loop_tx, loop_rx) = mpsc::channel();
        let runner = EffectRunner::new(engine, events, loop_tx);

        let mut session = Session::new(AppState::new(), runner);
        session.dispatch_msg(Msg::DocumentSelected(SelectedDocument::new(
            "report.pdf",
            b"pdf".to_vec(),
        )));
        session.dispatch_msg(Msg::QuestionChanged("What is it about?".to_string()));
        (session, loop_rx)
    }

    fn wait_for(counter: &AtomicUsize, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while counter.load(Ordering::SeqCst) < expected {
            assert!(Instant::now() < deadline, "service was never called");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn clicks_are_swallowed_while_upload_in_flight() {
        let service = Arc::new(HangingService::default());
        let (mut session, _loop_rx) = session_with(service.clone());

        let flow = session.handle_command(Command::Upload);
        assert!(flow.is_continue());
        assert_eq!(session.state.busy(), BusyFlag::Busy(Operation::Upload));
        wait_for(&service.uploads, 1);
        let before = session.state.clone();

        session.handle_command(Command::Ask(Some("Something else?".to_string())));
        session.handle_command(Command::Upload);
        std::thread::sleep(Duration::from_millis(100));

        assert_eq!(session.state, before);
        assert_eq!(session.state.selection().question(), "What is it about?");
        assert_eq!(service.uploads.load(Ordering::SeqCst), 1);
        assert_eq!(service.asks.load(Ordering::SeqCst), 0);
        session.runner.shutdown();
    }

    #[test]
    fn upload_is_swallowed_while_ask_in_flight() {
        let service = Arc::new(HangingService::default());
        let (mut session, _loop_rx) = session_with(service.clone());

        session.handle_command(Command::Ask(None));
        assert_eq!(session.state.busy(), BusyFlag::Busy(Operation::Ask));
        wait_for(&service.asks, 1);
        let before = session.state.clone();

        session.handle_command(Command::Upload);
        session.handle_command(Command::Ask(None));
        std::thread::sleep(Duration::from_millis(100));

        assert_eq!(session.state, before);
        assert_eq!(service.uploads.load(Ordering::SeqCst), 0);
        assert_eq!(service.asks.load(Ordering::SeqCst), 1);
        session.runner.shutdown();
    }

    #[test]
    fn session_stays_open_until_request_lands() {
        let service = Arc::new(HangingService::default());
        let (mut session, _loop_rx) = session_with(service);

        session.handle_command(Command::Upload);
        session.input_closed = true;
        assert!(!session.finished());
        session.runner.shutdown();
    }

    #[test]
    fn non_utf8_line_is_skipped() {
        let err = io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8");
        assert_eq!(read_line(Err(err)), LineOutcome::Skip);
    }

    #[test]
    fn other_read_errors_end_input() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert_eq!(read_line(Err(err)), LineOutcome::Stop);
    }

    #[test]
    fn lines_become_commands() {
        assert_eq!(
            read_line(Ok("upload".to_string())),
            LineOutcome::Event(LoopEvent::Command(Command::Upload))
        );
        assert_eq!(read_line(Ok("   ".to_string())), LineOutcome::Skip);
        assert_eq!(read_line(Ok("frobnicate".to_string())), LineOutcome::Skip);
    }
}
