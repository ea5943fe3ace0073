//! Checkmate - terminal client for the Checkmate Q&A service

mod app;
mod commands;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, ExitAction};
use checkmate::api::{AnswerUpdate, ApiClient, NewAnswer};
use checkmate::config::Config;
use checkmate::constants::{COMMAND_CHANNEL_SIZE, DEFAULT_ANSWER_PAGE_SIZE};
use checkmate::paths;
use checkmate::session::{resolve_token, Session};
use checkmate::wizard::{DesktopNotifier, FanOut, LogNotifier, RegistrationApi, RegistrationWizard};
use commands::register::RegisterArgs;
use commands::{ChannelNotifier, CommandMessage};

/// Terminal client for the Checkmate Q&A service
#[derive(Parser, Debug)]
#[command(name = "checkmate")]
#[command(version)]
#[command(about = "Terminal client for the Checkmate Q&A service - sign up, sign in, manage answers")]
struct Cli {
    /// Service base URL (overrides the config file)
    #[arg(long, global = true, env = "CHECKMATE_API_URL")]
    api_url: Option<String>,

    /// Access token (overrides config and saved session)
    #[arg(long, global = true, env = "CHECKMATE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an account (interactive wizard unless all values are given)
    Register {
        /// Native language code (ko, en, ja, zh, es, fr, de)
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        nickname: Option<String>,
    },
    /// Sign in and remember the access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CHECKMATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved access token
    Logout,
    /// Show a member's public profile
    Member {
        /// Member ID
        id: i64,
    },
    /// Browse questions
    Questions {
        #[command(subcommand)]
        action: QuestionsAction,
    },
    /// List, post, edit, delete, or accept answers
    Answers {
        #[command(subcommand)]
        action: AnswersAction,
    },
    /// Print the effective configuration
    Config {
        /// Print the default configuration instead
        #[arg(long)]
        example: bool,
    },
}

#[derive(Subcommand, Debug)]
enum QuestionsAction {
    /// List questions, newest first
    List {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = DEFAULT_ANSWER_PAGE_SIZE)]
        limit: u32,
        /// Only questions asked by the member given with --as
        #[arg(long, requires = "member")]
        mine: bool,
        /// Your member ID
        #[arg(long = "as")]
        member: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
enum AnswersAction {
    /// List answers to a question
    List {
        /// Question ID
        question: i64,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = DEFAULT_ANSWER_PAGE_SIZE)]
        limit: u32,
        /// Your member ID, to show what you can do with each answer
        #[arg(long = "as")]
        viewer: Option<i64>,
        /// The question already has an accepted answer
        #[arg(long)]
        resolved: bool,
    },
    /// Post a corrected version of a question's text
    Add {
        /// Question ID
        question: i64,
        /// Your member ID
        #[arg(long = "as")]
        member: i64,
        /// The corrected text
        #[arg(long)]
        contents: String,
        /// Explanation of the corrections
        #[arg(long, default_value = "")]
        explain: String,
        /// Link to an attached file
        #[arg(long)]
        url: Option<String>,
    },
    /// Replace the text of one of your answers
    Edit {
        /// Answer ID
        answer: i64,
        #[arg(long)]
        contents: String,
        #[arg(long, default_value = "")]
        explain: String,
    },
    /// Delete one of your answers
    Delete {
        /// Answer ID
        answer: i64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Accept an answer to your question
    Choose {
        /// Question ID
        question: i64,
        /// Answer ID
        answer: i64,
        /// Rating for the answer (1-5)
        #[arg(long, default_value_t = 5)]
        rating: u8,
        /// Review left for the answer's author
        #[arg(long, default_value = "")]
        comment: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let _guard = setup_logging(cli.verbose)?;

    tracing::info!("Checkmate starting");

    let config = Config::load().with_api_url(cli.api_url.clone());

    match cli.command {
        None => run_register(&config, RegisterArgs::default()).await,
        Some(Commands::Register {
            language,
            email,
            password,
            nickname,
        }) => {
            let args = RegisterArgs {
                language,
                email,
                password,
                nickname,
            };
            run_register(&config, args).await
        }
        Some(Commands::Login { email, password }) => {
            let client = ApiClient::new(&config.api)?;
            commands::login::run_login(&client, &email, &password).await
        }
        Some(Commands::Logout) => commands::login::run_logout(),
        Some(Commands::Member { id }) => {
            let client = authorized_client(&config, cli.token)?;
            commands::member::run_member(&client, id).await
        }
        Some(Commands::Questions { action }) => {
            let client = authorized_client(&config, cli.token)?;
            match action {
                QuestionsAction::List {
                    offset,
                    limit,
                    mine,
                    member,
                } => {
                    let author = if mine { member } else { None };
                    commands::questions::run_list(&client, author, offset, limit).await
                }
            }
        }
        Some(Commands::Answers { action }) => {
            let client = authorized_client(&config, cli.token)?;
            match action {
                AnswersAction::List {
                    question,
                    offset,
                    limit,
                    viewer,
                    resolved,
                } => {
                    let viewer = viewer.map(|member_id| commands::answers::Viewer {
                        member_id,
                        question_status: i32::from(resolved),
                    });
                    commands::answers::run_list(&client, question, offset, limit, viewer).await
                }
                AnswersAction::Add {
                    question,
                    member,
                    contents,
                    explain,
                    url,
                } => {
                    let answer = NewAnswer {
                        question_id: question,
                        member_id: member,
                        answer_contents: contents,
                        answer_explain: explain,
                        answer_url: url.filter(|u| !u.is_empty()),
                    };
                    commands::answers::run_add(&client, answer).await
                }
                AnswersAction::Edit {
                    answer,
                    contents,
                    explain,
                } => {
                    let update = AnswerUpdate {
                        answer_id: answer,
                        answer_contents: contents,
                        answer_explain: explain,
                    };
                    commands::answers::run_edit(&client, update).await
                }
                AnswersAction::Delete { answer, yes } => {
                    commands::answers::run_delete(&client, answer, yes).await
                }
                AnswersAction::Choose {
                    question,
                    answer,
                    rating,
                    comment,
                    yes,
                } => {
                    commands::answers::run_choose(&client, question, answer, rating, comment, yes)
                        .await
                }
            }
        }
        Some(Commands::Config { example }) => {
            if example {
                print!("{}", Config::example_toml());
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}

/// Set up logging to a daily rolling file; the terminal belongs to the TUI
fn setup_logging(verbose: bool) -> Result<WorkerGuard> {
    let log_dir = paths::data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, paths::LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

/// API client carrying the best available access token
fn authorized_client(config: &Config, flag: Option<String>) -> Result<ApiClient> {
    let session = match Session::load() {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Ignoring unreadable session file: {}", e);
            None
        }
    };
    let token = resolve_token(flag, config.api.token.clone(), session.as_ref());
    if token.is_none() {
        tracing::debug!("No access token available, sending anonymous requests");
    }
    Ok(ApiClient::new(&config.api)?.with_token(token))
}

async fn run_register(config: &Config, args: RegisterArgs) -> Result<()> {
    let client = ApiClient::new(&config.api)?;

    if !args.is_empty() {
        let mut notifier = FanOut::new().with(LogNotifier);
        if config.notifications.desktop {
            notifier = notifier.with(DesktopNotifier::new(config.notifications.desktop_timeout_ms));
        }
        let mut wizard = RegistrationWizard::new(notifier);
        commands::register::run_headless(&mut wizard, &client, &args).await?;
        println!("{}", commands::login::login_hint(&wizard.fields().email));
        return Ok(());
    }

    run_tui(config, Arc::new(client)).await
}

async fn run_tui(config: &Config, api: Arc<dyn RegistrationApi>) -> Result<()> {
    // Create command channel; the wizard's notices travel on it too
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<CommandMessage>(COMMAND_CHANNEL_SIZE);

    let mut notifier = FanOut::new().with(ChannelNotifier::new(cmd_tx.clone()));
    if config.notifications.desktop {
        notifier = notifier.with(DesktopNotifier::new(config.notifications.desktop_timeout_ms));
    }
    let wizard = RegistrationWizard::new(notifier);
    let mut app = App::new(
        wizard,
        api,
        cmd_tx,
        Duration::from_millis(config.notifications.toast_ms),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let tick = Duration::from_millis(config.ui.tick_ms);
    let result = run_app(&mut terminal, &mut app, &mut cmd_rx, tick).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    match &app.exit_action {
        ExitAction::GoToLogin { email } => {
            println!("Registration complete.");
            println!("{}", commands::login::login_hint(email));
        }
        ExitAction::Cancelled => {
            tracing::info!("Registration left before completion");
        }
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cmd_rx: &mut mpsc::Receiver<CommandMessage>,
    tick: Duration,
) -> Result<()> {
    // Create async event stream for responsive input
    let mut event_stream = EventStream::new();

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            biased;  // Prioritize in order: keys, commands, timeout

            // Terminal key events (instant response)
            Some(Ok(event)) = event_stream.next() => {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code)?;
                    }
                }
            }
            // Results and notices from background tasks
            Some(msg) = cmd_rx.recv() => {
                app.handle_command_message(msg)?;
            }
            // Timeout for spinner animation, toast expiry, and redraw
            _ = tokio::time::sleep(tick) => {}
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
