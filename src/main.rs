use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flexi_logger::LoggerHandle;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tasklist::config::{self, Config, ConfigError};
use tasklist::logging;
use tasklist::todo::models::{Filter, TaskId};
use tasklist::todo::storage::{FileStore, KeyValueStore};
use tasklist::todo::store::TaskStore;
use tasklist::todo::view::{EMPTY_STATE_TITLE, Projection};
use tasklist::tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "A terminal task list with filters, kept in a local store")]
struct Cli {
    #[arg(long, global = true, help = "Override the configured log level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add {
        #[arg(required = true, help = "Task text")]
        text: Vec<String>,
    },
    #[command(about = "List tasks")]
    List {
        #[arg(long, short, value_enum, default_value_t = Filter::All, help = "Which tasks to show")]
        filter: Filter,
    },
    #[command(about = "Toggle a task between active and completed")]
    Toggle {
        #[arg(help = "Task id")]
        id: String,
    },
    #[command(about = "Replace the text of a task")]
    Edit {
        #[arg(help = "Task id")]
        id: String,
        #[arg(required = true, help = "New text")]
        text: Vec<String>,
    },
    #[command(about = "Delete a task")]
    Rm {
        #[arg(help = "Task id")]
        id: String,
    },
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (data_dir or log_level)")]
        key: String,
        #[arg(help = "Configuration value", value_hint = ValueHint::AnyPath)]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        command => {
            if let Err(e) = run_with_store(command, cli.log_level.as_deref()) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            for key in config::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn run_with_store(command: Option<Commands>, log_level: Option<&str>) -> Result<()> {
    let config = Config::load_or_default()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    let data_dir = config.data_dir()?;

    let _logger = start_logging(log_level.unwrap_or(config.log_level()), &data_dir);
    let mut store = TaskStore::open(FileStore::new(&data_dir));

    match command {
        None => {
            let mut app = App::new(store);
            run_tui(&mut app)?;
        }
        Some(Commands::Add { text }) => {
            if let Some(id) = store.add(&text.join(" ")) {
                println!("{}", id);
            }
        }
        Some(Commands::List { filter }) => print_tasks(&Projection::compute(store.tasks(), filter)),
        Some(Commands::Toggle { id }) => {
            let id = TaskId::new(id);
            if !store.toggle(&id) {
                println!("No task with id {}", id);
            }
        }
        Some(Commands::Edit { id, text }) => edit_task(&mut store, TaskId::new(id), &text.join(" ")),
        Some(Commands::Rm { id }) => {
            let id = TaskId::new(id);
            if !store.remove(&id) {
                println!("No task with id {}", id);
            }
        }
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => {}
    }

    Ok(())
}

/// Logging is best effort: a broken log directory never blocks the task list.
fn start_logging(level: &str, data_dir: &std::path::Path) -> Option<LoggerHandle> {
    match logging::init_logging(level, &data_dir.join("logs")) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    }
}

fn edit_task<S: KeyValueStore>(store: &mut TaskStore<S>, id: TaskId, text: &str) {
    store.begin_edit(&id);
    if store.edit_session().is_none() {
        println!("No task with id {}", id);
        return;
    }
    store.update_draft(text);
    if !store.commit_edit() {
        println!("Text is blank; task left unchanged");
    }
}

fn print_tasks(projection: &Projection) {
    let labels: Vec<String> = Filter::ALL
        .iter()
        .map(|filter| projection.filter_label(*filter))
        .collect();
    println!("{}", labels.join(" | "));

    if let Some(message) = projection.empty_message() {
        println!("{}", EMPTY_STATE_TITLE);
        println!("{}", message);
    }

    for task in &projection.visible {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        println!("{} {}  {}", checkbox, task.id, task.text);
    }

    if let Some(items_left) = projection.footer() {
        println!("{}", items_left);
    }
}

fn run_tui<S: KeyValueStore>(app: &mut App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend, S: KeyValueStore>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
