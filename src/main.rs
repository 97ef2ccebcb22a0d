use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use capdemo::app::App;
use capdemo::batch;
use capdemo::config::{self, Config};
use capdemo::provider;
use capdemo::session::{InputState, Session, TextStyle};

/// Interactive form demo with optional provider plugins
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/capdemo/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run without a provider, using only the built-in fallbacks
    #[arg(long)]
    no_provider: bool,

    /// Provider package to look up
    #[arg(long, value_name = "NAME")]
    package: Option<String>,

    /// Initial value of the name field
    #[arg(long)]
    name: Option<String>,

    /// Initial text style: bold, italic or code
    #[arg(long)]
    style: Option<TextStyle>,

    /// Initial comma-separated numbers
    #[arg(long)]
    numbers: Option<String>,

    /// Calculate once and print every output instead of starting the UI
    #[arg(long)]
    batch: bool,

    /// Print batch output as JSON
    #[arg(long, requires = "batch")]
    json: bool,
}

impl Args {
    /// Command-line values override the config file
    fn apply_to(&self, config: &mut Config) {
        if self.no_provider {
            config.provider.enabled = false;
        }
        if let Some(package) = &self.package {
            config.provider.package = package.clone();
        }
        if let Some(name) = &self.name {
            config.form.name = name.clone();
        }
        if let Some(style) = self.style {
            config.form.text_style = style;
        }
        if let Some(numbers) = &self.numbers {
            config.form.numbers = numbers.clone();
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    args.apply_to(&mut config);

    // Discover the provider once; the descriptor is shared read-only
    let capabilities = Rc::new(provider::discover(&config.provider));
    let mut session = Session::new(capabilities, InputState::from_config(&config.form));

    if args.batch {
        batch::evaluate(&mut session);
        let output = if args.json {
            batch::render_json(&session)?
        } else {
            batch::render_text(&session)
        };
        println!("{}", output);
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableBracketedPaste)?;

    let result = run(terminal, App::new(session));

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file under the cache dir; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|d| d.join("capdemo")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("capdemo.log")) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
