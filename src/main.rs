use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::event::KeyEventKind;

use telemon::app::App;
use telemon::config::{self, Config, load_config, load_config_from_path};
use telemon::driver::{JsonLinesSink, PollDriver};
use telemon::event::{Event, EventHandler};
use telemon::logging;
use telemon::system::collector::Collector;
use telemon::system::sampler::Sampler;
use telemon::ui::{self, theme::Theme};

#[derive(Parser)]
#[command(
    name = "telemon",
    about = "Live CPU, RAM and disk telemetry in the terminal"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Number of samples kept for each chart
    #[arg(long)]
    history: Option<usize>,

    /// Print one JSON snapshot per poll to stdout instead of drawing the dashboard.
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Stop after this many polls (headless mode only).
    #[arg(long, requires = "headless")]
    iterations: Option<u64>,

    /// Log file path. Defaults to the user cache directory.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write log records as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = load_config_for_cli(&cli);

    let sampler = Sampler::new(Collector::new(), config.general.history_length)
        .wrap_err("failed to read initial system metrics")?;
    let mut driver = PollDriver::new(sampler, config.refresh_interval());

    tracing::info!(
        refresh = ?driver.period(),
        history = config.general.history_length,
        headless = cli.headless,
        "starting telemon"
    );

    if cli.headless {
        return run_headless(&mut driver, cli.iterations).await;
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, &mut driver, &config).await;

    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    driver: &mut PollDriver<Collector>,
    config: &Config,
) -> Result<()> {
    let devices = driver
        .sampler()
        .registry()
        .iter()
        .map(|(device, _)| device.to_string())
        .collect();
    let mut app = App::new(
        devices,
        driver.sampler().ram_total_gb(),
        config.general.history_length,
        driver.period(),
        Theme::default(),
    );
    let mut events = EventHandler::new();

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    return Err(eyre!("terminal input closed"));
                };
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = app.map_key(key);
                        app.dispatch(action);
                        if app.take_refresh_request() {
                            driver.poll_once(&mut app);
                            driver.reset_schedule();
                        }
                    }
                    Event::Key(_) | Event::Resize => {}
                }
            }
            _ = driver.tick() => {
                driver.poll_once(&mut app);
            }
        }
        terminal.draw(|frame| ui::draw(frame, &app))?;
    }

    let stats = driver.stats();
    tracing::info!(
        attempts = stats.attempts,
        rendered = stats.rendered,
        skipped = stats.skipped,
        "dashboard closed"
    );
    Ok(())
}

async fn run_headless(driver: &mut PollDriver<Collector>, iterations: Option<u64>) -> Result<()> {
    let mut sink = JsonLinesSink::new(std::io::stdout().lock());
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    driver.run(&mut sink, iterations, shutdown).await;
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => logging::default_log_path()
            .ok_or_else(|| eyre!("no cache directory available; pass --log-file"))?,
    };
    logging::init_file_logging(&path, cli.log_json)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(history) = cli.history {
        config.general.history_length = history;
    }

    config
}
