use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use newsdesk::{
    api::{HttpTransport, NewsClient},
    app::App,
    config::{Cli, Config, Output},
    input::{self, Action},
    link::SystemBrowser,
    logging, output,
    state::Event,
    ui,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    let transport = HttpTransport::new(config.timeout).context("Failed to build HTTP client")?;
    let client = NewsClient::new(Arc::new(transport), config.endpoint.clone(), config.params.clone());

    match config.output {
        Output::Interactive => {
            let _guard = logging::init_file(&config.log_path()?, config.verbose)?;
            tracing::info!(endpoint = %config.endpoint, "starting search screen");

            let mut terminal = setup_terminal()?;
            let res = run(&mut terminal, client, config.initial_query).await;
            restore_terminal(&mut terminal)?;
            res
        }
        Output::Human | Output::Json => {
            logging::init_stderr(config.verbose);
            let query = config.initial_query.as_str();
            let articles = client
                .search(query)
                .await
                .with_context(|| format!("News search failed for \"{}\"", query))?;

            let text = match config.output {
                Output::Json => output::format_json(query, &articles)
                    .context("Failed to serialize results as JSON")?,
                _ => output::format_human(query, &articles),
            };
            println!("{}", text);
            Ok(())
        }
    }
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: NewsClient,
    initial_query: String,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(16);

    let mut app = App::new(initial_query);
    let browser = SystemBrowser;

    loop {
        // Outcomes of background searches, in arrival order
        while let Ok(event) = rx.try_recv() {
            app.dispatch(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        match input::poll_action(app.focus)? {
            Action::Quit => break,
            Action::Down => app.move_down(),
            Action::Up => app.move_up(),

            Action::Search => {
                let (request, query) = app.begin_search();
                tracing::info!(request, %query, "news search started");
                client.spawn(request, query, tx.clone());
            }

            Action::OpenInBrowser => app.open_selected(&browser),
            Action::ToggleFocus => app.toggle_focus(),
            Action::Backspace => app.pop_char(),
            Action::QueryChar(c) => app.push_char(c),
            Action::ClearQuery => app.clear_query(),
            Action::None => {}
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
