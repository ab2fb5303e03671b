use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use pos_terminal::api::backend::BackendClient;
use pos_terminal::commands::{Flow, Terminal};
use pos_terminal::display::TerminalRenderer;
use pos_terminal::services::{ConfigAuthenticator, Session, StdoutPrinter};
use pos_terminal::Config;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    for directive in ["pos_terminal=debug", "reqwest=warn", "hyper=warn"] {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    info!("💳 Starting POS terminal...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Backend: {} (test mode: {})",
        config.backend_url, config.test_mode
    );

    let session = Session::new(
        BackendClient::new(config.backend_url.clone()),
        TerminalRenderer,
        config.test_mode,
    );
    let mut terminal = Terminal::new(
        session,
        Box::new(ConfigAuthenticator::new(&config)),
        Box::new(StdoutPrinter),
    );

    println!("Type `help` for commands, `login <username> <password>` to begin.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if terminal.handle_line(&line).await == Flow::Quit {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    terminal.session.end_session();
    info!("POS terminal stopped");
}
