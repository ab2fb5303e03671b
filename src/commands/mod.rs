pub mod form;
pub mod help;

use tracing::error;

use crate::api::backend::PaymentBackend;
use crate::display::Renderer;
use crate::services::{Authenticator, Printer, Session};
use crate::utils::PosError;

/// What the input loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a command line can act on
pub struct Terminal<B, R> {
    pub session: Session<B, R>,
    pub authenticator: Box<dyn Authenticator>,
    pub printer: Box<dyn Printer>,
}

impl<B, R> Terminal<B, R>
where
    B: PaymentBackend,
    R: Renderer,
{
    pub fn new(
        session: Session<B, R>,
        authenticator: Box<dyn Authenticator>,
        printer: Box<dyn Printer>,
    ) -> Self {
        Self {
            session,
            authenticator,
            printer,
        }
    }

    /// Parse and run one input line
    pub async fn handle_line(&mut self, line: &str) -> Flow {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Flow::Continue;
        };

        let result = match command.to_lowercase().as_str() {
            "help" | "?" => help::execute(),
            "quit" | "exit" => return Flow::Quit,
            "login" => self.login(args).await,
            "logout" => {
                self.session.end_session();
                Ok(())
            }
            "set" => form::execute(&mut self.session, args),
            "form" => form::show(&self.session),
            "clear" => {
                self.session.clear_form();
                Ok(())
            }
            "submit" | "confirm" => self.session.submit().await.map(|_| ()).map_err(user_message),
            "history" => self.session.show_history().await.map(|_| ()).map_err(user_message),
            "print" => self
                .session
                .print_receipt(&mut *self.printer)
                .map(|_| ())
                .map_err(user_message),
            other => Err(format!("Unknown command `{}`. Type `help`", other)),
        };

        if let Err(e) = result {
            error!("Error executing command {}: {}", command, e);
            eprintln!("❌ {}", e);
        }

        Flow::Continue
    }

    async fn login(&mut self, args: &[&str]) -> Result<(), String> {
        let [username, password] = args else {
            return Err("Usage: login <username> <password>".to_string());
        };
        self.session
            .login(&*self.authenticator, username, password)
            .await
            .map_err(user_message)
    }
}

/// Errors already shown on the display don't need repeating in full
fn user_message(err: PosError) -> String {
    match err {
        PosError::Validation(e) => format!("Form not submitted: {}", e),
        PosError::History(_) => "History unavailable".to_string(),
        other => other.to_string(),
    }
}
