//! Operator session: owns the form, history and last transaction for one login

use chrono::Local;
use tracing::{info, warn};

use crate::api::backend::PaymentBackend;
use crate::display::{DisplayState, Renderer};
use crate::models::{
    Currency, DisplayColor, FormFields, HistoryEntry, HistoryPanel, Network, Protocol,
    TransactionResult,
};
use crate::services::auth_service::Authenticator;
use crate::services::history_service::{self, HistoryStore};
use crate::services::receipt_service::{Printer, Receipt};
use crate::services::{request_service, submit_service, validation_service};
use crate::utils::{format_card_number, format_expiry, PosError};

pub struct Session<B, R> {
    backend: B,
    renderer: R,
    test_mode: bool,
    active: bool,
    form: FormFields,
    history: HistoryStore,
    last_transaction: Option<HistoryEntry>,
    submit_enabled: bool,
}

impl<B, R> Session<B, R>
where
    B: PaymentBackend,
    R: Renderer,
{
    pub fn new(backend: B, renderer: R, test_mode: bool) -> Self {
        Self {
            backend,
            renderer,
            test_mode,
            active: false,
            form: FormFields::default(),
            history: HistoryStore::new(),
            last_transaction: None,
            submit_enabled: true,
        }
    }

    /// Check credentials with the authenticator and start the session on success
    pub async fn login<A>(
        &mut self,
        authenticator: &A,
        username: &str,
        password: &str,
    ) -> Result<(), PosError>
    where
        A: Authenticator + ?Sized,
    {
        if !authenticator.authenticate(username, password).await? {
            warn!("Login refused for {}", username);
            return Err(PosError::LoginFailed);
        }
        info!("Operator {} logged in", username);
        self.start_session();
        Ok(())
    }

    pub fn start_session(&mut self) {
        self.active = true;
        self.form = FormFields::default();
        self.history.clear();
        self.last_transaction = None;
        self.submit_enabled = true;
        self.renderer.set_receipt_available(false);
        self.renderer.render(&DisplayState::initial());
    }

    /// Logout: the form, receipt slot and history are all discarded
    pub fn end_session(&mut self) {
        self.clear_form();
        self.history.clear();
        self.last_transaction = None;
        self.active = false;
        info!("Session ended");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn last_transaction(&self) -> Option<&HistoryEntry> {
        self.last_transaction.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn required_auth_code_length(&self) -> usize {
        self.form.protocol.auth_code_length()
    }

    pub fn set_card_number(&mut self, value: &str) {
        self.form.card_number = format_card_number(value);
    }

    pub fn set_expiry(&mut self, value: &str) {
        self.form.expiry = format_expiry(value);
    }

    pub fn set_cvv(&mut self, value: &str) {
        self.form.cvv = value.trim().to_string();
    }

    pub fn set_auth_code(&mut self, value: &str) {
        self.form.auth_code = value.trim().to_string();
    }

    pub fn set_merchant_wallet(&mut self, value: &str) {
        self.form.merchant_wallet = value.trim().to_string();
    }

    pub fn set_amount(&mut self, value: &str) {
        self.form.amount = value.trim().to_string();
        self.render_idle_amount();
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.form.currency = currency;
        self.render_idle_amount();
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.form.protocol = protocol;
    }

    /// Switching network resets the merchant wallet to that network's default
    pub fn set_network(&mut self, network: Network) {
        self.form.network = network;
        self.form.merchant_wallet = network.default_wallet().to_string();
    }

    /// Reset the form to its defaults and show the idle screen
    pub fn clear_form(&mut self) {
        self.form = FormFields::default();
        self.renderer.set_receipt_available(false);
        self.renderer.render(&DisplayState::initial());
    }

    fn render_idle_amount(&mut self) {
        let state = DisplayState::new(
            None,
            self.form.parsed_amount(),
            self.form.currency,
            DisplayColor::Gray,
            None,
        );
        self.renderer.render(&state);
    }

    fn ensure_active(&self) -> Result<(), PosError> {
        if self.active {
            Ok(())
        } else {
            Err(PosError::NotLoggedIn)
        }
    }

    /// Validate, send and display one transaction
    ///
    /// Validation failures are shown in red and never reach the backend.
    /// Backend rejections and network failures come back as `Rejected`
    /// results, not errors.
    pub async fn submit(&mut self) -> Result<TransactionResult, PosError> {
        self.ensure_active()?;

        let amount = self.form.parsed_amount();
        let currency = self.form.currency;

        if let Err(e) = validation_service::validate(&self.form) {
            warn!("Form refused: {}", e);
            let message = e.to_string();
            self.renderer.render(&DisplayState::new(
                Some(message.as_str()),
                amount,
                currency,
                DisplayColor::Red,
                None,
            ));
            return Err(e.into());
        }

        let request = request_service::build_request(&self.form, self.test_mode)?;

        self.submit_enabled = false;
        self.renderer.set_processing(true);
        self.renderer.render(&DisplayState::new(
            Some(submit_service::processing_message(&request).as_str()),
            Some(request.amount),
            currency,
            DisplayColor::Blue,
            None,
        ));

        let result = submit_service::submit(&self.backend, &request).await;

        self.renderer.set_processing(false);
        self.submit_enabled = true;

        self.renderer.render(&DisplayState::new(
            Some(result.status.label()),
            Some(result.amount),
            result.currency,
            result.color,
            Some(result.details.as_str()),
        ));

        if result.is_success() {
            let entry = self.history.append(&result);
            self.last_transaction = Some(entry);
            self.renderer.set_receipt_available(true);
        }

        Ok(result)
    }

    /// Fetch the backend history into the store and show it
    ///
    /// A failed fetch is shown in the panel and leaves the store untouched.
    pub async fn show_history(&mut self) -> Result<usize, PosError> {
        self.ensure_active()?;
        self.renderer.render_history(&HistoryPanel::Loading);

        match self.history.fetch_all(&self.backend).await {
            Ok(entries) => {
                let panel = HistoryPanel::from_entries(entries);
                let count = entries.len();
                self.renderer.render_history(&panel);
                Ok(count)
            }
            Err(e) => {
                let panel = HistoryPanel::Failed(history_service::failure_message(&e).to_string());
                self.renderer.render_history(&panel);
                Err(e.into())
            }
        }
    }

    /// Print a receipt for the last successful transaction
    pub fn print_receipt<P>(&self, printer: &mut P) -> Result<Receipt, PosError>
    where
        P: Printer + ?Sized,
    {
        let entry = self.last_transaction.as_ref().ok_or(PosError::NoTransaction)?;
        let receipt = Receipt::from_entry(entry, Local::now());
        printer.print(&receipt.render())?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::backend::{ApiError, BackendClient, PaymentResponse};
    use crate::services::testing::{FakeBackend, RecordingRenderer};
    use crate::utils::ValidationError;
    use async_trait::async_trait;

    struct AllowAll;

    #[async_trait]
    impl Authenticator for AllowAll {
        async fn authenticate(&self, _: &str, _: &str) -> Result<bool, PosError> {
            Ok(true)
        }
    }

    struct DenyAll;

    #[async_trait]
    impl Authenticator for DenyAll {
        async fn authenticate(&self, _: &str, _: &str) -> Result<bool, PosError> {
            Ok(false)
        }
    }

    #[derive(Default)]
    struct CapturePrinter {
        documents: Vec<String>,
    }

    impl Printer for CapturePrinter {
        fn print(&mut self, document: &str) -> std::io::Result<()> {
            self.documents.push(document.to_string());
            Ok(())
        }
    }

    fn session<B: PaymentBackend>(backend: B) -> Session<B, RecordingRenderer> {
        let mut session = Session::new(backend, RecordingRenderer::default(), true);
        session.start_session();
        session
    }

    fn fill(session: &mut Session<impl PaymentBackend, RecordingRenderer>, protocol: Protocol) {
        session.set_protocol(protocol);
        session.set_card_number("4111111111111111");
        session.set_expiry("1227");
        session.set_cvv("123");
        session.set_amount("25");
        session.set_auth_code(&"7".repeat(protocol.auth_code_length()));
    }

    #[tokio::test]
    async fn test_login_starts_session() {
        let mut session = Session::new(
            FakeBackend::approving("APPR123456"),
            RecordingRenderer::default(),
            true,
        );
        assert!(matches!(session.submit().await, Err(PosError::NotLoggedIn)));

        assert!(matches!(
            session.login(&DenyAll, "admin", "nope").await,
            Err(PosError::LoginFailed)
        ));
        assert!(!session.is_active());

        session.login(&AllowAll, "admin", "password").await.unwrap();
        assert!(session.is_active());
        assert_eq!(session.renderer().last_state(), Some(&DisplayState::initial()));
        assert_eq!(
            session.form().merchant_wallet,
            "0x06674B3fa1d1d6e5813cDC18d4091D499084Bdd8"
        );
    }

    #[tokio::test]
    async fn test_missing_fields_never_call_backend() {
        let mut session = session(FakeBackend::approving("APPR123456"));
        fill(&mut session, Protocol::P101_1);
        session.set_cvv("");

        let err = session.submit().await.unwrap_err();

        assert!(matches!(err, PosError::Validation(ValidationError::MissingFields)));
        assert_eq!(session.backend.payment_calls(), 0);
        let state = session.renderer().last_state().unwrap();
        assert_eq!(state.status.as_deref(), Some("Please fill all fields"));
        assert_eq!(state.color, DisplayColor::Red);
    }

    #[tokio::test]
    async fn test_wrong_auth_length_never_calls_backend() {
        for protocol in Protocol::ALL {
            let mut session = session(FakeBackend::approving("APPR123456"));
            fill(&mut session, protocol);
            session.set_auth_code("12345");

            let result = session.submit().await;

            assert!(matches!(
                result,
                Err(PosError::Validation(ValidationError::AuthCodeLengthMismatch { .. }))
            ));
            assert_eq!(session.backend.payment_calls(), 0);
            let expected = format!("Auth code must be {} digits", protocol.auth_code_length());
            assert_eq!(
                session.renderer().last_state().unwrap().status.as_deref(),
                Some(expected.as_str())
            );
        }
    }

    #[tokio::test]
    async fn test_successful_submission_updates_history() {
        let mut session = session(FakeBackend::approving("APPR123456"));
        fill(&mut session, Protocol::P101_4);

        let result = session.submit().await.unwrap();

        assert!(result.is_success());
        assert_eq!(result.color, DisplayColor::Green);
        let renderer = session.renderer();
        assert_eq!(renderer.processing, vec![true, false]);
        assert_eq!(renderer.receipt_available, Some(true));

        let processing = &renderer.states[renderer.states.len() - 2];
        assert_eq!(processing.status.as_deref(), Some("Processing Online Sale request..."));
        assert_eq!(processing.color, DisplayColor::Blue);

        let last = renderer.last_state().unwrap();
        assert_eq!(last.status.as_deref(), Some("Confirmed Success"));
        assert_eq!(last.amount.as_deref(), Some("USD 25.00"));
        assert_eq!(last.details.as_deref(), Some("Auth Code: 123456"));

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.last_transaction().unwrap().id, 1);
        assert!(session.is_submit_enabled());
    }

    #[tokio::test]
    async fn test_off_ledger_submission() {
        let backend = FakeBackend::new(Ok(PaymentResponse {
            status: Some("success".to_string()),
            tx_hash: Some("abcdef1234567890".to_string()),
            payout_type: Some("USDT-TRC-20".to_string()),
            ..Default::default()
        }));
        let mut session = session(backend);
        fill(&mut session, Protocol::P201_5);
        session.set_network(Network::Trc20);

        let result = session.submit().await.unwrap();

        assert_eq!(result.color, DisplayColor::Orange);
        assert_eq!(result.details, "Hash: abcdef1234...");
        let sent = session.backend.last_request().unwrap();
        assert_eq!(sent.payout_type.as_deref(), Some("USDT-TRC-20"));
        assert_eq!(sent.merchant_wallet, "TKMpfYsTRWJ8W4QUUiUc6XT8cJ8UWkzSLT");
        assert_eq!(sent.card_number, "4111 1111 1111 1111");
        assert_eq!(sent.expiry, "12/27");
    }

    #[tokio::test]
    async fn test_rejection_is_not_recorded() {
        let backend = FakeBackend::new(Err(ApiError::Rejected {
            status: 400,
            message: Some("Card declined".to_string()),
        }));
        let mut session = session(backend);
        fill(&mut session, Protocol::P101_1);

        let result = session.submit().await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.details, "Card declined");
        assert!(session.history().is_empty());
        assert!(session.last_transaction().is_none());
        assert!(session.is_submit_enabled());
    }

    #[tokio::test]
    async fn test_confirmation_without_ids_is_not_recorded() {
        let mut session = session(FakeBackend::new(Ok(PaymentResponse::default())));
        fill(&mut session, Protocol::P101_1);

        let result = session.submit().await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.details, "Network Error");
        assert!(session.history().is_empty());
        assert!(session.last_transaction().is_none());
        assert_eq!(session.renderer().receipt_available, Some(false));
        assert!(session.is_submit_enabled());
    }

    #[tokio::test]
    async fn test_network_failure_reenables_submit() {
        let mut session = session(BackendClient::new("http://127.0.0.1:1"));
        fill(&mut session, Protocol::P101_1);

        let result = session.submit().await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.details, "Network Error");
        assert!(session.is_submit_enabled());
        assert!(!session.renderer().is_processing());
        assert_eq!(session.renderer().last_state().unwrap().color, DisplayColor::Red);
    }

    #[tokio::test]
    async fn test_ids_keep_counting_across_history_fetch() {
        let backend = FakeBackend::approving("APPR123456").with_history(Ok(vec![
            Default::default(),
            Default::default(),
        ]));
        let mut session = session(backend);
        fill(&mut session, Protocol::P101_1);

        session.submit().await.unwrap();
        assert_eq!(session.show_history().await.unwrap(), 2);
        session.submit().await.unwrap();

        assert_eq!(session.last_transaction().unwrap().id, 3);
        assert_eq!(session.backend.history_calls(), 1);
        assert_eq!(
            session.renderer().panels.first(),
            Some(&HistoryPanel::Loading)
        );
    }

    #[tokio::test]
    async fn test_history_failure_shown_in_panel() {
        let mut session = session(FakeBackend::unreachable());

        assert!(session.show_history().await.is_err());
        assert_eq!(
            session.renderer().panels.last(),
            Some(&HistoryPanel::Failed("Network error. Please try again.".to_string()))
        );
    }

    #[tokio::test]
    async fn test_print_receipt() {
        let mut session = session(FakeBackend::approving("APPR123456"));
        let mut printer = CapturePrinter::default();
        assert!(matches!(
            session.print_receipt(&mut printer),
            Err(PosError::NoTransaction)
        ));

        fill(&mut session, Protocol::P101_1);
        session.submit().await.unwrap();
        let receipt = session.print_receipt(&mut printer).unwrap();

        assert_eq!(receipt.amount, "USD 25.00");
        assert_eq!(printer.documents.len(), 1);
        assert!(printer.documents[0].contains("Auth Code: 123456"));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let mut session = session(FakeBackend::approving("APPR123456"));
        fill(&mut session, Protocol::P101_1);
        session.submit().await.unwrap();
        session.submit().await.unwrap();
        assert_eq!(session.history().len(), 2);

        session.end_session();

        assert_eq!(session.history().len(), 0);
        assert!(session.last_transaction().is_none());
        assert_eq!(session.form(), &FormFields::default());
        assert_eq!(session.renderer().receipt_available, Some(false));
        assert!(!session.is_active());
    }

    #[test]
    fn test_form_inputs() {
        let mut session = session(FakeBackend::approving("APPR123456"));

        session.set_protocol(Protocol::P201_1);
        assert_eq!(session.required_auth_code_length(), 6);

        session.set_network(Network::Trc20);
        assert_eq!(session.form().merchant_wallet, Network::Trc20.default_wallet());

        session.set_amount("3.5");
        session.set_currency(Currency::Eur);
        let state = session.renderer().last_state().unwrap();
        assert!(state.status.is_none());
        assert_eq!(state.amount.as_deref(), Some("EUR 3.50"));
        assert_eq!(state.color, DisplayColor::Gray);

        session.set_amount("");
        assert!(session.renderer().last_state().unwrap().amount.is_none());
    }
}
