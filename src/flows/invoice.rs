use crate::client::ApiClient;
use crate::models::invoice::InvoiceView;

use super::{FetchGate, Notification};

/// View-model of the invoice dialog: fetch whichever wire shape the backend
/// answers with, normalize once, render from the view only.
pub struct InvoiceFlow {
    client: ApiClient,
    gate: FetchGate,
    invoice_id: i64,
    pub view: Option<InvoiceView>,
    pub notification: Option<Notification>,
}

impl InvoiceFlow {
    pub fn open(client: ApiClient, invoice_id: i64) -> Self {
        Self {
            client,
            gate: FetchGate::new(),
            invoice_id,
            view: None,
            notification: None,
        }
    }

    pub async fn load(&mut self) {
        let token = self.gate.begin();
        let result = self.client.fetch_invoice(self.invoice_id).await;
        if !self.gate.admits(token) {
            return;
        }

        match result {
            Ok(payload) => {
                self.view = Some(InvoiceView::from_payload(payload));
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }

    /// Server-side print/email; requires a loaded view for the booking id.
    pub async fn print(&mut self) {
        let Some(view) = &self.view else {
            self.notification = Some(Notification::warning("hóa đơn chưa được tải"));
            return;
        };

        match self.client.print_invoice(view.booking_id).await {
            Ok(_) => {
                self.notification = Some(Notification::success("Đã gửi hóa đơn đến máy in"));
            }
            Err(err) => {
                self.notification = Notification::from_api_error(&err);
            }
        }
    }
}
