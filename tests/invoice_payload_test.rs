mod common;

use bigdecimal::BigDecimal;
use std::str::FromStr;

use common::MockBackend;
use frontdesk_client::flows::invoice::InvoiceFlow;
use frontdesk_client::models::invoice::{InvoicePayload, InvoiceView};

fn dec(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw).unwrap()
}

const LEGACY: &str = r#"{
    "invoice_code": "INV-0001",
    "booking_id": 2,
    "customer_name": "Nguyễn Văn A",
    "room_amount": "2400000.00",
    "service_amount": "200000.00",
    "discount_amount": "100000.00",
    "total_amount": "2500000.00",
    "services": [
        {"service_id": 5, "name": "Ăn sáng", "quantity": 2, "price": "100000.00"}
    ]
}"#;

const STRUCTURED: &str = r#"{
    "invoice": {"code": "INV-0001"},
    "booking": {"id": 2, "customer": {"id": 21, "full_name": "Nguyễn Văn A"}},
    "meta": {"issued_at": "2026-08-15 12:05:00", "is_hourly": false},
    "totals": {
        "saved": {
            "room_amount": "2400000.00",
            "service_amount": "200000.00",
            "amenity_amount": "0.00",
            "discount_amount": "100000.00",
            "total_amount": "2500000.00"
        }
    },
    "service_lines": [
        {"service_id": 5, "name": "Ăn sáng", "quantity": 2, "price": "100000.00"}
    ],
    "amenity_lines": []
}"#;

#[test]
fn the_union_discriminates_on_totals_and_meta() {
    let legacy: InvoicePayload = serde_json::from_str(LEGACY).unwrap();
    assert!(matches!(legacy, InvoicePayload::Legacy(_)));

    let structured: InvoicePayload = serde_json::from_str(STRUCTURED).unwrap();
    assert!(matches!(structured, InvoicePayload::Structured(_)));
}

#[test]
fn both_shapes_normalize_to_the_same_view() {
    let legacy = InvoiceView::from_payload(serde_json::from_str(LEGACY).unwrap());
    let structured = InvoiceView::from_payload(serde_json::from_str(STRUCTURED).unwrap());

    assert_eq!(legacy.code, structured.code);
    assert_eq!(legacy.booking_id, structured.booking_id);
    assert_eq!(legacy.customer_name, structured.customer_name);
    assert_eq!(legacy.amounts.total, structured.amounts.total);
    assert_eq!(legacy.amounts.room, dec("2400000.00"));
    assert_eq!(legacy.amounts.service, dec("200000.00"));
    assert_eq!(legacy.amounts.amenity, dec("0"));
    assert_eq!(legacy.service_lines.len(), structured.service_lines.len());

    // only the structured shape carries an issue timestamp
    assert!(legacy.issued_at.is_none());
    assert!(structured.issued_at.is_some());
}

#[actix_rt::test]
async fn the_invoice_flow_renders_either_wire_shape() {
    let backend = MockBackend::spawn().await;

    let mut legacy_flow = InvoiceFlow::open(backend.client(), 1);
    legacy_flow.load().await;
    let legacy = legacy_flow.view.as_ref().expect("expected a view");

    let mut structured_flow = InvoiceFlow::open(backend.client(), 2);
    structured_flow.load().await;
    let structured = structured_flow.view.as_ref().expect("expected a view");

    assert_eq!(legacy.code, structured.code);
    assert_eq!(legacy.amounts.total, structured.amounts.total);
    assert_eq!(legacy.customer_name, "Nguyễn Văn A");

    structured_flow.print().await;
    assert!(structured_flow
        .notification
        .as_ref()
        .map(|n| n.message.contains("hóa đơn"))
        .unwrap_or(false));

    backend.stop().await;
}
