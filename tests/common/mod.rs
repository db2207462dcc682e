use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use serde_json::json;

use frontdesk_client::ApiClient;

pub const TEST_TOKEN: &str = "test-token-123";

/// In-process PMS backend with canned JSON handlers; each test spins one on an
/// ephemeral port and points a real `ApiClient` at it.
pub struct MockBackend {
    pub base_url: String,
    pub cancel_calls: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        let cancel_calls = Arc::new(AtomicUsize::new(0));
        let cancel_data = web::Data::new(cancel_calls.clone());

        let server = HttpServer::new(move || {
            App::new().app_data(cancel_data.clone()).service(
                web::scope("/api")
                    .route("/bookings", web::get().to(list_bookings))
                    .route("/bookings", web::post().to(create_booking))
                    .route("/bookings/{id}", web::get().to(get_booking))
                    .route("/bookings/{id}", web::put().to(update_booking))
                    .route("/bookings/{id}/cancel", web::post().to(cancel_booking))
                    .route("/bookings/{id}/add-services", web::post().to(mutate_services))
                    .route("/bookings/{id}/remove-service", web::post().to(mutate_services))
                    .route("/check-in/{id}", web::get().to(get_booking))
                    .route("/check-in/{id}", web::post().to(commit_checkin))
                    .route("/check-out/{id}", web::get().to(get_booking))
                    .route("/pay-cash/{id}", web::post().to(pay_cash))
                    .route("/vnpay/create-payment", web::post().to(create_payment))
                    .route("/vnpay/return", web::get().to(vnpay_return))
                    .route("/invoices/{id}", web::get().to(get_invoice))
                    .route(
                        "/invoices/booking/{id}/print",
                        web::get().to(print_invoice),
                    )
                    .route("/available-rooms", web::post().to(available_rooms)),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind mock backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base_url: format!("http://{}/api", addr),
            cancel_calls,
            handle,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Some(TEST_TOKEN.to_string()))
            .expect("failed to build client")
    }

    pub fn client_without_token(&self) -> ApiClient {
        ApiClient::new(&self.base_url, None).expect("failed to build client")
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("Bearer "))
        .unwrap_or(false)
}

fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({"message": "Unauthenticated"}))
}

pub fn booking_json(id: i64, status: &str, check_in: &str, check_out: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "check_in_date": check_in,
        "check_out_date": check_out,
        "is_hourly": false,
        "deposit_amount": "500000.00",
        "raw_total": "2600000.00",
        "discount_amount": "100000.00",
        "total_amount": "2500000.00",
        "rooms": [
            {
                "id": 11,
                "room_number": "101",
                "rate": "500000.00",
                "room_type": {
                    "name": "Deluxe",
                    "max_occupancy": 2,
                    "base_rate": "500000.00",
                    "amenities": [{"name": "Nước suối", "quantity": 2}]
                }
            },
            {
                "id": 12,
                "room_number": "102",
                "rate": "700000.00",
                "room_type": {
                    "name": "Suite",
                    "max_occupancy": 4,
                    "base_rate": "700000.00",
                    "amenities": []
                }
            }
        ],
        "services": [
            {
                "service_id": 5,
                "name": "Ăn sáng",
                "quantity": 2,
                "price": "100000.00",
                "total": "200000.00"
            }
        ],
        "amenities": [],
        "promotions": [],
        "customer": {
            "id": 21,
            "full_name": "Nguyễn Văn A",
            "cccd": "012345678901",
            "phone": "0901234567",
            "nationality": "Việt Nam"
        }
    })
}

async fn list_bookings(req: HttpRequest) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(json!([
        booking_json(1, "pending", "2026-08-20 14:00:00", "2026-08-22 12:00:00"),
        booking_json(2, "checked-in", "2026-08-09 14:00:00", "2026-08-15 12:00:00"),
        // overdue and never checked in: the listing reclassifies this one
        booking_json(3, "confirmed", "2026-08-01 14:00:00", "2026-08-03 12:00:00"),
    ]))
}

async fn get_booking(req: HttpRequest, path: web::Path<i64>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    match path.into_inner() {
        403 => HttpResponse::Forbidden().json(json!({"message": "forbidden"})),
        404 => HttpResponse::NotFound().json(json!({"message": "Không tìm thấy đặt phòng"})),
        500 => HttpResponse::InternalServerError().json(json!({"message": "boom"})),
        2 => HttpResponse::Ok().json(booking_json(
            2,
            "checked-in",
            "2026-08-09 14:00:00",
            "2026-08-15 12:00:00",
        )),
        7 => {
            // incomplete snapshot: customer missing
            let mut body = booking_json(7, "pending", "2026-08-20 14:00:00", "2026-08-22 12:00:00");
            body["customer"] = serde_json::Value::Null;
            HttpResponse::Ok().json(body)
        }
        id => HttpResponse::Ok().json(booking_json(
            id,
            "pending",
            "2026-08-10 14:00:00",
            "2026-08-12 12:00:00",
        )),
    }
}

async fn create_booking(req: HttpRequest, _body: web::Json<serde_json::Value>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(booking_json(
        99,
        "pending",
        "2026-08-20 14:00:00",
        "2026-08-22 12:00:00",
    ))
}

async fn update_booking(
    req: HttpRequest,
    path: web::Path<i64>,
    _body: web::Json<serde_json::Value>,
) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(booking_json(
        path.into_inner(),
        "confirmed",
        "2026-08-21 14:00:00",
        "2026-08-23 12:00:00",
    ))
}

async fn cancel_booking(
    req: HttpRequest,
    _path: web::Path<i64>,
    calls: web::Data<Arc<AtomicUsize>>,
) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    calls.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(json!({"message": "Đã hủy đặt phòng"}))
}

async fn commit_checkin(req: HttpRequest, path: web::Path<i64>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(booking_json(
        path.into_inner(),
        "checked-in",
        "2026-08-10 14:00:00",
        "2026-08-12 12:00:00",
    ))
}

async fn mutate_services(
    req: HttpRequest,
    path: web::Path<i64>,
    _body: web::Json<serde_json::Value>,
) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(booking_json(
        path.into_inner(),
        "checked-in",
        "2026-08-09 14:00:00",
        "2026-08-15 12:00:00",
    ))
}

async fn pay_cash(req: HttpRequest, _path: web::Path<i64>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(json!({"message": "Trả phòng thành công", "invoice_id": 2}))
}

async fn create_payment(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    let booking_id = body["booking_id"].as_i64().unwrap_or(0);
    HttpResponse::Ok().json(json!({
        "payment_url": format!(
            "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html?vnp_TxnRef={}",
            booking_id
        )
    }))
}

async fn vnpay_return(
    req: HttpRequest,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    let code = query
        .get("vnp_ResponseCode")
        .cloned()
        .unwrap_or_else(|| "99".to_string());
    let message = if code == "00" {
        "Giao dịch thành công"
    } else {
        "Giao dịch thất bại"
    };
    HttpResponse::Ok().json(json!({
        "response_code": code,
        "message": message,
        "booking_id": 1
    }))
}

async fn get_invoice(req: HttpRequest, path: web::Path<i64>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    match path.into_inner() {
        // legacy flat shape
        1 => HttpResponse::Ok().json(json!({
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
        })),
        // structured shape
        _ => HttpResponse::Ok().json(json!({
            "invoice": {"code": "INV-0001"},
            "booking": {
                "id": 2,
                "customer": {"id": 21, "full_name": "Nguyễn Văn A"}
            },
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
        })),
    }
}

async fn print_invoice(req: HttpRequest, _path: web::Path<i64>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(json!({"message": "Đã gửi hóa đơn"}))
}

async fn available_rooms(req: HttpRequest, _body: web::Json<serde_json::Value>) -> impl Responder {
    if !authorized(&req) {
        return unauthorized_response();
    }
    HttpResponse::Ok().json(json!([
        {
            "id": 11,
            "room_number": "101",
            "rate": "500000.00",
            "room_type_name": "Deluxe",
            "max_occupancy": 2
        },
        {
            "id": 12,
            "room_number": "102",
            "rate": "700000.00",
            "room_type_name": "Suite",
            "max_occupancy": 4
        }
    ]))
}
