use ticket_purchase_service::adapter::driver::rest_api::{create_router, AppState, ApiError};
use ticket_purchase_service::adapter::driver::response_dto::PurchaseResponse;
use ticket_purchase_service::application::TicketPurchaseService;
use ticket_purchase_service::domain::error::ValidationError;
use ticket_purchase_service::domain::model::{
    AccountId, RequestEntry, TicketType, TicketTypeRequest,
};
use ticket_purchase_service::domain::port::{Logger, SeatReservationService, TicketPaymentService};
use ticket_purchase_service::domain::service::PriceTable;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// 外部サービスの呼び出し順の記録（両方のモックで共有する）
type CallLog = Arc<Mutex<Vec<&'static str>>>;

// テスト用のモック支払いサービス
#[derive(Clone, Default)]
struct MockPaymentService {
    payments: Arc<Mutex<Vec<(AccountId, u64)>>>,
    calls: CallLog,
}

impl TicketPaymentService for MockPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        self.payments
            .lock()
            .unwrap()
            .push((account_id, total_amount_to_pay));
        self.calls.lock().unwrap().push("payment");
    }
}

// テスト用のモック座席予約サービス
#[derive(Clone, Default)]
struct MockReservationService {
    reservations: Arc<Mutex<Vec<(AccountId, u32)>>>,
    calls: CallLog,
}

impl SeatReservationService for MockReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        self.reservations
            .lock()
            .unwrap()
            .push((account_id, total_seats_to_allocate));
        self.calls.lock().unwrap().push("reservation");
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn debug(&self, _: &str, _: &str, _: Option<Uuid>, _: Option<HashMap<String, String>>) {}
    fn info(&self, _: &str, _: &str, _: Option<Uuid>, _: Option<HashMap<String, String>>) {}
    fn warn(&self, _: &str, _: &str, _: Option<Uuid>, _: Option<HashMap<String, String>>) {}
    fn error(&self, _: &str, _: &str, _: Option<Uuid>, _: Option<HashMap<String, String>>) {}
}

struct TestContext {
    service: TicketPurchaseService<MockPaymentService, MockReservationService>,
    payment: MockPaymentService,
    reservation: MockReservationService,
}

impl TestContext {
    fn new() -> Self {
        let calls = CallLog::default();
        let payment = MockPaymentService {
            calls: calls.clone(),
            ..Default::default()
        };
        let reservation = MockReservationService {
            calls,
            ..Default::default()
        };
        let service = TicketPurchaseService::new(
            payment.clone(),
            reservation.clone(),
            PriceTable::default(),
            Arc::new(SilentLogger),
        );
        Self {
            service,
            payment,
            reservation,
        }
    }

    fn payments(&self) -> Vec<(AccountId, u64)> {
        self.payment.payments.lock().unwrap().clone()
    }

    fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.reservation.reservations.lock().unwrap().clone()
    }

    fn calls(&self) -> Vec<&'static str> {
        self.payment.calls.lock().unwrap().clone()
    }

    fn assert_no_collaborator_calls(&self) {
        assert!(self.payments().is_empty(), "支払いは呼び出されないはず");
        assert!(self.reservations().is_empty(), "座席予約は呼び出されないはず");
    }
}

fn request(ticket_type: TicketType, count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, count).unwrap()
}

fn create_test_server() -> (TestServer, MockPaymentService, MockReservationService) {
    let context = TestContext::new();
    let payment = context.payment.clone();
    let reservation = context.reservation.clone();
    let app = create_router().with_state(AppState {
        purchase_service: Arc::new(context.service),
    });
    (TestServer::new(app).unwrap(), payment, reservation)
}

#[test]
fn test_concrete_purchase_scenario() {
    let context = TestContext::new();
    let requests = vec![
        request(TicketType::Adult, 2),
        request(TicketType::Child, 3),
        request(TicketType::Infant, 1),
    ];

    let totals = context.service.purchase(123, &requests).unwrap();

    assert_eq!(totals.total_amount(), 70);
    assert_eq!(totals.total_seats(), 5);

    let account_id = AccountId::new(123).unwrap();
    assert_eq!(context.payments(), vec![(account_id, 70)]);
    assert_eq!(context.reservations(), vec![(account_id, 5)]);
}

#[test]
fn test_payment_precedes_reservation() {
    let context = TestContext::new();

    context
        .service
        .purchase(
            7,
            &[request(TicketType::Adult, 1), request(TicketType::Infant, 1)],
        )
        .unwrap();

    assert_eq!(context.calls(), vec!["payment", "reservation"]);
}

#[test]
fn test_rejected_purchase_records_no_calls() {
    let context = TestContext::new();

    let _ = context.service.purchase(7, &[request(TicketType::Infant, 1)]);

    assert!(context.calls().is_empty());
}

#[test]
fn test_twenty_tickets_is_allowed() {
    let context = TestContext::new();
    let requests = vec![
        request(TicketType::Adult, 10),
        request(TicketType::Child, 5),
        request(TicketType::Infant, 5),
    ];

    let totals = context.service.purchase(1, &requests).unwrap();

    assert_eq!(totals.total_amount(), 250);
    assert_eq!(totals.total_seats(), 15);
}

#[test]
fn test_twenty_one_tickets_is_rejected() {
    let context = TestContext::new();
    let requests = vec![
        request(TicketType::Adult, 12),
        request(TicketType::Child, 8),
        request(TicketType::Infant, 1),
    ];

    assert_eq!(
        context.service.purchase(123, &requests),
        Err(ValidationError::MaxTicketsExceeded)
    );
    context.assert_no_collaborator_calls();
}

#[test]
fn test_child_or_infant_without_adult() {
    let context = TestContext::new();

    assert_eq!(
        context.service.purchase(1, &[request(TicketType::Child, 1)]),
        Err(ValidationError::AdultRequiredForChildOrInfant)
    );
    assert_eq!(
        context.service.purchase(1, &[request(TicketType::Infant, 1)]),
        Err(ValidationError::AdultRequiredForChildOrInfant)
    );
    context.assert_no_collaborator_calls();
}

#[test]
fn test_infants_exceeding_adults() {
    let context = TestContext::new();

    assert_eq!(
        context.service.purchase(
            1,
            &[request(TicketType::Adult, 1), request(TicketType::Infant, 2)]
        ),
        Err(ValidationError::AdultCountBelowInfantCount)
    );
    context.assert_no_collaborator_calls();

    let totals = context
        .service
        .purchase(
            1,
            &[request(TicketType::Adult, 2), request(TicketType::Infant, 2)],
        )
        .unwrap();
    assert_eq!(totals.total_amount(), 40);
    assert_eq!(totals.total_seats(), 2);
}

#[test]
fn test_empty_and_malformed_request_lists() {
    let context = TestContext::new();

    assert_eq!(
        context.service.purchase(123, &[]),
        Err(ValidationError::EmptyOrMalformedRequestList)
    );

    let entries = vec![
        RequestEntry::Malformed("[]".to_string()),
        RequestEntry::Malformed("\"ssks\"".to_string()),
        RequestEntry::Malformed("123".to_string()),
        RequestEntry::from(request(TicketType::Adult, 1)),
    ];
    assert_eq!(
        context.service.purchase_tickets(123, &entries),
        Err(ValidationError::EmptyOrMalformedRequestList)
    );
    context.assert_no_collaborator_calls();
}

#[test]
fn test_zero_count_cannot_reach_pricing() {
    // 枚数0のリクエストは作成できないため、料金計算には到達しない
    for ticket_type in TicketType::ALL {
        assert_eq!(
            TicketTypeRequest::new(ticket_type, 0),
            Err(ValidationError::InvalidTicketCount)
        );
    }
}

#[tokio::test]
async fn test_rest_purchase_success() {
    let (server, payment, reservation) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({
            "account_id": 123,
            "ticket_type_requests": [
                { "ticket_type": "ADULT", "no_of_tickets": 2 },
                { "ticket_type": "CHILD", "no_of_tickets": 3 },
                { "ticket_type": "INFANT", "no_of_tickets": 1 }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: PurchaseResponse = response.json();
    assert_eq!(body.account_id, 123);
    assert_eq!(body.total_amount, 70);
    assert_eq!(body.total_seats, 5);

    let account_id = AccountId::new(123).unwrap();
    assert_eq!(*payment.payments.lock().unwrap(), vec![(account_id, 70)]);
    assert_eq!(
        *reservation.reservations.lock().unwrap(),
        vec![(account_id, 5)]
    );
}

#[tokio::test]
async fn test_rest_invalid_account_ids() {
    let (server, payment, _) = create_test_server();

    for account_id in [json!(null), json!("cle"), json!(4.23), json!(0)] {
        let response = server
            .post("/purchases")
            .json(&json!({
                "account_id": account_id,
                "ticket_type_requests": [{ "ticket_type": "ADULT", "no_of_tickets": 1 }]
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: ApiError = response.json();
        assert_eq!(error.code, "INVALID_ACCOUNT_ID");
    }

    assert!(payment.payments.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rest_whole_number_float_account_id() {
    let (server, payment, _) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({
            "account_id": 1.0,
            "ticket_type_requests": [{ "ticket_type": "ADULT", "no_of_tickets": 2.0 }]
        }))
        .await;

    response.assert_status_ok();
    let body: PurchaseResponse = response.json();
    assert_eq!(body.account_id, 1);
    assert_eq!(body.total_amount, 40);
    assert_eq!(
        *payment.payments.lock().unwrap(),
        vec![(AccountId::new(1).unwrap(), 40)]
    );
}

#[tokio::test]
async fn test_rest_account_id_beyond_i64() {
    let (server, _, reservation) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({
            "account_id": 10_000_000_000_000_000_000u64,
            "ticket_type_requests": [{ "ticket_type": "ADULT", "no_of_tickets": 1 }]
        }))
        .await;

    response.assert_status_ok();
    let body: PurchaseResponse = response.json();
    assert_eq!(body.account_id, 10_000_000_000_000_000_000);
    assert_eq!(reservation.reservations.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rest_huge_ticket_count_exceeds_limit() {
    let (server, payment, _) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({
            "account_id": 123,
            "ticket_type_requests": [{ "ticket_type": "ADULT", "no_of_tickets": 5_000_000_000u64 }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: ApiError = response.json();
    assert_eq!(error.code, "MAX_TICKETS_EXCEEDED");
    assert!(payment.payments.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rest_no_tickets_provided() {
    let (server, _, _) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({ "account_id": 123 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: ApiError = response.json();
    assert_eq!(error.code, "EMPTY_OR_MALFORMED_REQUEST_LIST");
}

#[tokio::test]
async fn test_rest_malformed_request_elements() {
    let (server, _, reservation) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({
            "account_id": 123,
            "ticket_type_requests": [[], "ssks", 123, { "ticket_type": "ADULT", "no_of_tickets": 1 }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: ApiError = response.json();
    assert_eq!(error.code, "EMPTY_OR_MALFORMED_REQUEST_LIST");
    assert!(reservation.reservations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rest_adult_required() {
    let (server, _, _) = create_test_server();

    let response = server
        .post("/purchases")
        .json(&json!({
            "account_id": 123,
            "ticket_type_requests": [
                { "ticket_type": "CHILD", "no_of_tickets": 9 },
                { "ticket_type": "INFANT", "no_of_tickets": 9 }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: ApiError = response.json();
    assert_eq!(error.code, "ADULT_REQUIRED_FOR_CHILD_OR_INFANT");
    assert_eq!(
        error.error,
        "There must be at least one adult for child or infant tickets."
    );
}

#[tokio::test]
async fn test_rest_health_check() {
    let (server, _, _) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}
