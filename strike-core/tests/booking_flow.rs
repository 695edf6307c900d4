use axum::{http::StatusCode, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use strike_catalog::{PricingConfig, PricingEngine};
use strike_core::{
    ApiError, BookingForm, ConfirmationView, FieldId, HttpBookingClient, SubmissionState, SubmitError,
};
use strike_store::{MemorySessionStore, SessionStore, CONFIRMATION_KEY};

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    addr
}

async fn spawn_booking_api() -> SocketAddr {
    let state = strike_api::AppState::new(PricingEngine::default());
    spawn(strike_api::app(state)).await
}

fn form_for(addr: SocketAddr, store: Arc<MemorySessionStore>) -> BookingForm {
    let client = HttpBookingClient::new(&format!("http://{}", addr), None).unwrap();
    BookingForm::new(Arc::new(client), store, PricingConfig::default())
}

fn fill(form: &mut BookingForm, people: &str, lanes: &str, sizes: &[&str]) {
    form.draft_mut().set_date("2024-12-25");
    form.draft_mut().set_time("18:00");
    form.draft_mut().set_people(people);
    form.draft_mut().set_lanes(lanes);
    for size in sizes {
        let id = form.add_shoe();
        form.update_shoe_size(&id, size);
    }
}

#[tokio::test]
async fn test_book_then_view_confirmation() {
    let addr = spawn_booking_api().await;
    let store = Arc::new(MemorySessionStore::new());
    let mut form = form_for(addr, store.clone());
    fill(&mut form, "3", "2", &["42", "43", "44"]);

    let handoff = form.submit().await.unwrap();
    assert!(handoff.booking_id.starts_with("BK"));
    assert_eq!(handoff.price, 560);
    assert!(matches!(form.state(), SubmissionState::Succeeded(_)));

    // Via navigation state
    let view = ConfirmationView::resolve(Some(handoff.clone()), store.as_ref());
    assert_eq!(view.field(FieldId::TotalPrice), Some("560 sek"));
    assert_eq!(view.field(FieldId::When), Some("2024-12-25 18:00"));

    // Reloaded page: only session storage is left
    let view = ConfirmationView::resolve(None, store.as_ref());
    assert_eq!(view.field(FieldId::BookingNumber), Some(handoff.booking_id.as_str()));
    assert_eq!(view.field(FieldId::TotalPrice), Some("560 sek"));
}

#[tokio::test]
async fn test_removed_shoe_is_not_sent() {
    let addr = spawn_booking_api().await;
    let store = Arc::new(MemorySessionStore::new());
    let mut form = form_for(addr, store);
    fill(&mut form, "2", "1", &["42", "43"]);

    let extra = form.add_shoe();
    form.update_shoe_size(&extra, "44");
    form.remove_shoe(&extra);

    let record = form.submit().await.unwrap();
    assert_eq!(record.shoes, vec!["42", "43"]);
    assert_eq!(record.price, 340);
}

#[tokio::test]
async fn test_server_error_leaves_no_confirmation() {
    let router = Router::new().route(
        "/booking",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn(router).await;
    let store = Arc::new(MemorySessionStore::new());
    let mut form = form_for(addr, store.clone());
    fill(&mut form, "1", "1", &["40"]);

    let err = form.submit().await.unwrap_err();
    match err {
        SubmitError::Api(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(form.error_message(), Some("Något gick fel, försök igen"));
    assert_eq!(store.get(CONFIRMATION_KEY).unwrap(), None);

    let view = ConfirmationView::resolve(None, store.as_ref());
    assert_eq!(view, ConfirmationView::NoBooking);
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let router = Router::new().route("/booking", post(|| async { "{\"ok\": true}" }));
    let addr = spawn(router).await;
    let mut form = form_for(addr, Arc::new(MemorySessionStore::new()));
    fill(&mut form, "1", "1", &["40"]);

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::Api(ApiError::Decode(_))));
}
