/// HTTP surface tests driving the router with `oneshot`.
///
/// The pool is built lazily and never connects: the pages and the
/// validation-failure path are exercised without a database, which also
/// proves validation errors never reach storage.
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use gotrip::config::Config;
use gotrip::handlers::{app, AppState};
use gotrip::models::Reservation;
use gotrip::views;
use sqlx::mysql::MySqlPoolOptions;

fn test_config() -> Config {
    Config {
        db_host: "localhost".to_string(),
        db_user: "user_gotrip".to_string(),
        db_password: "gotrip123".to_string(),
        db_name: "go_trip".to_string(),
        db_port: 3306,
        port: 8000,
    }
}

fn test_app() -> axum::Router {
    let config = test_config();
    let pool = MySqlPoolOptions::new().connect_lazy_with(config.connect_options());
    app(Arc::new(AppState { pool, config }))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_service() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gotrip");
}

#[tokio::test]
async fn new_reservation_form_renders() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/reservas/nueva")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<form method=\"post\" action=\"/reservas/nueva\">"));
    assert!(body.contains("name=\"nombre_cliente\""));
    assert!(body.contains("name=\"destino\""));
    // Every enumeration is offered
    assert!(body.contains("value=\"estandar\""));
    assert!(body.contains("value=\"gastronomico\""));
    assert!(body.contains("value=\"a_plazos\""));
}

#[tokio::test]
async fn invalid_create_is_422_with_every_error() {
    let form_body = "nombre_cliente=+&email=no-email&telefono=&destino=&\
                     fecha_salida=2025-03-10&fecha_regreso=2025-03-10&num_personas=0&\
                     tipo_paquete=gold&tipo_viaje=&forma_pago=cash";

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reservas/nueva")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(form_body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("El nombre del cliente no puede estar vacío"));
    assert!(body.contains("Dirección de email no válida"));
    assert!(body.contains("El teléfono no puede estar vacío"));
    assert!(body.contains("El destino no puede estar vacío"));
    assert!(body.contains("Debe haber al menos una persona"));
    assert!(body.contains("La fecha de regreso debe ser posterior a la de salida"));
    assert!(body.contains("Tipo de paquete no válido"));
    assert!(body.contains("Tipo de viaje no válido"));
    assert!(body.contains("Forma de pago no válida"));
}

#[tokio::test]
async fn invalid_create_preserves_submitted_values() {
    let form_body = "nombre_cliente=Ana+L%C3%B3pez&email=ana@example.com&telefono=555-1234&\
                     destino=Canc%C3%BAn&fecha_salida=2025-03-01&fecha_regreso=2025-03-10&\
                     num_personas=0&tipo_paquete=estandar&tipo_viaje=ocio&forma_pago=pago_unico";

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reservas/nueva")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(form_body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("value=\"Ana López\""));
    assert!(body.contains("value=\"Cancún\""));
    // The submitted package stays selected
    assert!(body.contains("<option value=\"estandar\" selected>"));
}

#[tokio::test]
async fn invalid_edit_is_422_on_the_edit_form() {
    let form_body = "nombre_cliente=Ana&email=ana@example.com&telefono=555-1234&\
                     destino=Canc%C3%BAn&fecha_salida=2025-03-10&fecha_regreso=2025-03-01&\
                     num_personas=2&tipo_paquete=estandar&tipo_viaje=ocio&forma_pago=pago_unico";

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reservas/editar/7")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(form_body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("action=\"/reservas/editar/7\""));
    assert!(body.contains("La fecha de regreso debe ser posterior a la de salida"));
}

// Rendering checks that need no router

fn sample_reservation(id: i64) -> Reservation {
    Reservation {
        id,
        nombre_cliente: "Ana López".to_string(),
        email: "ana@example.com".to_string(),
        telefono: "555-1234".to_string(),
        destino: "Cancún".to_string(),
        fecha_salida: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        fecha_regreso: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        num_personas: 2,
        tipo_paquete: gotrip::models::PackageType::Estandar,
        tipo_viaje: gotrip::models::TripType::Ocio,
        forma_pago: gotrip::models::PaymentMethod::PagoUnico,
    }
}

#[test]
fn banner_rendering_follows_msg_parameter() {
    let page = views::index_page(&[], Some("success"));
    assert!(page.contains("¡Reserva creada con éxito!"));

    let page = views::index_page(&[], Some("updated"));
    assert!(page.contains("¡Reserva actualizada correctamente!"));

    let page = views::index_page(&[], Some("deleted"));
    assert!(page.contains("La reserva ha sido eliminada."));

    let page = views::index_page(&[], Some("error"));
    assert!(page.contains("Ha ocurrido un error inesperado"));
    assert!(page.contains("class=\"flash flash-error\""));

    // Unknown or absent msg: no banner at all
    let page = views::index_page(&[], Some("anything-else"));
    assert!(!page.contains("class=\"flash"));
    let page = views::index_page(&[], None);
    assert!(!page.contains("class=\"flash"));
}

#[test]
fn index_lists_reservations_with_actions() {
    let page = views::index_page(&[sample_reservation(5)], None);
    assert!(page.contains("Ana López"));
    assert!(page.contains("Cancún"));
    assert!(page.contains("01/03/2025"));
    assert!(page.contains("/reservas/editar/5"));
    assert!(page.contains("eliminarReserva(5)"));
}

#[test]
fn user_content_is_html_escaped() {
    let mut reserva = sample_reservation(1);
    reserva.nombre_cliente = "<script>alert('x')</script>".to_string();
    let page = views::index_page(&[reserva], None);
    assert!(!page.contains("<script>alert"));
    assert!(page.contains("&lt;script&gt;"));
}
