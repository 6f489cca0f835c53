// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use frontdesk_api::{
    AdvanceOrderStatusRequest, ApiError, AuthenticationService, BarOrderResponse,
    BookingReportResponse, BookingResponse, ChangePasswordRequest, CreateBarOrderRequest,
    CreateBookingRequest, CreateDrinkCategoryRequest, CreateDrinkRequest, CreateGuestRequest,
    CreateKitchenOrderRequest, CreateRoomRequest, DashboardResponse, DrinkCategoryResponse,
    DrinkResponse, GuestResponse, KitchenOrderResponse, ReceiptLayout, RoomResponse,
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, StaffInfo,
    UpdateBookingRequest, UpdateGuestRequest, UpdateProfileRequest, UpdateRoomRequest,
    advance_bar_order_status, advance_kitchen_order_status, booking_report, create_bar_order,
    create_booking, create_drink, create_drink_category, create_guest, create_kitchen_order,
    create_room, dashboard_summary, get_booking, list_bar_orders, list_bookings,
    list_drink_categories, list_drinks, list_guests, list_kitchen_orders, list_rooms,
    occupancy_report_csv, render_bar_docket, render_bar_receipt, render_booking_receipt,
    render_kitchen_docket, render_kitchen_receipt, update_booking, update_guest, update_room,
};
use frontdesk_persistence::Persistence;

mod session;
mod sweep;

use session::{SessionStaff, bearer_token};

/// Frontdesk Server - HTTP server for the frontdesk system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex so handlers and the
/// sweep task share it safely.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer.
    pub persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
struct BookingsQuery {
    /// Optional status filter (active/completed/cancelled).
    status: Option<String>,
}

/// Query parameters for report endpoints.
#[derive(Debug, Deserialize)]
struct ReportQuery {
    /// Range start (`YYYY-MM-DD`, inclusive).
    start_date: String,
    /// Range end (`YYYY-MM-DD`, inclusive).
    end_date: String,
}

/// Query parameters for receipt endpoints.
#[derive(Debug, Deserialize)]
struct ReceiptQuery {
    /// Layout selector (full/compact); defaults to full.
    layout: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DomainRuleViolation { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn parse_layout(query: &ReceiptQuery) -> Result<ReceiptLayout, HttpError> {
    match query.layout.as_deref() {
        Some(value) => ReceiptLayout::parse(value).map_err(HttpError::from),
        None => Ok(ReceiptLayout::Full),
    }
}

// ============================================================================
// Authentication handlers
// ============================================================================

/// Handler for POST `/auth/sign_up`.
async fn handle_sign_up(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>, HttpError> {
    info!(email = %request.email, "Handling sign_up request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SignUpResponse =
        AuthenticationService::sign_up(&mut persistence, &request).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for POST `/auth/sign_in`.
async fn handle_sign_in(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, HttpError> {
    info!(email = %request.email, "Handling sign_in request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SignInResponse = AuthenticationService::sign_in(&mut persistence, &request)
        .map_err(|e| HttpError::from(ApiError::from(e)))?;
    Ok(Json(response))
}

/// Handler for POST `/auth/sign_out`.
async fn handle_sign_out(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let token: String = bearer_token(&headers)
        .map_err(|_| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing or invalid Authorization header"),
        })?
        .to_string();

    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::sign_out(&mut persistence, &token)
        .map_err(|e| HttpError::from(ApiError::from(e)))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/auth/me`.
async fn handle_whoami(SessionStaff(staff): SessionStaff) -> Json<StaffInfo> {
    Json(staff.to_info())
}

/// Handler for PUT `/auth/profile`.
async fn handle_update_profile(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<StaffInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let info: StaffInfo =
        AuthenticationService::update_profile(&mut persistence, &staff, &request)
            .map_err(HttpError::from)?;
    Ok(Json(info))
}

/// Handler for PUT `/auth/password`.
async fn handle_change_password(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::change_password(&mut persistence, &staff, &request)
        .map_err(HttpError::from)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Room handlers
// ============================================================================

/// Handler for POST `/rooms`.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateRoomRequest>,
) -> Result<Json<RoomResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: RoomResponse =
        create_room(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/rooms`.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<Vec<RoomResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let rooms: Vec<RoomResponse> = list_rooms(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(rooms))
}

/// Handler for PUT `/rooms/{room_id}`.
async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<i64>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: RoomResponse =
        update_room(&mut persistence, room_id, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

// ============================================================================
// Guest handlers
// ============================================================================

/// Handler for POST `/guests`.
async fn handle_create_guest(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateGuestRequest>,
) -> Result<Json<GuestResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: GuestResponse =
        create_guest(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/guests`.
async fn handle_list_guests(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<Vec<GuestResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let guests: Vec<GuestResponse> = list_guests(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(guests))
}

/// Handler for PUT `/guests/{guest_id}`.
async fn handle_update_guest(
    AxumState(app_state): AxumState<AppState>,
    Path(guest_id): Path<i64>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<UpdateGuestRequest>,
) -> Result<Json<GuestResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: GuestResponse =
        update_guest(&mut persistence, guest_id, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

// ============================================================================
// Drink catalog handlers
// ============================================================================

/// Handler for POST `/drink_categories`.
async fn handle_create_drink_category(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateDrinkCategoryRequest>,
) -> Result<Json<DrinkCategoryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DrinkCategoryResponse =
        create_drink_category(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/drink_categories`.
async fn handle_list_drink_categories(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<Vec<DrinkCategoryResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let categories: Vec<DrinkCategoryResponse> =
        list_drink_categories(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(categories))
}

/// Handler for POST `/drinks`.
async fn handle_create_drink(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateDrinkRequest>,
) -> Result<Json<DrinkResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DrinkResponse =
        create_drink(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/drinks`.
async fn handle_list_drinks(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<Vec<DrinkResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let drinks: Vec<DrinkResponse> = list_drinks(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(drinks))
}

// ============================================================================
// Booking handlers
// ============================================================================

/// Handler for POST `/bookings`.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        create_booking(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/bookings`.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let bookings: Vec<BookingResponse> =
        list_bookings(&mut persistence, query.status.as_deref()).map_err(HttpError::from)?;
    Ok(Json(bookings))
}

/// Handler for GET `/bookings/{booking_id}`.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingResponse =
        get_booking(&mut persistence, booking_id).map_err(HttpError::from)?;
    Ok(Json(booking))
}

/// Handler for PUT `/bookings/{booking_id}`.
async fn handle_update_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        update_booking(&mut persistence, booking_id, request, &staff)
            .map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}/receipt`.
async fn handle_booking_receipt(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    SessionStaff(_staff): SessionStaff,
    Query(query): Query<ReceiptQuery>,
) -> Result<Html<String>, HttpError> {
    let layout: ReceiptLayout = parse_layout(&query)?;
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingResponse =
        get_booking(&mut persistence, booking_id).map_err(HttpError::from)?;
    Ok(Html(render_booking_receipt(&booking, layout)))
}

// ============================================================================
// Kitchen order handlers
// ============================================================================

/// Handler for POST `/kitchen_orders`.
async fn handle_create_kitchen_order(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateKitchenOrderRequest>,
) -> Result<Json<KitchenOrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: KitchenOrderResponse =
        create_kitchen_order(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/kitchen_orders`.
async fn handle_list_kitchen_orders(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<Vec<KitchenOrderResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let orders: Vec<KitchenOrderResponse> =
        list_kitchen_orders(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(orders))
}

/// Handler for POST `/kitchen_orders/{order_id}/status`.
async fn handle_advance_kitchen_order(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<i64>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<AdvanceOrderStatusRequest>,
) -> Result<Json<KitchenOrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: KitchenOrderResponse =
        advance_kitchen_order_status(&mut persistence, order_id, request, &staff)
            .map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/kitchen_orders/{order_id}/receipt`.
async fn handle_kitchen_order_receipt(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<i64>,
    SessionStaff(_staff): SessionStaff,
    Query(query): Query<ReceiptQuery>,
) -> Result<Html<String>, HttpError> {
    let layout: ReceiptLayout = parse_layout(&query)?;
    let mut persistence = app_state.persistence.lock().await;
    let order: KitchenOrderResponse =
        find_kitchen_order(&mut persistence, order_id).map_err(HttpError::from)?;
    Ok(Html(render_kitchen_receipt(&order, layout)))
}

/// Handler for GET `/kitchen_orders/{order_id}/docket`.
async fn handle_kitchen_order_docket(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<i64>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let order: KitchenOrderResponse =
        find_kitchen_order(&mut persistence, order_id).map_err(HttpError::from)?;
    Ok(Html(render_kitchen_docket(&order)))
}

fn find_kitchen_order(
    persistence: &mut Persistence,
    order_id: i64,
) -> Result<KitchenOrderResponse, ApiError> {
    list_kitchen_orders(persistence)?
        .into_iter()
        .find(|order| order.order_id == order_id)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Kitchen order"),
            message: format!("Kitchen order {order_id} does not exist"),
        })
}

// ============================================================================
// Bar order handlers
// ============================================================================

/// Handler for POST `/bar_orders`.
async fn handle_create_bar_order(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<CreateBarOrderRequest>,
) -> Result<Json<BarOrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BarOrderResponse =
        create_bar_order(&mut persistence, request, &staff).map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/bar_orders`.
async fn handle_list_bar_orders(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<Vec<BarOrderResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let orders: Vec<BarOrderResponse> =
        list_bar_orders(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(orders))
}

/// Handler for POST `/bar_orders/{order_id}/status`.
async fn handle_advance_bar_order(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<i64>,
    SessionStaff(staff): SessionStaff,
    Json(request): Json<AdvanceOrderStatusRequest>,
) -> Result<Json<BarOrderResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: BarOrderResponse =
        advance_bar_order_status(&mut persistence, order_id, request, &staff)
            .map_err(HttpError::from)?;
    Ok(Json(response))
}

/// Handler for GET `/bar_orders/{order_id}/receipt`.
async fn handle_bar_order_receipt(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<i64>,
    SessionStaff(_staff): SessionStaff,
    Query(query): Query<ReceiptQuery>,
) -> Result<Html<String>, HttpError> {
    let layout: ReceiptLayout = parse_layout(&query)?;
    let mut persistence = app_state.persistence.lock().await;
    let order: BarOrderResponse =
        find_bar_order(&mut persistence, order_id).map_err(HttpError::from)?;
    Ok(Html(render_bar_receipt(&order, layout)))
}

/// Handler for GET `/bar_orders/{order_id}/docket`.
async fn handle_bar_order_docket(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<i64>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Html<String>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let order: BarOrderResponse =
        find_bar_order(&mut persistence, order_id).map_err(HttpError::from)?;
    Ok(Html(render_bar_docket(&order)))
}

fn find_bar_order(
    persistence: &mut Persistence,
    order_id: i64,
) -> Result<BarOrderResponse, ApiError> {
    list_bar_orders(persistence)?
        .into_iter()
        .find(|order| order.order_id == order_id)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Bar order"),
            message: format!("Bar order {order_id} does not exist"),
        })
}

// ============================================================================
// Report handlers
// ============================================================================

/// Handler for GET `/reports/bookings`.
async fn handle_booking_report(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
    Query(query): Query<ReportQuery>,
) -> Result<Json<BookingReportResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let report: BookingReportResponse =
        booking_report(&mut persistence, &query.start_date, &query.end_date)
            .map_err(HttpError::from)?;
    Ok(Json(report))
}

/// Handler for GET `/reports/occupancy.csv`.
async fn handle_occupancy_csv(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
    Query(query): Query<ReportQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let report: BookingReportResponse =
        booking_report(&mut persistence, &query.start_date, &query.end_date)
            .map_err(HttpError::from)?;
    let csv_text: String = occupancy_report_csv(&report.occupancy).map_err(HttpError::from)?;

    Ok(([(header::CONTENT_TYPE, "text/csv")], csv_text).into_response())
}

/// Handler for GET `/dashboard`.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff): SessionStaff,
) -> Result<Json<DashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let dashboard: DashboardResponse =
        dashboard_summary(&mut persistence).map_err(HttpError::from)?;
    Ok(Json(dashboard))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/sign_up", post(handle_sign_up))
        .route("/auth/sign_in", post(handle_sign_in))
        .route("/auth/sign_out", post(handle_sign_out))
        .route("/auth/me", get(handle_whoami))
        .route("/auth/profile", put(handle_update_profile))
        .route("/auth/password", put(handle_change_password))
        .route("/rooms", get(handle_list_rooms).post(handle_create_room))
        .route("/rooms/{room_id}", put(handle_update_room))
        .route(
            "/guests",
            get(handle_list_guests).post(handle_create_guest),
        )
        .route("/guests/{guest_id}", put(handle_update_guest))
        .route(
            "/drink_categories",
            get(handle_list_drink_categories).post(handle_create_drink_category),
        )
        .route(
            "/drinks",
            get(handle_list_drinks).post(handle_create_drink),
        )
        .route(
            "/bookings",
            get(handle_list_bookings).post(handle_create_booking),
        )
        .route(
            "/bookings/{booking_id}",
            get(handle_get_booking).put(handle_update_booking),
        )
        .route("/bookings/{booking_id}/receipt", get(handle_booking_receipt))
        .route(
            "/kitchen_orders",
            get(handle_list_kitchen_orders).post(handle_create_kitchen_order),
        )
        .route(
            "/kitchen_orders/{order_id}/status",
            post(handle_advance_kitchen_order),
        )
        .route(
            "/kitchen_orders/{order_id}/receipt",
            get(handle_kitchen_order_receipt),
        )
        .route(
            "/kitchen_orders/{order_id}/docket",
            get(handle_kitchen_order_docket),
        )
        .route(
            "/bar_orders",
            get(handle_list_bar_orders).post(handle_create_bar_order),
        )
        .route(
            "/bar_orders/{order_id}/status",
            post(handle_advance_bar_order),
        )
        .route(
            "/bar_orders/{order_id}/receipt",
            get(handle_bar_order_receipt),
        )
        .route(
            "/bar_orders/{order_id}/docket",
            get(handle_bar_order_docket),
        )
        .route("/reports/bookings", get(handle_booking_report))
        .route("/reports/occupancy.csv", get(handle_occupancy_csv))
        .route("/dashboard", get(handle_dashboard))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Frontdesk Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // The sweep runs once at startup and then every five minutes.
    tokio::spawn(sweep::run(app_state.persistence.clone()));

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Sends a request with an optional bearer token and JSON body.
    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (HttpStatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&value).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    /// Registers and signs in a staff member, returning the token.
    async fn sign_up_and_in(app: &Router) -> String {
        let (status, _body) = send(
            app,
            "POST",
            "/auth/sign_up",
            None,
            Some(serde_json::json!({
                "email": "desk@example.com",
                "password": "front desk pass",
                "full_name": "Ada Obi",
                "role": "receptionist",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, body) = send(
            app,
            "POST",
            "/auth/sign_in",
            None,
            Some(serde_json::json!({
                "email": "desk@example.com",
                "password": "front desk pass",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let sign_in: SignInResponse = serde_json::from_slice(&body).unwrap();
        sign_in.session_token
    }

    /// Creates a room, a guest, and a booking; returns the booking.
    async fn seed_booking(app: &Router, token: &str) -> BookingResponse {
        let (status, body) = send(
            app,
            "POST",
            "/rooms",
            Some(token),
            Some(serde_json::json!({
                "room_number": "101",
                "room_type": "standard",
                "rate": "20000",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let room: RoomResponse = serde_json::from_slice(&body).unwrap();

        let (status, body) = send(
            app,
            "POST",
            "/guests",
            Some(token),
            Some(serde_json::json!({
                "full_name": "Ada Obi",
                "email": "ada@example.com",
                "phone": "+2348000000000",
                "address": "12 Marina Road, Lagos",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let guest: GuestResponse = serde_json::from_slice(&body).unwrap();

        let (status, body) = send(
            app,
            "POST",
            "/bookings",
            Some(token),
            Some(serde_json::json!({
                "room_id": room.room_id,
                "guest_id": guest.guest_id,
                "check_in": "2024-01-01",
                "check_out": "2024-01-03",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_gated_routes_require_a_session() {
        let app: Router = build_router(create_test_app_state());

        let (status, _body) = send(&app, "GET", "/rooms", None, None).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);

        let (status, _body) = send(&app, "GET", "/rooms", Some("session_bogus"), None).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_booking_flow_derives_total_and_occupies_room() {
        let app: Router = build_router(create_test_app_state());
        let token: String = sign_up_and_in(&app).await;

        let booking: BookingResponse = seed_booking(&app, &token).await;
        assert_eq!(booking.total_amount, Decimal::from(40_000));
        assert_eq!(booking.status, "active");
        assert_eq!(booking.room_number, "101");

        let (status, body) = send(&app, "GET", "/rooms", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        let rooms: Vec<RoomResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].status, "occupied");

        let (status, body) = send(&app, "GET", "/bookings", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        let bookings: Vec<BookingResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(bookings.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_without_staff_record_is_refused() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        {
            let mut persistence = app_state.persistence.lock().await;
            persistence
                .create_account("orphan@example.com", "front desk pass")
                .unwrap();
        }

        let (status, body) = send(
            &app,
            "POST",
            "/auth/sign_in",
            None,
            Some(serde_json::json!({
                "email": "orphan@example.com",
                "password": "front desk pass",
            })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
        let message: String = String::from_utf8(body).unwrap();
        assert!(message.contains("Staff record not found"));
    }

    #[tokio::test]
    async fn test_sign_out_invalidates_the_session() {
        let app: Router = build_router(create_test_app_state());
        let token: String = sign_up_and_in(&app).await;

        let (status, _body) = send(&app, "GET", "/auth/me", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, _body) = send(&app, "POST", "/auth/sign_out", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::NO_CONTENT);

        let (status, _body) = send(&app, "GET", "/auth/me", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sweep_completes_expired_booking() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let token: String = sign_up_and_in(&app).await;

        // Check-out is long past, so the first sweep pass closes it.
        let booking: BookingResponse = seed_booking(&app, &token).await;

        sweep::sweep_once(&app_state.persistence).await;

        let (status, body) = send(
            &app,
            "GET",
            &format!("/bookings/{}", booking.booking_id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let swept: BookingResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(swept.status, "completed");

        let (_status, body) = send(&app, "GET", "/rooms", Some(&token), None).await;
        let rooms: Vec<RoomResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(rooms[0].status, "available");
    }

    #[tokio::test]
    async fn test_illegal_order_transition_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());
        let token: String = sign_up_and_in(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/kitchen_orders",
            Some(&token),
            Some(serde_json::json!({
                "guest_name": "Walk-in Customer",
                "item_name": "Jollof Rice",
                "unit_price": "3000",
                "quantity": 2,
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let order: KitchenOrderResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(order.total_amount, Decimal::from(6_000));

        // Pending orders can only start preparing.
        let (status, _body) = send(
            &app,
            "POST",
            &format!("/kitchen_orders/{}/status", order.order_id),
            Some(&token),
            Some(serde_json::json!({ "next_status": "completed" })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);

        let (status, _body) = send(
            &app,
            "POST",
            &format!("/kitchen_orders/{}/status", order.order_id),
            Some(&token),
            Some(serde_json::json!({ "next_status": "preparing" })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_receipt_and_csv_endpoints() {
        let app: Router = build_router(create_test_app_state());
        let token: String = sign_up_and_in(&app).await;
        let booking: BookingResponse = seed_booking(&app, &token).await;

        let (status, body) = send(
            &app,
            "GET",
            &format!("/bookings/{}/receipt?layout=compact", booking.booking_id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let html: String = String::from_utf8(body).unwrap();
        assert!(html.contains("receipt-compact"));
        assert!(html.contains("\u{20a6}40,000.00"));

        let (status, body) = send(
            &app,
            "GET",
            "/reports/occupancy.csv?start_date=2024-01-01&end_date=2024-01-02",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let csv_text: String = String::from_utf8(body).unwrap();
        assert!(csv_text.starts_with("Date,Occupied Rooms,Total Rooms,Occupancy Rate"));
        assert!(csv_text.contains("100.00%"));
    }

    #[tokio::test]
    async fn test_double_booking_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());
        let token: String = sign_up_and_in(&app).await;
        let booking: BookingResponse = seed_booking(&app, &token).await;

        // Staff edit frees the room without touching the booking.
        let (status, _body) = send(
            &app,
            "PUT",
            &format!("/rooms/{}", booking.room_id),
            Some(&token),
            Some(serde_json::json!({
                "room_number": "101",
                "room_type": "standard",
                "rate": "20000",
                "status": "available",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, _body) = send(
            &app,
            "POST",
            "/bookings",
            Some(&token),
            Some(serde_json::json!({
                "room_id": booking.room_id,
                "guest_id": booking.guest_id,
                "check_in": "2024-01-02",
                "check_out": "2024-01-04",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    }
}
