//! Axum handlers for the storefront endpoints.
//!
//! Each handler unwraps the HTTP shape, runs the matching application
//! handler, and maps the domain error to a status code:
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Unauthorized | 401 |
//! | PaymentDeclined | 400 |
//! | ValidationFailed | 400 |
//! | IntentNotFound | 404 |
//! | AlreadyResolved | 409 |
//! | Persistence | 500 |
//! | Gateway | 502 |

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::adapters::http::middleware::{BearerToken, RequireAuth};
use crate::application::handlers::purchase::{
    CheckAccessHandler, CheckAccessQuery, ConfirmPaymentCommand, ConfirmPaymentHandler,
    CreatePaymentIntentCommand, CreatePaymentIntentHandler, ListPurchasesHandler,
    ListPurchasesQuery,
};
use crate::domain::foundation::{AuthError, PaymentIntentId};
use crate::domain::purchase::PurchaseError;

use super::dto::{
    AccessResponse, ConfirmPaymentErrorResponse, ConfirmPaymentRequest, ConfirmPaymentResponse,
    CreatePaymentIntentRequest, CreatePaymentIntentResponse, ErrorResponse, HealthResponse,
    PurchaseItemResponse, PurchaseListResponse,
};
use super::routes::PurchaseAppState;

fn status_for(error: &PurchaseError) -> StatusCode {
    match error {
        PurchaseError::Unauthorized => StatusCode::UNAUTHORIZED,
        PurchaseError::PaymentDeclined { .. } => StatusCode::BAD_REQUEST,
        PurchaseError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        PurchaseError::IntentNotFound(_) => StatusCode::NOT_FOUND,
        PurchaseError::AlreadyResolved(_) => StatusCode::CONFLICT,
        PurchaseError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PurchaseError::Gateway(_) => StatusCode::BAD_GATEWAY,
    }
}

/// API error wrapper with the standard `{error, code}` body.
pub struct PurchaseApiError(pub PurchaseError);

impl IntoResponse for PurchaseApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

impl From<PurchaseError> for PurchaseApiError {
    fn from(error: PurchaseError) -> Self {
        Self(error)
    }
}

/// API error wrapper for the confirm endpoint's `{success, error}` body.
pub struct ConfirmApiError(pub PurchaseError);

impl IntoResponse for ConfirmApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = ConfirmPaymentErrorResponse {
            success: false,
            error: self.0.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<PurchaseError> for ConfirmApiError {
    fn from(error: PurchaseError) -> Self {
        Self(error)
    }
}

/// POST /api/create-payment-intent
pub async fn create_payment_intent(
    State(state): State<PurchaseAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, PurchaseApiError> {
    let handler = CreatePaymentIntentHandler::new(
        state.repository.clone(),
        state.gateway.clone(),
        state.ebook_title.clone(),
    );

    let result = handler
        .handle(CreatePaymentIntentCommand {
            user,
            amount_minor: request.amount,
            currency: request.currency,
        })
        .await?;

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: result.client_secret,
        payment_intent_id: result.payment_intent_id.as_str().to_string(),
    }))
}

/// POST /api/confirm-payment
pub async fn confirm_payment(
    State(state): State<PurchaseAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ConfirmPaymentRequest>,
) -> Result<Json<ConfirmPaymentResponse>, ConfirmApiError> {
    let payment_intent_id = PaymentIntentId::new(request.payment_intent_id)
        .map_err(|e| ConfirmApiError(PurchaseError::from(e)))?;

    let handler = ConfirmPaymentHandler::new(state.repository.clone(), state.gateway.clone());

    let result = handler
        .handle(ConfirmPaymentCommand {
            user,
            payment_intent_id,
        })
        .await?;

    Ok(Json(ConfirmPaymentResponse {
        success: true,
        message: result.message,
    }))
}

/// GET /api/access
pub async fn check_access(
    State(state): State<PurchaseAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AccessResponse>, PurchaseApiError> {
    let handler = CheckAccessHandler::new(state.reader.clone());

    let result = handler.handle(CheckAccessQuery { user }).await?;

    Ok(Json(AccessResponse {
        has_purchased: result.has_purchased,
    }))
}

/// GET /api/purchases
pub async fn list_purchases(
    State(state): State<PurchaseAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<PurchaseListResponse>, PurchaseApiError> {
    let handler = ListPurchasesHandler::new(state.reader.clone());

    let result = handler.handle(ListPurchasesQuery { user }).await?;

    Ok(Json(PurchaseListResponse {
        purchases: result
            .purchases
            .into_iter()
            .map(PurchaseItemResponse::from)
            .collect(),
    }))
}

/// POST /api/auth/signout
pub async fn sign_out(
    State(state): State<PurchaseAppState>,
    RequireAuth(user): RequireAuth,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> Result<StatusCode, Response> {
    state.session_validator.revoke(&token).await.map_err(|e| {
        tracing::error!(user_id = %user.id, error = %e, "sign-out failed");
        let status = match e {
            AuthError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::UNAUTHORIZED,
        };
        (
            status,
            Json(ErrorResponse::new("AUTH_ERROR", "Sign-out failed")),
        )
            .into_response()
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
