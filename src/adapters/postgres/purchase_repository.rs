//! PostgreSQL implementation of PurchaseRepository.
//!
//! Writes against the purchases table. The resolve operation is a single
//! guarded UPDATE: its predicate matches the payment intent id, the owning
//! user, and `status = 'pending'`, so a resolved row can never be flipped
//! again and one user can never resolve another user's intent.

use crate::domain::foundation::{
    Currency, DomainError, ErrorCode, Money, PaymentIntentId, PurchaseId, Timestamp, UserId,
};
use crate::domain::purchase::{Purchase, PurchaseStatus};
use crate::ports::{PurchaseRepository, Resolution, ResolveUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the PurchaseRepository port.
pub struct PostgresPurchaseRepository {
    pool: PgPool,
}

impl PostgresPurchaseRepository {
    /// Creates a new PostgresPurchaseRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a purchase.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct PurchaseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_intent_id: String,
    pub ebook_title: String,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub purchase_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PurchaseRow> for Purchase {
    type Error = DomainError;

    fn try_from(row: PurchaseRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status)?;
        let currency = Currency::new(&row.currency).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid currency: {}", e))
        })?;

        Ok(Purchase {
            id: PurchaseId::from_uuid(row.id),
            user_id: UserId::new(row.user_id.to_string()).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            payment_intent_id: PaymentIntentId::new(row.payment_intent_id).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid payment_intent_id: {}", e),
                )
            })?,
            ebook_title: row.ebook_title,
            amount: Money::from_major_units(row.amount, currency),
            status,
            purchase_date: row.purchase_date.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

pub(super) fn parse_status(s: &str) -> Result<PurchaseStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(PurchaseStatus::Pending),
        "completed" => Ok(PurchaseStatus::Completed),
        "failed" => Ok(PurchaseStatus::Failed),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

pub(super) fn status_to_string(status: &PurchaseStatus) -> &'static str {
    match status {
        PurchaseStatus::Pending => "pending",
        PurchaseStatus::Completed => "completed",
        PurchaseStatus::Failed => "failed",
    }
}

pub(super) fn parse_user_id_as_uuid(user_id: &UserId) -> Result<Uuid, DomainError> {
    Uuid::parse_str(user_id.as_str()).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("User ID must be a valid UUID: {}", e),
        )
    })
}

#[async_trait]
impl PurchaseRepository for PostgresPurchaseRepository {
    async fn insert(&self, purchase: &Purchase) -> Result<(), DomainError> {
        let user_uuid = parse_user_id_as_uuid(&purchase.user_id)?;

        sqlx::query(
            r#"
            INSERT INTO purchases (
                id, user_id, payment_intent_id, ebook_title, amount, currency,
                status, purchase_date, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(purchase.id.as_uuid())
        .bind(user_uuid)
        .bind(purchase.payment_intent_id.as_str())
        .bind(&purchase.ebook_title)
        .bind(purchase.amount.amount())
        .bind(purchase.amount.currency().as_str())
        .bind(status_to_string(&purchase.status))
        .bind(purchase.purchase_date.map(|t| *t.as_datetime()))
        .bind(*purchase.created_at.as_datetime())
        .bind(*purchase.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert purchase: {}", e),
            )
        })?;

        Ok(())
    }

    async fn resolve(
        &self,
        user_id: &UserId,
        intent_id: &PaymentIntentId,
        resolution: Resolution,
        purchase_date: Option<Timestamp>,
    ) -> Result<ResolveUpdate, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;
        let status = match resolution {
            Resolution::Completed => "completed",
            Resolution::Failed => "failed",
        };

        let result = sqlx::query(
            r#"
            UPDATE purchases SET
                status = $3,
                purchase_date = $4,
                updated_at = NOW()
            WHERE payment_intent_id = $1
              AND user_id = $2
              AND status = 'pending'
            "#,
        )
        .bind(intent_id.as_str())
        .bind(user_uuid)
        .bind(status)
        .bind(purchase_date.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to resolve purchase: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Ok(ResolveUpdate::NoPendingMatch);
        }

        Ok(ResolveUpdate::Applied)
    }

    async fn find_by_intent(
        &self,
        user_id: &UserId,
        intent_id: &PaymentIntentId,
    ) -> Result<Option<Purchase>, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let row: Option<PurchaseRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, payment_intent_id, ebook_title, amount, currency,
                   status, purchase_date, created_at, updated_at
            FROM purchases
            WHERE payment_intent_id = $1 AND user_id = $2
            "#,
        )
        .bind(intent_id.as_str())
        .bind(user_uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find purchase: {}", e),
            )
        })?;

        row.map(Purchase::try_from).transpose()
    }
}
