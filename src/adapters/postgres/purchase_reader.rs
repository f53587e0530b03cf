//! PostgreSQL implementation of PurchaseReader.
//!
//! Read-only queries over the purchases table. The access gate is an
//! EXISTS query evaluated fresh on every call; nothing here is cached.

use crate::domain::foundation::{
    Currency, DomainError, ErrorCode, Money, PaymentIntentId, PurchaseId, Timestamp, UserId,
};
use crate::ports::{PurchaseReader, PurchaseView};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::purchase_repository::{parse_status, parse_user_id_as_uuid};

/// PostgreSQL implementation of the PurchaseReader port.
pub struct PostgresPurchaseReader {
    pool: PgPool,
}

impl PostgresPurchaseReader {
    /// Creates a new PostgresPurchaseReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the purchase history listing.
#[derive(Debug, sqlx::FromRow)]
struct PurchaseViewRow {
    id: Uuid,
    payment_intent_id: String,
    ebook_title: String,
    amount: Decimal,
    currency: String,
    status: String,
    purchase_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PurchaseViewRow> for PurchaseView {
    type Error = DomainError;

    fn try_from(row: PurchaseViewRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status)?;
        let currency = Currency::new(&row.currency).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid currency: {}", e))
        })?;

        Ok(PurchaseView {
            id: PurchaseId::from_uuid(row.id),
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
        })
    }
}

#[async_trait]
impl PurchaseReader for PostgresPurchaseReader {
    async fn has_completed_purchase(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM purchases
                WHERE user_id = $1 AND status = 'completed'
            )
            "#,
        )
        .bind(user_uuid)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check purchase access: {}", e),
            )
        })?;

        Ok(exists.0)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PurchaseView>, DomainError> {
        let user_uuid = parse_user_id_as_uuid(user_id)?;

        let rows: Vec<PurchaseViewRow> = sqlx::query_as(
            r#"
            SELECT id, payment_intent_id, ebook_title, amount, currency,
                   status, purchase_date, created_at
            FROM purchases
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_uuid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list purchases: {}", e),
            )
        })?;

        rows.into_iter().map(PurchaseView::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase::PurchaseStatus;

    #[test]
    fn view_row_maps_to_view() {
        let row = PurchaseViewRow {
            id: Uuid::new_v4(),
            payment_intent_id: "pi_abc".to_string(),
            ebook_title: "Master Modern Development with AI-Powered Coding".to_string(),
            amount: Decimal::new(4900, 2),
            currency: "usd".to_string(),
            status: "pending".to_string(),
            purchase_date: None,
            created_at: Utc::now(),
        };

        let view = PurchaseView::try_from(row).unwrap();
        assert_eq!(view.status, PurchaseStatus::Pending);
        assert_eq!(view.amount.amount(), Decimal::new(4900, 2));
        assert!(view.purchase_date.is_none());
    }

    #[test]
    fn view_row_with_bad_currency_is_rejected() {
        let row = PurchaseViewRow {
            id: Uuid::new_v4(),
            payment_intent_id: "pi_abc".to_string(),
            ebook_title: "Master Modern Development with AI-Powered Coding".to_string(),
            amount: Decimal::new(4900, 2),
            currency: "dollars".to_string(),
            status: "completed".to_string(),
            purchase_date: Some(Utc::now()),
            created_at: Utc::now(),
        };

        assert!(PurchaseView::try_from(row).is_err());
    }
}
