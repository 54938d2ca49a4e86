use sqlx::SqlitePool;

use crate::models::OfferRow;

const SQL_LOAD_OFFER_BY_ID: &str = r#"
SELECT
  o.offer_id,
  o.offer_type,
  o.title,
  o.description,
  o.tags,
  o.price,
  o.city,
  o.created_at,
  u.user_id AS author_id,
  u.pseudo AS author_pseudo,
  u.city AS author_city,
  u.postal_code AS author_postal_code,
  u.description AS author_description,
  u.email AS author_email,
  u.phone AS author_phone
FROM offers o
JOIN users u ON u.user_id = o.author_id
WHERE o.offer_id = ?
LIMIT 1
"#;

pub async fn load_offer_by_id(
    pool: &SqlitePool,
    offer_id: &str,
) -> sqlx::Result<Option<OfferRow>> {
    sqlx::query_as::<_, OfferRow>(SQL_LOAD_OFFER_BY_ID)
        .bind(offer_id)
        .fetch_optional(pool)
        .await
}
