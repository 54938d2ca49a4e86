use sqlx::SqlitePool;

use crate::models::UserRow;

const SQL_LOAD_USER_PROFILE: &str = r#"
SELECT
  pseudo,
  city,
  postal_code,
  description,
  email,
  phone,
  nb_people_helped
FROM users
WHERE user_id = ?
LIMIT 1
"#;

pub async fn load_user_profile(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_LOAD_USER_PROFILE)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
