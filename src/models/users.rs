#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub pseudo: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nb_people_helped: Option<i64>,
}
