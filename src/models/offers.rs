#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OfferRow {
    pub offer_id: String,
    pub offer_type: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub price: f64,
    pub city: String,
    pub created_at: String,
    pub author_id: String,
    pub author_pseudo: String,
    pub author_city: String,
    pub author_postal_code: String,
    pub author_description: Option<String>,
    pub author_email: String,
    pub author_phone: Option<String>,
}

/// Closed set of listing categories. Anything the store hands us that is not
/// one of the three known values parses to `Unknown`, so category handling
/// stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferCategory {
    Objet,
    Service,
    Connaissance,
    Unknown,
}

impl OfferCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "objet" => Self::Objet,
            "service" => Self::Service,
            "connaissance" => Self::Connaissance,
            _ => Self::Unknown,
        }
    }
}
