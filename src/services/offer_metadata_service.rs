use sqlx::SqlitePool;

use crate::database::{offer_repo, user_repo};
use crate::models::OfferRow;

pub const NOT_FOUND_TITLE: &str = "Offre introuvable";
pub const FALLBACK_DESCRIPTION: &str = "Détail de l'annonce";

const DESCRIPTION_PREVIEW_CHARS: usize = 150;

pub struct OfferMetadata {
    pub title: String,
    pub description: Option<String>,
}

/// Document head metadata for the detail page. A missing listing is a normal
/// outcome and resolves to the placeholder title, never an error.
pub async fn resolve_offer_metadata(
    pool: &SqlitePool,
    offer_id: &str,
) -> sqlx::Result<OfferMetadata> {
    let offer = offer_repo::load_offer_by_id(pool, offer_id).await?;

    // The pseudo in the title comes from the separate profile fetch; an
    // absent profile degrades to an empty name rather than failing.
    let author_pseudo = match &offer {
        Some(o) => user_repo::load_user_profile(pool, &o.author_id)
            .await?
            .and_then(|profile| profile.pseudo),
        None => None,
    };

    Ok(build_metadata(offer.as_ref(), author_pseudo.as_deref()))
}

fn build_metadata(offer: Option<&OfferRow>, author_pseudo: Option<&str>) -> OfferMetadata {
    let Some(offer) = offer else {
        return OfferMetadata {
            title: NOT_FOUND_TITLE.to_string(),
            description: None,
        };
    };

    let description = offer
        .description
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(description_preview)
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

    OfferMetadata {
        title: format!(
            "{} {} - {}",
            offer.title,
            offer.city,
            author_pseudo.unwrap_or_default()
        ),
        description: Some(description),
    }
}

fn description_preview(description: &str) -> String {
    description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect()
}
