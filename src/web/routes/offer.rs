use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Extension,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::offer_detail_service::{self, OfferDetailView};
use crate::services::offer_metadata_service::{self, OfferMetadata};
use crate::web::middleware::auth::Viewer;

#[derive(Template)]
#[template(path = "offer.html")]
pub struct OfferDetailTemplate {
    pub meta: OfferMetadata,
    pub offer: OfferDetailView,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct OfferNotFoundTemplate {
    pub meta: OfferMetadata,
}

pub async fn offer_detail_handler(
    Extension(viewer): Extension<Viewer>,
    Path(offer_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    let meta = match offer_metadata_service::resolve_offer_metadata(&pool, &offer_id).await {
        Ok(m) => m,
        Err(e) => {
            warn!("Offer metadata load failed for {}: {}", offer_id, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let view = match offer_detail_service::load_offer_detail_view(
        &pool,
        &offer_id,
        viewer.user_id.as_deref(),
    )
    .await
    {
        Ok(v) => v,
        Err(e) => {
            warn!("Offer detail load failed for {}: {}", offer_id, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let Some(view) = view else {
        let template = OfferNotFoundTemplate { meta };
        return (StatusCode::NOT_FOUND, Html(template.render().unwrap())).into_response();
    };

    let template = OfferDetailTemplate { meta, offer: view };
    Html(template.render().unwrap()).into_response()
}
