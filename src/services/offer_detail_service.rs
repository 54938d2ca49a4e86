use sqlx::SqlitePool;

use crate::database::{offer_repo, user_repo};
use crate::models::{OfferCategory, OfferRow};
use crate::services::impact_service::{self, ImpactProfile};

pub struct BackLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Which contact/ownership panel the viewer gets. Exactly one state holds
/// for any (viewer, author) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState {
    Owner,
    AuthenticatedContact,
    Anonymous,
}

pub struct ContactView {
    pub pseudo: String,
    pub email: String,
    pub phone: Option<String>,
}

pub struct AuthorPanelView {
    pub pseudo: String,
    pub city: String,
    pub postal_code: String,
    pub bio: Option<String>,
    pub people_helped: i64,
}

pub struct OfferDetailView {
    pub offer_id: String,
    pub category_label: String,
    pub title: String,
    pub published_at: String,
    pub published_label: String,
    pub tags: Vec<String>,
    pub description_paragraphs: Vec<String>,
    pub price_label: String,
    pub is_free: bool,
    pub back: BackLink,
    pub impact: &'static ImpactProfile,
    pub author: AuthorPanelView,
    pub is_owner: bool,
    pub contact: Option<ContactView>,
}

pub async fn load_offer_detail_view(
    pool: &SqlitePool,
    offer_id: &str,
    viewer_id: Option<&str>,
) -> sqlx::Result<Option<OfferDetailView>> {
    let Some(offer) = offer_repo::load_offer_by_id(pool, offer_id).await? else {
        return Ok(None);
    };

    // The embedded author summary carries the contact fields; the helped-count
    // only lives on the full profile, fetched separately.
    let people_helped = user_repo::load_user_profile(pool, &offer.author_id)
        .await?
        .and_then(|profile| profile.nb_people_helped)
        .unwrap_or(0);

    Ok(Some(build_view(offer, viewer_id, people_helped)))
}

fn build_view(offer: OfferRow, viewer_id: Option<&str>, people_helped: i64) -> OfferDetailView {
    let category = OfferCategory::parse(&offer.offer_type);
    let disclosure = disclosure_state(viewer_id, &offer.author_id);

    let contact = match disclosure {
        DisclosureState::AuthenticatedContact => Some(ContactView {
            pseudo: offer.author_pseudo.clone(),
            email: offer.author_email.clone(),
            phone: offer.author_phone.clone(),
        }),
        DisclosureState::Owner | DisclosureState::Anonymous => None,
    };

    let bio = offer
        .author_description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    OfferDetailView {
        offer_id: offer.offer_id,
        category_label: capitalize_label(&offer.offer_type),
        title: offer.title,
        published_label: format_published(&offer.created_at),
        published_at: offer.created_at,
        tags: split_tags(offer.tags.as_deref()),
        description_paragraphs: split_paragraphs(offer.description.as_deref()),
        price_label: price_label(offer.price),
        is_free: offer.price == 0.0,
        back: back_link(category),
        impact: impact_service::impact_profile(category),
        author: AuthorPanelView {
            pseudo: offer.author_pseudo,
            city: offer.author_city,
            postal_code: offer.author_postal_code,
            bio,
            people_helped,
        },
        is_owner: disclosure == DisclosureState::Owner,
        contact,
    }
}

pub fn disclosure_state(viewer_id: Option<&str>, author_id: &str) -> DisclosureState {
    match viewer_id {
        Some(id) if id == author_id => DisclosureState::Owner,
        Some(_) => DisclosureState::AuthenticatedContact,
        None => DisclosureState::Anonymous,
    }
}

pub fn back_link(category: OfferCategory) -> BackLink {
    match category {
        OfferCategory::Objet => BackLink {
            href: "/objets",
            label: "Retour à la liste des objets",
        },
        OfferCategory::Connaissance => BackLink {
            href: "/connaissances",
            label: "Retour à la liste des connaissances",
        },
        OfferCategory::Service => BackLink {
            href: "/services",
            label: "Retour à la liste des services",
        },
        OfferCategory::Unknown => BackLink {
            href: "/",
            label: "Retour à l'accueil",
        },
    }
}

pub fn price_label(price: f64) -> String {
    if price == 0.0 {
        "Gratuit".to_string()
    } else {
        format!("{} €", price)
    }
}

fn split_tags(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn split_paragraphs(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split('\n')
        .map(|p| p.trim_end_matches('\r'))
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.to_string())
        .collect()
}

fn capitalize_label(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}

// Expected input: "2025-03-12T14:30:00" (seconds and offset optional).
// Rendered as fr-FR long form, e.g. "12 mars 2025 à 14:30".
fn format_published(raw: &str) -> String {
    let Some((year, month, day)) = parse_ymd(raw) else {
        return raw.to_string();
    };
    let month_name = month_name_fr(month);
    let time = raw.get(11..16).unwrap_or("");
    if month_name.is_empty() || time.len() != 5 {
        return raw.to_string();
    }
    format!("{} {} {} à {}", day, month_name, year, time)
}

fn parse_ymd(date: &str) -> Option<(i32, i32, i32)> {
    let y = date.get(0..4)?.parse::<i32>().ok()?;
    let m = date.get(5..7)?.parse::<i32>().ok()?;
    let d = date.get(8..10)?.parse::<i32>().ok()?;
    Some((y, m, d))
}

fn month_name_fr(month: i32) -> &'static str {
    match month {
        1 => "janvier",
        2 => "février",
        3 => "mars",
        4 => "avril",
        5 => "mai",
        6 => "juin",
        7 => "juillet",
        8 => "août",
        9 => "septembre",
        10 => "octobre",
        11 => "novembre",
        12 => "décembre",
        _ => "",
    }
}
