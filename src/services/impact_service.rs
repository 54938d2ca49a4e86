//! Static "impact" panel content per listing category.
//!
//! The figures are illustrative editorial content, not computed metrics; they
//! are defined once here and never user-editable.

use crate::models::OfferCategory;

pub struct ImpactStat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct ImpactSource {
    pub text: &'static str,
    pub url: &'static str,
}

pub struct ImpactProfile {
    pub icon: &'static str,
    pub title: &'static str,
    pub stats: [ImpactStat; 2],
    pub tip: &'static str,
    pub source: ImpactSource,
}

static OBJET_IMPACT: ImpactProfile = ImpactProfile {
    icon: "🌱",
    title: "Impact environnemental évité",
    stats: [
        ImpactStat {
            value: "~6.5 kg CO2",
            label: "Émissions CO2 évitées",
            description: "par rapport à un achat neuf moyen",
        },
        ImpactStat {
            value: "40-70%",
            label: "Économie réalisée",
            description: "du prix neuf en moyenne",
        },
    ],
    tip: "En choisissant la seconde main, vous participez à l'économie circulaire et réduisez les déchets électroniques.",
    source: ImpactSource {
        text: "Source : ADEME - Impact environnemental du numérique",
        url: "https://www.ademe.fr/sites/default/files/assets/documents/guide-pratique-face-cachee-numerique.pdf",
    },
};

static SERVICE_IMPACT: ImpactProfile = ImpactProfile {
    icon: "💰",
    title: "Économies réalisées",
    stats: [
        ImpactStat {
            value: "30-50%",
            label: "Économie moyenne",
            description: "par rapport aux services professionnels moyens",
        },
        ImpactStat {
            value: "Gratuit",
            label: "Échange de compétences",
            description: "possibilité de troc de services",
        },
    ],
    tip: "Les services entre particuliers favorisent le lien social et l'entraide locale.",
    source: ImpactSource {
        text: "Source : Étude sur l'économie collaborative - INSEE",
        url: "https://www.insee.fr/fr/statistiques/4238589",
    },
};

static CONNAISSANCE_IMPACT: ImpactProfile = ImpactProfile {
    icon: "🧠",
    title: "Valeur de l'apprentissage",
    stats: [
        ImpactStat {
            value: "50-200€",
            label: "Coût formation évité",
            description: "par rapport aux formations payantes en moyenne",
        },
        ImpactStat {
            value: "100%",
            label: "Apprentissage personnalisé",
            description: "adapté à vos besoins spécifiques",
        },
    ],
    tip: "Partager ses connaissances renforce les compétences et crée du lien social.",
    source: ImpactSource {
        text: "Source : Observatoire de la formation - Centre Inffo",
        url: "https://www.centre-inffo.fr/",
    },
};

static DEFAULT_IMPACT: ImpactProfile = ImpactProfile {
    icon: "♻️",
    title: "Impact positif",
    stats: [
        ImpactStat {
            value: "Significative",
            label: "Réduction des déchets",
            description: "en donnant une seconde vie",
        },
        ImpactStat {
            value: "Renforcée",
            label: "Économie locale",
            description: "par les échanges de proximité",
        },
    ],
    tip: "Chaque geste compte pour un mode de vie plus durable.",
    source: ImpactSource {
        text: "Source : ADEME - Guide de l'économie circulaire",
        url: "https://www.ademe.fr/economie-circulaire",
    },
};

pub fn impact_profile(category: OfferCategory) -> &'static ImpactProfile {
    match category {
        OfferCategory::Objet => &OBJET_IMPACT,
        OfferCategory::Service => &SERVICE_IMPACT,
        OfferCategory::Connaissance => &CONNAISSANCE_IMPACT,
        OfferCategory::Unknown => &DEFAULT_IMPACT,
    }
}
