use chrono::{TimeZone, Utc};

use crate::{
    entities::{
        about::AboutContent,
        article::ArticleInput,
        content::CollectionEntity,
        hero::HeroContent,
        recommendation::{Recommendation, RecommendationInput},
        service::{Service, ServiceInput},
        technology::{Technology, TechnologyInput},
    },
    errors::AppError,
    repositories::content::{ArticleRepository, CollectionRepository, ContentStore, SingletonRepository},
};

const SEED_AUTHOR: &str = "Site Owner";

#[derive(Debug, Default, PartialEq)]
pub struct SeedReport {
    pub hero_created: bool,
    pub about_created: bool,
    pub services: usize,
    pub articles: usize,
    pub technologies: usize,
    pub recommendations: usize,
}

/// Loads the demo content. Safe to run repeatedly: singletons are only
/// written when absent and list records are matched on their natural key.
pub async fn seed_demo_content<S: ContentStore>(store: &S) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    if <S as SingletonRepository<HeroContent>>::load(store).await?.is_none() {
        <S as SingletonRepository<HeroContent>>::save(store, &HeroContent::default()).await?;
        report.hero_created = true;
    }
    tracing::info!("Seeded Hero section");

    if <S as SingletonRepository<AboutContent>>::load(store).await?.is_none() {
        <S as SingletonRepository<AboutContent>>::save(store, &AboutContent::default()).await?;
        report.about_created = true;
    }
    tracing::info!("Seeded About section");

    for input in services() {
        let draft = Service::draft(input)?;
        let existing = <S as CollectionRepository<Service>>::list(store).await?
            .into_iter()
            .find(|s| s.title == draft.title);

        match existing {
            Some(current) => <S as CollectionRepository<Service>>::update(store, &current.id, &draft).await?,
            None => <S as CollectionRepository<Service>>::insert(store, &draft).await?,
        };
        report.services += 1;
    }
    tracing::info!("Seeded {} services", report.services);

    for (slug, input) in articles() {
        let draft = match <S as ArticleRepository>::find_by_slug(store, slug).await? {
            Some(current) => {
                let draft = input.into_update_draft(slug.to_string(), &current);
                <S as ArticleRepository>::update(store, &current.id, &draft).await?;
                draft
            }
            None => {
                let draft = input.into_new_draft(slug.to_string(), SEED_AUTHOR);
                <S as ArticleRepository>::insert(store, &draft).await?;
                draft
            }
        };
        tracing::debug!(slug = %draft.slug, "Seeded article");
        report.articles += 1;
    }
    tracing::info!("Seeded {} articles", report.articles);

    for input in technologies() {
        let draft = Technology::draft(input)?;
        let existing = <S as CollectionRepository<Technology>>::list(store).await?
            .into_iter()
            .find(|t| t.name == draft.name);

        match existing {
            Some(current) => <S as CollectionRepository<Technology>>::update(store, &current.id, &draft).await?,
            None => <S as CollectionRepository<Technology>>::insert(store, &draft).await?,
        };
        report.technologies += 1;
    }
    tracing::info!("Seeded {} technologies", report.technologies);

    for input in recommendations() {
        let draft = Recommendation::draft(input)?;
        let existing = <S as CollectionRepository<Recommendation>>::list(store).await?
            .into_iter()
            .find(|r| r.name == draft.name && r.title == draft.title);

        match existing {
            Some(current) => <S as CollectionRepository<Recommendation>>::update(store, &current.id, &draft).await?,
            None => <S as CollectionRepository<Recommendation>>::insert(store, &draft).await?,
        };
        report.recommendations += 1;
    }
    tracing::info!("Seeded {} recommendations", report.recommendations);

    Ok(report)
}

fn services() -> Vec<ServiceInput> {
    vec![
        ServiceInput {
            title: "Web Development with React and Next.js".into(),
            description: "Fast, responsive and SEO-friendly sites with a focus on performance and usability.".into(),
            image_url: "https://placehold.co/600x400.png".into(),
            image_hint: "modern web interface".into(),
        },
        ServiceInput {
            title: "Hybrid Apps with React Native".into(),
            description: "Modern mobile applications with Expo and Firebase, integrated with REST and GraphQL APIs.".into(),
            image_url: "https://placehold.co/600x400.png".into(),
            image_hint: "mobile app dark".into(),
        },
        ServiceInput {
            title: "Technical Articles and Tutorials".into(),
            description: "Didactic content, technical articles and step-by-step guides for other developers.".into(),
            image_url: "https://placehold.co/600x400.png".into(),
            image_hint: "keyboard writing code".into(),
        },
    ]
}

fn articles() -> Vec<(&'static str, ArticleInput)> {
    vec![
        (
            "mastering-state-management-react-native",
            ArticleInput {
                title: "Mastering State Management in React Native".into(),
                excerpt: "A deep look at practices and libraries for managing state in React Native apps.".into(),
                content_markdown: "## Introduction\n\nManaging state gets harder as an app grows.\n\n### Context API\n\n### Redux\n\n### Zustand".into(),
                image_hint: Some("code abstract".into()),
                published_date: Utc.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).single(),
                author: Some(SEED_AUTHOR.into()),
                ..Default::default()
            },
        ),
        (
            "firebase-for-mobile-developers",
            ArticleInput {
                title: "Firebase for Mobile Developers: A Complete Guide".into(),
                excerpt: "How Firebase speeds up app development, from authentication to the realtime database.".into(),
                content_markdown: "## Firebase\n\nA backend as a service with database, auth and storage.\n\n### Authentication\n\n### Firestore".into(),
                image_hint: Some("mobile development".into()),
                published_date: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single(),
                author: Some(SEED_AUTHOR.into()),
                ..Default::default()
            },
        ),
    ]
}

fn technologies() -> Vec<TechnologyInput> {
    [
        ("React Native", "Smartphone", "#61DAFB"),
        ("Expo", "Box", "#000020"),
        ("Firebase", "DatabaseZap", "#FFCA28"),
        ("Java", "Coffee", "#007396"),
        ("Next.js", "Layers", "#000000"),
        ("PostgreSQL", "Database", "#336791"),
    ]
    .into_iter()
    .map(|(name, icon, color)| TechnologyInput {
        name: name.into(),
        icon_name: Some(icon.into()),
        icon_svg: None,
        color: Some(color.into()),
    })
    .collect()
}

fn recommendations() -> Vec<RecommendationInput> {
    vec![
        RecommendationInput {
            name: "Jordan Reed".into(),
            title: "Tech Lead at Agency X".into(),
            message: "Committed, fluent in React Native and consistently delivers quality work.".into(),
            avatar_hint: Some("person avatar".into()),
            ..Default::default()
        },
        RecommendationInput {
            name: "Sam Carter".into(),
            title: "Product Manager at Startup Y".into(),
            message: "Detail oriented, communicates well and proposes creative solutions.".into(),
            avatar_hint: Some("person avatar".into()),
            ..Default::default()
        },
    ]
}
