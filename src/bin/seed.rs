use portfolio_site::{
    db::postgres::{create_pool, run_migrations},
    repositories::sqlx_repo::SqlxContentRepo,
    settings::AppConfig,
    telemetry::init_tracing,
    use_cases::seed::seed_demo_content,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new()?;
    init_tracing(&config.env);

    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    let store = SqlxContentRepo::new(pool);
    tracing::info!("Start seeding ...");

    let report = seed_demo_content(&store).await?;

    tracing::info!(?report, "Seeding finished");
    Ok(())
}
