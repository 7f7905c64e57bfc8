use catalog_cart_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let inserted = seed_products(&pool).await?;
    pool.close().await;

    println!("Seed completed. {inserted} new products");
    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<u64> {
    let products: Vec<(&str, i64, &str, &str, &str)> = vec![
        (
            "Ferris Plush",
            2500,
            "Soft crab for your desk",
            "ferris-plush",
            "https://example.com/img/ferris-plush.png",
        ),
        (
            "Rust Mug",
            1200,
            "Coffee tastes better oxidised",
            "rust-mug",
            "https://example.com/img/rust-mug.png",
        ),
        (
            "Sticker Pack",
            500,
            "Decorate your laptop",
            "sticker-pack",
            "https://example.com/img/stickers.png",
        ),
        (
            "Async Hoodie",
            5500,
            "Warm hoodie, never blocks",
            "async-hoodie",
            "https://example.com/img/hoodie.png",
        ),
    ];

    let mut inserted = 0;
    for (name, price, description, slug, url) in products {
        let result = sqlx::query(
            r#"
            INSERT INTO product (name, price, description, slug, url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(description)
        .bind(slug)
        .bind(url)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    println!("Seeded products");
    Ok(inserted)
}
