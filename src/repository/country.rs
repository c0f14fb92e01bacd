//! Country repository

use crate::domain::Country;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Case- and length-exact lookup by 3-letter ISO code
    async fn find_by_iso_code(&self, iso_code: &str) -> Result<Option<Country>>;
    async fn list_all(&self) -> Result<Vec<Country>>;
}

pub struct CountryRepositoryImpl {
    pool: PgPool,
}

impl CountryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for CountryRepositoryImpl {
    async fn find_by_iso_code(&self, iso_code: &str) -> Result<Option<Country>> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, iso_code
            FROM country
            WHERE iso_code = $1
            "#,
        )
        .bind(iso_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(country)
    }

    async fn list_all(&self) -> Result<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, iso_code
            FROM country
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(countries)
    }
}
