//! Address repository

use crate::domain::{AddressRecord, NewAddress};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// All addresses belonging to `public_id`, joined with their country.
    /// No ordering guarantee.
    async fn list_by_owner(&self, public_id: &str) -> Result<Vec<AddressRecord>>;

    /// Lookup by public address id. Deliberately not owner-scoped: any
    /// caller holding the required access level may read any address.
    async fn find_by_address_id(&self, address_id: &str) -> Result<Option<AddressRecord>>;

    /// Persist a new address inside a transaction: either the row is
    /// fully committed or nothing is visible.
    async fn create(&self, input: &NewAddress) -> Result<()>;

    /// Delete where both the address id and the owner match. Returns the
    /// number of rows removed (0 or 1).
    async fn delete_by_address_id_and_owner(
        &self,
        address_id: &str,
        public_id: &str,
    ) -> Result<u64>;

    /// Page (1-based) of all addresses across owners plus the total row
    /// count. A page past the end yields an empty set with a valid total.
    async fn list_all_paginated(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<AddressRecord>, i64)>;
}

const SELECT_JOINED: &str = r#"
    SELECT a.address_id, a.public_id, a.house_name, a.house_number,
           a.address_line_1, a.address_line_2, a.address_line_3,
           a.state_region_county, c.name AS country_name,
           c.iso_code AS country_iso, a.post_zip_code, a.created
    FROM address a
    INNER JOIN country c ON c.id = a.country_id
"#;

pub struct AddressRepositoryImpl {
    pool: PgPool,
}

impl AddressRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryImpl {
    async fn list_by_owner(&self, public_id: &str) -> Result<Vec<AddressRecord>> {
        let addresses = sqlx::query_as::<_, AddressRecord>(&format!(
            "{SELECT_JOINED} WHERE a.public_id = $1"
        ))
        .bind(public_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(addresses)
    }

    async fn find_by_address_id(&self, address_id: &str) -> Result<Option<AddressRecord>> {
        let address = sqlx::query_as::<_, AddressRecord>(&format!(
            "{SELECT_JOINED} WHERE a.address_id = $1"
        ))
        .bind(address_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }

    async fn create(&self, input: &NewAddress) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO address (address_id, public_id, house_name, house_number,
                                 address_line_1, address_line_2, address_line_3,
                                 state_region_county, country_id, post_zip_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&input.address_id)
        .bind(&input.public_id)
        .bind(&input.house_name)
        .bind(&input.house_number)
        .bind(&input.address_line_1)
        .bind(&input.address_line_2)
        .bind(&input.address_line_3)
        .bind(&input.state_region_county)
        .bind(input.country_id)
        .bind(&input.post_zip_code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_by_address_id_and_owner(
        &self,
        address_id: &str,
        public_id: &str,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM address
            WHERE address_id = $1 AND public_id = $2
            "#,
        )
        .bind(address_id)
        .bind(public_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_all_paginated(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<AddressRecord>, i64)> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM address")
            .fetch_one(&self.pool)
            .await?;

        let offset = (page - 1) * per_page;
        let addresses = sqlx::query_as::<_, AddressRecord>(&format!(
            "{SELECT_JOINED} ORDER BY a.id LIMIT $1 OFFSET $2"
        ))
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((addresses, total.0))
    }
}
