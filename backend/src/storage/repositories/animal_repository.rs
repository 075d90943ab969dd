use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use shared::{Animal, AnimalDraft, AnimalStatus};

use crate::storage::connection::DbConnection;
use crate::storage::traits::AnimalStorage;

/// Repository for animal operations
#[derive(Clone)]
pub struct AnimalRepository {
    db: DbConnection,
}

impl AnimalRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_animal(row: &SqliteRow) -> Result<Animal> {
        let status: String = row.get("status");
        Ok(Animal {
            id: row.get("id"),
            name: row.get("name"),
            species: row.get("species"),
            age: row.get("age"),
            price: row.get("price"),
            status: status.parse::<AnimalStatus>().map_err(|e| anyhow!(e))?,
            owner: row.get("owner"),
        })
    }
}

#[async_trait]
impl AnimalStorage for AnimalRepository {
    async fn list_animals(&self) -> Result<Vec<Animal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, species, age, price, status, owner
            FROM animals
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_animal).collect()
    }

    async fn get_animal(&self, animal_id: i64) -> Result<Option<Animal>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, species, age, price, status, owner
            FROM animals
            WHERE id = ?
            "#,
        )
        .bind(animal_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_animal).transpose()
    }

    async fn list_animals_by_owner(&self, owner: &str) -> Result<Vec<Animal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, species, age, price, status, owner
            FROM animals
            WHERE owner = ?
            ORDER BY id ASC
            "#,
        )
        .bind(owner)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_animal).collect()
    }

    async fn store_animal(&self, draft: &AnimalDraft, owner: Option<&str>) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO animals (name, species, age, price, status, owner)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.species)
        .bind(draft.age)
        .bind(draft.price)
        .bind(draft.status.display())
        .bind(owner)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_animal(&self, animal_id: i64, draft: &AnimalDraft, owner: Option<&str>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE animals
            SET name = ?, species = ?, age = ?, price = ?, status = ?, owner = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.species)
        .bind(draft.age)
        .bind(draft.price)
        .bind(draft.status.display())
        .bind(owner)
        .bind(animal_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn relist_animal(&self, animal_id: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE animals SET status = ?, owner = NULL WHERE id = ?")
            .bind(AnimalStatus::Available.display())
            .bind(animal_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_owner_and_status(&self, animal_id: i64, owner: &str, status: AnimalStatus) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE animals
            SET status = ?, owner = ?
            WHERE id = ? AND status = 'Available'
            "#,
        )
        .bind(status.display())
        .bind(owner)
        .bind(animal_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purchase_animals(&self, animal_ids: &[i64], owner: &str) -> Result<Option<i64>> {
        let mut tx = self.db.pool().begin().await?;

        for &animal_id in animal_ids {
            let result = sqlx::query(
                r#"
                UPDATE animals
                SET status = 'Bought', owner = ?
                WHERE id = ? AND status = 'Available'
                "#,
            )
            .bind(owner)
            .bind(animal_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                debug!("Animal {} no longer available, rolling back purchase", animal_id);
                tx.rollback().await?;
                return Ok(Some(animal_id));
            }
        }

        tx.commit().await?;
        Ok(None)
    }

    async fn delete_animal(&self, animal_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM animals WHERE id = ?
            "#,
        )
        .bind(animal_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> AnimalRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        AnimalRepository::new(db)
    }

    fn draft(name: &str, species: &str, price: f64) -> AnimalDraft {
        AnimalDraft {
            name: name.to_string(),
            species: species.to_string(),
            age: 3,
            price,
            status: AnimalStatus::Available,
        }
    }

    #[tokio::test]
    async fn test_store_and_list_animals() {
        let repo = setup_test().await;

        assert!(repo.list_animals().await.unwrap().is_empty());

        let id = repo.store_animal(&draft("Rex", "Dog", 120.0), None).await.unwrap();
        let animals = repo.list_animals().await.unwrap();

        assert_eq!(animals.len(), 1);
        let rex = &animals[0];
        assert_eq!(rex.id, id);
        assert_eq!(rex.name, "Rex");
        assert_eq!(rex.species, "Dog");
        assert_eq!(rex.age, 3);
        assert_eq!(rex.price, 120.0);
        assert_eq!(rex.status, AnimalStatus::Available);
        assert_eq!(rex.owner, None);
    }

    #[tokio::test]
    async fn test_update_full_record() {
        let repo = setup_test().await;
        let id = repo.store_animal(&draft("Rex", "Dog", 120.0), None).await.unwrap();

        let mut changed = draft("Rexy", "Dog", 99.5);
        changed.age = 4;
        changed.status = AnimalStatus::Bought;
        assert!(repo.update_animal(id, &changed, Some("admin")).await.unwrap());

        let rex = repo.get_animal(id).await.unwrap().unwrap();
        assert_eq!(rex.name, "Rexy");
        assert_eq!(rex.age, 4);
        assert_eq!(rex.price, 99.5);
        assert_eq!(rex.status, AnimalStatus::Bought);
        assert_eq!(rex.owner.as_deref(), Some("admin"));

        assert!(!repo.update_animal(id + 100, &changed, None).await.unwrap());
    }

    #[tokio::test]
    async fn test_relist_clears_owner() {
        let repo = setup_test().await;
        let id = repo.store_animal(&draft("Milo", "Cat", 80.0), None).await.unwrap();
        assert!(repo.update_owner_and_status(id, "alice", AnimalStatus::Bought).await.unwrap());

        assert!(repo.relist_animal(id).await.unwrap());

        let milo = repo.get_animal(id).await.unwrap().unwrap();
        assert_eq!(milo.status, AnimalStatus::Available);
        assert_eq!(milo.owner, None);
        assert!(!repo.relist_animal(id + 100).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_owner_and_status_only_once() {
        let repo = setup_test().await;
        let id = repo.store_animal(&draft("Milo", "Cat", 80.0), None).await.unwrap();

        assert!(repo.update_owner_and_status(id, "alice", AnimalStatus::Bought).await.unwrap());
        // Second buyer must not overwrite the first
        assert!(!repo.update_owner_and_status(id, "bob", AnimalStatus::Bought).await.unwrap());

        let owned = repo.list_animals_by_owner("alice").await.unwrap();
        assert_eq!(owned.len(), 1);
        assert!(repo.list_animals_by_owner("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_purchase_animals_is_all_or_nothing() {
        let repo = setup_test().await;
        let rex = repo.store_animal(&draft("Rex", "Dog", 10.0), None).await.unwrap();
        let milo = repo.store_animal(&draft("Milo", "Cat", 25.5), None).await.unwrap();
        repo.update_owner_and_status(milo, "bob", AnimalStatus::Bought).await.unwrap();

        let blocked = repo.purchase_animals(&[rex, milo], "alice").await.unwrap();
        assert_eq!(blocked, Some(milo));

        // Rex must have been rolled back
        let rex_row = repo.get_animal(rex).await.unwrap().unwrap();
        assert_eq!(rex_row.status, AnimalStatus::Available);
        assert_eq!(rex_row.owner, None);

        assert_eq!(repo.purchase_animals(&[rex], "alice").await.unwrap(), None);
        let rex_row = repo.get_animal(rex).await.unwrap().unwrap();
        assert_eq!(rex_row.owner.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_delete_animal() {
        let repo = setup_test().await;
        let id = repo.store_animal(&draft("Rex", "Dog", 120.0), None).await.unwrap();

        assert!(repo.delete_animal(id).await.unwrap());
        assert!(repo.list_animals().await.unwrap().iter().all(|a| a.id != id));
        assert!(!repo.delete_animal(id).await.unwrap());
    }
}
