use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    Sqlite,
    SqliteInMemory,
}

impl RepositoryStore {
    pub fn database_url(&self, config: &Configuration) -> String {
        match self {
            RepositoryStore::Sqlite => config.database_url.to_string(),
            RepositoryStore::SqliteInMemory => "sqlite::memory:".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_select_database_url() {
        let config = Configuration::new();
        assert_eq!(config.database_url, RepositoryStore::Sqlite.database_url(&config));
        assert_eq!("sqlite::memory:", RepositoryStore::SqliteInMemory.database_url(&config));
    }
}
