use std::env;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts runtime options for the bookstore service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub database_url: String,
    pub http_port: u16,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:books.db".to_string()),
            http_port: env::var("HTTP_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert!(!config.database_url.is_empty());
        assert!(config.http_port > 0);
    }
}
