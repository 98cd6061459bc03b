use crate::utils::file::DEFAULT_BOOKS_FILE;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    File,
    Memory,
}

impl BackendType {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => BackendType::Memory,
            "file" | "json" => BackendType::File,
            other => {
                warn!("Unknown BACKEND_TYPE '{}', using file backend", other);
                BackendType::File
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub books_file: PathBuf,
    pub backend: BackendType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            books_file: PathBuf::from(DEFAULT_BOOKS_FILE),
            backend: BackendType::File,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let books_file = lookup("BOOKS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.books_file);

        let backend = lookup("BACKEND_TYPE")
            .map(|value| BackendType::parse(&value))
            .unwrap_or(defaults.backend);

        Self {
            port,
            books_file,
            backend,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.books_file, PathBuf::from("books.json"));
        assert_eq!(config.backend, BackendType::File);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BOOKS_FILE", "/data/library.json"),
            ("BACKEND_TYPE", "Memory"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.books_file, PathBuf::from("/data/library.json"));
        assert_eq!(config.backend, BackendType::Memory);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("BACKEND_TYPE", "redis")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.backend, BackendType::File);
    }
}
