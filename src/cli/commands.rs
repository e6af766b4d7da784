//! CLI command implementations
//!
//! Boot order is fixed: load and validate config, build the store from the
//! seed file, register resources, then serve. Commands other than `start`
//! never open a socket.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{
    AllowlistSerializer, ApiServer, ApiServerConfig, ApiVersion, Resource, ResourceRegistry,
    StoreListHandler,
};
use crate::observability::Logger;
use crate::store::{load_seed, CollectionSpec, MemoryStore};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed file the store boots from (default: "./campground.seed.json")
    #[serde(default = "default_seed_file")]
    pub seed_file: String,

    /// API server settings
    #[serde(default)]
    pub server: ApiServerConfig,
}

fn default_seed_file() -> String {
    "./campground.seed.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: default_seed_file(),
            server: ApiServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> CliResult<()> {
        if self.seed_file.is_empty() {
            return Err(CliError::config_error("seed_file must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        Ok(())
    }
}

/// Starter seed data written by `init`: the illustrative camp roster
const STARTER_SEED: &str = r#"{
  "campsites": [
    { "name": "North Meadow" },
    { "name": "Lakeside" },
    { "name": "Pine Hollow" }
  ],
  "campers": [
    { "name": "Rovaira", "campsite_id": 1 },
    { "name": "Juniper", "campsite_id": 1 },
    { "name": "Brel", "campsite_id": 1 },
    { "name": "Sashenka", "campsite_id": 2 },
    { "name": "Tomas", "campsite_id": 2 },
    { "name": "Imke", "campsite_id": 2 },
    { "name": "Odalys", "campsite_id": 3 },
    { "name": "Pike", "campsite_id": 3 },
    { "name": "Mara", "campsite_id": 3 }
  ]
}
"#;

/// The collections this deployment declares, parents first
fn camp_catalog() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec::new("campsites"),
        CollectionSpec::new("campers").with_foreign_key("campsite_id", "campsites"),
    ]
}

/// Build the store and load the configured seed file into it
pub fn build_store(config: &Config) -> CliResult<Arc<MemoryStore>> {
    let store = MemoryStore::new(camp_catalog());

    let loaded = load_seed(&store, Path::new(&config.seed_file))
        .map_err(|e| CliError::seed_error(e.to_string()))?;

    let loaded = loaded.to_string();
    Logger::info(
        "SEED_LOADED",
        &[("records", &loaded), ("seed_file", &config.seed_file)],
    );

    Ok(Arc::new(store))
}

/// Register every exposed resource against the store
///
/// This is the entire dispatch surface: each (version, collection) pair is
/// bound here, at startup, to its handler and serializer.
pub fn register_resources(store: &Arc<MemoryStore>) -> CliResult<Arc<ResourceRegistry>> {
    let registry = ResourceRegistry::new();

    registry
        .register(
            ApiVersion::V1,
            "campers",
            Resource::new(
                Arc::new(StoreListHandler::new(store.clone(), "campers")),
                AllowlistSerializer::new("campers", ["id", "name", "campsite_id"]),
            ),
        )
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    registry
        .register(
            ApiVersion::V1,
            "campsites",
            Resource::new(
                Arc::new(StoreListHandler::new(store.clone(), "campsites")),
                AllowlistSerializer::new("campsites", ["id", "name"]),
            ),
        )
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    Ok(Arc::new(registry))
}

/// Write a starter config file and seed file
///
/// The seed file lands next to the config file. Refuses to overwrite
/// either file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(format!(
            "Config file already exists: {}",
            config_path.display()
        )));
    }

    let parent = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let seed_path = parent.join("campground.seed.json");
    if seed_path.exists() {
        return Err(CliError::already_initialized(format!(
            "Seed file already exists: {}",
            seed_path.display()
        )));
    }

    let config = Config {
        seed_file: seed_path.display().to_string(),
        server: ApiServerConfig::default(),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))?;
    fs::write(config_path, content)?;
    fs::write(seed_path, STARTER_SEED)?;

    Logger::info(
        "INIT_COMPLETE",
        &[
            ("config", &config_path.display().to_string()),
            ("seed_file", &config.seed_file),
        ],
    );

    Ok(())
}

/// Boot the store and serve until interrupted
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = build_store(&config)?;
    let registry = register_resources(&store)?;

    let server = ApiServer::with_config(config.server.clone(), registry);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}

/// Print the registered route table and exit
pub fn routes(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = build_store(&config)?;
    let registry = register_resources(&store)?;

    println!("GET /health");
    for (version, collection) in registry.routes() {
        println!("GET /api/{}/{}", version, collection);
    }

    Ok(())
}
