//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use dinescout::business::{Business, Category, PriceTier};
use dinescout::config::Config;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Config pointing at `base_url` with a test credential.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.api_key = Some("test-key".to_string());
    config.defaults.timeout_seconds = 2;
    config.defaults.connect_timeout_seconds = 1;
    config
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn business(
    name: &str,
    rating: f64,
    reviews: u32,
    price: PriceTier,
    aliases: &[&str],
) -> Business {
    Business {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        image_url: format!("https://img.example/{}.jpg", name.len()),
        categories: aliases
            .iter()
            .map(|a| Category {
                title: a.to_string(),
                alias: a.to_string(),
            })
            .collect(),
        rating,
        review_count: reviews,
        price,
    }
}

/// The two-restaurant list used throughout the filter examples.
pub fn pasta_and_tacos() -> Vec<Business> {
    vec![
        business("Pasta Place", 4.5, 10, PriceTier::Two, &["italian"]),
        business("Taco Hut", 4.8, 300, PriceTier::One, &["mexican"]),
    ]
}

pub fn names(list: &[Business]) -> Vec<&str> {
    list.iter().map(|b| b.name.as_str()).collect()
}

/// JSON search page as the upstream would return it.
pub fn search_page(businesses: &[Business]) -> String {
    serde_json::json!({ "businesses": businesses, "total": businesses.len() }).to_string()
}
