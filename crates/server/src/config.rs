use std::{collections::HashMap, fs};

use serde::Deserialize;

pub const DEFAULT_MAX_BATCH_SIZE: usize = 10000;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub max_batch_size: usize,
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8000".into(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            rng_seed: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("max_batch_size") {
                apply_max_batch_size(&mut settings, v);
            }
            if let Some(v) = file_cfg.get("rng_seed") {
                apply_rng_seed(&mut settings, v);
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("MAX_BATCH_SIZE") {
        apply_max_batch_size(&mut settings, &v);
    }
    if let Ok(v) = std::env::var("APP__MAX_BATCH_SIZE") {
        apply_max_batch_size(&mut settings, &v);
    }

    if let Ok(v) = std::env::var("RNG_SEED") {
        apply_rng_seed(&mut settings, &v);
    }
    if let Ok(v) = std::env::var("APP__RNG_SEED") {
        apply_rng_seed(&mut settings, &v);
    }

    settings
}

// Batch size overrides must be positive; anything else keeps the
// previous value.
fn apply_max_batch_size(settings: &mut Settings, raw: &str) {
    if let Ok(parsed) = raw.trim().parse::<usize>() {
        if parsed > 0 {
            settings.max_batch_size = parsed;
        }
    }
}

fn apply_rng_seed(settings: &mut Settings, raw: &str) {
    if let Ok(parsed) = raw.trim().parse::<u64>() {
        settings.rng_seed = Some(parsed);
    }
}
