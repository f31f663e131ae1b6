use shared::SpinConfig;
use web_sys::window;

const SPIN_CONFIG_KEY: &str = "memespin_spin_config";
const DEMO_MODE_KEY: &str = "memespin_demo";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            if location.contains("memespin") {
                // Same-origin gateway in production
                return "".to_string();
            }

            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, location);
        }
    }

    "http://127.0.0.1:3000".to_string()
}

fn local_storage_item(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
}

/// Spin tuning can be overridden from local storage with a JSON object; any
/// field left out keeps its default. Invalid overrides are ignored.
pub fn spin_config() -> SpinConfig {
    let Some(raw) = local_storage_item(SPIN_CONFIG_KEY) else {
        return SpinConfig::default();
    };

    match serde_json::from_str::<SpinConfig>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|config| config.validated().map_err(|e| e.to_string()))
    {
        Ok(config) => {
            log::info!("Using spin config override: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring spin config override: {}", e);
            SpinConfig::default()
        }
    }
}

/// Demo mode draws outcomes locally instead of asking the game gateway.
pub fn is_demo_mode() -> bool {
    let from_query = window()
        .and_then(|w| w.location().search().ok())
        .map(|search| search.contains("demo"))
        .unwrap_or(false);

    from_query || local_storage_item(DEMO_MODE_KEY).as_deref() == Some("true")
}
