use std::sync::Mutex;

use tracing::info;

use crate::types::config::AppConfig;

/// Runtime configuration shared with the command layer.
#[derive(Default)]
pub struct ConfigState(Mutex<AppConfig>);

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        Self(Mutex::new(config))
    }

    pub fn current(&self) -> Result<AppConfig, String> {
        self.0
            .lock()
            .map(|c| c.clone())
            .map_err(|_| "Config lock poisoned".to_string())
    }

    fn replace(&self, config: AppConfig) -> Result<(), String> {
        let mut guard = self.0.lock().map_err(|_| "Config lock poisoned".to_string())?;
        *guard = config;
        Ok(())
    }
}

/// Direct state access for testing (no Tauri State)
pub fn config_get_state(state: &ConfigState) -> Result<AppConfig, String> {
    state.current()
}

/// Deep-merge a JSON patch into the current config. The merged document must
/// still deserialize as an `AppConfig` and pass `validate`, otherwise nothing
/// changes.
pub fn config_update_state(state: &ConfigState, patch_json: &str) -> Result<AppConfig, String> {
    let current = state.current()?;
    let mut current_val = serde_json::to_value(&current).map_err(|e| e.to_string())?;
    let patch_val: serde_json::Value =
        serde_json::from_str(patch_json).map_err(|e| e.to_string())?;
    if !patch_val.is_object() {
        return Err("Config patch must be a JSON object".to_string());
    }

    merge_json(&mut current_val, &patch_val);
    let merged: AppConfig = serde_json::from_value(current_val)
        .map_err(|e| format!("Invalid config: {}", e))?;
    merged
        .validate()
        .map_err(|e| format!("Invalid config: {}", e))?;
    state.replace(merged.clone())?;
    info!(config = ?merged, "Config updated");
    Ok(merged)
}

fn merge_json(base: &mut serde_json::Value, patch: &serde_json::Value) {
    if let (serde_json::Value::Object(base_map), serde_json::Value::Object(patch_map)) =
        (base, patch)
    {
        for (key, value) in patch_map {
            if value.is_object() && base_map.get(key).is_some_and(|v| v.is_object()) {
                if let Some(existing) = base_map.get_mut(key) {
                    merge_json(existing, value);
                }
            } else {
                base_map.insert(key.clone(), value.clone());
            }
        }
    }
}

// Tauri command wrappers, backed by State<ConfigState>
#[cfg(feature = "desktop")]
#[tauri::command]
pub fn config_get(state: tauri::State<'_, ConfigState>) -> Result<AppConfig, String> {
    config_get_state(&state)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn config_update(state: tauri::State<'_, ConfigState>, patch: String) -> Result<AppConfig, String> {
    config_update_state(&state, &patch)
}
