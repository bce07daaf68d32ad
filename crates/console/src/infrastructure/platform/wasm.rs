//! WASM platform implementations
//!
//! Browser-backed implementations of the platform abstraction traits,
//! built on `web-sys` and `js-sys`.

use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// WASM time provider using the JS Date API
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM storage provider backed by localStorage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("Failed to write localStorage key: {}", key);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!("Failed to remove localStorage key: {}", key);
            }
        }
    }
}

/// WASM log provider; tracing-wasm routes these to the browser console
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// WASM document provider using the browser document
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmStorageProvider,
        WasmLogProvider,
        WasmDocumentProvider,
    )
}
