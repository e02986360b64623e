//! `wasm32` IndexedDB transport: one database, two object stores (`app_state`, `kv`).

use platform_host::AppStateEnvelope;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
const DB_NAME = "workspace_shell";
const DB_VERSION = 1;

function openDb() {
  return new Promise((resolve, reject) => {
    const req = indexedDB.open(DB_NAME, DB_VERSION);
    req.onupgradeneeded = () => {
      const db = req.result;
      if (!db.objectStoreNames.contains("app_state")) db.createObjectStore("app_state");
      if (!db.objectStoreNames.contains("kv")) db.createObjectStore("kv");
    };
    req.onsuccess = () => resolve(req.result);
    req.onerror = () => reject(req.error);
  });
}

export async function idbGet(store, key) {
  const db = await openDb();
  return new Promise((resolve, reject) => {
    const tx = db.transaction(store, "readonly");
    const req = tx.objectStore(store).get(key);
    req.onsuccess = () => resolve(req.result === undefined ? null : req.result);
    req.onerror = () => reject(req.error);
  });
}

export async function idbSet(store, key, value) {
  const db = await openDb();
  return new Promise((resolve, reject) => {
    const tx = db.transaction(store, "readwrite");
    tx.objectStore(store).put(value, key);
    tx.oncomplete = () => resolve();
    tx.onerror = () => reject(tx.error);
  });
}

export async function idbDelete(store, key) {
  const db = await openDb();
  return new Promise((resolve, reject) => {
    const tx = db.transaction(store, "readwrite");
    tx.objectStore(store).delete(key);
    tx.oncomplete = () => resolve();
    tx.onerror = () => reject(tx.error);
  });
}

export async function idbKeys(store) {
  const db = await openDb();
  return new Promise((resolve, reject) => {
    const tx = db.transaction(store, "readonly");
    const req = tx.objectStore(store).getAllKeys();
    req.onsuccess = () => resolve(req.result.map(String));
    req.onerror = () => reject(req.error);
  });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn idbGet(store: &str, key: &str) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch)]
    async fn idbSet(store: &str, key: &str, value: &str) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch)]
    async fn idbDelete(store: &str, key: &str) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch)]
    async fn idbKeys(store: &str) -> Result<JsValue, JsValue>;
}

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

async fn get_raw(store: &str, key: &str) -> Result<Option<String>, String> {
    let value = idbGet(store, key).await.map_err(js_err)?;
    Ok(value.as_string())
}

async fn set_raw(store: &str, key: &str, value: &str) -> Result<(), String> {
    idbSet(store, key, value).await.map_err(js_err).map(|_| ())
}

async fn delete_raw(store: &str, key: &str) -> Result<(), String> {
    idbDelete(store, key).await.map_err(js_err).map(|_| ())
}

async fn keys_raw(store: &str) -> Result<Vec<String>, String> {
    let value = idbKeys(store).await.map_err(js_err)?;
    let array: js_sys::Array = value.dyn_into().map_err(js_err)?;
    Ok(array.iter().filter_map(|v| v.as_string()).collect())
}

pub async fn load_app_state_envelope(namespace: &str) -> Result<Option<AppStateEnvelope>, String> {
    let Some(raw) = get_raw("app_state", namespace).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|e| e.to_string())
}

pub async fn save_app_state_envelope(envelope: &AppStateEnvelope) -> Result<(), String> {
    let raw = serde_json::to_string(envelope).map_err(|e| e.to_string())?;
    set_raw("app_state", &envelope.namespace, &raw).await
}

pub async fn delete_app_state(namespace: &str) -> Result<(), String> {
    delete_raw("app_state", namespace).await
}

pub async fn list_app_state_namespaces() -> Result<Vec<String>, String> {
    keys_raw("app_state").await
}

pub async fn kv_get(key: &str) -> Result<Option<String>, String> {
    get_raw("kv", key).await
}

pub async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    set_raw("kv", key, value).await
}

pub async fn kv_remove(key: &str) -> Result<(), String> {
    delete_raw("kv", key).await
}

pub async fn kv_keys() -> Result<Vec<String>, String> {
    keys_raw("kv").await
}
