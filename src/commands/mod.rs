//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod column;
mod log;
mod project;
mod task;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the command's error string
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Invoke `cmd` with serialized `args` and decode the reply
async fn call<A, R>(cmd: &str, args: &A) -> Result<R, String>
where
    A: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke(cmd, js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

async fn call_no_args<R: DeserializeOwned>(cmd: &str) -> Result<R, String> {
    let result = invoke(cmd, JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

// Re-export all public items
pub use column::*;
pub use log::*;
pub use project::*;
pub use task::*;
