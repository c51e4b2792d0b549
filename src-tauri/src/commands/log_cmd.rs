//! Log Commands

const DEFAULT_LINES: usize = 200;

/// Most recent backend log lines, oldest first
#[tauri::command]
pub fn recent_logs(lines: Option<usize>) -> Vec<String> {
    rolling_logger::recent_lines(lines.unwrap_or(DEFAULT_LINES))
}

/// Write a frontend message into the backend log
#[tauri::command]
pub fn frontend_log(level: String, message: String) -> Result<(), String> {
    let message = format!("[frontend] {}", message);
    match level.as_str() {
        "error" => rolling_logger::error(&message),
        "warn" => rolling_logger::warn(&message),
        _ => rolling_logger::info(&message),
    }
}
