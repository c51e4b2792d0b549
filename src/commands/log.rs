//! Log Commands

use serde::Serialize;

use super::call;

#[derive(Serialize)]
struct FrontendLogArgs<'a> {
    level: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct RecentLogsArgs {
    lines: Option<usize>,
}

/// Forward a message to the backend log file
pub async fn frontend_log(level: &str, message: &str) -> Result<(), String> {
    call("frontend_log", &FrontendLogArgs { level, message }).await
}

pub async fn recent_logs(lines: Option<usize>) -> Result<Vec<String>, String> {
    call("recent_logs", &RecentLogsArgs { lines }).await
}
