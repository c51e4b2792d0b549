//! TaskBoard Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - service: Project and board operations over the repositories
//! - commands: Tauri command handlers (`desktop` feature)

pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
mod desktop {
    use tauri::{Emitter, Manager};

    use crate::commands;
    use crate::config::AppConfig;
    use crate::repository::{open_database, DbState};
    use crate::service::BoardService;

    /// Application state shared across commands
    pub struct AppState {
        pub service: BoardService,
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        let result = tauri::Builder::default()
            .plugin(tauri_plugin_shell::init())
            .setup(|app| {
                // Single instance check - must be first!
                #[cfg(desktop)]
                app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

                let app_handle = app.handle().clone();
                let config = AppConfig::load_from_dir(&app_handle.path().app_config_dir()?)?;

                rolling_logger::init_logger_with(
                    app_handle.path().app_log_dir()?,
                    &config.log_name,
                    config.logger_options(),
                )?;

                let data_dir = app_handle.path().app_data_dir()?;
                std::fs::create_dir_all(&data_dir)?;
                let db_path = config.db_path(&data_dir);
                log::info!("App setup starting, database at {}", db_path.display());

                // Manage state IMMEDIATELY; commands fail with "Database not
                // initialized" until the background task installs the connection.
                let db_state = DbState::new();
                app.manage(AppState {
                    service: BoardService::new(&db_state, &config),
                });

                tauri::async_runtime::spawn(async move {
                    match open_database(&db_path) {
                        Ok(conn) => {
                            db_state.install(conn).await;
                            log::info!("Async DB init success");
                            if let Err(e) = app_handle.emit("db-initialized", ()) {
                                log::error!("Failed to emit db-initialized: {}", e);
                            }
                        }
                        Err(e) => {
                            log::error!("Async DB init failed: {}", e);
                        }
                    }
                });

                Ok(())
            })
            .invoke_handler(tauri::generate_handler![
                // Projects
                commands::list_projects,
                commands::get_project,
                commands::latest_project,
                commands::create_project,
                commands::update_project,
                commands::delete_project,
                // Columns
                commands::list_columns,
                commands::get_column,
                commands::create_column,
                commands::delete_column,
                // Tasks
                commands::list_tasks,
                commands::get_task,
                commands::create_task,
                commands::update_task_content,
                commands::delete_task,
                commands::update_tasks_position,
                // Logs
                commands::recent_logs,
                commands::frontend_log,
            ])
            .run(tauri::generate_context!());

        if let Err(e) = result {
            log::error!("error while running tauri application: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;
