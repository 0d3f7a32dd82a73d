mod commands;
pub mod diagnosis;
mod error;
pub mod service_config;

pub use diagnosis::{AnalysisResult, DiagnosisClient, HistoryEntry};
pub use error::LumeError;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::diagnosis::fetch_history,
            commands::diagnosis::analyze_log,
            commands::config::get_service_url,
            commands::config::set_service_url,
        ])
        .setup(|app| {
            match service_config::service_url(app.handle()) {
                Ok(url) => tracing::info!("Analysis service at {}", url),
                Err(e) => tracing::warn!("Analysis service URL is not usable: {}", e),
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
