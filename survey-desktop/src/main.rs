#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Background tasks spawn from the GUI thread; keep a runtime entered
    // for the whole lifetime of the app.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to start tokio runtime");
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mini Encuestas de la Comunidad",
        native_options,
        Box::new(|cc| Ok(Box::new(survey_desktop::SurveyApp::new(cc)))),
    )
}
