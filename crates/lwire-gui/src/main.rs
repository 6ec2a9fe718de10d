//! lwire GUI application entry point.

mod app;
mod panels;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "The L Charge",
        options,
        Box::new(|_cc| Ok(Box::new(app::LwireApp::default()))),
    )
}
