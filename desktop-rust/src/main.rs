mod app;
mod io;
mod model;

use app::DesktopApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let context = match io::load_config(io::config_arg().as_deref())
        .and_then(|config| Ok(fundbuero::startup::bootstrap(&config)?))
    {
        Ok(context) => context,
        Err(err) => {
            fatal(&format!("{err:#}"));
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([720.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "📦 Digitales Fundbüro",
        options,
        Box::new(|_cc| Box::new(DesktopApp::new(context))),
    )
}

/// One message, on stderr and as a dialog; no window is opened.
fn fatal(message: &str) {
    eprintln!("{}", message);
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Digitales Fundbüro")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
