use clap::Parser;
use fundbuero::{capture, cli, config, error, prompt, search, startup};
use capture::CaptureSession;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use fundbuero_common::format_confidence;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Commands::Config { show, init } = cli.command {
        return run_config(cli.config.as_deref(), &config, show, init);
    }

    let app = startup::bootstrap(&config)?;

    match cli.command {
        Commands::Capture { image, camera: _, description, location, date, yes } => {
            println!("📦 Digitales Fundbüro - Fund erfassen\n");

            let mut session = CaptureSession::new();
            let prediction = match image {
                Some(path) => {
                    session.select_source(capture::ImageSource::Upload);
                    session.acquire_file(&path, app.classifier.as_ref())?
                }
                None => {
                    session.select_source(capture::ImageSource::Camera);
                    session.capture_from_camera(
                        app.config.camera_command.as_deref(),
                        app.classifier.as_ref(),
                    )?
                }
            };

            println!(
                "🤖 KI erkennt: {} ({})\n",
                prediction.label,
                format_confidence(prediction.confidence)
            );

            let form = prompt::complete_form(description, location, date)?;

            if !yes && !prompt::confirm_save()? {
                println!("Nicht gespeichert.");
                return Ok(());
            }

            let record = session.save(&form, &app.store)?;
            println!("✅ Fund erfolgreich gespeichert! ({})", record.image);
        }

        Commands::Search { label } => {
            let outcome = search::search(&app.store, &label)?;

            if outcome.is_empty() {
                println!("{}", search::NOT_FOUND_MESSAGE);
                return Ok(());
            }

            println!("🔍 {} Treffer für \"{}\"\n", outcome.len(), outcome.query);
            for hit in &outcome.hits {
                let missing = if hit.image_path.exists() { "" } else { " (Bild fehlt)" };
                println!("🖼️  {}{}", hit.image_path.display(), missing);
                for (caption, value) in hit.detail_rows() {
                    println!("  {}: {}", caption, value);
                }
                println!("---");
            }
        }

        Commands::Classify { image } => {
            let mut session = CaptureSession::new();
            let prediction = session.acquire_file(&image, app.classifier.as_ref())?;
            println!("{}\t{}", prediction.label, format_confidence(prediction.confidence));
        }

        Commands::Labels => {
            for label in search::label_choices(app.labels()) {
                println!("{}", label);
            }
        }

        Commands::Config { .. } => unreachable!("handled before bootstrap"),
    }

    Ok(())
}

fn run_config(
    explicit_path: Option<&Path>,
    config: &Config,
    show: bool,
    init: bool,
) -> Result<()> {
    let path = match explicit_path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    if init {
        if path.exists() {
            println!("Konfiguration existiert bereits: {}", path.display());
        } else {
            Config::default().save_to(&path)?;
            println!("✔ Konfiguration angelegt: {}", path.display());
        }
    }

    if show || !init {
        println!("Konfiguration ({}):", path.display());
        println!("  Modell: {}", config.model_path().display());
        println!("  Labels: {}", config.label_path().display());
        println!("  Daten: {}", config.data_path().display());
        println!("  Eingabegröße: {}px", config.input_size);
        match &config.camera_command {
            Some(cmd) => println!("  Kamera: {}", cmd.join(" ")),
            None => println!("  Kamera: nicht konfiguriert"),
        }
    }

    Ok(())
}
