use clap::Parser;
use gmm_advisor::utils::logger;
use gmm_advisor::{
    Advice, AdvisorEngine, AdvisorError, CatalogFile, CliConfig, MotorCatalog, OutputFormat,
};

fn main() {
    let config = CliConfig::parse();

    // Logs go to stderr; stdout carries only the result.
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting gmm-advisor");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Advice failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), AdvisorError> {
    let source = CatalogFile::for_path(config.catalog.as_deref())?;
    let engine = AdvisorEngine::from_source(&source)?;

    if config.list_motors {
        return print_catalog(engine.catalog(), config.format);
    }

    let file = config.resolve_answers()?;
    let answers = file.answers()?;
    let recommendation = engine.advise(&answers)?;

    let advice = Advice::build(file.profile(), answers, file.contact(), recommendation);
    match config.format {
        OutputFormat::Text => println!("{}", advice.render_text()),
        OutputFormat::Json => println!("{}", advice.to_json()?),
    }

    Ok(())
}

fn print_catalog(catalog: &MotorCatalog, format: OutputFormat) -> Result<(), AdvisorError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(catalog)?),
        OutputFormat::Text => {
            println!(
                "{:<8} {:>6} {:>6} {:>8} {:>10} {:>8} {:>8}",
                "model", "kW", "hp", "max m", "max kg", "cooling", "Nm"
            );
            for motor in catalog.iter() {
                println!(
                    "{:<8} {:>6} {:>6} {:>8} {:>10} {:>8} {:>8}",
                    motor.model,
                    motor.power_kw,
                    motor.power_hp,
                    motor.max_length_m,
                    motor.max_weight_kg,
                    motor.cooling,
                    motor.torque_nm
                );
            }
        }
    }
    Ok(())
}
