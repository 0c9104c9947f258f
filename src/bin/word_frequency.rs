use clap::Parser;
use tally_beat::core::render::write_report;
use tally_beat::utils::{logger, validation::Validate};
use tally_beat::{TallyError, WordFrequencyArgs, WordFrequencyReporter};

fn main() {
    let args = WordFrequencyArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ Word frequency report failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        std::process::exit(e.severity().exit_code());
    }
}

fn run(args: &WordFrequencyArgs) -> Result<(), TallyError> {
    let config = args.resolve()?;
    config.validate()?;

    let text = config.source_text()?;
    let reporter = WordFrequencyReporter::new(config.counting());
    let report = reporter.report(&text);
    tracing::debug!(
        "Reporting {} distinct words ({:?} counting)",
        report.len(),
        reporter.counting()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&report, config.format(), &mut out)
}
