use clap::Parser;
use tally_beat::utils::{logger, validation::Validate};
use tally_beat::{
    Heartbeat, HeartbeatArgs, OsRandomSource, SystemClock, TallyConfig, TallyError, TokioSleeper,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = HeartbeatArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let heartbeat = Heartbeat::new(
        OsRandomSource,
        SystemClock,
        TokioSleeper,
        config.heartbeat_settings(),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let exit_code = heartbeat.run_reporting(&mut out).await;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn load_config(args: &HeartbeatArgs) -> Result<TallyConfig, TallyError> {
    let config = args.resolve()?;
    config.validate()?;
    Ok(config)
}
