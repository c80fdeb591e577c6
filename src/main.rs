use clap::Parser;
use exercise_submit::utils::{logger, validation::Validate};
use exercise_submit::{
    CliConfig, HttpResultsApi, LayeredEnv, LocalReportFile, MapEnv, ProcessEnv, SubmissionHarness,
    SubmitError,
};

fn fail(e: &SubmitError) -> ! {
    tracing::debug!("Hard failure: {:?}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let env_file = match MapEnv::from_file(config.env_file_path()) {
        Ok(env) => env,
        Err(e) => fail(&e),
    };
    let env = LayeredEnv::new(ProcessEnv, env_file);

    let harness = SubmissionHarness::new(
        env,
        LocalReportFile,
        HttpResultsApi::new(),
        config.report_path(),
    )
    .with_context_timeout(config.context_timeout());

    match harness.run().await {
        Ok(outcome) => {
            tracing::info!(
                "Submission accepted (status: {}, id: {})",
                outcome.receipt.status_label(),
                outcome.receipt.id_label()
            );
            println!("{}", outcome);
        }
        Err(e) => fail(&e),
    }
}
