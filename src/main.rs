use clap::Parser;
use palindrome_check::domain::ports::ConfigProvider;
use palindrome_check::utils::logger;
use palindrome_check::{
    default_checks, CheckEngine, CliConfig, ConsoleReporter, OutputFormat, PalindromeError,
    TokenReader,
};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.format == Some(OutputFormat::Json) {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let source = TokenReader::new(BufReader::new(tokio::io::stdin()));
    let sink = ConsoleReporter::new(tokio::io::stdout(), settings.output_format());
    let mut engine = CheckEngine::new(source, sink).with_max_attempts(settings.max_attempts());

    let checks = default_checks(&settings);
    match engine.run(&checks).await {
        Ok(reports) => {
            let palindromes = reports.iter().filter(|r| r.is_palindrome).count();
            tracing::info!("{} of {} inputs are palindromes", palindromes, reports.len());
        }
        Err(e) => fail(e),
    }
}

fn fail(e: PalindromeError) -> ! {
    tracing::debug!(
        "Run failed: {} (Category: {:?}, exit code {})",
        e,
        e.category(),
        e.exit_code()
    );

    eprintln!("❌ {}", e);
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
