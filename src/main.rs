use clap::Parser;
use records_summary_etl::utils::{logger, validation::Validate};
use records_summary_etl::{CliConfig, EtlEngine, SummaryPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting records-summary-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    // 創建管道與引擎並運行
    let pipeline = SummaryPipeline::new(config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(()) => {
            tracing::info!("✅ Summary submitted successfully!");
            println!("✅ Summary submitted successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}
