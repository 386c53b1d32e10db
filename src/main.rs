use clap::Parser;
use table_datagen::core::ConfigProvider;
use table_datagen::utils::{logger, validation::Validate};
use table_datagen::{CliConfig, GenError, GenerationEngine, LocalStorage, TablePipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting table-datagen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => {
                    let monitor = cli.monitor || config.monitoring_enabled();
                    generate(config, monitor).await
                }
                Err(e) => report_failure(&e),
            }
        }
        None => {
            let monitor = cli.monitor;
            generate(cli, monitor).await
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn generate<C: ConfigProvider + Validate + 'static>(config: C, monitor_enabled: bool) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::default();
    let pipeline = TablePipeline::new(storage, config);
    let mut engine = GenerationEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Table data generated successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Table data generated successfully!");
            println!("📁 Output saved to: {}", output_path);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &GenError) -> i32 {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    e.severity().exit_code()
}
