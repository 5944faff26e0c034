use clap::Parser;
use math_trainer::adapters::StdinInput;
use math_trainer::config::presets;
use math_trainer::core::RulesProvider;
use math_trainer::utils::{logger, validation::Validate};
use math_trainer::{CliConfig, ProblemGenerator, SessionEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting math-trainer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_presets {
        println!("Available practice presets:");
        for id in presets::PRESET_IDS {
            println!("  {:<15} {}", id, presets::explanation(id));
        }
        return Ok(());
    }

    if let Some(id) = &config.explain {
        println!("{}: {}", id, presets::explanation(id));
        return Ok(());
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let rules = config.drill_rules()?;
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 Session timing enabled");
    }

    // 建立輸入來源與題目產生器
    let input = StdinInput::new();
    let generator = ProblemGenerator::new(rand::rng());
    let mut engine = SessionEngine::new_with_monitoring(input, generator, monitor_enabled);

    match engine.run(&rules) {
        Ok(report) => {
            tracing::info!(
                "✅ Practice session finished: {}/{} solved",
                report.solved,
                report.requested
            );
            if let Some(path) = &config.report_path {
                if let Err(e) = report.write_json(path) {
                    tracing::error!("❌ Failed to write report: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                math_trainer::utils::error::ErrorSeverity::Low => 0,
                math_trainer::utils::error::ErrorSeverity::Medium => 2,
                math_trainer::utils::error::ErrorSeverity::High => 1,
                math_trainer::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
