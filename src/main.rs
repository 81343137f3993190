use anyhow::Context;
use clap::Parser;
use intake_check::config::cli::{suggest_from_config, validate_form_file};
use intake_check::utils::{logger, validation::Validate};
use intake_check::{CliConfig, Command, IntakeConfig, IntakeError};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔不存在時使用預設值
    let config = if Path::new(&cli.config).exists() {
        IntakeConfig::from_file(&cli.config)
            .with_context(|| format!("Failed to load config file '{}'", cli.config))?
    } else {
        IntakeConfig::default()
    };

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("🚀 Starting intake-check");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!(
            "❌ intake-check failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        if let IntakeError::FormRejected { issues } = &e {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(issues)?);
            } else {
                for issue in issues {
                    eprintln!("  ✗ {}", issue);
                }
            }
        }
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(cli: &CliConfig, config: &IntakeConfig) -> intake_check::Result<()> {
    match &cli.command {
        Command::Validate { form, today } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            tracing::info!("📁 Validating {} as of {}", form, today);

            validate_form_file(config, form, today)?;

            tracing::info!("✅ Form accepted");
            if cli.json {
                println!("[]");
            } else {
                println!("✅ {} is valid", form);
            }
        }
        Command::Suggest { list, query } => {
            let suggestions = suggest_from_config(config, *list, &query.join(" "))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
                return Ok(());
            }
            for candidate in &suggestions.candidates {
                println!("{}", candidate);
            }
            if let Some(value) = &suggestions.auto_select {
                println!("→ auto-select: {}", value);
            }
        }
    }

    Ok(())
}
