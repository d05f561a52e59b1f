use clap::Parser;
use sim_archiver::utils::error::ErrorCategory;
use sim_archiver::utils::logger;
use sim_archiver::{ArchiveError, Archiver, CliConfig, LocalStorage};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let Some(source) = config.source_path() else {
        fail(ArchiveError::usage("missing path to the daily simulation CSV"));
    };

    if let Err(e) = run(&config, &source) {
        fail(e);
    }
}

fn run(config: &CliConfig, source: &Path) -> sim_archiver::Result<()> {
    let paths = config.resolve_paths()?;
    tracing::debug!(
        "Destinations: archive={} pool={}",
        paths.archive_dir.display(),
        paths.pool_dir.display()
    );

    let archiver = Archiver::new(LocalStorage::new(), paths);

    if config.dry_run {
        tracing::info!("🔍 Dry run, nothing will be written");
        for planned in archiver.plan(source)? {
            println!("Would copy {} -> {}", planned.from.display(), planned.to.display());
        }
        return Ok(());
    }

    let report = archiver.run(source)?;
    tracing::info!("✅ Archived {} ({} bytes)", report.file_name, report.bytes);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.confirmation());
    }

    Ok(())
}

fn fail(e: ArchiveError) -> ! {
    tracing::error!("❌ Archiving failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    if e.category() == ErrorCategory::Usage {
        println!("{}", CliConfig::usage());
    }
    eprintln!("❌ {}", e.user_friendly_message());

    std::process::exit(e.exit_code());
}
