use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

const FILE_SIZE: u64 = 10 * 1024 * 1024; // INFO: 10 MB
const NUM_FILES: u32 = 3;

/// Console logs go to stderr: stdout is reserved to the channel responses
pub fn init_logger(file_all: bool, file_errors: bool, level: LevelFilter) -> Result<(), String> {
    let pattern = PatternEncoder::new("{h({d(%Y-%m-%d %H:%M:%S)} {({l}):5.5} {f}:{L})}: {m}{n}");
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(pattern.clone()))
        .build();

    let mut config_builder =
        log4rs::config::Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root_builder = Root::builder().appender("console");

    if file_all {
        let log_file_all = rolling_file("./logs/preview_host.log", "./logs/preview_host.{}.gz", &pattern)?;
        config_builder = config_builder.appender(Appender::builder().build("file_all", Box::new(log_file_all)));
        root_builder = root_builder.appender("file_all");
    }

    if file_errors {
        let log_file_errors = rolling_file("./logs/errors.log", "./logs/errors.{}.gz", &pattern)?;
        config_builder = config_builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Error)))
                .build("file_errors", Box::new(log_file_errors)),
        );
        root_builder = root_builder.appender("file_errors");
    }

    let config = config_builder
        .build(root_builder.build(level))
        .map_err(|e| e.to_string())?;
    log4rs::init_config(config).map_err(|e| e.to_string())?;

    log_panics::init();
    Ok(())
}

fn rolling_file(path: &str, archive_pattern: &str, pattern: &PatternEncoder) -> Result<RollingFileAppender, String> {
    let roller = FixedWindowRoller::builder()
        .build(archive_pattern, NUM_FILES)
        .map_err(|e| e.to_string())?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(FILE_SIZE)), Box::new(roller));

    RollingFileAppender::builder()
        .encoder(Box::new(pattern.clone()))
        .build(path, Box::new(policy))
        .map_err(|e| e.to_string())
}
