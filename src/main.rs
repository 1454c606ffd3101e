use clap::Parser;
use native_preview_host::app::cli_args::CliArgs;
use native_preview_host::app::configs::AppConfig;
use native_preview_host::app::logger::init_logger;

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = init_logger(
        args.is_file_all_enabled(),
        args.is_file_error_enabled(),
        args.get_log_level(),
    ) {
        eprintln!("Can't initialize the logger: {}", e);
    }

    let config = match args.get_config_file() {
        Some(cfg_file) => AppConfig::load(&cfg_file)
            .inspect_err(|e| log::error!("Can't read config file {}: {}", cfg_file.display(), e))
            .unwrap_or_default(),
        None => {
            log::warn!("Can't locate the home directory, using the default configuration");
            AppConfig::default()
        }
    };

    log::info!("Application started!");
    let code = run(&config);
    log::info!("Application stopped!");
    std::process::exit(code);
}

#[cfg(all(windows, target_pointer_width = "64"))]
fn run(config: &AppConfig) -> i32 {
    use native_preview_host::channel::registrar::register_with_registrar;
    use native_preview_host::channel::stdio::StdioTransport;
    use native_preview_host::host::locator::ProcessWindowLocator;
    use native_preview_host::win32::api::window::from_hwnd;
    use native_preview_host::win32::win32_window_system::Win32WindowSystem;
    use native_preview_host::win32::win_event_loop::pump_pending_messages;
    use native_preview_host::win32::window::app_window::AppWindow;
    use std::io::{BufRead, Write};
    use std::time::Duration;

    let Some(app_window) = AppWindow::create(&config.window) else {
        return 1;
    };
    let Some(system) = Win32WindowSystem::new(&config.host.placeholder_class) else {
        log::error!("Invalid placeholder class '{}'", config.host.placeholder_class);
        return 1;
    };

    let mut transport = StdioTransport::new(Some(from_hwnd(app_window.hwnd())), &config.host.channel);
    register_with_registrar(&mut transport, system, ProcessWindowLocator, &config.host.channel);

    // INFO: stdin is read on its own thread, every request is executed on this (UI) thread
    let (line_tx, line_rx) = crossbeam_channel::unbounded::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) if line_tx.send(line).is_ok() => (),
                _ => break,
            }
        }
    });

    let poll_interval = Duration::from_millis(config.host.poll_interval_ms.max(1));
    let mut stdout = std::io::stdout();
    while pump_pending_messages() {
        match line_rx.recv_timeout(poll_interval) {
            Ok(line) => {
                if let Some(response) = transport.dispatch_line(&line) {
                    if writeln!(stdout, "{}", response).and_then(|_| stdout.flush()).is_err() {
                        log::error!("Can't write to stdout");
                        break;
                    }
                }
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => (),
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                log::info!("Input closed");
                break;
            }
        }
    }

    // INFO: restores every attached window before the application window goes away
    drop(transport);
    drop(app_window);
    0
}

#[cfg(not(all(windows, target_pointer_width = "64")))]
fn run(_config: &AppConfig) -> i32 {
    log::error!("Native window embedding is only supported on 64-bit Windows");
    1
}
