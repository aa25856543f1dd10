use std::path::Path;
use std::sync::Arc;

use lifelog::config::loader::{load_or_default, DEFAULT_CONFIG_FILE};
use lifelog::lifecycle::{death, shutdown, startup, Listener, OsEventSource};
use lifelog::observability::logging;
use lifelog::sink::{FileSink, Recorder};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match load_or_default(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lifelog: invalid {}: {}", DEFAULT_CONFIG_FILE, e);
            std::process::exit(2);
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        path = %config.sink.path.display(),
        heartbeat_delay_secs = config.heartbeat.delay_secs,
        "Configuration loaded"
    );

    let sink = Arc::new(FileSink::new(config.sink.path.clone()));
    let recorder = Arc::new(Recorder::new(sink));
    let listener = Listener::new(recorder.clone());

    // Handlers go in before anything is written so no event is missed.
    death::install_panic_hook(listener.clone());
    let mut source = OsEventSource::install();

    let heartbeat_delay = config.heartbeat.delay();
    let run_listener = listener.clone();
    let termination = shutdown::supervise(async move {
        let heartbeat = startup::start(&recorder, heartbeat_delay).await;
        println!("Self PID: {}", std::process::id());

        shutdown::wait_for_termination(&run_listener, &mut source, heartbeat).await
    })
    .await;

    shutdown::exit(&listener, termination)
}
