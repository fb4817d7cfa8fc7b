use std::io;
use std::sync::Arc;
use std::time::Duration;

use busylight_server::{config, listener, signal};

fn main() -> io::Result<()> {
    let config_root = config::read_config_yaml("./config.yaml")?;

    let dispatcher = Arc::new(signal::Dispatcher::from_config(&config_root).map_err(|err| {
        eprintln!("Unable to set up the dispatcher: {:?}", err);
        io::Error::from(io::ErrorKind::Other)
    })?);

    let interval = Duration::from_secs(config_root.schedule.check_interval_secs.unwrap_or(60));
    let (shutdown_tx, shutdown_rx) = crossbeam::channel::unbounded::<()>();
    let enforcer =
        signal::enforcer::start_enforcer_thread(dispatcher.clone(), interval, shutdown_rx);

    listener::serve(&config_root, dispatcher)?;

    // The listener only returns when the API is shutting down; stop the
    // enforcer at its next tick boundary.
    drop(shutdown_tx);
    enforcer.join().expect("Did the enforcer thread crash?");

    Ok(())
}
