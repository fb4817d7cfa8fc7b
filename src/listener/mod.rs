//! Accepts control requests from the network.

use std::io;
use std::sync::Arc;

use crate::config::Root;
use crate::signal::Dispatcher;

mod web;

/// Start the API for a pre-configured dispatcher and block until it exits.
pub fn serve(config: &Root, dispatcher: Arc<Dispatcher>) -> io::Result<()> {
    let web_handle = web::start_web_thread(&config.server.web_addr, dispatcher);

    web_handle.join().expect("Did the web thread crash?");

    Ok(())
}
