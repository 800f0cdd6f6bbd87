//! Hyper http1 serve loop
//!
//! One spawned task per connection; a failed connection only takes
//! itself down. No timeout is imposed on handlers, matching the rest of
//! the system: a hung outbound call blocks its own request only.

use std::convert::Infallible;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use super::{routes, AppState};

pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("HTTP surface listening on {addr}");

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let state = state.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let state = state.clone();
                async move { Ok::<_, Infallible>(routes::handle(req, state).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                log::debug!("connection from {peer} ended with error: {err:?}");
            }
        });
    }
}
