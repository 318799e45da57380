//! Freelancer forum entry point

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::{Component, INITIAL_FREELANCERS, UPDATE_INTERVAL, forum_info, logging};
use std::net::SocketAddr;
use tokio::signal;

use freelancer_forum::{
    ForumError, ForumResult, ForumServer, HtmlPresenter, RealWebSocketManager, UpdateLoop,
    core::{ForumState, RecordGenerator},
};

#[derive(Parser, Debug)]
#[command(name = "freelancer-forum")]
#[command(about = "Serves a live-updating list of randomly generated freelancers")]
struct Args {
    /// Interface to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Seed for the record generator; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ForumResult<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| ForumError::config(format!("Invalid address {}:{}: {}", args.host, args.port, e)))?;

    let mut rng = match args.seed {
        Some(seed) => {
            forum_info!(Component::WebServer, "🎲 Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let state = ForumState::with_initial_records(RecordGenerator::default(), INITIAL_FREELANCERS, &mut rng);
    let (update_loop, view_rx) = UpdateLoop::new(state, rng, UPDATE_INTERVAL);

    let server = ForumServer::new(view_rx, HtmlPresenter::new(), RealWebSocketManager::new());

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal"),
            Err(err) => logging::log_error(Component::WebServer, "Signal handling", &err),
        }
    };

    server.run(http_addr, update_loop, shutdown).await?;

    logging::log_success(Component::WebServer, "Freelancer forum stopped gracefully");
    Ok(())
}
