use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{
        sse::{Event, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use sampling::{FrameStream, PointSampler, StreamSession};
use shared::{
    error::ApiError,
    protocol::{GeneratePointsRequest, StreamFrame},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

mod config;

use config::{load_settings, Settings};

#[derive(Clone)]
struct AppState {
    max_batch_size: usize,
    rng_seed: Option<u64>,
}

impl AppState {
    fn new(settings: &Settings) -> Self {
        Self {
            max_batch_size: settings.max_batch_size,
            rng_seed: settings.rng_seed,
        }
    }

    fn sampler(&self) -> PointSampler {
        match self.rng_seed {
            Some(seed) => PointSampler::from_seed(seed),
            None => PointSampler::from_entropy(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState::new(&settings);
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, max_batch_size = settings.max_batch_size, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(hello))
        .route("/healthz", get(healthz))
        .route("/generatePoints", post(generate_points))
        .layer(cors)
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello, World!"
}

async fn healthz() -> &'static str {
    "ok"
}

async fn generate_points(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GeneratePointsRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let num_points = req.num_points().map_err(|error| {
        warn!(%error, "rejected generatePoints request");
        (StatusCode::BAD_REQUEST, Json(ApiError::from(error)))
    })?;

    info!(
        num_points,
        max_batch_size = state.max_batch_size,
        "starting point stream"
    );

    let session = StreamSession::new(num_points, state.max_batch_size);
    let frames = FrameStream::new(session, state.sampler());
    let events = tokio_stream::iter(frames.map(sse_event));

    Ok((
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Sse::new(events),
    ))
}

fn sse_event(frame: StreamFrame) -> Result<Event, axum::Error> {
    let event = Event::default().event(frame.event_name());
    match frame {
        StreamFrame::Start(totals) | StreamFrame::End(totals) => event.json_data(totals),
        StreamFrame::Batch(batch) => event.json_data(batch),
    }
}
