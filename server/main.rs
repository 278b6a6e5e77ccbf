mod network;
mod routing;
mod rules;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use serde_json::{Map, Value};
use std::env;

use network::{Link, Network};
use routing::RouteRequest;
use rules::RuleEngine;

struct AppState {
    network: Network,
    engine: RuleEngine,
}

#[derive(Serialize)]
struct GraphLink<'a> {
    u: &'a str,
    v: &'a str,
    d: &'a Link,
}

#[derive(Serialize)]
struct GraphResponse<'a> {
    nodes: Map<String, Value>,
    edges: Vec<GraphLink<'a>>,
}

#[post("/route")]
async fn route(state: web::Data<AppState>, request: web::Json<RouteRequest>) -> impl Responder {
    log::debug!("Route request {} -> {}", request.origin, request.destination);
    let response = routing::compute_route(&state.network, &state.engine, &request);
    HttpResponse::Ok().json(response)
}

#[get("/graph")]
async fn graph(state: web::Data<AppState>) -> impl Responder {
    let nodes = state
        .network
        .station_ids()
        .map(|id| (id.to_string(), Value::Object(Map::new())))
        .collect();
    let edges = state
        .network
        .links()
        .map(|(u, v, d)| GraphLink { u, v, d })
        .collect();
    HttpResponse::Ok().json(GraphResponse { nodes, edges })
}

fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(route).service(graph);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8000
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());

    let state = web::Data::new(AppState {
        network: Network::sample(),
        engine: RuleEngine::standard(),
    });

    log::info!(
        "Loaded network with {} stations and {} links",
        state.network.station_count(),
        state.network.link_count()
    );
    log::info!("Starting server on 0.0.0.0:{port}, serving {static_dir}");

    HttpServer::new(move || {
        App::new()
            // The client may be served from another origin during development
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(api)
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
