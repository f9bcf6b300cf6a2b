mod setup;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::{build_schema, AnalysisSchema};
use services::AnalysisConfig;
use setup::{set_up_tracing, ServerConfig};
use tracing_actix_web::TracingLogger;

#[get("/")]
async fn index() -> &'static str {
    "Hello, skin analysis!"
}

async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_request(schema: web::Data<AnalysisSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let server = ServerConfig::from_env();
    set_up_tracing(server.json_logs);

    let analysis = AnalysisConfig::from_env();
    tracing::info!(
        booking_url = %analysis.booking_url,
        delay = ?analysis.submission_delay,
        policy = ?analysis.selection_policy,
        "analysis configured"
    );

    // Build the Schema
    let schema = build_schema(analysis);

    tracing::info!(host = %server.host, port = server.port, "starting server");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(schema.clone()))
            .service(index)
            .service(
                web::resource("/graphql")
                    .route(web::post().to(graphql_request))
                    .route(web::get().to(graphql_playground)),
            )
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
