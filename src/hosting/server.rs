use super::request::ShowdownRequest;
use super::request::WinRequest;
use super::response::Problem;
use super::response::Scale;
use super::response::ShowdownResponse;
use super::response::WinResponse;
use crate::equity::Config;
use crate::equity::Engine;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

/// Default listen address when `BIND_ADDR` is unset.
pub const BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Server;

impl Server {
    pub async fn run(config: Config, bind: String) -> Result<(), std::io::Error> {
        let state = web::Data::new(config);
        log::info!("starting equity server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .app_data(web::JsonConfig::default().error_handler(|e, _| {
                    let problem = Problem::new(400, "MalformedRequest", &e);
                    actix_web::error::InternalError::from_response(
                        e,
                        HttpResponse::BadRequest().json(problem),
                    )
                    .into()
                }))
                .configure(routes)
        })
        .bind(bind)?
        .run()
        .await
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/holdem/calc/win/percentage", web::post().to(win))
        .route("/holdem/calc/showdown/percentage", web::post().to(showdown));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn win(config: web::Data<Config>, req: web::Json<WinRequest>) -> impl Responder {
    let req = req.into_inner();
    let (table, config) = match req.table().and_then(|t| Ok((t, req.config(**config)?))) {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("rejected win request: {}", e);
            return HttpResponse::BadRequest().json(Problem::from(&e));
        }
    };
    let engine = Engine::from(config);
    let scale = Scale(req.scale);
    match web::block(move || engine.run(&table)).await {
        Ok(report) => HttpResponse::Ok().json(WinResponse::from((report, scale))),
        Err(e) => HttpResponse::InternalServerError().json(Problem::new(500, "Internal", e)),
    }
}

async fn showdown(config: web::Data<Config>, req: web::Json<ShowdownRequest>) -> impl Responder {
    let req = req.into_inner();
    let (showdown, config) = match req.showdown().and_then(|s| Ok((s, req.config(**config)?))) {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("rejected showdown request: {}", e);
            return HttpResponse::BadRequest().json(Problem::from(&e));
        }
    };
    let engine = Engine::from(config);
    let scale = Scale(req.scale);
    match web::block(move || showdown.run(&engine)).await {
        Ok(verdict) => HttpResponse::Ok().json(ShowdownResponse::from((verdict, scale))),
        Err(e) => HttpResponse::InternalServerError().json(Problem::new(500, "Internal", e)),
    }
}
