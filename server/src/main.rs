//! Serves the compiled frontend. Every path that is not an embedded file
//! gets `index.html` so client-side routes survive a reload.

mod config;

use std::thread;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

fn open_browser_later(url: String) {
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(config::BROWSER_DELAY_MS));
        if let Err(e) = webbrowser::open(&url) {
            warn!("could not open browser at {url}: {e}");
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let url = format!("http://{}:{}", config::HOST, config::PORT);
    info!("serving frontend at {url}");

    if config::OPEN_BROWSER {
        open_browser_later(url);
    }

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config::HOST, config::PORT))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test};

    async fn get(path: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new().default_service(web::route().to(serve_embedded)),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await
    }

    fn content_type(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let resp = get("/").await;
        assert!(resp.status().is_success());
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let index = STATIC_DIR.get_file("index.html").unwrap().contents().to_vec();
        for path in ["/materias/editar/3", "/notas/alumno/7", "/alumnos/crear"] {
            let resp = get(path).await;
            assert!(resp.status().is_success(), "{path}");
            assert!(content_type(&resp).starts_with("text/html"), "{path}");
            let body = test::read_body(resp).await;
            assert_eq!(body.as_ref(), index.as_slice(), "{path}");
        }
    }
}
