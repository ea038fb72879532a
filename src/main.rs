use std::path::PathBuf;

use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;

use slidecast::handlers;
use slidecast::models::deck::SlideDir;

/// Serve a directory of plain-text slide files as a browser presentation.
#[derive(Parser, Debug)]
#[command(name = "slidecast", version, about)]
struct Args {
    /// Directory containing slide files and template.json
    #[arg(long, default_value = "slides_demo")]
    slidedir: PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    if !args.slidedir.is_dir() {
        log::error!(
            "Slide directory '{}' does not exist",
            args.slidedir.display()
        );
        std::process::exit(1);
    }
    let slide_dir = SlideDir::new(args.slidedir);

    log::info!(
        "Serving slides from '{}' at http://127.0.0.1:8080",
        slide_dir.path().display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(slide_dir.clone()))
            // Presentation shell assets
            .service(actix_files::Files::new("/static", "./static"))
            // Slide assets (local images referenced by filename)
            .service(actix_files::Files::new("/slides", slide_dir.path()))
            .route("/", web::get().to(handlers::presentation_handlers::index))
            .route(
                "/api/slides",
                web::get().to(handlers::deck_handlers::slides),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
