use crate::api::{report, scan};
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Report page
    cfg.service(web::resource("/").route(web::get().to(report::report_page)));

    // Scan endpoint; readers call it cross-origin, so the resource is
    // CORS-open. The tag may arrive via query string or form body.
    cfg.service(
        web::scope("/api").service(
            web::resource("/scan")
                .wrap(DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")))
                .route(web::get().to(scan::scan))
                .route(web::post().to(scan::scan)),
        ),
    );
}
