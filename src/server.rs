use http::{header, HeaderValue, Method, StatusCode};
use hyper::server::conn::AddrStream;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::history::{previous_year, PREVIOUS_YEARS};
use crate::core::table::Table;
use crate::core::templates::render_index;
use crate::error::{TableError, TableResult};
use crate::storage::RefreshingCache;
use crate::utils::year_parameter;

// Seconds clients are asked to wait before retrying after a failed refresh.
const RETRY_AFTER_SEC: &str = "60";

pub async fn serve(cache: RefreshingCache, port: u16) -> TableResult<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let make_svc = make_service_fn(move |conn: &AddrStream| {
        let cache = cache.clone();
        let remote = conn.remote_addr();
        async move {
            Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                let cache = cache.clone();
                async move {
                    info!("{} {} {}", remote, req.method(), req.uri());
                    Ok::<_, Infallible>(handle(&cache, req).await)
                }
            }))
        }
    });

    let server = Server::try_bind(&addr)?.serve(make_svc);
    info!("Serving combined table on http://{addr}");

    Ok(server.await?)
}

pub async fn handle(cache: &RefreshingCache, req: Request<Body>) -> Response<Body> {
    if req.method() != Method::GET || req.uri().path() != "/" {
        return text_response(StatusCode::NOT_FOUND, "Not Found");
    }

    match page(cache, year_parameter(req.uri().query())).await {
        Ok(html) => {
            let mut response = Response::new(Body::from(html));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            );
            response
        }
        Err(e) => {
            error!("Could not serve combined table. {e}");
            match e {
                TableError::MalformedInput(_)
                | TableError::PayloadNotFound
                | TableError::Schema { .. }
                | TableError::Transport(_) => {
                    let mut response = text_response(
                        StatusCode::SERVICE_UNAVAILABLE,
                        "The table could not be refreshed, please try again later.",
                    );
                    response
                        .headers_mut()
                        .insert(header::RETRY_AFTER, HeaderValue::from_static(RETRY_AFTER_SEC));
                    response
                }
                _ => text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            }
        }
    }
}

/// Page for the live season when no year is given, for a past season otherwise.
/// Unknown seasons give an empty table.
pub async fn page(cache: &RefreshingCache, year: Option<String>) -> TableResult<String> {
    let table = match year {
        None => cache.current_table().await?.0,
        Some(year) => Arc::new(Table {
            rows: previous_year(&year),
            year,
            generated_at: None,
            previous_years: &PREVIOUS_YEARS,
        }),
    };

    render_index(&table, cache.year())
}

fn text_response(status: StatusCode, text: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(text));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
