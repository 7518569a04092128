//! Blocking HTTP loop on `tiny_http`. Requests are handled one at a time.

use std::net::SocketAddr;

use stg_scan::ContentScanner;
use tiny_http::{Header, Request, Response};

use crate::error::ServerError;
use crate::routes::{ApiResponse, route};

/// Headers attached to every response.
const CORS_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Origin, X-Requested-With, Content-Type, Accept",
    ),
];

pub struct IndexServer {
    server: tiny_http::Server,
    scanner: ContentScanner,
}

impl IndexServer {
    /// Bind `addr` (`host:port`; port `0` picks a free one).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound.
    pub fn bind(addr: &str, scanner: ContentScanner) -> Result<Self, ServerError> {
        let server = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { server, scanner })
    }

    /// The bound TCP address.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Scan once up front, then serve until the listener fails.
    ///
    /// A failed initial scan is logged and serving continues; every listing
    /// request rescans anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Receive`] if accepting a request fails.
    pub fn run(self) -> Result<(), ServerError> {
        match self.scanner.build_index() {
            Ok(index) => tracing::info!(stages = index.stage_count(), "initial scan complete"),
            Err(error) => tracing::warn!(%error, "initial scan failed"),
        }

        if let Some(addr) = self.local_addr() {
            tracing::info!(%addr, "index server listening");
        }

        loop {
            self.handle_next()?;
        }
    }

    /// Block for one request and answer it.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Receive`] if accepting the request fails.
    pub fn handle_next(&self) -> Result<(), ServerError> {
        let request = self.server.recv()?;
        self.respond(request);
        Ok(())
    }

    fn respond(&self, request: Request) {
        let response = route(request.method(), request.url(), &self.scanner);
        tracing::debug!(
            method = %request.method(),
            url = request.url(),
            status = response.status,
            "request handled"
        );

        if let Err(error) = request.respond(into_http(response)) {
            tracing::warn!(%error, "failed to write response");
        }
    }
}

fn into_http(response: ApiResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let headers = std::iter::once(("Content-Type", response.content_type))
        .chain(CORS_HEADERS)
        .filter_map(|(name, value)| Header::from_bytes(name, value).ok());

    headers.fold(
        Response::from_string(response.body).with_status_code(response.status),
        Response::with_header,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_response_carries_cors_and_content_type() {
        let response = into_http(ApiResponse {
            status: 404,
            content_type: "application/json",
            body: "{}".to_string(),
        });

        assert_eq!(response.status_code().0, 404);
        let names: Vec<String> = response
            .headers()
            .iter()
            .map(|h| h.field.as_str().to_string())
            .collect();
        assert!(names.iter().any(|n| n == "Access-Control-Allow-Origin"));
        assert!(names.iter().any(|n| n == "Access-Control-Allow-Headers"));
        assert!(names.iter().any(|n| n == "Content-Type"));
    }
}
