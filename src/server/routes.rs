use crate::data::registry::DataRegistry;
use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

fn json_ok(payload: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body: payload,
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    let body = serde_json::json!({
        "status": "error",
        "message": message,
    });
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: serde_json::to_string_pretty(&body)
            .unwrap_or_else(|_| r#"{"status":"error"}"#.to_string()),
    }
}

fn request_error_response(err: api::RequestError) -> HttpResponse {
    match err {
        api::RequestError::Parse(_) => error_response(400, "Bad Request", &err.to_string()),
        api::RequestError::UnknownCreature(_) => {
            error_response(404, "Not Found", &err.to_string())
        }
        api::RequestError::NoMoves(_) => error_response(422, "Unprocessable Entity", &err.to_string()),
    }
}

pub fn route_request(
    registry: &DataRegistry,
    method: &str,
    path: &str,
    body: &str,
) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/creatures") => match api::creatures_payload(registry) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/relics") => match api::relics_payload(registry) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/meta") => match api::meta_payload(registry) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/damage") => match api::damage_payload(registry, body) {
            Ok(payload) => json_ok(payload),
            Err(err) => request_error_response(err),
        },
        ("POST", "/api/analyze") => match api::analyze_payload(registry, body) {
            Ok(payload) => json_ok(payload),
            Err(err) => request_error_response(err),
        },
        _ => error_response(404, "Not Found", "no such route"),
    }
}

fn index_html() -> String {
    concat!(
        "<!doctype html><html><head><title>counterdex</title></head><body>",
        "<h1>counterdex</h1>",
        "<p>Creature stat/damage estimation and team-counter scoring.</p>",
        "<ul>",
        "<li>GET /api/health</li>",
        "<li>GET /api/creatures</li>",
        "<li>GET /api/relics</li>",
        "<li>GET /api/meta</li>",
        "<li>POST /api/damage</li>",
        "<li>POST /api/analyze</li>",
        "</ul>",
        "</body></html>"
    )
    .to_string()
}
