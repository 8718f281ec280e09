//! # http_core - Entry Point
//! src/main.rs
//!
//! Servidor de demostración sobre la capa de mensajes y el router.
//! Registra un puñado de rutas que ejercitan literales, parámetros
//! nombrados y el comodín.

use http_core::config::Config;
use http_core::http::{headers, Request, Response};
use http_core::router::Router;
use http_core::server::Server;

/// Handler para /status
fn status_handler(_req: &Request, resp: &mut Response) {
    *resp = Response::json(r#"{"status": "running", "server": "http_core"}"#);
}

/// Handler para /users/:id
fn user_handler(req: &Request, resp: &mut Response) {
    let id = req.param("id").unwrap_or("");
    let body = serde_json::json!({ "user": id }).to_string();
    *resp = Response::json(&body);
}

/// Handler para /files/* (el resto del path queda bajo "*")
fn files_handler(req: &Request, resp: &mut Response) {
    let path = req.param("*").unwrap_or("");
    let body = serde_json::json!({ "file": path }).to_string();
    *resp = Response::json(&body);
}

/// Handler para POST /echo: devuelve el body recibido tal cual
fn echo_handler(req: &Request, resp: &mut Response) {
    resp.add_header(headers::CONTENT_TYPE, "application/octet-stream");
    resp.set_body_bytes(req.body().to_vec());
}

fn main() {
    println!("=================================");
    println!("  http_core - Servidor HTTP/1.x");
    println!("=================================\n");

    let config = Config::new();
    if let Err(e) = config.validate() {
        eprintln!("Configuración inválida: {}", e);
        std::process::exit(1);
    }

    let router = Router::builder()
        .get("/status", status_handler)
        .get("/users/:id", user_handler)
        .get("/files/*", files_handler)
        .post("/echo", echo_handler)
        .build();

    let mut server = Server::new(config, router);
    if let Err(e) = server.run() {
        eprintln!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
