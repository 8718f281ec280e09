//! # http_core
//! src/lib.rs
//!
//! Capa de mensajes HTTP/1.x y router de requests, implementados desde
//! cero sin librerías HTTP de alto nivel.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → http::parser → Request → router::Router → Handler → Response → bytes
//! ```
//!
//! La librería está dividida en módulos especializados:
//! - `http`: parsing y serialización del protocolo HTTP/1.x
//! - `router`: enrutamiento de requests a handlers con patrones de path
//! - `server`: capa de conexiones TCP (un thread por conexión)
//! - `config`: configuración CLI/env del servidor de demostración
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_core::http::{parser, Request, Response};
//! use http_core::router::Router;
//!
//! fn user_handler(req: &Request, resp: &mut Response) {
//!     resp.set_body(req.param("id").unwrap_or(""));
//! }
//!
//! let router = Router::builder()
//!     .get("/users/:id", user_handler)
//!     .build();
//!
//! let mut raw: &[u8] = b"GET /users/42 HTTP/1.1\r\nHost: localhost\r\n\r\n";
//! let mut request = parser::parse_request(&mut raw).unwrap();
//!
//! let route_match = router.resolve(request.method(), request.path()).unwrap();
//! request.set_params(route_match.params);
//!
//! let mut response = Response::new(http_core::http::status::OK);
//! (route_match.handler)(&request, &mut response);
//!
//! assert_eq!(response.body(), b"42");
//! ```

pub mod config;
pub mod http;
pub mod router;
pub mod server;
