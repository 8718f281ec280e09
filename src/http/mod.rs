//! # Módulo HTTP
//!
//! Este módulo implementa la capa de mensajes HTTP/1.x desde cero, sin
//! librerías de alto nivel. Incluye:
//!
//! - Parsing de requests y responses desde un stream de bytes
//! - Construcción y serialización de responses
//! - Colección de headers case-insensitive
//! - Registro de códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path?query=value HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Another-Header: Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 12\r\n
//! \r\n
//! {"ok": true}
//! ```

// Submódulos del módulo HTTP
pub mod headers;  // Colección de headers
pub mod parser;   // Parsing de mensajes (requests y responses)
pub mod request;  // Modelo de requests
pub mod response; // Modelo y serialización de responses
pub mod status;   // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use headers::Headers;
pub use parser::{parse_request, parse_response, ParseError};
pub use request::{Method, Request};
pub use response::Response;
