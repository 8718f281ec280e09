//! # Requests HTTP
//! src/http/request.rs
//!
//! Modelo de datos de un request HTTP/1.x.
//!
//! ## Formato de un Request HTTP/1.x
//!
//! ```text
//! GET /path?param=value HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! El parsing desde bytes vive en [`parser`](super::parser); este módulo
//! solo define el tipo y sus accesores. Una vez ruteado, el request lleva
//! además los parámetros de path extraídos por el router (ej: `:id`).

use super::headers::Headers;
use std::collections::HashMap;

/// Versiones comunes del protocolo
pub const VERSION_HTTP10: &str = "HTTP/1.0";
pub const VERSION_HTTP11: &str = "HTTP/1.1";

/// Métodos HTTP
///
/// Un token que no corresponde a ningún método conocido no es un error de
/// parseo: se preserva tal cual llegó en la variante `Extension`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// PUT - Reemplazar un recurso
    PUT,

    /// DELETE - Eliminar un recurso
    DELETE,

    /// PATCH - Modificar parcialmente un recurso
    PATCH,

    /// HEAD - Como GET pero solo retorna headers
    HEAD,

    /// OPTIONS - Consultar métodos soportados
    OPTIONS,

    /// Token de método no reconocido, preservado verbatim
    Extension(String),
}

impl Method {
    /// Convierte un token en un método
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::Method;
    ///
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(
    ///     Method::from_token("PROPFIND"),
    ///     Method::Extension("PROPFIND".to_string())
    /// );
    /// ```
    pub fn from_token(token: &str) -> Method {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "PATCH" => Method::PATCH,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            _ => Method::Extension(token.to_string()),
        }
    }

    /// Convierte el método a su token
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::Extension(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Representa un request HTTP parseado
///
/// Lo crea el parser; el router le adjunta los parámetros de path con
/// [`set_params`](Request::set_params); los handlers lo leen.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP
    pub(crate) method: Method,

    /// Path crudo del request, incluyendo query string si la hay
    pub(crate) path: String,

    /// Token de versión (ej: "HTTP/1.1"), preservado verbatim
    pub(crate) version: String,

    /// Headers del request
    pub(crate) headers: Headers,

    /// Body del request (vacío si no hay Content-Length)
    pub(crate) body: Vec<u8>,

    /// Parámetros de path extraídos por el router (ej: {"id": "42"})
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Crea un request con headers y body vacíos
    pub fn new(method: Method, path: &str, version: &str) -> Self {
        Request {
            method,
            path: path.to_string(),
            version: version.to_string(),
            headers: Headers::new(),
            body: Vec::new(),
            params: HashMap::new(),
        }
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path crudo del request (con query string incluida)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el token de versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene los headers del request
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Acceso mutable a los headers
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Obtiene el valor combinado de un header (case-insensitive)
    ///
    /// Un header ausente devuelve el string vacío.
    pub fn header(&self, name: &str) -> String {
        self.headers.get(name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Obtiene el body del request como String
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    /// Obtiene todos los parámetros de path
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Obtiene un parámetro de path específico
    ///
    /// # Ejemplo
    /// ```
    /// use std::collections::HashMap;
    /// use http_core::http::{Method, Request};
    ///
    /// let mut request = Request::new(Method::GET, "/users/42", "HTTP/1.1");
    /// request.set_params(HashMap::from([("id".to_string(), "42".to_string())]));
    ///
    /// assert_eq!(request.param("id"), Some("42"));
    /// assert_eq!(request.param("missing"), None);
    /// ```
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Adjunta los parámetros de path extraídos por el router
    pub fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }
}
