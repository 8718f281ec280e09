//! # Construcción y Serialización de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP
//! de forma programática y escribirlas a un sink de bytes.
//!
//! ## Formato de una respuesta HTTP/1.x
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 12\r\n
//! \r\n
//! {"ok": true}
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_core::http::{status, Response};
//!
//! let mut response = Response::new(status::OK)
//!     .with_header("Content-Type", "application/json")
//!     .with_body(r#"{"message": "Hello"}"#);
//!
//! let mut bytes = Vec::new();
//! response.write(&mut bytes).unwrap();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::headers::{self, Headers};
use super::request::VERSION_HTTP11;
use super::status;
use std::io::{self, Write};

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Token de versión (ej: "HTTP/1.1")
    pub(crate) version: String,

    /// Código de estado HTTP (200, 404, etc.)
    pub(crate) status: u16,

    /// Headers de la respuesta
    pub(crate) headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    pub(crate) body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// La versión por defecto es HTTP/1.1; sin headers ni body.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::{status, Response};
    ///
    /// let response = Response::new(status::OK);
    /// assert_eq!(response.status(), 200);
    /// ```
    pub fn new(status: u16) -> Self {
        Self {
            version: VERSION_HTTP11.to_string(),
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta (versión encadenable)
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.set(name, value);
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    pub fn with_body(mut self, body: &str) -> Self {
        self.set_body_bytes(body.as_bytes().to_vec());
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para respuestas binarias.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.set_body_bytes(body);
        self
    }

    /// Establece el cuerpo desde un string (versión mutable)
    pub fn set_body(&mut self, body: &str) {
        self.set_body_bytes(body.as_bytes().to_vec());
    }

    /// Establece el cuerpo desde bytes (versión mutable)
    pub fn set_body_bytes(&mut self, body: Vec<u8>) {
        self.body = body;
        self.headers
            .set(headers::CONTENT_LENGTH, &self.body.len().to_string());
    }

    /// Cambia el código de estado
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Crea una respuesta JSON exitosa (200 OK)
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::Response;
    ///
    /// let response = Response::json(r#"{"status": "ok"}"#);
    /// assert_eq!(response.headers().get("Content-Type"), "application/json");
    /// ```
    pub fn json(body: &str) -> Self {
        Self::new(status::OK)
            .with_header(headers::CONTENT_TYPE, "application/json")
            .with_body(body)
    }

    /// Crea una respuesta de error con cuerpo JSON `{"error": "mensaje"}`
    ///
    /// El mensaje se serializa con `serde_json`, así que puede contener
    /// comillas o cualquier otro carácter sin romper el JSON.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::{status, Response};
    ///
    /// let response = Response::error(status::BAD_REQUEST, "parámetro inválido");
    /// assert_eq!(response.status(), 400);
    /// ```
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self::new(status)
            .with_header(headers::CONTENT_TYPE, "application/json")
            .with_body(&body)
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Obtiene el token de versión
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Acceso mutable a los headers
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Serializa la respuesta escribiéndola en orden al sink
    ///
    /// 1. Status line: `<versión> <código> <reason phrase>\r\n`
    /// 2. Si no hay `Content-Length`, se fija con el largo real del body
    /// 3. Headers `Nombre: Valor\r\n` en orden de inserción
    /// 4. Línea vacía `\r\n`
    /// 5. Body, si no está vacío
    ///
    /// La primera escritura que falle aborta la serialización y el error
    /// de I/O se propaga sin reinterpretar. El sink es quien decide la
    /// política de buffering.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::{status, Response};
    ///
    /// let mut response = Response::new(status::OK).with_body("Test");
    ///
    /// let mut bytes = Vec::new();
    /// response.write(&mut bytes).unwrap();
    /// let text = String::from_utf8(bytes).unwrap();
    ///
    /// assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    /// assert!(text.contains("Content-Length: 4\r\n"));
    /// assert!(text.ends_with("\r\n\r\nTest"));
    /// ```
    pub fn write<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        let status_line = format!(
            "{} {} {}\r\n",
            self.version,
            self.status,
            status::reason_phrase(self.status)
        );
        sink.write_all(status_line.as_bytes())?;

        // Content-Length es un invariante derivado del body, salvo que el
        // caller lo haya fijado explícitamente
        if self.headers.get(headers::CONTENT_LENGTH).is_empty() {
            self.headers
                .set(headers::CONTENT_LENGTH, &self.body.len().to_string());
        }

        for (name, value) in self.headers.iter() {
            sink.write_all(format!("{}: {}\r\n", name, value).as_bytes())?;
        }

        // Línea vacía que separa headers del body
        sink.write_all(b"\r\n")?;

        if !self.body.is_empty() {
            sink.write_all(&self.body)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_to_string(response: &mut Response) -> String {
        let mut bytes = Vec::new();
        response.write(&mut bytes).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_new_response() {
        let response = Response::new(status::OK);

        assert_eq!(response.status(), 200);
        assert_eq!(response.version(), "HTTP/1.1");
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header() {
        let response = Response::new(status::OK)
            .with_header("Content-Type", "text/plain")
            .with_header("X-Custom", "value");

        assert_eq!(response.headers().get("Content-Type"), "text/plain");
        assert_eq!(response.headers().get("X-Custom"), "value");
    }

    #[test]
    fn test_with_body_sets_content_length() {
        let response = Response::new(status::OK).with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.headers().get("Content-Length"), "11");
    }

    #[test]
    fn test_json_response() {
        let response = Response::json(r#"{"status": "ok"}"#);

        assert_eq!(response.status(), status::OK);
        assert_eq!(response.headers().get("Content-Type"), "application/json");
        assert_eq!(response.body(), br#"{"status": "ok"}"#);
    }

    #[test]
    fn test_error_response() {
        let response = Response::error(status::BAD_REQUEST, "Invalid input");

        assert_eq!(response.status(), status::BAD_REQUEST);
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"Invalid input"}"#);
    }

    #[test]
    fn test_error_response_escapes_message() {
        let response = Response::error(status::BAD_REQUEST, r#"comillas " adentro"#);

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"comillas \" adentro"}"#);
    }

    #[test]
    fn test_write_full_message() {
        let mut response = Response::new(status::OK)
            .with_header("Content-Type", "text/plain")
            .with_body("Test");

        let text = write_to_string(&mut response);

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_write_empty_body() {
        let mut response = Response::new(status::NO_CONTENT);
        let text = write_to_string(&mut response);

        assert!(text.starts_with("HTTP/1.1 204 No Content\r\n"));
        assert!(text.contains("Content-Length: 0\r\n"));
        // Debe terminar con \r\n\r\n (sin body)
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_write_derives_content_length_if_absent() {
        let mut response = Response::new(status::OK);
        response.body = b"abcde".to_vec(); // sin pasar por set_body_bytes

        let text = write_to_string(&mut response);
        assert!(text.contains("Content-Length: 5\r\n"));
    }

    #[test]
    fn test_write_respects_explicit_content_length() {
        let mut response = Response::new(status::OK).with_body("Test");
        // El caller puede sobreescribir el invariante a propósito
        response.add_header("Content-Length", "99");

        let text = write_to_string(&mut response);
        assert!(text.contains("Content-Length: 99\r\n"));
    }

    #[test]
    fn test_write_headers_in_insertion_order() {
        let mut response = Response::new(status::OK)
            .with_header("X-Primero", "1")
            .with_header("X-Segundo", "2")
            .with_body("x");

        let text = write_to_string(&mut response);
        let primero = text.find("X-Primero").unwrap();
        let segundo = text.find("X-Segundo").unwrap();
        let length = text.find("Content-Length").unwrap();

        assert!(primero < segundo);
        assert!(segundo < length);
    }

    #[test]
    fn test_write_unknown_status_code() {
        let mut response = Response::new(299);
        let text = write_to_string(&mut response);

        assert!(text.starts_with("HTTP/1.1 299 Unknown\r\n"));
    }

    #[test]
    fn test_with_body_bytes() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::new(status::OK).with_body_bytes(binary_data.clone());

        assert_eq!(response.body(), &binary_data[..]);
        assert_eq!(response.headers().get("Content-Length"), "4");
    }
}
