//! # Parser de Mensajes HTTP/1.x
//! src/http/parser.rs
//!
//! Convierte un stream de bytes en un [`Request`] o una [`Response`]
//! estructurados. Las dos direcciones son simétricas:
//!
//! ```text
//! bytes → parse_request  → Request   (start line: MÉTODO PATH VERSIÓN)
//! bytes → parse_response → Response  (start line: VERSIÓN CÓDIGO REASON)
//! ```
//!
//! El framing es el clásico de HTTP/1.x: una start line, líneas de
//! headers hasta una línea vacía, y un body de exactamente
//! `Content-Length` bytes si ese header está presente. No se soporta
//! `Transfer-Encoding: chunked` (el largo del body siempre es explícito).
//!
//! ## Política de tolerancia
//!
//! Una línea de header sin `:` se ignora en vez de abortar el parseo.
//! Todo lo demás que viole el framing corta el mensaje con un
//! [`ParseError`] tipado que identifica la fase que falló; el caller
//! decide si cierra la conexión o responde con un código de error.

use super::headers::{Headers, CONTENT_LENGTH};
use super::request::{Method, Request};
use super::response::Response;
use std::io::{BufRead, Read};

/// Errores que pueden ocurrir durante el parsing
///
/// Los errores de I/O del source se envuelven en `Io` sin reinterpretar,
/// para que el caller pueda distinguirlos de los errores de protocolo.
#[derive(Debug)]
pub enum ParseError {
    /// El stream terminó antes de completar una línea o el bloque de headers
    UnexpectedEof,

    /// La start line no tiene los tres campos esperados
    InvalidStartLine(String),

    /// El campo de código de estado no es numérico
    InvalidStatusCode(String),

    /// Content-Length negativo o no numérico
    InvalidContentLength(String),

    /// El stream terminó antes de entregar todo el body anunciado
    TruncatedBody { expected: usize, read: usize },

    /// Error de I/O del source, propagado tal cual
    Io(std::io::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "Unexpected end of stream"),
            ParseError::InvalidStartLine(line) => write!(f, "Invalid start line: {}", line),
            ParseError::InvalidStatusCode(code) => write!(f, "Invalid status code: {}", code),
            ParseError::InvalidContentLength(value) => {
                write!(f, "Invalid Content-Length value: {}", value)
            }
            ParseError::TruncatedBody { expected, read } => {
                write!(f, "Truncated body: expected {} bytes, got {}", expected, read)
            }
            ParseError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Parsea un request HTTP desde un reader line-oriented
///
/// # Errores
///
/// Retorna un [`ParseError`] identificando la fase que falló: start line,
/// headers o body.
///
/// # Ejemplo
/// ```
/// use http_core::http::{parser, Method};
///
/// let mut raw: &[u8] = b"GET /users/42?debug HTTP/1.1\r\nHost: localhost\r\n\r\n";
/// let request = parser::parse_request(&mut raw).unwrap();
///
/// assert_eq!(request.method(), &Method::GET);
/// assert_eq!(request.path(), "/users/42?debug");
/// assert_eq!(request.header("host"), "localhost");
/// ```
pub fn parse_request<R: BufRead>(reader: &mut R) -> Result<Request, ParseError> {
    let start_line = read_line(reader)?;

    // MÉTODO SP PATH SP VERSIÓN: el corte es en los dos primeros espacios
    let mut parts = start_line.splitn(3, ' ');
    let (method, path, version) = match (parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), Some(version)) => (method, path, version),
        _ => return Err(ParseError::InvalidStartLine(start_line)),
    };

    let mut request = Request::new(Method::from_token(method), path, version);
    parse_headers(reader, &mut request.headers)?;
    request.body = parse_body(reader, &request.headers)?;

    Ok(request)
}

/// Parsea una response HTTP desde un reader line-oriented
///
/// El reason phrase de la status line se valida como tercer campo pero no
/// se almacena: el registro de códigos es quien los produce al serializar.
///
/// # Ejemplo
/// ```
/// use http_core::http::parser;
///
/// let mut raw: &[u8] = b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n";
/// let response = parser::parse_response(&mut raw).unwrap();
///
/// assert_eq!(response.status(), 404);
/// assert_eq!(response.version(), "HTTP/1.1");
/// ```
pub fn parse_response<R: BufRead>(reader: &mut R) -> Result<Response, ParseError> {
    let start_line = read_line(reader)?;

    // VERSIÓN SP CÓDIGO SP REASON: el reason puede contener espacios
    let mut parts = start_line.splitn(3, ' ');
    let (version, code, _reason) = match (parts.next(), parts.next(), parts.next()) {
        (Some(version), Some(code), Some(reason)) => (version, code, reason),
        _ => return Err(ParseError::InvalidStartLine(start_line)),
    };

    let status: u16 = code
        .parse()
        .map_err(|_| ParseError::InvalidStatusCode(code.to_string()))?;

    let mut response = Response::new(status);
    response.version = version.to_string();
    parse_headers(reader, &mut response.headers)?;
    response.body = parse_body(reader, &response.headers)?;

    Ok(response)
}

/// Lee una línea terminada en `\n` y la devuelve sin el whitespace final
///
/// Fin de stream antes del terminador (incluso a mitad de línea) es un
/// error de framing.
fn read_line<R: BufRead>(reader: &mut R) -> Result<String, ParseError> {
    let mut buffer = Vec::new();
    let n = reader
        .read_until(b'\n', &mut buffer)
        .map_err(ParseError::Io)?;

    if n == 0 || buffer.last() != Some(&b'\n') {
        return Err(ParseError::UnexpectedEof);
    }

    let line = String::from_utf8_lossy(&buffer);
    Ok(line.trim_end().to_string())
}

/// Parsea líneas de headers hasta la línea vacía que marca el fin
fn parse_headers<R: BufRead>(reader: &mut R, headers: &mut Headers) -> Result<(), ParseError> {
    loop {
        let line = read_line(reader)?;

        // La línea vacía marca el fin de los headers
        if line.is_empty() {
            break;
        }

        // Línea sin ':' se ignora (parsing tolerante)
        let Some(colon) = line.find(':') else {
            continue;
        };

        let name = line[..colon].trim();
        let value = line[colon + 1..].trim();
        // set: si un header se repite durante el parseo, gana el último
        headers.set(name, value);
    }

    Ok(())
}

/// Lee el body según el header Content-Length
///
/// Sin Content-Length (o con valor vacío) no hay body que leer.
fn parse_body<R: BufRead>(reader: &mut R, headers: &Headers) -> Result<Vec<u8>, ParseError> {
    let raw_length = headers.get(CONTENT_LENGTH);
    if raw_length.is_empty() {
        return Ok(Vec::new());
    }

    let length: i64 = raw_length
        .parse()
        .map_err(|_| ParseError::InvalidContentLength(raw_length.clone()))?;
    if length < 0 {
        return Err(ParseError::InvalidContentLength(raw_length));
    }
    let length = length as usize;

    let mut body = vec![0u8; length];
    let mut read = 0;
    while read < length {
        match reader.read(&mut body[read..]) {
            Ok(0) => return Err(ParseError::TruncatedBody { expected: length, read }),
            Ok(n) => read += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParseError::Io(e)),
        }
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_req(raw: &[u8]) -> Result<Request, ParseError> {
        let mut reader = raw;
        parse_request(&mut reader)
    }

    fn parse_resp(raw: &[u8]) -> Result<Response, ParseError> {
        let mut reader = raw;
        parse_response(&mut reader)
    }

    // ==================== Start line (request) ====================

    #[test]
    fn test_parse_simple_get() {
        let request = parse_req(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), "HTTP/1.1");
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_parse_preserves_query_in_path() {
        let request = parse_req(b"GET /buscar?q=rust&page=2 HTTP/1.0\r\n\r\n").unwrap();

        assert_eq!(request.path(), "/buscar?q=rust&page=2");
        assert_eq!(request.version(), "HTTP/1.0");
    }

    #[test]
    fn test_parse_unknown_method_preserved() {
        let request = parse_req(b"PROPFIND /dav HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(request.method(), &Method::Extension("PROPFIND".to_string()));
    }

    #[test]
    fn test_parse_unknown_version_preserved() {
        let request = parse_req(b"GET / HTTP/4.7\r\n\r\n").unwrap();

        assert_eq!(request.version(), "HTTP/4.7");
    }

    #[test]
    fn test_missing_fields_is_invalid_start_line() {
        assert!(matches!(
            parse_req(b"GET /\r\n\r\n"),
            Err(ParseError::InvalidStartLine(_))
        ));
        assert!(matches!(
            parse_req(b"GET\r\n\r\n"),
            Err(ParseError::InvalidStartLine(_))
        ));
    }

    #[test]
    fn test_empty_stream_is_eof() {
        assert!(matches!(parse_req(b""), Err(ParseError::UnexpectedEof)));
    }

    #[test]
    fn test_start_line_without_terminator_is_eof() {
        assert!(matches!(
            parse_req(b"GET / HTTP/1.1"),
            Err(ParseError::UnexpectedEof)
        ));
    }

    // ==================== Headers ====================

    #[test]
    fn test_parse_headers() {
        let request =
            parse_req(b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nUser-Agent: test\r\n\r\n")
                .unwrap();

        assert_eq!(request.header("Host"), "localhost:8080");
        assert_eq!(request.header("user-agent"), "test");
    }

    #[test]
    fn test_header_whitespace_trimmed() {
        let request = parse_req(b"GET / HTTP/1.1\r\n  Host :   localhost  \r\n\r\n").unwrap();

        assert_eq!(request.header("Host"), "localhost");
    }

    #[test]
    fn test_header_value_keeps_colons() {
        // Solo el primer ':' separa nombre de valor
        let request = parse_req(b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n").unwrap();

        assert_eq!(request.header("Host"), "localhost:8080");
    }

    #[test]
    fn test_colonless_header_line_skipped() {
        let request =
            parse_req(b"GET / HTTP/1.1\r\nEstoNoEsUnHeader\r\nHost: localhost\r\n\r\n").unwrap();

        assert_eq!(request.header("Host"), "localhost");
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let request =
            parse_req(b"GET / HTTP/1.1\r\nX-Valor: uno\r\nX-Valor: dos\r\n\r\n").unwrap();

        assert_eq!(request.header("X-Valor"), "dos");
    }

    #[test]
    fn test_header_value_case_preserved() {
        let request =
            parse_req(b"GET / HTTP/1.1\r\nContent-Type: Application/JSON\r\n\r\n").unwrap();

        assert_eq!(request.header("content-type"), "Application/JSON");
    }

    #[test]
    fn test_stream_ends_inside_headers_is_eof() {
        assert!(matches!(
            parse_req(b"GET / HTTP/1.1\r\nHost: localhost\r\n"),
            Err(ParseError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_lf_only_lines_accepted() {
        let request = parse_req(b"GET / HTTP/1.1\nHost: localhost\n\n").unwrap();

        assert_eq!(request.header("Host"), "localhost");
    }

    // ==================== Body ====================

    #[test]
    fn test_parse_body_exact_length() {
        let request =
            parse_req(b"POST /upload HTTP/1.1\r\nContent-Length: 12\r\n\r\nHello world!").unwrap();

        assert_eq!(request.body(), b"Hello world!");
        assert_eq!(request.body_string().as_deref(), Some("Hello world!"));
    }

    #[test]
    fn test_body_reads_exactly_content_length() {
        // Los bytes extra quedan en el stream, no en el body
        let raw: &[u8] = b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nabcdeRESTO";
        let mut reader = raw;
        let request = parse_request(&mut reader).unwrap();

        assert_eq!(request.body(), b"abcde");
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"RESTO");
    }

    #[test]
    fn test_no_content_length_means_no_body() {
        let request = parse_req(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_truncated_body() {
        let result = parse_req(b"POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\nshort");

        assert!(matches!(
            result,
            Err(ParseError::TruncatedBody { expected: 10, read: 5 })
        ));
    }

    #[test]
    fn test_invalid_content_length() {
        assert!(matches!(
            parse_req(b"POST / HTTP/1.1\r\nContent-Length: abc\r\n\r\nbody"),
            Err(ParseError::InvalidContentLength(_))
        ));
        assert!(matches!(
            parse_req(b"POST / HTTP/1.1\r\nContent-Length: -5\r\n\r\nbody"),
            Err(ParseError::InvalidContentLength(_))
        ));
    }

    // ==================== Responses ====================

    #[test]
    fn test_parse_simple_response() {
        let response =
            parse_resp(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\nhola")
                .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.version(), "HTTP/1.1");
        assert_eq!(response.headers().get("Content-Type"), "text/plain");
        assert_eq!(response.body(), b"hola");
    }

    #[test]
    fn test_parse_response_reason_with_spaces() {
        let response = parse_resp(b"HTTP/1.0 500 Internal Server Error\r\n\r\n").unwrap();

        assert_eq!(response.status(), 500);
        assert_eq!(response.version(), "HTTP/1.0");
    }

    #[test]
    fn test_parse_response_non_numeric_status() {
        assert!(matches!(
            parse_resp(b"HTTP/1.1 abc OK\r\n\r\n"),
            Err(ParseError::InvalidStatusCode(_))
        ));
    }

    #[test]
    fn test_parse_response_unregistered_code() {
        let response = parse_resp(b"HTTP/1.1 299 Whatever\r\n\r\n").unwrap();
        assert_eq!(response.status(), 299);
    }

    #[test]
    fn test_parse_response_missing_fields() {
        assert!(matches!(
            parse_resp(b"HTTP/1.1 200\r\n\r\n"),
            Err(ParseError::InvalidStartLine(_))
        ));
    }

    #[test]
    fn test_response_truncated_body() {
        let result = parse_resp(b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\n\r\nabc");

        assert!(matches!(
            result,
            Err(ParseError::TruncatedBody { expected: 8, read: 3 })
        ));
    }

    // ==================== Round-trip ====================

    #[test]
    fn test_response_roundtrip_byte_for_byte() {
        let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\nX-Extra: si\r\n\r\nhola!";

        let mut response = parse_resp(raw).unwrap();
        let mut serialized = Vec::new();
        response.write(&mut serialized).unwrap();

        assert_eq!(serialized, raw.to_vec());
    }

    #[test]
    fn test_request_headers_roundtrip_through_response() {
        // Los headers parseados conservan capitalización y orden de
        // inserción, así que re-serializarlos reproduce los originales
        let request = parse_req(
            b"GET / HTTP/1.1\r\nHost: localhost\r\nAccept: */*\r\nUser-Agent: test\r\n\r\n",
        )
        .unwrap();

        let mut response = Response::new(200);
        for (name, value) in request.headers().iter() {
            response.add_header(name, &value);
        }
        let mut serialized = Vec::new();
        response.write(&mut serialized).unwrap();
        let text = String::from_utf8(serialized).unwrap();

        assert!(text.contains("Host: localhost\r\nAccept: */*\r\nUser-Agent: test\r\n"));
    }
}
