//! # Códigos de Estado HTTP
//!
//! Registro de códigos de estado y sus reason phrases estándar.
//!
//! Los códigos se representan como `u16` crudos (no como un enum cerrado)
//! porque el parser de respuestas debe aceptar cualquier código numérico
//! que llegue por el cable, conocido o no.

/// 200 OK - La petición fue exitosa
pub const OK: u16 = 200;
/// 201 Created - Recurso creado
pub const CREATED: u16 = 201;
/// 204 No Content - Petición exitosa sin contenido en el body
pub const NO_CONTENT: u16 = 204;
/// 400 Bad Request - Request malformado
pub const BAD_REQUEST: u16 = 400;
/// 401 Unauthorized - Falta autenticación
pub const UNAUTHORIZED: u16 = 401;
/// 403 Forbidden - Acceso denegado
pub const FORBIDDEN: u16 = 403;
/// 404 Not Found - Ruta o recurso no encontrado
pub const NOT_FOUND: u16 = 404;
/// 405 Method Not Allowed - El patrón existe pero no con ese método
pub const METHOD_NOT_ALLOWED: u16 = 405;
/// 500 Internal Server Error - Error interno del servidor
pub const INTERNAL_SERVER_ERROR: u16 = 500;
/// 501 Not Implemented - Funcionalidad no implementada
pub const NOT_IMPLEMENTED: u16 = 501;
/// 502 Bad Gateway - Respuesta inválida de un upstream
pub const BAD_GATEWAY: u16 = 502;

/// Retorna el reason phrase estándar asociado al código
///
/// Para códigos fuera del registro se devuelve `"Unknown"`.
///
/// # Ejemplo
/// ```
/// use http_core::http::status;
///
/// assert_eq!(status::reason_phrase(status::OK), "OK");
/// assert_eq!(status::reason_phrase(404), "Not Found");
/// assert_eq!(status::reason_phrase(299), "Unknown");
/// ```
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        OK => "OK",
        CREATED => "Created",
        NO_CONTENT => "No Content",
        BAD_REQUEST => "Bad Request",
        UNAUTHORIZED => "Unauthorized",
        FORBIDDEN => "Forbidden",
        NOT_FOUND => "Not Found",
        METHOD_NOT_ALLOWED => "Method Not Allowed",
        INTERNAL_SERVER_ERROR => "Internal Server Error",
        NOT_IMPLEMENTED => "Not Implemented",
        BAD_GATEWAY => "Bad Gateway",
        _ => "Unknown",
    }
}

/// Verifica si el código indica éxito (2xx)
pub fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Verifica si el código indica error del cliente (4xx)
pub fn is_client_error(code: u16) -> bool {
    (400..500).contains(&code)
}

/// Verifica si el código indica error del servidor (5xx)
pub fn is_server_error(code: u16) -> bool {
    (500..600).contains(&code)
}
