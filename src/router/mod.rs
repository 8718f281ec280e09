//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que resuelve `(método, path)` al
//! handler registrado para esa combinación.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router::resolve → (Handler, params) → Response
//! ```
//!
//! Las rutas se registran con un [`RouterBuilder`] y se congelan al
//! llamar [`build`](RouterBuilder::build): el [`Router`] resultante es
//! de solo lectura, así que puede compartirse entre threads (por ejemplo
//! dentro de un `Arc`) sin ninguna sincronización.
//!
//! ## Lenguaje de patrones
//!
//! - Segmento literal: debe coincidir exactamente (case-sensitive)
//! - `:nombre`: coincide con cualquier segmento no vacío y lo liga como
//!   parámetro bajo `nombre`
//! - `*` final: coincide con uno o más segmentos restantes; el resto del
//!   path queda ligado bajo la clave `"*"`
//!
//! Entre varias rutas que coinciden gana la primera registrada.

use crate::http::{Method, Request, Response};
use std::collections::HashMap;

/// Marcador del segmento comodín
const WILDCARD: &str = "*";

/// Marcador inicial de un segmento de parámetro nombrado
const PARAM_PREFIX: char = ':';

/// Tipo de función handler
///
/// Un handler recibe el request (con los parámetros de path ya
/// adjuntados) y puebla una response recién creada.
pub type Handler = fn(&Request, &mut Response);

/// Una ruta registrada: método + patrón + handler
///
/// Inmutable una vez registrada.
#[derive(Clone)]
struct Route {
    method: Method,
    pattern: String,
    handler: Handler,
}

/// Resultado exitoso de una resolución
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Handler registrado para la ruta que coincidió
    pub handler: Handler,

    /// Parámetros de path extraídos del patrón (ej: {"id": "42"})
    pub params: HashMap<String, String>,
}

/// Fallos de resolución
///
/// No son errores graves: el caller los mapea a respuestas 404/405.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Ningún patrón registrado coincide con el path
    NotFound,

    /// Algún patrón coincide, pero no con este método; `allowed` lista
    /// los métodos que sí están registrados para ese patrón (para armar
    /// el header `Allow` de un 405)
    MethodNotAllowed { allowed: Vec<Method> },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::NotFound => write!(f, "Route not found"),
            MatchError::MethodNotAllowed { allowed } => {
                let methods: Vec<&str> = allowed.iter().map(|m| m.as_str()).collect();
                write!(f, "Method not allowed (allowed: {})", methods.join(", "))
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Builder para registrar rutas antes de congelar el router
///
/// # Ejemplo
/// ```
/// use http_core::http::{Request, Response};
/// use http_core::router::Router;
///
/// fn list_users(_req: &Request, _resp: &mut Response) {}
/// fn get_user(_req: &Request, _resp: &mut Response) {}
///
/// let router = Router::builder()
///     .get("/users", list_users)
///     .get("/users/:id", get_user)
///     .build();
/// ```
#[derive(Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
}

impl RouterBuilder {
    /// Crea un builder sin rutas
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra una ruta con método explícito
    ///
    /// El orden de registro importa: entre rutas que coinciden con el
    /// mismo path, gana la primera registrada.
    pub fn handle(mut self, method: Method, pattern: &str, handler: Handler) -> Self {
        self.routes.push(Route {
            method,
            pattern: pattern.to_string(),
            handler,
        });
        self
    }

    /// Registra un handler GET
    pub fn get(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::GET, pattern, handler)
    }

    /// Registra un handler POST
    pub fn post(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::POST, pattern, handler)
    }

    /// Registra un handler PUT
    pub fn put(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::PUT, pattern, handler)
    }

    /// Registra un handler DELETE
    pub fn delete(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::DELETE, pattern, handler)
    }

    /// Registra un handler PATCH
    pub fn patch(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::PATCH, pattern, handler)
    }

    /// Registra un handler HEAD
    pub fn head(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::HEAD, pattern, handler)
    }

    /// Registra un handler OPTIONS
    pub fn options(self, pattern: &str, handler: Handler) -> Self {
        self.handle(Method::OPTIONS, pattern, handler)
    }

    /// Congela las rutas registradas en un router inmutable
    pub fn build(self) -> Router {
        Router {
            routes: self.routes,
        }
    }
}

/// Router inmutable que resuelve requests a handlers
///
/// Se construye con [`Router::builder`]; después de `build` la tabla de
/// rutas solo se lee, nunca se modifica.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Crea un builder para registrar rutas
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Resuelve `(método, path)` al handler y parámetros correspondientes
    ///
    /// La query string (desde el primer `?`) se descarta solo para el
    /// matching; el path original del request no se modifica.
    ///
    /// # Errores
    ///
    /// - [`MatchError::NotFound`] si ningún patrón coincide
    /// - [`MatchError::MethodNotAllowed`] si algún patrón coincide pero
    ///   ninguna ruta lo registra con este método
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::{Method, Request, Response};
    /// use http_core::router::Router;
    ///
    /// fn get_user(_req: &Request, _resp: &mut Response) {}
    ///
    /// let router = Router::builder().get("/users/:id", get_user).build();
    ///
    /// let route_match = router.resolve(&Method::GET, "/users/42").unwrap();
    /// assert_eq!(route_match.params["id"], "42");
    /// ```
    pub fn resolve(&self, method: &Method, path: &str) -> Result<RouteMatch, MatchError> {
        let path = strip_query(path);

        // Métodos registrados para patrones que coinciden con el path
        // pero no con el método pedido
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = match_pattern(&route.pattern, path) else {
                continue;
            };

            if route.method == *method {
                return Ok(RouteMatch {
                    handler: route.handler,
                    params,
                });
            }

            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
        }

        if allowed.is_empty() {
            Err(MatchError::NotFound)
        } else {
            Err(MatchError::MethodNotAllowed { allowed })
        }
    }
}

/// Descarta la query string del path (solo para matching)
fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(i) => &path[..i],
        None => path,
    }
}

/// Compara un patrón contra un path ya sin query string
///
/// Retorna los parámetros ligados si coincide, `None` si no.
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    // Coincidencia textual exacta: sin parámetros que extraer
    if pattern == path {
        return Some(HashMap::new());
    }

    let pattern_parts: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_parts: Vec<&str> = path.trim_matches('/').split('/').collect();

    // Solo el '*' final es comodín; consume uno o más segmentos
    let has_wildcard = pattern_parts.last() == Some(&WILDCARD);
    if has_wildcard {
        if path_parts.len() < pattern_parts.len() {
            return None;
        }
    } else if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (i, pattern_part) in pattern_parts.iter().enumerate() {
        if *pattern_part == WILDCARD && i == pattern_parts.len() - 1 {
            params.insert(WILDCARD.to_string(), path_parts[i..].join("/"));
            return Some(params);
        }

        if let Some(name) = pattern_part.strip_prefix(PARAM_PREFIX) {
            // Un parámetro nombrado exige un segmento no vacío
            if path_parts[i].is_empty() {
                return None;
            }
            params.insert(name.to_string(), path_parts[i].to_string());
            continue;
        }

        if *pattern_part != path_parts[i] {
            return None;
        }
    }

    Some(params)
}
