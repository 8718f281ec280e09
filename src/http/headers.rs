//! # Colección de Headers HTTP
//! src/http/headers.rs
//!
//! Almacenamiento ordenado de headers con búsqueda case-insensitive.
//!
//! HTTP define los nombres de headers como case-insensitive:
//! `Content-Type`, `content-type` y `CONTENT-TYPE` son el mismo header.
//! Los valores, en cambio, se preservan exactamente como llegaron
//! (solo la comparación de claves ignora mayúsculas/minúsculas).
//!
//! ## Semántica de valores múltiples
//!
//! - `set` reemplaza todos los valores existentes de la clave
//! - `add` agrega un valor más; al leer con `get`, los valores se unen
//!   con `", "` en el orden en que fueron agregados
//! - el orden de inserción de claves distintas se preserva para la
//!   serialización; reemplazar una clave no la mueve al final

/// Nombres de headers comunes
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const HOST: &str = "Host";
pub const USER_AGENT: &str = "User-Agent";
pub const ACCEPT: &str = "Accept";
pub const AUTHORIZATION: &str = "Authorization";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const LOCATION: &str = "Location";
pub const CONNECTION: &str = "Connection";
pub const ALLOW: &str = "Allow";

/// Una entrada de la colección: nombre más sus valores en orden de llegada
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

/// Colección ordenada de headers HTTP
///
/// # Ejemplo
/// ```
/// use http_core::http::Headers;
///
/// let mut headers = Headers::new();
/// headers.set("Content-Type", "application/json");
///
/// assert_eq!(headers.get("content-type"), "application/json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<HeaderEntry>,
}

impl Headers {
    /// Crea una colección vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Cantidad de claves distintas almacenadas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Verifica si la colección está vacía
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Obtiene el valor combinado de un header (case-insensitive)
    ///
    /// Si la clave tiene varios valores (ver [`add`](Headers::add)), se
    /// devuelven unidos con `", "` en el orden en que fueron agregados.
    /// Una clave ausente devuelve el string vacío, nunca un error.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.add("Accept", "text/html");
    /// headers.add("Accept", "application/json");
    ///
    /// assert_eq!(headers.get("accept"), "text/html, application/json");
    /// assert_eq!(headers.get("missing"), "");
    /// ```
    pub fn get(&self, name: &str) -> String {
        match self.find(name) {
            Some(i) => self.entries[i].values.join(", "),
            None => String::new(),
        }
    }

    /// Establece el valor de un header, reemplazando los existentes
    ///
    /// La clave conserva su posición original en el orden de iteración;
    /// el nombre almacenado pasa a ser el de esta llamada.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.find(name) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.name = name.to_string();
                entry.values = vec![value.to_string()];
            }
            None => self.entries.push(HeaderEntry {
                name: name.to_string(),
                values: vec![value.to_string()],
            }),
        }
    }

    /// Agrega un valor a un header
    ///
    /// Si la clave no existe, equivale a [`set`](Headers::set).
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.add("Via", "proxy-a");
    /// headers.add("Via", "proxy-b");
    /// assert_eq!(headers.get("Via"), "proxy-a, proxy-b");
    ///
    /// headers.set("Via", "proxy-c");
    /// assert_eq!(headers.get("Via"), "proxy-c");
    /// ```
    pub fn add(&mut self, name: &str, value: &str) {
        match self.find(name) {
            Some(i) => self.entries[i].values.push(value.to_string()),
            None => self.set(name, value),
        }
    }

    /// Elimina todos los valores de un header (case-insensitive)
    ///
    /// No hace nada si la clave no existe.
    pub fn del(&mut self, name: &str) {
        self.entries.retain(|e| !e.name.eq_ignore_ascii_case(name));
    }

    /// Itera los headers como pares `(nombre, valor-combinado)`
    ///
    /// El orden es el de inserción de claves distintas, y el nombre se
    /// reproduce con la capitalización con la que quedó almacenado.
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.values.join(", ")))
    }
}
