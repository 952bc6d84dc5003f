//! Sección 1.2: Tipos de datos básicos en profundidad (Basic Data Types in Depth)
//!
//! - `any` no existe; `Box<dyn Any>` obliga a comprobar el tipo antes de usarlo,
//!   igual que `unknown` (`any` does not exist; `Box<dyn Any>` forces a type
//!   check before use, just like `unknown`)
//! - `undefined` y `null` se modelan con `Option` (are modelled with `Option`)
//! - `never` es `Infallible` dentro de un `Result` (is `Infallible` inside a `Result`)
//! - Los tipos literales son enums sin datos (Literal types are fieldless enums)

use std::any::Any;
use std::convert::Infallible;

use apuntes_common::{Console, LessonError, Result, Settings};

/// Constante con tipo inferido (Constant with an inferred type).
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

/// Literal inferido: `"admin"` (Inferred literal).
pub const FIXED_ROLE: &str = "admin";

/// `"conectado" | "desconectado"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connected,
    Disconnected,
}

impl ConnectionState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "conectado",
            Self::Disconnected => "desconectado",
        }
    }
}

// ============================================================================
// unknown: comprobar antes de operar (check before operating)
// ============================================================================

/// Longitud de la entrada si es una cadena
/// (Length of the input when it is a string).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_2::string_length;
///
/// let texto: Box<dyn std::any::Any> = Box::new(String::from("Hola mundo"));
/// assert_eq!(string_length(texto.as_ref()), Some(10));
///
/// let numero: Box<dyn std::any::Any> = Box::new(10_i32);
/// assert_eq!(string_length(numero.as_ref()), None);
/// ```
#[must_use]
pub fn string_length(entrada: &dyn Any) -> Option<usize> {
    if let Some(s) = entrada.downcast_ref::<String>() {
        Some(s.chars().count())
    } else {
        entrada.downcast_ref::<&'static str>().map(|s| s.chars().count())
    }
}

// ============================================================================
// never: funciones que no devuelven nunca (functions that never return)
// ============================================================================

/// Siempre falla; el tipo `Infallible` dice que no hay valor de éxito
/// (Always fails; `Infallible` says there is no success value).
pub fn raise_error(mensaje: &str) -> Result<Infallible> {
    Err(LessonError::thrown(mensaje))
}

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_2::get_age;
/// assert_eq!(get_age(Some("Josep")).unwrap(), 30);
/// assert_eq!(get_age(None).unwrap_err().to_string(), "Usuario no encontrado");
/// ```
pub fn get_age(usuario: Option<&str>) -> Result<u32> {
    match usuario {
        None => Err(LessonError::UserNotFound),
        Some(_) => Ok(30),
    }
}

// ============================================================================
// Tipado estricto en funciones (Strict typing in functions)
// ============================================================================

/// Área de un triángulo (Area of a triangle).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_2::triangle_area;
/// assert_eq!(triangle_area(10.0, 5.0), 25.0);
/// ```
#[must_use]
pub fn triangle_area(base: f64, altura: f64) -> f64 {
    (base * altura) / 2.0
}

// ============================================================================
// Ejercicio: string | number
// ============================================================================

/// `string | number`.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Text(String),
    Number(f64),
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

impl From<i32> for Datum {
    fn from(n: i32) -> Self {
        Datum::Number(f64::from(n))
    }
}

impl From<f64> for Datum {
    fn from(n: f64) -> Self {
        Datum::Number(n)
    }
}

/// Cadena: su longitud. Número: su doble
/// (String: its length. Number: its double).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_2::analyze_datum;
/// assert_eq!(analyze_datum("Josep"), 5.0);
/// assert_eq!(analyze_datum(10), 20.0);
/// ```
pub fn analyze_datum(dato: impl Into<Datum>) -> f64 {
    match dato.into() {
        Datum::Text(s) => s.chars().count() as f64,
        Datum::Number(n) => n * 2.0,
    }
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    let nombre = "Josep";
    let edad = 25;
    let activo = true;
    tracing::debug!(nombre, edad, activo, PI, "primitivos");

    // unknown: el último valor asignado es un número, así que no se imprime nada
    let mut entrada: Box<dyn Any> = Box::new(String::from("Hola mundo"));
    if let Some(len) = string_length(entrada.as_ref()) {
        tracing::debug!(len, "entrada inicial es texto");
    }
    entrada = Box::new(10_i32);
    if let Some(len) = string_length(entrada.as_ref()) {
        console.log(format_args!("Longitud del string: {len}"));
    }

    let indefinido: Option<()> = None;
    let nulo: Option<()> = None;
    tracing::debug!(?indefinido, ?nulo, FIXED_ROLE, estado = ConnectionState::default().as_str());

    if let Err(e) = get_age(None) {
        tracing::debug!(error = %e, "get_age sin usuario");
    }

    console.log(analyze_datum("Josep"));
    console.log(analyze_datum(10));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_error_never_succeeds() {
        let err = raise_error("boom").unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_string_length_accepts_str_slices() {
        let entrada: Box<dyn Any> = Box::new("Josep");
        assert_eq!(string_length(entrada.as_ref()), Some(5));
    }

    #[test]
    fn test_analyze_datum_counts_chars_not_bytes() {
        assert_eq!(analyze_datum("València"), 8.0);
        assert_eq!(analyze_datum(2.5), 5.0);
    }

    #[test]
    fn test_connection_state() {
        assert_eq!(ConnectionState::default().as_str(), "conectado");
        assert_eq!(ConnectionState::Disconnected.as_str(), "desconectado");
    }

    #[test]
    fn test_demo_prints_exercise_results() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        assert_eq!(console.lines(), ["5", "20"]);
    }
}
