//! Sección 3.3: Funciones en Python (Python Functions)
//!
//! Rust no tiene argumentos por defecto ni con nombre; las dos formas
//! habituales de expresarlos son `Option<T>` y un struct con `Default`
//! (Rust has no default or keyword arguments; the usual stand-ins are
//! `Option<T>` and a struct implementing `Default`).

use std::fmt::Display;

use apuntes_common::{Console, LessonError, Result, Settings, inspect};
use serde_json::json;

pub const DEFAULT_TITLE: &str = "Sr./Sra.";

#[must_use]
pub fn greet() -> &'static str {
    "¡Hola mundo!"
}

#[must_use]
pub fn greet_person(nombre: &str) -> String {
    format!("¡Hola {nombre}!")
}

#[must_use]
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// `saludar_formal(nombre, titulo="Sr./Sra.")`.
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_3::formal_greeting;
/// assert_eq!(formal_greeting("García", None), "Estimado/a Sr./Sra. García");
/// assert_eq!(formal_greeting("García", Some("Dr.")), "Estimado/a Dr. García");
/// ```
#[must_use]
pub fn formal_greeting(nombre: &str, titulo: Option<&str>) -> String {
    format!("Estimado/a {} {nombre}", titulo.unwrap_or(DEFAULT_TITLE))
}

/// Parámetros de [`calculate_price`] con sus valores por defecto
/// (Parameters of [`calculate_price`] with their defaults).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceParams {
    pub impuesto: f64,
    pub descuento: f64,
}

impl Default for PriceParams {
    fn default() -> Self {
        Self {
            impuesto: 0.21,
            descuento: 0.0,
        }
    }
}

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_3::{calculate_price, PriceParams};
///
/// let precio = calculate_price(100.0, PriceParams { descuento: 10.0, ..Default::default() });
/// assert!((precio - 111.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_price(precio_base: f64, params: PriceParams) -> f64 {
    precio_base + precio_base * params.impuesto - params.descuento
}

/// Cociente y resto con la semántica de `//` y `%` de Python
/// (Quotient and remainder with Python's `//` and `%` semantics).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_3::divide_with_remainder;
/// assert_eq!(divide_with_remainder(17, 5).unwrap(), (3, 2));
/// assert_eq!(divide_with_remainder(-7, 2).unwrap(), (-4, 1));
/// assert!(divide_with_remainder(1, 0).is_err());
/// ```
///
/// # Errores (Errors)
/// [`LessonError::DivisionByZero`] si `b == 0`, y
/// [`LessonError::Overflow`] si el cociente no cabe en un `i64`
/// (`i64::MIN / -1`), donde Python pasaría a enteros grandes
/// (if the quotient does not fit in an `i64`, where Python would switch to
/// big integers).
pub fn divide_with_remainder(a: i64, b: i64) -> Result<(i64, i64)> {
    if b == 0 {
        return Err(LessonError::DivisionByZero);
    }
    let (Some(mut cociente), Some(mut resto)) = (a.checked_div(b), a.checked_rem(b)) else {
        return Err(LessonError::Overflow);
    };
    // floor division: the remainder takes the sign of the divisor
    if resto != 0 && (resto < 0) != (b < 0) {
        cociente -= 1;
        resto += b;
    }
    Ok((cociente, resto))
}

pub fn print_list<T: Display>(console: &mut Console, lista: &[T]) {
    for item in lista {
        console.log(item);
    }
}

/// Calcula el área de un triángulo (Computes the area of a triangle).
///
/// # Argumentos (Arguments)
/// * `base` - La base del triángulo
/// * `altura` - La altura del triángulo
///
/// # Devuelve (Returns)
/// El área del triángulo (The area of the triangle).
#[must_use]
pub fn triangle_area(base: f64, altura: f64) -> f64 {
    (base * altura) / 2.0
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    console.log(greet());
    console.log(greet_person("Ana"));

    let resultado = add(5, 3);
    console.log(format_args!("sumar(5, 3) = {resultado}"));

    console.log(formal_greeting("García", None));
    console.log(formal_greeting("García", Some("Dr.")));

    let precio = calculate_price(
        100.0,
        PriceParams {
            impuesto: 0.21,
            descuento: 10.0,
        },
    );
    console.log(format_args!(
        "calcular_precio(100, 0.21, 10) = {}",
        inspect::python(&json!(precio))
    ));

    let (cociente, resto) = divide_with_remainder(17, 5)?;
    console.log(format_args!("cociente = {cociente}, resto = {resto}"));

    print_list(console, &[1, 2, 3]);

    console.log(format_args!(
        "Área del triángulo (base 10, altura 5): {}",
        inspect::python(&json!(triangle_area(10.0, 5.0)))
    ));
    Ok(())
}
