//! Sección 1.1: Apuntes básicos (Basic Notes)
//!
//! Un recorrido rápido por todo el temario; cada bloque se amplía en su
//! propia sección (A quick tour of the whole syllabus; each block is
//! expanded in its own section):
//! - **Tipos primitivos (Primitive types)**: `String`, `i64`, `bool`
//! - **Colecciones (Collections)**: `Vec`, structs, `IndexMap`
//! - **Control de flujo (Control flow)**: `if`, `match`, bucles
//! - **Funciones (Functions)**: parámetros opcionales y por defecto con `Option`
//! - **Tipos propios (Custom types)**: enums, structs, métodos

use apuntes_common::{Console, Result, Settings};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

// ============================================================================
// 1. Tipos de datos básicos (Basic data types)
// ============================================================================

/// Un valor "flexible" que cambia de tipo en tiempo de ejecución
/// (A "flexible" value that changes type at run time).
///
/// Rust no tiene `any`; el equivalente honesto es un valor dinámico
/// (Rust has no `any`; the honest equivalent is a dynamic value).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_1::flexible_value;
/// assert_eq!(flexible_value(), serde_json::json!(123));
/// ```
#[must_use]
pub fn flexible_value() -> Value {
    let mut flexible = json!("texto");
    tracing::trace!(%flexible, "valor inicial");
    flexible = json!(123);
    flexible
}

// ============================================================================
// 2. Arrays y diccionarios (Arrays and dictionaries)
// ============================================================================

/// Objeto literal con forma fija (Object literal with a fixed shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub nombre: String,
    pub edad: u32,
}

/// Mapa clave-valor (Key-value map).
#[must_use]
pub fn sample_map() -> IndexMap<String, i64> {
    let mut mapa = IndexMap::new();
    mapa.insert("uno".to_string(), 1);
    mapa.insert("dos".to_string(), 2);
    mapa
}

// ============================================================================
// 3. Estructuras de control (Control structures)
// ============================================================================

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_1::age_message;
/// assert_eq!(age_message(25), "Eres mayor de edad");
/// assert_eq!(age_message(17), "Eres menor de edad");
/// ```
#[must_use]
pub fn age_message(edad: u32) -> &'static str {
    if edad >= 18 {
        "Eres mayor de edad"
    } else {
        "Eres menor de edad"
    }
}

/// `switch` sobre una cadena (`switch` on a string).
#[must_use]
pub fn role_access(rol: &str) -> &'static str {
    match rol {
        "admin" => "Acceso total",
        "usuario" => "Acceso limitado",
        _ => "Rol desconocido",
    }
}

// ============================================================================
// 5. Funciones (Functions)
// ============================================================================

#[must_use]
pub fn greet(nombre: &str) -> String {
    format!("Hola, {nombre}")
}

/// Función flecha (Arrow function) como closure.
pub const ADD: fn(i64, i64) -> i64 = |a, b| a + b;

/// Parámetro por defecto: `None` significa `b = 2`
/// (Default parameter: `None` means `b = 2`).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_1::multiply;
/// assert_eq!(multiply(5, Some(3)), 15);
/// assert_eq!(multiply(5, None), 10);
/// ```
#[must_use]
pub fn multiply(a: i64, b: Option<i64>) -> i64 {
    a * b.unwrap_or(2)
}

/// Parámetro opcional (Optional parameter).
#[must_use]
pub fn greet_optional(nombre: Option<&str>) -> String {
    match nombre {
        Some(nombre) if !nombre.is_empty() => format!("Hola, {nombre}"),
        _ => "Hola, desconocido".to_string(),
    }
}

/// Función sin retorno (Function without a return value).
pub fn show_message(console: &mut Console, mensaje: &str) {
    console.log(mensaje);
}

// ============================================================================
// 6. Tipos personalizados (Custom types)
// ============================================================================

/// Tipo unión `number | string` (Union type).
#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Tipo literal `"admin" | "usuario" | "invitado"` (Literal type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rol {
    Admin,
    Usuario,
    Invitado,
}

// ============================================================================
// 7. Interfaces y objetos (Interfaces and objects)
// ============================================================================

/// Plantilla de objeto con un campo opcional
/// (Object template with an optional field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usuario {
    pub nombre: String,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
}

// ============================================================================
// 8. Clases (Classes)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    nombre: String,
}

impl Animal {
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
        }
    }

    #[must_use]
    pub fn make_sound(&self) -> String {
        format!("{} hace un sonido", self.nombre)
    }
}

/// Ejecuta los ejemplos en orden (Runs the examples in order).
pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    // 1. Tipos
    let nombre = "Josep";
    let edad: u32 = 25;
    let es_estudiante = true;
    let variable_flexible = flexible_value();
    let indefinido: Option<()> = None;
    tracing::debug!(nombre, edad, es_estudiante, %variable_flexible, ?indefinido, "tipos básicos");

    // 2. Arrays y diccionarios
    let numeros = [1, 2, 3, 4, 5];
    let frutas = vec!["manzana", "pera", "uva"];
    let persona = Persona {
        nombre: "Ana".to_string(),
        edad: 30,
    };
    let mapa = sample_map();
    tracing::debug!(?numeros, ?mapa, "colecciones");

    // 3. Estructuras de control
    console.log(age_message(edad));
    let rol = "admin";
    console.log(role_access(rol));

    // 4. Bucles
    for i in 0..5 {
        console.log(format_args!("Iteración: {i}"));
    }

    let mut contador = 0;
    while contador < 3 {
        console.log(format_args!("Contador: {contador}"));
        contador += 1;
    }

    for fruta in &frutas {
        console.log(format_args!("Fruta: {fruta}"));
    }

    // for...in: recorrer las propiedades de un objeto
    if let Value::Object(props) = serde_json::to_value(&persona)? {
        for (clave, valor) in &props {
            console.log(format_args!("{clave}: {}", apuntes_common::inspect::js(valor)));
        }
    }

    // 6. Tipos personalizados
    let mut resultado = NumberOrText::Number(42.0);
    resultado = match resultado {
        NumberOrText::Number(_) => NumberOrText::Text("cuarenta y dos".to_string()),
        text => text,
    };
    let rol_usuario = Rol::Usuario;
    tracing::debug!(?resultado, ?rol_usuario, "tipos personalizados");

    // 7. Interfaces
    let usuario1 = Usuario {
        nombre: "Carlos".to_string(),
        correo: "carlos@email.com".to_string(),
        edad: None,
    };
    tracing::debug!(?usuario1, "usuario");

    // 8. Clases
    let perro = Animal::new("Firulais");
    console.log(perro.make_sound());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("admin" => "Acceso total")]
    #[test_case("usuario" => "Acceso limitado")]
    #[test_case("invitado" => "Rol desconocido")]
    fn test_role_access(rol: &str) -> &'static str {
        role_access(rol)
    }

    #[test]
    fn test_functions() {
        assert_eq!(greet("Josep"), "Hola, Josep");
        assert_eq!(ADD(2, 3), 5);
        assert_eq!(greet_optional(None), "Hola, desconocido");
        assert_eq!(greet_optional(Some("")), "Hola, desconocido");
        assert_eq!(greet_optional(Some("Ana")), "Hola, Ana");
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let map = sample_map();
        let claves: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(claves, ["uno", "dos"]);
    }

    #[test]
    fn test_optional_field_is_omitted() {
        let usuario = Usuario {
            nombre: "Carlos".into(),
            correo: "carlos@email.com".into(),
            edad: None,
        };
        let value = serde_json::to_value(&usuario).unwrap();
        assert!(value.get("edad").is_none());
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();

        let lines = console.lines();
        assert_eq!(lines[0], "Eres mayor de edad");
        assert_eq!(lines[1], "Acceso total");
        assert_eq!(lines[2], "Iteración: 0");
        assert_eq!(lines[6], "Iteración: 4");
        assert_eq!(lines[7], "Contador: 0");
        assert_eq!(lines[10], "Fruta: manzana");
        assert_eq!(lines[13], "nombre: Ana");
        assert_eq!(lines[14], "edad: 30");
        assert_eq!(lines.last(), Some(&"Firulais hace un sonido"));
    }
}
