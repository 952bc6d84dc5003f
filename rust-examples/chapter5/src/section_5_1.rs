//! Sección 5.1: Interfaces y objetos (Interfaces and Objects)
//!
//! Una interfaz de TypeScript describe una forma; en Rust la forma es un
//! `struct` y el comportamiento es un `trait`
//! (A TypeScript interface describes a shape; in Rust the shape is a
//! `struct` and the behaviour is a `trait`).
//!
//! | TypeScript | Rust |
//! |------------|------|
//! | `edad?: number` | `Option<u32>` |
//! | `readonly id` | campo privado + getter (private field + getter) |
//! | `interface B extends A` | composición con `#[serde(flatten)]` |
//! | `interface Op { (a, b): number }` | `fn(i64, i64) -> i64` |
//! | `[nombre: string]: string` | mapa (map) |
//! | `class C implements I` | `impl I for C` |
//! | `interface Caja<T>` | `trait Caja<T>` |

use apuntes_common::{Console, Result, Settings, inspect};
use serde::Serialize;
use serde_json::{Map, Value, json};

// ============================================================================
// Propiedades opcionales y de solo lectura (Optional and read-only properties)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usuario {
    pub nombre: String,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
}

/// `id` solo se puede leer una vez creado el producto
/// (`id` can only be read once the product exists).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Producto {
    id: u32,
    pub nombre: String,
    pub precio: f64,
}

impl Producto {
    #[must_use]
    pub fn new(id: u32, nombre: &str, precio: f64) -> Self {
        Self {
            id,
            nombre: nombre.to_string(),
            precio,
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }
}

// ============================================================================
// Extensión por composición (Extension through composition)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub nombre: String,
    pub edad: u32,
}

/// `interface Empleado extends Persona`.
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter5::section_5_1::{Empleado, Persona};
/// use apuntes_common::inspect;
///
/// let empleado = Empleado {
///     persona: Persona { nombre: "Ana".into(), edad: 28 },
///     puesto: "Ingeniera".into(),
///     salario: 40000,
/// };
/// assert_eq!(
///     inspect::to_js(&empleado).unwrap(),
///     "{ nombre: 'Ana', edad: 28, puesto: 'Ingeniera', salario: 40000 }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Empleado {
    #[serde(flatten)]
    pub persona: Persona,
    pub puesto: String,
    pub salario: u32,
}

// ============================================================================
// Interfaces para funciones (Function interfaces)
// ============================================================================

pub type Operacion = fn(i64, i64) -> i64;

pub const SUMA: Operacion = |x, y| x + y;
pub const RESTA: Operacion = |x, y| x - y;

// ============================================================================
// Interfaz híbrida (Hybrid interface)
// ============================================================================

/// Contador que se "llama" y además tiene estado
/// (A counter that can be "called" and also has state).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Contador {
    pub valor: i64,
}

impl Contador {
    /// `miContador(inicio)`.
    pub fn call(&mut self, inicio: i64) -> String {
        self.valor = inicio;
        format!("Contador iniciado en {inicio}")
    }

    pub fn reiniciar(&mut self, console: &mut Console) {
        self.valor = 0;
        console.log("Contador reiniciado");
    }
}

// ============================================================================
// Traits implementados por structs (Traits implemented by structs)
// ============================================================================

pub trait Vehiculo {
    fn marca(&self) -> &str;
    fn modelo(&self) -> &str;
    fn arrancar(&self, console: &mut Console);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coche {
    marca: String,
    modelo: String,
}

impl Coche {
    #[must_use]
    pub fn new(marca: &str, modelo: &str) -> Self {
        Self {
            marca: marca.to_string(),
            modelo: modelo.to_string(),
        }
    }
}

impl Vehiculo for Coche {
    fn marca(&self) -> &str {
        &self.marca
    }

    fn modelo(&self) -> &str {
        &self.modelo
    }

    fn arrancar(&self, console: &mut Console) {
        console.log(format_args!(
            "El coche {} {} ha arrancado.",
            self.marca(),
            self.modelo()
        ));
    }
}

/// Interfaz genérica (Generic interface).
pub trait Caja<T> {
    fn contenido(&self) -> &T;
    fn abrir(&self, console: &mut Console) -> &T;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CajaDeRegalo<T> {
    contenido: T,
}

impl<T> CajaDeRegalo<T> {
    pub fn new(contenido: T) -> Self {
        Self { contenido }
    }
}

impl<T> Caja<T> for CajaDeRegalo<T> {
    fn contenido(&self) -> &T {
        &self.contenido
    }

    fn abrir(&self, console: &mut Console) -> &T {
        console.log("Abriendo caja...");
        &self.contenido
    }
}

#[must_use]
pub fn sample_phone_book() -> Map<String, Value> {
    let mut telefonos = Map::new();
    telefonos.insert("Carlos".into(), json!("555-1234"));
    telefonos.insert("Ana".into(), json!("555-5678"));
    telefonos
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    let usuario1 = Usuario {
        nombre: "Carlos".to_string(),
        correo: "carlos@email.com".to_string(),
        edad: None,
    };
    console.log(format_args!("Usuario1: {}", inspect::to_js(&usuario1)?));

    let producto1 = Producto::new(1, "Libro", 29.99);
    console.log(format_args!("Producto1: {}", inspect::to_js(&producto1)?));

    let empleado1 = Empleado {
        persona: Persona {
            nombre: "Ana".to_string(),
            edad: 28,
        },
        puesto: "Ingeniera".to_string(),
        salario: 40000,
    };
    console.log(format_args!("Empleado1: {}", inspect::to_js(&empleado1)?));

    console.log(format_args!("Suma: {}", SUMA(5, 3)));
    console.log(format_args!("Resta: {}", RESTA(10, 7)));

    let mut telefonos = sample_phone_book();
    telefonos.insert("Laura".into(), json!("555-8765"));
    console.log(format_args!(
        "Teléfonos: {}",
        inspect::js(&Value::Object(telefonos))
    ));

    let mut mi_contador = Contador::default();
    console.log(mi_contador.call(10));
    console.log(format_args!("Valor: {}", mi_contador.valor));
    mi_contador.reiniciar(console);
    console.log(format_args!("Valor tras reiniciar: {}", mi_contador.valor));

    let mi_coche = Coche::new("Toyota", "Corolla");
    mi_coche.arrancar(console);

    let caja_numero = CajaDeRegalo::new(100);
    let numero = *caja_numero.abrir(console);
    console.log(format_args!("Caja con número: {numero}"));

    let caja_string = CajaDeRegalo::new("Regalo sorpresa".to_string());
    let texto = caja_string.abrir(console).clone();
    console.log(format_args!("Caja con string: {texto}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_field_is_omitted_until_set() {
        let mut usuario = Usuario {
            nombre: "Carlos".into(),
            correo: "carlos@email.com".into(),
            edad: None,
        };
        assert_eq!(
            inspect::to_js(&usuario).unwrap(),
            "{ nombre: 'Carlos', correo: 'carlos@email.com' }"
        );
        usuario.edad = Some(40);
        assert!(inspect::to_js(&usuario).unwrap().ends_with("edad: 40 }"));
    }

    #[test]
    fn test_read_only_id() {
        let producto = Producto::new(7, "Lápiz", 1.5);
        assert_eq!(producto.id(), 7);
    }

    #[test]
    fn test_contador() {
        let mut console = Console::capture();
        let mut contador = Contador::default();
        assert_eq!(contador.call(3), "Contador iniciado en 3");
        assert_eq!(contador.valor, 3);
        contador.reiniciar(&mut console);
        assert_eq!(contador.valor, 0);
        assert_eq!(console.lines(), ["Contador reiniciado"]);
    }

    #[test]
    fn test_caja_generica() {
        let mut console = Console::capture();
        let caja = CajaDeRegalo::new(vec![1, 2]);
        assert_eq!(caja.contenido(), &[1, 2]);
        assert_eq!(caja.abrir(&mut console), &[1, 2]);
        assert_eq!(console.lines(), ["Abriendo caja..."]);
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        assert_eq!(
            console.lines(),
            [
                "Usuario1: { nombre: 'Carlos', correo: 'carlos@email.com' }",
                "Producto1: { id: 1, nombre: 'Libro', precio: 29.99 }",
                "Empleado1: { nombre: 'Ana', edad: 28, puesto: 'Ingeniera', salario: 40000 }",
                "Suma: 8",
                "Resta: 3",
                "Teléfonos: { Carlos: '555-1234', Ana: '555-5678', Laura: '555-8765' }",
                "Contador iniciado en 10",
                "Valor: 10",
                "Contador reiniciado",
                "Valor tras reiniciar: 0",
                "El coche Toyota Corolla ha arrancado.",
                "Abriendo caja...",
                "Caja con número: 100",
                "Abriendo caja...",
                "Caja con string: Regalo sorpresa",
            ]
        );
    }
}
