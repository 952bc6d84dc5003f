//! Sección 5.3: Tipos personalizados (Custom Types)
//!
//! Uniones, literales, intersecciones y tipos de utilidad de TypeScript
//! expresados con enums, structs y `From`
//! (TypeScript unions, literals, intersections and utility types expressed
//! with enums, structs and `From`).

use std::any::Any;
use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;

use apuntes_common::{Console, Result, Settings, inspect};
use serde::Serialize;

// ============================================================================
// Alias, uniones y literales (Aliases, unions and literals)
// ============================================================================

/// `type ID = string | number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Id {
    Texto(String),
    Numero(i64),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Texto(s) => f.write_str(s),
            Id::Numero(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Texto(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Numero(n)
    }
}

/// `"Norte" | "Sur" | "Este" | "Oeste"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direccion {
    Norte,
    Sur,
    Este,
    Oeste,
}

impl fmt::Display for Direccion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            Direccion::Norte => "Norte",
            Direccion::Sur => "Sur",
            Direccion::Este => "Este",
            Direccion::Oeste => "Oeste",
        };
        f.write_str(nombre)
    }
}

// ============================================================================
// Intersección (Intersection)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub nombre: String,
    pub edad: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trabajador {
    pub puesto: String,
    pub salario: u32,
}

/// `Persona & Trabajador`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Empleado {
    #[serde(flatten)]
    pub persona: Persona,
    #[serde(flatten)]
    pub trabajador: Trabajador,
}

// ============================================================================
// Guardas de tipo (Type guards)
// ============================================================================

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter5::section_5_3::{print_id, Id};
/// assert_eq!(print_id(&Id::from(101_i64)), "ID en número: 101.00");
/// assert_eq!(print_id(&Id::from("abc123")), "ID en string: ABC123");
/// ```
#[must_use]
pub fn print_id(id: &Id) -> String {
    match id {
        Id::Texto(s) => format!("ID en string: {}", s.to_uppercase()),
        Id::Numero(n) => format!("ID en número: {:.2}", *n as f64),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Animal {
    Perro { ladrido: fn(&mut Console) },
    Gato { maullido: fn(&mut Console) },
}

pub fn make_sound(console: &mut Console, animal: &Animal) {
    match animal {
        Animal::Perro { ladrido } => ladrido(console),
        Animal::Gato { maullido } => maullido(console),
    }
}

// ============================================================================
// Uniones discriminadas (Discriminated unions)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Forma {
    Circulo { radio: f64 },
    Rectangulo { ancho: f64, alto: f64 },
}

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter5::section_5_3::{shape_area, Forma};
/// assert_eq!(shape_area(&Forma::Rectangulo { ancho: 10.0, alto: 20.0 }), 200.0);
/// ```
#[must_use]
pub fn shape_area(forma: &Forma) -> f64 {
    match *forma {
        Forma::Circulo { radio } => PI * radio.powi(2),
        Forma::Rectangulo { ancho, alto } => ancho * alto,
    }
}

// ============================================================================
// Genéricos (Generics)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Respuesta<T> {
    pub exito: bool,
    pub datos: Option<T>,
    pub error: Option<String>,
}

pub fn handle_response<T: Serialize>(console: &mut Console, respuesta: &Respuesta<T>) -> Result<()> {
    if respuesta.exito {
        console.log(format_args!("Datos: {}", inspect::to_js(&respuesta.datos)?));
    } else {
        let error = respuesta.error.as_deref().unwrap_or("undefined");
        console.error(format_args!("Error: {error}"));
    }
    Ok(())
}

/// `valor as string`: solo funciona si el valor realmente es un `&str`
/// (only succeeds if the value really is a `&str`).
#[must_use]
pub fn as_string(valor: &dyn Any) -> Option<&str> {
    valor.downcast_ref::<&'static str>().copied()
}

// ============================================================================
// Tipos mapeados (Mapped types)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcion {
    Rojo,
    Verde,
    Azul,
}

/// `{ [K in Opciones]: string }`: un campo por variante (one field per variant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapaColores {
    pub rojo: String,
    pub verde: String,
    pub azul: String,
}

impl Index<Opcion> for MapaColores {
    type Output = str;

    fn index(&self, opcion: Opcion) -> &str {
        match opcion {
            Opcion::Rojo => &self.rojo,
            Opcion::Verde => &self.verde,
            Opcion::Azul => &self.azul,
        }
    }
}

// ============================================================================
// Partial, Readonly, Pick, Omit
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Usuario {
    pub id: u32,
    pub nombre: String,
    pub correo: String,
    pub activo: bool,
}

impl Usuario {
    #[must_use]
    pub fn new(id: u32, nombre: &str, correo: &str, activo: bool) -> Self {
        Self {
            id,
            nombre: nombre.to_string(),
            correo: correo.to_string(),
            activo,
        }
    }
}

/// `Partial<Usuario>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsuarioParcial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl From<Usuario> for UsuarioParcial {
    fn from(u: Usuario) -> Self {
        Self {
            id: Some(u.id),
            nombre: Some(u.nombre),
            correo: Some(u.correo),
            activo: Some(u.activo),
        }
    }
}

/// `Pick<Usuario, "nombre" | "correo">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsuarioPick {
    pub nombre: String,
    pub correo: String,
}

impl From<Usuario> for UsuarioPick {
    fn from(u: Usuario) -> Self {
        Self {
            nombre: u.nombre,
            correo: u.correo,
        }
    }
}

/// `Omit<Usuario, "activo">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsuarioOmit {
    pub id: u32,
    pub nombre: String,
    pub correo: String,
}

impl From<Usuario> for UsuarioOmit {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            correo: u.correo,
        }
    }
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    let mut usuario_id = Id::from(12345_i64);
    tracing::debug!(%usuario_id, "id numérico");
    usuario_id = Id::from("abcde123");
    console.log(format_args!("ID usuario: {usuario_id}"));

    let mut resultado = Id::from(42_i64);
    console.log(format_args!("Resultado número: {resultado}"));
    resultado = Id::from("cuarenta y dos");
    console.log(format_args!("Resultado string: {resultado}"));

    let direccion_usuario = Direccion::Norte;
    console.log(format_args!("Dirección: {direccion_usuario}"));

    let empleado1 = Empleado {
        persona: Persona {
            nombre: "Ana".to_string(),
            edad: 30,
        },
        trabajador: Trabajador {
            puesto: "Developer".to_string(),
            salario: 50000,
        },
    };
    console.log(format_args!("Empleado: {}", inspect::to_js(&empleado1)?));

    console.log(print_id(&Id::from(101_i64)));
    console.log(print_id(&Id::from("abc123")));

    let perro = Animal::Perro {
        ladrido: |c| c.log("Guau guau!"),
    };
    let gato = Animal::Gato {
        maullido: |c| c.log("Miau miau!"),
    };
    make_sound(console, &perro);
    make_sound(console, &gato);

    let circulo = Forma::Circulo { radio: 5.0 };
    let rectangulo = Forma::Rectangulo {
        ancho: 10.0,
        alto: 20.0,
    };
    console.log(format_args!("Área círculo: {}", shape_area(&circulo)));
    console.log(format_args!("Área rectángulo: {}", shape_area(&rectangulo)));

    let correcta = Respuesta {
        exito: true,
        datos: Some("Operación exitosa"),
        error: None,
    };
    let fallida: Respuesta<()> = Respuesta {
        exito: false,
        datos: None,
        error: Some("Fallo en la operación".to_string()),
    };
    handle_response(console, &correcta)?;
    handle_response(console, &fallida)?;

    let valor_desconocido: Box<dyn Any> = Box::new("hola");
    if let Some(valor_cadena) = as_string(&*valor_desconocido) {
        console.log(format_args!("Valor cadena (assertion): {valor_cadena}"));
    }

    let colores = MapaColores {
        rojo: "#ff0000".to_string(),
        verde: "#00ff00".to_string(),
        azul: "#0000ff".to_string(),
    };
    console.log(format_args!("Color verde: {}", &colores[Opcion::Verde]));

    let usuario_completo = Usuario::new(1, "Josep", "josep@email.com", true);
    let usuario_parcial = UsuarioParcial {
        nombre: Some("Josep".to_string()),
        ..Default::default()
    };
    // Readonly: un binding sin `mut` (a binding without `mut`)
    let usuario_readonly = Usuario::new(2, "Ana", "ana@email.com", false);
    let usuario_pick = UsuarioPick::from(Usuario::new(0, "Carlos", "carlos@email.com", false));
    let usuario_omit = UsuarioOmit::from(Usuario::new(3, "Laura", "laura@email.com", false));

    console.log(format_args!("Usuario completo: {}", inspect::to_js(&usuario_completo)?));
    console.log(format_args!("Usuario parcial: {}", inspect::to_js(&usuario_parcial)?));
    console.log(format_args!("Usuario readonly: {}", inspect::to_js(&usuario_readonly)?));
    console.log(format_args!("Usuario pick: {}", inspect::to_js(&usuario_pick)?));
    console.log(format_args!("Usuario omit: {}", inspect::to_js(&usuario_omit)?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apuntes_common::Level;
    use test_case::test_case;

    #[test]
    fn test_circle_area() {
        let area = shape_area(&Forma::Circulo { radio: 5.0 });
        assert_eq!(area.to_string(), "78.53981633974483");
    }

    #[test]
    fn test_assertion_fails_for_other_types() {
        let numero: Box<dyn Any> = Box::new(5_i32);
        assert_eq!(as_string(&*numero), None);
    }

    #[test]
    fn test_mapped_type_index() {
        let colores = MapaColores {
            rojo: "#ff0000".into(),
            verde: "#00ff00".into(),
            azul: "#0000ff".into(),
        };
        assert_eq!(&colores[Opcion::Rojo], "#ff0000");
        assert_eq!(&colores[Opcion::Azul], "#0000ff");
    }

    #[test]
    fn test_utility_types() {
        let usuario = Usuario::new(1, "Josep", "josep@email.com", true);
        let parcial = UsuarioParcial::from(usuario.clone());
        assert_eq!(parcial.activo, Some(true));
        assert_eq!(
            inspect::to_js(&UsuarioParcial::default()).unwrap(),
            "{}"
        );
        let pick = UsuarioPick::from(usuario.clone());
        assert_eq!(pick.correo, "josep@email.com");
        let omit = UsuarioOmit::from(usuario);
        assert_eq!(
            inspect::to_js(&omit).unwrap(),
            "{ id: 1, nombre: 'Josep', correo: 'josep@email.com' }"
        );
    }

    #[test_case(Direccion::Norte => "Norte")]
    #[test_case(Direccion::Sur => "Sur")]
    #[test_case(Direccion::Este => "Este")]
    #[test_case(Direccion::Oeste => "Oeste")]
    fn test_direccion_display(direccion: Direccion) -> String {
        direccion.to_string()
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        assert_eq!(
            console.lines(),
            [
                "ID usuario: abcde123",
                "Resultado número: 42",
                "Resultado string: cuarenta y dos",
                "Dirección: Norte",
                "Empleado: { nombre: 'Ana', edad: 30, puesto: 'Developer', salario: 50000 }",
                "ID en número: 101.00",
                "ID en string: ABC123",
                "Guau guau!",
                "Miau miau!",
                "Área círculo: 78.53981633974483",
                "Área rectángulo: 200",
                "Datos: Operación exitosa",
                "Error: Fallo en la operación",
                "Valor cadena (assertion): hola",
                "Color verde: #00ff00",
                "Usuario completo: { id: 1, nombre: 'Josep', correo: 'josep@email.com', activo: true }",
                "Usuario parcial: { nombre: 'Josep' }",
                "Usuario readonly: { id: 2, nombre: 'Ana', correo: 'ana@email.com', activo: false }",
                "Usuario pick: { nombre: 'Carlos', correo: 'carlos@email.com' }",
                "Usuario omit: { id: 3, nombre: 'Laura', correo: 'laura@email.com' }",
            ]
        );
        let errors = console
            .entries()
            .iter()
            .filter(|e| e.level == Level::Error)
            .count();
        assert_eq!(errors, 1);
    }
}
