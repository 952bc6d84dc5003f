//! Sección 2.1: Estructuras de control (Control Structures)
//!
//! - **Guard clauses**: `return Err(..)` temprano con `?` en el llamador
//! - **Switch exhaustivo (Exhaustive switch)**: `match` sobre un enum; el
//!   compilador rechaza un caso olvidado sin necesidad de `never`
//! - **Nullish coalescing / optional chaining**: `Option::unwrap_or`, `and_then`
//! - **Uniones discriminadas (Discriminated unions)**: enums con datos
//! - **Type predicates**: métodos `as_*` que devuelven `Option<&T>`
//! - **try/catch**: `Result` y `match`
//! - **asserts**: deserializar y validar un valor dinámico

use apuntes_common::{Console, LessonError, Result, Settings, inspect};
use serde::Deserialize;
use serde_json::{Value, json};

// ============================================================================
// Guard clauses
// ============================================================================

/// Procesa un pago validando primero la entrada
/// (Processes a payment, validating the input first).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_1::process_payment;
///
/// assert_eq!(process_payment(Some(50.0)).unwrap(), "✅ Pago procesado: 50 €");
/// assert_eq!(process_payment(None).unwrap_err().to_string(), "Monto nulo");
/// assert_eq!(process_payment(Some(-10.0)).unwrap_err().to_string(), "Monto inválido");
/// ```
pub fn process_payment(monto: Option<f64>) -> Result<String> {
    let Some(monto) = monto else {
        return Err(LessonError::NullAmount);
    };
    if monto <= 0.0 || monto.is_nan() {
        return Err(LessonError::InvalidAmount);
    }
    Ok(format!("✅ Pago procesado: {monto} €"))
}

// ============================================================================
// Switch exhaustivo (Exhaustive switch)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Guest,
    ReadOnly,
}

impl Role {
    #[must_use]
    pub fn permissions(self) -> &'static str {
        match self {
            Role::Admin => "📂 Acceso total",
            Role::User => "📁 Acceso limitado",
            Role::Guest => "📄 Solo lectura",
            Role::ReadOnly => "🔒 Acceso restringido",
        }
    }
}

// ============================================================================
// Ternario y nullish coalescing (Ternary and nullish coalescing)
// ============================================================================

/// `debug ? "debug" : "producción"` y `puerto ?? 3000`.
#[must_use]
pub fn environment_summary(debug: bool, puerto: Option<u16>) -> String {
    let modo = if debug { "debug" } else { "producción" };
    let puerto = puerto.unwrap_or(3000);
    format!("⚙️ Modo: {modo}, Puerto: {puerto}")
}

// ============================================================================
// Optional chaining
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub ciudad: Option<String>,
    pub pais: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub nombre: String,
    pub direccion: Option<Address>,
    #[serde(default)]
    pub activo: bool,
}

impl User {
    /// `usuario?.direccion?.ciudad ?? "Desconocida"`.
    #[must_use]
    pub fn city(&self) -> &str {
        self.direccion
            .as_ref()
            .and_then(|d| d.ciudad.as_deref())
            .unwrap_or("Desconocida")
    }
}

// ============================================================================
// Unión discriminada + match (Discriminated union + match)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok { datos: Vec<String> },
    Error { mensaje: String },
    Loading,
}

pub fn handle_response(console: &mut Console, resp: &Response) {
    match resp {
        Response::Ok { datos } => {
            console.log(format_args!("📦 Datos recibidos: {}", inspect::js(&json!(datos))));
        }
        Response::Error { mensaje } => console.error(format_args!("❌ Error: {mensaje}")),
        Response::Loading => console.log("⏳ Cargando..."),
    }
}

// ============================================================================
// Type predicates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employee {
    pub salario: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub compras: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    Employee(Employee),
    Customer(Customer),
}

impl Person {
    /// `p is Empleado`: el `Some` ya trae el tipo estrechado
    /// (the `Some` already carries the narrowed type).
    #[must_use]
    pub fn as_employee(&self) -> Option<&Employee> {
        match self {
            Person::Employee(e) => Some(e),
            Person::Customer(_) => None,
        }
    }

    /// Aquí el propio `match` estrecha el tipo en cada rama
    /// (Here the `match` itself narrows the type in each arm).
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Person::Employee(e) => format!("👔 Es un empleado con salario: {}", e.salario),
            Person::Customer(c) => format!("🛒 Es un cliente con compras: {}", c.compras),
        }
    }
}

// ============================================================================
// asserts: validar un valor dinámico (validate a dynamic value)
// ============================================================================

/// Comprueba que `val` tiene forma de `User` y lo devuelve tipado
/// (Checks that `val` looks like a `User` and returns it typed).
///
/// Un `asserts val is Usuario` de TypeScript solo mira `nombre`; aquí se
/// devuelve un `User` real, así que el resto de campos presentes también
/// tiene que encajar: una `direccion` mal formada se rechaza
/// (A TypeScript `asserts val is Usuario` only looks at `nombre`; this returns
/// a real `User`, so any other field present must fit too: a malformed
/// `direccion` is rejected).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_1::assert_user;
/// use serde_json::json;
///
/// let user = assert_user(&json!({ "nombre": "Laura", "activo": true })).unwrap();
/// assert_eq!(user.nombre, "Laura");
/// assert!(assert_user(&json!({ "nombre": 7 })).is_err());
/// ```
pub fn assert_user(val: &Value) -> Result<User> {
    if !val.get("nombre").is_some_and(Value::is_string) {
        return Err(LessonError::InvalidUser);
    }
    User::deserialize(val).map_err(|_| LessonError::InvalidUser)
}

/// Lógica con operadores booleanos (Logic with boolean operators).
#[must_use]
pub fn access_message(es_admin: bool, es_activo: bool) -> &'static str {
    if es_admin && es_activo {
        "👑 Acceso concedido al panel de administrador"
    } else if es_admin && !es_activo {
        "🚫 Admin inactivo, acceso denegado"
    } else {
        "🧍 Usuario sin privilegios"
    }
}

fn pay_both(console: &mut Console) -> Result<()> {
    console.log(process_payment(Some(50.0))?);
    console.log(process_payment(Some(-10.0))?);
    Ok(())
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    tracing::debug!(permisos = Role::Admin.permissions(), "switch exhaustivo");

    console.log(environment_summary(true, None));

    let usuario = User {
        nombre: "Josep".to_string(),
        direccion: Some(Address {
            ciudad: Some("València".to_string()),
            pais: None,
        }),
        activo: true,
    };
    console.log(format_args!("🌍 Ciudad del usuario: {}", usuario.city()));

    handle_response(
        console,
        &Response::Ok {
            datos: vec!["a".into(), "b".into(), "c".into()],
        },
    );
    handle_response(
        console,
        &Response::Error {
            mensaje: "Servidor no disponible".to_string(),
        },
    );

    console.log(Person::Employee(Employee { salario: 2200 }).describe());
    console.log(Person::Customer(Customer { compras: 4 }).describe());

    // try/catch
    if let Err(e) = pay_both(console) {
        console.error(format_args!("⚠️ Error controlado: {e}"));
    }

    let posible_usuario = json!({ "nombre": "Laura", "activo": true });
    match assert_user(&posible_usuario) {
        Ok(u) => console.log(format_args!("🔐 Usuario válido: {}", u.nombre)),
        Err(e) => console.error(format_args!("❌ Validación fallida: {e}")),
    }

    console.log(access_message(true, false));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Role::Admin => "📂 Acceso total")]
    #[test_case(Role::User => "📁 Acceso limitado")]
    #[test_case(Role::Guest => "📄 Solo lectura")]
    #[test_case(Role::ReadOnly => "🔒 Acceso restringido")]
    fn test_permissions(role: Role) -> &'static str {
        role.permissions()
    }

    #[test]
    fn test_type_predicate() {
        let empleado = Person::Employee(Employee { salario: 2200 });
        let cliente = Person::Customer(Customer { compras: 4 });
        assert_eq!(empleado.as_employee().map(|e| e.salario), Some(2200));
        assert!(cliente.as_employee().is_none());
    }

    #[test]
    fn test_zero_amount_is_invalid() {
        assert!(matches!(process_payment(Some(0.0)), Err(LessonError::InvalidAmount)));
    }

    #[test]
    fn test_environment_summary() {
        assert_eq!(environment_summary(true, None), "⚙️ Modo: debug, Puerto: 3000");
        assert_eq!(environment_summary(false, Some(8080)), "⚙️ Modo: producción, Puerto: 8080");
    }

    #[test]
    fn test_city_falls_back() {
        let sin_direccion = User {
            nombre: "Ana".into(),
            direccion: None,
            activo: false,
        };
        assert_eq!(sin_direccion.city(), "Desconocida");

        let sin_ciudad = User {
            direccion: Some(Address::default()),
            ..sin_direccion
        };
        assert_eq!(sin_ciudad.city(), "Desconocida");
    }

    #[test]
    fn test_assert_user_checks_the_whole_shape() {
        let con_ciudad = json!({ "nombre": "Laura", "direccion": { "ciudad": "Vigo" } });
        assert_eq!(assert_user(&con_ciudad).unwrap().city(), "Vigo");

        let mal_formada = json!({ "nombre": "Laura", "direccion": "Vigo" });
        assert!(matches!(assert_user(&mal_formada), Err(LessonError::InvalidUser)));
    }

    #[test]
    fn test_assert_user_rejects_non_objects() {
        assert!(matches!(assert_user(&json!(null)), Err(LessonError::InvalidUser)));
        assert!(matches!(assert_user(&json!("Laura")), Err(LessonError::InvalidUser)));
    }

    #[test_case(true, true => "👑 Acceso concedido al panel de administrador")]
    #[test_case(true, false => "🚫 Admin inactivo, acceso denegado")]
    #[test_case(false, true => "🧍 Usuario sin privilegios")]
    fn test_access_message(admin: bool, activo: bool) -> &'static str {
        access_message(admin, activo)
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        assert_eq!(
            console.lines(),
            [
                "⚙️ Modo: debug, Puerto: 3000",
                "🌍 Ciudad del usuario: València",
                "📦 Datos recibidos: [ 'a', 'b', 'c' ]",
                "❌ Error: Servidor no disponible",
                "👔 Es un empleado con salario: 2200",
                "🛒 Es un cliente con compras: 4",
                "✅ Pago procesado: 50 €",
                "⚠️ Error controlado: Monto inválido",
                "🔐 Usuario válido: Laura",
                "🚫 Admin inactivo, acceso denegado",
            ]
        );
    }
}
