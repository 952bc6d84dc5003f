//! Sección 5.2: Clases (Classes)
//!
//! Rust no tiene clases ni herencia. Cada idea de la POO tiene su propio
//! mecanismo (Rust has no classes or inheritance; each OOP idea has its own
//! mechanism):
//!
//! | TypeScript | Rust |
//! |------------|------|
//! | `private` / `protected` | visibilidad del módulo (`pub(crate)`, privado) |
//! | `static` | constantes y funciones asociadas (associated items) |
//! | `extends` + `super` | composición + trait (composition + trait) |
//! | `get` / `set` | métodos `saldo()` / `set_saldo()` |
//! | `abstract class` | trait con métodos provistos (provided methods) |
//! | sobrecarga (overloads) | trait implementado por cada tipo |
//! | decoradores (decorators) | macros |

use std::fmt::Display;

use apuntes_common::{Console, Result, Settings};

// ============================================================================
// Clase básica (Basic class)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub nombre: String,
}

impl Animal {
    #[must_use]
    pub fn new(nombre: &str) -> Self {
        Self {
            nombre: nombre.to_string(),
        }
    }

    pub fn make_sound(&self, console: &mut Console) {
        console.log(format_args!("{} hace un sonido.", self.nombre));
    }
}

// ============================================================================
// Modificadores de acceso y herencia (Access modifiers and inheritance)
// ============================================================================

/// Algo que sabe mostrar sus datos (Something that can show its data).
pub trait ShowData {
    fn show_data(&self, console: &mut Console);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub nombre: String,
    edad: u32,
    pub(crate) direccion: String,
}

impl Persona {
    #[must_use]
    pub fn new(nombre: &str, edad: u32, direccion: &str) -> Self {
        Self {
            nombre: nombre.to_string(),
            edad,
            direccion: direccion.to_string(),
        }
    }
}

impl ShowData for Persona {
    fn show_data(&self, console: &mut Console) {
        console.log(format_args!(
            "Nombre: {}, Edad: {}, Dirección: {}",
            self.nombre, self.edad, self.direccion
        ));
    }
}

/// `class Empleado extends Persona`: contiene una `Persona` y delega en ella
/// (holds a `Persona` and delegates to it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empleado {
    persona: Persona,
    salario: u32,
}

impl Empleado {
    #[must_use]
    pub fn new(nombre: &str, edad: u32, direccion: &str, salario: u32) -> Self {
        Self {
            persona: Persona::new(nombre, edad, direccion),
            salario,
        }
    }

    pub fn show_salary(&self, console: &mut Console) {
        console.log(format_args!(
            "Salario de {}: ${}",
            self.persona.nombre, self.salario
        ));
    }
}

impl ShowData for Empleado {
    fn show_data(&self, console: &mut Console) {
        self.persona.show_data(console);
        self.show_salary(console);
    }
}

// ============================================================================
// Miembros estáticos (Static members)
// ============================================================================

pub struct Matematica;

impl Matematica {
    #[allow(clippy::approx_constant)]
    pub const PI: f64 = 3.1416;

    /// # Ejemplos (Examples)
    /// ```
    /// use apuntes_chapter5::section_5_2::Matematica;
    /// assert_eq!(Matematica::circle_area(2.0), 12.5664);
    /// ```
    #[must_use]
    pub fn circle_area(radio: f64) -> f64 {
        Self::PI * radio * radio
    }
}

// ============================================================================
// Solo lectura, getters y setters (Read-only, getters and setters)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punto {
    x: i64,
    y: i64,
}

impl Punto {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CuentaBancaria {
    saldo: f64,
}

impl CuentaBancaria {
    #[must_use]
    pub fn saldo(&self) -> f64 {
        self.saldo
    }

    /// Ignora los valores negativos (Ignores negative values).
    pub fn set_saldo(&mut self, console: &mut Console, valor: f64) {
        if valor < 0.0 {
            console.log("Saldo no puede ser negativo.");
        } else {
            self.saldo = valor;
        }
    }
}

// ============================================================================
// Clases abstractas e interfaces (Abstract classes and interfaces)
// ============================================================================

/// `abstract class Vehiculo`: `mover` es abstracto, `encender` ya viene hecho
/// (`mover` is abstract, `encender` is provided).
pub trait Vehiculo {
    fn mover(&self, console: &mut Console);

    fn encender(&self, console: &mut Console) {
        console.log("Vehículo encendido");
    }
}

pub trait Volador {
    fn volar(&self, console: &mut Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Avion;

impl Vehiculo for Avion {
    fn mover(&self, console: &mut Console) {
        console.log("Avión está moviéndose");
    }
}

impl Volador for Avion {
    fn volar(&self, console: &mut Console) {
        console.log("Avión está volando");
    }
}

// ============================================================================
// Clases genéricas (Generic classes)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caja<T> {
    contenido: T,
}

impl<T> Caja<T> {
    pub fn new(contenido: T) -> Self {
        Self { contenido }
    }

    pub fn abrir(&self, console: &mut Console) -> &T {
        console.log("Abriendo caja...");
        &self.contenido
    }
}

// ============================================================================
// Sobrecarga (Overloading)
// ============================================================================

/// Una "firma" de `calcular` por cada tipo (One `calcular` signature per type).
pub trait Calcular {
    type Output;
    fn calcular(self, otro: Self) -> Self::Output;
}

impl Calcular for i64 {
    type Output = i64;

    fn calcular(self, otro: Self) -> i64 {
        self + otro
    }
}

impl Calcular for &str {
    type Output = String;

    fn calcular(self, otro: Self) -> String {
        format!("{self}{otro}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Calculadora;

impl Calculadora {
    /// # Ejemplos (Examples)
    /// ```
    /// use apuntes_chapter5::section_5_2::Calculadora;
    /// let calc = Calculadora;
    /// assert_eq!(calc.calcular(5_i64, 10), 15);
    /// assert_eq!(calc.calcular("Hola, ", "mundo"), "Hola, mundo");
    /// ```
    pub fn calcular<T: Calcular>(&self, a: T, b: T) -> T::Output {
        a.calcular(b)
    }
}

// ============================================================================
// Decoradores (Decorators)
// ============================================================================

/// Tipos que se anuncian al registrarse (Types that announce their registration).
pub trait Registrada {
    const NOMBRE: &'static str;

    fn registrar(console: &mut Console) {
        console.log(format_args!("Clase registrada: {}", Self::NOMBRE));
    }
}

/// `@registrarClase`.
#[macro_export]
macro_rules! registrar_clase {
    ($tipo:ident) => {
        impl $crate::section_5_2::Registrada for $tipo {
            const NOMBRE: &'static str = stringify!($tipo);
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductoDecorado {
    pub nombre: String,
    pub precio: f64,
}

registrar_clase!(ProductoDecorado);

fn show_open<T: Display>(console: &mut Console, etiqueta: &str, caja: &Caja<T>) {
    let contenido = caja.abrir(console).to_string();
    console.log(format_args!("{etiqueta} {contenido}"));
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    Animal::new("Firulais").make_sound(console);

    Persona::new("Ana", 30, "Calle Falsa 123").show_data(console);

    console.log(format_args!("PI: {}", Matematica::PI));
    console.log(format_args!(
        "Área círculo (r=2): {}",
        Matematica::circle_area(2.0)
    ));

    Empleado::new("Carlos", 40, "Av. Siempre Viva 742", 50000).show_data(console);

    let p = Punto::new(10, 20);
    tracing::debug!(x = p.x(), y = p.y(), "punto de solo lectura");

    let mut cuenta = CuentaBancaria::default();
    cuenta.set_saldo(console, 100.0);
    console.log(format_args!("Saldo: {}", cuenta.saldo()));
    cuenta.set_saldo(console, -50.0);

    let avion = Avion;
    avion.encender(console);
    avion.mover(console);
    avion.volar(console);

    show_open(console, "Contenido caja número:", &Caja::new(123));
    show_open(console, "Contenido caja texto:", &Caja::new("Hola Mundo"));

    let calc = Calculadora;
    console.log(calc.calcular(5_i64, 10));
    console.log(calc.calcular("Hola, ", "mundo"));

    ProductoDecorado::registrar(console);
    let prod = ProductoDecorado {
        nombre: "Lapicero".to_string(),
        precio: 1.5,
    };
    tracing::debug!(nombre = %prod.nombre, precio = prod.precio, "producto decorado");
    Ok(())
}
