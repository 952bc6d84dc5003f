//! Sección 3.1: Funciones (Functions)
//!
//! | TypeScript | Rust |
//! |------------|------|
//! | parámetro opcional / por defecto | `Option<T>` |
//! | `...rest` | slice `&[T]` |
//! | arrow function | closure |
//! | `this` | receptor explícito `&self` (explicit receiver) |
//! | sobrecargas (overloads) | función genérica sobre un trait |
//! | `<T extends X>` | `T: X` |
//! | `void` / `never` | `()` / `Result<Infallible>` |
//!
//! Los ejemplos asíncronos están en [`crate::section_3_2`]
//! (The async examples live in [`crate::section_3_2`]).

use std::convert::Infallible;

use apuntes_common::{Console, LessonError, Result, Settings};

// ============================================================================
// Parámetros opcionales, por defecto y rest (Optional, default and rest parameters)
// ============================================================================

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_1::add;
/// assert_eq!(add(5, 7), 12);
/// ```
#[must_use]
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[must_use]
pub fn greet_user(nombre: Option<&str>) -> String {
    nombre.map_or_else(|| "Hola, desconocido".to_string(), |n| format!("Hola, {n}"))
}

/// `b` vale 2 por defecto (`b` defaults to 2).
#[must_use]
pub fn multiply(a: i64, b: Option<i64>) -> i64 {
    a * b.unwrap_or(2)
}

/// Los parámetros rest son un slice (Rest parameters become a slice).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_1::concatenate;
/// assert_eq!(
///     concatenate("Hola", &["mundo", "TypeScript", "funciones"]),
///     "Hola mundo TypeScript funciones"
/// );
/// ```
#[must_use]
pub fn concatenate(prefijo: &str, palabras: &[&str]) -> String {
    format!("{prefijo} {}", palabras.join(" "))
}

// ============================================================================
// Receptores en lugar de `this` (Receivers instead of `this`)
// ============================================================================

/// Objeto con nombre y dos formas de mostrarlo
/// (An object with a name and two ways of printing it).
///
/// La closure de [`NamedObject::name_printer`] captura el nombre por valor
/// (The closure captures the name by value).
#[derive(Debug, Clone)]
pub struct NamedObject {
    pub nombre: String,
}

impl NamedObject {
    #[must_use]
    pub fn show_name(&self) -> String {
        format!("Función tradicional self.nombre: {}", self.nombre)
    }

    pub fn name_printer(&self) -> impl Fn() -> String {
        let nombre = self.nombre.clone();
        move || format!("Closure con nombre capturado: {nombre}")
    }
}

// ============================================================================
// Sobrecargas con un trait (Overloads through a trait)
// ============================================================================

/// Números se suman, cadenas se concatenan (Numbers add, strings concatenate).
pub trait Combine {
    fn combine(self, other: Self) -> Self;
}

impl Combine for i64 {
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl Combine for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// Sobrecarga comprobada en compilación (Statically checked overload).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_1::do_operation;
/// assert_eq!(do_operation(4_i64, 5), 9);
/// assert_eq!(do_operation("Hola ".to_string(), "mundo".to_string()), "Hola mundo");
/// ```
pub fn do_operation<T: Combine>(a: T, b: T) -> T {
    a.combine(b)
}

/// Operando de tipo dinámico (Dynamically typed operand).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(i64),
    Text(String),
}

/// Versión en tiempo de ejecución de [`do_operation`]; rechaza tipos mezclados
/// (Run-time version; mixed operands are rejected).
pub fn do_dynamic_operation(a: Operand, b: Operand) -> Result<Operand> {
    match (a, b) {
        (Operand::Number(x), Operand::Number(y)) => Ok(Operand::Number(x.combine(y))),
        (Operand::Text(x), Operand::Text(y)) => Ok(Operand::Text(x.combine(y))),
        _ => Err(LessonError::UnsupportedTypes),
    }
}

// ============================================================================
// Genéricos (Generics)
// ============================================================================

#[must_use]
pub fn first_element<T>(arr: &[T]) -> Option<&T> {
    arr.first()
}

/// Cualquier cosa con longitud (Anything with a length).
pub trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[must_use]
pub fn describe_length<T: HasLength + ?Sized>(obj: &T) -> String {
    format!("Longitud: {}", obj.length())
}

// ============================================================================
// Closures y funciones de orden superior (Closures and higher-order functions)
// ============================================================================

/// Contador que empieza después de `inicial` (Counter starting after `inicial`).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter3::section_3_1::make_counter;
/// let mut contador = make_counter(5);
/// assert_eq!(contador(), 6);
/// assert_eq!(contador(), 7);
/// ```
pub fn make_counter(inicial: i64) -> impl FnMut() -> i64 {
    let mut contador = inicial;
    move || {
        contador += 1;
        contador
    }
}

pub fn operate<F>(a: i64, b: i64, operacion: F) -> i64
where
    F: Fn(i64, i64) -> i64,
{
    operacion(a, b)
}

/// Función guardada en una constante tipada (Function stored in a typed binding).
pub const DIVIDE: fn(f64, f64) -> f64 = |a, b| a / b;

pub fn double(n: i64) -> i64 {
    n * 2
}

pub const TRIPLE: fn(i64) -> i64 = |n| n * 3;

#[must_use]
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        u64::from(n)
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

// ============================================================================
// void y never
// ============================================================================

pub fn show_message(console: &mut Console, mensaje: &str) {
    console.log(mensaje);
}

pub fn throw_error(mensaje: &str) -> Result<Infallible> {
    Err(LessonError::thrown(mensaje))
}

// ============================================================================
// Métodos (Methods)
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    pub valor: i64,
}

impl Calculator {
    pub fn add(&mut self, a: i64) {
        self.valor += a;
    }

    pub fn reset(&mut self) {
        self.valor = 0;
    }
}

#[derive(Debug, Clone)]
pub struct Greeter {
    pub nombre: String,
}

impl Greeter {
    #[must_use]
    pub fn greet(&self) -> String {
        format!("Hola, soy {}", self.nombre)
    }
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    console.log(format_args!("Sumar 5 + 7 = {}", add(5, 7)));

    console.log(greet_user(None));
    console.log(greet_user(Some("Josep")));
    console.log(format_args!("Multiplicar 5 * 3 = {}", multiply(5, Some(3))));
    console.log(format_args!("Multiplicar 5 * 2 (por defecto) = {}", multiply(5, None)));

    console.log(concatenate("Hola", &["mundo", "TypeScript", "funciones"]));

    let restar = |a: i64, b: i64| a - b;
    console.log(format_args!("Restar 10 - 3 = {}", restar(10, 3)));

    let obj = NamedObject {
        nombre: "Objeto1".to_string(),
    };
    console.log(obj.show_name());
    let printer = obj.name_printer();
    console.log(printer());

    console.log(format_args!("Suma números: {}", do_operation(4_i64, 5)));
    console.log(format_args!(
        "Concatena strings: {}",
        do_operation("Hola ".to_string(), "mundo".to_string())
    ));
    if let Err(e) = do_dynamic_operation(Operand::Number(1), Operand::Text("a".into())) {
        tracing::debug!(error = %e, "mixed operands rejected");
    }

    if let Some(n) = first_element(&[1, 2, 3]) {
        console.log(format_args!("Primer número: {n}"));
    }
    if let Some(s) = first_element(&["a", "b", "c"]) {
        console.log(format_args!("Primer string: {s}"));
    }
    console.log(describe_length("Hola TypeScript"));
    console.log(describe_length(&[1, 2, 3, 4][..]));

    let mut contador1 = make_counter(5);
    console.log(contador1());
    console.log(contador1());

    console.log(format_args!("Usando operar con sumar: {}", operate(3, 4, |x, y| x + y)));
    console.log(format_args!(
        "Usando operar con multiplicar: {}",
        operate(3, 4, |x, y| x * y)
    ));

    tracing::debug!(doble = double(4), triple = TRIPLE(4), "inferred and explicit returns");
    console.log(format_args!("Dividir 10 / 2 = {}", DIVIDE(10.0, 2.0)));
    console.log(format_args!("Fibonacci(7) = {}", fibonacci(7)));

    let mut calculadora = Calculator::default();
    calculadora.add(10);
    console.log(format_args!("Valor calculadora: {}", calculadora.valor));
    calculadora.reset();
    console.log(format_args!("Valor tras reset: {}", calculadora.valor));

    // bind / call / apply
    let persona = Greeter {
        nombre: "Josep".to_string(),
    };
    let bound = || persona.greet();
    console.log(bound());
    for nombre in ["Ana", "Carlos"] {
        let otro = Greeter {
            nombre: nombre.to_string(),
        };
        console.log(Greeter::greet(&otro));
    }

    // IIFE
    (|| console.log("IIFE ejecutada inmediatamente"))();
    Ok(())
}
