//! Sección 2.2: Bucles e iteraciones (Loops and Iteration)
//!
//! | TypeScript | Rust |
//! |------------|------|
//! | `for (let i = 0; i < n; i++)` | `for i in 0..n` |
//! | `do { } while (c)` | `loop { ..; if !c { break } }` |
//! | `for...of` | `for x in &xs` |
//! | `for...in` | iterar los campos serializados (iterate serialized fields) |
//! | `map` / `filter` / `reduce` | `map` / `filter` / `fold` |
//! | `break outer` | `break 'outer` |
//! | `function*` | `impl Iterator` |
//! | `[Symbol.iterator]` | `impl IntoIterator for &T` |

use apuntes_common::{Console, Result, Settings, inspect};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

pub const NUMBERS: [i64; 5] = [10, 20, 30, 40, 50];

// ============================================================================
// map, filter, reduce
// ============================================================================

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_2::{squares, NUMBERS};
/// assert_eq!(squares(&NUMBERS), [100, 400, 900, 1600, 2500]);
/// ```
#[must_use]
pub fn squares(numeros: &[i64]) -> Vec<i64> {
    numeros.iter().map(|n| n * n).collect()
}

#[must_use]
pub fn greater_than(numeros: &[i64], limite: i64) -> Vec<i64> {
    numeros.iter().copied().filter(|&n| n > limite).collect()
}

#[must_use]
pub fn total(numeros: &[i64]) -> i64 {
    numeros.iter().fold(0, |acum, val| acum + val)
}

// ============================================================================
// break, continue y etiquetas (break, continue and labels)
// ============================================================================

/// Salta el 3 y se detiene en el 7 (Skips 3 and stops at 7).
#[must_use]
pub fn break_and_continue() -> Vec<String> {
    let mut lines = Vec::new();
    for i in 0..10 {
        if i == 3 {
            lines.push("Saltando el valor 3".to_string());
            continue;
        }
        if i == 7 {
            lines.push("Rompiendo el bucle en 7".to_string());
            break;
        }
        lines.push(format!("Valor actual: {i}"));
    }
    lines
}

/// Sale de los dos bucles en `(1,1)` (Leaves both loops at `(1,1)`).
#[must_use]
pub fn labelled_pairs() -> Vec<String> {
    let mut lines = Vec::new();
    'outer: for i in 0..3 {
        for j in 0..3 {
            if i == 1 && j == 1 {
                lines.push("Saliendo de ambos bucles en (1,1)".to_string());
                break 'outer;
            }
            lines.push(format!("Par (i,j): ({i},{j})"));
        }
    }
    lines
}

// ============================================================================
// Generadores e iteradores (Generators and iterators)
// ============================================================================

/// Generador que produce 1, 2, 3 (Generator yielding 1, 2, 3).
#[derive(Debug, Clone, Default)]
pub struct SimpleGenerator {
    step: u8,
}

impl Iterator for SimpleGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step < 3 {
            self.step += 1;
            Some(i64::from(self.step))
        } else {
            None
        }
    }
}

/// Muestra el resultado de `next()` como lo haría un generador
/// (Shows the result of `next()` the way a generator would).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_2::iterator_result;
/// assert_eq!(iterator_result(Some(1)), "{ value: 1, done: false }");
/// assert_eq!(iterator_result::<i64>(None), "{ value: undefined, done: true }");
/// ```
#[must_use]
pub fn iterator_result<T: std::fmt::Display>(next: Option<T>) -> String {
    match next {
        Some(value) => format!("{{ value: {value}, done: false }}"),
        None => "{ value: undefined, done: true }".to_string(),
    }
}

/// Colección con su propio iterador (Collection with its own iterator).
#[derive(Debug, Clone)]
pub struct CustomIterable {
    datos: Vec<i64>,
}

impl CustomIterable {
    #[must_use]
    pub fn new(datos: Vec<i64>) -> Self {
        Self { datos }
    }
}

/// Iterador por índice sobre [`CustomIterable`] (Index-based iterator).
#[derive(Debug)]
pub struct CustomIter<'a> {
    datos: &'a [i64],
    index: usize,
}

impl Iterator for CustomIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.datos.get(self.index).copied()?;
        self.index += 1;
        Some(value)
    }
}

impl<'a> IntoIterator for &'a CustomIterable {
    type Item = i64;
    type IntoIter = CustomIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        CustomIter {
            datos: &self.datos,
            index: 0,
        }
    }
}

// ============================================================================
// Casos prácticos (Practical cases)
// ============================================================================

/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_2::first_even;
/// assert_eq!(first_even(&[1, 3, 7, 8, 10]), Some(8));
/// assert_eq!(first_even(&[1, 3]), None);
/// ```
#[must_use]
pub fn first_even(numeros: &[i64]) -> Option<i64> {
    for &n in numeros {
        if n % 2 == 0 {
            return Some(n);
        }
    }
    None
}

/// Recursión en lugar de bucle (Recursion instead of a loop).
#[must_use]
pub fn factorial(n: u64) -> u64 {
    if n <= 1 { 1 } else { n * factorial(n - 1) }
}

#[derive(Debug, Clone, Serialize)]
struct Profile {
    nombre: &'static str,
    edad: u32,
    profesion: &'static str,
}

#[allow(clippy::needless_range_loop)]
pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    let numeros = NUMBERS;
    console.log(format_args!("🔢 Números originales: {}", inspect::js(&json!(numeros))));

    // 1. for clásico
    for i in 0..numeros.len() {
        console.log(format_args!("Índice {i}: Valor = {}", numeros[i]));
    }
    let len = numeros.len();
    for (i, valor) in numeros.iter().enumerate().take(len) {
        console.log(format_args!("Valor cacheado {i}: {valor}"));
    }

    // 2. while y do-while
    let mut contador = 0;
    while contador < 3 {
        console.log(format_args!("while -> Contador = {contador}"));
        contador += 1;
    }
    let mut intentos = 0;
    loop {
        console.log(format_args!("do-while -> Intento número {}", intentos + 1));
        intentos += 1;
        if intentos >= 3 {
            break;
        }
    }

    // 3. for...of
    let frutas = ["manzana", "pera", "plátano"];
    for fruta in frutas {
        console.log(format_args!("for...of -> Fruta: {fruta}"));
    }

    // 4. for...in
    let persona = Profile {
        nombre: "Ana",
        edad: 30,
        profesion: "Ingeniera",
    };
    if let Value::Object(campos) = serde_json::to_value(&persona)? {
        for (clave, valor) in &campos {
            console.log(format_args!("for...in -> {clave}: {}", inspect::js(valor)));
        }
    }

    // 5. map, filter, reduce
    console.log(format_args!("map -> Cuadrados: {}", inspect::js(&json!(squares(&numeros)))));
    console.log(format_args!(
        "filter -> Mayores de 25: {}",
        inspect::js(&json!(greater_than(&numeros, 25)))
    ));
    console.log(format_args!("reduce -> Suma total: {}", total(&numeros)));

    // 6-7. break, continue, etiquetas
    console.log("break & continue demo:");
    for line in break_and_continue() {
        console.log(line);
    }
    console.log("Etiquetas en bucles:");
    for line in labelled_pairs() {
        console.log(line);
    }

    // 8. Generadores
    let mut generador = SimpleGenerator::default();
    console.log("Generador simple:");
    for _ in 0..4 {
        console.log(iterator_result(generador.next()));
    }

    // 9. Iterable personalizado
    let iterable = CustomIterable::new(vec![10, 20, 30]);
    for valor in &iterable {
        console.log(format_args!("Iterable personalizado valor: {valor}"));
    }

    // 10. Primer par
    let par = first_even(&[1, 3, 7, 8, 10]).map_or_else(|| "null".to_string(), |n| n.to_string());
    console.log(format_args!("Primer número par: {par}"));

    // 11. Matrices
    let matriz = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    console.log("Iterando matriz:");
    for (i, fila) in matriz.iter().enumerate() {
        for (j, valor) in fila.iter().enumerate() {
            console.log(format_args!("matriz[{i}][{j}] = {valor}"));
        }
    }

    // 12. Datos nulos
    let datos = [Some(1), Some(2), None, Some(4)];
    for valor in datos {
        let Some(valor) = valor else {
            console.warn("Dato nulo detectado, saltando");
            continue;
        };
        console.log(format_args!("Dato válido: {valor}"));
    }

    // 13. Diccionario indexado
    let precios = IndexMap::from([("manzana", 1.2), ("pera", 2.3), ("naranja", 3.4)]);
    for (fruta, precio) in &precios {
        console.log(format_args!("Precio de {fruta}: {precio}"));
    }

    // 14. Recursión
    console.log(format_args!("Factorial de 5: {}", factorial(5)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apuntes_common::Level;

    #[test]
    fn test_array_methods() {
        assert_eq!(greater_than(&NUMBERS, 25), [30, 40, 50]);
        assert_eq!(total(&NUMBERS), 150);
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn test_break_and_continue() {
        let lines = break_and_continue();
        assert_eq!(lines[3], "Saltando el valor 3");
        assert_eq!(lines.last().map(String::as_str), Some("Rompiendo el bucle en 7"));
        assert!(!lines.contains(&"Valor actual: 3".to_string()));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_labelled_pairs_stop_both_loops() {
        assert_eq!(
            labelled_pairs(),
            [
                "Par (i,j): (0,0)",
                "Par (i,j): (0,1)",
                "Par (i,j): (0,2)",
                "Par (i,j): (1,0)",
                "Saliendo de ambos bucles en (1,1)",
            ]
        );
    }

    #[test]
    fn test_generator_is_exhausted_after_three() {
        let mut generador = SimpleGenerator::default();
        assert_eq!(generador.by_ref().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(generador.next(), None);
    }

    #[test]
    fn test_custom_iterable_can_be_reused() {
        let iterable = CustomIterable::new(vec![10, 20, 30]);
        let first: i64 = (&iterable).into_iter().sum();
        let second: Vec<i64> = (&iterable).into_iter().collect();
        assert_eq!(first, 60);
        assert_eq!(second, [10, 20, 30]);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();

        assert_eq!(console.lines()[0], "🔢 Números originales: [ 10, 20, 30, 40, 50 ]");
        assert!(console.contains("for...in -> profesion: Ingeniera"));
        assert!(console.contains("map -> Cuadrados: [ 100, 400, 900, 1600, 2500 ]"));
        assert!(console.contains("reduce -> Suma total: 150"));
        assert!(console.contains("{ value: undefined, done: true }"));
        assert!(console.contains("Primer número par: 8"));
        assert!(console.contains("matriz[2][2] = 9"));
        let precios: Vec<&str> = console
            .lines()
            .into_iter()
            .filter(|l| l.starts_with("Precio de "))
            .collect();
        assert_eq!(
            precios,
            ["Precio de manzana: 1.2", "Precio de pera: 2.3", "Precio de naranja: 3.4"]
        );
        assert!(console.contains("Factorial de 5: 120"));

        let warnings: Vec<_> = console
            .entries()
            .iter()
            .filter(|e| e.level == Level::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
    }
}
