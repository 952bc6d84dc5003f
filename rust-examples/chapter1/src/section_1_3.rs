//! Sección 1.3: Python básico, en Rust (Python Basics, in Rust)
//!
//! Las funciones integradas de Python tienen equivalentes directos
//! (Python's built-ins have direct equivalents):
//!
//! | Python | Rust |
//! |--------|------|
//! | `print()` | `println!` / [`Console::log`] |
//! | `len()` | `.len()` / `.chars().count()` |
//! | `type()` | `std::any::type_name` |
//! | `input()` | `BufRead::read_line` |
//! | `int()` / `float()` | `str::parse` |
//! | `sum()` / `max()` / `min()` | `Iterator::sum` / `max` / `min` |
//! | `range()` | `0..n` |

use std::io::{self, BufRead, Cursor};

use apuntes_common::{Console, LessonError, Result, Settings, inspect};
use serde_json::json;

/// Respuestas usadas cuando la lección no es interactiva
/// (Answers used when the lesson is not interactive).
pub const SAMPLE_ANSWERS: &str = "Ana\nAna\n20\n";

/// Nombre del tipo de un valor (Type name of a value).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_3::type_name_of;
/// assert_eq!(type_name_of(&42_i64), "i64");
/// assert_eq!(type_name_of(&"Python"), "&str");
/// ```
#[must_use]
pub fn type_name_of<T: ?Sized>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// De dónde saca `input()` sus respuestas
/// (Where `input()` gets its answers from).
#[derive(Debug)]
pub struct Answers<R> {
    reader: R,
    typed: bool,
}

impl<R: BufRead> Answers<R> {
    /// Respuestas tecleadas por el usuario (Answers typed by the user).
    pub fn typed(reader: R) -> Self {
        Self {
            reader,
            typed: true,
        }
    }

    /// Respuestas fijas, sin usuario (Canned answers, no user involved).
    pub fn canned(reader: R) -> Self {
        Self {
            reader,
            typed: false,
        }
    }
}

/// Muestra la pregunta, lee una línea y la devuelve sin el salto final
/// (Shows the prompt, reads a line and returns it without the newline).
///
/// Con respuestas tecleadas la pregunta sale antes de leer y la respuesta no
/// se repite; con respuestas fijas se imprime `pregunta + respuesta`
/// (With typed answers the prompt is shown before reading and the answer is
/// not repeated; with canned answers `prompt + answer` is printed).
pub fn input<R: BufRead>(
    answers: &mut Answers<R>,
    console: &mut Console,
    prompt: &str,
) -> Result<String> {
    if answers.typed {
        console.prompt(prompt);
    }
    let mut line = String::new();
    answers.reader.read_line(&mut line)?;
    let answer = line.trim_end_matches(['\r', '\n']).to_string();
    if answers.typed {
        console.record(format_args!("{prompt}{answer}"));
    } else {
        console.log(format_args!("{prompt}{answer}"));
    }
    Ok(answer)
}

// ============================================================================
// Conversión de tipos (Type conversion)
// ============================================================================

/// `int()`.
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_3::to_int;
/// assert_eq!(to_int("123").unwrap(), 123);
/// assert!(to_int("12.5").is_err());
/// ```
pub fn to_int(texto: &str) -> Result<i64> {
    texto.trim().parse().map_err(|_| LessonError::Parse {
        input: texto.to_string(),
        target: "int",
    })
}

/// `float()`.
pub fn to_float(texto: &str) -> Result<f64> {
    texto.trim().parse().map_err(|_| LessonError::Parse {
        input: texto.to_string(),
        target: "float",
    })
}

// ============================================================================
// Condicionales (Conditionals)
// ============================================================================

/// Calificación a partir de una nota (Grade from a score).
#[must_use]
pub fn grade(nota: u32) -> &'static str {
    match nota {
        90.. => "Sobresaliente",
        80..=89 => "Notable",
        70..=79 => "Bien",
        60..=69 => "Suficiente",
        _ => "Suspenso",
    }
}

/// Valida nombre y edad leídos del usuario
/// (Validates name and age read from the user).
#[must_use]
pub fn validate_input(nombre: &str, edad: i64) -> String {
    if nombre.chars().count() < 3 {
        "El nombre es demasiado corto".to_string()
    } else if edad < 0 {
        "La edad no puede ser negativa".to_string()
    } else {
        format!("Hola {nombre}, tienes {edad} años")
    }
}

// ============================================================================
// Funciones (Functions)
// ============================================================================

#[must_use]
pub fn greet_person(nombre: &str) -> String {
    format!("¡Hola {nombre}!")
}

#[must_use]
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

/// `idioma="español"` por defecto: pasa `Language::default()`
/// (`idioma="español"` by default: pass `Language::default()`).
#[must_use]
pub fn greet_in(nombre: &str, idioma: Language) -> String {
    match idioma {
        Language::Spanish => format!("¡Hola {nombre}!"),
        Language::English => format!("Hello {nombre}!"),
    }
}

/// Devuelve dos valores en una tupla (Returns two values in a tuple).
#[must_use]
pub fn person_info(nombre: &str, edad: u32) -> (String, bool) {
    (format!("Nombre: {nombre}"), edad >= 18)
}

pub fn demo(console: &mut Console, settings: &Settings) -> Result<()> {
    if settings.interactive {
        let stdin = io::stdin();
        run(console, &mut Answers::typed(stdin.lock()))
    } else {
        run(console, &mut Answers::canned(Cursor::new(SAMPLE_ANSWERS)))
    }
}

fn run<R: BufRead>(console: &mut Console, reader: &mut Answers<R>) -> Result<()> {
    // 1. print
    console.log("¡Hola Mundo!");
    let nombre = "Ana";
    console.log(format_args!("Hola {nombre}"));

    // 2. len
    let texto = "Python";
    console.log(texto.len());

    // 3. type
    let numero: i64 = 42;
    console.log(type_name_of(&numero));

    // 4. input
    let nombre = input(reader, console, "Introduce tu nombre: ")?;
    console.log(format_args!("Hola {nombre}"));

    // 5. Conversión de tipos
    let numero = to_int("123")?;
    let decimal = to_float("12.34")?;
    let texto = 123.to_string();
    tracing::debug!(numero, decimal, %texto, "conversiones");

    // 6-7. sum, max, min
    let numeros = [1, 2, 3, 4, 5];
    console.log(numeros.iter().sum::<i64>());
    if let (Some(max), Some(min)) = (numeros.iter().max(), numeros.iter().min()) {
        console.log(max);
        console.log(min);
    }

    // 8. range
    for i in 0..5 {
        console.log(i);
    }

    // Condicionales
    let edad = 18;
    console.log(if edad >= 18 {
        "Eres mayor de edad"
    } else {
        "Eres menor de edad"
    });
    console.log(grade(85));

    let nombre = input(reader, console, "Introduce tu nombre: ")?;
    let edad = to_int(&input(reader, console, "Introduce tu edad: ")?)?;
    console.log(validate_input(&nombre, edad));

    // Funciones
    console.log("¡Hola!");
    console.log(greet_person("María"));
    console.log(add(5, 3));
    console.log(greet_in("Juan", Language::default()));
    console.log(greet_in("John", Language::English));

    let (info, es_mayor) = person_info("Ana", 20);
    console.log(info);
    console.log(inspect::python(&json!(es_mayor)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(95 => "Sobresaliente")]
    #[test_case(90 => "Sobresaliente")]
    #[test_case(85 => "Notable")]
    #[test_case(70 => "Bien")]
    #[test_case(60 => "Suficiente")]
    #[test_case(59 => "Suspenso")]
    fn test_grade(nota: u32) -> &'static str {
        grade(nota)
    }

    #[test_case("Al", 20 => "El nombre es demasiado corto"; "short name")]
    #[test_case("Ana", -1 => "La edad no puede ser negativa"; "negative age")]
    #[test_case("Ana", 20 => "Hola Ana, tienes 20 años"; "valid")]
    fn test_validate_input(nombre: &str, edad: i64) -> String {
        validate_input(nombre, edad)
    }

    #[test]
    fn test_conversions() {
        assert_eq!(to_float("12.34").unwrap(), 12.34);
        let err = to_int("abc").unwrap_err();
        assert_eq!(err.to_string(), "No se puede convertir 'abc' a int");
    }

    #[test]
    fn test_input_strips_newline() {
        let mut console = Console::capture();
        let mut answers = Answers::canned(Cursor::new("Josep\r\n"));
        let answer = input(&mut answers, &mut console, "Nombre: ").unwrap();
        assert_eq!(answer, "Josep");
        assert_eq!(console.lines(), ["Nombre: Josep"]);
    }

    #[test]
    fn test_typed_answers_are_recorded_once() {
        let mut console = Console::capture();
        let mut answers = Answers::typed(Cursor::new("Josep\n30\n"));
        assert_eq!(input(&mut answers, &mut console, "Nombre: ").unwrap(), "Josep");
        assert_eq!(input(&mut answers, &mut console, "Edad: ").unwrap(), "30");
        assert_eq!(console.lines(), ["Nombre: Josep", "Edad: 30"]);
    }

    #[test]
    fn test_demo_with_sample_answers() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();

        let lines = console.lines();
        assert_eq!(lines[0], "¡Hola Mundo!");
        assert_eq!(lines[2], "6");
        assert_eq!(lines[3], "i64");
        assert_eq!(lines[5], "Hola Ana");
        assert_eq!(lines[6], "15");
        assert!(console.contains("Notable"));
        assert!(console.contains("Hola Ana, tienes 20 años"));
        assert!(console.contains("Hello John!"));
        assert_eq!(lines[lines.len() - 2], "Nombre: Ana");
        assert_eq!(lines.last(), Some(&"True"));
    }

    #[test]
    fn test_non_numeric_age_fails() {
        let mut console = Console::capture();
        let mut answers = Answers::canned(Cursor::new("Ana\nAna\nveinte\n"));
        let err = run(&mut console, &mut answers).unwrap_err();
        assert!(matches!(err, LessonError::Parse { target: "int", .. }));
    }
}
