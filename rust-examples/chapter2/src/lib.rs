//! Capítulo 2: Control de flujo (Control Flow)
//!
//! - Condicionales, `match` exhaustivo y `Option` (Conditionals, exhaustive `match`, `Option`)
//! - Manejo de errores con `Result` (Error handling with `Result`)
//! - Bucles, iteradores y generadores (Loops, iterators and generators)

use apuntes_common::Lesson;

pub mod section_2_1; // Estructuras de control (Control Structures)
pub mod section_2_2; // Bucles e iteraciones (Loops and Iteration)
pub mod section_2_3; // Bucles en Python (Python Loops)

#[must_use]
pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("2.1", "Estructuras de control", section_2_1::demo),
        Lesson::new("2.2", "Bucles e iteraciones", section_2_2::demo),
        Lesson::new("2.3", "Bucles en Python", section_2_3::demo),
    ]
}
