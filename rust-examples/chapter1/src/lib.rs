//! Capítulo 1: Fundamentos (Fundamentals)
//!
//! Este capítulo presenta los elementos básicos del lenguaje:
//! - Tipos primitivos y especiales (Primitive and special types)
//! - Valores dinámicos frente a tipos estáticos (Dynamic values vs static types)
//! - Entrada, conversión y salida (Input, conversion and output)
//! - Formato de cadenas y tablas (String and table formatting)

use apuntes_common::Lesson;

pub mod section_1_1; // Apuntes básicos (Basic Notes)
pub mod section_1_2; // Tipos de datos básicos (Basic Data Types)
pub mod section_1_3; // Python básico (Python Basics)
pub mod section_1_4; // Formato de cadenas (String Formatting)

// Reexporta los ejemplos más usados (Re-export commonly used items).
pub use section_1_2::{analyze_datum, triangle_area};

/// Lecciones de este capítulo, en orden (Lessons of this chapter, in order).
#[must_use]
pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("1.1", "Apuntes básicos", section_1_1::demo),
        Lesson::new("1.2", "Tipos de datos básicos", section_1_2::demo),
        Lesson::new("1.3", "Python básico", section_1_3::demo),
        Lesson::new("1.4", "Formato de cadenas", section_1_4::demo),
    ]
}
