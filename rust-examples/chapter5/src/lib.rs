//! Capítulo 5: Tipos, interfaces y clases (Types, Interfaces and Classes)
//!
//! TypeScript modela objetos con interfaces y clases; Rust separa los datos
//! (`struct`, `enum`) del comportamiento (`trait`)
//! (TypeScript models objects with interfaces and classes; Rust separates
//! data from behaviour).

use apuntes_common::Lesson;

pub mod section_5_1; // Interfaces y objetos (Interfaces and Objects)
pub mod section_5_2; // Clases (Classes)
pub mod section_5_3; // Tipos personalizados (Custom Types)

#[must_use]
pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("5.1", "Interfaces y objetos", section_5_1::demo),
        Lesson::new("5.2", "Clases", section_5_2::demo),
        Lesson::new("5.3", "Tipos personalizados", section_5_3::demo),
    ]
}
