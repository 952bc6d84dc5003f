//! Capítulo 4: Colecciones (Collections)
//!
//! - Arrays tipados y heterogéneos (Typed and heterogeneous arrays)
//! - Diccionarios, `Map` y `Record` con `IndexMap` y `serde_json::Value`
//! - Listas y diccionarios de Python (Python lists and dictionaries)

use apuntes_common::Lesson;

pub mod section_4_1; // Arrays y diccionarios (Arrays and Dictionaries)
pub mod section_4_2; // Listas y diccionarios en Python (Python Lists and Dictionaries)

#[must_use]
pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("4.1", "Arrays y diccionarios", section_4_1::demo),
        Lesson::new("4.2", "Listas y diccionarios en Python", section_4_2::demo),
    ]
}
