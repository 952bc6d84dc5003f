//! Capítulo 3: Funciones (Functions)
//!
//! - Parámetros opcionales, por defecto y rest (Optional, default and rest parameters)
//! - Closures, genéricos y sobrecargas con traits (Closures, generics, trait-based overloads)
//! - `async`/`.await` sobre tokio y callbacks diferidos (tokio async and deferred callbacks)
//! - Las mismas ideas en Python (The same ideas in Python)

use apuntes_common::Lesson;

pub mod section_3_1; // Funciones (Functions)
pub mod section_3_2; // Funciones asíncronas y callbacks (Async Functions and Callbacks)
pub mod section_3_3; // Funciones en Python (Python Functions)

#[must_use]
pub fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("3.1", "Funciones", section_3_1::demo),
        Lesson::new("3.2", "Funciones asíncronas y callbacks", section_3_2::demo),
        Lesson::new("3.3", "Funciones en Python", section_3_3::demo),
    ]
}
