use thiserror::Error;

/// Errors raised (and usually caught) by the lesson examples.
///
/// The messages are the ones the examples print, so a lesson can show a
/// caught error with `console.error(err)`.
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Monto nulo")]
    NullAmount,

    #[error("Monto inválido")]
    InvalidAmount,

    #[error("Tipos no soportados")]
    UnsupportedTypes,

    #[error("No es un Usuario válido")]
    InvalidUser,

    #[error("Usuario no encontrado")]
    UserNotFound,

    #[error("{value} no está en la lista")]
    NotInList { value: String },

    #[error("División entre cero")]
    DivisionByZero,

    #[error("Desbordamiento aritmético")]
    Overflow,

    #[error("No se puede convertir '{input}' a {target}")]
    Parse { input: String, target: &'static str },

    #[error("Lección desconocida: {0}")]
    UnknownLesson(String),

    /// An error "thrown" by an example with a free-form message.
    #[error("{0}")]
    Thrown(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LessonError {
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::Thrown(message.into())
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_printed_text() {
        assert_eq!(LessonError::InvalidAmount.to_string(), "Monto inválido");
        assert_eq!(
            LessonError::NotInList {
                value: "kiwi".into()
            }
            .to_string(),
            "kiwi no está en la lista"
        );
        assert_eq!(
            LessonError::Parse {
                input: "abc".into(),
                target: "int"
            }
            .to_string(),
            "No se puede convertir 'abc' a int"
        );
        assert_eq!(LessonError::Overflow.to_string(), "Desbordamiento aritmético");
        assert_eq!(LessonError::thrown("Fallo").to_string(), "Fallo");
    }
}
