//! Sección 4.2: Listas y diccionarios en Python (Python Lists and Dictionaries)
//!
//! Una lista de Python es un `Vec<T>`; un `dict` es un mapa que conserva el
//! orden de inserción, aquí `serde_json::Map` con `preserve_order`
//! (A Python list is a `Vec<T>`; a `dict` is an insertion-ordered map, here
//! `serde_json::Map` with `preserve_order`).
//!
//! | Python | Rust |
//! |--------|------|
//! | `lista[-1]` | [`py_index`] |
//! | `lista.append(x)` | `Vec::push` |
//! | `lista.remove(x)` | [`remove_value`] |
//! | `d.get(k)` | `Map::get` |
//! | `del d[k]` | `Map::shift_remove` |
//! | `d.items()` | `Map::iter` |

use apuntes_common::{Console, LessonError, Result, Settings, inspect};
use serde_json::{Map, Value, json};

/// Índice al estilo Python: los negativos cuentan desde el final
/// (Python-style index: negatives count from the end).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter4::section_4_2::py_index;
///
/// let frutas = ["manzana", "banana", "pera"];
/// assert_eq!(py_index(&frutas, 0), Some(&"manzana"));
/// assert_eq!(py_index(&frutas, -1), Some(&"pera"));
/// assert_eq!(py_index(&frutas, -4), None);
/// ```
#[must_use]
pub fn py_index<T>(lista: &[T], indice: isize) -> Option<&T> {
    let real = if indice < 0 {
        lista.len().checked_sub(indice.unsigned_abs())?
    } else {
        indice.unsigned_abs()
    };
    lista.get(real)
}

/// `lista.remove(valor)`: quita la primera aparición
/// (removes the first occurrence).
pub fn remove_value<T>(lista: &mut Vec<T>, valor: &T) -> Result<T>
where
    T: PartialEq + std::fmt::Display,
{
    let pos = lista
        .iter()
        .position(|x| x == valor)
        .ok_or_else(|| LessonError::NotInList {
            value: valor.to_string(),
        })?;
    Ok(lista.remove(pos))
}

#[must_use]
pub fn sample_student() -> Map<String, Value> {
    let mut estudiante = Map::new();
    estudiante.insert("nombre".into(), json!("Ana"));
    estudiante.insert("edad".into(), json!(20));
    estudiante.insert("cursos".into(), json!(["Python", "JavaScript", "HTML"]));
    estudiante
}

/// `list(d.items())`.
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter4::section_4_2::items;
/// use serde_json::{json, Map};
///
/// let mut d = Map::new();
/// d.insert("a".into(), json!(1));
/// assert_eq!(items(&d), "[('a', 1)]");
/// ```
#[must_use]
pub fn items(dict: &Map<String, Value>) -> String {
    let pares: Vec<String> = dict
        .iter()
        .map(|(k, v)| inspect::python_tuple(&[json!(k), v.clone()]))
        .collect();
    format!("[{}]", pares.join(", "))
}

fn show(console: &mut Console, etiqueta: &str, valor: &Value) {
    console.blank();
    console.log(format_args!("{etiqueta} {}", inspect::python(valor)));
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    console.log("=== LISTAS ===");

    let mut frutas: Vec<String> = ["manzana", "banana", "naranja", "pera"]
        .map(String::from)
        .to_vec();
    show(console, "Lista original:", &json!(frutas));

    console.blank();
    console.log("Acceder a elementos:");
    if let (Some(primero), Some(ultimo)) = (py_index(&frutas, 0), py_index(&frutas, -1)) {
        console.log(format_args!("Primer elemento: {primero}"));
        console.log(format_args!("Último elemento: {ultimo}"));
    }

    frutas[1] = "uva".to_string();
    show(console, "Lista después de modificar:", &json!(frutas));

    frutas.push("mango".to_string());
    show(console, "Lista después de append():", &json!(frutas));

    remove_value(&mut frutas, &"naranja".to_string())?;
    show(console, "Lista después de remove():", &json!(frutas));

    console.blank();
    console.log("=== DICCIONARIOS ===");

    let mut estudiante = sample_student();
    show(console, "Diccionario original:", &Value::Object(estudiante.clone()));

    console.blank();
    console.log("Acceder a valores:");
    if let Some(nombre) = estudiante.get("nombre") {
        console.log(format_args!("Nombre: {}", inspect::python(nombre)));
    }
    let edad = estudiante.get("edad").unwrap_or(&Value::Null);
    console.log(format_args!("Edad: {}", inspect::python(edad)));

    estudiante.insert("edad".into(), json!(21));
    show(console, "Diccionario después de modificar:", &Value::Object(estudiante.clone()));

    estudiante.insert("ciudad".into(), json!("Madrid"));
    show(console, "Diccionario después de añadir:", &Value::Object(estudiante.clone()));

    estudiante.shift_remove("cursos");
    show(console, "Diccionario después de eliminar:", &Value::Object(estudiante.clone()));

    console.blank();
    console.log("Métodos de diccionarios:");
    let claves: Vec<&String> = estudiante.keys().collect();
    let valores: Vec<&Value> = estudiante.values().collect();
    console.log(format_args!("Claves: {}", inspect::python(&json!(claves))));
    console.log(format_args!("Valores: {}", inspect::python(&json!(valores))));
    console.log(format_args!("Pares clave-valor: {}", items(&estudiante)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => Some(1))]
    #[test_case(2 => Some(3))]
    #[test_case(3 => None; "past the end")]
    #[test_case(-1 => Some(3))]
    #[test_case(-3 => Some(1))]
    #[test_case(-4 => None; "before the start")]
    fn test_py_index(indice: isize) -> Option<i32> {
        py_index(&[1, 2, 3], indice).copied()
    }

    #[test]
    fn test_py_index_empty() {
        let vacia: [i32; 0] = [];
        assert_eq!(py_index(&vacia, 0), None);
        assert_eq!(py_index(&vacia, -1), None);
    }

    #[test]
    fn test_remove_value_only_first() {
        let mut lista = vec![1, 2, 1];
        assert_eq!(remove_value(&mut lista, &1).unwrap(), 1);
        assert_eq!(lista, [2, 1]);
    }

    #[test]
    fn test_remove_missing_value() {
        let mut lista = vec!["manzana".to_string()];
        let err = remove_value(&mut lista, &"kiwi".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "kiwi no está en la lista");
        assert_eq!(lista.len(), 1);
    }

    #[test]
    fn test_delete_keeps_insertion_order() {
        let mut d = sample_student();
        d.insert("ciudad".into(), json!("Madrid"));
        d.shift_remove("nombre");
        assert_eq!(d.keys().collect::<Vec<_>>(), ["edad", "cursos", "ciudad"]);
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        let lines = console.lines();

        assert_eq!(lines[0], "=== LISTAS ===");
        assert_eq!(lines[2], "Lista original: ['manzana', 'banana', 'naranja', 'pera']");
        assert!(console.contains("Último elemento: pera"));
        assert!(console.contains("Lista después de remove(): ['manzana', 'uva', 'pera', 'mango']"));
        assert!(console.contains(
            "Diccionario original: {'nombre': 'Ana', 'edad': 20, 'cursos': ['Python', 'JavaScript', 'HTML']}"
        ));
        assert!(console.contains("Edad: 20"));
        assert!(console.contains(
            "Diccionario después de eliminar: {'nombre': 'Ana', 'edad': 21, 'ciudad': 'Madrid'}"
        ));
        assert_eq!(
            &lines[lines.len() - 3..],
            [
                "Claves: ['nombre', 'edad', 'ciudad']",
                "Valores: ['Ana', 21, 'Madrid']",
                "Pares clave-valor: [('nombre', 'Ana'), ('edad', 21), ('ciudad', 'Madrid')]",
            ]
        );
    }
}
