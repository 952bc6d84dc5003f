//! Sección 2.3: Bucles en Python, en Rust (Python Loops, in Rust)
//!
//! `for x in secuencia`, `range()`, `dict.items()`, `while`, `break` y
//! `continue` se traducen casi palabra por palabra.

use apuntes_common::{Console, Result, Settings};

/// Filas de la matriz separadas por espacios (Matrix rows, space separated).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_3::matrix_rows;
/// assert_eq!(matrix_rows(&[[1, 2], [3, 4]]), ["1 2 ", "3 4 "]);
/// ```
#[must_use]
pub fn matrix_rows<const N: usize>(matriz: &[[i64; N]]) -> Vec<String> {
    matriz
        .iter()
        .map(|fila| fila.iter().map(|elemento| format!("{elemento} ")).collect())
        .collect()
}

/// Cuenta atrás de dos en dos mientras sea positivo
/// (Counts down by two while positive).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter2::section_2_3::countdown_by_two;
/// assert_eq!(countdown_by_two(10), [10, 8, 6, 4, 2]);
/// assert!(countdown_by_two(0).is_empty());
/// ```
#[must_use]
pub fn countdown_by_two(desde: i64) -> Vec<i64> {
    let mut numero = desde;
    let mut valores = Vec::new();
    while numero > 0 {
        valores.push(numero);
        numero -= 2;
    }
    valores
}

fn heading(console: &mut Console, title: &str) {
    console.blank();
    console.log(title);
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    heading(console, "Recorriendo una lista:");
    let frutas = ["manzana", "banana", "naranja"];
    for fruta in frutas {
        console.log(fruta);
    }

    heading(console, "Usando range():");
    for i in 0..3 {
        console.log(format_args!("Número: {i}"));
    }

    heading(console, "Recorriendo un diccionario:");
    let estudiante = [("nombre", "Juan"), ("edad", "20"), ("carrera", "Informática")];
    for (clave, valor) in estudiante {
        console.log(format_args!("{clave}: {valor}"));
    }

    heading(console, "Ejemplo de while:");
    let mut contador = 0;
    while contador < 3 {
        console.log(format_args!("Contador: {contador}"));
        contador += 1;
    }

    heading(console, "Ejemplo de break:");
    for i in 0..5 {
        if i == 3 {
            break;
        }
        console.log(i);
    }

    heading(console, "Ejemplo de continue:");
    for i in 0..5 {
        if i == 2 {
            continue;
        }
        console.log(i);
    }

    heading(console, "Bucles anidados:");
    for i in 0..2 {
        for j in 0..2 {
            console.log(format_args!("i: {i}, j: {j}"));
        }
    }

    heading(console, "Recorriendo una matriz:");
    let matriz = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    for fila in matrix_rows(&matriz) {
        console.log(fila);
    }

    heading(console, "While con condición compleja:");
    for numero in countdown_by_two(10) {
        console.log(numero);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_countdown_stops_before_zero() {
        assert_eq!(countdown_by_two(5), [5, 3, 1]);
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        let out = console.output();

        assert!(out.starts_with("\nRecorriendo una lista:\nmanzana\nbanana\nnaranja\n"));
        assert!(out.contains("\nEjemplo de break:\n0\n1\n2\n\n"));
        assert!(out.contains("\nEjemplo de continue:\n0\n1\n3\n4\n"));
        assert!(out.contains("carrera: Informática\n"));
        assert!(out.contains("i: 1, j: 1\n"));
        assert!(out.contains("4 5 6 \n"));
        assert!(out.ends_with("10\n8\n6\n4\n2\n"));
    }
}
