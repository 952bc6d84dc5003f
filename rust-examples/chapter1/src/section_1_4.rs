//! Sección 1.4: Formato de cadenas (String Formatting)
//!
//! Python tiene tres mini-lenguajes de formato (f-strings, `.format()` y `%`);
//! Rust tiene uno solo, el de `format!`, que cubre los tres casos
//! (Python has three formatting mini-languages; Rust has a single one, the
//! `format!` syntax, which covers all three):
//!
//! | Python | Rust |
//! |--------|------|
//! | `f"{x:.2f}"` | `format!("{x:.2}")` |
//! | `f"{s:<10}"` / `:^10` / `:>10` | `format!("{s:<10}")` / `:^10` / `:>10` |
//! | `"{0} {1} {0}".format(a, b)` | `format!("{0} {1} {0}", a, b)` |
//! | `"{n}".format(n=x)` | `format!("{n}", n = x)` |
//! | `f"{42:05d}"` | `format!("{:05}", 42)` |
//! | `f"{0.876:.2%}"` | [`percent`] |
//!
//! Las tablas con bordes usan `comfy-table` (Bordered tables use `comfy-table`).

use apuntes_common::{Console, Result, Settings};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

/// Una fila de la tabla de productos (A row of the product table).
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub nombre: &'static str,
    pub cantidad: u32,
    pub precio: f64,
}

impl LineItem {
    #[must_use]
    pub fn total(&self) -> f64 {
        f64::from(self.cantidad) * self.precio
    }
}

pub const HEADERS: [&str; 4] = ["Producto", "Cantidad", "Precio (€)", "Total (€)"];

#[must_use]
pub fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem {
            nombre: "Manzana",
            cantidad: 3,
            precio: 0.99,
        },
        LineItem {
            nombre: "Pan",
            cantidad: 2,
            precio: 1.50,
        },
        LineItem {
            nombre: "Leche",
            cantidad: 1,
            precio: 1.20,
        },
    ]
}

/// `f"{valor:.2%}"`.
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter1::section_1_4::percent;
/// assert_eq!(percent(0.876, 2), "87.60%");
/// assert_eq!(percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn percent(valor: f64, decimales: usize) -> String {
    format!("{:.*}%", decimales, valor * 100.0)
}

/// `|Izquierda |  Centro  |   Derecha|`.
#[must_use]
pub fn alignment_row(ancho: usize) -> String {
    format!(
        "|{:<ancho$}|{:^ancho$}|{:>ancho$}|",
        "Izquierda", "Centro", "Derecha"
    )
}

/// Tabla alineada a mano con anchos fijos (Table aligned by hand with fixed widths).
#[must_use]
pub fn manual_table(items: &[LineItem]) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{:<10} {:<10} {:<10} {:<10}",
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
        ),
        "-".repeat(45),
    ];
    lines.extend(items.iter().map(|item| {
        format!(
            "{:<10} {:<10} {:<10.2} {:<10.2}",
            item.nombre,
            item.cantidad,
            item.precio,
            item.total()
        )
    }));
    lines
}

/// Tabla con bordes (Bordered table).
#[must_use]
pub fn grid_table(items: &[LineItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS);

    for item in items {
        table.add_row(vec![
            item.nombre.to_string(),
            item.cantidad.to_string(),
            format!("{:.2}", item.precio),
            format!("{:.2}", item.total()),
        ]);
    }
    for index in 1..HEADERS.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Tabla por columnas, alineada a la derecha y sin índice
/// (Column-oriented table, right aligned, without an index).
#[must_use]
pub fn column_table(items: &[LineItem]) -> Vec<String> {
    let columns: [Vec<String>; 4] = [
        items.iter().map(|i| i.nombre.to_string()).collect(),
        items.iter().map(|i| i.cantidad.to_string()).collect(),
        items.iter().map(|i| format!("{:.2}", i.precio)).collect(),
        items.iter().map(|i| format!("{:.2}", i.total())).collect(),
    ];
    let widths: Vec<usize> = HEADERS
        .iter()
        .zip(&columns)
        .map(|(header, values)| {
            values
                .iter()
                .map(|v| v.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![render(HEADERS.to_vec())];
    for row in 0..items.len() {
        lines.push(render(columns.iter().map(|c| c[row].as_str()).collect()));
    }
    lines
}

fn heading(console: &mut Console, title: &str) {
    console.blank();
    console.log(format_args!("🔹 {title}"));
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    console.log("=".repeat(60));
    console.log("📘 TUTORIAL DE FORMATTING EN RUST");
    console.log("=".repeat(60));

    heading(console, "1. Interpolación en format!");
    let nombre = "Josep";
    let edad = 23;
    let altura = 1.80;
    console.log(format_args!("Hola, me llamo {nombre} y tengo {edad} años."));
    console.log(format_args!("Mido {altura:.2} metros."));
    console.log(format_args!("El año que viene tendré {} años.", edad + 1));
    console.log(alignment_row(10));

    heading(console, "2. Argumentos posicionales y con nombre");
    console.log(format_args!("Hola, me llamo {} y tengo {} años.", nombre, edad));
    console.log(format_args!(
        "Hola, me llamo {0} y tengo {1} años. {0} es un gran nombre.",
        nombre, edad
    ));
    console.log(format_args!("Nombre: {n}, Edad: {e}", n = nombre, e = edad));
    console.log(format_args!("Número con 2 decimales: {:.2}", 1234.56789));

    heading(console, "3. Ancho y relleno");
    console.log(format_args!("Hola, me llamo {} y tengo {} años.", nombre, edad));
    console.log(format_args!("Mido {:.2} metros.", altura));
    console.log(format_args!("|{:<10}|{:>10}|", "Izquierda", "Derecha"));

    heading(console, "4. Otros ejemplos");
    let precio = 49.99;
    let unidades = 3;
    let total = precio * f64::from(unidades);
    console.log(format_args!("Precio unitario: €{precio:.2}"));
    console.log(format_args!(
        "Total a pagar por {unidades} unidades: €{total:.2}"
    ));
    console.log(format_args!("Con ceros a la izquierda: {:05}", 42));
    console.log(format_args!("Porcentaje: {}", percent(0.876, 2)));

    let items = sample_items();

    heading(console, "5. Formato de tablas (manual)");
    for line in manual_table(&items) {
        console.log(line);
    }

    heading(console, "6. Tablas con bordes (comfy-table)");
    console.log(grid_table(&items));

    heading(console, "7. Tablas por columnas");
    for line in column_table(&items) {
        console.log(line);
    }

    console.blank();
    console.log("✅ Fin del tutorial. Puedes modificar los valores y practicar.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_row() {
        assert_eq!(alignment_row(10), "|Izquierda |  Centro  |   Derecha|");
    }

    #[test]
    fn test_manual_table() {
        let lines = manual_table(&sample_items());
        assert_eq!(lines[0], "Producto   Cantidad   Precio (€) Total (€) ");
        assert_eq!(lines[1].len(), 45);
        assert_eq!(lines[2], "Manzana    3          0.99       2.97      ");
    }

    #[test]
    fn test_grid_table_contains_rows() {
        let rendered = grid_table(&sample_items()).to_string();
        assert!(rendered.contains("Producto"));
        assert!(rendered.contains("2.97"));
        assert!(rendered.contains("Leche"));
        assert!(rendered.starts_with('┌'));
    }

    #[test]
    fn test_column_table() {
        let lines = column_table(&sample_items());
        assert_eq!(lines[0], "Producto Cantidad Precio (€) Total (€)");
        assert_eq!(lines[1], " Manzana        3       0.99      2.97");
        assert_eq!(lines[3], "   Leche        1       1.20      1.20");
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        assert!(console.contains("Mido 1.80 metros."));
        assert!(console.contains("Hola, me llamo Josep y tengo 23 años. Josep es un gran nombre."));
        assert!(console.contains("Número con 2 decimales: 1234.57"));
        assert!(console.contains("Total a pagar por 3 unidades: €149.97"));
        assert!(console.contains("Con ceros a la izquierda: 00042"));
        assert!(console.contains("Porcentaje: 87.60%"));
    }
}
