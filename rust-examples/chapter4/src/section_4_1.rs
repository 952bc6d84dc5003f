//! Sección 4.1: Arrays y diccionarios (Arrays and Dictionaries)
//!
//! | TypeScript | Rust |
//! |------------|------|
//! | `number[]` / `Array<string>` | `Vec<i64>` / `Vec<String>` |
//! | `(string \| number)[]` | `Vec<Mixed>` (enum) |
//! | `{ [clave: string]: T }` | `IndexMap<String, T>` |
//! | `{ [clave: string]: any }` | `serde_json::Value` |
//! | `Map<K, V>` | `IndexMap<K, V>` |
//! | `Record<string, T>` | `IndexMap<String, T>` |
//!
//! Un `Map` de JavaScript, igual que las claves string de un objeto, se
//! recorre en orden de inserción; `IndexMap` hace lo mismo, mientras que
//! `BTreeMap` ordenaría las claves (A JavaScript `Map`, like the string keys
//! of an object, iterates in insertion order; so does `IndexMap`, whereas
//! `BTreeMap` would sort the keys).

use std::fmt;

use apuntes_common::{Console, Result, Settings, inspect};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

pub const VAT: f64 = 1.21;

// ============================================================================
// Arrays
// ============================================================================

/// Elemento de un array heterogéneo (Element of a heterogeneous array).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mixed {
    Text(String),
    Number(f64),
}

impl fmt::Display for Mixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mixed::Text(s) => f.write_str(s),
            Mixed::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub nombre: String,
    pub precio: f64,
}

impl Product {
    #[must_use]
    pub fn new(nombre: &str, precio: f64) -> Self {
        Self {
            nombre: nombre.to_string(),
            precio,
        }
    }
}

#[must_use]
pub fn sample_cart() -> Vec<Product> {
    vec![Product::new("Camiseta", 20.0), Product::new("Pantalón", 35.0)]
}

/// `carrito.reduce((suma, prod) => suma + prod.precio, 0)`.
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter4::section_4_1::{cart_total, sample_cart};
/// assert_eq!(cart_total(&sample_cart()), 55.0);
/// ```
#[must_use]
pub fn cart_total(carrito: &[Product]) -> f64 {
    carrito.iter().map(|p| p.precio).sum()
}

#[must_use]
pub fn prices_with_vat(carrito: &[Product]) -> Vec<f64> {
    carrito.iter().map(|p| p.precio * VAT).collect()
}

// ============================================================================
// Mapas (Maps)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub nombre: String,
    pub cantidad: u32,
}

pub type Inventory = IndexMap<String, InventoryItem>;

#[must_use]
pub fn sample_inventory() -> Inventory {
    IndexMap::from([
        (
            "producto_001".to_string(),
            InventoryItem {
                nombre: "Teclado".to_string(),
                cantidad: 15,
            },
        ),
        (
            "producto_002".to_string(),
            InventoryItem {
                nombre: "Ratón".to_string(),
                cantidad: 32,
            },
        ),
    ])
}

/// Una línea por artículo (One line per item).
///
/// # Ejemplos (Examples)
/// ```
/// use apuntes_chapter4::section_4_1::{inventory_lines, sample_inventory};
/// assert_eq!(
///     inventory_lines(&sample_inventory()),
///     ["producto_001 -> Teclado (15 uds)", "producto_002 -> Ratón (32 uds)"]
/// );
/// ```
#[must_use]
pub fn inventory_lines(inventario: &Inventory) -> Vec<String> {
    inventario
        .iter()
        .map(|(id, item)| format!("{id} -> {} ({} uds)", item.nombre, item.cantidad))
        .collect()
}

pub fn demo(console: &mut Console, _settings: &Settings) -> Result<()> {
    let numeros: Vec<i64> = vec![1, 2, 3];
    let frutas: Vec<String> = ["manzana", "pera", "uva"].map(String::from).to_vec();
    let mezcla = vec![
        Mixed::Text("edad".into()),
        Mixed::Number(30.0),
        Mixed::Text("peso".into()),
        Mixed::Number(70.0),
    ];
    tracing::debug!(
        numeros = %inspect::js(&json!(numeros)),
        frutas = %inspect::js(&json!(frutas)),
        mezcla = %inspect::to_js(&mezcla)?,
        "arrays declarados"
    );

    let carrito = sample_cart();
    carrito
        .iter()
        .for_each(|p| console.log(format_args!("{}: {}€", p.nombre, p.precio)));
    console.log(format_args!("Total: {}", cart_total(&carrito)));
    console.log(format_args!(
        "Precios con IVA: {}",
        inspect::js(&json!(prices_with_vat(&carrito)))
    ));

    // Índice string -> string | number
    let mut persona: IndexMap<&str, Mixed> = IndexMap::new();
    persona.insert("nombre", Mixed::Text("Ana".into()));
    persona.insert("edad", Mixed::Number(30.0));
    if let Some(nombre) = persona.get("nombre") {
        tracing::debug!(%nombre, campos = persona.len(), "diccionario indexado");
    }

    // Diccionario genérico
    let config: Value = json!({ "theme": "dark", "version": 1.5, "debug": true });
    console.log(format_args!("Configuración: {}", inspect::js(&config)));

    let mut mapa: IndexMap<&str, i64> = IndexMap::new();
    mapa.insert("uno", 1);
    mapa.insert("dos", 2);
    for (clave, valor) in &mapa {
        console.log(format_args!("Clave: {clave}, Valor: {valor}"));
    }
    if mapa.contains_key("uno") {
        console.log("Existe la clave 'uno'");
    }
    let valor_dos = mapa.get("dos").copied();
    tracing::debug!(?valor_dos, "mapa.get");

    for line in inventory_lines(&sample_inventory()) {
        console.log(line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_serializes_untagged() {
        let mezcla = vec![Mixed::Text("edad".into()), Mixed::Number(30.0)];
        assert_eq!(inspect::to_js(&mezcla).unwrap(), "[ 'edad', 30 ]");
        assert_eq!(Mixed::Number(70.0).to_string(), "70");
    }

    #[test]
    fn test_cart() {
        let carrito = sample_cart();
        assert_eq!(cart_total(&[]), 0.0);
        let con_iva = prices_with_vat(&carrito);
        assert!((con_iva[0] - 24.2).abs() < 1e-9);
        assert!((con_iva[1] - 42.35).abs() < 1e-9);
    }

    #[test]
    fn test_inventory_keeps_insertion_order() {
        let mut inventario = Inventory::new();
        for (id, nombre) in [("z_9", "Monitor"), ("a_1", "Cable")] {
            inventario.insert(
                id.to_string(),
                InventoryItem {
                    nombre: nombre.to_string(),
                    cantidad: 1,
                },
            );
        }
        assert_eq!(
            inventory_lines(&inventario),
            ["z_9 -> Monitor (1 uds)", "a_1 -> Cable (1 uds)"]
        );
    }

    #[test]
    fn test_empty_inventory() {
        assert!(inventory_lines(&Inventory::new()).is_empty());
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::capture();
        demo(&mut console, &Settings::instant()).unwrap();
        let lines = console.lines();

        assert_eq!(&lines[..3], ["Camiseta: 20€", "Pantalón: 35€", "Total: 55"]);
        assert!(lines[3].starts_with("Precios con IVA: [ 24.2"));
        assert!(console.contains("Configuración: { theme: 'dark', version: 1.5, debug: true }"));
        let claves: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| l.starts_with("Clave: "))
            .collect();
        assert_eq!(claves, ["Clave: uno, Valor: 1", "Clave: dos, Valor: 2"]);
        assert!(console.contains("Existe la clave 'uno'"));
        assert_eq!(
            &lines[lines.len() - 2..],
            ["producto_001 -> Teclado (15 uds)", "producto_002 -> Ratón (32 uds)"]
        );
    }
}
