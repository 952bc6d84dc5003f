//! Pruebas de la línea de comandos (Command-line tests).

#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;

fn apuntes() -> Command {
    let mut cmd = Command::cargo_bin("apuntes").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_shows_every_lesson() {
    apuntes()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1  Apuntes básicos"))
        .stdout(predicate::str::contains("3.2  Funciones asíncronas y callbacks"))
        .stdout(predicate::str::contains("5.3  Tipos personalizados"));
}

#[test]
fn list_has_one_line_per_lesson() {
    let output = apuntes().arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 15);
}

// ============================================================================
// run
// ============================================================================

#[test]
fn run_control_structures() {
    apuntes()
        .args(["run", "2.1", "--instant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⚙️ Modo: debug, Puerto: 3000"))
        .stderr(predicate::str::contains("❌ Error: Servidor no disponible"));
}

#[test]
fn run_several_lessons_in_order() {
    let output = apuntes()
        .args(["run", "1.2", "3.3", "--instant"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("5\n20\n"));
    assert!(stdout.contains("Estimado/a Dr. García"));
}

#[test]
fn run_async_lesson_instantly() {
    apuntes()
        .args(["run", "3.2", "--instant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Datos recibidos para id: 42"))
        .stdout(predicate::str::contains("Callback recibido: Proceso terminado"));
}

#[test]
fn run_reads_answers_from_stdin_when_interactive() {
    apuntes()
        .args(["run", "1.3", "--interactive"])
        .write_stdin("Josep\nJosep\n30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hola Josep, tienes 30 años"));
}

#[test]
fn interactive_prompt_comes_before_the_answer_is_used() {
    let output = apuntes()
        .args(["run", "1.3", "--interactive"])
        .write_stdin("Josep\nJosep\n30\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // stdin is piped, so nothing echoes the answer: the prompt is followed
    // directly by the next printed line, as with Python's input()
    assert!(stdout.contains("Introduce tu nombre: Hola Josep\n"));
    assert!(stdout.contains("Introduce tu nombre: Introduce tu edad: Hola Josep, tienes 30 años\n"));
    assert!(!stdout.contains("Introduce tu nombre: Josep"));
}

#[test]
fn canned_answers_are_printed_after_the_prompt() {
    apuntes()
        .args(["run", "1.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Introduce tu nombre: Ana\nHola Ana\n"));
}

#[test]
fn run_unknown_lesson_fails() {
    apuntes()
        .args(["run", "9.9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Lección desconocida: 9.9"));
}

#[test]
fn run_requires_an_id() {
    apuntes().arg("run").assert().failure();
}

// ============================================================================
// all
// ============================================================================

#[test]
fn all_prints_a_banner_per_lesson() {
    apuntes()
        .args(["all", "--instant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("===== 1.1 Apuntes básicos ====="))
        .stdout(predicate::str::contains("===== 4.2 Listas y diccionarios en Python ====="))
        .stdout(predicate::str::contains("Clase registrada: ProductoDecorado"));
}
