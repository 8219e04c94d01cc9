//! Integration tests for the pseudocode dialect.

use std::path::PathBuf;

use sintaxis::{analyze_structure, Analyzer, Config, Dialect, Language};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

#[test]
fn test_contador_fixture_tree() {
    let text = std::fs::read_to_string(testdata_path().join("contador.pseudo"))
        .expect("should read fixture");

    let mut analyzer = Analyzer::default();
    let derivation = analyzer.analyze(&text).unwrap().unwrap();
    assert_eq!(derivation.dialect, Dialect::Pseudocode);

    let expected = "\
Árbol de derivación:
Programa
  Asignación: contador = 0
  Mientras
    Condición: contador < 10
    Hacer
      Si
        Condición: contador == 5
        Entonces
          Sentencia: escribir \"mitad\"
        Sino
          Sentencia: escribir contador
      Asignación: contador = contador + 1
  Sentencia: escribir \"fin\"
";
    assert_eq!(analyzer.render(&derivation), expected);
}

#[test]
fn test_nested_conditionals_close_in_order() {
    let text = "\
si a entonces
  si b entonces
    x = 1
  sino
    x = 2
  finsi
  y = 3
sino
  y = 4
finsi";

    let expected = "\
Árbol de derivación:
Programa
  Si
    Condición: a
    Entonces
      Si
        Condición: b
        Entonces
          Asignación: x = 1
        Sino
          Asignación: x = 2
      Asignación: y = 3
    Sino
      Asignación: y = 4
";
    assert_eq!(analyze_structure(text).unwrap(), expected);
}

#[test]
fn test_keywords_are_case_insensitive_and_terminators_flexible() {
    let text = "SI listo ENTONCES\nterminar\nFIN SI\nMientras n > 0 Hacer\nn = n - 1\nfin_mientras";
    let out = analyze_structure(text).unwrap();
    assert!(out.contains("  Si\n    Condición: listo\n    Entonces\n      Sentencia: terminar\n"));
    assert!(out.contains("  Mientras\n    Condición: n > 0\n    Hacer\n      Asignación: n = n - 1\n"));
    assert!(!out.contains("FIN SI"));
    assert!(!out.contains("fin_mientras"));
}

#[test]
fn test_single_keyword_is_not_pseudocode() {
    let mut analyzer = Analyzer::default();
    let derivation = analyzer.analyze("si\nx = 1").unwrap().unwrap();
    assert_eq!(derivation.dialect, Dialect::ClassMethod);
}

#[test]
fn test_english_labels_keep_spanish_keywords() {
    let config = Config {
        language: Language::En,
        ..Config::default()
    };
    let mut analyzer = Analyzer::new(config);
    let out = analyzer
        .analyze_structure("si x entonces\nx = 0\nfinsi")
        .unwrap();
    assert_eq!(
        out,
        "Derivation tree:\nProgram\n  If\n    Condition: x\n    Then\n      Assignment: x = 0\n"
    );
}

#[test]
fn test_keywords_inside_words_select_pseudocode() {
    let mut analyzer = Analyzer::default();
    for text in ["finsi\nx = 1", "sino\nx = 1", "finmientras\nx = 1"] {
        let derivation = analyzer.analyze(text).unwrap().unwrap();
        assert_eq!(derivation.dialect, Dialect::Pseudocode, "{:?}", text);
    }

    let out = analyze_structure("finsi\nx = 1").unwrap();
    assert_eq!(
        out,
        "Árbol de derivación:\nPrograma\n  Sentencia: finsi\n  Asignación: x = 1\n"
    );
}
