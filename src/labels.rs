//! Label sets for rendered output.
//!
//! Every string that reaches the user comes from a `Labels` table, so the
//! recognizers never hard-code display text.

use serde::{Deserialize, Serialize};

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Label table for this language.
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::Es => &Labels::SPANISH,
            Language::En => &Labels::ENGLISH,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Es => write!(f, "es"),
            Language::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Language::Es),
            "en" | "english" => Ok(Language::En),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// Display strings for tree nodes, sentinels, and listings.
#[derive(Debug)]
pub struct Labels {
    pub tree_title: &'static str,
    pub program: &'static str,
    pub empty_source: &'static str,

    // Class/method dialect
    pub class: &'static str,
    pub name: &'static str,
    pub attributes: &'static str,
    pub methods: &'static str,
    pub method: &'static str,
    pub type_: &'static str,
    pub parameters: &'static str,
    pub no_parameters: &'static str,
    pub variables: &'static str,
    pub variable: &'static str,
    pub value: &'static str,
    pub no_value: &'static str,
    pub condition: &'static str,
    pub if_: &'static str,
    pub else_: &'static str,
    pub for_: &'static str,
    pub while_: &'static str,
    pub empty_class: &'static str,
    pub no_class: &'static str,
    pub no_method: &'static str,
    pub unrecognized: &'static str,

    // Pseudocode dialect
    pub pseudo_if: &'static str,
    pub pseudo_then: &'static str,
    pub pseudo_else: &'static str,
    pub pseudo_while: &'static str,
    pub pseudo_do: &'static str,
    pub assignment: &'static str,
    pub statement: &'static str,

    // Character listing
    pub chars_title: &'static str,
    pub position: &'static str,
    pub categories: CategoryLabels,
}

/// Display strings for character categories.
#[derive(Debug)]
pub struct CategoryLabels {
    pub letter: &'static str,
    pub digit: &'static str,
    pub space: &'static str,
    pub tab: &'static str,
    pub newline: &'static str,
    pub carriage_return: &'static str,
    pub other_whitespace: &'static str,
    pub open_brace: &'static str,
    pub close_brace: &'static str,
    pub open_paren: &'static str,
    pub close_paren: &'static str,
    pub semicolon: &'static str,
    pub assignment: &'static str,
    pub arithmetic: &'static str,
    pub comparison: &'static str,
    pub double_quote: &'static str,
    pub single_quote: &'static str,
    pub dot: &'static str,
    pub comma: &'static str,
    pub special: &'static str,
}

impl Labels {
    pub const SPANISH: Labels = Labels {
        tree_title: "Árbol de derivación:",
        program: "Programa",
        empty_source: "Error: El código fuente está vacío.",

        class: "Clase",
        name: "Nombre",
        attributes: "Atributos",
        methods: "Métodos",
        method: "Método",
        type_: "Tipo",
        parameters: "Parámetros",
        no_parameters: "Sin parámetros",
        variables: "Variables",
        variable: "Variable",
        value: "Valor",
        no_value: "Sin valor",
        condition: "Condición",
        if_: "If",
        else_: "Else",
        for_: "For",
        while_: "While",
        empty_class: "Clase vacía o sin elementos reconocibles",
        no_class: "Error: No se encontró una clase válida",
        no_method: "Error: No se encontró un método válido",
        unrecognized: "Error: Estructura no reconocida",

        pseudo_if: "Si",
        pseudo_then: "Entonces",
        pseudo_else: "Sino",
        pseudo_while: "Mientras",
        pseudo_do: "Hacer",
        assignment: "Asignación",
        statement: "Sentencia",

        chars_title: "Análisis carácter por carácter:",
        position: "Posición",
        categories: CategoryLabels {
            letter: "Letra",
            digit: "Dígito",
            space: "Espacio",
            tab: "Tabulación",
            newline: "Salto de línea",
            carriage_return: "Retorno de carro",
            other_whitespace: "Espacio en blanco",
            open_brace: "Llave de apertura",
            close_brace: "Llave de cierre",
            open_paren: "Paréntesis de apertura",
            close_paren: "Paréntesis de cierre",
            semicolon: "Punto y coma",
            assignment: "Operador de asignación",
            arithmetic: "Operador aritmético",
            comparison: "Operador de comparación",
            double_quote: "Comilla doble",
            single_quote: "Comilla simple",
            dot: "Punto",
            comma: "Coma",
            special: "Símbolo especial",
        },
    };

    pub const ENGLISH: Labels = Labels {
        tree_title: "Derivation tree:",
        program: "Program",
        empty_source: "Error: source text is empty.",

        class: "Class",
        name: "Name",
        attributes: "Attributes",
        methods: "Methods",
        method: "Method",
        type_: "Type",
        parameters: "Parameters",
        no_parameters: "no parameters",
        variables: "Variables",
        variable: "Variable",
        value: "Value",
        no_value: "no value",
        condition: "Condition",
        if_: "If",
        else_: "Else",
        for_: "For",
        while_: "While",
        empty_class: "Empty class or no recognizable elements",
        no_class: "Error: no valid class found",
        no_method: "Error: no valid method found",
        unrecognized: "Error: not a recognized structure",

        pseudo_if: "If",
        pseudo_then: "Then",
        pseudo_else: "Else",
        pseudo_while: "While",
        pseudo_do: "Do",
        assignment: "Assignment",
        statement: "Statement",

        chars_title: "Character-by-character analysis:",
        position: "Position",
        categories: CategoryLabels {
            letter: "Letter",
            digit: "Digit",
            space: "Space",
            tab: "Tab",
            newline: "Newline",
            carriage_return: "Carriage return",
            other_whitespace: "Whitespace",
            open_brace: "Opening brace",
            close_brace: "Closing brace",
            open_paren: "Opening parenthesis",
            close_paren: "Closing parenthesis",
            semicolon: "Semicolon",
            assignment: "Assignment operator",
            arithmetic: "Arithmetic operator",
            comparison: "Comparison operator",
            double_quote: "Double quote",
            single_quote: "Single quote",
            dot: "Dot",
            comma: "Comma",
            special: "Special symbol",
        },
    };
}
