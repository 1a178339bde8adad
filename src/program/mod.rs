//! The fixed program under visualization
//!
//! This module holds the static description of the 15-line leap-year program:
//! - [`ProgramPoint`]: one addressable line (table index, semantic id,
//!   indentation depth, source text)
//! - [`PointId`]: semantic identifiers for the test, else and result lines
//! - [`PROGRAM`]: the fixed table, shared read-only by the trace engine and
//!   the UI
//!
//! # Dynamic text
//!
//! All line text is static except the declaration line, which embeds the
//! current input year. [`ProgramPoint::source_text`] substitutes the `{year}`
//! placeholder at render time; the trace engine itself never looks at text.

/// Semantic identifier for the lines that participate in the decision tree
///
/// Structural lines (braces, the entry line, the declaration) carry no id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointId {
    /// `if (year % 4 == 0)`
    Mod4,
    /// `if (year % 100 == 0)`
    Mod100,
    /// `if (year % 400 == 0)`
    Mod400,
    /// Innermost "Leap Year" print (mod 400 held)
    Res1,
    /// Innermost "NOT a Leap Year" print (mod 400 failed)
    Res2,
    /// Middle "Leap Year" print (mod 4 held, mod 100 failed)
    Res3,
    /// Outer "NOT a Leap Year" print (mod 4 failed)
    Res4,
    /// `else` paired with the mod 400 test
    Else1,
    /// `else` paired with the mod 100 test
    Else2,
    /// `else` paired with the mod 4 test
    Else3,
}

impl PointId {
    /// The verdict a result line prints: `Some(true)` for the two "Leap Year"
    /// prints, `Some(false)` for the two "NOT a Leap Year" prints, `None` for
    /// test and else lines.
    pub fn verdict(self) -> Option<bool> {
        match self {
            PointId::Res1 | PointId::Res3 => Some(true),
            PointId::Res2 | PointId::Res4 => Some(false),
            _ => None,
        }
    }
}

/// One line of the fixed program
#[derive(Debug)]
pub struct ProgramPoint {
    /// Position in the fixed total ordering (display line number is `index + 1`)
    pub index: usize,
    /// Semantic id, `None` for structural lines
    pub id: Option<PointId>,
    /// Nesting depth, cosmetic
    pub indent: usize,
    /// Literal source text, cosmetic
    pub text: &'static str,
}

impl ProgramPoint {
    /// Line text with the input year substituted into the declaration line
    pub fn source_text(&self, year: i64) -> String {
        self.text.replace("{year}", &year.to_string())
    }
}

/// Table index of the function entry line (first point of every trace)
pub const START: usize = 0;
/// Table index of the variable declaration line
pub const DECL: usize = 1;
/// Table index of the closing brace (last point of every trace)
pub const END: usize = 14;

/// The fixed program, in display order
pub static PROGRAM: [ProgramPoint; 15] = [
    ProgramPoint {
        index: 0,
        id: None,
        indent: 0,
        text: "void main() {",
    },
    ProgramPoint {
        index: 1,
        id: None,
        indent: 1,
        text: "int year = {year};",
    },
    ProgramPoint {
        index: 2,
        id: Some(PointId::Mod4),
        indent: 1,
        text: "if (year % 4 == 0) {",
    },
    ProgramPoint {
        index: 3,
        id: Some(PointId::Mod100),
        indent: 2,
        text: "if (year % 100 == 0) {",
    },
    ProgramPoint {
        index: 4,
        id: Some(PointId::Mod400),
        indent: 3,
        text: "if (year % 400 == 0)",
    },
    ProgramPoint {
        index: 5,
        id: Some(PointId::Res1),
        indent: 4,
        text: "printf(\"Leap Year\");",
    },
    ProgramPoint {
        index: 6,
        id: Some(PointId::Else1),
        indent: 3,
        text: "else",
    },
    ProgramPoint {
        index: 7,
        id: Some(PointId::Res2),
        indent: 4,
        text: "printf(\"NOT a Leap Year\");",
    },
    ProgramPoint {
        index: 8,
        id: None,
        indent: 2,
        text: "}",
    },
    ProgramPoint {
        index: 9,
        id: Some(PointId::Else2),
        indent: 2,
        text: "else",
    },
    ProgramPoint {
        index: 10,
        id: Some(PointId::Res3),
        indent: 3,
        text: "printf(\"Leap Year\");",
    },
    ProgramPoint {
        index: 11,
        id: None,
        indent: 1,
        text: "}",
    },
    ProgramPoint {
        index: 12,
        id: Some(PointId::Else3),
        indent: 1,
        text: "else",
    },
    ProgramPoint {
        index: 13,
        id: Some(PointId::Res4),
        indent: 2,
        text: "printf(\"NOT a Leap Year\");",
    },
    ProgramPoint {
        index: 14,
        id: None,
        indent: 0,
        text: "}",
    },
];

/// Look up the table index of a semantic id
///
/// Every [`PointId`] appears exactly once in [`PROGRAM`].
pub fn point_index(id: PointId) -> usize {
    PROGRAM
        .iter()
        .position(|p| p.id == Some(id))
        .expect("every PointId appears in PROGRAM")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indices_match_positions() {
        for (position, point) in PROGRAM.iter().enumerate() {
            assert_eq!(point.index, position);
        }
    }

    #[test]
    fn test_semantic_ids_are_unique() {
        let ids: Vec<PointId> = PROGRAM.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids.len(), 10);
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_endpoints_are_structural() {
        assert_eq!(PROGRAM[START].id, None);
        assert_eq!(PROGRAM[DECL].id, None);
        assert_eq!(PROGRAM[END].id, None);
        assert_eq!(PROGRAM[END].text, "}");
    }

    #[test]
    fn test_point_index_roundtrip() {
        assert_eq!(point_index(PointId::Mod4), 2);
        assert_eq!(point_index(PointId::Mod400), 4);
        assert_eq!(point_index(PointId::Res4), 13);
        for point in PROGRAM.iter() {
            if let Some(id) = point.id {
                assert_eq!(point_index(id), point.index);
            }
        }
    }

    #[test]
    fn test_declaration_line_embeds_the_year() {
        assert_eq!(PROGRAM[DECL].source_text(1900), "int year = 1900;");
        assert_eq!(PROGRAM[DECL].source_text(-44), "int year = -44;");
        // Static lines pass through untouched
        assert_eq!(PROGRAM[START].source_text(1900), "void main() {");
    }
}
