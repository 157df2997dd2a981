//! Truth tables of gate functions.
//!
//! A gate of arity `N` has `2^N` rows. Rows are ordered as a binary counter over
//! the inputs with `A` as the most significant bit, so row `i` assigns
//! `A = (i >> (N-1)) & 1`, ..., and the last variable `= i & 1`.
//!
//! Since `N <= 4`, the whole output column fits in a `u16`: bit `i` is the output
//! of row `i`. Implication between two tables of equal arity is then a single
//! mask test.

use std::fmt;

use log::trace;

use crate::ast::Expr;
use crate::types::{Arity, Var};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    arity: Arity,
    bits: u16,
}

/// Computes the truth table of `expr` over the leading `arity` variables.
///
/// # Panics
///
/// Panics if `expr` references a variable beyond `arity`. Catalog gates are
/// validated against their arity when the catalog is built, so this only fires
/// for hand-built expressions.
pub fn evaluate(expr: &Expr, arity: Arity) -> TruthTable {
    if let Some(var) = expr.max_var() {
        assert!(
            arity.contains(var),
            "Expression references {} but arity is {}",
            var,
            arity
        );
    }

    let mut bits = 0u16;
    for index in 0..arity.rows() {
        let output = expr.eval(|v| row_input(arity, index, v));
        trace!("evaluate: row {:0width$b} -> {}", index, output as u8, width = arity.get());
        if output {
            bits |= 1 << index;
        }
    }
    TruthTable { arity, bits }
}

/// Value of `var` in row `index` of a table with the given arity.
pub(crate) fn row_input(arity: Arity, index: usize, var: Var) -> bool {
    let shift = arity.get() - 1 - var.index();
    (index >> shift) & 1 == 1
}

impl TruthTable {
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Number of rows, always `2^N`.
    pub fn len(&self) -> usize {
        self.arity.rows()
    }

    /// Always `false`: a table has at least four rows.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Output column as a mask, bit `i` being row `i`.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Output of row `index`.
    pub fn output(&self, index: usize) -> bool {
        assert!(index < self.len(), "Row index out of range");
        (self.bits >> index) & 1 == 1
    }

    /// Number of rows with output 1.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn row(&self, index: usize) -> Row {
        Row {
            arity: self.arity,
            index,
            output: self.output(index),
        }
    }

    /// All rows in counter order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }

    /// Checks whether every row satisfying `self` also satisfies `other`.
    ///
    /// # Panics
    ///
    /// Panics if the arities differ.
    pub fn implies(&self, other: &TruthTable) -> bool {
        assert_eq!(self.arity, other.arity, "Arity mismatch");
        self.bits & !other.bits == 0
    }
}

/// A single row of a truth table: the input assignment and the output bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Row {
    arity: Arity,
    index: usize,
    output: bool,
}

impl Row {
    /// Position of the row in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn input(&self, var: Var) -> bool {
        assert!(self.arity.contains(var), "Variable {} out of range", var);
        row_input(self.arity, self.index, var)
    }

    /// Input values, `A` first.
    pub fn inputs(&self) -> impl Iterator<Item = bool> + '_ {
        self.arity.vars().map(move |v| self.input(v))
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut headers: Vec<String> = self.arity.vars().map(|v| v.letter().to_ascii_lowercase().to_string()).collect();
        headers.push("f".to_string());
        let rows = self.rows().map(|row| {
            let mut cells: Vec<u8> = row.inputs().map(u8::from).collect();
            cells.push(row.output() as u8);
            cells
        });
        f.write_str(&render_grid(&headers, rows))
    }
}

/// Renders the truth tables of two gates side by side.
///
/// Headers are the input letters followed by the two gate names.
///
/// # Panics
///
/// Panics if the arities differ.
pub fn render_pair(hvdd_name: &str, hvdd: &TruthTable, lvdd_name: &str, lvdd: &TruthTable) -> String {
    assert_eq!(hvdd.arity, lvdd.arity, "Arity mismatch");
    let mut headers: Vec<String> = hvdd.arity.vars().map(|v| v.letter().to_ascii_lowercase().to_string()).collect();
    headers.push(hvdd_name.to_string());
    headers.push(lvdd_name.to_string());
    let rows = hvdd.rows().zip(lvdd.rows()).map(|(h, l)| {
        let mut cells: Vec<u8> = h.inputs().map(u8::from).collect();
        cells.push(h.output() as u8);
        cells.push(l.output() as u8);
        cells
    });
    render_grid(&headers, rows)
}

/// Grid layout: `+---+` rules between rows, `+===+` under the header, values right-aligned.
fn render_grid(headers: &[String], rows: impl Iterator<Item = Vec<u8>>) -> String {
    let widths: Vec<usize> = headers.iter().map(|h| h.len().max(1) + 2).collect();
    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(*w));
            line.push('+');
        }
        line.push('\n');
        line
    };
    let line = |cells: Vec<String>| {
        let mut line = String::from("|");
        for (cell, w) in cells.iter().zip(&widths) {
            line.push_str(&format!(" {:>width$} |", cell, width = w - 2));
        }
        line.push('\n');
        line
    };

    let mut out = rule('-');
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule('='));
    for row in rows {
        out.push_str(&line(row.iter().map(|b| b.to_string()).collect()));
        out.push_str(&rule('-'));
    }
    out
}
