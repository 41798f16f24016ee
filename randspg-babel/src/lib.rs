/*
POSCAR reading and writing.

Only the VASP 5 flavor with a symbol line is accepted on input; without it a
coordinate block cannot be mapped back to atomic numbers. Both "Direct" and
"Cartesian" coordinate modes are handled, and a "Selective dynamics" line is
skipped with a warning since the flags carry no meaning for a bare structure
candidate.

On output atoms are grouped by species in composition order (largest count
first), which keeps the symbol and count lines short no matter how the atom
list was assembled.
*/

use std::io::{BufRead, Write};
use std::num::ParseFloatError;

use thiserror::Error;
use tracing::warn;

use randspg_core::math::Matrix3;
use randspg_core::{
    atomic_number_from_symbol, symbol_from_atomic_number, AtomStruct, Crystal, ElementError,
    LatticeStruct,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no parser registered for extension '{0}'")]
    WrongParser(String),

    #[error("unexpected end of file while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("line {line}: invalid number '{token}'")]
    BadNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Element(#[from] ElementError),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Element(#[from] ElementError),
}

/// Parse a structure file of the given extension.
///
/// # Errors
/// `WrongParser` for an extension no parser is registered for, otherwise
/// whatever the format parser reports.
pub fn parse<R>(r: &mut R, ext: &str) -> Result<Crystal, ParseError>
where
    R: BufRead,
{
    match ext {
        "poscar" | "vasp" => read_poscar(r),
        _ => Err(ParseError::WrongParser(ext.to_string())),
    }
}

fn line<'a>(lines: &'a [String], idx: usize, what: &'static str) -> Result<&'a str, ParseError> {
    lines
        .get(idx)
        .map(|s| s.as_str())
        .ok_or(ParseError::UnexpectedEof(what))
}

fn parse_f64(token: &str, lineno: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|source| ParseError::BadNumber {
        line: lineno_to_field(lineno),
        token: token.to_string(),
        source,
    })
}

// line numbers are reported 1-based
fn lineno_to_field(idx: usize) -> usize {
    idx + 1
}

fn parse_vec3(s: &str, lineno: usize, what: &'static str) -> Result<[f64; 3], ParseError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::Malformed {
            line: lineno_to_field(lineno),
            message: format!("expected 3 numbers for {what}"),
        });
    }
    Ok([
        parse_f64(tokens[0], lineno)?,
        parse_f64(tokens[1], lineno)?,
        parse_f64(tokens[2], lineno)?,
    ])
}

/// Read a VASP 5 POSCAR.
///
/// # Errors
/// `UnexpectedEof` on truncated input, `Malformed`/`BadNumber` on lines that
/// do not parse, `Element` for symbols not in the element table.
pub fn read_poscar<R>(r: &mut R) -> Result<Crystal, ParseError>
where
    R: BufRead,
{
    let lines: Vec<String> = r.lines().collect::<Result<_, _>>()?;
    let mut idx = 0;

    // title line, not retained
    let _ = line(&lines, idx, "title")?;
    idx += 1;

    let scale_line = line(&lines, idx, "scale factor")?;
    let mut scale = parse_f64(scale_line.trim(), idx)?;
    if scale <= 0.0 {
        // a negative value means a target cell volume in the VASP dialect
        warn!("non-positive scale factor {scale} in POSCAR, treating as 1.0");
        scale = 1.0;
    }
    idx += 1;

    let mut cell = [[0.0; 3]; 3];
    for row in &mut cell {
        let v = parse_vec3(line(&lines, idx, "lattice vector")?, idx, "a lattice vector")?;
        *row = v.map(|x| x * scale);
        idx += 1;
    }
    let cell = Matrix3(cell);
    let lattice = LatticeStruct::from_cell_matrix(&cell);

    let symbol_line = line(&lines, idx, "species symbols")?;
    let first = symbol_line.trim().chars().next();
    if !first.is_some_and(char::is_alphabetic) {
        return Err(ParseError::Malformed {
            line: lineno_to_field(idx),
            message: "species symbol line is required (VASP 5 format)".to_string(),
        });
    }
    let symbols: Vec<&str> = symbol_line.split_whitespace().collect();
    idx += 1;

    let count_line = line(&lines, idx, "species counts")?;
    let counts: Vec<usize> = count_line
        .split_whitespace()
        .map(|t| {
            t.parse().map_err(|_| ParseError::Malformed {
                line: lineno_to_field(idx),
                message: format!("invalid species count '{t}'"),
            })
        })
        .collect::<Result<_, _>>()?;
    if counts.len() != symbols.len() {
        return Err(ParseError::Malformed {
            line: lineno_to_field(idx),
            message: format!(
                "{} species symbols but {} counts",
                symbols.len(),
                counts.len()
            ),
        });
    }
    idx += 1;

    let mut mode_line = line(&lines, idx, "coordinate mode")?;
    if mode_line.trim().starts_with(['s', 'S']) {
        warn!("selective dynamics flags in POSCAR are ignored");
        idx += 1;
        mode_line = line(&lines, idx, "coordinate mode")?;
    }
    let direct = match mode_line.trim().chars().next() {
        Some('d' | 'D') => true,
        Some('c' | 'C' | 'k' | 'K') => false,
        _ => {
            return Err(ParseError::Malformed {
                line: lineno_to_field(idx),
                message: format!("unknown coordinate mode '{}'", mode_line.trim()),
            })
        }
    };
    idx += 1;

    let inv = if direct {
        None
    } else {
        Some(cell.inv().ok_or(ParseError::Malformed {
            line: 3,
            message: "degenerate lattice, cannot convert cartesian coordinates".to_string(),
        })?)
    };

    let mut atoms = Vec::new();
    for (symbol, count) in symbols.iter().copied().zip(&counts) {
        let num = atomic_number_from_symbol(symbol)?;
        for _ in 0..*count {
            let v = parse_vec3(line(&lines, idx, "atom coordinates")?, idx, "a coordinate")?;
            let frac = match &inv {
                None => v,
                Some(inv) => inv.row_mul(v.map(|x| x * scale)),
            };
            atoms.push(AtomStruct::new(num, frac[0], frac[1], frac[2]));
            idx += 1;
        }
    }

    Ok(Crystal::new(lattice, atoms))
}

/// Write a VASP 5 POSCAR with fractional coordinates.
///
/// # Errors
/// `Element` if an atom's atomic number has no symbol, `Io` on write failure.
pub fn write_poscar<W>(crystal: &Crystal, title: &str, w: &mut W) -> Result<(), WriteError>
where
    W: Write,
{
    writeln!(w, "{title}")?;
    writeln!(w, "1.0")?;

    let cell = crystal.lattice().cell_matrix();
    for row in 0..3 {
        writeln!(
            w,
            " {:12.8} {:12.8} {:12.8}",
            cell[row][0], cell[row][1], cell[row][2]
        )?;
    }

    let composition = crystal.composition();

    for entry in &composition {
        write!(w, " {:<4}", symbol_from_atomic_number(entry.atomic_num)?)?;
    }
    writeln!(w)?;
    for entry in &composition {
        write!(w, " {:<4}", entry.count)?;
    }
    writeln!(w)?;

    writeln!(w, "Direct")?;
    for entry in &composition {
        for atom in crystal
            .atoms()
            .iter()
            .filter(|a| a.atomic_num() == entry.atomic_num)
        {
            writeln!(
                w,
                " {:12.8} {:12.8} {:12.8}",
                atom.x(),
                atom.y(),
                atom.z()
            )?;
        }
    }

    Ok(())
}
