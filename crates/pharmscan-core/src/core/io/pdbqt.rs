use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{Atom, RecordKind};
use crate::core::models::ligand::LigandPoseSet;
use crate::core::models::receptor::Receptor;
use nalgebra::Point3;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// Zero-based, end-exclusive column ranges of an ATOM/HETATM record.
const RECORD_COLS: (usize, usize) = (0, 6);
const SERIAL_COLS: (usize, usize) = (6, 11);
const NAME_COLS: (usize, usize) = (12, 16);
const RES_NAME_COLS: (usize, usize) = (17, 20);
const CHAIN_COLS: (usize, usize) = (21, 22);
const RES_SEQ_COLS: (usize, usize) = (22, 26);
const X_COLS: (usize, usize) = (30, 38);
const Y_COLS: (usize, usize) = (38, 46);
const Z_COLS: (usize, usize) = (46, 54);
const CHARGE_COLS: (usize, usize) = (70, 76);
const TYPE_COLS: (usize, usize) = (77, 79);

/// Shortest ATOM/HETATM line that still reaches the first AutoDock type column.
const MIN_ATOM_LINE_LEN: usize = 78;

#[derive(Debug, Error)]
pub enum PdbqtError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbqtParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbqtParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 78 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, (start, end): (usize, usize)) -> &str {
    let end = end.min(line.len());
    line.get(start..end).unwrap_or("").trim()
}

fn column_label((start, end): (usize, usize)) -> String {
    format!("{}-{}", start + 1, end)
}

fn parse_field<T: FromStr>(
    line: &str,
    line_num: usize,
    cols: (usize, usize),
    invalid: fn(String, String) -> PdbqtParseErrorKind,
) -> Result<T, PdbqtError> {
    let value = slice_and_trim(line, cols);
    value.parse().map_err(|_| PdbqtError::Parse {
        line: line_num,
        kind: invalid(column_label(cols), value.to_string()),
    })
}

fn invalid_int(columns: String, value: String) -> PdbqtParseErrorKind {
    PdbqtParseErrorKind::InvalidInt { columns, value }
}

fn invalid_float(columns: String, value: String) -> PdbqtParseErrorKind {
    PdbqtParseErrorKind::InvalidFloat { columns, value }
}

fn required_text(line: &str, line_num: usize, cols: (usize, usize)) -> Result<&str, PdbqtError> {
    let value = slice_and_trim(line, cols);
    if value.is_empty() {
        return Err(PdbqtError::Parse {
            line: line_num,
            kind: PdbqtParseErrorKind::MissingRequiredField {
                columns: column_label(cols),
            },
        });
    }
    Ok(value)
}

/// Parses a single ATOM/HETATM line into an [`Atom`].
///
/// `line_num` is 1-based and only used for error reporting.
pub fn parse_atom_line(line: &str, line_num: usize) -> Result<Atom, PdbqtError> {
    if line.len() < MIN_ATOM_LINE_LEN {
        return Err(PdbqtError::Parse {
            line: line_num,
            kind: PdbqtParseErrorKind::LineTooShort,
        });
    }

    let record = RecordKind::from_str(slice_and_trim(line, RECORD_COLS)).unwrap_or_default();
    let serial: usize = parse_field(line, line_num, SERIAL_COLS, invalid_int)?;
    let name = required_text(line, line_num, NAME_COLS)?;
    let residue_name = required_text(line, line_num, RES_NAME_COLS)?;
    let chain_id = slice_and_trim(line, CHAIN_COLS).chars().next().unwrap_or(' ');
    let residue_number: isize = parse_field(line, line_num, RES_SEQ_COLS, invalid_int)?;
    let x: f64 = parse_field(line, line_num, X_COLS, invalid_float)?;
    let y: f64 = parse_field(line, line_num, Y_COLS, invalid_float)?;
    let z: f64 = parse_field(line, line_num, Z_COLS, invalid_float)?;
    let partial_charge: f64 = parse_field(line, line_num, CHARGE_COLS, invalid_float)?;
    let ad_type = required_text(line, line_num, TYPE_COLS)?;

    Ok(Atom {
        record,
        serial,
        name: name.to_string(),
        residue_name: residue_name.to_string(),
        chain_id,
        residue_number,
        position: Point3::new(x, y, z),
        partial_charge,
        ad_type: ad_type.to_string(),
    })
}

fn record_type(line: &str) -> &str {
    slice_and_trim(line, RECORD_COLS)
}

/// Reads a receptor from a PDBQT file. Water residues are dropped.
pub struct ReceptorFile;

impl StructureFile for ReceptorFile {
    type Output = Receptor;
    type Error = PdbqtError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut atoms = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            match record_type(&line) {
                "ATOM" | "HETATM" => atoms.push(parse_atom_line(&line, line_num + 1)?),
                "END" => break,
                _ => {}
            }
        }

        if atoms.is_empty() {
            return Err(PdbqtError::MissingRecord("ATOM/HETATM records".into()));
        }

        let parsed = atoms.len();
        let receptor = Receptor::from_atoms(atoms);
        debug!(
            parsed,
            kept = receptor.len(),
            residues = receptor.residues().len(),
            "Receptor read."
        );
        Ok(receptor)
    }
}

/// Reads docked ligand poses from a PDBQT docking result. Every `MODEL` record opens
/// a new pose; atoms before the first `MODEL` form an implicit first pose.
pub struct PoseFile;

impl StructureFile for PoseFile {
    type Output = LigandPoseSet;
    type Error = PdbqtError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut poses = LigandPoseSet::new();
        let mut current: Option<Vec<Atom>> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            match record_type(&line) {
                "MODEL" => {
                    if let Some(atoms) = current.replace(Vec::new()) {
                        poses.push_pose(atoms);
                    }
                }
                "ENDMDL" => {
                    if let Some(atoms) = current.take() {
                        poses.push_pose(atoms);
                    }
                }
                "ATOM" | "HETATM" => {
                    let atom = parse_atom_line(&line, line_num + 1)?;
                    current.get_or_insert_with(Vec::new).push(atom);
                }
                _ => {}
            }
        }
        if let Some(atoms) = current.take() {
            poses.push_pose(atoms);
        }

        if poses.atom_count() == 0 {
            return Err(PdbqtError::MissingRecord("ATOM/HETATM records".into()));
        }

        debug!(
            poses = poses.pose_count(),
            atoms = poses.atom_count(),
            "Ligand poses read."
        );
        Ok(poses)
    }
}
