use crate::core::models::pharmacophore::Pharmacophore;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

const REPORT_HEADER: [&str; 10] = [
    "rank",
    "score",
    "member",
    "residue",
    "receptor_atom",
    "ligand_atom",
    "ligand_serial",
    "interaction",
    "pose",
    "distance",
];

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    rank: usize,
    score: u32,
    member: usize,
    residue: String,
    receptor_atom: &'a str,
    ligand_atom: &'a str,
    ligand_serial: usize,
    interaction: &'static str,
    pose: usize,
    distance: f64,
}

/// Writes ranked pharmacophores as CSV, one row per member interaction.
///
/// Ranks and member numbers are 1-based and follow the order of `pharmacophores`.
/// An empty slice still produces the header line.
pub fn write_csv<W: Write>(pharmacophores: &[Pharmacophore], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if pharmacophores.is_empty() {
        csv_writer.write_record(REPORT_HEADER)?;
    }

    for (rank, pharmacophore) in pharmacophores.iter().enumerate() {
        for (member, interaction) in pharmacophore.members().iter().enumerate() {
            csv_writer.serialize(ReportRow {
                rank: rank + 1,
                score: pharmacophore.score(),
                member: member + 1,
                residue: interaction.residue().to_string(),
                receptor_atom: &interaction.key.receptor_atom,
                ligand_atom: &interaction.key.ligand_atom,
                ligand_serial: interaction.key.ligand_serial,
                interaction: interaction.kind().label(),
                pose: interaction.pose(),
                distance: interaction.distance,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_to_path<P: AsRef<Path>>(
    pharmacophores: &[Pharmacophore],
    path: P,
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_csv(pharmacophores, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::interaction::{InteractionKey, RetainedInteraction};
    use crate::core::models::residue::ResidueIdentity;
    use crate::core::rules::kind::InteractionKind;
    use tempfile::tempdir;

    fn retained(res: &str, num: isize, kind: InteractionKind) -> RetainedInteraction {
        RetainedInteraction {
            key: InteractionKey {
                residue: ResidueIdentity::new(res, num),
                receptor_atom: "NZ".into(),
                ligand_atom: "O2".into(),
                ligand_serial: 6,
                kind,
                pose: 2,
            },
            distance: 3.25,
        }
    }

    #[test]
    fn write_csv_emits_header_and_one_row_per_member() {
        let pharmacophores = vec![Pharmacophore::new(vec![
            retained("LYS", 47, InteractionKind::PositiveIonNegativePartial),
            retained("LEU", 80, InteractionKind::Hydrophobic),
        ])];

        let mut buffer = Vec::new();
        write_csv(&pharmacophores, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "rank,score,member,residue,receptor_atom,ligand_atom,ligand_serial,interaction,pose,distance"
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1,5,1,LYS47,NZ,O2,6,positive ion - negative partial charge,2,3.25"
        );
        assert_eq!(lines[2], "1,5,2,LEU80,NZ,O2,6,hydrophobic interaction,2,3.25");
    }

    #[test]
    fn write_csv_with_no_pharmacophores_writes_only_the_header() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "rank,score,member,residue,receptor_atom,ligand_atom,ligand_serial,interaction,pose,distance\n"
        );
    }

    #[test]
    fn write_csv_to_path_creates_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let pharmacophores = vec![Pharmacophore::new(vec![retained(
            "SER",
            12,
            InteractionKind::HydrogenBond,
        )])];

        write_csv_to_path(&pharmacophores, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("SER12"));
        assert!(content.contains("hydrogen bonding"));
    }
}
