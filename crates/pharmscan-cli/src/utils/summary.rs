use pharmscan::core::models::pharmacophore::Pharmacophore;
use pharmscan::workflows::analyze::AnalysisResult;
use std::fmt::Write;

/// Formats the ranked pharmacophores of an analysis for the console.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} candidate interaction(s), {} retained, {} pharmacophore(s) generated.",
        result.candidate_count,
        result.retained.len(),
        result.total_generated
    );
    for (rank, pharmacophore) in result.pharmacophores.iter().enumerate() {
        render_pharmacophore(&mut out, rank + 1, pharmacophore);
    }
    out
}

fn render_pharmacophore(out: &mut String, rank: usize, pharmacophore: &Pharmacophore) {
    let _ = writeln!(out, "\n#{:<3} score {}", rank, pharmacophore.score());
    for member in pharmacophore.members() {
        let key = &member.key;
        let _ = writeln!(
            out,
            "     {:<8} {:<4} -> {:<4} (serial {:>3})  {:<44} pose {:<3} {:>5.2} A",
            key.residue.to_string(),
            key.receptor_atom,
            key.ligand_atom,
            key.ligand_serial,
            key.kind.label(),
            key.pose,
            member.distance
        );
    }
}
