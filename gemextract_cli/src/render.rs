//! Console rendering of a pathway extraction
use std::fmt::{self, Write};

use gemextract_core::configuration::PathwayConfiguration;
use gemextract_core::pathway::pipeline::PathwayExtraction;

const RULE_WIDTH: usize = 60;

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn phase_breakdown(extraction: &PathwayExtraction) -> Result<String, fmt::Error> {
    let mut out = String::new();
    heading(&mut out, "Pathway reactions")?;
    writeln!(
        out,
        "Network: {} reactions, {} genes",
        extraction.network_reactions, extraction.network_genes
    )?;
    for (phase, reactions) in &extraction.classification.phases {
        writeln!(out, "  {:<12} {:>5}", phase, reactions.len())?;
    }
    writeln!(
        out,
        "  {:<12} {:>5}",
        "total",
        extraction.pathway_reactions().len()
    )?;
    for group in &extraction.core.groups {
        writeln!(
            out,
            "  + {} ({} added, {} already present, {} missing)",
            group.label,
            group.added.len(),
            group.already_present.len(),
            group.missing.len()
        )?;
    }
    writeln!(out, "Core set: {} reactions", extraction.core.len())?;
    Ok(out)
}

pub fn compartments(
    extraction: &PathwayExtraction,
    config: &PathwayConfiguration,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    heading(&mut out, "Compartment distribution")?;
    for (code, count) in &extraction.verification.compartments {
        writeln!(
            out,
            "  {:<28} {:>5}",
            format!("{} ({})", config.compartment_name(code), code),
            count
        )?;
    }
    for (phase, present) in &extraction.verification.phase_status {
        let mark = if *present { "[x]" } else { "[ ]" };
        writeln!(out, "  {} {}", mark, phase)?;
    }
    Ok(out)
}

pub fn gene_preview(
    extraction: &PathwayExtraction,
    preview_size: usize,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let evidence = &extraction.evidence;
    heading(&mut out, "Gene evidence")?;
    writeln!(out, "{} genes support the pathway", evidence.gene_count())?;
    for (gene_id, reactions) in evidence.preview(preview_size) {
        writeln!(
            out,
            "  {:<18} {:<12} {} reactions",
            gene_id,
            evidence.display_name(gene_id),
            reactions
        )?;
    }
    if evidence.gene_count() > preview_size {
        writeln!(out, "  ... {} more", evidence.gene_count() - preview_size)?;
    }
    Ok(out)
}

pub fn diagnostics(extraction: &PathwayExtraction) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let diagnostics = &extraction.diagnostics;
    heading(&mut out, "Diagnostics")?;
    if diagnostics.is_clean() {
        writeln!(out, "  nothing to report")?;
        return Ok(out);
    }
    if diagnostics.excluded_false_positives > 0 {
        writeln!(
            out,
            "  {} reactions vetoed by exclusion keywords",
            diagnostics.excluded_false_positives
        )?;
    }
    for missing in &diagnostics.missing_auxiliary {
        writeln!(
            out,
            "  {} reaction {} is not in the network",
            missing.group, missing.reaction
        )?;
    }
    for phase in &diagnostics.empty_phases {
        writeln!(out, "  phase {} has no reactions", phase)?;
    }
    if !diagnostics.reactions_without_evidence.is_empty() {
        writeln!(
            out,
            "  without gene evidence: {}",
            diagnostics.reactions_without_evidence.join(", ")
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemextract_core::metabolic_model::model::Model;
    use gemextract_core::pathway::pipeline::extract_pathway;
    use std::path::PathBuf;

    fn extraction() -> (PathwayExtraction, PathwayConfiguration) {
        let data_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("gemextract_core")
            .join("test_data")
            .join("test_models")
            .join("butyrate_toy.json");
        let model = Model::read_json(data_path).unwrap();
        let config = PathwayConfiguration::default();
        (extract_pathway(&model, &config).unwrap(), config)
    }

    #[test]
    fn breakdown_lists_groups() {
        let (extraction, _) = extraction();
        let text = phase_breakdown(&extraction).unwrap();
        assert!(text.contains("Network: 8 reactions, 9 genes"));
        assert!(text.contains("+ OXPHOS (1 added"));
        assert!(text.contains("Core set: 6 reactions"));
    }

    #[test]
    fn compartment_long_names() {
        let (extraction, config) = extraction();
        let text = compartments(&extraction, &config).unwrap();
        assert!(text.contains("Mitochondria (m)"));
        assert!(text.contains("[x] oxidation"));
    }

    #[test]
    fn preview_is_truncated() {
        let (extraction, _) = extraction();
        let text = gene_preview(&extraction, 2).unwrap();
        assert!(text.contains("4 genes support the pathway"));
        assert!(text.contains("ENSG00000005187"));
        assert!(!text.contains("ENSG00000183549"));
        assert!(text.contains("... 2 more"));
    }

    #[test]
    fn diagnostics_listed() {
        let (extraction, _) = extraction();
        let text = diagnostics(&extraction).unwrap();
        assert!(text.contains("1 reactions vetoed"));
        assert!(text.contains("Exchange reaction MAR09086 is not in the network"));
        assert!(text.contains("without gene evidence: MAR09809"));
    }
}
