use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use gid_cli::input::{load_synonyms, mapping_output_path, read_labels};
use gid_ingest::{
    PrescriptionStore, default_database_path, map_to_prescriptions, write_prescriptions_csv,
};
use gid_map::{MappingEngine, search_elements, to_mapping_tsv};
use gid_model::{ElementProfile, ProjectPhase, catalog, find_profile};

use crate::cli::{CompareArgs, ElementsArgs, MapArgs, MatchArgs, PrescriptionsArgs};
use crate::summary::{
    print_catalog, print_comparison, print_elements, print_phases, print_prescription_matches,
    print_prescriptions, print_report,
};

pub fn run_phases() -> Result<()> {
    print_phases();
    Ok(())
}

pub fn run_elements(args: &ElementsArgs, database: Option<&Path>) -> Result<()> {
    let term = args.search.as_deref().unwrap_or_default();
    if args.from_catalog {
        let names: Vec<&str> = catalog().iter().map(|p| p.name).collect();
        let kept = search_elements(&names, term);
        let profiles: Vec<&ElementProfile> = catalog()
            .iter()
            .filter(|p| kept.iter().any(|name| name == p.name))
            .collect();
        print_catalog(&profiles);
        return Ok(());
    }

    let store = load_store(database)?;
    let rows: Vec<(String, usize)> = search_elements(store.elements(), term)
        .into_iter()
        .map(|element| {
            let count = store.records().iter().filter(|r| r.element == element).count();
            (element, count)
        })
        .collect();
    print_elements(&rows);
    Ok(())
}

pub fn run_prescriptions(args: &PrescriptionsArgs, database: Option<&Path>) -> Result<()> {
    let phase: ProjectPhase = args.phase.parse()?;
    let span = info_span!("prescriptions", element = %args.element, phase = %phase);
    let _guard = span.enter();

    let store = load_store(database)?;
    let element = store.resolve_element(&args.element)?.to_string();
    let prescriptions = store.prescriptions(phase, &element)?;
    info!(count = prescriptions.len(), "prescriptions selected");

    if let Some(path) = &args.export {
        let records: Vec<_> = prescriptions.iter().map(|p| &p.record).collect();
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        write_prescriptions_csv(BufWriter::new(file), &records)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "exported prescriptions");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prescriptions)?);
    } else {
        print_prescriptions(&element, phase, &prescriptions);
        if let Some(path) = &args.export {
            println!("Exported: {}", path.display());
        }
    }
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let profile = find_profile(&args.category)?;
    let span = info_span!("map", category = profile.name);
    let _guard = span.enter();

    let labels = read_labels(args.source.params.as_deref(), args.source.input.as_deref())?;
    if labels.is_empty() {
        warn!("no parameter names supplied");
    }
    let synonyms = load_synonyms(args.synonyms.as_deref())?;
    let engine = MappingEngine::new(profile.candidates())
        .with_synonyms(synonyms)
        .with_pset(profile.pset);
    let report = engine.map(&labels);
    info!(summary = %report.summary(), "mapping complete");

    let output = args
        .output
        .as_deref()
        .map(|target| write_mapping(target, profile, &to_mapping_tsv(&report)))
        .transpose()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(profile, &report);
        if let Some(path) = output {
            println!("Mapping file: {}", path.display());
        }
    }
    Ok(())
}

pub fn run_match(args: &MatchArgs, database: Option<&Path>) -> Result<()> {
    let phase: ProjectPhase = args.phase.parse()?;
    let span = info_span!("match", element = %args.element, phase = %phase);
    let _guard = span.enter();

    let labels = read_labels(args.source.params.as_deref(), args.source.input.as_deref())?;
    if labels.is_empty() {
        warn!("no parameter names supplied");
    }
    let synonyms = load_synonyms(args.synonyms.as_deref())?;
    let store = load_store(database)?;
    let element = store.resolve_element(&args.element)?.to_string();
    let records = store.filter(phase, &element)?;
    let matches = map_to_prescriptions(&labels, &records, Some(&synonyms));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        print_prescription_matches(&element, phase, &matches);
    }
    Ok(())
}

pub fn run_compare(args: &CompareArgs, database: Option<&Path>) -> Result<()> {
    let from: ProjectPhase = args.from.parse()?;
    let to: ProjectPhase = args.to.parse()?;
    let span = info_span!("compare", element = %args.element, from = %from, to = %to);
    let _guard = span.enter();

    let store = load_store(database)?;
    let comparison = store.compare_phases(&args.element, from, to)?;
    info!(
        added = comparison.added.len(),
        removed = comparison.removed.len(),
        "phase comparison complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print_comparison(&comparison);
    }
    Ok(())
}

fn load_store(database: Option<&Path>) -> Result<PrescriptionStore> {
    let path = database.map_or_else(default_database_path, Path::to_path_buf);
    PrescriptionStore::from_path(&path)
        .with_context(|| format!("load prescription database: {}", path.display()))
}

fn write_mapping(target: &Path, profile: &ElementProfile, contents: &str) -> Result<PathBuf> {
    let path = mapping_output_path(target, profile.name);
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote mapping file");
    Ok(path)
}
