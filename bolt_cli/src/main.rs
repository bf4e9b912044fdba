//! # Boltline CLI Application
//!
//! Terminal front end for the bolted joint calculation. Loads the thread
//! and material catalogs (bundled or from TOML files), resolves the
//! selection into a joint input and prints the analysis.
//!
//! ```text
//! bolt_cli --thread M12 --material 8.8 --kb 500 --kc 1500 --preload 70 --force 5
//! bolt_cli --thread Custom --diameter 16 --pitch 2 --material Custom --strength 800 ...
//! bolt_cli --list
//! ```

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bolt_core::calculations::{calculate, JointInput, JointParameters, JointResult};
use bolt_core::catalog::{
    build_material_catalog, build_thread_catalog, parse_material_table, parse_thread_table, Catalog,
    MaterialSpec, ThreadSpec, CUSTOM_KEY, DEFAULT_MATERIALS_TOML, DEFAULT_THREADS_TOML,
};
use bolt_core::equations::stress_area;
use bolt_core::errors::{CalcError, CalcResult};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bolt_cli")]
#[command(about = "Bolted joint preload and load-sharing analysis")]
struct Args {
    /// Thread name from the catalog ("Custom" to enter geometry)
    #[arg(long, default_value = "M12")]
    thread: String,

    /// Material name from the catalog ("Custom" to enter strength)
    #[arg(long, default_value = "8.8")]
    material: String,

    /// Diameter basis d (mm); required for a Custom thread, overrides a catalog thread
    #[arg(long, requires = "pitch")]
    diameter: Option<f64>,

    /// Thread pitch P (mm); required for a Custom thread, overrides a catalog thread
    #[arg(long, requires = "diameter")]
    pitch: Option<f64>,

    /// Tensile strength (MPa); required for a Custom material, overrides a catalog material
    #[arg(long)]
    strength: Option<f64>,

    /// Bolt axial stiffness Kb (kN/mm)
    #[arg(long, default_value_t = 500.0)]
    kb: f64,

    /// Clamped parts axial stiffness Kc (kN/mm)
    #[arg(long, default_value_t = 1500.0)]
    kc: f64,

    /// Preload as percent of breaking load
    #[arg(long, default_value_t = 70.0)]
    preload: f64,

    /// External axial force (kN)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    force: f64,

    /// Thread table (TOML) replacing the bundled one
    #[arg(long)]
    threads: Option<PathBuf>,

    /// Material table (TOML) replacing the bundled one
    #[arg(long)]
    materials: Option<PathBuf>,

    /// List catalog entries and exit
    #[arg(long)]
    list: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CalcResult<()> {
    let threads = build_thread_catalog(parse_thread_table(&read_table(
        args.threads.as_deref(),
        DEFAULT_THREADS_TOML,
    )?)?);
    let materials = build_material_catalog(parse_material_table(&read_table(
        args.materials.as_deref(),
        DEFAULT_MATERIALS_TOML,
    )?)?);

    if args.list {
        print_catalogs(&threads, &materials);
        return Ok(());
    }

    let thread = threads.lookup(&args.thread)?;
    let material = materials.lookup(&args.material)?;

    let params = JointParameters {
        stress_area_mm2: args.diameter.zip(args.pitch).map(|(d, p)| stress_area(d, p)),
        tensile_strength_mpa: args.strength,
        bolt_stiffness_kn_per_mm: args.kb,
        clamp_stiffness_kn_per_mm: args.kc,
        preload_percent: args.preload,
        external_force_kn: args.force,
    };
    let input = JointInput::from_selection(thread, material, params)?;

    if let Err(e) = input.validate() {
        tracing::warn!(code = e.error_code(), "{}", e);
    }

    let result = calculate(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(args, &input, &result);
    }
    Ok(())
}

fn read_table(path: Option<&Path>, bundled: &str) -> CalcResult<String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading catalog table");
            std::fs::read_to_string(path)
                .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
        }
        None => Ok(bundled.to_string()),
    }
}

fn print_catalogs(threads: &Catalog<ThreadSpec>, materials: &Catalog<MaterialSpec>) {
    println!("Threads:");
    for (name, spec) in threads.iter() {
        match spec.geometry() {
            Some(g) => println!(
                "  {:<8} D={:<6} d={:<8} P={:<5} As={:.2} mm²",
                name, g.major_diameter_mm, g.diameter_mm, g.pitch_mm, g.stress_area_mm2
            ),
            None => println!("  {:<8} (enter --diameter and --pitch)", name),
        }
    }
    println!();
    println!("Materials:");
    for (name, spec) in materials.iter() {
        match spec.tensile_strength_mpa {
            Some(sb) => println!("  {:<8} σB={:<6} {}", name, sb, spec.description),
            None => println!("  {:<8} {} (enter --strength)", name, spec.description),
        }
    }
}

fn print_report(args: &Args, input: &JointInput, result: &JointResult) {
    println!("═══════════════════════════════════════");
    println!("  BOLTED JOINT ANALYSIS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Thread:   {} (As = {} mm²)", selection_label(&args.thread, args.diameter.is_some()), fmt(input.stress_area_mm2, 2));
    println!("  Material: {} (σB = {} MPa)", selection_label(&args.material, args.strength.is_some()), fmt(input.tensile_strength_mpa, 0));
    println!("  Kb = {} kN/mm, Kc = {} kN/mm", fmt(input.bolt_stiffness_kn_per_mm, 1), fmt(input.clamp_stiffness_kn_per_mm, 1));
    println!("  Preload:  {}% of breaking load", fmt(input.preload_percent, 1));
    println!("  External: {} kN", fmt(input.external_force_kn, 2));
    println!();
    println!("Forces:");
    println!("  Breaking load Fu = {} kN", fmt(result.breaking_load_kn, 2));
    println!("  Preload       W0 = {} kN", fmt(result.preload_kn, 2));
    println!("  Load factor   φ  = {}", fmt(result.load_factor, 4));
    println!("  ΔWb = {} kN, ΔWc = {} kN", fmt(result.bolt_load_increment_kn, 2), fmt(result.clamp_load_relief_kn, 2));
    println!("  Bolt tension  Wb = {} kN", fmt(result.bolt_force_kn, 2));
    println!("  Clamp force   Wc = {} kN", fmt(result.clamp_force_kn, 2));
    println!();
    println!("Deformations:");
    println!("  Bolt elongation    = {} mm", fmt(result.bolt_elongation_mm, 4));
    println!("  Clamp compression  = {} mm", fmt(result.clamp_compression_mm, 4));
    println!("  Added under load   = {} mm", fmt(result.added_deformation_mm, 4));
    println!();
    println!("Risk Checks:");
    println!("  Separation: {} (at W = {} kN)", status_icon(!result.loosening_danger), fmt(result.loosening_force_kn, 2));
    println!("  Fracture:   {} (at W = {} kN)", status_icon(!result.breakage_danger), fmt(result.breakage_force_kn, 2));
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {} (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition()
    );
    println!("═══════════════════════════════════════");
}

/// Catalog name, marked when a manual value replaced the catalog one
fn selection_label(name: &str, manual: bool) -> String {
    if manual && name != CUSTOM_KEY {
        format!("{} (override)", name)
    } else {
        name.to_string()
    }
}

/// Fixed-precision number, "N/A" when non-finite
fn fmt(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        "N/A".to_string()
    }
}

fn status_icon(ok: bool) -> &'static str {
    if ok { "[OK]" } else { "[DANGER]" }
}
