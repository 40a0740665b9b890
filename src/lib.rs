use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use model::{parse_instance, Config, Graph, ServiceCatalog};
use solution::{write_solution, Solution};
use solver::{build_objective, compute_distance_matrix, construct_solution, run_vnd};

/// Runs the whole instance -> solution pipeline for one `.dat` file already
/// read into memory. Exposed separately from [`run_batch`] so a single
/// instance can be driven without touching the filesystem.
pub fn solve_instance(contents: &str) -> (String, u64, u64) {
    let instance = parse_instance(contents);
    let config = Config::from_instance(&instance);
    let catalog = Arc::new(ServiceCatalog::build(&instance));
    let graph = Graph::build(&instance);

    let apsp_start = Instant::now();
    let matrix = Arc::new(compute_distance_matrix(&graph));
    let apsp_execution_ms = apsp_start.elapsed().as_millis() as u64;

    let total_start = Instant::now();
    let built = construct_solution(&catalog, &matrix, &config);
    if !built.unreachable.is_empty() {
        eprintln!(
            "warning: {} required service(s) are unreachable from the depot and were not serviced: {:?}",
            built.unreachable.len(),
            built.unreachable
        );
    }
    let initial_solution = built.solution.clone();
    let improved = run_vnd(built.solution, &config, &matrix, &catalog);
    let total_execution_ms = total_start.elapsed().as_millis() as u64;

    // the objective is the hierarchy-aware view of the same cost the
    // evaluator computed throughout local search; printing the before/after
    // comparison is cheap and surfaces the improvement VND made.
    let objective = build_objective(catalog.clone(), matrix.clone(), config.depot);
    let initial_value = objective.evaluate(initial_solution);
    let final_value = objective.evaluate(improved.clone());
    objective.print_objective_value_with_comparison(final_value.objective_value(), initial_value.objective_value());

    let text = write_solution(
        &improved,
        config.depot,
        config.capacity,
        &catalog,
        &matrix,
        total_execution_ms,
        apsp_execution_ms,
    );
    (text, total_execution_ms, apsp_execution_ms)
}

/// Batch driver: processes every `.dat` file in `input_dir` in
/// natural-numeric filename order, writing `sol-<name>` into `output_dir`.
/// A per-file failure is logged and skipped; only an environment-level
/// failure (missing input directory, uncreatable output directory) is
/// fatal.
pub fn run_batch(input_dir: &Path, output_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(output_dir)
        .map_err(|e| format!("cannot create output directory '{}': {e}", output_dir.display()))?;

    let mut dat_files = list_dat_files(input_dir)?;
    dat_files.sort_by_key(|path| natural_sort_key(path));

    if dat_files.is_empty() {
        println!("no .dat files found in '{}'", input_dir.display());
        return Ok(());
    }

    println!("processing {} instance(s) from '{}'", dat_files.len(), input_dir.display());
    let batch_start = Instant::now();

    for (index, input_path) in dat_files.iter().enumerate() {
        let file_name = input_path.file_name().unwrap().to_string_lossy().into_owned();
        println!("[{}/{}] {file_name}", index + 1, dat_files.len());

        let file_start = Instant::now();
        match process_one_file(input_path, output_dir, &file_name) {
            Ok(()) => {
                println!("  done in {} ms", file_start.elapsed().as_millis());
            }
            Err(e) => {
                eprintln!("  error processing '{file_name}': {e}");
            }
        }
    }

    println!(
        "finished {} instance(s) in {:.2}s, output in '{}'",
        dat_files.len(),
        batch_start.elapsed().as_secs_f64(),
        output_dir.display()
    );
    Ok(())
}

fn process_one_file(input_path: &Path, output_dir: &Path, file_name: &str) -> Result<(), String> {
    let contents = fs::read_to_string(input_path).map_err(|e| format!("read failed: {e}"))?;
    let (solution_text, _, _) = solve_instance(&contents);
    let output_path = output_dir.join(format!("sol-{file_name}"));
    fs::write(&output_path, solution_text).map_err(|e| format!("write failed: {e}"))
}

fn list_dat_files(input_dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(input_dir)
        .map_err(|e| format!("input directory '{}' not found: {e}", input_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("cannot read directory entry: {e}"))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("dat") {
            files.push(path);
        }
    }
    Ok(files)
}

/// Non-numeric filenames sort after every numeric one.
fn natural_sort_key(path: &Path) -> u64 {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_sort_key_extracts_digits() {
        assert_eq!(natural_sort_key(Path::new("bhw1.dat")), 1);
        assert_eq!(natural_sort_key(Path::new("bhw10.dat")), 10);
        assert_eq!(natural_sort_key(Path::new("bhw2.dat")), 2);
        assert_eq!(natural_sort_key(Path::new("nodigits.dat")), u64::MAX);
    }

    #[test]
    fn solves_a_single_service_instance_end_to_end() {
        let dat = "Capacity: 10\nDepot Node: 1\nReE.\nE1 2 3 7 3 1\nEDGE\nNrE1 1 2 5\n";
        let (text, _, _) = solve_instance(dat);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "18");
        assert_eq!(lines[1], "1");
    }

    #[test]
    fn solves_an_instance_with_no_required_services() {
        let dat = "Capacity: 10\nDepot Node: 1\n";
        let (text, _, _) = solve_instance(dat);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0");
        assert_eq!(lines[1], "0");
    }
}
