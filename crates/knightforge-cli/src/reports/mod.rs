use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use itertools::Itertools;
use knightforge_core::board::Board;
use knightforge_core::core_types::{Cell as Square, Score, Weights};
use knightforge_core::scoring::step_score;
use knightforge_core::solver::{Solution, SolveReport};
use serde::Serialize;

pub fn print_board_grid(board: &Board) {
    println!("\nBoard ({0}x{0}):", board.size());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    // Ranks top-down so the grid reads like a chess diagram.
    for row in (0..board.size()).rev() {
        let mut cells = vec![Cell::new((row + 1).to_string())];
        for col in 0..board.size() {
            let category = board.category(Square::new(row as u8, col as u8));
            cells.push(Cell::new(category.to_string()).set_alignment(CellAlignment::Center));
        }
        table.add_row(cells);
    }

    let mut footer = vec![Cell::new(" ")];
    for col in 0..board.size() {
        let file = (b'a' + col as u8) as char;
        footer.push(Cell::new(file.to_string()).set_alignment(CellAlignment::Center));
    }
    table.add_row(footer);

    println!("{}", table);
}

pub fn path_string(path: &[Square]) -> String {
    path.iter().map(Square::to_string).join(",")
}

/// The classic one-line answer format: A,B,C followed by both trips.
pub fn submission_line(solution: &Solution) -> String {
    let trips = solution.paths.iter().map(|p| path_string(p)).join(",");
    format!(
        "{},{},{},{}",
        solution.weights.a, solution.weights.b, solution.weights.c, trips
    )
}

pub fn print_solution(solution: &Solution) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec!["Weights".to_string(), solution.weights.to_string()]);
    table.add_row(vec!["A+B+C".to_string(), solution.weight_sum().to_string()]);
    for (i, path) in solution.paths.iter().enumerate() {
        table.add_row(vec![format!("Trip {}", i + 1), path_string(path)]);
    }
    println!("\n{}", table);
}

pub fn print_score_trace(board: &Board, path: &[Square], weights: Weights, initial: Score) {
    if path.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec!["Step", "Move", "Op", "Score"]);
    table.add_row(vec![
        "0".to_string(),
        path[0].to_string(),
        "seed".to_string(),
        initial.to_string(),
    ]);

    let mut score = initial;
    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let w = weights.get(board.category(to));
        let op = if board.category(from) == board.category(to) {
            format!("+{}", w)
        } else {
            format!("x{}", w)
        };
        score = step_score(board, from, to, weights, score);
        table.add_row(vec![
            (i + 1).to_string(),
            format!("{} -> {}", from, to),
            op,
            score.to_string(),
        ]);
    }
    println!("{}", table);
}

#[derive(Serialize)]
pub struct SearchOutput {
    pub weights: Option<Weights>,
    pub weight_sum: Option<u32>,
    pub trips: Vec<String>,
    pub evaluated: usize,
    pub accepted: usize,
    pub elapsed_secs: f64,
}

pub fn search_output(report: &SolveReport) -> SearchOutput {
    SearchOutput {
        weights: report.best.as_ref().map(|s| s.weights),
        weight_sum: report.best.as_ref().map(Solution::weight_sum),
        trips: report
            .best
            .as_ref()
            .map(|s| s.paths.iter().map(|p| path_string(p)).collect())
            .unwrap_or_default(),
        evaluated: report.evaluated,
        accepted: report.accepted,
        elapsed_secs: report.elapsed.as_secs_f64(),
    }
}
