use crate::cli::Cli;
use crate::domain::models::AreaResult;
use crate::services::output::{format_area, print_out};
use crate::services::parser::parse_queries;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub fn handle_area_command(cli: &Cli) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open input {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let results = compute_areas(reader)?;
    print_out(cli.json, &results, |r| r.formatted.clone())
}

/// Every query is parsed before anything is printed, so a fatal error leaves stdout empty.
pub fn compute_areas(reader: impl BufRead) -> anyhow::Result<Vec<AreaResult>> {
    let shapes = parse_queries(reader)?;
    Ok(shapes
        .iter()
        .map(|s| {
            let area = s.area();
            AreaResult {
                shape: s.keyword().to_string(),
                area,
                formatted: format_area(area),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::compute_areas;

    #[test]
    fn results_keep_input_order_and_skip_unknown_shapes() {
        let input = "4\ncircle 1\ntriangle 3 4 5\nrectangle 2 3\ncircle 0\n";
        let results = compute_areas(input.as_bytes()).expect("valid input");
        let rows: Vec<(&str, &str)> = results
            .iter()
            .map(|r| (r.shape.as_str(), r.formatted.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![("circle", "3.14"), ("rectangle", "6.00"), ("circle", "0.00")]
        );
    }

    #[test]
    fn bad_line_discards_earlier_results() {
        let input = "2\nrectangle 3 4\nrectangle 1\n";
        assert!(compute_areas(input.as_bytes()).is_err());
    }
}
