//! Utility functions for Descartes.

use arboard::Clipboard;

use crate::error::Result;
use crate::graph::GraphScene;
use crate::store::FunctionList;

/// Copy the stored function list to the clipboard.
pub fn copy_function_list(functions: &FunctionList) -> Result<()> {
    copy_text(&function_list_text(functions))
}

/// Copy the sampled plot data to the clipboard.
pub fn copy_plot_data(scene: &GraphScene) -> Result<()> {
    copy_text(&plot_data_text(scene))
}

fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Build a numbered listing of the stored functions, in plot order.
pub fn function_list_text(functions: &FunctionList) -> String {
    let mut text = String::new();

    for (idx, function) in functions.iter().enumerate() {
        text.push_str(&format!("{:>2}. {}\n", idx + 1, function.label()));
    }

    text
}

/// Build the scene's sampled data as a tab-separated table: an x column
/// plus one column per curve.
pub fn plot_data_text(scene: &GraphScene) -> String {
    let mut text = String::from("x");
    for curve in &scene.curves {
        text.push('\t');
        text.push_str(&curve.label);
    }
    text.push('\n');

    // Every curve samples the same grid, so the first one provides x.
    let Some(first) = scene.curves.first() else {
        return text;
    };

    for (row, &(x, _)) in first.points.iter().enumerate() {
        text.push_str(&format_sample(x));
        for curve in &scene.curves {
            text.push('\t');
            let y = curve.points.get(row).map(|&(_, y)| y).unwrap_or(f64::NAN);
            text.push_str(&format_sample(y));
        }
        text.push('\n');
    }

    text
}

fn format_sample(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse_statement;
    use crate::plot::Curve;

    #[test]
    fn function_list_text_numbers_in_order() {
        let mut functions = FunctionList::new();
        functions.add(parse_statement("y = x^2").unwrap());
        functions.add(parse_statement("y = sin(x)").unwrap());

        let text = function_list_text(&functions);
        assert_eq!(text, " 1. y = x**2\n 2. y = sin(x)\n");
    }

    #[test]
    fn plot_data_text_is_tab_separated() {
        let mut scene = GraphScene::new();
        scene.curves.push(Curve {
            label: "y = x".to_string(),
            index: 0,
            points: vec![(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)],
        });
        scene.curves.push(Curve {
            label: "y = 1/x".to_string(),
            index: 1,
            points: vec![(-1.0, -1.0), (0.0, f64::INFINITY), (1.0, 1.0)],
        });

        let text = plot_data_text(&scene);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x\ty = x\ty = 1/x");
        assert_eq!(lines[1], "-1\t-1\t-1");
        assert_eq!(lines[2], "0\t0\tinf");
        assert_eq!(lines[3], "1\t1\t1");
    }

    #[test]
    fn plot_data_text_spells_non_finite_samples() {
        assert_eq!(format_sample(f64::NAN), "nan");
        assert_eq!(format_sample(f64::INFINITY), "inf");
        assert_eq!(format_sample(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_sample(0.5), "0.5");
    }

    #[test]
    fn plot_data_text_empty_scene_is_header_only() {
        let scene = GraphScene::new();
        assert_eq!(plot_data_text(&scene), "x\n");
    }
}
