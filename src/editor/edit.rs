use std::io::{self, BufRead, Write};

use super::prompt_line;
use crate::models::Figure;

/// Interactively edit a figure in place
///
/// Shows the current values, then asks for a new name, width and height.
/// An empty answer (or end of input) keeps the current value. A width or
/// height that does not parse is reported and the field is left unchanged.
pub fn edit_figure(
    figure: &mut Figure,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Editing Figure:")?;
    writeln!(output, "Name: {}", figure.name)?;
    writeln!(output, "Width: {}", figure.width)?;
    writeln!(output, "Height: {}", figure.height)?;

    let name = prompt_line(
        input,
        output,
        "Enter new name (or press Enter to keep the current value):",
    )?;
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        log::debug!("Renaming figure '{}' to '{}'", figure.name, name);
        figure.name = name;
    }

    edit_dimension(input, output, "width", &mut figure.width)?;
    edit_dimension(input, output, "height", &mut figure.height)?;

    writeln!(output, "Figure edited successfully.")?;
    Ok(())
}

fn edit_dimension(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &str,
    value: &mut f64,
) -> io::Result<()> {
    let prompt = format!(
        "Enter new {} (or press Enter to keep the current value):",
        field
    );
    let Some(answer) = prompt_line(input, output, &prompt)? else {
        return Ok(());
    };
    if answer.is_empty() {
        return Ok(());
    }

    match answer.trim().parse::<f64>() {
        Ok(parsed) => {
            log::debug!("Changing {} from {} to {}", field, value, parsed);
            *value = parsed;
        }
        Err(e) => {
            log::debug!("Rejected {} input {:?}: {}", field, answer, e);
            writeln!(
                output,
                "Invalid input for {}. {} not changed.",
                field,
                capitalize(field)
            )?;
        }
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_edit(figure: &mut Figure, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        edit_figure(figure, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_edit_all_fields() {
        let mut figure = Figure::new("Box", 3.5, 2.0);
        let output = run_edit(&mut figure, "Crate\n10\n 4.25 \n");

        assert_eq!(figure, Figure::new("Crate", 10.0, 4.25));
        assert!(output.contains("Name: Box"));
        assert!(output.contains("Width: 3.5"));
        assert!(output.contains("Height: 2\n"));
        assert!(output.ends_with("Figure edited successfully.\n"));
    }

    #[test]
    fn test_empty_answers_keep_values() {
        let mut figure = Figure::new("Box", 3.5, 2.0);
        run_edit(&mut figure, "\n\n\n");
        assert_eq!(figure, Figure::new("Box", 3.5, 2.0));
    }

    #[test]
    fn test_end_of_input_keeps_values() {
        let mut figure = Figure::new("Box", 3.5, 2.0);
        run_edit(&mut figure, "Crate\n");
        assert_eq!(figure, Figure::new("Crate", 3.5, 2.0));
    }

    #[test]
    fn test_invalid_numbers_are_reported() {
        let mut figure = Figure::new("Box", 3.5, 2.0);
        let output = run_edit(&mut figure, "\nwide\ntall\n");

        assert_eq!(figure, Figure::new("Box", 3.5, 2.0));
        assert!(output.contains("Invalid input for width. Width not changed."));
        assert!(output.contains("Invalid input for height. Height not changed."));
    }

    #[test]
    fn test_one_invalid_field_does_not_block_others() {
        let mut figure = Figure::new("Box", 3.5, 2.0);
        run_edit(&mut figure, "\nabc\n7\n");
        assert_eq!(figure, Figure::new("Box", 3.5, 7.0));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("width"), "Width");
        assert_eq!(capitalize(""), "");
    }
}
