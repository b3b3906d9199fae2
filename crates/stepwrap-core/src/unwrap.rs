use crate::error::Result;
use crate::indent::{IndentUnit, expand_tabs, strip_one_unit};
use crate::line_ending::LineEnding;
use crate::matcher::LineMatcher;
use crate::scan::scan_blocks;
use crate::template::WrapperTemplate;

/// Remove every wrapped block in the selection, un-indenting the lines each
/// block contained by one unit per enclosing block.
///
/// Fails with [`StepwrapError::UnbalancedSelection`](crate::error::StepwrapError)
/// when a marker has no partner inside the selection.
pub fn unwrap(
    text: &str,
    template: &WrapperTemplate,
    unit: &IndentUnit,
    line_ending: LineEnding,
) -> Result<String> {
    let terminator = line_ending.as_str();
    let expanded = expand_tabs(text, unit);
    let trimmed = expanded.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let mut lines: Vec<String> = trimmed.split(terminator).map(str::to_string).collect();
    let matcher = LineMatcher::new(template);
    let blocks = scan_blocks(&lines, &matcher)?;

    // Indices stay stable for the whole pass; removed lines are only flagged.
    let mut removed = vec![false; lines.len()];
    for block in &blocks {
        for index in block.opening.indices() {
            removed[index] = true;
        }
        removed[block.closing] = true;

        for index in block.interior() {
            if !removed[index] {
                let stripped = strip_one_unit(&lines[index], unit).to_string();
                lines[index] = stripped;
            }
        }
    }

    let mut out = String::with_capacity(trimmed.len() + terminator.len());
    for (line, _) in lines.iter().zip(&removed).filter(|(_, gone)| !**gone) {
        out.push_str(line);
        out.push_str(terminator);
    }

    tracing::debug!(lines = lines.len(), blocks = blocks.len(), "unwrapped selection");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Imbalance, StepwrapError};
    use crate::wrap::wrap;
    use pretty_assertions::assert_eq;

    fn template() -> WrapperTemplate {
        WrapperTemplate::new(["Check.Step(\"NAME\", delegate", "{"], ["});"]).unwrap()
    }

    fn four() -> IndentUnit {
        IndentUnit::new(4).unwrap()
    }

    fn run(text: &str) -> Result<String> {
        unwrap(text, &template(), &four(), LineEnding::Lf)
    }

    #[test]
    fn removes_a_single_block() {
        let text = "Check.Step(\"NAME\", delegate\n{\n    int x = 1;\n    int y = 2;\n});\n";
        assert_eq!(run(text).unwrap(), "int x = 1;\nint y = 2;\n");
    }

    #[test]
    fn removes_nested_blocks() {
        let text = "\
Check.Step(\"outer\", delegate
{
    a();
    Check.Step(\"inner\", delegate
    {
        b();
        c();
    });
    d();
});
";
        assert_eq!(run(text).unwrap(), "a();\nb();\nc();\nd();\n");
    }

    #[test]
    fn removes_sibling_blocks_and_keeps_surrounding_code() {
        let text = "\
setup();
Check.Step(\"one\", delegate {
    a();
});

Check.Step(\"two\", delegate
{
    b();
});
teardown();
";
        assert_eq!(run(text).unwrap(), "setup();\na();\n\nb();\nteardown();\n");
    }

    #[test]
    fn keeps_relative_indentation_of_the_interior() {
        let text = "    Check.Step(\"x\", delegate\n    {\n        if (ok) {\n            go();\n        }\n    });\n";
        assert_eq!(
            run(text).unwrap(),
            "    if (ok) {\n        go();\n    }\n"
        );
    }

    #[test]
    fn shallow_interior_lines_are_left_alone() {
        let text = "Check.Step(\"x\", delegate\n{\n  two();\nzero();\n});\n";
        assert_eq!(run(text).unwrap(), "  two();\nzero();\n");
    }

    #[test]
    fn tabs_are_expanded_before_matching() {
        let text = "\tCheck.Step(\"x\", delegate\n\t{\n\t\tgo();\n\t});\n";
        assert_eq!(run(text).unwrap(), "    go();\n");
    }

    #[test]
    fn closing_only_is_unbalanced() {
        let err = run("});\n").unwrap_err();
        assert!(matches!(
            err,
            StepwrapError::UnbalancedSelection(Imbalance::UnmatchedClosing { line: 1 })
        ));
    }

    #[test]
    fn opening_only_is_unbalanced() {
        let err = run("Check.Step(\"x\", delegate\n{\n    go();\n").unwrap_err();
        assert!(matches!(
            err,
            StepwrapError::UnbalancedSelection(Imbalance::UnclosedOpening { line: 1 })
        ));
    }

    #[test]
    fn empty_selection_stays_empty() {
        assert_eq!(run("").unwrap(), "");
        assert_eq!(run("\n\n").unwrap(), "");
    }

    #[test]
    fn selection_without_blocks_is_reemitted() {
        assert_eq!(run("a();\n  b();").unwrap(), "a();\n  b();\n");
    }

    #[test]
    fn wrap_then_unwrap_restores_consistent_input() {
        let original = "if (x) {\n    y();\n}\n";
        let wrapped = wrap(original, &template(), &four(), LineEnding::Lf);
        assert_eq!(run(&wrapped).unwrap(), original);

        let indented = "        a();\n        b();\n";
        let wrapped = wrap(indented, &template(), &four(), LineEnding::Lf);
        assert_eq!(run(&wrapped).unwrap(), indented);
    }

    #[test]
    fn wrap_then_unwrap_with_blank_lines_inside() {
        let original = "a();\n\nb();\n";
        let wrapped = wrap(original, &template(), &four(), LineEnding::Lf);
        assert_eq!(run(&wrapped).unwrap(), original);
    }

    #[test]
    fn crlf_selection_round_trips() {
        let original = "a();\r\nb();\r\n";
        let wrapped = wrap(original, &template(), &four(), LineEnding::CrLf);
        let restored = unwrap(&wrapped, &template(), &four(), LineEnding::CrLf).unwrap();
        assert_eq!(restored, original);
    }
}
