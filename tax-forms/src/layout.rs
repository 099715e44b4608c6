//! Positional layout shared by forms with repeating table rows.

use tax_core::{Diagnostic, FieldValue, FormTag};

/// One fixed-width row per item, at most `count` rows, with unused rows
/// left blank so the total width never depends on the input.
pub(crate) fn rows<T, const W: usize>(
    items: impl IntoIterator<Item = T>,
    count: usize,
    row: impl Fn(T) -> [FieldValue; W],
) -> Vec<FieldValue> {
    let mut fields: Vec<FieldValue> = items.into_iter().take(count).flat_map(row).collect();
    fields.resize(count * W, FieldValue::Absent);
    fields
}

/// Reports items that [`rows`] leaves off for lack of space.
pub(crate) fn overflow(
    form: FormTag,
    line: &'static str,
    what: &str,
    len: usize,
    count: usize,
) -> Option<Diagnostic> {
    (len > count).then(|| {
        Diagnostic::new(
            form,
            line,
            format!("{len} {what} reported but only {count} rows are printed"),
        )
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pads_missing_rows_with_blanks() {
        let fields = rows(["a"], 2, |name| [name.into(), FieldValue::Flag(true)]);

        assert_eq!(
            fields,
            vec![
                FieldValue::Text("a".to_string()),
                FieldValue::Flag(true),
                FieldValue::Absent,
                FieldValue::Absent,
            ]
        );
    }

    #[test]
    fn drops_items_beyond_row_count() {
        let fields = rows(["a", "b", "c"], 2, |name| [name.into()]);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].as_text(), Some("b"));
    }

    #[test]
    fn overflow_only_when_items_exceed_rows() {
        assert_eq!(overflow(FormTag::F1040, "Dependents", "dependents", 4, 4), None);

        let diagnostic = overflow(FormTag::F1040, "Dependents", "dependents", 5, 4).unwrap();
        assert_eq!(diagnostic.form, FormTag::F1040);
        assert_eq!(
            diagnostic.message,
            "5 dependents reported but only 4 rows are printed"
        );
    }
}
