//! Table reconstruction from a parsed document

use lazy_static::lazy_static;
use log::{debug, trace};
use scraper::{ElementRef, Selector};

use super::dialect::{normalize_cell_text, Dialect};
use super::matrix::DataMatrix;
use crate::data::entities::IGNORE_COLSPAN_STYLE;
use crate::grid::{GridSettings, HeaderLabel, MergeCell};
use crate::utils::error::{CodecWarning, WarningKind};

/// Largest colspan honored, as browsers clamp it
pub const MAX_COLSPAN: usize = 1000;
/// Largest rowspan honored, as browsers clamp it
pub const MAX_ROWSPAN: usize = 65534;

lazy_static! {
    static ref BODY_HEADER_CELL: Selector = Selector::parse("tbody th").unwrap();
}

/// Table section a row was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Head,
    Body,
    Foot,
}

/// Rows of a table grouped by role
struct ClassifiedRows<'a> {
    header: Vec<ElementRef<'a>>,
    fixed_top: Vec<ElementRef<'a>>,
    body: Vec<ElementRef<'a>>,
    fixed_bottom: Vec<ElementRef<'a>>,
    /// First row in document order, whatever its section
    first: Option<ElementRef<'a>>,
}

/// Rebuilds a grid descriptor from one `<table>` element
pub struct TableImporter {
    dialect: Dialect,
    has_row_headers: bool,
    matrix: DataMatrix,
    merges: Vec<MergeCell>,
    row_headers: Vec<String>,
    warnings: Vec<CodecWarning>,
}

impl TableImporter {
    /// Import `table` using the given whitespace dialect
    pub fn import(table: ElementRef<'_>, dialect: Dialect) -> (GridSettings, Vec<CodecWarning>) {
        let has_row_headers = table.select(&BODY_HEADER_CELL).next().is_some();
        let rows = classify_rows(table);

        let first_row_width: usize = rows
            .first
            .map(|tr| cells_of(tr).map(colspan_of).sum())
            .unwrap_or(0);
        let count_cols = first_row_width.saturating_sub(usize::from(has_row_headers));

        let data_rows: Vec<ElementRef<'_>> = rows
            .fixed_top
            .iter()
            .chain(&rows.body)
            .chain(&rows.fixed_bottom)
            .copied()
            .collect();

        debug!(
            "importing table: dialect={} rows={} cols={} header_rows={} row_headers={}",
            dialect.name(),
            data_rows.len(),
            count_cols,
            rows.header.len(),
            has_row_headers
        );

        let mut importer = TableImporter {
            dialect,
            has_row_headers,
            matrix: DataMatrix::new(data_rows.len(), count_cols),
            merges: Vec::new(),
            row_headers: Vec::new(),
            warnings: Vec::new(),
        };

        for (index, tr) in data_rows.iter().enumerate() {
            importer.process_row(index, *tr);
        }

        let mut settings = GridSettings::default();
        importer.apply_column_headers(&rows.header, &mut settings);

        if !rows.fixed_top.is_empty() {
            settings.fixed_rows_top = Some(rows.fixed_top.len());
        }
        if !rows.fixed_bottom.is_empty() {
            settings.fixed_rows_bottom = Some(rows.fixed_bottom.len());
        }

        let TableImporter {
            matrix,
            merges,
            row_headers,
            warnings,
            ..
        } = importer;

        if !merges.is_empty() {
            settings.merge_cells = Some(merges);
        }
        if !row_headers.is_empty() {
            settings.row_headers = Some(row_headers);
        }
        if matrix.rows() > 0 {
            settings.data = Some(matrix.into_data());
        }

        (settings, warnings)
    }

    /// Place every cell of one data row
    fn process_row(&mut self, row: usize, tr: ElementRef<'_>) {
        for cell in cells_of(tr) {
            let value = normalize_cell_text(&cell.inner_html(), self.dialect);

            if cell.value().name() == "th" {
                trace!("row {}: row header {:?}", row, value);
                self.row_headers.push(value);
                continue;
            }

            let Some(col) = self.matrix.first_vacant(row) else {
                self.warnings.push(CodecWarning::at_row(
                    WarningKind::DroppedCell,
                    format!("no vacant slot for cell {:?}", value),
                    row,
                ));
                continue;
            };

            let rowspan = rowspan_of(cell);
            let colspan = colspan_of(cell);

            if rowspan > 1 || colspan > 1 {
                let clipped = self.matrix.mark_merged(row, col, rowspan, colspan);
                let rowspan = rowspan.min(self.matrix.rows() - row);
                let colspan = colspan.min(self.matrix.cols() - col);

                if clipped {
                    self.warnings.push(CodecWarning::at_row(
                        WarningKind::ClippedSpan,
                        format!("span at column {} clipped to {}x{}", col, rowspan, colspan),
                        row,
                    ));
                }

                let ignore_merge = cell
                    .value()
                    .attr("style")
                    .is_some_and(|style| style.contains(IGNORE_COLSPAN_STYLE));
                if !ignore_merge {
                    self.merges.push(MergeCell::new(row, col, rowspan, colspan));
                }
            }

            self.matrix.set(row, col, value);
        }

        let missing = self.matrix.vacant_count(row);
        if missing > 0 {
            self.warnings.push(CodecWarning::at_row(
                WarningKind::ShortRow,
                format!("{} slot(s) left empty", missing),
                row,
            ));
        }
    }

    /// Fill `col_headers` or `nested_headers` from the `<thead>` header rows
    fn apply_column_headers(&self, header_rows: &[ElementRef<'_>], settings: &mut GridSettings) {
        let skip = usize::from(self.has_row_headers);

        let levels: Vec<Vec<(String, usize)>> = header_rows
            .iter()
            .map(|tr| {
                cells_of(*tr)
                    .skip(skip)
                    .map(|cell| {
                        (
                            normalize_cell_text(&cell.inner_html(), self.dialect),
                            colspan_of(cell),
                        )
                    })
                    .collect()
            })
            .collect();

        match levels.len() {
            0 => {}
            1 => {
                settings.col_headers = levels
                    .into_iter()
                    .next()
                    .map(|level| level.into_iter().map(|(label, _)| label).collect());
            }
            _ => {
                settings.nested_headers = Some(
                    levels
                        .into_iter()
                        .map(|level| {
                            level
                                .into_iter()
                                .map(|(label, colspan)| {
                                    if colspan > 1 {
                                        HeaderLabel::Spanning { label, colspan }
                                    } else {
                                        HeaderLabel::Plain(label)
                                    }
                                })
                                .collect()
                        })
                        .collect(),
                );
            }
        }
    }
}

fn classify_rows(table: ElementRef<'_>) -> ClassifiedRows<'_> {
    let mut rows = ClassifiedRows {
        header: Vec::new(),
        fixed_top: Vec::new(),
        body: Vec::new(),
        fixed_bottom: Vec::new(),
        first: None,
    };

    for child in table.children().filter_map(ElementRef::wrap) {
        let section = match child.value().name() {
            "thead" => Section::Head,
            "tbody" => Section::Body,
            "tfoot" => Section::Foot,
            "tr" => {
                rows.first.get_or_insert(child);
                rows.body.push(child);
                continue;
            }
            _ => continue,
        };

        for tr in child_elements(child, "tr") {
            rows.first.get_or_insert(tr);
            match section {
                Section::Head => {
                    if child_elements(tr, "td").next().is_some() {
                        rows.fixed_top.push(tr);
                    } else {
                        rows.header.push(tr);
                    }
                }
                Section::Body => rows.body.push(tr),
                Section::Foot => rows.fixed_bottom.push(tr),
            }
        }
    }

    rows
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

/// `<td>` and `<th>` children of a row
fn cells_of<'a>(tr: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
}

fn colspan_of(cell: ElementRef<'_>) -> usize {
    parse_span(cell.value().attr("colspan"), MAX_COLSPAN)
}

fn rowspan_of(cell: ElementRef<'_>) -> usize {
    parse_span(cell.value().attr("rowspan"), MAX_ROWSPAN)
}

/// Parse a span attribute the lenient way browsers do: leading digits count,
/// anything missing, invalid or zero is 1.
pub fn parse_span(attr: Option<&str>, max: usize) -> usize {
    let digits: String = attr
        .unwrap_or_default()
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return 1;
    }

    match digits.parse::<usize>() {
        Ok(0) => 1,
        Ok(n) => n.min(max),
        // Only overflow is left
        Err(_) => max,
    }
}
