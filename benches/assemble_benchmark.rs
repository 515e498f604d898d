//! Benchmarks for table reassembly and style resolution.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic document.xml data.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docx_tables::{ConvertOptions, TableConverter};

const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Creates a body with `tables` tables of `rows` x `cols` cells.
fn create_document(tables: usize, rows: usize, cols: usize) -> String {
    let mut body = String::new();
    for t in 0..tables {
        body.push_str(&format!("<w:p><w:r><w:t>Caption {}</w:t></w:r></w:p>", t));
        body.push_str(r#"<w:tbl><w:tblPr><w:tblStyle w:val="Grid"/><w:tblLook w:val="04A0"/></w:tblPr>"#);
        for r in 0..rows {
            body.push_str("<w:tr>");
            for c in 0..cols {
                body.push_str(&format!(
                    r#"<w:tc><w:tcPr><w:tcW w:w="2000" w:type="dxa"/></w:tcPr><w:p><w:r><w:t>{}:{}</w:t></w:r></w:p></w:tc>"#,
                    r, c
                ));
            }
            body.push_str("</w:tr>");
        }
        body.push_str("</w:tbl>");
    }
    format!(r#"<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#, W, body)
}

fn create_styles() -> String {
    format!(
        r#"<w:styles xmlns:w="{}">
             <w:style w:type="table" w:default="1" w:styleId="TableNormal">
               <w:tblPr><w:tblCellMar><w:left w:w="108" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr>
             </w:style>
             <w:style w:type="table" w:styleId="Grid">
               <w:basedOn w:val="TableNormal"/>
               <w:tblPr><w:tblBorders><w:insideH w:val="single" w:sz="4" w:color="auto"/></w:tblBorders></w:tblPr>
               <w:tblStylePr w:type="firstRow"><w:rPr><w:b/></w:rPr><w:tcPr><w:shd w:fill="4472C4"/></w:tcPr></w:tblStylePr>
               <w:tblStylePr w:type="band1Horz"><w:tcPr><w:shd w:fill="D9E2F3"/></w:tcPr></w:tblStylePr>
             </w:style>
           </w:styles>"#,
        W
    )
}

/// Benchmark reassembly alone at various sizes.
fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    for (tables, rows) in [(1, 10), (10, 10), (10, 100)] {
        let xml = create_document(tables, rows, 5);
        let converter = TableConverter::new(ConvertOptions::new().with_resolve_styles(false));

        group.bench_function(format!("{}x{}_rows", tables, rows), |b| {
            b.iter(|| converter.convert(black_box(&xml)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the full pipeline with named style resolution.
fn bench_style_resolution(c: &mut Criterion) {
    let xml = create_document(10, 20, 5);
    let styles = create_styles();
    let converter = TableConverter::default().with_styles(&styles).unwrap();

    c.bench_function("resolve_10_tables", |b| {
        b.iter(|| converter.convert(black_box(&xml)).unwrap());
    });
}

/// Benchmark style sheet loading.
fn bench_style_sheet(c: &mut Criterion) {
    let styles = create_styles();

    c.bench_function("style_sheet_parse", |b| {
        b.iter(|| {
            docx_tables::StyleSheet::parse(black_box(&styles), &docx_tables::BasicFragmentResolver)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_assembly,
    bench_style_resolution,
    bench_style_sheet,
);
criterion_main!(benches);
