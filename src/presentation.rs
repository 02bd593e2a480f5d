// src/presentation.rs
use crate::config::Config;
use crate::engine::DocumentReport;
use crate::options::{Listings, OutputFormat};
use std::io::Write;

/// Column totals over every analyzed document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub words: usize,
    pub chars: usize,
    pub chars_no_spaces: usize,
    pub images: usize,
    pub emoji: usize,
    pub urls: usize,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[DocumentReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, r| Self {
            documents: acc.documents + 1,
            words: acc.words + r.content.word_count(),
            chars: acc.chars + r.content.total_characters(),
            chars_no_spaces: acc.chars_no_spaces + r.content.characters_without_spaces(),
            images: acc.images + r.content.image_count(),
            emoji: acc.emoji + r.content.emoji_count(),
            urls: acc.urls + r.content.urls().len(),
        })
    }
}

/// Emit reports to the configured output (a file or stdout).
///
/// # Errors
/// Returns an error when the output cannot be opened, serialized or written.
pub fn emit(reports: &[DocumentReport], config: &Config) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(config)?;
    render(reports, config, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render reports in the configured format.
///
/// # Errors
/// Returns an error when serialization or writing fails.
pub fn render(
    reports: &[DocumentReport],
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match config.format {
        OutputFormat::Table => output_table(reports, config.listings, out),
        OutputFormat::Csv => output_delimited(reports, ',', out),
        OutputFormat::Tsv => output_delimited(reports, '\t', out),
        OutputFormat::Json => output_json(reports, out),
        OutputFormat::Jsonl => output_jsonl(reports, out),
        OutputFormat::Yaml => output_yaml(reports, out),
        OutputFormat::Md => output_markdown(reports, config.listings, out),
    }
}

struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    fn create(config: &Config) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output_path {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

fn output_table(
    reports: &[DocumentReport],
    listings: Listings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "docstat v{}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>8}\t{:>10}\t{:>10}\t{:>6}\t{:>6}\t{:>5}\tDOCUMENT",
        "WORDS", "CHARS", "NO-SPACE", "IMAGES", "EMOJI", "URLS"
    )?;
    writeln!(out, "----------------------------------------------")?;
    for r in reports {
        writeln!(
            out,
            "{:>8}\t{:>10}\t{:>10}\t{:>6}\t{:>6}\t{:>5}\t{}",
            r.content.word_count(),
            r.content.total_characters(),
            r.content.characters_without_spaces(),
            r.content.image_count(),
            r.content.emoji_count(),
            r.content.urls().len(),
            r.source
        )?;
    }
    writeln!(out, "---")?;
    let s = Summary::from_reports(reports);
    writeln!(
        out,
        "{:>8}\t{:>10}\t{:>10}\t{:>6}\t{:>6}\t{:>5}\tTOTAL ({} documents)",
        s.words, s.chars, s.chars_no_spaces, s.images, s.emoji, s.urls, s.documents
    )?;

    if listings.any() {
        for r in reports {
            write_listings(r, listings, out)?;
        }
    }
    Ok(())
}

fn write_listings(
    report: &DocumentReport,
    listings: Listings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "[{}]", report.source)?;
    if listings.words {
        writeln!(out, "words: {}", report.content.word_list().join(" "))?;
    }
    if listings.urls {
        for url in report.content.urls() {
            writeln!(out, "url: {url}")?;
        }
    }
    if listings.rows {
        for (i, row) in report.rows.iter().flatten().enumerate() {
            writeln!(out, "row {i}: {}", row.replace('\n', " ").trim_end())?;
        }
    }
    Ok(())
}

fn output_delimited(
    reports: &[DocumentReport],
    sep: char,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "words{sep}chars{sep}chars_no_spaces{sep}images{sep}emoji{sep}urls{sep}document"
    )?;
    for r in reports {
        writeln!(
            out,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            r.content.word_count(),
            r.content.total_characters(),
            r.content.characters_without_spaces(),
            r.content.image_count(),
            r.content.emoji_count(),
            r.content.urls().len(),
            escape_field(&r.source.to_string(), sep)
        )?;
    }
    Ok(())
}

fn escape_field(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

fn output_json(reports: &[DocumentReport], out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

fn output_jsonl(reports: &[DocumentReport], out: &mut impl Write) -> anyhow::Result<()> {
    for r in reports {
        let mut v = serde_json::to_value(r)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_owned(), "document".into());
        }
        writeln!(out, "{}", serde_json::to_string(&v)?)?;
    }

    let s = Summary::from_reports(reports);
    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "documents": s.documents,
        "words": s.words,
        "chars": s.chars,
        "chars_no_spaces": s.chars_no_spaces,
        "images": s.images,
        "emoji": s.emoji,
        "urls": s.urls,
    });
    writeln!(out, "{total}")?;
    Ok(())
}

fn output_yaml(reports: &[DocumentReport], out: &mut impl Write) -> anyhow::Result<()> {
    serde_yaml::to_writer(&mut *out, reports)?;
    Ok(())
}

fn output_markdown(
    reports: &[DocumentReport],
    listings: Listings,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "### Document Statistics")?;
    writeln!(out)?;
    writeln!(out, "| Words | Chars | Chars (no spaces) | Images | Emoji | URLs | Document |")?;
    writeln!(out, "|:---:|:---:|:---:|:---:|:---:|:---:|:---|")?;
    for r in reports {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} |",
            r.content.word_count(),
            r.content.total_characters(),
            r.content.characters_without_spaces(),
            r.content.image_count(),
            r.content.emoji_count(),
            r.content.urls().len(),
            r.source.to_string().replace('|', "\\|")
        )?;
    }

    if listings.words {
        writeln!(out)?;
        writeln!(out, "### Words")?;
        writeln!(out)?;
        for r in reports {
            writeln!(out, "- {}: {}", r.source, r.content.word_list().join(" "))?;
        }
    }
    if listings.urls {
        writeln!(out)?;
        writeln!(out, "### Links")?;
        writeln!(out)?;
        for r in reports {
            for url in r.content.urls() {
                writeln!(out, "- <{url}> ({})", r.source)?;
            }
        }
    }
    if listings.rows {
        writeln!(out)?;
        writeln!(out, "### Table Rows")?;
        for r in reports {
            writeln!(out)?;
            writeln!(out, "#### {}", r.source)?;
            writeln!(out)?;
            for row in r.rows.iter().flatten() {
                writeln!(out, "1. {}", row.replace('\n', " ").trim_end())?;
            }
        }
    }
    writeln!(out)?;
    Ok(())
}
