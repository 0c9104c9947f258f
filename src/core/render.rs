use crate::core::{FrequencyReport, ReportFormat};
use crate::utils::error::Result;
use std::io::Write;

pub fn write_report<W: Write>(
    report: &FrequencyReport,
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for entry in &report.entries {
                writeln!(out, "{}", entry)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => write_delimited(report, b',', out)?,
        ReportFormat::Tsv => write_delimited(report, b'\t', out)?,
    }
    out.flush()?;
    Ok(())
}

fn write_delimited<W: Write>(report: &FrequencyReport, delimiter: u8, out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    writer.write_record(["word", "count"])?;
    for entry in &report.entries {
        let count = entry.count.to_string();
        writer.write_record([entry.word.as_str(), count.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn render_report(report: &FrequencyReport, format: ReportFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(report, format, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word_frequency::WordFrequencyReporter;

    fn sample() -> FrequencyReport {
        WordFrequencyReporter::default().report("Serve errors, serve.")
    }

    #[test]
    fn test_text_format() {
        let output = render_report(&sample(), ReportFormat::Text).unwrap();
        assert_eq!(
            output,
            "word \"errors,\" appears 1\nword \"serve\" appears 2\n"
        );
    }

    #[test]
    fn test_csv_quotes_commas() {
        let output = render_report(&sample(), ReportFormat::Csv).unwrap();
        assert_eq!(output, "word,count\n\"errors,\",1\nserve,2\n");
    }

    #[test]
    fn test_tsv_format() {
        let output = render_report(&sample(), ReportFormat::Tsv).unwrap();
        assert_eq!(output, "word\tcount\nerrors,\t1\nserve\t2\n");
    }

    #[test]
    fn test_json_format() {
        let output = render_report(&sample(), ReportFormat::Json).unwrap();
        let parsed: FrequencyReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
        assert!(output.contains("\"counting\": \"substring\""));
    }
}
