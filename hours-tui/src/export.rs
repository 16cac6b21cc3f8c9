use anyhow::{Context, Result};
use hours_client::Entry;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADER: [&str; 8] = [
    "id",
    "date",
    "day",
    "start_time",
    "end_time",
    "total_hours",
    "pay",
    "note",
];

/// `work_hours_<date>.csv`
pub fn default_file_name(today: &str) -> PathBuf {
    PathBuf::from(format!("work_hours_{}.csv", today))
}

/// Write every entry as one CSV record after a header row.
pub fn write_entries<W: Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for entry in entries {
        wtr.write_record([
            entry.id.map(|id| id.to_string()).unwrap_or_default(),
            entry.date.clone(),
            entry.day.clone(),
            entry.start_time.clone(),
            entry.end_time.clone(),
            amount(entry.total_hours),
            amount(entry.pay),
            entry.note.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_to_path(path: &Path, entries: &[Entry]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_entries(file, entries)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    tracing::info!("Exported {} entries to {}", entries.len(), path.display());
    Ok(())
}

fn amount(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: Option<i64>, note: Option<&str>, pay: Option<f64>) -> Entry {
        Entry {
            id,
            date: "2026-10-16".to_string(),
            day: "Friday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            total_hours: Some(8.0),
            pay,
            note: note.map(str::to_string),
        }
    }

    fn render(entries: &[Entry]) -> String {
        let mut out = Vec::new();
        write_entries(&mut out, entries).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_one_row_per_entry() {
        let csv = render(&[entry(Some(1), Some("shift"), Some(112.0))]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "id,date,day,start_time,end_time,total_hours,pay,note"
        );
        assert_eq!(lines[1], "1,2026-10-16,Friday,09:00,17:00,8.00,112.00,shift");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn missing_values_are_empty_and_notes_are_quoted() {
        let csv = render(&[entry(None, Some("late, then \"overtime\""), None)]);

        assert_eq!(
            csv.lines().nth(1),
            Some(",2026-10-16,Friday,09:00,17:00,8.00,,\"late, then \"\"overtime\"\"\"")
        );
    }

    #[test]
    fn empty_list_writes_only_header() {
        assert_eq!(render(&[]).lines().count(), 1);
    }

    #[test]
    fn exports_to_file_named_after_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_file_name("2026-10-16"));
        export_to_path(&path, &[entry(Some(2), None, Some(56.0))]).unwrap();

        assert!(path.ends_with("work_hours_2026-10-16.csv"));
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "2");
        assert_eq!(&records[0][6], "56.00");
    }
}
