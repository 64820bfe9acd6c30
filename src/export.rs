use crate::model::Schedule;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Export CSV du planning : header `date,week,staff,task,kind`, une ligne
/// par shift, lignes triées par date.
pub fn schedule_to_csv_string(schedule: &Schedule) -> Result<String> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["date", "week", "staff", "task", "kind"])?;
    for (date, shifts) in schedule.days() {
        let date = date.to_string();
        for s in shifts {
            let week = s.week.to_string();
            w.write_record([
                date.as_str(),
                week.as_str(),
                s.staff.as_str(),
                s.label.as_str(),
                s.kind.as_str(),
            ])?;
        }
    }
    let bytes = w.into_inner().context("flushing csv buffer")?;
    String::from_utf8(bytes).context("csv output not utf-8")
}

/// Export ICS du planning : un VEVENT « journée entière » par shift, UID
/// déterministe, fins de ligne CRLF. Chaque évènement est autoporteur, la
/// sortie suit l'ordre d'itération du planning.
pub fn schedule_to_ics_string(schedule: &Schedule) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, "PRODID:-//rotaplan//planning//FR");
    push_line(&mut out, "CALSCALE:GREGORIAN");

    for (date, shifts) in schedule.days() {
        let stamp = date.format("%Y%m%d").to_string();
        for (index, shift) in shifts.iter().enumerate() {
            push_line(&mut out, "BEGIN:VEVENT");
            push_line(&mut out, &format!("UID:{stamp}-{index}@rotaplan"));
            push_line(&mut out, &format!("DTSTART;VALUE=DATE:{stamp}"));
            push_line(
                &mut out,
                &format!(
                    "SUMMARY:{} ({})",
                    escape_ics(&shift.label),
                    escape_ics(shift.staff.as_str())
                ),
            );
            push_line(
                &mut out,
                &format!("DESCRIPTION:{} / semaine {}", shift.kind.as_str(), shift.week),
            );
            push_line(&mut out, "END:VEVENT");
        }
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push_str("\r\n");
}

/// Échappement texte RFC 5545 (backslash, virgule, point-virgule, saut de
/// ligne).
fn escape_ics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let s = schedule_to_csv_string(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

pub fn export_schedule_ics<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    fs::write(path, schedule_to_ics_string(schedule))?;
    Ok(())
}
