#![allow(dead_code)]

use payouts::prelude::*;

/// Generate a payout report CSV with `rows` entries spread over `days` days
pub fn generate_report(rows: usize, days: u32) -> String {
    let mut csv = String::from("date,name,amount\n");
    let days = days.max(1);

    for i in 0..rows {
        let day = (i as u32 % days) + 1;
        csv.push_str(&format!("2025-05-{:02},Payee {},{}\n", day, i, (i % 10_000) + 1));
    }

    csv
}

/// In-memory source serving `reports` identical generated reports
pub fn memory_source(reports: u32, rows: usize) -> MemoryReportSource {
    let body = generate_report(rows, 7);
    (1..=reports).fold(MemoryReportSource::new(), |source, id| {
        source.with_report(id, body.as_str())
    })
}
