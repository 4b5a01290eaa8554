//! Report rendering.
//!
//! Turns a run's [`Statistics`] into a console summary or a multi-section
//! CSV file, and dumps reservation lists as JSON. Nothing here feeds back
//! into construction.

use std::io::Write;

use crate::error::ReportError;
use crate::models::Reservation;
use crate::scheduler::{SeedMode, SelectionPolicy, Statistics};

/// Writes the human-readable run summary.
pub fn write_summary<W: Write>(
    mut out: W,
    stats: &Statistics,
    policy: &SelectionPolicy,
) -> Result<(), ReportError> {
    match policy {
        SelectionPolicy::BestFit => writeln!(out, "  Heuristic: best-fit")?,
        SelectionPolicy::Rcl { alpha, seed } => {
            let seed = match seed {
                SeedMode::Reproducible(seed) => seed.to_string(),
                SeedMode::NonReproducible => "entropy".to_string(),
            };
            writeln!(out, "  Heuristic: rcl (alpha = {alpha:.2}, seed = {seed})")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "PLACEMENT:")?;
    writeln!(
        out,
        "  Meetings placed:     {} / {} ({:.2}%)",
        stats.placed_count(),
        stats.meetings_considered(),
        percent(stats.placement_rate())
    )?;
    writeln!(out, "  Meetings unplaced:   {}", stats.unplaced_count())?;
    writeln!(
        out,
        "  Demand placed:       {} / {} students ({:.2}%)",
        stats.demand_placed(),
        stats.total_demand(),
        percent(stats.demand_rate())
    )?;
    writeln!(
        out,
        "  Average waste:       {:.2} seats/meeting",
        stats.average_waste()
    )?;

    writeln!(out)?;
    writeln!(out, "REFERENCE METRICS:")?;
    writeln!(
        out,
        "  Unallocated students:              {}",
        stats.unallocated_students()
    )?;
    writeln!(
        out,
        "  Idle seats (<50% occupancy):       {}",
        stats.under_utilized_seats()
    )?;
    writeln!(
        out,
        "  Standing students (over capacity): {}",
        stats.standing_students()
    )?;

    if !stats.preference_tallies().is_empty() {
        writeln!(out)?;
        writeln!(out, "PREFERENCES:")?;
        for (category, tally) in stats.preference_tallies() {
            writeln!(out, "  {category}:")?;
            writeln!(out, "    Total:     {}", tally.total)?;
            writeln!(
                out,
                "    Satisfied: {} ({:.2}%)",
                tally.satisfied,
                percent(tally.satisfaction_rate())
            )?;
            writeln!(out, "    Violated:  {}", tally.violated)?;
        }
    }
    Ok(())
}

/// Writes the statistics as a multi-section CSV document.
///
/// Sections: general metrics, preferences per category, occupancy per
/// classroom, occupancy per day, waste distribution, demand per
/// (day, slot). Each section starts with a one-field title row.
pub fn write_csv<W: Write>(out: W, stats: &Statistics) -> Result<(), ReportError> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(out);

    csv.write_record(["Metric", "Value"])?;
    let general = [
        ("Meetings Placed", stats.placed_count().to_string()),
        ("Meetings Total", stats.meetings_considered().to_string()),
        ("Placement Rate (%)", format!("{:.2}", percent(stats.placement_rate()))),
        ("Demand Placed", stats.demand_placed().to_string()),
        ("Demand Total", stats.total_demand().to_string()),
        ("Demand Rate (%)", format!("{:.2}", percent(stats.demand_rate()))),
        ("Average Waste", format!("{:.2}", stats.average_waste())),
        ("Unallocated Students", stats.unallocated_students().to_string()),
        ("Under-utilized Seats", stats.under_utilized_seats().to_string()),
        ("Standing Students", stats.standing_students().to_string()),
    ];
    for (name, value) in &general {
        csv.write_record([*name, value.as_str()])?;
    }

    csv.write_record(["Preferences per Category"])?;
    csv.write_record(["Category", "Total", "Satisfied", "Rate (%)"])?;
    for (category, tally) in stats.preference_tallies() {
        csv.write_record([
            category.to_string(),
            tally.total.to_string(),
            tally.satisfied.to_string(),
            format!("{:.2}", percent(tally.satisfaction_rate())),
        ])?;
    }

    csv.write_record(["Occupancy per Classroom"])?;
    csv.write_record(["ClassroomId", "Meetings", "Demand", "Capacity", "Utilization (%)"])?;
    for (id, usage) in stats.classroom_usage() {
        csv.write_record([
            id.to_string(),
            usage.meetings.to_string(),
            usage.demand.to_string(),
            usage.capacity.to_string(),
            format!("{:.2}", percent(usage.utilization())),
        ])?;
    }

    csv.write_record(["Occupancy per Day"])?;
    csv.write_record(["DayOfWeek", "Meetings", "Demand"])?;
    for (day, usage) in stats.day_usage() {
        csv.write_record([
            day.to_string(),
            usage.meetings.to_string(),
            usage.demand.to_string(),
        ])?;
    }

    csv.write_record(["Waste Distribution"])?;
    csv.write_record(["Waste"])?;
    for waste in stats.waste_values() {
        csv.write_record([waste.to_string()])?;
    }

    csv.write_record(["Demand per Day and Slot"])?;
    csv.write_record(["DayOfWeek", "SlotId", "Demand"])?;
    for ((day, slot), demand) in stats.slot_demand() {
        csv.write_record([day.to_string(), slot.to_string(), demand.to_string()])?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes `reservations` as a pretty-printed JSON array.
pub fn write_reservations_json<W: Write>(
    mut out: W,
    reservations: &[Reservation],
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut out, reservations)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn percent(fraction: f64) -> f64 {
    fraction * 100.0
}
