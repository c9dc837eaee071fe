use std::fmt::Write;

use job_schedule::models::Schedule;
use job_schedule::scheduler::ScheduleKpi;

/// One line per entry: `name, start, end[, machine]`.
///
/// The machine column is left out for single-machine runs.
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    for e in &schedule.entries {
        if schedule.machine_count > 1 {
            let _ = writeln!(out, "{}, {}, {}, {}", e.job.name, e.start_time, e.end_time, e.machine_id);
        } else {
            let _ = writeln!(out, "{}, {}, {}", e.job.name, e.start_time, e.end_time);
        }
    }
    out
}

/// KPI block: makespan, lateness, on-time rate, flow time, per-machine utilization.
pub fn render_summary(schedule: &Schedule) -> String {
    let kpi = ScheduleKpi::calculate(schedule);
    let mut out = String::new();
    let _ = writeln!(out, "makespan: {}", kpi.makespan);
    let _ = writeln!(
        out,
        "late jobs: {} (total tardiness {}, max {})",
        kpi.late_jobs, kpi.total_tardiness, kpi.max_tardiness
    );
    let _ = writeln!(out, "on-time rate: {:.1}%", kpi.on_time_rate * 100.0);
    let _ = writeln!(out, "avg flow time: {:.2}", kpi.avg_flow_time);
    for (id, util) in kpi.utilization_by_machine.iter().enumerate() {
        let _ = writeln!(out, "machine {id} utilization: {:.1}%", util * 100.0);
    }
    out
}
