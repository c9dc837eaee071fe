//! Schedule (solution) model.
//!
//! A schedule is the ordered list of job-to-machine-and-interval
//! assignments produced by one run. Entries appear in assignment order,
//! which is the order the policy produced.

use serde::{Deserialize, Serialize};

use super::Job;

/// A job placed on a machine for the half-open interval `[start_time, end_time)`.
///
/// `end_time - start_time == job.duration` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// The scheduled job.
    pub job: Job,
    /// Start time.
    pub start_time: i64,
    /// End time (start + duration).
    pub end_time: i64,
    /// Assigned machine, in `0..machine_count`.
    pub machine_id: usize,
}

/// A job that finishes after its deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineMiss {
    pub job_id: usize,
    pub name: String,
    pub deadline: i64,
    pub end_time: i64,
    /// `end_time - deadline`, always positive.
    pub tardiness: i64,
}

/// A complete schedule for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of machines the run simulated.
    pub machine_count: usize,
    /// Entries in assignment order.
    pub entries: Vec<ScheduledJob>,
}

impl ScheduledJob {
    /// Creates an entry for `job` starting at `start_time`.
    ///
    /// Returns `None` if the end time overflows.
    pub fn new(job: Job, start_time: i64, machine_id: usize) -> Option<Self> {
        let end_time = start_time.checked_add(job.duration)?;
        Some(Self {
            job,
            start_time,
            end_time,
            machine_id,
        })
    }

    /// Occupied time (`end - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this entry finishes after the job's deadline.
    #[inline]
    pub fn is_late(&self) -> bool {
        self.end_time > self.job.deadline
    }

    /// Whether `[start, end)` intersects the other entry's interval.
    pub fn overlaps(&self, other: &ScheduledJob) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl Schedule {
    /// Creates an empty schedule for `machine_count` machines.
    pub fn new(machine_count: usize) -> Self {
        Self {
            machine_count,
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduledJob) {
        self.entries.push(entry);
    }

    /// Number of scheduled jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makespan: latest end time across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end_time).max().unwrap_or(0)
    }

    /// Finds the entry for a given job.
    pub fn entry_for_job(&self, job_id: usize) -> Option<&ScheduledJob> {
        self.entries.iter().find(|e| e.job.id == job_id)
    }

    /// Returns all entries on a given machine, in assignment order.
    pub fn entries_for_machine(&self, machine_id: usize) -> Vec<&ScheduledJob> {
        self.entries
            .iter()
            .filter(|e| e.machine_id == machine_id)
            .collect()
    }

    /// Total processing time assigned to a machine.
    pub fn machine_busy_time(&self, machine_id: usize) -> i64 {
        self.entries_for_machine(machine_id)
            .iter()
            .map(|e| e.duration())
            .sum()
    }

    /// Final available time of a machine (last end time, or 0 if idle).
    pub fn machine_completion_time(&self, machine_id: usize) -> i64 {
        self.entries_for_machine(machine_id)
            .iter()
            .map(|e| e.end_time)
            .max()
            .unwrap_or(0)
    }

    /// Machine utilization: busy time / makespan.
    ///
    /// Returns `None` if the makespan is zero or the machine is out of range.
    pub fn machine_utilization(&self, machine_id: usize) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 || machine_id >= self.machine_count {
            return None;
        }
        Some(self.machine_busy_time(machine_id) as f64 / horizon as f64)
    }

    /// Utilization of every machine, indexed by machine id.
    ///
    /// Empty when the makespan is zero.
    pub fn all_utilizations(&self) -> Vec<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return Vec::new();
        }
        let mut busy = vec![0i64; self.machine_count];
        for e in &self.entries {
            if let Some(slot) = busy.get_mut(e.machine_id) {
                *slot += e.duration();
            }
        }
        busy.into_iter()
            .map(|b| b as f64 / horizon as f64)
            .collect()
    }

    /// Jobs that finish after their deadline, in assignment order.
    ///
    /// Reporting only: ordering and assignment never look at this.
    pub fn deadline_misses(&self) -> Vec<DeadlineMiss> {
        self.entries
            .iter()
            .filter(|e| e.is_late())
            .map(|e| DeadlineMiss {
                job_id: e.job.id,
                name: e.job.name.clone(),
                deadline: e.job.deadline,
                end_time: e.end_time,
                tardiness: e.job.tardiness_at(e.end_time),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: usize, duration: i64, start: i64, machine: usize) -> ScheduledJob {
        ScheduledJob::new(Job::new(id, duration).with_deadline(6), start, machine).unwrap()
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new(2);
        s.add_entry(entry(0, 5, 0, 0));
        s.add_entry(entry(1, 3, 0, 1));
        s.add_entry(entry(2, 8, 3, 1));
        s
    }

    #[test]
    fn test_schedule_makespan() {
        assert_eq!(sample_schedule().makespan(), 11);
    }

    #[test]
    fn test_entry_duration() {
        let e = entry(0, 5, 10, 0);
        assert_eq!(e.end_time, 15);
        assert_eq!(e.duration(), 5);
    }

    #[test]
    fn test_entry_overflow() {
        assert!(ScheduledJob::new(Job::new(0, 2), i64::MAX - 1, 0).is_none());
    }

    #[test]
    fn test_overlaps_half_open() {
        let a = entry(0, 5, 0, 0);
        let b = entry(1, 3, 5, 0);
        let c = entry(2, 3, 4, 0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_entry_for_job() {
        let s = sample_schedule();
        assert_eq!(s.entry_for_job(2).unwrap().machine_id, 1);
        assert!(s.entry_for_job(99).is_none());
    }

    #[test]
    fn test_entries_for_machine() {
        let s = sample_schedule();
        let m1: Vec<usize> = s.entries_for_machine(1).iter().map(|e| e.job.id).collect();
        assert_eq!(m1, vec![1, 2]);
        assert_eq!(s.machine_busy_time(1), 11);
        assert_eq!(s.machine_completion_time(0), 5);
        assert_eq!(s.machine_completion_time(7), 0);
    }

    #[test]
    fn test_machine_utilization() {
        let s = sample_schedule();
        // M0: 5/11, M1: 11/11
        assert!((s.machine_utilization(0).unwrap() - 5.0 / 11.0).abs() < 1e-10);
        assert!((s.machine_utilization(1).unwrap() - 1.0).abs() < 1e-10);
        assert!(s.machine_utilization(2).is_none());

        let all = s.all_utilizations();
        assert_eq!(all.len(), 2);
        assert!((all[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_deadline_misses() {
        let s = sample_schedule();
        let misses = s.deadline_misses();
        // All deadlines are 6: job 0 ends 5, job 1 ends 3, job 2 ends 11.
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].job_id, 2);
        assert_eq!(misses[0].tardiness, 5);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new(3);
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 0);
        assert!(s.all_utilizations().is_empty());
        assert!(s.deadline_misses().is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
