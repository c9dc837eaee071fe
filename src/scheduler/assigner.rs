//! Greedy parallel-machine list scheduling.
//!
//! # Algorithm
//!
//! 1. Start `m` machines free at t=0.
//! 2. For each job in the given order, pick the machine with the smallest
//!    available time, lowest id on ties.
//! 3. Place the job at `[available, available + duration)` and advance the machine.
//!
//! Machines never idle between jobs, so the busy time of each machine equals
//! its final available time.
//!
//! # Complexity
//! `LinearScan`: O(n * m). `MinHeap`: O(n log m). Both give identical output.
//!
//! # Reference
//! Graham (1966), "Bounds for certain multiprocessing anomalies"

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Job, Machine, Schedule, ScheduledJob};

/// How the next machine is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MachineSelection {
    /// Scan all machines for the first minimal available time.
    #[default]
    LinearScan,
    /// Binary heap keyed by `(available_time, id)`.
    MinHeap,
}

/// Assigns ordered jobs to simulated parallel machines.
///
/// Holds configuration only; every call to [`assign`](Self::assign) runs a
/// fresh simulation, so one assigner can be shared across threads.
///
/// # Example
///
/// ```
/// use job_schedule::models::Job;
/// use job_schedule::scheduler::MachineAssigner;
///
/// let jobs = vec![Job::new(0, 5), Job::new(1, 3), Job::new(2, 8)];
/// let schedule = MachineAssigner::new(2).unwrap().assign(&jobs).unwrap();
/// let job2 = schedule.entry_for_job(2).unwrap();
/// assert_eq!((job2.start_time, job2.end_time, job2.machine_id), (3, 11, 1));
/// ```
#[derive(Debug, Clone)]
pub struct MachineAssigner {
    machine_count: usize,
    selection: MachineSelection,
}

impl MachineAssigner {
    /// Creates an assigner for `machine_count` machines.
    ///
    /// Fails with `InvalidMachineCount` when `machine_count` is zero.
    pub fn new(machine_count: usize) -> Result<Self, ScheduleError> {
        if machine_count == 0 {
            return Err(ScheduleError::InvalidMachineCount(machine_count));
        }
        Ok(Self {
            machine_count,
            selection: MachineSelection::default(),
        })
    }

    /// Sets the machine selection strategy.
    pub fn with_selection(mut self, selection: MachineSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Number of simulated machines.
    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Schedules `ordered_jobs` in the given order.
    ///
    /// All-or-nothing: on error no partial schedule is returned. Every
    /// duration is checked before the simulation starts, so machine
    /// available times never move backwards.
    pub fn assign(&self, ordered_jobs: &[Job]) -> Result<Schedule, ScheduleError> {
        if let Some(job) = ordered_jobs.iter().find(|j| j.duration <= 0) {
            return Err(ScheduleError::InvalidJobDuration {
                job_id: job.id,
                duration: job.duration,
            });
        }
        match self.selection {
            MachineSelection::LinearScan => self.assign_linear(ordered_jobs),
            MachineSelection::MinHeap => self.assign_heap(ordered_jobs),
        }
    }

    fn assign_linear(&self, ordered_jobs: &[Job]) -> Result<Schedule, ScheduleError> {
        let mut machines: Vec<Machine> = (0..self.machine_count).map(Machine::new).collect();
        let mut schedule = Schedule::new(self.machine_count);

        for job in ordered_jobs {
            // `min_by_key` keeps the first minimum, i.e. the lowest id.
            let machine = machines
                .iter_mut()
                .min_by_key(|m| m.available_time)
                .ok_or(ScheduleError::InvalidMachineCount(self.machine_count))?;
            let (start, end) = machine
                .occupy(job.duration)
                .ok_or(ScheduleError::TimeOverflow { job_id: job.id })?;
            schedule.add_entry(place(job, start, end, machine.id));
        }

        Ok(schedule)
    }

    fn assign_heap(&self, ordered_jobs: &[Job]) -> Result<Schedule, ScheduleError> {
        let mut free: BinaryHeap<Reverse<(i64, usize)>> =
            (0..self.machine_count).map(|id| Reverse((0, id))).collect();
        let mut schedule = Schedule::new(self.machine_count);

        for job in ordered_jobs {
            let Reverse((available_time, id)) = free
                .pop()
                .ok_or(ScheduleError::InvalidMachineCount(self.machine_count))?;
            let mut machine = Machine { id, available_time };
            let (start, end) = machine
                .occupy(job.duration)
                .ok_or(ScheduleError::TimeOverflow { job_id: job.id })?;
            schedule.add_entry(place(job, start, end, id));
            free.push(Reverse((machine.available_time, id)));
        }

        Ok(schedule)
    }
}

fn place(job: &Job, start: i64, end: i64, machine_id: usize) -> ScheduledJob {
    debug!(job = job.id, machine = machine_id, start, end, "assigned");
    ScheduledJob {
        job: job.clone(),
        start_time: start,
        end_time: end,
        machine_id,
    }
}

/// Schedules `ordered_jobs` on `machine_count` machines with a linear scan.
pub fn assign(ordered_jobs: &[Job], machine_count: usize) -> Result<Schedule, ScheduleError> {
    MachineAssigner::new(machine_count)?.assign(ordered_jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn triple(schedule: &Schedule) -> Vec<(usize, i64, i64, usize)> {
        schedule
            .entries
            .iter()
            .map(|e| (e.job.id, e.start_time, e.end_time, e.machine_id))
            .collect()
    }

    fn jobs(durations: &[i64]) -> Vec<Job> {
        durations
            .iter()
            .enumerate()
            .map(|(id, &d)| Job::new(id, d))
            .collect()
    }

    fn random_jobs(rng: &mut StdRng, n: usize) -> Vec<Job> {
        (0..n)
            .map(|id| Job::new(id, rng.random_range(1..20)))
            .collect()
    }

    #[test]
    fn test_zero_machines_rejected() {
        assert_eq!(
            MachineAssigner::new(0).unwrap_err(),
            ScheduleError::InvalidMachineCount(0)
        );
        assert_eq!(
            assign(&jobs(&[1]), 0).unwrap_err(),
            ScheduleError::InvalidMachineCount(0)
        );
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        for bad in [0, -3] {
            let ordered = vec![Job::new(0, 5), Job::new(1, bad), Job::new(2, 4)];
            for selection in [MachineSelection::LinearScan, MachineSelection::MinHeap] {
                let err = MachineAssigner::new(2)
                    .unwrap()
                    .with_selection(selection)
                    .assign(&ordered)
                    .unwrap_err();
                assert_eq!(
                    err,
                    ScheduleError::InvalidJobDuration {
                        job_id: 1,
                        duration: bad
                    }
                );
            }
        }
    }

    #[test]
    fn test_deserialized_job_checked() {
        let job: Job = serde_json::from_str(
            r#"{"id":0,"name":"x","duration":-7,"priority":0,"deadline":0}"#,
        )
        .unwrap();
        assert!(matches!(
            assign(&[job], 1),
            Err(ScheduleError::InvalidJobDuration { job_id: 0, duration: -7 })
        ));
    }

    #[test]
    fn test_zero_machines_reported_by_both_strategies() {
        // Bypasses `new` to reach the selection loops with no machines.
        for selection in [MachineSelection::LinearScan, MachineSelection::MinHeap] {
            let assigner = MachineAssigner {
                machine_count: 0,
                selection,
            };
            assert_eq!(
                assigner.assign(&jobs(&[1])).unwrap_err(),
                ScheduleError::InvalidMachineCount(0)
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let schedule = assign(&[], 3).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.machine_count, 3);
    }

    #[test]
    fn test_single_machine_sequential() {
        // SJF order [1, 0, 2] of durations 5, 3, 8.
        let ordered = vec![Job::new(1, 3), Job::new(0, 5), Job::new(2, 8)];
        let schedule = assign(&ordered, 1).unwrap();
        assert_eq!(
            triple(&schedule),
            vec![(1, 0, 3, 0), (0, 3, 8, 0), (2, 8, 16, 0)]
        );
    }

    #[test]
    fn test_two_machines_earliest_free() {
        let schedule = assign(&jobs(&[5, 3, 8]), 2).unwrap();
        assert_eq!(
            triple(&schedule),
            vec![(0, 0, 5, 0), (1, 0, 3, 1), (2, 3, 11, 1)]
        );
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        // After the first round all three machines are free at 4.
        let schedule = assign(&jobs(&[4, 4, 4, 1, 1]), 3).unwrap();
        assert_eq!(schedule.entries[3].machine_id, 0);
        assert_eq!(schedule.entries[4].machine_id, 1);

        let heap = MachineAssigner::new(3)
            .unwrap()
            .with_selection(MachineSelection::MinHeap)
            .assign(&jobs(&[4, 4, 4, 1, 1]))
            .unwrap();
        assert_eq!(heap, schedule);
    }

    #[test]
    fn test_more_machines_than_jobs() {
        let schedule = assign(&jobs(&[2, 7]), 5).unwrap();
        assert_eq!(triple(&schedule), vec![(0, 0, 2, 0), (1, 0, 7, 1)]);
        assert_eq!(schedule.machine_completion_time(4), 0);
    }

    #[test]
    fn test_overflow_reported() {
        let ordered = vec![Job::new(0, i64::MAX), Job::new(1, 1)];
        for selection in [MachineSelection::LinearScan, MachineSelection::MinHeap] {
            let err = MachineAssigner::new(1)
                .unwrap()
                .with_selection(selection)
                .assign(&ordered)
                .unwrap_err();
            assert_eq!(err, ScheduleError::TimeOverflow { job_id: 1 });
        }
    }

    #[test]
    fn test_heap_matches_linear_scan() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let n = rng.random_range(0..30);
            let m = rng.random_range(1..8);
            let ordered = random_jobs(&mut rng, n);
            let linear = MachineAssigner::new(m).unwrap().assign(&ordered).unwrap();
            let heap = MachineAssigner::new(m)
                .unwrap()
                .with_selection(MachineSelection::MinHeap)
                .assign(&ordered)
                .unwrap();
            assert_eq!(linear, heap);
        }
    }

    #[test]
    fn test_schedule_invariants() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let n = rng.random_range(1..40);
            let m = rng.random_range(1..6);
            let ordered = random_jobs(&mut rng, n);
            let schedule = assign(&ordered, m).unwrap();

            // Every job exactly once, in the given order.
            let out: Vec<usize> = schedule.entries.iter().map(|e| e.job.id).collect();
            assert_eq!(out, (0..n).collect::<Vec<_>>());

            for e in &schedule.entries {
                assert_eq!(e.end_time - e.start_time, e.job.duration);
                assert!(e.machine_id < m);
            }

            for machine in 0..m {
                let on_machine = schedule.entries_for_machine(machine);
                // Gapless and non-overlapping, starting at 0.
                let mut expected_start = 0;
                for e in &on_machine {
                    assert_eq!(e.start_time, expected_start);
                    expected_start = e.end_time;
                }
                for (i, a) in on_machine.iter().enumerate() {
                    for b in &on_machine[i + 1..] {
                        assert!(!a.overlaps(b));
                    }
                }
            }

            let total: i64 = ordered.iter().map(|j| j.duration).sum();
            let packed: i64 = (0..m).map(|id| schedule.machine_completion_time(id)).sum();
            assert_eq!(total, packed);
        }
    }

    #[test]
    fn test_single_machine_chains() {
        let mut rng = StdRng::seed_from_u64(99);
        let ordered = random_jobs(&mut rng, 25);
        let schedule = assign(&ordered, 1).unwrap();
        assert_eq!(schedule.entries[0].start_time, 0);
        for pair in schedule.entries.windows(2) {
            assert_eq!(pair[1].start_time, pair[0].end_time);
        }
    }

    #[test]
    fn test_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let ordered = random_jobs(&mut rng, 20);
        let first = assign(&ordered, 3).unwrap();
        let second = assign(&ordered, 3).unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
