//! Store install simulation: one download at a time, random progress.

use rand::Rng;

use crate::catalog::LauncherItem;

/// Why an install request did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallRefusal {
    /// Another install is in flight.
    Busy { current: String },
}

/// One poll of the running install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallProgress {
    /// Still downloading; percent so far.
    Running(u8),
    /// Reached 100%; the listing to append.
    Complete(LauncherItem),
}

#[derive(Debug, Clone)]
struct InstallJob {
    listing: LauncherItem,
    progress: u8,
}

/// Tracks the single in-flight install.
#[derive(Debug, Default)]
pub struct Installer {
    job: Option<InstallJob>,
}

impl Installer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    /// Identifier and percent of the running install.
    pub fn current(&self) -> Option<(&str, u8)> {
        self.job
            .as_ref()
            .map(|j| (j.listing.id.as_str(), j.progress))
    }

    pub fn start(&mut self, listing: &LauncherItem) -> Result<(), InstallRefusal> {
        if let Some(job) = &self.job {
            return Err(InstallRefusal::Busy {
                current: job.listing.id.clone(),
            });
        }
        log::info!("Installing {} from store", listing.id);
        self.job = Some(InstallJob {
            listing: listing.clone(),
            progress: 0,
        });
        Ok(())
    }

    /// Add a random 5..=19 percent, clamped to 100. Completes on reaching
    /// 100. Returns `None` when idle.
    pub fn poll<R: Rng>(&mut self, rng: &mut R) -> Option<InstallProgress> {
        let job = self.job.as_mut()?;
        let step: u8 = rng.random_range(5..=19);
        job.progress = job.progress.saturating_add(step).min(100);
        if job.progress < 100 {
            return Some(InstallProgress::Running(job.progress));
        }
        let done = self.job.take()?;
        Some(InstallProgress::Complete(done.listing))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::seed;

    #[test]
    fn progress_is_monotone_to_completion() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut installer = Installer::new();
        let listing = seed::store_items().remove(1);
        installer.start(&listing).unwrap();
        let mut last = 0;
        let mut polls = 0;
        loop {
            polls += 1;
            match installer.poll(&mut rng).unwrap() {
                InstallProgress::Running(p) => {
                    assert!(p > last && p < 100);
                    assert!((5..=19).contains(&(p - last)));
                    last = p;
                },
                InstallProgress::Complete(item) => {
                    assert_eq!(item.id, listing.id);
                    break;
                },
            }
        }
        assert!((6..=20).contains(&polls));
        assert!(!installer.is_busy());
        assert!(installer.poll(&mut rng).is_none());
    }

    #[test]
    fn second_install_refused_while_busy() {
        let mut installer = Installer::new();
        let store = seed::store_items();
        installer.start(&store[0]).unwrap();
        assert_eq!(
            installer.start(&store[1]),
            Err(InstallRefusal::Busy {
                current: "hbo".into()
            })
        );
        assert_eq!(installer.current(), Some(("hbo", 0)));
    }
}
