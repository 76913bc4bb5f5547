use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const FADE_DELAY: Duration = Duration::from_millis(500);
const MAX_INCREMENT: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Preloader {
    progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreloaderTick {
    Loading { progress: f64, status: &'static str },
    Complete,
}

impl Preloader {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    /// Advances by `sample * 20` where `sample` is a uniform draw in `[0, 1)`.
    pub fn advance(&mut self, sample: f64) -> PreloaderTick {
        let increment = sample.clamp(0.0, 1.0) * MAX_INCREMENT;
        self.progress = (self.progress + increment).min(100.0);

        if self.is_complete() {
            PreloaderTick::Complete
        } else {
            PreloaderTick::Loading {
                progress: self.progress,
                status: status_text(self.progress),
            }
        }
    }
}

pub fn status_text(progress: f64) -> &'static str {
    if progress < 33.0 {
        "Loading Portfolio..."
    } else if progress < 66.0 {
        "Initializing Components..."
    } else {
        "Almost There..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_at_one_hundred() {
        let mut preloader = Preloader::default();
        let mut ticks = 0;

        while preloader.advance(0.99) != PreloaderTick::Complete {
            ticks += 1;
            assert!(ticks < 10);
        }

        assert_eq!(preloader.progress(), 100.0);
        assert_eq!(preloader.advance(0.5), PreloaderTick::Complete);
    }

    #[test]
    fn zero_samples_never_finish() {
        let mut preloader = Preloader::default();
        for _ in 0..50 {
            assert!(matches!(preloader.advance(0.0), PreloaderTick::Loading { .. }));
        }
    }

    #[test]
    fn status_text_follows_thirds() {
        assert_eq!(status_text(10.0), "Loading Portfolio...");
        assert_eq!(status_text(33.0), "Initializing Components...");
        assert_eq!(status_text(66.0), "Almost There...");
    }
}
