use std::time::{Duration, Instant};

/// Frame counter that publishes a frames-per-second figure once per second.
#[derive(Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Option<Instant>,
    published: Option<u32>,
}

const PUBLISH_WINDOW: Duration = Duration::from_secs(1);

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            window_start: None,
            published: None,
        }
    }

    /// Record one frame at the current time.
    pub fn frame(&mut self) -> Option<u32> {
        self.frame_at(Instant::now())
    }

    /// Record one frame at an explicit time. The published figure only
    /// changes when a full window has elapsed.
    pub fn frame_at(&mut self, now: Instant) -> Option<u32> {
        let Some(start) = self.window_start else {
            // First frame opens the measurement window.
            self.window_start = Some(now);
            return self.published;
        };

        self.frames += 1;
        let elapsed = now - start;
        if elapsed >= PUBLISH_WINDOW {
            self.published = Some((self.frames as f64 / elapsed.as_secs_f64()).round() as u32);
            self.frames = 0;
            self.window_start = Some(now);
        }
        self.published
    }

    pub fn current(&self) -> Option<u32> {
        self.published
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the window title from the renderer title, the GPU name once the
/// backend has resolved one, and the published FPS figure.
pub fn compose_title(base: &str, gpu_name: Option<&str>, fps: Option<u32>) -> String {
    let mut title = base.to_owned();
    if let Some(gpu) = gpu_name {
        title.push(' ');
        title.push_str(gpu);
    }
    if let Some(fps) = fps {
        title.push_str(&format!(" ({fps} FPS)"));
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_published_inside_first_window() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        for i in 0..10 {
            let published = counter.frame_at(start + Duration::from_millis(i * 50));
            assert_eq!(published, None);
        }
    }

    #[test]
    fn publishes_after_one_second() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        // 60 frames over one second, then one more frame past the window.
        for i in 0..60 {
            counter.frame_at(start + Duration::from_millis(i * 1000 / 60));
        }
        let published = counter.frame_at(start + Duration::from_millis(1000));
        assert_eq!(published, Some(60));
    }

    #[test]
    fn title_composition() {
        assert_eq!(compose_title("demo", None, None), "demo");
        assert_eq!(compose_title("demo", Some("RTX 4070"), None), "demo RTX 4070");
        assert_eq!(
            compose_title("demo", Some("RTX 4070"), Some(60)),
            "demo RTX 4070 (60 FPS)"
        );
        assert_eq!(compose_title("demo", None, Some(144)), "demo (144 FPS)");
    }
}
